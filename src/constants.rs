// 项目全局常量定义
// 所有魔法字符串和可复用常量统一在此维护

// ========== 版本信息 ==========

/// 版本号（自动从 Cargo.toml 读取，编译时确定）
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 项目名称
pub const APP_NAME: &str = "pathjump";

// ========== 数据目录 & 文件 ==========

/// 覆盖数据目录的环境变量
pub const DATA_PATH_ENV: &str = "PJ_DATA_PATH";

/// 数据目录名（位于系统数据目录下）
pub const DATA_DIR_NAME: &str = "pathjump";

/// 无法获取系统数据目录时，在 home 下使用的隐藏目录名
pub const FALLBACK_DATA_DIR_NAME: &str = ".pathjump";

/// 别名存储文件名
pub const STORE_FILE_NAME: &str = "paths.json";

/// 配置文件名
pub const CONFIG_FILE_NAME: &str = "config.yaml";

// ========== 配置 key ==========

/// 配置 key 名称常量
pub mod config_key {
    pub const MODE: &str = "mode";
    pub const VERBOSE: &str = "verbose";
    pub const CONCISE: &str = "concise";
}

// ========== 终端应用 ==========

/// 终端应用名（macOS `open -a` 使用的应用名）
pub mod terminal_app {
    pub const TERMINAL: &str = "Terminal";
    pub const ITERM: &str = "iTerm";
}

/// Linux 下用于打开终端的通用入口（Debian alternatives）
pub const LINUX_TERMINAL_LAUNCHER: &str = "x-terminal-emulator";

// ========== 命令名常量 ==========

/// 所有内置命令的名称和别名，统一在此维护
/// cli.rs 的子命令别名和 command/mod.rs 的 all_command_keywords 共同引用
pub mod cmd {
    pub const ADD: &[&str] = &["add", "a", "set"];
    pub const REMOVE: &[&str] = &["rm", "remove", "del"];
    pub const RENAME: &[&str] = &["rename", "rn", "mv"];
    pub const MODIFY: &[&str] = &["mf", "modify"];
    pub const LIST: &[&str] = &["ls", "list", "search", "find"];
    pub const GO: &[&str] = &["go", "g", "cd"];
    pub const BROWSE: &[&str] = &["browse", "b", "ui"];
    pub const TERM: &[&str] = &["term", "terminal"];
    pub const LOG: &[&str] = &["log"];
    pub const VERSION: &[&str] = &["version", "v"];
    pub const HELP: &[&str] = &["help", "h"];
}
