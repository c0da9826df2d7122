use clap::{Parser, Subcommand};

/// pathjump (pj) - 目录别名 & 一键打开终端 🚀
#[derive(Parser, Debug)]
#[command(name = "pj", version, about = "目录别名管理，一键在终端中打开", long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<SubCmd>,

    /// 当没有匹配到子命令时，收集所有剩余参数（用于别名跳转）
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum SubCmd {
    // ========== 别名管理 ==========
    /// 添加目录别名
    #[command(aliases = ["a", "set"])]
    Add {
        /// 别名
        alias: String,
        /// 目录路径（支持空格，多个参数会拼接）
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        path: Vec<String>,
    },

    /// 删除别名
    #[command(aliases = ["remove", "del"])]
    Rm {
        /// 要删除的别名
        alias: String,
        /// 跳过确认
        #[arg(short, long)]
        yes: bool,
    },

    /// 重命名别名
    #[command(aliases = ["rn", "mv"])]
    Rename {
        /// 原别名
        alias: String,
        /// 新别名
        new_alias: String,
    },

    /// 修改别名对应的目录
    #[command(alias = "modify")]
    Mf {
        /// 别名
        alias: String,
        /// 新目录路径
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        path: Vec<String>,
    },

    // ========== 列表 & 跳转 ==========
    /// 列出别名（可按子串过滤，区分大小写）
    #[command(aliases = ["list", "search", "find"])]
    Ls {
        /// 过滤关键字，匹配别名或路径
        query: Option<String>,
    },

    /// 在终端中打开别名对应的目录
    #[command(aliases = ["g", "cd"])]
    Go {
        /// 别名
        alias: String,
    },

    /// 打开交互式浏览界面
    #[command(aliases = ["b", "ui"])]
    Browse,

    // ========== 系统设置 ==========
    /// 查看或设置终端应用（Terminal / iTerm）
    #[command(alias = "terminal")]
    Term {
        /// 终端应用名，省略时显示当前设置
        app: Option<String>,
    },

    /// 日志模式设置
    Log {
        /// 设置项名称（如 mode）
        key: String,
        /// 设置值（如 verbose/concise）
        value: String,
    },

    // ========== 系统信息 ==========
    /// 版本信息
    #[command(alias = "v")]
    Version,

    /// 帮助信息
    #[command(alias = "h")]
    Help,
}
