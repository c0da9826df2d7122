use crate::constants::{
    CONFIG_FILE_NAME, DATA_DIR_NAME, DATA_PATH_ENV, FALLBACK_DATA_DIR_NAME, STORE_FILE_NAME,
    config_key,
};
use crate::launcher::TerminalApp;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// YAML 配置文件的完整结构
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// 打开路径时使用的终端应用
    #[serde(default)]
    pub terminal: TerminalApp,

    /// 日志设置（mode: verbose / concise）
    #[serde(default = "default_log_section")]
    pub log: BTreeMap<String, String>,

    /// 捕获未知的顶级键，保证不丢失任何配置
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,

    /// 数据目录（不序列化，由加载位置决定）
    #[serde(skip)]
    data_dir: PathBuf,
}

fn default_log_section() -> BTreeMap<String, String> {
    let mut log = BTreeMap::new();
    log.insert(config_key::MODE.into(), config_key::CONCISE.into());
    log
}

/// 交给别名存储的配置：存储只关心文件放在哪里
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub support_dir: PathBuf,
}

impl StoreConfig {
    pub fn new(support_dir: impl Into<PathBuf>) -> Self {
        Self {
            support_dir: support_dir.into(),
        }
    }

    /// 别名文件路径: <support_dir>/paths.json
    pub fn store_path(&self) -> PathBuf {
        self.support_dir.join(STORE_FILE_NAME)
    }
}

impl AppConfig {
    /// 获取数据根目录
    /// 优先 $PJ_DATA_PATH，其次系统数据目录，最后 ~/.pathjump
    pub fn default_data_dir() -> PathBuf {
        if let Ok(path) = std::env::var(DATA_PATH_ENV) {
            if !path.is_empty() {
                return PathBuf::from(path);
            }
        }
        if let Some(dir) = dirs::data_dir() {
            return dir.join(DATA_DIR_NAME);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(FALLBACK_DATA_DIR_NAME)
    }

    /// 以指定数据目录创建默认配置（不落盘）
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            terminal: TerminalApp::default(),
            log: default_log_section(),
            extra: BTreeMap::new(),
            data_dir: data_dir.into(),
        }
    }

    /// 从默认数据目录加载
    pub fn load() -> Self {
        Self::load_from(&Self::default_data_dir())
    }

    /// 从指定数据目录加载配置；文件不存在时返回默认配置，解析失败时报错并回退默认值
    pub fn load_from(data_dir: &Path) -> Self {
        let path = data_dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Self::with_data_dir(data_dir);
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                crate::error!("读取配置文件失败: {}, 路径: {:?}", e, path);
                return Self::with_data_dir(data_dir);
            }
        };

        match serde_yaml::from_str::<AppConfig>(&content) {
            Ok(mut config) => {
                config.data_dir = data_dir.to_path_buf();
                config
            }
            Err(e) => {
                crate::error!("解析配置文件失败: {}, 路径: {:?}", e, path);
                Self::with_data_dir(data_dir)
            }
        }
    }

    /// 保存配置到文件
    pub fn save(&self) -> Result<(), String> {
        let path = self.config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| format!("创建配置目录失败: {}", e))?;
        }
        let content =
            serde_yaml::to_string(self).map_err(|e| format!("序列化配置失败: {}", e))?;
        fs::write(&path, content).map_err(|e| format!("{}, 路径: {:?}", e, path))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// 配置文件路径: <data_dir>/config.yaml
    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE_NAME)
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(&self.data_dir)
    }

    /// 是否是 verbose 模式
    pub fn is_verbose(&self) -> bool {
        self.log
            .get(config_key::MODE)
            .is_some_and(|m| m == config_key::VERBOSE)
    }

    /// 切换日志模式，非 verbose 的值一律视为 concise
    pub fn set_log_mode(&mut self, mode: &str) -> &'static str {
        let mode = if mode == config_key::VERBOSE {
            config_key::VERBOSE
        } else {
            config_key::CONCISE
        };
        self.log.insert(config_key::MODE.into(), mode.into());
        mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load_from(dir.path());
        assert_eq!(config.terminal, TerminalApp::Terminal);
        assert!(!config.is_verbose());
        assert_eq!(config.data_dir(), dir.path());
        assert!(!config.config_path().exists());
    }

    #[test]
    fn save_then_load_keeps_settings_and_unknown_keys() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "terminal: iTerm\ntheme: dark\n",
        )
        .unwrap();

        let mut config = AppConfig::load_from(dir.path());
        assert_eq!(config.terminal, TerminalApp::ITerm);
        assert_eq!(config.set_log_mode("verbose"), "verbose");
        config.save().unwrap();

        let reloaded = AppConfig::load_from(dir.path());
        assert!(reloaded.is_verbose());
        assert_eq!(reloaded.terminal, TerminalApp::ITerm);
        assert_eq!(
            reloaded.extra.get("theme"),
            Some(&serde_yaml::Value::String("dark".into()))
        );
    }

    #[test]
    fn broken_yaml_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "terminal: [oops").unwrap();
        let config = AppConfig::load_from(dir.path());
        assert_eq!(config, AppConfig::with_data_dir(dir.path()));
    }

    #[test]
    fn unknown_log_mode_means_concise() {
        let mut config = AppConfig::with_data_dir("/tmp");
        assert_eq!(config.set_log_mode("loud"), "concise");
        assert!(!config.is_verbose());
    }

    #[test]
    fn store_path_lives_in_data_dir() {
        let config = AppConfig::with_data_dir("/data/pj");
        assert_eq!(
            config.store_config().store_path(),
            PathBuf::from("/data/pj").join("paths.json")
        );
    }
}
