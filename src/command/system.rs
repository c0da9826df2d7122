use crate::assets::{HELP_TEXT, VERSION_TEMPLATE};
use crate::config::AppConfig;
use crate::constants::{self, config_key};
use crate::error::{Error, Result};
use crate::launcher::TerminalApp;
use crate::{info, md, usage};

/// 处理 term 命令: pj term [Terminal|iTerm]
pub fn handle_term(app: Option<&str>, config: &mut AppConfig) -> Result<()> {
    let Some(app) = app else {
        info!("当前终端应用: {}", config.terminal);
        let options: Vec<String> = TerminalApp::ALL.iter().map(|a| a.to_string()).collect();
        usage!("pj term <{}>", options.join("|"));
        return Ok(());
    };

    let terminal: TerminalApp = app.parse().map_err(Error::InvalidArgument)?;
    config.terminal = terminal;
    config.save().map_err(Error::Config)?;
    info!("✅ 终端应用已切换为: {}", terminal);
    Ok(())
}

/// 处理 log 命令: pj log mode <verbose|concise>
pub fn handle_log(key: &str, value: &str, config: &mut AppConfig) -> Result<()> {
    if key != config_key::MODE {
        usage!("pj log mode <verbose|concise>");
        return Ok(());
    }
    let mode = config.set_log_mode(value);
    config.save().map_err(Error::Config)?;
    info!("✅ 日志模式已切换为: {}", mode);
    Ok(())
}

/// 处理 version 命令: pj version
pub fn handle_version(config: &AppConfig) -> Result<()> {
    md!("{}", render_version(config));
    Ok(())
}

fn render_version(config: &AppConfig) -> String {
    VERSION_TEMPLATE
        .replace("{name}", constants::APP_NAME)
        .replace("{version}", constants::VERSION)
        .replace("{os}", std::env::consts::OS)
        .replace("{terminal}", config.terminal.app_name())
        .replace("{data_dir}", &config.data_dir().to_string_lossy())
}

/// 处理 help 命令: pj help
pub fn handle_help() -> Result<()> {
    md!("{}", HELP_TEXT);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn term_switch_is_persisted() {
        let dir = TempDir::new().unwrap();
        let mut config = AppConfig::with_data_dir(dir.path());
        handle_term(Some("iterm"), &mut config).unwrap();
        assert_eq!(config.terminal, TerminalApp::ITerm);
        assert_eq!(AppConfig::load_from(dir.path()).terminal, TerminalApp::ITerm);
    }

    #[test]
    fn unknown_term_is_rejected_without_saving() {
        let dir = TempDir::new().unwrap();
        let mut config = AppConfig::with_data_dir(dir.path());
        let err = handle_term(Some("kitty"), &mut config).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        let message = err.to_string();
        assert!(message.contains("kitty"));
        assert!(!message.contains("保存配置失败"));
        assert!(!config.config_path().exists());
    }

    #[test]
    fn log_mode_is_persisted() {
        let dir = TempDir::new().unwrap();
        let mut config = AppConfig::with_data_dir(dir.path());
        handle_log("mode", "verbose", &mut config).unwrap();
        assert!(AppConfig::load_from(dir.path()).is_verbose());
    }

    #[test]
    fn version_fills_placeholders() {
        let config = AppConfig::with_data_dir("/data/pj");
        let text = render_version(&config);
        assert!(text.contains(constants::VERSION));
        assert!(text.contains("Terminal"));
        assert!(!text.contains('{'));
    }
}
