//! 终端启动器：在指定目录打开终端应用

use crate::constants::{LINUX_TERMINAL_LAUNCHER, terminal_app};
use crate::error::LaunchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::str::FromStr;

/// 可选的终端应用（由配置中的 terminal 项决定）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TerminalApp {
    #[default]
    #[serde(rename = "Terminal")]
    Terminal,
    #[serde(rename = "iTerm", alias = "iTerm2", alias = "iterm")]
    ITerm,
}

impl TerminalApp {
    pub const ALL: [TerminalApp; 2] = [TerminalApp::Terminal, TerminalApp::ITerm];

    /// macOS `open -a` 使用的应用名
    pub fn app_name(&self) -> &'static str {
        match self {
            TerminalApp::Terminal => terminal_app::TERMINAL,
            TerminalApp::ITerm => terminal_app::ITERM,
        }
    }
}

impl fmt::Display for TerminalApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.app_name())
    }
}

impl FromStr for TerminalApp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(TerminalApp::Terminal),
            "iterm" | "iterm2" => Ok(TerminalApp::ITerm),
            _ => Err(format!(
                "未知的终端应用: {}（可选: {}, {}）",
                s,
                terminal_app::TERMINAL,
                terminal_app::ITERM
            )),
        }
    }
}

/// 一次启动所需的完整命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: String,
    pub args: Vec<String>,
    /// 子进程的工作目录
    pub current_dir: Option<PathBuf>,
    /// 是否等待退出；直接拉起终端模拟器时不等待，否则会阻塞到终端关闭
    pub wait: bool,
}

/// 根据操作系统构造启动命令（纯函数，不产生副作用）
pub fn launch_command(path: &str, app: TerminalApp, os: &str) -> Result<LaunchCommand, LaunchError> {
    match (os, app) {
        ("macos", _) => Ok(LaunchCommand {
            program: "open".into(),
            args: vec!["-a".into(), app.app_name().into(), path.into()],
            current_dir: None,
            wait: true,
        }),
        ("linux", TerminalApp::Terminal) => Ok(LaunchCommand {
            program: LINUX_TERMINAL_LAUNCHER.into(),
            args: Vec::new(),
            current_dir: Some(PathBuf::from(path)),
            wait: false,
        }),
        ("windows", TerminalApp::Terminal) => Ok(LaunchCommand {
            program: "cmd".into(),
            args: vec![
                "/c".into(),
                "start".into(),
                "".into(),
                "/D".into(),
                path.into(),
                "cmd".into(),
            ],
            current_dir: None,
            wait: true,
        }),
        _ => Err(LaunchError::Unsupported {
            app: app.app_name().into(),
            os: os.into(),
        }),
    }
}

/// 在 path 处打开终端应用
pub fn open(path: &str, app: TerminalApp) -> Result<(), LaunchError> {
    let launch = launch_command(path, app, std::env::consts::OS)?;
    run(&launch, app)
}

fn run(launch: &LaunchCommand, app: TerminalApp) -> Result<(), LaunchError> {
    let mut command = Command::new(&launch.program);
    command.args(&launch.args);
    if let Some(dir) = &launch.current_dir {
        command.current_dir(dir);
    }

    let spawn_err = |source| LaunchError::Spawn {
        app: app.app_name().into(),
        source,
    };

    if launch.wait {
        let status = command.status().map_err(spawn_err)?;
        if !status.success() {
            return Err(LaunchError::Exited {
                app: app.app_name().into(),
                status: status.to_string(),
            });
        }
    } else {
        // 分离启动，不等待也不回收子进程；pj 随即退出，子进程交由 init 接管
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(spawn_err)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Terminal", TerminalApp::Terminal)]
    #[case("terminal", TerminalApp::Terminal)]
    #[case("iTerm", TerminalApp::ITerm)]
    #[case("ITERM2", TerminalApp::ITerm)]
    fn parses_terminal_names(#[case] input: &str, #[case] expected: TerminalApp) {
        assert_eq!(input.parse::<TerminalApp>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_terminal() {
        assert!("kitty".parse::<TerminalApp>().is_err());
    }

    #[test]
    fn macos_uses_open_with_app_name() {
        let cmd = launch_command("/Users/me/My Code", TerminalApp::ITerm, "macos").unwrap();
        assert_eq!(cmd.program, "open");
        assert_eq!(cmd.args, vec!["-a", "iTerm", "/Users/me/My Code"]);
        assert!(cmd.wait);
    }

    #[test]
    fn linux_spawns_detached_in_target_dir() {
        let cmd = launch_command("/home/me", TerminalApp::Terminal, "linux").unwrap();
        assert_eq!(cmd.program, "x-terminal-emulator");
        assert_eq!(cmd.current_dir, Some(PathBuf::from("/home/me")));
        assert!(!cmd.wait);
    }

    #[rstest]
    #[case("linux")]
    #[case("windows")]
    #[case("freebsd")]
    fn iterm_outside_macos_is_unsupported(#[case] os: &str) {
        let err = launch_command("/x", TerminalApp::ITerm, os).unwrap_err();
        assert!(matches!(err, LaunchError::Unsupported { ref os, .. } if !os.is_empty()));
    }

    #[test]
    fn serde_names_match_app_names() {
        let yaml = serde_yaml::to_string(&TerminalApp::ITerm).unwrap();
        assert_eq!(yaml.trim(), "iTerm");
        let parsed: TerminalApp = serde_yaml::from_str("Terminal").unwrap();
        assert_eq!(parsed, TerminalApp::Terminal);
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let launch = LaunchCommand {
            program: "pj-definitely-not-a-real-binary".into(),
            args: Vec::new(),
            current_dir: None,
            wait: true,
        };
        let err = run(&launch, TerminalApp::Terminal).unwrap_err();
        assert!(matches!(err, LaunchError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_reported() {
        let launch = LaunchCommand {
            program: "false".into(),
            args: Vec::new(),
            current_dir: None,
            wait: true,
        };
        let err = run(&launch, TerminalApp::Terminal).unwrap_err();
        assert!(matches!(err, LaunchError::Exited { ref app, .. } if app == "Terminal"));
    }
}
