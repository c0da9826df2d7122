//! pathjump 库模块
//!
//! 导出公开模块供集成测试和 `pj` 二进制使用

pub mod assets;
pub mod cli;
pub mod command;
pub mod config;
pub mod constants;
pub mod error;
pub mod launcher;
pub mod store;
pub mod util;

pub use config::{AppConfig, StoreConfig};
pub use error::{AliasError, Error, LaunchError, Result, ValidationError};
pub use launcher::TerminalApp;
pub use store::{AliasEntry, AliasMap, AliasStore, EmptyReason, LoadOutcome};
