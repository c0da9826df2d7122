//! 错误类型
//!
//! 存储层和启动器各自有独立的错误枚举，`Error` 在命令层把它们汇总，
//! 由 `main` 统一打印并转换为非零退出码。

use std::io;
use std::path::PathBuf;

/// 输入校验失败
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("别名不能为空")]
    EmptyAlias,

    #[error("路径不能为空")]
    EmptyPath,

    #[error("路径 {{{0}}} 不是一个存在的目录")]
    NotADirectory(String),
}

/// 别名存储操作失败
#[derive(Debug, thiserror::Error)]
pub enum AliasError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("别名 {alias} 已被路径 {{{existing}}} 使用，请换一个别名")]
    Conflict { alias: String, existing: String },

    #[error("写入 {path:?} 失败: {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("序列化别名数据失败: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// 终端启动失败
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("启动 {app} 失败: {source}")]
    Spawn {
        app: String,
        #[source]
        source: io::Error,
    },

    #[error("{app} 异常退出: {status}")]
    Exited { app: String, status: String },

    #[error("{app} 在当前系统 ({os}) 上不可用")]
    Unsupported { app: String, os: String },
}

/// 命令层汇总错误
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Alias(#[from] AliasError),

    #[error(transparent)]
    Launch(#[from] LaunchError),

    #[error("未找到别名 \"{0}\"")]
    NotFound(String),

    #[error("保存配置失败: {0}")]
    Config(String),

    /// 参数取值不合法，消息由调用方给出
    #[error("{0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Error::Alias(AliasError::Validation(e))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
