pub mod alias;
pub mod browse;
pub mod list;
pub mod open;
pub mod system;

use crate::cli::SubCmd;
use crate::config::AppConfig;
use crate::constants::cmd;
use crate::debug_log;
use crate::error::Result;
use crate::store::{AliasStore, EmptyReason};

/// 一次调用期间共享的状态：配置 + 已加载的别名存储
pub struct Session {
    pub config: AppConfig,
    pub store: AliasStore,
}

impl Session {
    pub fn open(config: AppConfig) -> Self {
        let store = AliasStore::open(&config.store_config());
        match store.last_load().empty_reason() {
            None => debug_log!(config, "已加载 {} 条别名: {:?}", store.len(), store.path()),
            Some(EmptyReason::Missing) => {
                debug_log!(config, "别名文件不存在，按空处理: {:?}", store.path())
            }
            Some(reason) => debug_log!(config, "别名文件无法使用，按空处理: {:?}", reason),
        }
        Self { config, store }
    }
}

/// 所有内置命令的关键字列表（用于判断别名是否会被子命令遮蔽）
pub fn all_command_keywords() -> Vec<&'static str> {
    [
        cmd::ADD,
        cmd::REMOVE,
        cmd::RENAME,
        cmd::MODIFY,
        cmd::LIST,
        cmd::GO,
        cmd::BROWSE,
        cmd::TERM,
        cmd::LOG,
        cmd::VERSION,
        cmd::HELP,
    ]
    .concat()
}

/// 命令分发执行
pub fn dispatch(subcmd: SubCmd, session: &mut Session) -> Result<()> {
    match subcmd {
        // 别名管理
        SubCmd::Add { alias, path } => alias::handle_add(&alias, &path, session),
        SubCmd::Rm { alias, yes } => alias::handle_remove(&alias, yes, session),
        SubCmd::Rename { alias, new_alias } => alias::handle_rename(&alias, &new_alias, session),
        SubCmd::Mf { alias, path } => alias::handle_modify(&alias, &path, session),

        // 列表 & 跳转
        SubCmd::Ls { query } => list::handle_list(query.as_deref(), session),
        SubCmd::Go { alias } => open::handle_go(&alias, session),
        SubCmd::Browse => browse::handle_browse(session),

        // 系统设置
        SubCmd::Term { app } => system::handle_term(app.as_deref(), &mut session.config),
        SubCmd::Log { key, value } => system::handle_log(&key, &value, &mut session.config),

        // 系统信息
        SubCmd::Version => system::handle_version(&session.config),
        SubCmd::Help => system::handle_help(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_cover_every_subcommand_alias() {
        let keywords = all_command_keywords();
        for word in ["add", "set", "rm", "mv", "ls", "find", "go", "cd", "ui", "term", "v"] {
            assert!(keywords.contains(&word), "{word} missing");
        }
        assert!(!keywords.contains(&"proj"));
    }
}
