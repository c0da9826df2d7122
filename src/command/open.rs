use super::Session;
use crate::error::{Error, Result};
use crate::launcher;
use crate::store::is_directory;
use crate::{debug_log, info, usage, warn};

/// 处理 go 命令: pj go <alias>
pub fn handle_go(alias: &str, session: &Session) -> Result<()> {
    let path = session
        .store
        .lookup(alias)
        .ok_or_else(|| Error::NotFound(alias.to_string()))?;

    // 存储不做自愈，路径失效时照常尝试并提示
    if !is_directory(path) {
        warn!("别名 {} 指向的目录 {{{}}} 已不存在", alias, path);
    }

    let terminal = session.config.terminal;
    debug_log!(session.config, "使用 {} 打开 {}", terminal, path);
    launcher::open(path, terminal)?;
    info!("✅ 已在 {} 中打开 {{{}}} : {{{}}}", terminal, alias, path);
    Ok(())
}

/// 未匹配到子命令时的别名跳转: pj <alias>
pub fn handle_open(args: &[String], session: &Session) -> Result<()> {
    match args {
        [alias] => handle_go(alias, session),
        [] => {
            usage!("pj <alias>");
            Ok(())
        }
        [alias, ..] => {
            usage!("pj <alias>（只接受一个别名，忽略多余参数）");
            handle_go(alias, session)
        }
    }
}
