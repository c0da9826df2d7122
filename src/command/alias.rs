use super::{Session, all_command_keywords};
use crate::error::{Error, Result, ValidationError};
use crate::util::normalize_path_input;
use crate::{info, usage, warn};
use std::io::{self, BufRead, Write};

/// 处理 add 命令: pj add <alias> <path...>
pub fn handle_add(alias: &str, path_parts: &[String], session: &mut Session) -> Result<()> {
    if path_parts.is_empty() {
        usage!("pj add <alias> <path>");
        return Err(ValidationError::EmptyPath.into());
    }

    let cwd = std::env::current_dir()?;
    let path = normalize_path_input(path_parts, &cwd);

    warn_if_store_unusable(session);
    session.store.add(alias, &path)?;
    info!("✅ 添加别名 {} -> {{{}}} 成功! 🎉", alias, path);

    // 与子命令同名的别名无法通过 `pj <alias>` 直接跳转
    if all_command_keywords().contains(&alias) {
        warn!(
            "别名 `{}` 与内置命令同名，只能通过 `pj go {}` 打开",
            alias, alias
        );
    }
    Ok(())
}

/// 处理 rm 命令: pj rm <alias> [-y]
pub fn handle_remove(alias: &str, yes: bool, session: &mut Session) -> Result<()> {
    let path = match session.store.lookup(alias) {
        Some(path) => path.to_string(),
        None => return Err(Error::NotFound(alias.to_string())),
    };

    if !yes {
        let prompt = format!("确认删除别名 {} -> {{{}}} ？[y/N] ", alias, path);
        let stdin = io::stdin();
        if !confirm(&prompt, stdin.lock())? {
            info!("已取消删除");
            return Ok(());
        }
    }

    warn_if_store_unusable(session);
    session.store.remove(alias)?;
    info!("成功移除别名 {} ✅", alias);
    Ok(())
}

/// 处理 rename 命令: pj rename <alias> <new_alias>
pub fn handle_rename(alias: &str, new_alias: &str, session: &mut Session) -> Result<()> {
    let path = match session.store.lookup(alias) {
        Some(path) => path.to_string(),
        None => return Err(Error::NotFound(alias.to_string())),
    };

    warn_if_store_unusable(session);
    session.store.update(new_alias, &path, alias)?;
    info!("✅ 重命名 {} -> {} 成功! Path: {} 🎉", alias, new_alias, path);
    Ok(())
}

/// 处理 modify 命令: pj mf <alias> <new_path...>
pub fn handle_modify(alias: &str, path_parts: &[String], session: &mut Session) -> Result<()> {
    if path_parts.is_empty() {
        usage!("pj mf <alias> <new_path>");
        return Err(ValidationError::EmptyPath.into());
    }
    if session.store.lookup(alias).is_none() {
        usage!("别名 {} 不存在，请先使用 add 命令添加", alias);
        return Err(Error::NotFound(alias.to_string()));
    }

    let cwd = std::env::current_dir()?;
    let path = normalize_path_input(path_parts, &cwd);

    warn_if_store_unusable(session);
    session.store.update(alias, &path, alias)?;
    info!("修改 {} 的路径为 {{{}}} 成功 ✅", alias, path);
    Ok(())
}

// ========== 辅助函数 ==========

/// 别名文件存在却读不出来时，写入会覆盖它，提前提醒
fn warn_if_store_unusable(session: &Session) {
    if session.store.last_load().is_failure() {
        warn!(
            "别名文件 {:?} 无法解析，本次保存将覆盖其原有内容",
            session.store.path()
        );
    }
}

/// 打印提示并读取一行，只有 y / yes 视为确认
fn confirm(prompt: &str, mut input: impl BufRead) -> io::Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}
