use super::Session;
use crate::error::Result;
use crate::store::AliasEntry;
use crate::util::highlight::highlight_matches;
use crate::{info, md};
use colored::Colorize;

/// 处理 ls 命令: pj ls [query]
pub fn handle_list(query: Option<&str>, session: &Session) -> Result<()> {
    let query = query.unwrap_or("");
    let entries = session.store.search(query);

    if entries.is_empty() {
        if query.is_empty() {
            info!("还没有任何别名，使用 `pj add <alias> <path>` 添加");
        } else {
            info!("没有匹配 \"{}\" 的别名", query);
        }
        return Ok(());
    }

    if query.is_empty() {
        md!("{}", build_list_md(&entries));
    } else {
        for line in build_search_lines(&entries, query) {
            info!("{}", line);
        }
    }
    Ok(())
}

/// 全量列表用 Markdown 渲染
fn build_list_md(entries: &[AliasEntry]) -> String {
    let mut md_text = format!("## Paths ({})\n", entries.len());
    for entry in entries {
        md_text.push_str(&format!("- **{}** → {}\n", entry.alias, entry.path));
    }
    md_text
}

/// 搜索结果逐行输出，命中部分高亮
fn build_search_lines(entries: &[AliasEntry], query: &str) -> Vec<String> {
    entries
        .iter()
        .map(|entry| {
            format!(
                "{} {} {}",
                highlight_matches(&entry.alias, query).as_str().bold(),
                "→".dimmed(),
                highlight_matches(&entry.path, query)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(alias: &str, path: &str) -> AliasEntry {
        AliasEntry {
            alias: alias.into(),
            path: path.into(),
        }
    }

    #[test]
    fn list_md_has_one_bullet_per_entry() {
        let md = build_list_md(&[entry("dl", "/tmp/dl"), entry("proj", "/code")]);
        assert!(md.starts_with("## Paths (2)\n"));
        assert!(md.contains("- **dl** → /tmp/dl\n"));
        assert!(md.contains("- **proj** → /code\n"));
    }

    #[test]
    fn search_lines_mark_matches() {
        let lines = build_search_lines(&[entry("proj", "/code/proj")], "proj");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].matches("\x1b[32mproj\x1b[0m").count(), 2);
    }
}
