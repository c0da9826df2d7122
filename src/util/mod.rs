pub mod highlight;
pub mod log;

use std::path::{Path, PathBuf};

/// 去除字符串两端的引号（单引号或双引号）
pub fn remove_quotes(s: &str) -> String {
    let s = s.trim();
    if s.len() >= 2
        && ((s.starts_with('\'') && s.ends_with('\''))
            || (s.starts_with('"') && s.ends_with('"')))
    {
        return s[1..s.len() - 1].to_string();
    }
    s.to_string()
}

/// 展开开头的 `~` 为 home 目录
pub fn expand_tilde(path: &str) -> String {
    if !path.starts_with('~') {
        return path.to_string();
    }
    match dirs::home_dir() {
        Some(home) if path == "~" => home.to_string_lossy().to_string(),
        Some(home) if path.starts_with("~/") => {
            format!("{}{}", home.to_string_lossy(), &path[1..])
        }
        _ => path.to_string(),
    }
}

/// 将命令行传入的路径片段整理成一个绝对路径字符串
///
/// 多个参数用空格拼接（支持路径中带空格），去除两端引号和转义空格，
/// 展开 `~`，相对路径基于 `cwd` 转为绝对路径。空输入保持为空，交给校验层报错。
pub fn normalize_path_input(parts: &[String], cwd: &Path) -> String {
    let joined = parts.join(" ");
    let path = remove_quotes(&joined).replace("\\ ", " ");
    if path.is_empty() {
        return path;
    }
    let path = expand_tilde(&path);

    let as_path = PathBuf::from(&path);
    if as_path.is_absolute() {
        path
    } else {
        cwd.join(as_path).to_string_lossy().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_quotes_strips_matching_pairs_only() {
        assert_eq!(remove_quotes("'/tmp/a b'"), "/tmp/a b");
        assert_eq!(remove_quotes("\"/tmp\""), "/tmp");
        assert_eq!(remove_quotes("'/tmp\""), "'/tmp\"");
        assert_eq!(remove_quotes("  /tmp  "), "/tmp");
    }

    #[test]
    fn normalize_joins_parts_and_unescapes_spaces() {
        let cwd = Path::new("/work");
        let parts = vec!["/Users/me/My".to_string(), "Projects".to_string()];
        assert_eq!(normalize_path_input(&parts, cwd), "/Users/me/My Projects");

        let parts = vec!["/Users/me/My\\ Docs".to_string()];
        assert_eq!(normalize_path_input(&parts, cwd), "/Users/me/My Docs");
    }

    #[test]
    fn normalize_makes_relative_paths_absolute() {
        let cwd = Path::new("/work");
        let parts = vec!["sub/dir".to_string()];
        assert_eq!(
            normalize_path_input(&parts, cwd),
            Path::new("/work").join("sub/dir").to_string_lossy()
        );
    }

    #[test]
    fn normalize_keeps_empty_input_empty() {
        assert_eq!(normalize_path_input(&[], Path::new("/work")), "");
        assert_eq!(
            normalize_path_input(&["''".to_string()], Path::new("/work")),
            ""
        );
    }

    #[test]
    fn expand_tilde_uses_home_dir() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~"), home.to_string_lossy());
            assert_eq!(
                expand_tilde("~/code"),
                format!("{}/code", home.to_string_lossy())
            );
        }
        assert_eq!(expand_tilde("/abs"), "/abs");
        assert_eq!(expand_tilde("~other/x"), "~other/x");
    }
}
