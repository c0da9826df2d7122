use std::ops::Range;

/// 区分大小写的子串匹配（别名搜索的唯一匹配规则）
pub fn contains(content: &str, target: &str) -> bool {
    content.contains(target)
}

/// 获取 content 中所有匹配 target 的区间 [start, end)，字节索引，互不重叠
pub fn match_ranges(content: &str, target: &str) -> Vec<Range<usize>> {
    if target.is_empty() {
        return Vec::new();
    }
    content
        .match_indices(target)
        .map(|(start, m)| start..start + m.len())
        .collect()
}

/// 把 content 按匹配区间切成 (片段, 是否命中) 序列，便于 TUI 分段着色
pub fn split_by_matches<'a>(content: &'a str, target: &str) -> Vec<(&'a str, bool)> {
    let mut parts = Vec::new();
    let mut last_end = 0;
    for range in match_ranges(content, target) {
        if range.start > last_end {
            parts.push((&content[last_end..range.start], false));
        }
        parts.push((&content[range.clone()], true));
        last_end = range.end;
    }
    if last_end < content.len() {
        parts.push((&content[last_end..], false));
    }
    parts
}

/// 将 content 中匹配 target 的部分用 ANSI 绿色高亮
pub fn highlight_matches(content: &str, target: &str) -> String {
    split_by_matches(content, target)
        .into_iter()
        .map(|(part, hit)| {
            if hit {
                format!("\x1b[32m{}\x1b[0m", part)
            } else {
                part.to_string()
            }
        })
        .collect()
}
