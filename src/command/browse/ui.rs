use super::app::{AppMode, BrowseApp, FormField, FormKind, InputField, PathForm, truncate_to_width};
use crate::util::highlight::split_by_matches;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

/// 绘制 TUI 界面
pub fn draw_ui(f: &mut Frame, app: &mut BrowseApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    // ========== 标题栏 ==========
    let title = format!(
        " 📂 目录别名 — 共 {} 条 | 匹配 {} 条 | 终端: {} ",
        app.store.len(),
        app.visible.len(),
        app.terminal
    );
    let title_block = Paragraph::new(Line::from(Span::styled(
        title,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(title_block, chunks[0]);

    // ========== 搜索栏 ==========
    draw_search_bar(f, app, chunks[1]);

    // ========== 列表区 ==========
    match &app.mode {
        AppMode::Help => draw_help(f, chunks[2]),
        AppMode::Form(form) => draw_form(f, form, chunks[2]),
        _ => draw_list(f, app, chunks[2]),
    }

    // ========== 状态栏 ==========
    draw_status(f, app, chunks[3]);

    // ========== 帮助栏 ==========
    let help_text = match app.mode {
        AppMode::Normal => {
            " ↑↓/jk 移动 | Enter/o 打开 | / 搜索 | a 添加 | e 编辑 | d 删除 | r 重载 | ? 帮助 | q 退出"
        }
        AppMode::Search => " 输入关键字实时过滤（区分大小写）| Enter 完成 | Esc 清除",
        AppMode::Form(_) => " Tab 切换输入框 | Enter 保存 | Esc 取消 | ←→ 移动光标",
        AppMode::ConfirmDelete => " y 确认删除 | n/Esc 取消",
        AppMode::Help => " 按任意键返回",
    };
    f.render_widget(
        Paragraph::new(Span::styled(help_text, Style::default().fg(Color::DarkGray))),
        chunks[4],
    );
}

fn draw_search_bar(f: &mut Frame, app: &BrowseApp, area: Rect) {
    let searching = app.mode == AppMode::Search;
    let color = if searching { Color::Green } else { Color::DarkGray };
    let line = if searching {
        input_line(" 🔍 ", &app.query, Color::Green)
    } else if app.query.value.is_empty() {
        Line::from(Span::styled(
            " 🔍 按 / 搜索别名或路径",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(vec![
            Span::raw(" 🔍 "),
            Span::styled(app.query.value.clone(), Style::default().fg(Color::Yellow)),
        ])
    };
    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(" 搜索 "),
    );
    f.render_widget(widget, area);
}

fn draw_list(f: &mut Frame, app: &mut BrowseApp, area: Rect) {
    let query = app.query.value.as_str();
    let inner_width = area.width.saturating_sub(2 + 3) as usize;
    let alias_width = app
        .visible
        .iter()
        .map(|e| e.alias.width())
        .max()
        .unwrap_or(0)
        .min(inner_width / 3);

    let items: Vec<ListItem> = app
        .visible
        .iter()
        .map(|entry| {
            let alias = truncate_to_width(&entry.alias, alias_width);
            let padding = " ".repeat(alias_width.saturating_sub(alias.width()));
            let path_budget = inner_width.saturating_sub(alias_width + 3);
            let path = truncate_to_width(&entry.path, path_budget);

            let mut spans = highlighted(&alias, query, Style::default().fg(Color::Yellow));
            spans.push(Span::raw(padding));
            spans.push(Span::styled(" → ", Style::default().fg(Color::DarkGray)));
            spans.extend(highlighted(&path, query, Style::default().fg(Color::White)));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(" 别名列表 ");

    if items.is_empty() {
        let hint = if query.is_empty() {
            "   (空) 按 a 添加目录别名..."
        } else {
            "   没有匹配的别名"
        };
        let empty_hint = List::new(vec![ListItem::new(Line::from(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray),
        )))])
        .block(list_block);
        f.render_widget(empty_hint, area);
    } else {
        let list_widget = List::new(items)
            .block(list_block)
            .highlight_style(
                Style::default()
                    .bg(Color::Indexed(24))
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(" ▶ ");
        f.render_stateful_widget(list_widget, area, &mut app.state);
    }
}

/// 命中搜索关键字的片段加绿色下划线
fn highlighted(text: &str, query: &str, base: Style) -> Vec<Span<'static>> {
    split_by_matches(text, query)
        .into_iter()
        .map(|(part, hit)| {
            let style = if hit {
                base.fg(Color::Green).add_modifier(Modifier::UNDERLINED)
            } else {
                base
            };
            Span::styled(part.to_string(), style)
        })
        .collect()
}

fn draw_form(f: &mut Frame, form: &PathForm, area: Rect) {
    let (title, color) = match &form.kind {
        FormKind::Add => (" ➕ 添加目录别名 ".to_string(), Color::Green),
        FormKind::Edit { original_alias } => (format!(" ✏️ 编辑 {} ", original_alias), Color::Yellow),
    };

    let label_style = |field: FormField| {
        if form.focus == field {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        }
    };
    let field_line = |label: &str, field: FormField, input: &InputField| {
        if form.focus == field {
            let mut line = input_line("", input, color);
            line.spans.insert(0, Span::styled(label.to_string(), label_style(field)));
            line
        } else {
            Line::from(vec![
                Span::styled(label.to_string(), label_style(field)),
                Span::raw(input.value.clone()),
            ])
        }
    };

    let mut lines = vec![
        Line::from(""),
        field_line("  目录路径: ", FormField::Path, &form.path),
        Line::from(""),
        field_line("  别名:     ", FormField::Alias, &form.alias),
        Line::from(""),
    ];
    if let Some(err) = &form.error {
        lines.push(Line::from(Span::styled(
            format!("  ❌ {}", err),
            Style::default().fg(Color::Red),
        )));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(title),
    );
    f.render_widget(widget, area);
}

fn draw_help(f: &mut Frame, area: Rect) {
    let keys: &[(&str, &str)] = &[
        ("↓ / j", "向下移动"),
        ("↑ / k", "向上移动"),
        ("Enter / o", "在终端中打开选中目录"),
        ("/", "搜索（别名或路径，区分大小写）"),
        ("a", "添加目录别名"),
        ("e", "编辑选中别名（路径 / 别名）"),
        ("d", "删除选中别名（需确认）"),
        ("r", "从磁盘重新加载"),
        ("q / Esc", "退出（Esc 在有搜索时先清除搜索）"),
        ("Ctrl+C", "退出"),
        ("?", "显示此帮助"),
    ];

    let mut lines = vec![
        Line::from(Span::styled(
            "  📖 快捷键帮助",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(keys.iter().map(|(key, desc)| {
        Line::from(vec![
            Span::styled(format!("  {:<13}", key), Style::default().fg(Color::Yellow)),
            Span::raw(*desc),
        ])
    }));

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" 帮助 "),
    );
    f.render_widget(widget, area);
}

fn draw_status(f: &mut Frame, app: &BrowseApp, area: Rect) {
    let (text, color, title) = match &app.mode {
        AppMode::ConfirmDelete => {
            let msg = match app.selected() {
                Some(entry) => {
                    let budget = (area.width.saturating_sub(2) as usize).saturating_sub(30);
                    format!(
                        " 确认删除「{}」-> {} ？(y 确认 / n 取消)",
                        entry.alias,
                        truncate_to_width(&entry.path, budget)
                    )
                }
                None => " 没有选中的项目".to_string(),
            };
            (msg, Color::Red, " ⚠️ 确认删除 ")
        }
        _ => {
            let msg = app.message.clone().unwrap_or_else(|| " 按 ? 查看完整帮助".to_string());
            (msg, Color::Gray, "")
        }
    };
    let border = if color == Color::Red { Color::Red } else { Color::DarkGray };
    let widget = Paragraph::new(Line::from(Span::styled(text, Style::default().fg(color)))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(title),
    );
    f.render_widget(widget, area);
}

/// 带光标高亮的输入行
fn input_line(prefix: &str, input: &InputField, color: Color) -> Line<'static> {
    let (before, at, after) = input.split_at_cursor();
    Line::from(vec![
        Span::styled(prefix.to_string(), Style::default().fg(color)),
        Span::raw(before),
        Span::styled(at, Style::default().fg(Color::Black).bg(Color::White)),
        Span::raw(after),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::launcher::TerminalApp;
    use crate::store::AliasStore;
    use ratatui::{Terminal, backend::TestBackend};
    use std::fs;
    use tempfile::TempDir;

    fn rendered(app: &mut BrowseApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|f| draw_ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn renders_aliases_and_paths() {
        let data = TempDir::new().unwrap();
        let dirs = TempDir::new().unwrap();
        let dir = dirs.path().join("downloads");
        fs::create_dir_all(&dir).unwrap();
        let mut store = AliasStore::open(&StoreConfig::new(data.path()));
        store.add("dl", &dir.to_string_lossy()).unwrap();

        let mut app = BrowseApp::new(store, TerminalApp::ITerm, dirs.path().to_path_buf());
        let screen = rendered(&mut app);
        assert!(screen.contains("dl"));
        assert!(screen.contains("downloads"));
        assert!(screen.contains("iTerm"));
        assert!(screen.contains("▶"));
    }

    #[test]
    fn renders_empty_hint() {
        let data = TempDir::new().unwrap();
        let store = AliasStore::open(&StoreConfig::new(data.path()));
        let mut app = BrowseApp::new(store, TerminalApp::Terminal, data.path().to_path_buf());
        let screen = rendered(&mut app);
        assert!(screen.contains("Terminal"));
        assert!(!screen.contains("▶"));
    }

    #[test]
    fn highlighted_marks_only_hits() {
        let spans = highlighted("a/proj/b", "proj", Style::default());
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[1].content, "proj");
        assert!(spans[1].style.add_modifier.contains(Modifier::UNDERLINED));
    }
}
