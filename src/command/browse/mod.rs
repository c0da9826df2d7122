pub mod app;
pub mod ui;

use super::Session;
use crate::error::Result;
use crate::launcher;
use crate::store::AliasStore;
use app::{BrowseApp, KeyOutcome};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use ui::draw_ui;

/// 处理 browse 命令（以及无参数启动）: 打开交互式浏览界面
pub fn handle_browse(session: &mut Session) -> Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
    // 浏览界面持有自己加载的存储，退出后交还给 session
    let store = AliasStore::open(&session.config.store_config());
    let mut app = BrowseApp::new(store, session.config.terminal, cwd);

    let result = run_browse_tui(&mut app);
    session.store = app.store;
    result.map_err(Into::into)
}

fn run_browse_tui(app: &mut BrowseApp) -> io::Result<()> {
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, app);

    // 无论循环是否出错都要恢复终端
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut BrowseApp,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| draw_ui(f, app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        // Windows 下按下和松开都会产生事件
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.handle_key(key) {
            KeyOutcome::Continue => {}
            KeyOutcome::Quit => return Ok(()),
            KeyOutcome::Open(entry) => {
                app.message = Some(match launcher::open(&entry.path, app.terminal) {
                    Ok(()) => format!("✅ 已在 {} 中打开 {}", app.terminal, entry.path),
                    Err(e) => format!("❌ 打开失败: {}", e),
                });
            }
        }
    }
}
