use crate::launcher::TerminalApp;
use crate::store::{AliasEntry, AliasStore};
use crate::util::normalize_path_input;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;
use std::path::PathBuf;
use unicode_width::UnicodeWidthChar;

// ========== 输入框 ==========

/// 单行输入框（字符索引光标）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputField {
    pub value: String,
    pub cursor: usize,
}

impl InputField {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: value.to_string(),
            cursor: value.chars().count(),
        }
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// 处理编辑类按键，返回是否消费了该按键
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let char_count = self.value.chars().count();
        match key.code {
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(char_count),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = char_count,
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    let start = self.byte_index(self.cursor - 1);
                    let end = self.byte_index(self.cursor);
                    self.value.drain(start..end);
                    self.cursor -= 1;
                }
            }
            KeyCode::Delete => {
                if self.cursor < char_count {
                    let start = self.byte_index(self.cursor);
                    let end = self.byte_index(self.cursor + 1);
                    self.value.drain(start..end);
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let idx = self.byte_index(self.cursor);
                self.value.insert(idx, c);
                self.cursor += 1;
            }
            _ => return false,
        }
        true
    }

    /// 按光标位置分割为三部分：光标前、光标处字符、光标后
    pub fn split_at_cursor(&self) -> (String, String, String) {
        let chars: Vec<char> = self.value.chars().collect();
        let cursor = self.cursor.min(chars.len());
        let before: String = chars[..cursor].iter().collect();
        let (at, after) = if cursor < chars.len() {
            (chars[cursor].to_string(), chars[cursor + 1..].iter().collect())
        } else {
            (" ".to_string(), String::new())
        };
        (before, at, after)
    }
}

// ========== 表单 ==========

#[derive(Debug, Clone, PartialEq)]
pub enum FormKind {
    Add,
    /// 编辑时记录原别名，用于重命名
    Edit { original_alias: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormField {
    Path,
    Alias,
}

/// 添加/编辑表单：目录路径 + 别名
#[derive(Debug, Clone, PartialEq)]
pub struct PathForm {
    pub kind: FormKind,
    pub path: InputField,
    pub alias: InputField,
    pub focus: FormField,
    pub error: Option<String>,
}

impl PathForm {
    pub fn add() -> Self {
        Self {
            kind: FormKind::Add,
            path: InputField::default(),
            alias: InputField::default(),
            focus: FormField::Path,
            error: None,
        }
    }

    pub fn edit(entry: &AliasEntry) -> Self {
        Self {
            kind: FormKind::Edit {
                original_alias: entry.alias.clone(),
            },
            path: InputField::with_value(&entry.path),
            alias: InputField::with_value(&entry.alias),
            focus: FormField::Path,
            error: None,
        }
    }

    pub fn focused_mut(&mut self) -> &mut InputField {
        match self.focus {
            FormField::Path => &mut self.path,
            FormField::Alias => &mut self.alias,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FormField::Path => FormField::Alias,
            FormField::Alias => FormField::Path,
        };
    }
}

// ========== TUI 应用状态 ==========

#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    /// 正常浏览模式
    Normal,
    /// 输入搜索关键字
    Search,
    /// 添加/编辑表单
    Form(PathForm),
    /// 确认删除
    ConfirmDelete,
    /// 显示帮助
    Help,
}

/// 一次按键处理后主循环需要做的事
#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome {
    Continue,
    Quit,
    /// 在终端中打开该条目
    Open(AliasEntry),
}

/// 浏览界面状态
pub struct BrowseApp {
    pub store: AliasStore,
    pub terminal: TerminalApp,
    /// 搜索关键字（区分大小写）
    pub query: InputField,
    /// 当前过滤后的条目
    pub visible: Vec<AliasEntry>,
    pub state: ListState,
    pub mode: AppMode,
    /// 状态栏消息
    pub message: Option<String>,
    /// 解析相对路径用的工作目录
    cwd: PathBuf,
}

impl BrowseApp {
    pub fn new(store: AliasStore, terminal: TerminalApp, cwd: PathBuf) -> Self {
        let mut app = Self {
            store,
            terminal,
            query: InputField::default(),
            visible: Vec::new(),
            state: ListState::default(),
            mode: AppMode::Normal,
            message: None,
            cwd,
        };
        app.refresh();
        app
    }

    /// 按当前关键字重新过滤，并把选中项限制在范围内
    pub fn refresh(&mut self) {
        self.visible = self.store.search(&self.query.value);
        let selected = match self.state.selected() {
            _ if self.visible.is_empty() => None,
            Some(i) => Some(i.min(self.visible.len() - 1)),
            None => Some(0),
        };
        self.state.select(selected);
    }

    /// 刷新后选中指定别名（不在结果里则保持原位置）
    fn refresh_and_select(&mut self, alias: &str) {
        self.refresh();
        if let Some(idx) = self.visible.iter().position(|e| e.alias == alias) {
            self.state.select(Some(idx));
        }
    }

    pub fn selected(&self) -> Option<&AliasEntry> {
        self.state.selected().and_then(|i| self.visible.get(i))
    }

    /// 向下移动（到底后回到顶部）
    pub fn move_down(&mut self) {
        let count = self.visible.len();
        if count == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i + 1 < count => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    /// 向上移动（到顶后回到底部）
    pub fn move_up(&mut self) {
        let count = self.visible.len();
        if count == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(0) | None => count - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    /// 提交表单：新增或更新，失败时把错误留在表单上
    pub fn submit_form(&mut self, mut form: PathForm) {
        let alias = form.alias.value.clone();
        let path = normalize_path_input(std::slice::from_ref(&form.path.value), &self.cwd);

        let result = match &form.kind {
            FormKind::Add => self.store.add(&alias, &path),
            FormKind::Edit { original_alias } => self.store.update(&alias, &path, original_alias),
        };

        match result {
            Ok(()) => {
                self.message = Some(match &form.kind {
                    FormKind::Add => format!("✅ 已添加 {} -> {}", alias, path),
                    FormKind::Edit { .. } => format!("💾 已保存 {} -> {}", alias, path),
                });
                self.mode = AppMode::Normal;
                self.refresh_and_select(&alias);
            }
            Err(e) => {
                form.error = Some(e.to_string());
                self.mode = AppMode::Form(form);
            }
        }
    }

    /// 删除当前选中项
    pub fn delete_selected(&mut self) {
        self.mode = AppMode::Normal;
        let Some(alias) = self.selected().map(|e| e.alias.clone()) else {
            return;
        };
        match self.store.remove(&alias) {
            Ok(()) => self.message = Some(format!("🗑️ 已删除 {}", alias)),
            Err(e) => self.message = Some(format!("❌ 删除失败: {}", e)),
        }
        self.refresh();
    }

    /// 分发按键到当前模式
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        match std::mem::replace(&mut self.mode, AppMode::Normal) {
            AppMode::Normal => self.handle_normal_mode(key),
            AppMode::Search => {
                self.mode = AppMode::Search;
                self.handle_search_mode(key);
                KeyOutcome::Continue
            }
            AppMode::Form(form) => {
                self.handle_form_mode(form, key);
                KeyOutcome::Continue
            }
            AppMode::ConfirmDelete => {
                self.mode = AppMode::ConfirmDelete;
                self.handle_confirm_delete(key);
                KeyOutcome::Continue
            }
            // 帮助模式按任意键返回
            AppMode::Help => {
                self.message = None;
                KeyOutcome::Continue
            }
        }
    }

    fn handle_normal_mode(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyOutcome::Quit;
        }

        match key.code {
            KeyCode::Char('q') => return KeyOutcome::Quit,
            KeyCode::Esc => {
                if self.query.value.is_empty() {
                    return KeyOutcome::Quit;
                }
                self.query = InputField::default();
                self.refresh();
                self.message = Some("已清除搜索".to_string());
            }
            KeyCode::Down | KeyCode::Char('j') => self.move_down(),
            KeyCode::Up | KeyCode::Char('k') => self.move_up(),
            KeyCode::Enter | KeyCode::Char('o') => {
                if let Some(entry) = self.selected().cloned() {
                    return KeyOutcome::Open(entry);
                }
            }
            KeyCode::Char('/') => {
                self.mode = AppMode::Search;
                self.message = None;
            }
            KeyCode::Char('a') => {
                self.mode = AppMode::Form(PathForm::add());
                self.message = None;
            }
            KeyCode::Char('e') => {
                if let Some(entry) = self.selected() {
                    self.mode = AppMode::Form(PathForm::edit(entry));
                    self.message = None;
                }
            }
            KeyCode::Char('d') => {
                if self.selected().is_some() {
                    self.mode = AppMode::ConfirmDelete;
                }
            }
            KeyCode::Char('r') => {
                self.store.reload();
                self.refresh();
                self.message = Some(format!("🔄 已重新加载，共 {} 条", self.store.len()));
            }
            KeyCode::Char('?') => self.mode = AppMode::Help,
            _ => {}
        }
        KeyOutcome::Continue
    }

    /// 搜索模式：每次输入都实时过滤
    fn handle_search_mode(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.mode = AppMode::Normal,
            KeyCode::Esc => {
                self.query = InputField::default();
                self.mode = AppMode::Normal;
                self.refresh();
            }
            KeyCode::Down => self.move_down(),
            KeyCode::Up => self.move_up(),
            _ => {
                if self.query.handle_key(key) {
                    self.state.select(Some(0));
                    self.refresh();
                }
            }
        }
    }

    fn handle_form_mode(&mut self, mut form: PathForm, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.message = Some("已取消".to_string());
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                form.toggle_focus();
                self.mode = AppMode::Form(form);
            }
            KeyCode::Enter => {
                if let Some(err) = form_error(&form) {
                    form.error = Some(err.to_string());
                    self.mode = AppMode::Form(form);
                } else {
                    self.submit_form(form);
                }
            }
            _ => {
                if form.focused_mut().handle_key(key) {
                    form.error = None;
                }
                self.mode = AppMode::Form(form);
            }
        }
    }

    fn handle_confirm_delete(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => self.delete_selected(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.mode = AppMode::Normal;
                self.message = Some("已取消删除".to_string());
            }
            _ => {}
        }
    }
}

/// 表单级别的必填校验（目录是否存在交给存储层）
fn form_error(form: &PathForm) -> Option<&'static str> {
    if form.path.value.trim().is_empty() {
        Some("请输入目录路径")
    } else if form.alias.value.is_empty() {
        Some("请输入别名")
    } else {
        None
    }
}

// ========== 工具函数 ==========

/// 将字符串截断到指定的显示宽度，超出部分用 ".." 替代
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if unicode_width::UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(2);
    let mut width = 0;
    let mut result = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        result.push(ch);
    }
    result.push_str("..");
    result
}
