//! 别名存储
//!
//! 别名 → 目录路径 的映射，整体以一个 JSON 对象保存在 `<support_dir>/paths.json`：
//!
//! ```json
//! {
//!   "dl": "/Users/me/Downloads",
//!   "proj": "/Users/me/code/project"
//! }
//! ```
//!
//! 每次修改都先重新读取文件，再整体覆盖写回（last-writer-wins，不加锁）。
//! 读取失败不会报错，而是以 [`LoadOutcome::Empty`] 的形式给出原因。

use crate::config::StoreConfig;
use crate::error::{AliasError, ValidationError};
use crate::util::highlight;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// 别名 → 路径 映射，使用 BTreeMap 保证展示顺序稳定
pub type AliasMap = BTreeMap<String, String>;

/// 单条别名记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    pub alias: String,
    pub path: String,
}

/// 加载结果为空的原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyReason {
    /// 文件不存在（首次使用）
    Missing,
    /// 文件存在但读取失败
    Unreadable(String),
    /// 内容不是 string → string 的 JSON 对象
    Malformed(String),
}

/// 加载结果：区分“确实有数据”和“因故按空处理”
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(AliasMap),
    Empty { reason: EmptyReason },
}

impl LoadOutcome {
    pub fn into_map(self) -> AliasMap {
        match self {
            LoadOutcome::Loaded(map) => map,
            LoadOutcome::Empty { .. } => AliasMap::new(),
        }
    }

    pub fn empty_reason(&self) -> Option<&EmptyReason> {
        match self {
            LoadOutcome::Loaded(_) => None,
            LoadOutcome::Empty { reason } => Some(reason),
        }
    }

    /// 文件存在但无法使用（读失败或格式错误），下一次写入会覆盖它
    pub fn is_failure(&self) -> bool {
        matches!(
            self.empty_reason(),
            Some(EmptyReason::Unreadable(_)) | Some(EmptyReason::Malformed(_))
        )
    }
}

/// 读取并严格校验别名文件
pub fn load(path: &Path) -> LoadOutcome {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return LoadOutcome::Empty {
                reason: EmptyReason::Missing,
            };
        }
        Err(e) => {
            return LoadOutcome::Empty {
                reason: EmptyReason::Unreadable(e.to_string()),
            };
        }
    };

    // 只接受 string → string 的对象，数组、嵌套、非字符串值都视为格式错误
    match serde_json::from_str::<AliasMap>(&content) {
        Ok(map) => LoadOutcome::Loaded(map),
        Err(e) => LoadOutcome::Empty {
            reason: EmptyReason::Malformed(e.to_string()),
        },
    }
}

/// 将整个映射以格式化 JSON 覆盖写入文件，必要时创建父目录
pub fn persist(path: &Path, map: &AliasMap) -> Result<(), AliasError> {
    let json = serde_json::to_string_pretty(map)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| AliasError::Persistence {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, json).map_err(|source| AliasError::Persistence {
        path: path.to_path_buf(),
        source,
    })
}

/// stat 成功且是目录才算有效；任何 stat 失败（包括权限问题）都视为无效
pub fn is_directory(path: &str) -> bool {
    fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

/// add / update 共用的输入校验
pub fn validate(alias: &str, path: &str) -> Result<(), ValidationError> {
    if alias.is_empty() {
        return Err(ValidationError::EmptyAlias);
    }
    if path.is_empty() {
        return Err(ValidationError::EmptyPath);
    }
    if !is_directory(path) {
        return Err(ValidationError::NotADirectory(path.to_string()));
    }
    Ok(())
}

/// 别名存储
pub struct AliasStore {
    path: PathBuf,
    entries: AliasMap,
    last_load: LoadOutcome,
}

impl AliasStore {
    /// 按配置打开存储并加载一次
    pub fn open(config: &StoreConfig) -> Self {
        let path = config.store_path();
        let last_load = load(&path);
        let entries = last_load.clone().into_map();
        Self {
            path,
            entries,
            last_load,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 最近一次从磁盘加载的结果
    pub fn last_load(&self) -> &LoadOutcome {
        &self.last_load
    }

    /// 当前内存中的映射
    pub fn entries(&self) -> &AliasMap {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 重新从磁盘加载，返回本次加载结果
    pub fn reload(&mut self) -> &LoadOutcome {
        self.last_load = load(&self.path);
        self.entries = self.last_load.clone().into_map();
        &self.last_load
    }

    /// 查找别名对应的路径
    pub fn lookup(&self, alias: &str) -> Option<&str> {
        self.entries.get(alias).map(String::as_str)
    }

    /// 区分大小写的子串搜索，别名或路径任一命中即返回；空查询返回全部
    pub fn search(&self, query: &str) -> Vec<AliasEntry> {
        self.entries
            .iter()
            .filter(|(alias, path)| {
                highlight::contains(alias, query) || highlight::contains(path, query)
            })
            .map(|(alias, path)| AliasEntry {
                alias: alias.clone(),
                path: path.clone(),
            })
            .collect()
    }

    /// 添加别名
    pub fn add(&mut self, alias: &str, path: &str) -> Result<(), AliasError> {
        validate(alias, path)?;
        self.reload();

        if let Some(existing) = self.entries.get(alias) {
            return Err(AliasError::Conflict {
                alias: alias.to_string(),
                existing: existing.clone(),
            });
        }

        let mut next = self.entries.clone();
        next.insert(alias.to_string(), path.to_string());
        self.commit(next)
    }

    /// 更新别名：可同时重命名（previous_alias → alias）和修改路径
    pub fn update(
        &mut self,
        alias: &str,
        path: &str,
        previous_alias: &str,
    ) -> Result<(), AliasError> {
        validate(alias, path)?;
        self.reload();

        if previous_alias != alias {
            if let Some(existing) = self.entries.get(alias) {
                return Err(AliasError::Conflict {
                    alias: alias.to_string(),
                    existing: existing.clone(),
                });
            }
        }

        let mut next = self.entries.clone();
        next.remove(previous_alias);
        next.insert(alias.to_string(), path.to_string());
        self.commit(next)
    }

    /// 删除别名，不存在时同样成功（幂等）
    pub fn remove(&mut self, alias: &str) -> Result<(), AliasError> {
        self.reload();
        let mut next = self.entries.clone();
        // 不存在的别名不落盘：既不提前创建文件，也不覆盖无法解析的文件
        if next.remove(alias).is_none() {
            return Ok(());
        }
        self.commit(next)
    }

    /// 先落盘，成功后才替换内存中的映射
    fn commit(&mut self, next: AliasMap) -> Result<(), AliasError> {
        persist(&self.path, &next)?;
        self.entries = next;
        self.last_load = LoadOutcome::Loaded(self.entries.clone());
        Ok(())
    }
}
