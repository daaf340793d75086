//! # 任务目录
//!
//! 可调度的仿真任务列表。每项带 `enabled` 标记，`false` 表示暂不调度：
//!
//! ```toml
//! [[tasks]]
//! name = "lift_pot"
//! enabled = false
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::DriverError;

/// 内置目录（随 crate 发布）
const BUILTIN_CATALOG: &str = include_str!("../catalog/tasks.toml");

fn default_enabled() -> bool {
    true
}

/// 目录项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskEntry {
    pub name: String,

    /// 缺省为启用
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl TaskEntry {
    pub fn new(name: impl Into<String>, enabled: bool) -> Self {
        Self {
            name: name.into(),
            enabled,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    tasks: Vec<TaskEntry>,
}

/// 任务目录
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskCatalog {
    entries: Vec<TaskEntry>,
}

impl TaskCatalog {
    /// 创建目录，任务名不能重复
    pub fn new(entries: Vec<TaskEntry>) -> Result<Self, DriverError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.name.trim().is_empty() {
                return Err(DriverError::Catalog("empty task name".to_string()));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(DriverError::Catalog(format!(
                    "duplicate task '{}'",
                    entry.name
                )));
            }
        }

        Ok(Self { entries })
    }

    /// 从 TOML 文本解析
    pub fn from_toml_str(content: &str) -> Result<Self, DriverError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.tasks)
    }

    /// 从文件加载
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DriverError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| DriverError::io(path, e))?;
        Self::from_toml_str(&content)
    }

    /// 内置目录
    pub fn builtin() -> Result<Self, DriverError> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    pub fn entries(&self) -> &[TaskEntry] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&TaskEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.get(name).is_some_and(|entry| entry.enabled)
    }

    /// 已启用的任务，按目录顺序
    pub fn enabled(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter(|entry| entry.enabled).map(|entry| entry.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = TaskCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 50);

        let enabled: Vec<_> = catalog.enabled().collect();
        assert_eq!(enabled, vec!["beat_block_hammer", "adjust_bottle"]);

        assert!(catalog.contains("lift_pot"));
        assert!(!catalog.is_enabled("lift_pot"));
        assert!(!catalog.contains("fly_to_moon"));
    }

    #[test]
    fn test_enabled_defaults_to_true() {
        let catalog = TaskCatalog::from_toml_str(
            r#"
            [[tasks]]
            name = "lift_pot"

            [[tasks]]
            name = "scan_object"
            enabled = false
            "#,
        )
        .unwrap();

        assert!(catalog.is_enabled("lift_pot"));
        assert!(!catalog.is_enabled("scan_object"));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = TaskCatalog::new(vec![
            TaskEntry::new("lift_pot", true),
            TaskEntry::new("lift_pot", false),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("duplicate task 'lift_pot'"));
    }

    #[test]
    fn test_invalid_toml() {
        let err = TaskCatalog::from_toml_str("[[tasks]]\nenabled = true\n").unwrap_err();
        assert!(matches!(err, DriverError::Toml(_)));
    }
}
