//! # 驱动配置
//!
//! TOML 配置文件，所有字段都有缺省值：
//!
//! ```toml
//! [collector]
//! program = "bash"
//! args = ["collect_data.sh", "{task}", "{mode}", "{seed}"]
//! mode = "demo_randomized"
//! seed = 0
//!
//! [paths]
//! output_dir = "eat_check_config"
//! data_dir = "./data"
//!
//! [batch]
//! only_missing = false
//! ```
//!
//! 任务目录可以内联 `[[tasks]]`，也可以用 `catalog_file` 指向单独的文件；
//! 两者都没有时使用内置目录。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{TaskCatalog, TaskEntry};
use crate::error::DriverError;

/// 驱动配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverSettings {
    /// 单独的任务目录文件（相对路径以配置文件所在目录为基准）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_file: Option<PathBuf>,

    pub collector: CollectorSettings,

    pub paths: PathSettings,

    pub batch: BatchSettings,

    /// 内联任务目录
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<TaskEntry>,
}

impl DriverSettings {
    /// 从 TOML 文本解析
    pub fn from_toml_str(content: &str) -> Result<Self, DriverError> {
        Ok(toml::from_str(content)?)
    }

    /// 从文件加载，`catalog_file` 解析为相对配置文件目录的路径
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DriverError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| DriverError::io(path, e))?;
        let mut settings = Self::from_toml_str(&content)?;

        if let Some(catalog_file) = settings.catalog_file.take() {
            let resolved = match path.parent() {
                Some(base) if catalog_file.is_relative() => base.join(catalog_file),
                _ => catalog_file,
            };
            settings.catalog_file = Some(resolved);
        }

        Ok(settings)
    }

    /// 序列化为 TOML 文本
    pub fn to_toml_string(&self) -> Result<String, DriverError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// 解析任务目录：内联 > catalog_file > 内置
    pub fn catalog(&self) -> Result<TaskCatalog, DriverError> {
        if !self.tasks.is_empty() {
            return TaskCatalog::new(self.tasks.clone());
        }

        match &self.catalog_file {
            Some(path) => TaskCatalog::load(path),
            None => TaskCatalog::builtin(),
        }
    }
}

/// 采集命令配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectorSettings {
    /// 可执行程序
    pub program: String,

    /// 参数模板，支持 `{task}` `{mode}` `{seed}` 占位符
    pub args: Vec<String>,

    /// 采集模式（第二个固定参数）
    pub mode: String,

    /// 随机种子（第三个固定参数）
    pub seed: u64,

    /// 工作目录，缺省为当前目录
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<PathBuf>,
}

impl Default for CollectorSettings {
    fn default() -> Self {
        Self {
            program: "bash".to_string(),
            args: ["collect_data.sh", "{task}", "{mode}", "{seed}"]
                .into_iter()
                .map(String::from)
                .collect(),
            mode: "demo_randomized".to_string(),
            seed: 0,
            working_dir: None,
        }
    }
}

/// 路径配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    /// 配置文件输出目录
    pub output_dir: PathBuf,

    /// 启动时清空的采集数据目录
    pub data_dir: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("eat_check_config"),
            data_dir: PathBuf::from("./data"),
        }
    }
}

/// 批量模式配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchSettings {
    /// 只生成输出目录中缺失的任务
    pub only_missing: bool,
}
