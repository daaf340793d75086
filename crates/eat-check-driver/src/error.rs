//! 驱动层错误类型定义

use eat_check_parser::ParseError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 驱动层错误类型
#[derive(Error, Debug)]
pub enum DriverError {
    /// 任务不在目录中
    #[error("Unknown task '{0}'")]
    UnknownTask(String),

    /// 任务在目录中但未启用
    #[error("Task '{0}' is disabled in the catalog")]
    TaskDisabled(String),

    /// 无法启动采集进程
    #[error("Failed to spawn collector '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// 采集进程已启动，但读取其输出失败
    #[error("Failed to read output of collector '{program}': {source}")]
    CollectorIo {
        program: String,
        #[source]
        source: io::Error,
    },

    /// 采集进程非零退出
    ///
    /// `stderr` 保存采集进程的错误输出，由调用方决定如何展示。
    #[error("Collector failed for task '{task}' ({})", exit_label(.exit_code))]
    CollectorFailed {
        task: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    /// 文件系统错误
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 配置或任务目录 TOML 解析失败
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// 配置序列化失败
    #[error("TOML serialize error: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    /// 任务目录内容无效（如重名）
    #[error("Invalid task catalog: {0}")]
    Catalog(String),

    /// 写出配置文件失败
    #[error("Failed to write EAT check config: {0}")]
    Output(#[from] ParseError),
}

impl DriverError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl DriverError {
    /// 带采集进程错误输出的完整描述
    ///
    /// 对 [`DriverError::CollectorFailed`] 追加非空的 stderr，其余同 `Display`。
    pub fn detail(&self) -> String {
        match self {
            Self::CollectorFailed { stderr, .. } if !stderr.trim().is_empty() => {
                format!("{}\n{}", self, stderr.trim_end())
            },
            _ => self.to_string(),
        }
    }
}

fn exit_label(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("return code: {}", code),
        None => "terminated by signal".to_string(),
    }
}
