//! 解析层错误类型定义

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 配置文件读写错误
#[derive(Error, Debug)]
pub enum ParseError {
    /// 文件读写失败
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// YAML 内容无法解析为 episode 映射
    #[error("Invalid EAT check config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ParseError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
