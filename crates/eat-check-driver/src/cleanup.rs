//! 启动时清空采集数据目录
//!
//! 逐项删除目录下的内容，单项失败只记录日志，不中断启动。

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{error, info};

/// 清理结果
#[derive(Debug, Default)]
pub struct CleanupReport {
    pub removed: usize,
    pub failed: Vec<(PathBuf, io::Error)>,
}

/// 删除 `dir` 下的所有文件和子目录（保留 `dir` 本身）
///
/// 目录不存在时什么也不做。
pub fn clean_data_dir(dir: &Path) -> CleanupReport {
    let mut report = CleanupReport::default();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return report,
        Err(e) => {
            error!("Failed to read {}: {}", dir.display(), e);
            report.failed.push((dir.to_path_buf(), e));
            return report;
        },
    };

    info!("Cleaning up {}...", dir.display());
    for entry in entries {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                error!("Failed to read entry in {}: {}", dir.display(), e);
                report.failed.push((dir.to_path_buf(), e));
                continue;
            },
        };

        // symlink 不跟随，只删链接本身
        let result = match fs::symlink_metadata(&path) {
            Ok(meta) if meta.is_dir() => fs::remove_dir_all(&path),
            Ok(_) => fs::remove_file(&path),
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => report.removed += 1,
            Err(e) => {
                error!("Failed to remove {}: {}", path.display(), e);
                report.failed.push((path, e));
            },
        }
    }

    info!("Data directory cleaned ({} entries removed)", report.removed);
    report
}
