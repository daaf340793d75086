//! # 批量生成
//!
//! - run-all：依次处理目录中所有已启用任务
//! - run-missing：只处理输出目录中还没有同名文件（按文件名去扩展名比较）的任务
//!
//! 单个任务失败只记录日志，不中断整批。

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use tracing::{error, info};

use crate::catalog::TaskCatalog;
use crate::collector::DataCollector;
use crate::driver::{TaskDriver, TaskReport};
use crate::error::DriverError;

/// 输出目录中缺失配置文件的已启用任务，按目录顺序
///
/// 输出目录不存在时所有已启用任务都算缺失。
pub fn missing_tasks(catalog: &TaskCatalog, output_dir: &Path) -> Result<Vec<String>, DriverError> {
    let existing = existing_stems(output_dir)?;
    Ok(catalog
        .enabled()
        .filter(|task| !existing.contains(*task))
        .map(str::to_string)
        .collect())
}

fn existing_stems(dir: &Path) -> Result<HashSet<String>, DriverError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(HashSet::new()),
        Err(e) => return Err(DriverError::io(dir, e)),
    };

    let mut stems = HashSet::new();
    for entry in entries {
        let entry = entry.map_err(|e| DriverError::io(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            stems.insert(stem.to_string());
        }
    }
    Ok(stems)
}

/// 批量处理结果
#[derive(Debug, Default)]
pub struct BatchReport {
    pub succeeded: Vec<TaskReport>,
    /// (任务名, 错误信息)；采集失败时含其错误输出
    pub failed: Vec<(String, String)>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// 任务集合管理
pub struct TaskSetManager<C> {
    driver: TaskDriver<C>,
}

impl<C: DataCollector> TaskSetManager<C> {
    pub fn new(driver: TaskDriver<C>) -> Self {
        Self { driver }
    }

    /// 输出目录中缺失的任务
    pub fn missing(&self) -> Result<Vec<String>, DriverError> {
        missing_tasks(self.driver.catalog(), self.driver.output_dir())
    }

    /// 处理所有已启用任务
    pub fn run_all(&mut self) -> BatchReport {
        let tasks: Vec<String> = self.driver.catalog().enabled().map(str::to_string).collect();
        info!("Starting to generate configs for all {} tasks", tasks.len());
        self.run_tasks(&tasks)
    }

    /// 只处理缺失的任务
    pub fn run_missing(&mut self) -> Result<BatchReport, DriverError> {
        let tasks = self.missing()?;
        if tasks.is_empty() {
            info!("All tasks already have configs, nothing to do");
        } else {
            info!("Found {} tasks missing configs: {}", tasks.len(), tasks.join(", "));
        }
        Ok(self.run_tasks(&tasks))
    }

    fn run_tasks(&mut self, tasks: &[String]) -> BatchReport {
        let mut report = BatchReport::default();

        for (i, task) in tasks.iter().enumerate() {
            info!("[{}/{}] Processing task: {}", i + 1, tasks.len(), task);

            match self.driver.generate(task) {
                Ok(task_report) => report.succeeded.push(task_report),
                Err(err) => {
                    error!("Task {} failed: {}", task, err);
                    report.failed.push((task.clone(), err.detail()));
                },
            }
        }

        report
    }
}
