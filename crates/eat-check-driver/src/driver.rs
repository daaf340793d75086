//! # 任务驱动
//!
//! 单个任务的完整流程：
//!
//! ```text
//! 校验任务名 → 运行采集进程（逐行回显）→ 检查退出码
//!           → 从头扫描缓冲输出 → 写出 <output_dir>/<task>.yml
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use eat_check_parser::{ArmSide, ParseStats, ScanResult, scan_log, write_config};
use tracing::{error, info, warn};

use crate::catalog::TaskCatalog;
use crate::collector::DataCollector;
use crate::error::DriverError;
use crate::settings::DriverSettings;

/// 采集输出的回显回调
pub type LineSink = Box<dyn FnMut(&str)>;

/// 单个任务的处理结果
#[derive(Debug, Clone, PartialEq)]
pub struct TaskReport {
    pub task: String,
    pub output_path: PathBuf,
    pub left_episodes: usize,
    pub right_episodes: usize,
    pub stats: ParseStats,
}

/// 任务驱动
pub struct TaskDriver<C> {
    catalog: TaskCatalog,
    collector: C,
    output_dir: PathBuf,
    mode: String,
    seed: u64,
    sink: LineSink,
}

impl<C: DataCollector> TaskDriver<C> {
    /// 创建驱动，采集模式和种子取缺省值，回显丢弃
    pub fn new(catalog: TaskCatalog, collector: C, output_dir: impl Into<PathBuf>) -> Self {
        let defaults = DriverSettings::default().collector;
        Self {
            catalog,
            collector,
            output_dir: output_dir.into(),
            mode: defaults.mode,
            seed: defaults.seed,
            sink: Box::new(|_: &str| {}),
        }
    }

    /// 按配置创建驱动
    pub fn from_settings(settings: &DriverSettings, catalog: TaskCatalog, collector: C) -> Self {
        Self::new(catalog, collector, settings.paths.output_dir.clone())
            .with_run_params(settings.collector.mode.clone(), settings.collector.seed)
    }

    /// 设置传给采集进程的模式和种子
    pub fn with_run_params(mut self, mode: impl Into<String>, seed: u64) -> Self {
        self.mode = mode.into();
        self.seed = seed;
        self
    }

    /// 设置回显回调
    pub fn with_line_sink(mut self, sink: impl FnMut(&str) + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn catalog(&self) -> &TaskCatalog {
        &self.catalog
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// 输出文件路径
    pub fn output_path(&self, task: &str) -> PathBuf {
        self.output_dir.join(format!("{}.yml", task))
    }

    /// 生成一个任务的配置文件
    pub fn generate(&mut self, task: &str) -> Result<TaskReport, DriverError> {
        let entry = self
            .catalog
            .get(task)
            .ok_or_else(|| DriverError::UnknownTask(task.to_string()))?;
        if !entry.enabled {
            return Err(DriverError::TaskDisabled(task.to_string()));
        }

        info!("Starting data collection for task: {}", task);
        let output = self.collector.run(task, &self.mode, self.seed, &mut *self.sink)?;

        if !output.success() {
            let err = DriverError::CollectorFailed {
                task: task.to_string(),
                exit_code: output.exit_code,
                stderr: output.error_text,
            };
            error!("{}", err.detail());
            return Err(err);
        }

        fs::create_dir_all(&self.output_dir).map_err(|e| DriverError::io(&self.output_dir, e))?;

        info!("Processing {} collected lines", output.output_lines.len());
        let ScanResult { episodes, stats } = scan_log(&output.output_lines);
        if !stats.is_clean() {
            warn!(
                "Task {}: {} dropped or malformed records ({})",
                task,
                stats.lossy_records(),
                stats
            );
        }

        let output_path = self.output_path(task);
        info!("Writing configuration to {}", output_path.display());
        write_config(&episodes, &output_path)?;

        let report = TaskReport {
            task: task.to_string(),
            output_path,
            left_episodes: episodes.count(ArmSide::Left),
            right_episodes: episodes.count(ArmSide::Right),
            stats,
        };
        info!(
            "Task {} done: {} left arm episodes, {} right arm episodes",
            task, report.left_episodes, report.right_episodes
        );

        Ok(report)
    }
}
