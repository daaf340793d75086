//! generate 命令
//!
//! 运行采集并生成 EAT check 配置。不指定任务时进入批量模式。

use anyhow::Result;
use clap::Args;
use eat_check_driver::{
    BatchReport, DriverError, DriverSettings, ShellCollector, TaskCatalog, TaskDriver,
    TaskReport, TaskSetManager, clean_data_dir,
};
use std::path::PathBuf;

/// 生成命令参数
#[derive(Args, Debug, Default)]
pub struct GenerateCommand {
    /// 只处理指定任务；省略时批量处理目录中所有已启用任务
    pub task: Option<String>,

    /// 批量模式下只处理输出目录中缺失的任务
    #[arg(long, conflicts_with = "task")]
    pub missing: bool,

    /// 启动时不清空数据目录
    #[arg(long)]
    pub keep_data: bool,

    /// 输出目录（覆盖配置）
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

impl GenerateCommand {
    pub fn execute(self, mut settings: DriverSettings) -> Result<()> {
        if let Some(dir) = &self.output_dir {
            settings.paths.output_dir = dir.clone();
        }

        if !self.keep_data {
            let cleanup = clean_data_dir(&settings.paths.data_dir);
            if !cleanup.failed.is_empty() {
                println!(
                    "⚠️  清理 {} 时有 {} 项删除失败",
                    settings.paths.data_dir.display(),
                    cleanup.failed.len()
                );
            }
        }

        let catalog = settings.catalog()?;
        let collector = ShellCollector::from_settings(&settings.collector);
        let driver = TaskDriver::from_settings(&settings, catalog, collector)
            .with_line_sink(|line| println!("{}", line));

        match self.task {
            Some(task) => Self::run_single(driver, &task),
            None => {
                let only_missing = self.missing || settings.batch.only_missing;
                Self::run_batch(TaskSetManager::new(driver), only_missing)
            },
        }
    }

    fn run_single(mut driver: TaskDriver<ShellCollector>, task: &str) -> Result<()> {
        println!("📋 开始采集任务: {}", task);
        println!("⏳ 采集中（可能需要较长时间）...");
        println!();

        match driver.generate(task) {
            Ok(report) => {
                println!();
                print_task_report(&report);
                Ok(())
            },

            Err(err) => {
                match &err {
                    DriverError::UnknownTask(_) | DriverError::TaskDisabled(_) => {
                        print_available_tasks(driver.catalog());
                    },
                    DriverError::CollectorFailed { stderr, .. } if !stderr.trim().is_empty() => {
                        println!("❌ 错误输出:");
                        println!("{}", stderr.trim_end());
                    },
                    _ => {},
                }
                Err(err.into())
            },
        }
    }

    fn run_batch(mut manager: TaskSetManager<ShellCollector>, only_missing: bool) -> Result<()> {
        let report = if only_missing {
            manager.run_missing()?
        } else {
            manager.run_all()
        };

        println!();
        print_batch_report(&report);
        Ok(())
    }
}

fn print_available_tasks(catalog: &TaskCatalog) {
    println!("可用任务:");
    for task in catalog.enabled() {
        println!("  - {}", task);
    }
}

fn print_task_report(report: &TaskReport) {
    println!("✅ 处理完成:");
    println!("  左臂 episode: {}", report.left_episodes);
    println!("  右臂 episode: {}", report.right_episodes);
    if !report.stats.is_clean() {
        println!("  ⚠️  丢弃/畸形记录: {}", report.stats.lossy_records());
    }
    println!("💾 配置已保存到: {}", report.output_path.display());
}

fn print_batch_report(report: &BatchReport) {
    println!("📊 批量生成结果:");
    println!("  总任务数: {}", report.total());
    println!("  成功: {}", report.succeeded.len());
    println!("  失败: {}", report.failed.len());

    if !report.failed.is_empty() {
        println!();
        println!("❌ 失败的任务:");
        for (task, err) in &report.failed {
            println!("  {}: {}", task, err);
        }
    }
}
