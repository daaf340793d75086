//! missing 命令
//!
//! 列出输出目录中还没有配置文件的已启用任务，不运行采集

use anyhow::Result;
use clap::Args;
use eat_check_driver::{DriverSettings, missing_tasks};
use std::path::PathBuf;

/// 缺失检查参数
#[derive(Args, Debug, Default)]
pub struct MissingCommand {
    /// 输出目录（覆盖配置）
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

impl MissingCommand {
    pub fn execute(self, settings: DriverSettings) -> Result<()> {
        let output_dir = self.output_dir.unwrap_or_else(|| settings.paths.output_dir.clone());
        let catalog = settings.catalog()?;
        let missing = missing_tasks(&catalog, &output_dir)?;

        if missing.is_empty() {
            println!("✅ {} 中所有任务都已生成", output_dir.display());
            return Ok(());
        }

        println!("缺失 {} 个任务配置（{}）:", missing.len(), output_dir.display());
        for task in &missing {
            println!("  - {}", task);
        }

        Ok(())
    }
}
