//! tasks 命令
//!
//! 列出任务目录

use anyhow::Result;
use clap::Args;
use eat_check_driver::DriverSettings;

/// 任务列表参数
#[derive(Args, Debug, Default)]
pub struct TasksCommand {
    /// 同时列出未启用的任务
    #[arg(short, long)]
    pub all: bool,
}

impl TasksCommand {
    pub fn execute(self, settings: DriverSettings) -> Result<()> {
        let catalog = settings.catalog()?;
        let enabled = catalog.enabled().count();

        println!("任务目录: {} 个任务，{} 个已启用", catalog.len(), enabled);
        for entry in catalog.entries() {
            if entry.enabled {
                println!("  ✅ {}", entry.name);
            } else if self.all {
                println!("  ⏸️  {}", entry.name);
            }
        }

        Ok(())
    }
}
