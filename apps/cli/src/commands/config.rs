//! 配置管理命令
//!
//! 查看当前生效的配置，或写出一份缺省配置文件

use anyhow::{Context, Result};
use clap::Subcommand;
use std::fs;
use std::path::PathBuf;

use crate::config::{LOCAL_CONFIG, LoadedSettings};
use eat_check_driver::DriverSettings;

/// 配置命令
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// 显示当前生效的配置
    Show,

    /// 写出缺省配置文件
    Init {
        /// 目标路径（缺省为当前目录 eat_check.toml）
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// 覆盖已存在的文件
        #[arg(long)]
        force: bool,
    },
}

impl ConfigCommand {
    pub fn execute(self, loaded: LoadedSettings) -> Result<()> {
        match self {
            ConfigCommand::Show => Self::show_(loaded),

            ConfigCommand::Init { path, force } => Self::init_(path, force),
        }
    }

    fn show_(loaded: LoadedSettings) -> Result<()> {
        match &loaded.source {
            Some(path) => println!("# 配置文件: {}", path.display()),
            None => println!("# 未找到配置文件，使用内置缺省值"),
        }

        print!("{}", loaded.settings.to_toml_string()?);
        Ok(())
    }

    fn init_(path: Option<PathBuf>, force: bool) -> Result<()> {
        let path = path.unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG));

        if path.exists() && !force {
            anyhow::bail!("配置文件已存在: {}（使用 --force 覆盖）", path.display());
        }

        let content = DriverSettings::default().to_toml_string()?;
        fs::write(&path, content)
            .with_context(|| format!("写入配置文件失败: {}", path.display()))?;

        println!("✅ 已写出缺省配置: {}", path.display());
        Ok(())
    }
}
