//! # EAT Check Config Generator
//!
//! 驱动仿真数据采集脚本，从其输出中提取每个 episode 的机械臂位姿，
//! 并为每个任务写出 EAT check 配置文件。
//!
//! ## 用法
//!
//! ```bash
//! # 单个任务
//! eat-check-gen generate lift_pot
//!
//! # 所有已启用任务（不带子命令时的缺省行为）
//! eat-check-gen
//!
//! # 只补齐输出目录中缺失的任务
//! eat-check-gen generate --missing
//!
//! # 查看缺失的任务 / 任务目录
//! eat-check-gen missing
//! eat-check-gen tasks --all
//!
//! # 写出缺省配置文件
//! eat-check-gen config init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::{ConfigCommand, GenerateCommand, MissingCommand, TasksCommand};

/// 未设置 RUST_LOG 时的日志级别
const DEFAULT_LOG_FILTER: &str = "eat_check_gen=info,eat_check_driver=info,eat_check_parser=info";

/// EAT check 配置生成工具
#[derive(Parser, Debug)]
#[command(name = "eat-check-gen")]
#[command(about = "Generate EAT check configs from simulated data collection runs", long_about = None)]
#[command(version)]
struct Cli {
    /// 配置文件路径
    #[arg(short = 'c', long = "config", global = true, value_name = "FILE")]
    config_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 运行采集并生成配置（缺省命令）
    Generate {
        #[command(flatten)]
        args: GenerateCommand,
    },

    /// 列出缺失配置的任务
    Missing {
        #[command(flatten)]
        args: MissingCommand,
    },

    /// 列出任务目录
    Tasks {
        #[command(flatten)]
        args: TasksCommand,
    },

    /// 配置管理
    #[command(subcommand)]
    Config(ConfigCommand),
}

fn main() -> Result<()> {
    // 初始化日志：RUST_LOG 优先，未设置时使用缺省级别
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let loaded = config::load_settings(cli.config_file.as_deref())?;

    match cli.command.unwrap_or(Commands::Generate {
        args: GenerateCommand::default(),
    }) {
        Commands::Generate { args } => args.execute(loaded.settings),

        Commands::Missing { args } => args.execute(loaded.settings),

        Commands::Tasks { args } => args.execute(loaded.settings),

        Commands::Config(cmd) => cmd.execute(loaded),
    }
}
