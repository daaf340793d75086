//! # EAT Check Driver
//!
//! 驱动外部仿真数据采集进程，解析其输出并按任务写出 EAT check 配置。
//!
//! ## 包含模块
//!
//! - `collector` - 采集进程接口与子进程实现
//! - `catalog` - 任务目录（带启用标记）
//! - `settings` - TOML 配置
//! - `driver` - 单任务流程
//! - `batch` - run-all / run-missing
//! - `cleanup` - 数据目录清理
//!
//! ## 使用示例
//!
//! ```no_run
//! use eat_check_driver::{DriverSettings, ShellCollector, TaskDriver, TaskSetManager};
//!
//! # fn main() -> Result<(), eat_check_driver::DriverError> {
//! let settings = DriverSettings::default();
//! let collector = ShellCollector::from_settings(&settings.collector);
//! let driver = TaskDriver::from_settings(&settings, settings.catalog()?, collector)
//!     .with_line_sink(|line| println!("{}", line));
//!
//! let mut manager = TaskSetManager::new(driver);
//! let report = manager.run_missing()?;
//! println!("{} succeeded, {} failed", report.succeeded.len(), report.failed.len());
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod catalog;
pub mod cleanup;
pub mod collector;
pub mod driver;
pub mod error;
pub mod settings;

pub use batch::{BatchReport, TaskSetManager, missing_tasks};
pub use catalog::{TaskCatalog, TaskEntry};
pub use cleanup::{CleanupReport, clean_data_dir};
pub use collector::{CollectorOutput, DataCollector, ShellCollector};
pub use driver::{LineSink, TaskDriver, TaskReport};
pub use error::DriverError;
pub use settings::{BatchSettings, CollectorSettings, DriverSettings, PathSettings};
