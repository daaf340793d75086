//! 命令定义和实现

pub mod config;
pub mod generate;
pub mod missing;
pub mod tasks;

pub use config::ConfigCommand;
pub use generate::GenerateCommand;
pub use missing::MissingCommand;
pub use tasks::TasksCommand;
