//! # EAT Check Parser - 采集日志解析
//!
//! 把仿真数据采集进程的文本输出解析为按机械臂分组的位姿序列，
//! 并写出 EAT check 所需的 YAML 配置。
//!
//! **依赖原则**: 纯数据变换，不启动子进程，不依赖 `eat-check-driver`
//!
//! ## 包含模块
//!
//! - `pose` - 单行位姿/约束提取（正则）
//! - `episode` - 单个 episode 的收集器
//! - `episode_set` - episode 命名与汇总
//! - `scan` - 整段日志扫描
//! - `stats` - 丢弃/畸形记录的诊断计数
//! - `eat_config` - YAML 输出与回读
//!
//! ## 使用示例
//!
//! ```
//! use eat_check_parser::scan_log;
//!
//! let log = [
//!     "left arm target_pose: 0.10 0.20 0.30 0.0 0.0 0.0 1.0",
//!     "left arm constraint_pose: None",
//!     "simulate data episode 1 success",
//! ];
//!
//! let result = scan_log(&log);
//! let episode = result.episodes.get("left_arm_0").unwrap();
//! assert_eq!(episode.constraint_poses, vec![vec![0.0; 6]]);
//! ```

pub mod eat_config;
pub mod episode;
pub mod episode_set;
pub mod error;
pub mod pose;
pub mod scan;
pub mod stats;

// 重新导出常用类型
pub use eat_config::{format_float, load_config, to_yaml_string, write_config};
pub use episode::{CollectOutcome, CollectedEpisode, Episode, collect_episode};
pub use episode_set::{EpisodeSet, episode_name};
pub use error::ParseError;
pub use pose::{
    ArmSide, CONSTRAINT_LEN, Constraint, POSE_LEN, Pose, PoseLine, extract_floats,
    parse_constraint_line, parse_pose_line,
};
pub use scan::{ScanResult, scan_log};
pub use stats::ParseStats;
