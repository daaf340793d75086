//! # EAT check 配置文件
//!
//! 每个任务一个 `<task>.yml`，episode 名称 → 位姿序列：
//!
//! ```yaml
//! left_arm_0:
//!   constraint_poses:
//!   - [0.0, 0.0, 0.0, 0.0, 0.0, 0.0]
//!   target_poses:
//!   - [0.1, 0.2, 0.3, 0.0, 0.0, 0.0, 1.0]
//! ```
//!
//! 映射用块风格、最内层序列用流风格，键按字母序排列，与下游校验工具读取的
//! 格式保持一致。serde_yaml 不支持逐层指定流风格，因此写出部分手工拼接，
//! 回读仍然走 serde_yaml。

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::episode::Episode;
use crate::episode_set::EpisodeSet;
use crate::error::ParseError;

/// 格式化单个浮点数
///
/// 保证 YAML 1.1 读取器也会解析为浮点：总带小数点，指数带符号。
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return ".nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { ".inf" } else { "-.inf" }.to_string();
    }

    // Debug 对整数值输出 "1.0"，对极大/极小值输出 "1e-7"
    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        None => repr,
        Some((mantissa, exponent)) => {
            let dot = if mantissa.contains('.') { "" } else { ".0" };
            let sign = if exponent.starts_with('-') { "" } else { "+" };
            format!("{}{}e{}{}", mantissa, dot, sign, exponent)
        },
    }
}

fn write_flow_sequence(out: &mut String, values: &[f64]) {
    out.push('[');
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&format_float(*value));
    }
    out.push(']');
}

fn write_pose_list(out: &mut String, key: &str, poses: &[Vec<f64>]) {
    if poses.is_empty() {
        let _ = writeln!(out, "  {}: []", key);
        return;
    }

    let _ = writeln!(out, "  {}:", key);
    for pose in poses {
        out.push_str("  - ");
        write_flow_sequence(out, pose);
        out.push('\n');
    }
}

/// 序列化为 YAML 文本
pub fn to_yaml_string(set: &EpisodeSet) -> String {
    if set.is_empty() {
        return "{}\n".to_string();
    }

    let mut out = String::new();
    for (name, episode) in set.iter() {
        let _ = writeln!(out, "{}:", name);
        write_pose_list(&mut out, "constraint_poses", &episode.constraint_poses);
        write_pose_list(&mut out, "target_poses", &episode.target_poses);
    }
    out
}

/// 写出配置文件（覆盖已有文件）
pub fn write_config<P: AsRef<Path>>(set: &EpisodeSet, path: P) -> Result<(), ParseError> {
    let path = path.as_ref();
    fs::write(path, to_yaml_string(set)).map_err(|e| ParseError::io(path, e))
}

/// 读取配置文件
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<BTreeMap<String, Episode>, ParseError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| ParseError::io(path, e))?;
    let episodes = serde_yaml::from_str(&content)?;
    Ok(episodes)
}
