//! # 位姿行提取
//!
//! 采集日志中每个目标位姿占一行，例如：
//!
//! ```text
//! left arm target_pose: 0.10 0.20 0.30 0.0 0.0 0.0 1.0
//! left arm constraint_pose: [1, 0, 0, 0, 0, 0]
//! right arm constraint_pose: None
//! ```
//!
//! 目标位姿 = 3 维位置 + 4 维四元数；约束 = 6 个数，缺省时为全零。
//! 提取时不校验个数，格式由采集端保证。

use regex::Regex;
use std::sync::LazyLock;

/// 目标位姿长度（位置 3 + 四元数 4）
pub const POSE_LEN: usize = 7;

/// 约束位姿长度
pub const CONSTRAINT_LEN: usize = 6;

/// 位置分量个数
const POSITION_LEN: usize = 3;

/// 目标位姿：`[x, y, z, qx, qy, qz, qw]`
pub type Pose = Vec<f64>;

/// 约束位姿：6 个数
pub type Constraint = Vec<f64>;

/// 日志中的固定标记子串
pub mod markers {
    /// episode 起始（外层扫描使用）
    pub const EPISODE_START: &str = "arm target_pose";
    /// 目标位姿行
    pub const TARGET_POSE: &str = "target_pose";
    /// 约束位姿行
    pub const CONSTRAINT_POSE: &str = "constraint_pose";
    /// episode 结束行
    pub const EPISODE_END: &str = "simulate data episode";
    /// 结束行中的成功标记
    pub const SUCCESS: &str = "success";
    /// 约束缺省标记
    pub const ABSENT: &str = "None";
    pub const LEFT_ARM: &str = "left arm";
    pub const RIGHT_ARM: &str = "right arm";
}

/// 位姿数值：必须带小数点，可选指数
static POSE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?\d+\.\d+(?:[eE][-+]?\d+)?").unwrap());

/// 约束数值：允许整数
static CONSTRAINT_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?\d+(?:\.\d*)?(?:[eE][-+]?\d+)?").unwrap());

/// 机械臂侧
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArmSide {
    Left,
    Right,
}

impl ArmSide {
    /// 根据日志行判断机械臂侧
    ///
    /// 含 `"left arm"` 为左臂，其余一律视为右臂。
    pub fn from_line(line: &str) -> Self {
        if line.contains(ArmSide::Left.marker()) {
            ArmSide::Left
        } else {
            ArmSide::Right
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ArmSide::Left => "left",
            ArmSide::Right => "right",
        }
    }

    /// 日志中对应的标记子串
    pub fn marker(self) -> &'static str {
        match self {
            ArmSide::Left => markers::LEFT_ARM,
            ArmSide::Right => markers::RIGHT_ARM,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            ArmSide::Left => 0,
            ArmSide::Right => 1,
        }
    }
}

impl std::fmt::Display for ArmSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 单行目标位姿的提取结果
///
/// 前 3 个数为位置，其余为姿态。畸形行的长度可能不是 3/4。
#[derive(Debug, Clone, PartialEq)]
pub struct PoseLine {
    pub position: Vec<f64>,
    pub orientation: Vec<f64>,
}

impl PoseLine {
    /// 是否恰好是 3 + 4 个数
    pub fn is_well_formed(&self) -> bool {
        self.position.len() == POSITION_LEN && self.orientation.len() == POSE_LEN - POSITION_LEN
    }

    /// 拼接为 `[position..., orientation...]`
    pub fn into_target(self) -> Pose {
        let mut pose = self.position;
        pose.extend(self.orientation);
        pose
    }
}

/// 按出现顺序提取一行中的所有浮点数（必须带小数点）
pub fn extract_floats(line: &str) -> Vec<f64> {
    extract_with(&POSE_NUMBER, line)
}

/// 解析目标位姿行
pub fn parse_pose_line(line: &str) -> PoseLine {
    let mut position = extract_floats(line);
    let split = position.len().min(POSITION_LEN);
    let orientation = position.split_off(split);

    PoseLine {
        position,
        orientation,
    }
}

/// 解析约束位姿行
///
/// 含 `"None"` 时返回全零 6 维向量，忽略行内其他数字。
pub fn parse_constraint_line(line: &str) -> Constraint {
    if line.contains(markers::ABSENT) {
        return vec![0.0; CONSTRAINT_LEN];
    }

    extract_with(&CONSTRAINT_NUMBER, line)
}

fn extract_with(re: &Regex, line: &str) -> Vec<f64> {
    re.find_iter(line).filter_map(|m| m.as_str().parse::<f64>().ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pose_line_splits_position_and_quaternion() {
        let pose = parse_pose_line("left arm target_pose: 0.10 0.20 0.30 0.0 0.0 0.0 1.0");
        assert_eq!(pose.position, vec![0.10, 0.20, 0.30]);
        assert_eq!(pose.orientation, vec![0.0, 0.0, 0.0, 1.0]);
        assert!(pose.is_well_formed());
        assert_eq!(pose.into_target(), vec![0.10, 0.20, 0.30, 0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_parse_pose_line_scientific_and_negative() {
        let pose = parse_pose_line(
            "right arm target_pose: [-0.25, 1.5e-05, 3.0E+2, -1.0e-3, 0.0, 0.7071, 0.7071]",
        );
        assert_eq!(pose.position, vec![-0.25, 1.5e-05, 300.0]);
        assert_eq!(pose.orientation, vec![-1.0e-3, 0.0, 0.7071, 0.7071]);
    }

    #[test]
    fn test_parse_pose_line_ignores_integers() {
        // 整数不是位姿数值
        let pose = parse_pose_line("left arm target_pose step 3: 1.0 2.0 3.0 0.0 0.0 0.0 1.0");
        assert_eq!(pose.position, vec![1.0, 2.0, 3.0]);
        assert!(pose.is_well_formed());
    }

    #[test]
    fn test_parse_pose_line_malformed_is_lenient() {
        let pose = parse_pose_line("left arm target_pose: 0.1 0.2");
        assert_eq!(pose.position, vec![0.1, 0.2]);
        assert!(pose.orientation.is_empty());
        assert!(!pose.is_well_formed());

        let pose = parse_pose_line("left arm target_pose: 0.1 0.2 0.3 0.4 0.5 0.6 0.7 0.8");
        assert_eq!(pose.orientation.len(), 5);
        assert!(!pose.is_well_formed());
    }

    #[test]
    fn test_constraint_none_is_zero_vector() {
        assert_eq!(
            parse_constraint_line("left arm constraint_pose: None"),
            vec![0.0; CONSTRAINT_LEN]
        );
        // 即使行内还有其他数字
        assert_eq!(
            parse_constraint_line("right arm constraint_pose: None 1.0 2 3"),
            vec![0.0; CONSTRAINT_LEN]
        );
    }

    #[test]
    fn test_constraint_accepts_integers() {
        assert_eq!(
            parse_constraint_line("left arm constraint_pose: [1, 0, 0.5, -2, 0, 1.]"),
            vec![1.0, 0.0, 0.5, -2.0, 0.0, 1.0]
        );
    }

    #[test]
    fn test_arm_side_from_line() {
        assert_eq!(ArmSide::from_line("left arm target_pose: 0.1"), ArmSide::Left);
        assert_eq!(ArmSide::from_line("right arm target_pose: 0.1"), ArmSide::Right);
        // 未标明的一律视为右臂
        assert_eq!(ArmSide::from_line("target_pose: 0.1"), ArmSide::Right);
        assert_eq!(ArmSide::Left.to_string(), "left");
        assert_eq!(ArmSide::Right.marker(), "right arm");
    }
}
