//! 解析诊断计数
//!
//! 解析保持宽松（不拒绝畸形行），但丢弃和畸形的记录都要计数，避免静默丢数据。

use std::fmt;

/// 一次扫描的诊断计数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// 带成功标记的结束行
    pub accepted_episodes: usize,

    /// 不带成功标记的结束行（整段丢弃）
    pub failed_episodes: usize,

    /// 输入结束时仍未遇到结束行的 episode
    pub unterminated_episodes: usize,

    /// 没有配对约束的目标位姿
    pub dropped_targets: usize,

    /// 没有待配对目标的约束行
    pub orphan_constraints: usize,

    /// 不是 3 + 4 个数的目标位姿行
    pub malformed_poses: usize,

    /// 非 None 且不是 6 个数的约束行
    pub malformed_constraints: usize,
}

impl ParseStats {
    /// 被丢弃或可能有问题的记录总数
    pub fn lossy_records(&self) -> usize {
        self.dropped_targets
            + self.orphan_constraints
            + self.malformed_poses
            + self.malformed_constraints
    }

    /// 是否没有任何丢弃或畸形记录
    pub fn is_clean(&self) -> bool {
        self.lossy_records() == 0
    }
}

impl fmt::Display for ParseStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "episodes: {} accepted, {} failed, {} unterminated; \
             dropped targets: {}, orphan constraints: {}, \
             malformed poses: {}, malformed constraints: {}",
            self.accepted_episodes,
            self.failed_episodes,
            self.unterminated_episodes,
            self.dropped_targets,
            self.orphan_constraints,
            self.malformed_poses,
            self.malformed_constraints
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_clean() {
        let stats = ParseStats::default();
        assert!(stats.is_clean());
        assert_eq!(stats.lossy_records(), 0);
    }

    #[test]
    fn test_failed_episodes_are_not_lossy_records() {
        // 失败的 episode 是预期行为，不算记录丢失
        let stats = ParseStats {
            failed_episodes: 3,
            ..Default::default()
        };
        assert!(stats.is_clean());

        let stats = ParseStats {
            dropped_targets: 1,
            malformed_constraints: 2,
            ..Default::default()
        };
        assert_eq!(stats.lossy_records(), 3);
        assert!(stats.to_string().contains("dropped targets: 1"));
    }
}
