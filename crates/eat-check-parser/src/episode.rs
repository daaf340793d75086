//! # Episode 收集器
//!
//! 从某个目标位姿行开始线性扫描，直到遇到 episode 结束行或输入结束。
//!
//! 每侧机械臂各自维护一个"待配对目标"：目标行设置它，随后同侧的约束行消费它。
//! episode 结束时仍未配对的目标被丢弃（计入 [`ParseStats::dropped_targets`]）。
//!
//! ```text
//! left arm target_pose: ...        ← 设置左臂待配对目标
//! left arm constraint_pose: None   ← 配对，写入左臂 episode
//! simulate data episode 0 success  ← 结束，接受
//! ```

use serde::Deserialize;
use tracing::{debug, trace};

use crate::pose::{
    ArmSide, CONSTRAINT_LEN, Constraint, Pose, markers, parse_constraint_line, parse_pose_line,
};
use crate::stats::ParseStats;

/// 单臂的一段位姿序列
///
/// `target_poses` 与 `constraint_poses` 总是等长：只能通过 [`Episode::push_pair`] 成对写入。
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Episode {
    pub target_poses: Vec<Pose>,
    pub constraint_poses: Vec<Constraint>,
}

impl Episode {
    pub fn push_pair(&mut self, target: Pose, constraint: Constraint) {
        self.target_poses.push(target);
        self.constraint_poses.push(constraint);
    }

    pub fn len(&self) -> usize {
        self.target_poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.target_poses.is_empty()
    }

    /// 按顺序遍历 (目标, 约束) 对
    pub fn pairs(&self) -> impl Iterator<Item = (&Pose, &Constraint)> {
        self.target_poses.iter().zip(self.constraint_poses.iter())
    }
}

/// 一次收集得到的数据，按机械臂侧分开
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectedEpisode {
    episodes: [Episode; 2],
    /// 各侧第一次产出配对的先后顺序
    order: Vec<ArmSide>,
}

impl CollectedEpisode {
    fn push(&mut self, side: ArmSide, target: Pose, constraint: Constraint) {
        if !self.order.contains(&side) {
            self.order.push(side);
        }
        self.episodes[side.index()].push_pair(target, constraint);
    }

    pub fn get(&self, side: ArmSide) -> &Episode {
        &self.episodes[side.index()]
    }

    /// 非空的各侧 episode，按首次出现顺序
    pub fn sides(&self) -> impl Iterator<Item = (ArmSide, &Episode)> {
        self.order.iter().map(|&side| (side, self.get(side)))
    }

    pub fn into_sides(self) -> Vec<(ArmSide, Episode)> {
        let [left, right] = self.episodes;
        let mut slots = [Some(left), Some(right)];
        self.order
            .iter()
            .filter_map(|&side| slots[side.index()].take().map(|episode| (side, episode)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// 收集结果
#[derive(Debug, Clone, PartialEq)]
pub struct CollectOutcome {
    /// `None` 表示 episode 失败，整段丢弃
    pub episode: Option<CollectedEpisode>,
    /// 下一个未消费行的索引
    pub next: usize,
}

/// 各侧待配对目标
#[derive(Debug, Default)]
struct PendingTargets([Option<Pose>; 2]);

impl PendingTargets {
    /// 设置待配对目标，返回被覆盖的旧目标
    fn replace(&mut self, side: ArmSide, target: Pose) -> Option<Pose> {
        self.0[side.index()].replace(target)
    }

    fn take(&mut self, side: ArmSide) -> Option<Pose> {
        self.0[side.index()].take()
    }

    /// 清空并返回被丢弃的数量
    fn clear(&mut self) -> usize {
        self.0.iter_mut().filter_map(Option::take).count()
    }
}

/// 从 `start` 开始收集一个 episode
///
/// - 遇到结束行：含 `"success"` 则接受，否则返回 `episode: None`；`next` 为结束行之后
/// - 输入结束：接受已收集的数据，`next` 为 `lines.len()`
pub fn collect_episode<S: AsRef<str>>(
    lines: &[S],
    start: usize,
    stats: &mut ParseStats,
) -> CollectOutcome {
    let mut collected = CollectedEpisode::default();
    let mut pending = PendingTargets::default();

    for (i, raw) in lines.iter().enumerate().skip(start) {
        let line = raw.as_ref().trim();

        if line.contains(markers::EPISODE_END) {
            stats.dropped_targets += pending.clear();

            if !line.contains(markers::SUCCESS) {
                debug!("Skipping failed episode at line {}", i);
                stats.failed_episodes += 1;
                return CollectOutcome {
                    episode: None,
                    next: i + 1,
                };
            }

            stats.accepted_episodes += 1;
            return CollectOutcome {
                episode: Some(collected),
                next: i + 1,
            };
        }

        if line.contains(markers::TARGET_POSE) {
            let side = ArmSide::from_line(line);
            let pose = parse_pose_line(line);
            if !pose.is_well_formed() {
                stats.malformed_poses += 1;
            }
            trace!(
                "{} target pose: pos={:?}, quat={:?}",
                side, pose.position, pose.orientation
            );

            if pending.replace(side, pose.into_target()).is_some() {
                stats.dropped_targets += 1;
            }
        } else if line.contains(markers::CONSTRAINT_POSE) {
            let side = ArmSide::from_line(line);
            let constraint = parse_constraint_line(line);
            if !line.contains(markers::ABSENT) && constraint.len() != CONSTRAINT_LEN {
                stats.malformed_constraints += 1;
            }
            trace!("{} constraint pose: {:?}", side, constraint);

            match pending.take(side) {
                Some(target) => collected.push(side, target, constraint),
                None => stats.orphan_constraints += 1,
            }
        }
    }

    stats.dropped_targets += pending.clear();
    stats.unterminated_episodes += 1;
    CollectOutcome {
        episode: Some(collected),
        next: lines.len(),
    }
}
