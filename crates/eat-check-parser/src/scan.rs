//! 整段日志扫描
//!
//! 从头遍历缓冲的采集输出，在每个 `"arm target_pose"` 处调用收集器，
//! 并从收集器返回的位置继续，已消费的行不会被重复处理。

use tracing::debug;

use crate::episode::collect_episode;
use crate::episode_set::EpisodeSet;
use crate::pose::markers;
use crate::stats::ParseStats;

/// 扫描结果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanResult {
    pub episodes: EpisodeSet,
    pub stats: ParseStats,
}

/// 扫描整段日志
pub fn scan_log<S: AsRef<str>>(lines: &[S]) -> ScanResult {
    let mut result = ScanResult::default();
    let mut i = 0;

    while i < lines.len() {
        if !lines[i].as_ref().contains(markers::EPISODE_START) {
            i += 1;
            continue;
        }

        let outcome = collect_episode(lines, i, &mut result.stats);
        if let Some(collected) = outcome.episode {
            for (side, episode) in collected.into_sides() {
                let pairs = episode.len();
                if let Some(name) = result.episodes.insert(side, episode) {
                    debug!("Collected {} ({} poses)", name, pairs);
                }
            }
        }
        i = outcome.next;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::ArmSide;

    #[test]
    fn test_scan_skips_noise_and_failed_episodes() {
        let log = [
            "Loading task lift_pot ...",
            "left arm target_pose: 0.1 0.2 0.3 0.0 0.0 0.0 1.0",
            "left arm constraint_pose: None",
            "simulate data episode 0 fail!",
            "right arm target_pose: 0.4 0.5 0.6 0.0 0.0 0.0 1.0",
            "right arm constraint_pose: None",
            "simulate data episode 1 success!",
            "left arm target_pose: 0.7 0.8 0.9 0.0 0.0 0.0 1.0",
            "left arm constraint_pose: None",
            "simulate data episode 2 success!",
            "done",
        ];

        let result = scan_log(&log);
        let names: Vec<_> = result.episodes.names().collect();
        assert_eq!(names, vec!["left_arm_0", "right_arm_0"]);
        assert_eq!(result.episodes.get("left_arm_0").unwrap().target_poses[0][0], 0.7);
        assert_eq!(result.stats.failed_episodes, 1);
        assert_eq!(result.stats.accepted_episodes, 2);
    }

    #[test]
    fn test_dual_arm_episode_yields_one_entry_per_side() {
        let log = [
            "left arm target_pose: 0.1 0.2 0.3 0.0 0.0 0.0 1.0",
            "left arm constraint_pose: None",
            "right arm target_pose: 0.4 0.5 0.6 0.0 0.0 0.0 1.0",
            "right arm constraint_pose: None",
            "simulate data episode 0 success",
        ];

        let result = scan_log(&log);
        assert_eq!(result.episodes.count(ArmSide::Left), 1);
        assert_eq!(result.episodes.count(ArmSide::Right), 1);
    }

    #[test]
    fn test_empty_log() {
        let log: [&str; 0] = [];
        let result = scan_log(&log);
        assert!(result.episodes.is_empty());
        assert_eq!(result.stats, ParseStats::default());
    }
}
