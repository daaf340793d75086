//! 日志解析的属性测试
//!
//! 使用 proptest 验证提取顺序、缺省约束和 episode 编号规则。

use eat_check_parser::{
    ArmSide, CONSTRAINT_LEN, extract_floats, parse_constraint_line, parse_pose_line, scan_log,
};
use proptest::prelude::*;

/// 生成一个带小数点的数值文本（round-trip 精确）
fn numeral() -> impl Strategy<Value = f64> {
    (-100_000i64..100_000i64).prop_map(|n| n as f64 / 1000.0)
}

fn render(values: &[f64]) -> String {
    values.iter().map(|v| format!("{:?}", v)).collect::<Vec<_>>().join(" ")
}

/// 生成一个 episode 的日志片段
fn episode_lines(side: ArmSide, success: bool, index: usize) -> Vec<String> {
    vec![
        format!("{} target_pose: 0.1 0.2 0.3 0.0 0.0 0.0 1.0", side.marker()),
        format!("{} constraint_pose: None", side.marker()),
        format!(
            "simulate data episode {} {}",
            index,
            if success { "success" } else { "fail" }
        ),
    ]
}

proptest! {
    /// 提取顺序与文本顺序一致，按索引 3 切分得到位置/姿态
    #[test]
    fn extraction_preserves_order(values in prop::collection::vec(numeral(), 0..12)) {
        let line = format!("left arm target_pose: {}", render(&values));

        prop_assert_eq!(extract_floats(&line), values.clone());

        let pose = parse_pose_line(&line);
        let split = values.len().min(3);
        prop_assert_eq!(&pose.position[..], &values[..split]);
        prop_assert_eq!(&pose.orientation[..], &values[split..]);
    }

    /// 含 "None" 的约束行总是全零
    #[test]
    fn absent_constraint_is_always_zero(values in prop::collection::vec(numeral(), 0..8)) {
        let line = format!("right arm constraint_pose: None {}", render(&values));
        prop_assert_eq!(parse_constraint_line(&line), vec![0.0; CONSTRAINT_LEN]);
    }

    /// 任意左右交错、成功失败混合时，各侧编号从 0 开始连续无空洞
    #[test]
    fn naming_is_sequential_per_side(
        plan in prop::collection::vec((any::<bool>(), any::<bool>()), 0..30)
    ) {
        let mut log = Vec::new();
        let mut expected = [0usize; 2];
        for (i, &(is_left, success)) in plan.iter().enumerate() {
            let side = if is_left { ArmSide::Left } else { ArmSide::Right };
            log.extend(episode_lines(side, success, i));
            if success {
                expected[if is_left { 0 } else { 1 }] += 1;
            }
        }

        let result = scan_log(&log);
        prop_assert_eq!(result.episodes.count(ArmSide::Left), expected[0]);
        prop_assert_eq!(result.episodes.count(ArmSide::Right), expected[1]);

        for (side, count) in [(ArmSide::Left, expected[0]), (ArmSide::Right, expected[1])] {
            for index in 0..count {
                let name = format!("{}_arm_{}", side, index);
                prop_assert!(result.episodes.get(&name).is_some(), "missing {}", name);
            }
        }
        prop_assert_eq!(result.episodes.len(), expected[0] + expected[1]);
    }

    /// 失败的 episode 不产生条目，其后的 episode 照常解析
    #[test]
    fn failed_episode_contributes_nothing(index in 0usize..1000) {
        let mut log = episode_lines(ArmSide::Left, false, index);
        log.extend(episode_lines(ArmSide::Right, true, index + 1));

        let result = scan_log(&log);
        prop_assert_eq!(result.episodes.count(ArmSide::Left), 0);
        prop_assert!(result.episodes.get("right_arm_0").is_some());
        prop_assert_eq!(result.stats.failed_episodes, 1);
    }
}

#[test]
fn single_left_episode_example() {
    let log = [
        "left arm target_pose: 0.10 0.20 0.30 0.0 0.0 0.0 1.0",
        "left arm constraint_pose: None",
        "simulate data episode 1 success",
    ];

    let result = scan_log(&log);
    assert_eq!(result.episodes.len(), 1);

    let episode = result.episodes.get("left_arm_0").unwrap();
    assert_eq!(episode.target_poses, vec![vec![0.10, 0.20, 0.30, 0.0, 0.0, 0.0, 1.0]]);
    assert_eq!(episode.constraint_poses, vec![vec![0.0; 6]]);
}
