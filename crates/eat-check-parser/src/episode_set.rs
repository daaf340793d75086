//! Episode 汇总与命名
//!
//! 命名规则 `{arm}_arm_{index}`，左右臂各自从 0 连续编号。

use std::collections::BTreeMap;

use crate::episode::Episode;
use crate::pose::ArmSide;

/// 生成 episode 名称
pub fn episode_name(side: ArmSide, index: usize) -> String {
    format!("{}_arm_{}", side.as_str(), index)
}

/// 一个任务的全部 episode
///
/// 按名称排序存储，与输出文件的键顺序一致。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EpisodeSet {
    episodes: BTreeMap<String, Episode>,
    counters: [usize; 2],
}

impl EpisodeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 加入一个 episode，返回分配的名称
    ///
    /// 空 episode 不加入，也不占用编号。
    pub fn insert(&mut self, side: ArmSide, episode: Episode) -> Option<String> {
        if episode.is_empty() {
            return None;
        }

        let counter = &mut self.counters[side.index()];
        let name = episode_name(side, *counter);
        *counter += 1;

        self.episodes.insert(name.clone(), episode);
        Some(name)
    }

    /// 某侧已加入的 episode 数量
    pub fn count(&self, side: ArmSide) -> usize {
        self.counters[side.index()]
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Episode> {
        self.episodes.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Episode)> {
        self.episodes.iter().map(|(name, episode)| (name.as_str(), episode))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.episodes.keys().map(String::as_str)
    }

    pub fn into_inner(self) -> BTreeMap<String, Episode> {
        self.episodes
    }
}
