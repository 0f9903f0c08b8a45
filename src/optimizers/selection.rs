//! 选择：计算种群中每条路线的长度，并按长度分组得到交配池

use crate::data::{CityCatalog, CityId, Tour};
use crate::objectives::{DistanceCache, FitnessEvaluator};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// 交配池的键，即路线长度。
///
/// 只有按位完全相同的长度才视为同一个键：相同的排列算出的长度必然相同，
/// 而数值上接近但并不相同的长度仍然分属不同分组。
#[derive(Debug, Clone, Copy)]
pub struct FitnessKey(f64);

impl FitnessKey {
    pub fn new(length: f64) -> Self {
        Self(length)
    }

    pub fn length(self) -> f64 {
        self.0
    }
}

impl PartialEq for FitnessKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for FitnessKey {}

impl PartialOrd for FitnessKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FitnessKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// 交配池：长度相同的路线放在同一分组中，分组内保持加入的先后顺序
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatingPool {
    groups: BTreeMap<FitnessKey, Vec<Tour>>,
}

impl MatingPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, length: f64, tour: Tour) {
        self.groups.entry(FitnessKey(length)).or_default().push(tour);
    }

    /// 把若干路线追加到指定分组，分组不存在时新建。分组中已有的路线不再重复加入，
    /// 因此反复放回同一批精英时分组的大小不会随代数增长。
    pub fn extend_group(&mut self, key: FitnessKey, tours: Vec<Tour>) {
        let group = self.groups.entry(key).or_default();
        for tour in tours {
            if !group.contains(&tour) {
                group.push(tour);
            }
        }
    }

    /// 最短的分组
    pub fn best(&self) -> Option<(FitnessKey, &[Tour])> {
        self.groups
            .iter()
            .next()
            .map(|(key, tours)| (*key, tours.as_slice()))
    }

    pub fn best_tour(&self) -> Option<&Tour> {
        self.groups.values().next().and_then(|tours| tours.first())
    }

    pub fn get(&self, key: FitnessKey) -> Option<&[Tour]> {
        self.groups.get(&key).map(Vec::as_slice)
    }

    pub fn contains(&self, key: FitnessKey, tour: &[CityId]) -> bool {
        self.get(key)
            .map_or(false, |tours| tours.iter().any(|t| t.as_slice() == tour))
    }

    /// 分组数
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// 路线总数
    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// 按长度从短到长遍历分组
    pub fn iter(&self) -> impl Iterator<Item = (FitnessKey, &[Tour])> {
        self.groups
            .iter()
            .map(|(key, tours)| (*key, tours.as_slice()))
    }
}

/// 计算种群中每条路线的长度（顺带扩充距离缓存），按长度分组，返回本代最短长度和交配池。
///
/// 种群本身不会被修改。空种群得到正无穷和空的交配池。
pub fn select(
    population: &[Tour],
    cache: &mut DistanceCache,
    catalog: &CityCatalog,
) -> (f64, MatingPool) {
    let mut evaluator = FitnessEvaluator::new(catalog, cache);
    let mut pool = MatingPool::new();
    let mut shortest = f64::INFINITY;
    for tour in population {
        let length = evaluator.tour_length(tour);
        if length < shortest {
            shortest = length;
        }
        pool.push(length, tour.clone());
    }
    (shortest, pool)
}
