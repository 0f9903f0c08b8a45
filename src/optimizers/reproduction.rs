//! 繁殖：从交配池中按排名加权抽取亲本，经杂交和变异得到新一代种群

use super::selection::MatingPool;
use crate::data::{is_permutation, Tour};
use crate::operators::{Crossover, Mutate};
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::seq::IndexedRandom;
use rand::Rng;

/// 产生恰好 `size` 条子代路线。
///
/// 分组按长度排名加权：共 K 个分组时，第 r 短的分组（r 从 0 开始）权重为 K - r，
/// 选中分组后在组内均匀抽取一条路线。只有一条路线的交配池同样可以繁殖。
pub fn reproduce<O, R>(pool: &MatingPool, size: usize, operators: &mut O, rng: &mut R) -> Vec<Tour>
where
    O: Crossover + Mutate,
    R: Rng + ?Sized,
{
    let groups: Vec<&[Tour]> = pool.iter().map(|(_, tours)| tours).collect();
    let weights = match WeightedIndex::new((1..=groups.len()).rev()) {
        Ok(weights) => weights,
        Err(error) => panic!("交配池为空，无法抽取亲本：{error}"),
    };
    let mut population = Vec::with_capacity(size);
    for _ in 0..size {
        let first = sample_parent(&groups, &weights, rng);
        let second = sample_parent(&groups, &weights, rng);
        let mut child = operators.crossover(first, second, rng);
        operators.mutate(&mut child, rng);
        assert!(
            is_permutation(&child, first.len()),
            "杂交或变异产生了不合法的路线：{child:?}"
        );
        population.push(child);
    }
    population
}

fn sample_parent<'a, R: Rng + ?Sized>(
    groups: &[&'a [Tour]],
    weights: &WeightedIndex<usize>,
    rng: &mut R,
) -> &'a Tour {
    let group = groups[weights.sample(rng)];
    match group.choose(rng) {
        Some(tour) => tour,
        None => panic!("交配池中出现了空分组"),
    }
}
