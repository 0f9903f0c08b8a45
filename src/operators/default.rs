use super::{Crossover, Mutate};
use crate::config::GeneticConfig;
use crate::data::{CityId, Tour};
use rand::Rng;

/// 默认操作：按概率做顺序杂交，按概率交换两个城市
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DefaultOperators {
    pub crossover_rate: f64,
    pub mutation_rate: f64,
}

pub const DEFAULT_OPERATORS: DefaultOperators = DefaultOperators {
    crossover_rate: 1.0,
    mutation_rate: 0.1,
};

impl Default for DefaultOperators {
    fn default() -> Self {
        DEFAULT_OPERATORS
    }
}

impl From<&GeneticConfig> for DefaultOperators {
    fn from(config: &GeneticConfig) -> Self {
        Self {
            crossover_rate: config.crossover_rate(),
            mutation_rate: config.mutation_rate(),
        }
    }
}

impl Crossover for DefaultOperators {
    fn crossover<R: Rng + ?Sized>(&mut self, first: &Tour, second: &Tour, rng: &mut R) -> Tour {
        if rng.random::<f64>() < self.crossover_rate {
            order_crossover(first, second, rng)
        } else {
            first.clone()
        }
    }
}

impl Mutate for DefaultOperators {
    fn mutate<R: Rng + ?Sized>(&mut self, tour: &mut Tour, rng: &mut R) -> Option<(usize, usize)> {
        if rng.random::<f64>() < self.mutation_rate {
            swap_mutation(tour, rng)
        } else {
            None
        }
    }
}

/// 顺序杂交：随机取第一个亲本的一段连续切片原样保留在原位，
/// 其余位置从左到右按第二个亲本中的相对顺序填入尚未出现的城市
pub fn order_crossover<R: Rng + ?Sized>(first: &[CityId], second: &[CityId], rng: &mut R) -> Tour {
    let n = first.len();
    if n < 2 {
        return first.to_vec();
    }
    let mut start = rng.random_range(0..n);
    let mut end = rng.random_range(0..n);
    if start > end {
        std::mem::swap(&mut start, &mut end);
    }
    let mut placed = vec![false; n];
    for &city in &first[start..=end] {
        placed[city] = true;
    }
    let rest: Vec<CityId> = second.iter().copied().filter(|&city| !placed[city]).collect();
    let mut child = Vec::with_capacity(n);
    child.extend_from_slice(&rest[..start]);
    child.extend_from_slice(&first[start..=end]);
    child.extend_from_slice(&rest[start..]);
    child
}

/// 交换两个不同位置上的城市
pub fn swap_mutation<R: Rng + ?Sized>(tour: &mut [CityId], rng: &mut R) -> Option<(usize, usize)> {
    let n = tour.len();
    if n < 2 {
        return None;
    }
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    tour.swap(i, j);
    Some((i, j))
}
