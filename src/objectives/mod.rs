//! 目标函数：路线的闭合总长度，以及用于加速计算的距离缓存
//!

use crate::data::{CityCatalog, CityId};
pub mod cache;

pub use cache::DistanceCache;

/// 借用城市表和距离缓存来计算路线长度，计算过程中只会向缓存中添加条目
pub struct FitnessEvaluator<'a> {
    catalog: &'a CityCatalog,
    cache: &'a mut DistanceCache,
}

impl<'a> FitnessEvaluator<'a> {
    pub fn new(catalog: &'a CityCatalog, cache: &'a mut DistanceCache) -> Self {
        Self { catalog, cache }
    }

    pub fn distance(&mut self, a: CityId, b: CityId) -> f64 {
        self.cache.distance(self.catalog, a, b)
    }

    /// 依次累加相邻城市的距离，最后加上从末尾回到起点的一段
    ///
    /// 调用方需要保证路线合法，这里不做检查
    pub fn tour_length(&mut self, tour: &[CityId]) -> f64 {
        let mut total = 0.0;
        for pair in tour.windows(2) {
            total += self.distance(pair[0], pair[1]);
        }
        if let (Some(&first), Some(&last)) = (tour.first(), tour.last()) {
            total += self.distance(last, first);
        }
        total
    }
}
