use crate::data::{CityCatalog, CityId};
use rustc_hash::FxHashMap;

// 两城市间距离的备忘录。城市坐标不变，所以条目只增不改
#[derive(Debug, Clone, Default)]
pub struct DistanceCache {
    distances: FxHashMap<(CityId, CityId), f64>,
}

impl DistanceCache {
    pub fn new() -> Self {
        Self::default()
    }

    // 无序对：(a, b) 与 (b, a) 共用同一个键
    #[inline(always)]
    fn key(a: CityId, b: CityId) -> (CityId, CityId) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// 先查表，查不到再计算欧几里得距离并记录下来
    pub fn distance(&mut self, catalog: &CityCatalog, a: CityId, b: CityId) -> f64 {
        if a == b {
            return 0.0;
        }
        let key = Self::key(a, b);
        if let Some(distance) = self.distances.get(&key) {
            return *distance;
        }
        let distance = catalog[a].distance(&catalog[b]);
        self.distances.insert(key, distance);
        distance
    }

    /// 已记录的城市对数量
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}
