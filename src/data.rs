//! 城市坐标表与路线的基本数据格式。
//!

use serde::{Deserialize, Serialize};
use std::ops::{Index, Range};

/// 城市编号，所有编号恰好构成 `[0, N)`
pub type CityId = usize;

/// 一条候选路线，是全部城市编号的一个排列
pub type Tour = Vec<CityId>;

/// 城市在平面上的位置
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// 欧几里得距离
    pub fn distance(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// 城市坐标表：城市编号即为坐标在表中的序号。构造后不再修改。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CityCatalog {
    positions: Vec<Position>,
}

impl CityCatalog {
    pub fn new(positions: Vec<Position>) -> Self {
        Self { positions }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// 所有城市编号
    pub fn ids(&self) -> Range<CityId> {
        0..self.positions.len()
    }

    pub fn position(&self, city: CityId) -> Option<&Position> {
        self.positions.get(city)
    }

    /// 第一个坐标不是有限数的城市
    pub fn first_non_finite(&self) -> Option<CityId> {
        self.positions.iter().position(|p| !p.is_finite())
    }

    /// 判断一条路线是否恰好经过表中每个城市一次
    pub fn is_tour(&self, tour: &[CityId]) -> bool {
        is_permutation(tour, self.len())
    }
}

impl Index<CityId> for CityCatalog {
    type Output = Position;

    fn index(&self, city: CityId) -> &Position {
        &self.positions[city]
    }
}

impl FromIterator<Position> for CityCatalog {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FromIterator<(f64, f64)> for CityCatalog {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        iter.into_iter().map(|(x, y)| Position::new(x, y)).collect()
    }
}

/// `tour` 是否为 `[0, size)` 的一个排列
pub fn is_permutation(tour: &[CityId], size: usize) -> bool {
    if tour.len() != size {
        return false;
    }
    let mut seen = vec![false; size];
    for &city in tour {
        if city >= size || seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}
