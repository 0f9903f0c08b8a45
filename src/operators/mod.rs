//! 算子接口，以及默认操作的实现（顺序杂交与交换变异）
//!

use crate::data::Tour;
use rand::Rng;

pub mod default;

pub trait Crossover {
    /// 由两条亲本路线产生一条子代路线，子代必须仍是全部城市的排列
    fn crossover<R: Rng + ?Sized>(&mut self, first: &Tour, second: &Tour, rng: &mut R) -> Tour;
}

pub trait Mutate {
    /// 对路线做一次随机扰动，返回交换的两个位置；没有扰动时返回 `None`
    fn mutate<R: Rng + ?Sized>(&mut self, tour: &mut Tour, rng: &mut R) -> Option<(usize, usize)>;
}
