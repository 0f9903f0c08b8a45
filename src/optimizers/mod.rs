//! 遗传算法的各个阶段：选择、繁殖，以及把它们串起来的精英保留与逐代演化
//!

use crate::data::Tour;
use serde::{Deserialize, Serialize};

pub mod genetic;
pub mod reproduction;
pub mod selection;

pub use selection::{FitnessKey, MatingPool};

/// 整个运行期间见过的最短路线，长度只减不增
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestKnown {
    pub length: f64,
    pub tour: Tour,
}

/// 每一代交给调用方的记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// 代数
    pub generation: usize,
    /// 本代新繁殖出的种群中的最短长度
    pub length: f64,
    /// 当前交配池中最短分组的第一条路线，精英保留之后求出
    pub tour: Tour,
}
