//! libsalesman 是使用 Rust 实现的对称旅行商问题（TSP）遗传算法求解器。
//!
//! 一个种群中的候选路线经过选择、繁殖（杂交与变异）和精英保留，一代一代地演化，
//! 不断缩短目前找到的最短回路。演化过程没有终止条件，调用方按需逐代拉取结果。
//!
//! salesman 是使用 libsalesman 实现的命令行程序，用户提供城市坐标表和参数文件，
//! 本程序会持续报告演化进度以及每一次找到的更短路线。

pub mod config;
pub mod data;
pub mod interfaces;
pub mod objectives;
pub mod operators;
pub mod optimizers;

use std::fmt::{self, Display};

pub use config::GeneticConfig;
pub use data::{CityCatalog, CityId, Position, Tour};
pub use interfaces::{Interface, Message};
pub use optimizers::genetic::GeneticOptimizer;
pub use optimizers::{BestKnown, GenerationRecord};

/// 错误类型
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// 城市数量不足两个，无法构成回路
    InvalidCatalog { cities: usize },
    /// 城市坐标不是有限的数
    InvalidPosition { city: usize },
    /// 种群规模至少为 1
    InvalidPopulationSize { size: usize },
    /// 概率参数必须位于 `[0, 1]` 之间
    InvalidRate { name: &'static str, value: f64 },
    /// 给定的初始种群中有一条路线不是全部城市的排列
    InvalidTour { index: usize },
    Message(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCatalog { cities } => {
                write!(f, "城市表中只有 {cities} 个城市，至少需要 2 个")
            }
            Error::InvalidPosition { city } => {
                write!(f, "城市 {city} 的坐标不是有限的数")
            }
            Error::InvalidPopulationSize { size } => {
                write!(f, "种群规模为 {size}，至少需要 1")
            }
            Error::InvalidRate { name, value } => {
                write!(f, "参数 {name} 的取值 {value} 不在 [0, 1] 之间")
            }
            Error::InvalidTour { index } => {
                write!(f, "初始种群中第 {index} 条路线不是所有城市的排列")
            }
            Error::Message(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Self::Message(value.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Message(format!("读写文件失败：{value}"))
    }
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        Self::Message(format!("城市表格式错误：{value}"))
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(value: serde_yaml::Error) -> Self {
        Self::Message(format!("参数文件解析错误：{value}"))
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Message(format!("消息序列化错误：{value}"))
    }
}
