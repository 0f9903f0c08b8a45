//! 遗传算法的参数配置，可以从 YAML 文件中读取。所有字段都可以省略，省略时使用默认值。
//!

use crate::Error;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

pub const DEFAULT_POPULATION_SIZE: usize = 10;
pub const DEFAULT_CROSSOVER_RATE: f64 = 1.0;
pub const DEFAULT_MUTATION_RATE: f64 = 0.1;
pub const DEFAULT_REPORT_INTERVAL: usize = 100;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneticConfig {
    /// 种群规模
    pub population_size: Option<usize>,
    /// 子代由顺序杂交产生的概率，否则直接复制第一个亲本
    pub crossover_rate: Option<f64>,
    /// 子代发生一次交换变异的概率
    pub mutation_rate: Option<f64>,
    /// 代数计数的起点
    pub initial_generation: Option<usize>,
    /// 随机数种子，不提供时由操作系统生成
    pub seed: Option<u64>,
    /// 命令行最多拉取的代数；算法本身没有终止条件
    pub generations: Option<usize>,
    /// 每隔多少代报告一次进度
    pub report_interval: Option<usize>,
}

impl GeneticConfig {
    pub fn from_yaml(content: &str) -> Result<Self, Error> {
        let config: GeneticConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// 检查概率参数；种群规模在构造优化器时检查
    pub fn validate(&self) -> Result<(), Error> {
        for (name, value) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
        ] {
            if let Some(value) = value {
                if !(0.0..=1.0).contains(&value) {
                    return Err(Error::InvalidRate { name, value });
                }
            }
        }
        Ok(())
    }

    pub fn population_size(&self) -> usize {
        self.population_size.unwrap_or(DEFAULT_POPULATION_SIZE)
    }

    pub fn crossover_rate(&self) -> f64 {
        self.crossover_rate.unwrap_or(DEFAULT_CROSSOVER_RATE)
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate.unwrap_or(DEFAULT_MUTATION_RATE)
    }

    pub fn initial_generation(&self) -> usize {
        self.initial_generation.unwrap_or(0)
    }

    pub fn report_interval(&self) -> usize {
        self.report_interval.unwrap_or(DEFAULT_REPORT_INTERVAL).max(1)
    }
}
