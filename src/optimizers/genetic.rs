//! 遗传算法

use super::reproduction::reproduce;
use super::selection::{select, FitnessKey, MatingPool};
use super::{BestKnown, GenerationRecord};
use crate::config::GeneticConfig;
use crate::data::{CityCatalog, Tour};
use crate::interfaces::{Interface, Message};
use crate::objectives::DistanceCache;
use crate::operators::default::DefaultOperators;
use crate::operators::{Crossover, Mutate};
use crate::Error;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};
use web_time::Instant;

/// 遗传算法优化器，持有跨代存活的全部状态：交配池、距离缓存和目前最优解。
///
/// 优化器本身就是一个无穷迭代器，每拉取一次就演化一代并返回该代的记录；
/// 调用方不再拉取即视为停止，没有需要清理的中间状态。
pub struct GeneticOptimizer<O = DefaultOperators, R = StdRng> {
    catalog: CityCatalog,
    cache: DistanceCache,
    pool: MatingPool,
    best: BestKnown,
    population_size: usize,
    generation: usize,
    operators: O,
    rng: R,
}

impl GeneticOptimizer {
    /// 使用默认操作和操作系统提供的种子
    pub fn new(catalog: CityCatalog, population_size: usize) -> Result<Self, Error> {
        let config = GeneticConfig {
            population_size: Some(population_size),
            ..Default::default()
        };
        Self::from_config(catalog, &config)
    }

    pub fn from_config(catalog: CityCatalog, config: &GeneticConfig) -> Result<Self, Error> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let operators = DefaultOperators::from(config);
        let optimizer = Self::with_operators(catalog, config.population_size(), operators, rng)?;
        Ok(optimizer.starting_at(config.initial_generation()))
    }
}

impl<O: Crossover + Mutate, R: Rng> GeneticOptimizer<O, R> {
    /// 随机生成初始种群，并做一次选择得到初始交配池
    pub fn with_operators(
        catalog: CityCatalog,
        population_size: usize,
        operators: O,
        mut rng: R,
    ) -> Result<Self, Error> {
        check_catalog(&catalog)?;
        if population_size < 1 {
            return Err(Error::InvalidPopulationSize {
                size: population_size,
            });
        }
        let population: Vec<Tour> = (0..population_size)
            .map(|_| {
                let mut tour: Tour = catalog.ids().collect();
                tour.shuffle(&mut rng);
                tour
            })
            .collect();
        Self::assemble(catalog, population, operators, rng)
    }

    /// 从给定的初始种群开始演化，种群中每条路线都必须是全部城市的排列
    pub fn from_population(
        catalog: CityCatalog,
        population: Vec<Tour>,
        operators: O,
        rng: R,
    ) -> Result<Self, Error> {
        check_catalog(&catalog)?;
        if population.is_empty() {
            return Err(Error::InvalidPopulationSize { size: 0 });
        }
        if let Some(index) = population.iter().position(|tour| !catalog.is_tour(tour)) {
            return Err(Error::InvalidTour { index });
        }
        Self::assemble(catalog, population, operators, rng)
    }

    fn assemble(
        catalog: CityCatalog,
        population: Vec<Tour>,
        operators: O,
        rng: R,
    ) -> Result<Self, Error> {
        let mut cache = DistanceCache::new();
        let (length, pool) = select(&population, &mut cache, &catalog);
        let Some(tour) = pool.best_tour().cloned() else {
            unreachable!("非空种群的交配池不会为空");
        };
        info!(
            cities = catalog.len(),
            population_size = population.len(),
            length,
            "初始种群已生成"
        );
        Ok(Self {
            catalog,
            cache,
            pool,
            best: BestKnown { length, tour },
            population_size: population.len(),
            generation: 0,
            operators,
            rng,
        })
    }

    /// 设置代数计数的起点
    pub fn starting_at(mut self, generation: usize) -> Self {
        self.generation = generation;
        self
    }

    /// 演化一代。顺序不能调换：
    ///
    /// 1. 在繁殖之前记下当前最短分组的键并复制其中的路线；
    /// 2. 从上一代的交配池繁殖出新种群；
    /// 3. 对新种群做选择，得到新的交配池；
    /// 4. 把第 1 步复制的路线放回新交配池中原来的键下；
    /// 5. 若本代最短长度严格小于目前最优解，更新最优解。
    pub fn step(&mut self) -> GenerationRecord {
        let Some((elite_key, elites)) = self.pool.best().map(|(key, tours)| (key, tours.to_vec()))
        else {
            unreachable!("交配池在任何两代之间都不会为空");
        };
        let population = reproduce(
            &self.pool,
            self.population_size,
            &mut self.operators,
            &mut self.rng,
        );
        let (length, mut pool) = select(&population, &mut self.cache, &self.catalog);
        pool.extend_group(elite_key, elites);
        self.pool = pool;
        self.generation += 1;

        if length < self.best.length {
            if let Some(tour) = self.pool.get(FitnessKey::new(length)).and_then(|t| t.first()) {
                debug!(
                    generation = self.generation,
                    previous = self.best.length,
                    length,
                    "找到了更短的路线"
                );
                self.best = BestKnown {
                    length,
                    tour: tour.clone(),
                };
            }
        }

        let tour = self.pool.best_tour().cloned().unwrap_or_default();
        debug!(
            generation = self.generation,
            length,
            groups = self.pool.len(),
            cache = self.cache.len(),
            "完成一代演化"
        );
        GenerationRecord {
            generation: self.generation,
            length,
            tour,
        }
    }

    /// 逐代演化并通过界面报告进度。`generations` 为 `None` 时永不返回。
    pub fn run(
        &mut self,
        interface: &dyn Interface,
        generations: Option<usize>,
        report_interval: usize,
    ) -> BestKnown {
        let report_interval = report_interval.max(1);
        interface.post(Message::Started {
            cities: self.catalog.len(),
            population_size: self.population_size,
            length: self.best.length,
        });
        let start = Instant::now();
        let mut pulled = 0;
        while generations.map_or(true, |limit| pulled < limit) {
            let previous = self.best.length;
            let record = self.step();
            pulled += 1;
            if self.best.length < previous {
                interface.post(Message::BetterSolution {
                    generation: record.generation,
                    length: self.best.length,
                    tour: self.best.tour.clone(),
                });
            }
            if pulled == report_interval {
                let micros = start.elapsed().as_micros() as u64 / report_interval as u64;
                interface.post(Message::Elapsed {
                    generations: pulled,
                    micros,
                });
            }
            if record.generation % report_interval == 0 {
                interface.post(Message::Progress {
                    generation: record.generation,
                    length: record.length,
                    best_length: self.best.length,
                    cache_size: self.cache.len(),
                });
            }
        }
        interface.post(Message::Finished {
            generation: self.generation,
            length: self.best.length,
            tour: self.best.tour.clone(),
        });
        self.best.clone()
    }
}

impl<O, R> GeneticOptimizer<O, R> {
    /// 目前见过的最短路线
    pub fn best(&self) -> &BestKnown {
        &self.best
    }

    pub fn mating_pool(&self) -> &MatingPool {
        &self.pool
    }

    pub fn catalog(&self) -> &CityCatalog {
        &self.catalog
    }

    /// 距离缓存中已记录的城市对数量
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn population_size(&self) -> usize {
        self.population_size
    }
}

impl<O: Crossover + Mutate, R: Rng> Iterator for GeneticOptimizer<O, R> {
    type Item = GenerationRecord;

    fn next(&mut self) -> Option<GenerationRecord> {
        Some(self.step())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

fn check_catalog(catalog: &CityCatalog) -> Result<(), Error> {
    if catalog.len() < 2 {
        return Err(Error::InvalidCatalog {
            cities: catalog.len(),
        });
    }
    // 坐标为 NaN 或无穷时路线长度无法比较
    if let Some(city) = catalog.first_non_finite() {
        return Err(Error::InvalidPosition { city });
    }
    Ok(())
}
