use crate::config::GeneticConfig;
use crate::data::{CityCatalog, Position};
use crate::interfaces::{Interface, Message};
use crate::Error;
use chrono::Local;
use clap::Parser;
use csv::ReaderBuilder;
use itertools::Itertools;
use std::fs::read_to_string;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

/// 命令行参数的定义
#[derive(Parser, Clone, Debug)]
#[command(name = "salesman")]
#[command(author, version, about, long_about)]
pub struct CommandLineArgs {
    /// 城市坐标表，每行是以制表符分隔的横坐标和纵坐标，行号即城市编号
    pub cities: PathBuf,
    /// 遗传算法参数文件（YAML），默认全部使用默认值
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// 最多演化的代数，默认不限
    #[arg(short, long)]
    pub generations: Option<usize>,
    /// 随机数种子，覆盖参数文件中的设置
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// 以 JSON 行的形式输出消息
    #[arg(long)]
    pub json: bool,
}

impl CommandLineArgs {
    pub fn read_catalog(&self) -> Result<CityCatalog, Error> {
        read_catalog(&self.cities)
    }

    /// 读取参数文件，再用命令行参数覆盖其中的代数和种子
    pub fn read_config(&self) -> Result<GeneticConfig, Error> {
        let mut config = match &self.config {
            Some(path) => GeneticConfig::from_yaml(&read_to_string(path)?)?,
            None => GeneticConfig::default(),
        };
        if self.generations.is_some() {
            config.generations = self.generations;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

/// 读取以制表符分隔、没有表头的坐标表
pub fn read_catalog(path: &Path) -> Result<CityCatalog, Error> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_path(path)?;
    let mut positions = vec![];
    for row in reader.deserialize::<(f64, f64)>() {
        let (x, y) = row?;
        positions.push(Position::new(x, y));
    }
    Ok(CityCatalog::new(positions))
}

/// 通过命令行来使用 libsalesman 的入口，实现了界面特征
pub struct CommandLine {
    pub json: bool,
}

impl CommandLine {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    fn write_text(writer: &mut dyn Write, message: &Message) -> std::io::Result<()> {
        match message {
            Message::Started {
                cities,
                population_size,
                length,
            } => writeln!(
                writer,
                "共 {cities} 个城市，种群规模为 {population_size}，初始最短路线长度为 {length:.4}"
            ),
            Message::Progress {
                generation,
                length,
                best_length,
                cache_size,
            } => writeln!(
                writer,
                "已演化 {generation} 代，本代最短 {length:.4}，历史最短 {best_length:.4}，已缓存 {cache_size} 组距离"
            ),
            Message::BetterSolution {
                generation,
                length,
                tour,
            } => writeln!(
                writer,
                "{} 第 {generation} 代找到了更短的路线，长度为 {length:.4}：{}",
                Local::now().format("%H:%M:%S"),
                tour.iter().join(" ")
            ),
            Message::Elapsed { generations, micros } => {
                writeln!(writer, "前 {generations} 代平均每代用时：{micros} μs")
            }
            Message::Finished {
                generation,
                length,
                tour,
            } => writeln!(
                writer,
                "共演化 {generation} 代，最短路线长度为 {length:.4}：{}",
                tour.iter().join(" ")
            ),
        }
    }
}

impl Interface for CommandLine {
    fn post(&self, message: Message) {
        let stdout = std::io::stdout();
        let mut writer = stdout.lock();
        let result = if self.json {
            serde_json::to_string(&message)
                .map_err(std::io::Error::from)
                .and_then(|line| writeln!(writer, "{line}"))
        } else {
            Self::write_text(&mut writer, &message)
        };
        if let Err(error) = result {
            warn!("无法输出消息：{error}");
        }
    }
}
