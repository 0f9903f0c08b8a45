//! salesman: 对称旅行商问题遗传算法求解器［命令行版］
//!
//! 用户提供城市坐标表以及可选的参数文件，本程序持续演化种群，报告进度和每一条更短的路线。
//! 不指定代数时程序一直运行，直到被用户中断。

use clap::Parser;
use salesman::interfaces::command_line::{CommandLine, CommandLineArgs};
use salesman::{Error, GeneticOptimizer};
use tracing::{info, Level};

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();
    let args = CommandLineArgs::parse();
    let catalog = args.read_catalog()?;
    let config = args.read_config()?;
    info!(path = %args.cities.display(), cities = catalog.len(), "已读取城市坐标表");
    let mut optimizer = GeneticOptimizer::from_config(catalog, &config)?;
    let command_line = CommandLine::new(args.json);
    optimizer.run(&command_line, config.generations, config.report_interval());
    Ok(())
}
