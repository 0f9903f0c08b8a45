use criterion::{criterion_group, criterion_main, Criterion};
use salesman::{CityCatalog, GeneticConfig, GeneticOptimizer, Position};

fn 环形城市(数量: usize) -> CityCatalog {
    (0..数量)
        .map(|i| {
            let 角度 = i as f64 / 数量 as f64 * std::f64::consts::TAU;
            Position::new(10.0 + 10.0 * 角度.cos(), 10.0 + 10.0 * 角度.sin())
        })
        .collect()
}

fn 计时(城市数量: usize, 种群规模: usize, 名称: &str, b: &mut Criterion) {
    let 配置 = GeneticConfig {
        population_size: Some(种群规模),
        seed: Some(0),
        ..Default::default()
    };
    let mut 优化器 = GeneticOptimizer::from_config(环形城市(城市数量), &配置).unwrap();
    b.bench_function(名称, |b| {
        b.iter(|| 优化器.step());
    });
}

fn 三十城市(b: &mut Criterion) {
    计时(30, 10, "三十城市一代演化", b);
}

fn 百城市(b: &mut Criterion) {
    计时(100, 10, "百城市一代演化", b);
}

fn 百城市大种群(b: &mut Criterion) {
    计时(100, 100, "百城市大种群一代演化", b);
}

criterion_group!(benches, 三十城市, 百城市, 百城市大种群);
criterion_main!(benches);
