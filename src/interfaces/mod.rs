use crate::data::Tour;
use serde::Serialize;

pub mod command_line;

/// 向用户反馈的消息类型
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Message {
    Started {
        cities: usize,
        population_size: usize,
        length: f64,
    },
    Progress {
        generation: usize,
        length: f64,
        best_length: f64,
        cache_size: usize,
    },
    BetterSolution {
        generation: usize,
        length: f64,
        tour: Tour,
    },
    /// 前若干代平均每代的用时，单位为微秒
    Elapsed {
        generations: usize,
        micros: u64,
    },
    Finished {
        generation: usize,
        length: f64,
        tour: Tour,
    },
}

/// 定义了向用户报告消息的接口，优化器只通过它与外界交流
///
/// 命令行、绘图程序等只需要各自实现 post 方法，就可以接收每一代的演化结果
pub trait Interface {
    fn post(&self, message: Message);
}
