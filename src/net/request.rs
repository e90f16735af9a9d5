//! 请求类型
//!
//! 定义一条模拟流量（请求）及请求种群的生成。

use crate::sim::Tick;
use rand_core::RngCore;
use tracing::debug;

/// 请求类别
///
/// 类别随请求一起流动，核心路由与时延逻辑不感知它。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    PageView,
    ImageView,
    TextPost,
    ImagePost,
}

impl RequestKind {
    const ALL: [RequestKind; 4] = [
        RequestKind::PageView,
        RequestKind::ImageView,
        RequestKind::TextPost,
        RequestKind::ImagePost,
    ];
}

/// 一条模拟请求
///
/// `end_time` 在请求每跳入队后由时延模型累加，只增不减；
/// 始终满足 `end_time >= start_time`。
#[derive(Debug, Clone)]
pub struct Request {
    pub kind: RequestKind,
    /// 负载大小（KB），随请求携带，不参与路由决策
    pub size_kb: u32,
    /// 请求进入树根的 tick
    pub start_time: Tick,
    /// 请求在当前一跳的预计完成 tick，逐跳被覆盖
    pub end_time: Tick,
}

impl Request {
    /// 请求从进入到当前一跳完成所经过的 tick 数。
    pub fn latency(&self) -> u64 {
        self.end_time.since(self.start_time)
    }
}

/// 上限（不含）之内的均匀抽样；`bound == 0` 时恒为 0。
fn uniform_below(rng: &mut dyn RngCore, bound: u64) -> u64 {
    if bound == 0 {
        return 0;
    }
    rng.next_u64() % bound
}

/// 生成请求种群
///
/// 每条请求的 `start_time` 均匀取自 `[0, horizon/2)`，
/// `end_time` 初始化为 `start_time`（入树前零时延）。
/// 生成顺序没有语义，报告只依赖下标稳定的身份。
pub fn generate_requests(count: usize, horizon: Tick, rng: &mut dyn RngCore) -> Vec<Request> {
    let half = horizon.0 / 2;
    let mut reqs = Vec::with_capacity(count);
    for _ in 0..count {
        let kind = RequestKind::ALL[(rng.next_u64() % 4) as usize];
        let size_kb = (uniform_below(rng, 1024) + 1) as u32;
        let start = Tick(uniform_below(rng, half));
        reqs.push(Request {
            kind,
            size_kb,
            start_time: start,
            end_time: start,
        });
    }
    debug!(count = reqs.len(), "请求种群已生成");
    reqs
}
