//! 时延模型
//!
//! 请求每入队一跳，立即调用一次时延模型累加其 `end_time`。
//! 模型是唯一的可替换策略点：实现可以利用当前负载、请求大小
//! 或设备形态，但返回值必须不小于调用时刻的 `end_time`。

use rand_core::RngCore;

use super::device::Device;
use super::request::Request;
use crate::sim::Tick;

/// 默认时延上限（tick）
pub const DEFAULT_LATENCY: u64 = 10;

/// 时延模型接口
pub trait LatencyModel: std::fmt::Debug {
    /// 为刚入队的请求累加一跳时延，返回更新后的 `end_time`。
    ///
    /// `load` 是入队后（含本请求）观察到的该方向队列长度。
    fn apply(
        &self,
        req: &mut Request,
        dev: &Device,
        load: usize,
        rng: &mut dyn RngCore,
    ) -> Tick;
}

/// 均匀随机时延：每跳累加 `[1, max]` 内的均匀抽样
#[derive(Debug, Clone, Copy)]
pub struct UniformLatency {
    max: u64,
}

impl UniformLatency {
    pub fn new(max: u64) -> Self {
        debug_assert!(max >= 1, "latency bound must be at least 1 tick");
        Self { max }
    }

    pub fn max(&self) -> u64 {
        self.max
    }
}

impl Default for UniformLatency {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

impl LatencyModel for UniformLatency {
    fn apply(
        &self,
        req: &mut Request,
        _dev: &Device,
        _load: usize,
        rng: &mut dyn RngCore,
    ) -> Tick {
        let delta = rng.next_u64() % self.max + 1;
        req.end_time = req.end_time.advance(delta);
        req.end_time
    }
}
