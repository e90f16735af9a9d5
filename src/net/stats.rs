//! 统计信息
//!
//! 定义运行期计数与最终的时延汇总。

use serde::Serialize;

use super::request::Request;
use crate::sim::Tick;

/// 运行期网络统计
#[derive(Debug, Default)]
pub struct Stats {
    /// 已从根设备出站队列离开（停止跟踪）的请求数
    pub retired: u64,
}

/// 最终时延汇总
///
/// `max_latency`/`avg_latency` 仅统计在时限内完成的请求；
/// 没有任何请求完成时二者为 `None`（“无数据”，而非除零错误）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LatencySummary {
    pub horizon: Tick,
    pub total_requests: usize,
    pub incomplete: usize,
    pub max_latency: Option<u64>,
    pub avg_latency: Option<u64>,
}

/// 汇总最终请求种群
///
/// 完成的判据是 `end_time <= horizon`；超出时限的请求计入
/// `incomplete` 并被排除在最大值与平均值之外。平均值为整数除法。
pub fn summarize(requests: &[Request], horizon: Tick) -> LatencySummary {
    let mut incomplete = 0_usize;
    let mut completed = 0_u64;
    let mut sum = 0_u64;
    let mut max: Option<u64> = None;

    for req in requests {
        if req.end_time > horizon {
            incomplete += 1;
            continue;
        }
        let latency = req.latency();
        completed += 1;
        sum = sum.saturating_add(latency);
        max = Some(max.map_or(latency, |m| m.max(latency)));
    }

    let avg_latency = (completed > 0).then(|| sum / completed);

    LatencySummary {
        horizon,
        total_requests: requests.len(),
        incomplete,
        max_latency: max,
        avg_latency,
    }
}
