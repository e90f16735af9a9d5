//! 网络模拟模块
//!
//! 此模块包含设备树仿真的核心组件：设备、请求、时延模型、
//! 路由更新引擎与结果汇总。

// 子模块声明
mod id;
mod request;
mod device;
mod latency;
mod network;
mod engine;
mod stats;

// 重新导出公共接口
pub use id::{DeviceId, RequestId};
pub use request::{Request, RequestKind, generate_requests};
pub use device::Device;
pub use latency::{DEFAULT_LATENCY, LatencyModel, UniformLatency};
pub use network::Network;
pub use stats::{LatencySummary, Stats, summarize};
