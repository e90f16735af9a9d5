//! 仿真核心模块
//!
//! 此模块包含 tick 步进仿真的核心组件：仿真时间、配置与驱动。

// 子模块声明
mod clock;
mod config;
mod time;

// 重新导出公共接口
pub use clock::Simulation;
pub use config::{SimConfig, SimError};
pub use time::Tick;
