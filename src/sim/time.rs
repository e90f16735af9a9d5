//! 仿真时间类型
//!
//! 定义离散时间步（tick）及其运算。

use serde::{Deserialize, Serialize};

/// 仿真时间（tick）。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// 推进若干 tick（饱和加法）。
    pub fn advance(self, delta: u64) -> Tick {
        Tick(self.0.saturating_add(delta))
    }

    /// 自 `earlier` 起经过的 tick 数。
    ///
    /// 调用方保证 `self >= earlier`；否则返回 0。
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    pub fn next(self) -> Tick {
        Tick(self.0.wrapping_add(1))
    }
}
