//! 仿真配置
//!
//! 核心只接受显式传入的配置结构，自身不读取任何外部来源。

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 配置校验失败
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    /// 某一层扇出为 0：该层设备会缺失子数组，整棵树作废
    #[error("fanout level {level} has zero children, tree build would be partial")]
    EmptyLevel { level: usize },
    /// 逐层扇出相乘溢出，设备总数无法表示
    #[error("device count overflows for fanout sequence {fanout:?}")]
    TooManyDevices { fanout: Vec<usize> },
}

/// 一次仿真运行的全部输入
///
/// 默认值与原型的内置参数一致。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// 时限（tick 数）：仿真推进到 `horizon - 1` 为止
    pub horizon: u64,
    /// 逐层扇出序列，长度即树深（不含根层）；空序列表示只有树根
    pub fanout: Vec<usize>,
    /// 请求总数
    pub requests: usize,
    /// 随机种子：种子、扇出、请求数、时限相同则逐位可复现
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            horizon: 10_000,
            fanout: vec![1, 1, 1],
            requests: 2_000,
            seed: 0,
        }
    }
}

impl SimConfig {
    /// 校验配置
    ///
    /// 构建是全有或全无的：任何会导致部分成功的输入在分配
    /// 之前拒绝，下游路由假定树与种群都是完整的。
    pub fn validate(&self) -> Result<(), SimError> {
        let too_many = || SimError::TooManyDevices {
            fanout: self.fanout.clone(),
        };

        let mut per_level = 1_usize;
        let mut total = 1_usize;
        for (level, &count) in self.fanout.iter().enumerate() {
            if count == 0 {
                return Err(SimError::EmptyLevel { level });
            }
            per_level = per_level.checked_mul(count).ok_or_else(too_many)?;
            total = total.checked_add(per_level).ok_or_else(too_many)?;
        }
        Ok(())
    }

    /// 树中的设备总数（含根）
    pub fn device_count(&self) -> usize {
        let mut per_level = 1_usize;
        let mut total = 1_usize;
        for &count in &self.fanout {
            per_level = per_level.saturating_mul(count);
            total = total.saturating_add(per_level);
        }
        total
    }
}
