//! 标识符类型
//!
//! 定义设备和请求在各自 arena 中的唯一标识符。

/// 设备标识符（`Network` arena 下标）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceId(pub usize);

/// 请求标识符（请求种群数组下标）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(pub usize);
