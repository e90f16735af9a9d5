//! 请求队列
//!
//! 每个设备在两个方向（入站/出站）上各持有一个 FIFO 队列。
//! 队列只保存请求标识，不拥有请求本身。

mod fifo;

pub use fifo::FifoQueue;
