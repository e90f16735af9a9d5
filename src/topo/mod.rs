//! 拓扑构建模块

pub mod fanout;

pub use fanout::{FanoutTopology, build_fanout_tree};
