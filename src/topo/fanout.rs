//! 固定扇出树构建
//!
//! 按逐层扇出序列递归构建设备树：第 `d-1` 层的每台设备在
//! 第 `d` 层拥有 `fanout[d-1]` 个子设备，最底层为服务器。

use crate::net::{DeviceId, Network, UniformLatency};

/// 构建好的扇出树的逐层索引
#[derive(Debug, Clone)]
pub struct FanoutTopology {
    /// 每层的设备标识；`levels[0]` 只含树根
    pub levels: Vec<Vec<DeviceId>>,
}

impl FanoutTopology {
    pub fn root(&self) -> DeviceId {
        self.levels[0][0]
    }

    /// 树深（含根所在的第 0 层）
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// 最底层设备（服务器）
    pub fn servers(&self) -> &[DeviceId] {
        self.levels.last().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn device(&self, level: usize, index: usize) -> DeviceId {
        self.levels[level][index]
    }
}

fn make_children(
    net: &mut Network,
    parent: DeviceId,
    level: usize,
    fanout: &[usize],
    topo: &mut FanoutTopology,
) {
    let Some((&count, rest)) = fanout.split_first() else {
        return;
    };

    if topo.levels.len() <= level {
        topo.levels.push(Vec::new());
    }

    for _ in 0..count {
        let child = net.add_device(Some(parent), Box::new(UniformLatency::default()));
        topo.levels[level].push(child);
        make_children(net, child, level + 1, rest, topo);
    }
}

/// 按扇出序列构建设备树
///
/// 先创建无父的树根，再逐层展开；每台设备都绑定默认的均匀
/// 随机时延模型。空序列合法：树只含根，根同时是服务器。
/// 调用前应先通过 `SimConfig::validate` 排除零扇出层。
pub fn build_fanout_tree(net: &mut Network, fanout: &[usize]) -> FanoutTopology {
    let root = net.add_device(None, Box::new(UniformLatency::default()));
    let mut topo = FanoutTopology {
        levels: vec![vec![root]],
    };
    make_children(net, root, 1, fanout, &mut topo);
    topo
}
