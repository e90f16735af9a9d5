//! 网络设备
//!
//! 定义固定扇出树中的一个节点：内部设备向子设备分发请求，
//! 叶子设备（服务器）终结请求并将其送入出站队列。

use super::id::DeviceId;
use super::latency::LatencyModel;
use crate::queue::FifoQueue;

/// 树中的一个网络设备
///
/// 父引用是非拥有的弱关系（arena 下标）；子设备数组在构建时
/// 固定，仿真期间不再变化。
#[derive(Debug)]
pub struct Device {
    id: DeviceId,
    parent: Option<DeviceId>,
    children: Vec<DeviceId>,
    /// 入站队列（根 → 服务器方向）
    pub inbound: FifoQueue,
    /// 出站队列（服务器 → 根方向）
    pub outbound: FifoQueue,
    /// 绑定在设备上的时延模型
    pub latency: Box<dyn LatencyModel>,
}

impl Device {
    pub fn new(id: DeviceId, parent: Option<DeviceId>, latency: Box<dyn LatencyModel>) -> Self {
        Self {
            id,
            parent,
            children: Vec::new(),
            inbound: FifoQueue::new(),
            outbound: FifoQueue::new(),
            latency,
        }
    }

    pub fn id(&self) -> DeviceId {
        self.id
    }

    pub fn parent(&self) -> Option<DeviceId> {
        self.parent
    }

    pub fn children(&self) -> &[DeviceId] {
        &self.children
    }

    /// 是否为叶子设备（服务器）：由没有子设备导出，而非独立标记
    pub fn is_server(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn push_child(&mut self, child: DeviceId) {
        self.children.push(child);
    }
}
