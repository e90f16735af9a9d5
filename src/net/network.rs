//! 设备树管理
//!
//! 以 arena 方式持有整棵设备树：设备之间只通过下标互相引用，
//! 父引用是弱关系，不存在双重所有权。

use rand_core::RngCore;
use tracing::{debug, trace};

use super::device::Device;
use super::id::{DeviceId, RequestId};
use super::latency::LatencyModel;
use super::request::Request;
use super::stats::Stats;

/// 设备树
///
/// 根设备固定位于下标 0；树在仿真开始前一次性构建，
/// 运行期间不再创建或销毁设备。
#[derive(Debug, Default)]
pub struct Network {
    devices: Vec<Device>,
    pub stats: Stats,
}

impl Network {
    /// 添加设备并登记到父设备的子数组
    pub fn add_device(
        &mut self,
        parent: Option<DeviceId>,
        latency: Box<dyn LatencyModel>,
    ) -> DeviceId {
        let id = DeviceId(self.devices.len());
        self.devices.push(Device::new(id, parent, latency));
        if let Some(p) = parent {
            self.devices[p.0].push_child(id);
        }
        id
    }

    /// 根设备标识
    ///
    /// 树为空时返回 `None`；构建器保证非空树的根位于下标 0。
    pub fn root(&self) -> Option<DeviceId> {
        (!self.devices.is_empty()).then_some(DeviceId(0))
    }

    pub fn device(&self, id: DeviceId) -> &Device {
        &self.devices[id.0]
    }

    pub fn device_mut(&mut self, id: DeviceId) -> &mut Device {
        &mut self.devices[id.0]
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// 替换某台设备绑定的时延模型
    pub fn set_latency_model(&mut self, id: DeviceId, latency: Box<dyn LatencyModel>) {
        self.devices[id.0].latency = latency;
    }

    /// 选出入站负载严格最小的子设备
    ///
    /// 并列时取扫描中遇到的第一个最小者（下标最小的子设备）。
    /// 叶子设备返回 `None`。
    pub fn least_loaded_child(&self, id: DeviceId) -> Option<DeviceId> {
        let children = self.devices[id.0].children();
        let mut min: Option<DeviceId> = None;
        for &child in children {
            let load = self.devices[child.0].inbound.len();
            match min {
                Some(cur) if self.devices[cur.0].inbound.len() <= load => {}
                _ => min = Some(child),
            }
        }
        min
    }

    /// 将请求放入某设备的入站队列并施加一跳时延
    ///
    /// 负载取入队后的队列长度（含本请求）。
    pub fn enqueue_inbound(
        &mut self,
        id: DeviceId,
        rid: RequestId,
        reqs: &mut [Request],
        rng: &mut dyn RngCore,
    ) {
        self.devices[id.0].inbound.enqueue(rid);
        let load = self.devices[id.0].inbound.len();
        let device = &self.devices[id.0];
        let end = device.latency.apply(&mut reqs[rid.0], device, load, rng);
        trace!(device = ?id, req = ?rid, load, end_time = ?end, "入站入队");
    }

    /// 将请求放入某设备的出站队列并施加一跳时延
    pub fn enqueue_outbound(
        &mut self,
        id: DeviceId,
        rid: RequestId,
        reqs: &mut [Request],
        rng: &mut dyn RngCore,
    ) {
        self.devices[id.0].outbound.enqueue(rid);
        let load = self.devices[id.0].outbound.len();
        let device = &self.devices[id.0];
        let end = device.latency.apply(&mut reqs[rid.0], device, load, rng);
        trace!(device = ?id, req = ?rid, load, end_time = ?end, "出站入队");
    }

    /// 把一条请求送入树根的入站队列（入场）
    pub fn admit(&mut self, rid: RequestId, reqs: &mut [Request], rng: &mut dyn RngCore) {
        let Some(root) = self.root() else {
            debug!(req = ?rid, "树为空，无处入场");
            return;
        };
        self.enqueue_inbound(root, rid, reqs, rng);
    }
}
