//! 路由更新引擎
//!
//! 每个 tick 从树根开始做一次后序遍历：先完整处理所有子设备，
//! 再考察自身的两个队列。这保证一条请求每个 tick 在每个方向上
//! 至多推进一层，推进节奏确定且可复现。

use rand_core::RngCore;
use tracing::trace;

use super::id::DeviceId;
use super::request::Request;
use crate::sim::Tick;

use super::network::Network;

impl Network {
    /// 对以 `id` 为根的子树执行一个 tick 的更新
    ///
    /// 每个设备每个方向每 tick 至多推进一条请求（严格队首阻塞）：
    /// 队首未就绪时，其后的请求即使就绪也不得越过它。
    /// 空队列是正常控制流，直接跳过。
    pub fn update(
        &mut self,
        id: DeviceId,
        now: Tick,
        reqs: &mut [Request],
        rng: &mut dyn RngCore,
    ) {
        // 子设备先行
        for i in 0..self.device(id).children().len() {
            let child = self.device(id).children()[i];
            self.update(child, now, reqs, rng);
        }

        self.step_inbound(id, now, reqs, rng);
        self.step_outbound(id, now, reqs, rng);
    }

    /// 入站方向（根 → 服务器）：就绪的队首下行一跳
    fn step_inbound(
        &mut self,
        id: DeviceId,
        now: Tick,
        reqs: &mut [Request],
        rng: &mut dyn RngCore,
    ) {
        let Some(rid) = self.device(id).inbound.peek_head() else {
            return;
        };
        if reqs[rid.0].end_time > now {
            // 队首未就绪，本 tick 入站侧不做任何事
            return;
        }
        self.device_mut(id).inbound.dequeue_head();

        match self.least_loaded_child(id) {
            Some(child) => {
                trace!(device = ?id, child = ?child, req = ?rid, "下行交给最空闲子设备");
                self.enqueue_inbound(child, rid, reqs, rng);
            }
            None => {
                // 叶子设备即服务器：请求掉头，进入自身出站队列
                trace!(device = ?id, req = ?rid, "服务器处理完毕，转入出站");
                self.enqueue_outbound(id, rid, reqs, rng);
            }
        }
    }

    /// 出站方向（服务器 → 根）：就绪的队首上行一跳
    fn step_outbound(
        &mut self,
        id: DeviceId,
        now: Tick,
        reqs: &mut [Request],
        rng: &mut dyn RngCore,
    ) {
        let Some(rid) = self.device(id).outbound.peek_head() else {
            return;
        };
        if reqs[rid.0].end_time > now {
            return;
        }
        self.device_mut(id).outbound.dequeue_head();

        match self.device(id).parent() {
            Some(parent) => {
                trace!(device = ?id, parent = ?parent, req = ?rid, "上行交给父设备");
                self.enqueue_outbound(parent, rid, reqs, rng);
            }
            None => {
                // 根设备出站即送达：停止跟踪，end_time 定格为送达时刻
                trace!(device = ?id, req = ?rid, end_time = ?reqs[rid.0].end_time, "请求送达");
                self.stats.retired += 1;
            }
        }
    }
}
