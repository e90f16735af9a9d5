//! 仿真驱动
//!
//! 持有一次运行的全部状态（设备树、请求种群、时钟、随机源），
//! 以固定宽度的 tick 驱动路由更新引擎。没有全局可变状态：
//! 所有组件都通过这个上下文对象协作。

use rand_chacha::ChaChaRng;
use rand_core::SeedableRng as _;
use tracing::{debug, info};

use super::config::{SimConfig, SimError};
use super::time::Tick;
use crate::net::{
    LatencySummary, Network, Request, RequestId, generate_requests, summarize,
};
use crate::topo::{FanoutTopology, build_fanout_tree};

/// 一次仿真运行的上下文
pub struct Simulation {
    net: Network,
    topo: FanoutTopology,
    requests: Vec<Request>,
    rng: ChaChaRng,
    now: Tick,
    horizon: Tick,
}

impl Simulation {
    /// 校验配置并搭建运行环境：建树、生成请求种群
    ///
    /// 任何一步失败都放弃整次运行，绝不带着残缺的树或种群继续。
    pub fn new(config: &SimConfig) -> Result<Self, SimError> {
        config.validate()?;

        let mut rng = ChaChaRng::seed_from_u64(config.seed);
        let horizon = Tick(config.horizon);

        let mut net = Network::default();
        let topo = build_fanout_tree(&mut net, &config.fanout);
        debug!(
            devices = net.len(),
            depth = topo.depth(),
            servers = topo.servers().len(),
            "设备树已构建"
        );

        let requests = generate_requests(config.requests, horizon, &mut rng);

        Ok(Self {
            net,
            topo,
            requests,
            rng,
            now: Tick::ZERO,
            horizon,
        })
    }

    pub fn now(&self) -> Tick {
        self.now
    }

    pub fn horizon(&self) -> Tick {
        self.horizon
    }

    pub fn network(&self) -> &Network {
        &self.net
    }

    pub fn network_mut(&mut self) -> &mut Network {
        &mut self.net
    }

    pub fn topology(&self) -> &FanoutTopology {
        &self.topo
    }

    /// 最终请求种群（外部报告器按下标读取）
    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    /// 在 tick 0 把全部请求送入树根的入站队列
    ///
    /// 每条请求入场即施加一次时延，负载取入队后的根入站长度
    /// （统一采用“加一之后”的约定）。
    fn admit_all(&mut self) {
        for i in 0..self.requests.len() {
            self.net
                .admit(RequestId(i), &mut self.requests, &mut self.rng);
        }
        debug!(admitted = self.requests.len(), "请求已全部入场");
    }

    /// 运行到时限并返回时延汇总
    ///
    /// 时钟从 0 推进到 `horizon - 1`（含），每个 tick 对树根
    /// 调用一次更新引擎。到达时限即终止，不关心请求是否完成。
    #[tracing::instrument(skip(self), fields(horizon = self.horizon.0, requests = self.requests.len()))]
    pub fn run(&mut self) -> LatencySummary {
        info!("▶️  开始运行仿真");

        self.admit_all();

        if let Some(root) = self.net.root() {
            while self.now < self.horizon {
                self.net
                    .update(root, self.now, &mut self.requests, &mut self.rng);
                self.now = self.now.next();
            }
        }

        let summary = summarize(&self.requests, self.horizon);
        info!(
            retired = self.net.stats.retired,
            incomplete = summary.incomplete,
            "✅ 仿真完成"
        );
        summary
    }
}
