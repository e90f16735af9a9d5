//! 扇出树流量仿真
//!
//! 按逐层扇出构建设备树，注入请求种群并运行到时限，
//! 输出端到端时延统计。

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use treesim_rs::sim::{SimConfig, Simulation};

#[derive(Debug, Parser)]
#[command(
    name = "fanout-sim",
    about = "固定扇出层级网络的请求时延仿真"
)]
struct Args {
    /// JSON 配置文件路径；命令行参数覆盖文件中的取值
    #[arg(long)]
    config: Option<PathBuf>,

    /// 时限（tick 数）
    #[arg(long)]
    horizon: Option<u64>,

    /// 逐层扇出，逗号分隔（如 4,8,16）；空串表示只有树根
    #[arg(long)]
    fanout: Option<String>,

    /// 请求总数
    #[arg(long)]
    requests: Option<usize>,

    /// 随机种子
    #[arg(long)]
    seed: Option<u64>,

    /// 把汇总结果以 JSON 形式写入此文件
    #[arg(long)]
    json: Option<PathBuf>,
}

fn parse_fanout(raw: &str) -> Vec<usize> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.parse().expect("fanout must be a list of integers"))
        .collect()
}

fn main() {
    // 初始化 tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path).expect("read config file");
            serde_json::from_str::<SimConfig>(&raw).expect("parse config file")
        }
        None => SimConfig::default(),
    };
    if let Some(horizon) = args.horizon {
        config.horizon = horizon;
    }
    if let Some(fanout) = &args.fanout {
        config.fanout = parse_fanout(fanout);
    }
    if let Some(requests) = args.requests {
        config.requests = requests;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let mut sim = match Simulation::new(&config) {
        Ok(sim) => sim,
        Err(err) => {
            eprintln!("invalid config: {err}");
            std::process::exit(1);
        }
    };
    let summary = sim.run();

    println!("results:");
    println!("sim time: {}", summary.horizon.0);
    println!("num requests in: {}", summary.total_requests);
    println!("num incomplete requests: {}", summary.incomplete);
    match summary.max_latency {
        Some(max) => println!("maximum latency: {max}"),
        None => println!("maximum latency: no data"),
    }
    match summary.avg_latency {
        Some(avg) => println!("average latency: {avg}"),
        None => println!("average latency: no data"),
    }

    if let Some(path) = args.json {
        let json = serde_json::to_string_pretty(&summary).expect("serialize summary");
        fs::write(&path, json).expect("write summary json");
        eprintln!("wrote summary to {}", path.display());
    }
}
