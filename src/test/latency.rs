use crate::net::{
    DEFAULT_LATENCY, LatencyModel, Network, Request, RequestKind, UniformLatency,
};
use crate::sim::Tick;
use rand_chacha::ChaChaRng;
use rand_core::SeedableRng as _;

fn req(start: u64) -> Request {
    Request {
        kind: RequestKind::PageView,
        size_kb: 1,
        start_time: Tick(start),
        end_time: Tick(start),
    }
}

#[test]
fn uniform_latency_adds_between_one_and_max_ticks() {
    let mut net = Network::default();
    let dev = net.add_device(None, Box::new(UniformLatency::default()));
    let mut rng = ChaChaRng::seed_from_u64(42);

    let model = UniformLatency::default();
    assert_eq!(model.max(), DEFAULT_LATENCY);

    for _ in 0..1_000 {
        let mut r = req(5);
        let before = r.end_time;
        let after = model.apply(&mut r, net.device(dev), 1, &mut rng);
        assert_eq!(after, r.end_time);
        let delta = after.since(before);
        assert!((1..=DEFAULT_LATENCY).contains(&delta), "delta = {delta}");
    }
}

#[test]
fn uniform_latency_never_regresses_end_time() {
    let mut net = Network::default();
    let dev = net.add_device(None, Box::new(UniformLatency::default()));
    let mut rng = ChaChaRng::seed_from_u64(7);

    let model = UniformLatency::new(3);
    let mut r = req(0);
    let mut prev = r.end_time;
    for _ in 0..100 {
        let after = model.apply(&mut r, net.device(dev), 1, &mut rng);
        assert!(after >= prev);
        assert!(r.end_time >= r.start_time);
        prev = after;
    }
}

#[test]
fn latency_model_is_substitutable_per_device() {
    // A fixed model swapped in through the trait object seam.
    #[derive(Debug)]
    struct FixedLatency(u64);

    impl LatencyModel for FixedLatency {
        fn apply(
            &self,
            req: &mut Request,
            _dev: &crate::net::Device,
            _load: usize,
            _rng: &mut dyn rand_core::RngCore,
        ) -> Tick {
            req.end_time = req.end_time.advance(self.0);
            req.end_time
        }
    }

    let mut net = Network::default();
    let dev = net.add_device(None, Box::new(UniformLatency::default()));
    net.set_latency_model(dev, Box::new(FixedLatency(4)));

    let mut rng = ChaChaRng::seed_from_u64(0);
    let mut r = req(10);
    let device = net.device(dev);
    let after = device.latency.apply(&mut r, device, 1, &mut rng);
    assert_eq!(after, Tick(14));
}
