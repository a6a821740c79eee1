use std::hint::black_box;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use micro_h2::flow::{FlowControlConfig, FlowController, WindowRegistry};
use micro_h2::protocol::StreamId;

const FRAME_SIZE: u32 = 16_384;

fn benchmark_decide_update(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("decide_update");

    for streams in [1u32, 16, 256] {
        let config = FlowControlConfig::default();
        let controller = FlowController::new(config);
        let ids: Vec<_> = (0..streams).map(|n| StreamId::new(n * 2 + 1)).collect();

        group.throughput(Throughput::Elements(u64::from(streams)));
        group.bench_with_input(BenchmarkId::from_parameter(streams), &ids, |b, ids| {
            let mut windows = WindowRegistry::new(config);
            for &id in ids {
                windows.open_stream(id).expect("stream ids should be distinct");
            }

            b.iter(|| {
                for &id in ids {
                    windows.record_data(id, FRAME_SIZE).expect("stream should be open");
                    black_box(controller.decide_update(&mut windows, id));
                }
                black_box(controller.decide_update(&mut windows, StreamId::CONNECTION))
            });
        });
    }

    group.finish();
}

criterion_group!(flow, benchmark_decide_update);
criterion_main!(flow);
