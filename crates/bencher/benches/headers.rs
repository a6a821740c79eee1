use std::hint::black_box;
use bencher::{TestCase, TestFile};
use bytes::BytesMut;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use micro_h2::header::{filter_to_wire, sort_and_split, validate_inbound, LegacyHeaderEncoder, WIRE_BESPOKE};
use tokio_util::codec::Encoder;

static SMALL_REQUEST: TestFile = TestFile::new("request_small.txt", include_str!("../resources/headers/request_small.txt"));
static LARGE_RESPONSE: TestFile = TestFile::new("response_large.txt", include_str!("../resources/headers/response_large.txt"));

fn create_test_cases() -> Vec<TestCase> {
    vec![TestCase::new("small_request", SMALL_REQUEST), TestCase::new("large_response", LARGE_RESPONSE)]
}

fn benchmark_filter_to_wire(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("filter_to_wire");

    for case in create_test_cases() {
        let lines = case.file().header_lines();
        group.throughput(Throughput::Bytes(case.file().field_bytes()));
        group.bench_with_input(BenchmarkId::from_parameter(case.id()), &lines, |b, lines| {
            b.iter(|| black_box(filter_to_wire(black_box(lines), &WIRE_BESPOKE)));
        });
    }

    group.finish();
}

fn benchmark_sort_and_split(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sort_and_split");

    for case in create_test_cases() {
        let lines = case.file().header_lines();
        let raw = filter_to_wire(&lines, &WIRE_BESPOKE);
        group.throughput(Throughput::Elements(raw.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(case.id()), &raw, |b, raw| {
            b.iter(|| {
                let sorted = sort_and_split(black_box(raw));
                validate_inbound(&sorted).expect("fixture headers should be legal");
                black_box(sorted)
            });
        });
    }

    group.finish();
}

fn benchmark_legacy_encoder(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("legacy_encoder");

    for case in create_test_cases() {
        let lines = case.file().header_lines();
        let wire = filter_to_wire(&lines, &WIRE_BESPOKE);
        group.throughput(Throughput::Bytes(case.file().field_bytes()));
        group.bench_with_input(BenchmarkId::from_parameter(case.id()), &wire, |b, wire| {
            let mut encoder = LegacyHeaderEncoder::new();
            b.iter_batched_ref(
                BytesMut::new,
                |dst| {
                    encoder.encode((200, wire.as_slice()), dst).expect("encoding into memory should not fail");
                    black_box(dst.len());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(headers, benchmark_filter_to_wire, benchmark_sort_and_split, benchmark_legacy_encoder);
criterion_main!(headers);
