use criterion::{criterion_group, criterion_main, Criterion};
use tracewire::propagation::{Propagator, SpanFields, ZipkinSpanPropagator};
use tracewire::trace::SpanContext;
use tracewire::{SpanId, TraceFlags, TraceId};

fn criterion_benchmark(c: &mut Criterion) {
    let propagator = ZipkinSpanPropagator::new();
    let context = SpanContext::new(
        TraceId::from_u64(0x4bf9_2f35_77b3_4da6),
        SpanId::from_u64(0x00f0_67aa_0ba9_02b7),
        SpanId::from_u64(0x0000_0000_0001_7c29),
        TraceFlags::SAMPLED,
    );

    c.bench_function("inject", |b| {
        let mut carrier = SpanFields::default();
        b.iter(|| propagator.inject(&context, &mut carrier).unwrap());
    });

    c.bench_function("extract", |b| {
        let mut carrier = SpanFields::default();
        propagator.inject(&context, &mut carrier).unwrap();
        b.iter(|| propagator.extract(&carrier).unwrap());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
