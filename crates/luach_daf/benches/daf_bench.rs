use criterion::{Criterion, black_box, criterion_group, criterion_main};
use luach_daf::{bavli_daf_for_jd, yerushalmi_daf_for_jd};

fn daf_bench(c: &mut Criterion) {
    // 2023-12-21 at 0h.
    let jd = 2_460_299.5;

    let mut group = c.benchmark_group("daf");
    group.bench_function("bavli", |b| b.iter(|| bavli_daf_for_jd(black_box(jd))));
    group.bench_function("yerushalmi", |b| {
        b.iter(|| yerushalmi_daf_for_jd(black_box(jd)))
    });
    group.finish();
}

criterion_group!(benches, daf_bench);
criterion_main!(benches);
