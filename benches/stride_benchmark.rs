/*!
 * Stride Scheduler Benchmarks
 *
 * Tick cost as the runnable set grows, and pick+advance versus the fused tick
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stride_kernel::{Scheduler, StrideConfig};

fn populated(tasks: u32) -> Scheduler {
    let scheduler = Scheduler::new(StrideConfig::default());
    for pid in 0..tasks {
        scheduler.add(pid, 2 + (pid as u64 % 30)).ok();
    }
    scheduler
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for tasks in [4u32, 64, 1024] {
        let scheduler = populated(tasks);
        group.bench_with_input(BenchmarkId::from_parameter(tasks), &scheduler, |b, s| {
            b.iter(|| black_box(s.tick()));
        });
    }

    group.finish();
}

fn bench_pick_then_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("pick_then_advance");

    for tasks in [4u32, 64, 1024] {
        let scheduler = populated(tasks);
        group.bench_with_input(BenchmarkId::from_parameter(tasks), &scheduler, |b, s| {
            b.iter(|| {
                if let Ok(pid) = s.pick_next() {
                    s.advance(black_box(pid)).ok();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tick, bench_pick_then_advance);
criterion_main!(benches);
