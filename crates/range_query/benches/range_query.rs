use bench::apply_runtime_config_for_size;
use bench::default_rng;
use bench::random_closed_ranges;
use bench::random_point_updates;
use criterion::BenchmarkGroup;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::measurement::Measurement;
use range_query::FenwickTree;
use range_query::RangeSum;
use range_query::SegmentTree;
use range_query::SumTree;
use std::hint::black_box;

const SIZES: [usize; 4] = [1_024, 4_096, 16_384, 65_536];
const DELTA_RANGE: std::ops::RangeInclusive<i64> = -1_000_000..=1_000_000;

#[derive(Clone, Copy, Debug)]
enum Workload {
    UpdateHeavy,
    Mixed,
    QueryHeavy,
}

impl Workload {
    fn label(self) -> &'static str {
        match self {
            Self::UpdateHeavy => "update_heavy",
            Self::Mixed => "mixed",
            Self::QueryHeavy => "query_heavy",
        }
    }

    /// Number of `(updates, queries)` for an input of size `n`.
    fn op_counts(self, n: usize) -> (usize, usize) {
        match self {
            Self::UpdateHeavy => (4 * n, n / 4),
            Self::Mixed => (n, n),
            Self::QueryHeavy => (n / 4, 4 * n),
        }
    }
}

fn bench_impl<M, R>(
    group: &mut BenchmarkGroup<'_, M>,
    name: &str,
    size: usize,
    updates: &[(usize, i64)],
    queries: &[(usize, usize)],
) where
    M: Measurement,
    R: RangeSum,
{
    group.bench_function(BenchmarkId::new(name, size), |bencher| {
        bencher.iter(|| {
            let mut tree = R::with_len(black_box(size)).unwrap();
            for &(i, delta) in updates {
                tree.add(black_box(i), black_box(delta)).unwrap();
            }
            let mut acc = 0_i64;
            for &(l, r) in queries {
                acc = acc.wrapping_add(tree.interval_sum(black_box(l), black_box(r)).unwrap());
            }
            black_box(acc);
        })
    });
}

fn bench_range_sum(c: &mut Criterion) {
    let workloads = [Workload::UpdateHeavy, Workload::Mixed, Workload::QueryHeavy];
    let mut rng = default_rng();

    for workload in workloads {
        let mut group = c.benchmark_group(format!("range_sum/workload/{}", workload.label()));

        for &size in &SIZES {
            apply_runtime_config_for_size(&mut group, size);
            let (u, q) = workload.op_counts(size);
            let updates = random_point_updates(&mut rng, size, u, DELTA_RANGE);
            let queries = random_closed_ranges(&mut rng, size, q);

            bench_impl::<_, SumTree>(&mut group, "segtree", size, &updates, &queries);
            bench_impl::<_, FenwickTree>(&mut group, "fenwick", size, &updates, &queries);
        }

        group.finish();
    }
}

fn bench_range_min(c: &mut Criterion) {
    let mut rng = default_rng();
    let mut group = c.benchmark_group("range_min");

    for &size in &SIZES {
        apply_runtime_config_for_size(&mut group, size);
        let updates = random_point_updates(&mut rng, size, size, DELTA_RANGE);
        let queries = random_closed_ranges(&mut rng, size, size);

        group.bench_function(BenchmarkId::new("segtree", size), |bencher| {
            bencher.iter(|| {
                let mut tree = SegmentTree::new(size, i64::MAX, |a, b| *a.min(b)).unwrap();
                for &(i, value) in &updates {
                    tree.set(black_box(i), black_box(value)).unwrap();
                }
                let mut acc = 0_i64;
                for &(l, r) in &queries {
                    acc ^= tree.iterative_query(black_box(l), black_box(r)).unwrap();
                }
                black_box(acc);
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_range_sum, bench_range_min);
criterion_main!(benches);
