//! Benchmarking using `criterion`.

pub use criterion::*;

use crate::benchmark::Benchmarker;
use criterion::measurement::WallTime;

/// Defines a criterion target function running the benchmark function of the
/// same name in the given module of [`benchmarks`](crate::benchmark::benchmarks).
/// The module name becomes the criterion group name.
#[macro_export]
macro_rules! define_criterion_target {
    ($group:ident, $name:ident) => {
        $crate::define_criterion_target!(@target $group, $name, None);
    };
    ($group:ident, $name:ident, $sample_size:expr) => {
        $crate::define_criterion_target!(@target $group, $name, Some($sample_size));
    };
    (@target $group:ident, $name:ident, $sample_size:expr) => {
        pub fn $name(c: &mut $crate::benchmark::criterion::Criterion) {
            $crate::benchmark::benchmarks::$group::$name(
                $crate::benchmark::criterion::CriterionFunctionBenchmarker::new(
                    c,
                    stringify!($group),
                    stringify!($name),
                    $sample_size,
                ),
            );
        }
    };
}

/// Runs a benchmark function as one function in a criterion benchmark group.
#[allow(missing_debug_implementations)]
pub struct CriterionFunctionBenchmarker<'a> {
    group: BenchmarkGroup<'a, WallTime>,
    function_id: &'static str,
}

impl<'a> CriterionFunctionBenchmarker<'a> {
    pub fn new(
        c: &'a mut Criterion,
        group_name: &'static str,
        function_id: &'static str,
        sample_size: Option<usize>,
    ) -> Self {
        let mut group = c.benchmark_group(group_name);
        if let Some(sample_size) = sample_size {
            group.sample_size(sample_size);
        }
        Self { group, function_id }
    }
}

impl Benchmarker for CriterionFunctionBenchmarker<'_> {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T) {
        let mut group = self.group;
        group.bench_function(self.function_id, |bencher| bencher.iter(&mut *f));
        group.finish();
    }
}

/// Criterion configuration shared by the bench targets.
pub fn config() -> Criterion {
    Criterion::default().noise_threshold(0.03)
}
