//! Benchmarking of vector operations.

#[cfg(feature = "criterion")]
pub mod criterion;

pub mod benchmarks;

use std::{
    hint::black_box,
    time::{Duration, Instant},
};

/// Runs a closure repeatedly and measures it.
pub trait Benchmarker {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T);
}

/// Runs the closure for a fixed wall-clock duration after an optional delay
/// and logs the iteration throughput.
#[derive(Clone, Debug)]
pub struct BasicBenchmarker {
    duration: Duration,
    delayer: Delayer,
}

#[derive(Clone, Debug)]
pub struct Delayer {
    program_start: Instant,
    delay: Duration,
}

macro_rules! define_target_enum {
(
    $name:ident,
    $benchmarks_mod:path,
    $(
        $module:ident => {
            $($func:ident),* $(,)?
        }
    ),* $(,)?
) => {
    ::pastey::paste! {
        #[allow(clippy::enum_variant_names)]
        #[cfg_attr(feature = "cli", derive(::clap::ValueEnum))]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
        pub enum $name {
            $(
                $( [<$module:camel $func:camel>] ),*
            ),*
        }

        impl $name {
            fn execute(&self, benchmarker: impl $crate::benchmark::Benchmarker) {
                match self {
                    $(
                        $( Self::[<$module:camel $func:camel>] => $benchmarks_mod::$module::$func(benchmarker), )*
                    )*
                }
            }
        }
    }};
}

define_target_enum! {
    Target,
    crate::benchmark::benchmarks,
    vector => {
        add_vector3f,
        add_vector4i,
        dot_vector3f,
        cross_vector3f,
        length_vector4d,
        length_fast_vector4d,
        normalize_vector3f,
        normalize_fast_vector3f,
        lerp_vector3f,
        hash_vector3f,
    },
    swizzle => {
        get_swizzle_vector4f,
        set_swizzle_vector4f,
    },
    transform => {
        transform_position_vector3f,
        rotate_vector3f,
        project_vector3d,
    }
}

impl BasicBenchmarker {
    pub fn new(duration: Duration, delayer: Delayer) -> Self {
        Self { duration, delayer }
    }
}

impl Benchmarker for BasicBenchmarker {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T) {
        self.delayer.wait();
        let start = Instant::now();
        let mut iterations: u64 = 0;
        loop {
            black_box(f());
            iterations += 1;

            if start.elapsed() > self.duration {
                break;
            }
        }
        let elapsed = start.elapsed();
        log::info!(
            "Ran {iterations} iterations in {:.3} s ({:.1} ns per iteration)",
            elapsed.as_secs_f64(),
            elapsed.as_secs_f64() * 1e9 / iterations as f64
        );
    }
}

impl Delayer {
    pub fn new(program_start: Instant, delay_seconds: f64) -> Self {
        Self {
            program_start,
            delay: Duration::from_secs_f64(delay_seconds),
        }
    }

    fn wait(self) {
        let remaining = self.delay.saturating_sub(self.program_start.elapsed());
        if remaining > Duration::ZERO {
            log::debug!("Waiting {remaining:?} before starting");
            std::thread::sleep(remaining);
        }
    }
}

/// Runs the given benchmark target for at least `duration` seconds (and at
/// least once), starting no earlier than `delay` seconds after this call.
pub fn benchmark(target: Target, duration: f64, delay: f64) {
    let start = Instant::now();

    let delayer = Delayer::new(start, delay);
    let duration = Duration::from_secs_f64(duration);

    log::info!("Running benchmark target {target:?} for {duration:?}");

    let benchmarker = BasicBenchmarker::new(duration, delayer);

    target.execute(benchmarker);
}
