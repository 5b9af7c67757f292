//! Wall-Clock Measurement
//!
//! Runs a sort repeatedly against a fixed dataset and records one
//! elapsed-seconds sample per run. Aggregation into mean and standard
//! deviation lives in `sortbench-stats`; this module only produces the
//! raw samples.

use std::hint::black_box;
use std::time::Instant;

use crate::SortFn;

/// Execute `sort` against `data` once per repeat and collect raw samples.
///
/// Every run borrows the same unmutated dataset, so all samples measure
/// identical work. `black_box` keeps the optimizer from discarding the
/// unused sorted output or hoisting the input read.
pub fn measure_sort(sort: SortFn, data: &[i64], repeats: usize) -> Vec<f64> {
    let mut samples = Vec::with_capacity(repeats);

    for _ in 0..repeats {
        let start = Instant::now();
        let sorted = sort(black_box(data));
        let elapsed = start.elapsed();
        black_box(sorted);

        samples.push(elapsed.as_secs_f64());
    }

    samples
}

/// Pin the current thread to a specific core.
///
/// Reduces scheduling noise in the samples by avoiding core migrations.
#[cfg(target_os = "linux")]
pub fn pin_to_cpu(cpu: usize) -> Result<(), std::io::Error> {
    use std::mem::MaybeUninit;

    unsafe {
        let mut set = MaybeUninit::<libc::cpu_set_t>::zeroed();
        let set_ref = set.assume_init_mut();

        libc::CPU_ZERO(set_ref);
        libc::CPU_SET(cpu, set_ref);

        let result = libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), set_ref);

        if result == 0 {
            Ok(())
        } else {
            Err(std::io::Error::last_os_error())
        }
    }
}

/// Pin the current thread to a specific core.
#[cfg(not(target_os = "linux"))]
pub fn pin_to_cpu(_cpu: usize) -> Result<(), std::io::Error> {
    // CPU pinning not supported on this platform
    Ok(())
}
