//! Wall-clock and CPU-clock timing
//!
//! Thin clock accessors used for profiling and run stamping. All
//! functions are stateless; `cputime` is the only one with a platform
//! split (POSIX clock chain vs. unavailable).

use std::thread;
use std::time::Duration;

use chrono::{Local, Utc};

/// Seconds since the Unix epoch, with microsecond resolution.
pub fn wallclock() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1e6
}

/// Process CPU time in seconds, or `None` if no primitive is available.
///
/// Tries the best-resolution POSIX primitive first and degrades:
/// `clock_gettime(CLOCK_PROCESS_CPUTIME_ID)`, then user time from
/// `getrusage(RUSAGE_SELF)`, then CRT `clock()`.
#[cfg(unix)]
pub fn cputime() -> Option<f64> {
    // SAFETY: clock_gettime writes the output struct on success only
    unsafe {
        let mut ts: libc::timespec = std::mem::zeroed();
        if libc::clock_gettime(libc::CLOCK_PROCESS_CPUTIME_ID, &mut ts) == 0 {
            return Some(ts.tv_sec as f64 + ts.tv_nsec as f64 / 1e9);
        }
    }

    // SAFETY: getrusage writes the output struct on success only
    unsafe {
        let mut usage: libc::rusage = std::mem::zeroed();
        if libc::getrusage(libc::RUSAGE_SELF, &mut usage) == 0 {
            return Some(
                usage.ru_utime.tv_sec as f64 + usage.ru_utime.tv_usec as f64 / 1e6,
            );
        }
        log::warn!(
            "getrusage(RUSAGE_SELF) failed: {}",
            std::io::Error::last_os_error()
        );
    }

    // The `libc` crate does not re-export the CRT `clock()` primitive or
    // the POSIX `CLOCKS_PER_SEC` constant on this platform, so bind them
    // directly. CLOCKS_PER_SEC is fixed at 1_000_000 by POSIX.
    unsafe extern "C" {
        fn clock() -> libc::clock_t;
    }
    const CLOCKS_PER_SEC: libc::clock_t = 1_000_000;

    // SAFETY: clock takes no arguments and only reads process state
    let ticks = unsafe { clock() };
    if ticks >= 0 {
        return Some(ticks as f64 / CLOCKS_PER_SEC as f64);
    }

    None
}

/// Process CPU time in seconds, or `None` if no primitive is available.
#[cfg(not(unix))]
pub fn cputime() -> Option<f64> {
    log::warn!("process CPU time is not available on this platform");
    None
}

/// Whole seconds since the Unix epoch.
pub fn unix_timestamp_secs() -> u64 {
    Utc::now().timestamp().max(0) as u64
}

/// Milliseconds since the Unix epoch.
pub fn unix_timestamp_millis() -> u64 {
    Utc::now().timestamp_millis().max(0) as u64
}

/// Local date and time, e.g. `Tue Mar 04 11:02:13 +01:00 2025`.
pub fn datetime() -> String {
    Local::now().format("%a %b %d %H:%M:%S %Z %Y").to_string()
}

/// Local date, e.g. `2025-03-04`.
pub fn date_string() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Long-form local date and time, e.g. `Tuesday, 04.March 2025, 11:02`.
pub fn time_string() -> String {
    Local::now().format("%A, %d.%B %Y, %H:%M").to_string()
}

/// Blocks the calling thread for `ms` milliseconds.
pub fn sleep_ms(ms: u64) {
    thread::sleep(Duration::from_millis(ms));
}
