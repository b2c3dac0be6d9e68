//! Stack backtrace capture
//!
//! Renders the current call stack as one symbol per line for crash and
//! assertion reports. Symbol resolution is best effort; unresolved
//! frames are kept with a placeholder so frame indices stay meaningful.
//!
//! Capture is only as thread-safe as the platform unwinder; callers that
//! capture from signal handlers must serialize externally.

use std::fmt::Write as _;

use backtrace::Backtrace;

/// Upper bound on captured frames.
const MAX_FRAMES: usize = 1024;

/// Captures the current stack, one `index: symbol - address` line per frame.
///
/// Returns the empty string if the platform yields no frames.
pub fn capture() -> String {
    let bt = Backtrace::new();
    let mut out = String::new();

    for (index, frame) in bt.frames().iter().take(MAX_FRAMES).enumerate() {
        let name = frame
            .symbols()
            .first()
            .and_then(|s| s.name())
            .map(|n| n.to_string())
            .unwrap_or_else(|| String::from("<unknown>"));
        let _ = writeln!(out, "{index}: {name} - {:p}", frame.ip());
    }

    out
}
