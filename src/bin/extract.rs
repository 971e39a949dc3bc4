// Reads an HTML document on stdin and prints one JSON line:
//   {"ok":true,"text":"..."} or {"ok":false,"error":"..."}
// The exit status is 0 in every case; callers branch on `ok`.

use std::io::{self, Write};

fn main() {
    #[cfg(feature = "tracing")]
    init_tracing();

    let outcome = html_main_text::adapter::run_stdin();

    let mut out = io::stdout().lock();
    // With stdout gone there is no channel left to report on.
    let _ = outcome.emit(&mut out).and_then(|()| out.flush());
}

/// Diagnostics go to stderr so stdout stays a single JSON line.
#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
