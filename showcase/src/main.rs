//! Plays a scripted visit to the testimonial spotlight without a browser.
//!
//! Usage: `showcase [SECONDS]`. Set `RUST_LOG` to change what is printed.

mod session;

use std::time::Duration;

use legiguard_components::{Instant, testimonial};
use tracing::info;

use session::Session;

const DEFAULT_SESSION_SECS: u64 = 20;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let seconds = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<u64>()?,
        None => DEFAULT_SESSION_SECS,
    };
    info!(
        seconds,
        spotlight = testimonial::spotlight().len(),
        wall = testimonial::wall().len(),
        "starting showcase"
    );

    let report = Session::scripted(Duration::from_secs(seconds)).run(Instant::now())?;
    info!(
        changes = report.changes.len(),
        final_index = report.final_index,
        frames = report.frames,
        "showcase finished"
    );
    Ok(())
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(
            "error,legiguard_components=debug,showcase=info",
        ) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}
