#![allow(dead_code)]

use std::error::Error;
use std::future::Future;
use std::sync::Once;

use tokio::time::{timeout, Duration};
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// Fail the test instead of hanging if a spawned process never exits.
pub async fn with_timeout<F>(fut: F) -> Result<(), Box<dyn Error>>
where
    F: Future<Output = Result<(), Box<dyn Error>>>,
{
    match timeout(Duration::from_secs(30), fut).await {
        Ok(res) => res,
        Err(_) => Err("test timed out after 30s".into()),
    }
}
