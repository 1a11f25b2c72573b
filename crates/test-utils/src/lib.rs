pub mod builders;
#[cfg(unix)]
pub mod fake_backend;
pub mod recording;
