//! Background jobs run by `tokio-cron-scheduler`.

pub mod verification_cleanup;
