mod common;
mod health;
mod metrics;
