pub mod database;
pub mod metrics;

pub use database::ClientDb;
pub use metrics::{get_metrics, init_metrics};
