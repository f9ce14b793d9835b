pub mod clients;
pub mod health;

pub use clients::{create_client, delete_client, get_client, list_clients};
pub use health::{health_check, metrics_endpoint, readiness_check, root};
