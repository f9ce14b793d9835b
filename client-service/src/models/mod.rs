pub mod client;

pub use client::{parse_client_id, Client};
