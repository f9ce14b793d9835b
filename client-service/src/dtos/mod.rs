pub mod clients;

pub use clients::{ClientResponse, CreateClientRequest};
