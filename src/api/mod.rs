pub mod fpl_client;
pub mod handlers;
pub mod models;
pub mod presenter;
pub mod routes;

pub use fpl_client::FplClient;
