pub mod client;

pub use client::ProviderHttpClient;
