pub mod structs;

pub use structs::BootstrapCache;
