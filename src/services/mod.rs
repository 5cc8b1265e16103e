pub mod candidates;
pub mod recommendation;
pub mod server;
