pub mod config;
pub mod middleware;
pub mod server;
