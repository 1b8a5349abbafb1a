// Infrastructure module: server bootstrap

pub mod server;

pub use server::{start_server, ServerConfig};
