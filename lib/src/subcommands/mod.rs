pub use client::*;
pub use server::*;

pub mod client;
pub mod server;
