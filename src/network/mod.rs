pub mod backend;
pub mod client;
pub mod poller;
pub mod transport;

#[cfg(test)]
pub mod testing;

pub use client::ChatClient;
pub use transport::HttpTransport;
