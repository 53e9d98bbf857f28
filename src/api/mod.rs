pub mod client;
pub mod transport;

pub use client::{api_base_url, NslClient};
pub use transport::{HttpTransport, Transport};
