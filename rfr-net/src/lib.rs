// rfr-net/src/lib.rs
pub mod http;
pub mod pypi;

pub use http::{build_http_client, validate_url};
pub use pypi::PypiClient;
