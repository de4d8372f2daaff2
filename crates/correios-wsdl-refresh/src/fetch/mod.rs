//! Document fetching.

mod http;
mod traits;

pub use http::{HttpFetcher, USER_AGENT};
pub use traits::Fetcher;
