//! Fetcher trait definition.

use async_trait::async_trait;
use correios_wsdl_core::FetchError;
use url::Url;

/// A source of remote documents.
///
/// The refresher only needs "GET this URL, give me the body as text or tell
/// me why not", which keeps the transport swappable.
///
/// # Implementors
///
/// - `HttpFetcher` - Real HTTP(S) requests through `reqwest`
///
/// # Example
///
/// ```ignore
/// use correios_wsdl_refresh::Fetcher;
///
/// struct Canned;
///
/// #[async_trait]
/// impl Fetcher for Canned {
///     async fn fetch(&self, _url: &Url) -> Result<String, FetchError> {
///         Ok("<definitions/>".to_string())
///     }
///
///     fn name(&self) -> &str {
///         "canned"
///     }
/// }
/// ```
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Downloads the document at `url`.
    ///
    /// # Errors
    ///
    /// - `FetchError::Status` if the server answered with anything but 200
    /// - `FetchError::Transport` if no usable response was received
    async fn fetch(&self, url: &Url) -> Result<String, FetchError>;

    /// Returns the name of this fetcher, used for logging.
    fn name(&self) -> &str;
}
