pub mod http;
pub mod url;

pub use http::{BodyReader, FetchError, HttpFetcher};
pub use url::{UrlError, UrlParts};
