use thiserror::Error;

/// Concrete errors that occur while parsing cookies
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// the cookie line could not be interpreted. lenient parsing never
    /// returns this, it is only surfaced by
    /// [`Cookie::parse_strict`](crate::Cookie::parse_strict)
    #[error("malformed cookie header: {0}")]
    MalformedCookieHeader(String),
}

/// this crate's result type
pub type Result<T> = std::result::Result<T, Error>;
