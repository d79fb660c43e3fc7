use thiserror::Error;

/// Concrete errors that occur while reading or emitting cookie headers
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// [`crumb_cookies::Error`]
    #[error(transparent)]
    Cookie(#[from] crumb_cookies::Error),

    /// a request `Cookie` header was not visible ascii
    #[error(transparent)]
    HeaderToStr(#[from] http::header::ToStrError),

    /// a serialized cookie could not be used as a `Set-Cookie` header
    /// value
    #[error(transparent)]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),
}

/// this crate's result type
pub type Result<T> = std::result::Result<T, Error>;
