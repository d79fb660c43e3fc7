use crate::{CookieStore, CookiesHandler};
use http::{HeaderMap, StatusCode};

/**
A response under construction.

This carries only what cookie handling needs: a status, the response
headers and the [`CookieStore`]. Cookies are kept in the store until
[`Response::finish`] writes them out as `Set-Cookie` headers.
*/
#[derive(Debug, Clone, Default)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    cookies: CookieStore,
}

impl Response {
    /// a `200 OK` response with no headers and no cookies
    pub fn new() -> Self {
        Self::default()
    }

    /// the response status
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// chainable setter for the status
    #[must_use]
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// the response headers. `Set-Cookie` headers only appear here
    /// after [`Response::finish`]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// mutable access to the response headers
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    pub(crate) fn cookie_store(&self) -> &CookieStore {
        &self.cookies
    }

    pub(crate) fn cookie_store_mut(&mut self) -> &mut CookieStore {
        &mut self.cookies
    }

    pub(crate) fn take_cookie_store(&mut self) -> CookieStore {
        std::mem::take(&mut self.cookies)
    }

    /// runs [`CookiesHandler::before_send`] and returns the finished
    /// response
    pub fn finish(mut self, handler: &CookiesHandler) -> Self {
        handler.before_send(&mut self);
        self
    }
}
