use crate::{RequestCookies, Response, Result};
use crumb_cookies::{parse_cookie_header, Cookie, Error as CookieError};
use http::{
    header::{COOKIE, SET_COOKIE},
    HeaderMap, HeaderValue,
};

/**
The cookie handler. It reads the `Cookie` request headers and, just
before a response is sent, writes one `Set-Cookie` header per stored
cookie.
*/
#[derive(Clone, Copy, Debug, Default)]
pub struct CookiesHandler {
    strict: bool,
}

impl CookiesHandler {
    /// constructs a new cookies handler
    pub fn new() -> Self {
        Self::default()
    }

    /**
    When strict, [`CookiesHandler::read_request`] fails on a `Cookie`
    header that is not visible ascii or that contains a pair without
    `=`. Otherwise (the default) such headers are skipped and such pairs
    are read with an empty value.
    */
    #[must_use]
    pub fn with_strict_parsing(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// collects the cookies sent with a request
    pub fn read_request(&self, headers: &HeaderMap) -> Result<RequestCookies> {
        let mut cookies = RequestCookies::new();

        for header in headers.get_all(COOKIE) {
            let line = match header.to_str() {
                Ok(line) => line,
                Err(e) if self.strict => return Err(e.into()),
                Err(_) => {
                    log::debug!("skipping non-ascii cookie header {header:?}");
                    continue;
                }
            };

            for (name, value) in parse_cookie_header(line) {
                match value {
                    Some(value) => cookies.insert(name, value),
                    None if self.strict => {
                        return Err(CookieError::MalformedCookieHeader(format!(
                            "expected name=value but found {name:?}"
                        ))
                        .into());
                    }
                    None => cookies.insert(name, ""),
                }
            }
        }

        Ok(cookies)
    }

    /// drains the response's cookie store into `Set-Cookie` headers
    pub fn before_send(&self, response: &mut Response) {
        let cookies = response.take_cookie_store();
        let headers = response.headers_mut();

        for cookie in cookies {
            match set_cookie_header_value(&cookie) {
                Ok(value) => {
                    headers.append(SET_COOKIE, value);
                }
                Err(e) => log::error!("skipping cookie {:?}: {e}", cookie.name()),
            }
        }
    }
}

/// serializes a cookie as a `Set-Cookie` header value
pub fn set_cookie_header_value(cookie: &Cookie) -> Result<HeaderValue> {
    Ok(HeaderValue::try_from(cookie.to_string())?)
}
