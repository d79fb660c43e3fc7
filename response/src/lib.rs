#![forbid(unsafe_code)]
#![warn(
    missing_copy_implementations,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    unused_qualifications
)]

/*!

# response cookies

A [`Response`] under construction holds a [`CookieStore`]. Setting a
cookie through [`CookiesExt`] replaces any earlier cookie with the same
name, and the [`CookiesHandler`] turns whatever is left in the store
into `Set-Cookie` headers when the response is finished.

## example
```
use crumb_response::{cookies::Cookie, CookiesExt, CookiesHandler, Response};
use http::{header::COOKIE, HeaderMap, HeaderValue};

let handler = CookiesHandler::new();

let mut request_headers = HeaderMap::new();
request_headers.insert(COOKIE, HeaderValue::from_static("some_cookie=trillium"));
let request_cookies = handler.read_request(&request_headers).unwrap();
assert_eq!(request_cookies.get("some_cookie"), Some("trillium"));

let response = Response::new()
    .with_cookie(("some_cookie", "first"))
    .with_cookie(Cookie::new("some_cookie", "some-cookie-value").with_path("/"))
    .finish(&handler);

let set_cookie: Vec<_> = response.headers().get_all("set-cookie").iter().collect();
assert_eq!(set_cookie, ["some_cookie=some-cookie-value; Path=/"]);
```
*/

mod cookie_store;
pub use cookie_store::CookieStore;

mod cookies_ext;
pub use cookies_ext::CookiesExt;

mod cookies_handler;
pub use cookies_handler::{set_cookie_header_value, CookiesHandler};

mod error;
pub use error::{Error, Result};

mod request_cookies;
pub use request_cookies::RequestCookies;

mod response;
pub use response::Response;

pub use crumb_cookies as cookies;
