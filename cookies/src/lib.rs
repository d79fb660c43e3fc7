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

# cookie header parsing and serialization

A [`Cookie`] is one `Set-Cookie` header value: a name/value pair plus
its `Path`, `Domain`, `Expires`, `Max-Age`, `SameSite`, `Secure` and
`HttpOnly` attributes. [`parse`] reads one from the wire and the
`Display` implementation (or [`serialize`]) writes it back.

Values are kept verbatim. No percent-encoding is applied in either
direction.

## example
```
use crumb_cookies::{parse, serialize, Cookie, SameSite};

let cookie = Cookie::new("", "").with_path("/").with_secure(true);
assert_eq!(serialize(&cookie), "=; Path=/; Secure");
assert_eq!(parse(&serialize(&cookie)), cookie);

let cookie = parse("id=a3fWa; Max-Age=2592000; SameSite=strict; unknown-attribute");
assert_eq!(cookie.same_site(), Some(SameSite::Strict));
assert_eq!(cookie.to_string(), "id=a3fWa; Max-Age=2592000; SameSite=Strict");
```
*/

mod cookie;
pub use cookie::{serialize, Cookie};

mod error;
pub use error::{Error, Result};

mod parse;
pub use parse::{parse, parse_cookie_header};

mod same_site;
pub use same_site::SameSite;

pub use httpdate::HttpDate;
