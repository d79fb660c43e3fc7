use crate::SameSite;
use httpdate::HttpDate;
use std::{
    fmt::{self, Display, Formatter},
    time::{Duration, SystemTime},
};

/**
A single http cookie: the name/value pair plus the attributes that
travel with it in a `Set-Cookie` header.

The `Display` implementation is the wire format. Attributes are always
written in the same order: `Path`, `Domain`, `Expires`, `Max-Age`,
`SameSite`, `Secure`, `HttpOnly`.

```
use crumb_cookies::Cookie;
let cookie = Cookie::new("session", "abc123")
    .with_path("/")
    .with_http_only(true);
assert_eq!(cookie.to_string(), "session=abc123; Path=/; HttpOnly");
```
*/
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cookie {
    name: String,
    value: String,
    expires: Option<HttpDate>,
    max_age: Option<Duration>,
    path: Option<String>,
    domain: Option<String>,
    same_site: Option<SameSite>,
    secure: bool,
    http_only: bool,
}

impl Cookie {
    /// constructs a session cookie with no attributes
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    /// the cookie name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// the cookie value, exactly as it appeared on the wire
    pub fn value(&self) -> &str {
        &self.value
    }

    /// the `Expires` attribute. `None` is a session cookie
    pub fn expires(&self) -> Option<SystemTime> {
        self.expires.map(SystemTime::from)
    }

    /// the `Expires` attribute as an http date
    pub fn expires_http_date(&self) -> Option<HttpDate> {
        self.expires
    }

    /// the `Max-Age` attribute, in whole seconds
    pub fn max_age(&self) -> Option<Duration> {
        self.max_age
    }

    /// the `Path` attribute
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// the `Domain` attribute
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    /// the `SameSite` attribute
    pub fn same_site(&self) -> Option<SameSite> {
        self.same_site
    }

    /// is the `Secure` flag set
    pub fn is_secure(&self) -> bool {
        self.secure
    }

    /// is the `HttpOnly` flag set
    pub fn is_http_only(&self) -> bool {
        self.http_only
    }

    /// chainable setter for the value
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /**
    chainable setter for `Expires`. Http dates have a resolution of one
    second, so any fractional part of a [`SystemTime`] is dropped.
    */
    #[must_use]
    pub fn with_expires(mut self, expires: impl Into<HttpDate>) -> Self {
        self.expires = Some(expires.into());
        self
    }

    /// chainable setter for `Max-Age`. Fractional seconds are dropped
    /// when serialized.
    #[must_use]
    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = Some(Duration::from_secs(max_age.as_secs()));
        self
    }

    /// chainable setter for `Path`
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// chainable setter for `Domain`
    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// chainable setter for `SameSite`
    #[must_use]
    pub fn with_same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = Some(same_site);
        self
    }

    /// chainable setter for the `Secure` flag
    #[must_use]
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// chainable setter for the `HttpOnly` flag
    #[must_use]
    pub fn with_http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }

    /**
    Builds a cookie that instructs the client to discard any cookie
    called `name`: an empty value, `Path=/`, `Expires` at the unix
    epoch and `Max-Age=0`.

    ```
    use crumb_cookies::Cookie;
    assert_eq!(
        Cookie::removal("session").to_string(),
        "session=; Path=/; Expires=Thu, 01 Jan 1970 00:00:00 GMT; Max-Age=0"
    );
    ```
    */
    pub fn removal(name: impl Into<String>) -> Self {
        Self::new(name, "")
            .with_path("/")
            .with_expires(SystemTime::UNIX_EPOCH)
            .with_max_age(Duration::ZERO)
    }

    pub(crate) fn set_expires(&mut self, expires: HttpDate) {
        self.expires = Some(expires);
    }

    pub(crate) fn set_max_age(&mut self, max_age: Duration) {
        self.max_age = Some(max_age);
    }

    pub(crate) fn set_path(&mut self, path: &str) {
        self.path = Some(path.into());
    }

    pub(crate) fn set_domain(&mut self, domain: &str) {
        self.domain = Some(domain.into());
    }

    pub(crate) fn set_same_site(&mut self, same_site: SameSite) {
        self.same_site = Some(same_site);
    }

    pub(crate) fn set_secure(&mut self) {
        self.secure = true;
    }

    pub(crate) fn set_http_only(&mut self) {
        self.http_only = true;
    }
}

impl Display for Cookie {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)?;

        if let Some(path) = &self.path {
            write!(f, "; Path={path}")?;
        }

        if let Some(domain) = &self.domain {
            write!(f, "; Domain={domain}")?;
        }

        if let Some(expires) = &self.expires {
            write!(f, "; Expires={expires}")?;
        }

        if let Some(max_age) = &self.max_age {
            write!(f, "; Max-Age={}", max_age.as_secs())?;
        }

        if let Some(same_site) = &self.same_site {
            write!(f, "; SameSite={same_site}")?;
        }

        if self.secure {
            f.write_str("; Secure")?;
        }

        if self.http_only {
            f.write_str("; HttpOnly")?;
        }

        Ok(())
    }
}

impl<N, V> From<(N, V)> for Cookie
where
    N: Into<String>,
    V: Into<String>,
{
    fn from((name, value): (N, V)) -> Self {
        Self::new(name, value)
    }
}

/// serializes a cookie into a `Set-Cookie` header value. Alias for
/// `cookie.to_string()`
pub fn serialize(cookie: &Cookie) -> String {
    cookie.to_string()
}
