use crate::{Cookie, Error, Result};
use httpdate::HttpDate;
use std::{convert::Infallible, str::FromStr, time::Duration};

/**
Parses a `Set-Cookie` header value.

This never fails. Unrecognized attributes are ignored, as are
recognized attributes whose value cannot be interpreted (for example an
`Expires` that is not an http date). A line without `=` in its
name/value pair is read as a cookie with that name and an empty value.
Use [`Cookie::parse_strict`] to reject malformed input instead.

```
use crumb_cookies::parse;
let cookie = parse("st=oFqpYxbMObHvpEW!QLzedHwSZ1gZnotBs$; Path=/; HttpOnly");
assert_eq!(cookie.name(), "st");
assert_eq!(cookie.value(), "oFqpYxbMObHvpEW!QLzedHwSZ1gZnotBs$");
assert_eq!(cookie.path(), Some("/"));
assert!(cookie.is_http_only());
assert!(!cookie.is_secure());
```
*/
pub fn parse(line: &str) -> Cookie {
    let lenient = parse_with(line, |error| {
        log::debug!("lenient cookie parse: {error}");
        Ok::<(), Infallible>(())
    });

    match lenient {
        Ok(cookie) => cookie,
        Err(never) => match never {},
    }
}

impl Cookie {
    /**
    Parses a `Set-Cookie` header value, returning
    [`Error::MalformedCookieHeader`] if the name/value pair has no `=`
    or if a recognized attribute has a value that cannot be
    interpreted. Unrecognized attributes are still ignored.
    */
    pub fn parse_strict(line: &str) -> Result<Self> {
        parse_with(line, Err)
    }
}

impl FromStr for Cookie {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(parse(s))
    }
}

fn parse_with<E>(
    line: &str,
    mut on_error: impl FnMut(Error) -> std::result::Result<(), E>,
) -> std::result::Result<Cookie, E> {
    let (pair, attributes) = line.split_once(';').unwrap_or((line, ""));

    let mut cookie = match pair.split_once('=') {
        Some((name, value)) => Cookie::new(name, value),
        None => {
            on_error(Error::MalformedCookieHeader(format!(
                "expected name=value but found {pair:?}"
            )))?;
            Cookie::new(pair, "")
        }
    };

    for attribute in attributes.split(';').map(str::trim) {
        if let Err(error) = apply_attribute(&mut cookie, attribute) {
            on_error(error)?;
        }
    }

    Ok(cookie)
}

fn apply_attribute(cookie: &mut Cookie, attribute: &str) -> Result<()> {
    // the segment is already trimmed; key and value are taken as they are
    let (key, value) = match attribute.split_once('=') {
        Some((key, value)) => (key, Some(value)),
        None => (attribute, None),
    };

    match (key.to_ascii_lowercase().as_str(), value) {
        ("secure", None) => cookie.set_secure(),
        ("httponly", None) => cookie.set_http_only(),
        ("path", Some(path)) => cookie.set_path(path),
        ("domain", Some(domain)) => cookie.set_domain(domain),
        ("expires", Some(expires)) => cookie.set_expires(parse_expires(expires)?),
        ("max-age", Some(max_age)) => cookie.set_max_age(parse_max_age(max_age)?),
        ("samesite", Some(same_site)) => cookie.set_same_site(same_site.parse()?),
        ("", None) => {}
        _ => log::trace!("ignoring unrecognized cookie attribute {attribute:?}"),
    }

    Ok(())
}

// accepts IMF-fixdate, rfc 850 and asctime
fn parse_expires(expires: &str) -> Result<HttpDate> {
    expires
        .parse()
        .map_err(|_| Error::MalformedCookieHeader(format!("invalid Expires {expires:?}")))
}

// a zero or negative max-age both mean "expire immediately"
fn parse_max_age(max_age: &str) -> Result<Duration> {
    let seconds: i64 = max_age
        .parse()
        .map_err(|_| Error::MalformedCookieHeader(format!("invalid Max-Age {max_age:?}")))?;
    Ok(Duration::from_secs(seconds.max(0).unsigned_abs()))
}

/**
Splits a request `Cookie` header (`a=1; b=2`) into name/value pairs.

Each pair is trimmed and empty segments are skipped. A segment without
`=` is yielded with a `None` value so the caller can decide whether to
accept it.

```
use crumb_cookies::parse_cookie_header;
let pairs: Vec<_> = parse_cookie_header("a=1; b=2;; flag").collect();
assert_eq!(pairs, [("a", Some("1")), ("b", Some("2")), ("flag", None)]);
```
*/
pub fn parse_cookie_header(line: &str) -> impl Iterator<Item = (&str, Option<&str>)> {
    line.split(';')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (pair, None),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SameSite;
    use std::time::SystemTime;

    #[test]
    fn attribute_keys_are_case_insensitive() {
        let cookie = parse("a=b; path=/x; DOMAIN=example.com; secure; HTTPONLY; samesite=lax");
        assert_eq!(cookie.path(), Some("/x"));
        assert_eq!(cookie.domain(), Some("example.com"));
        assert!(cookie.is_secure());
        assert!(cookie.is_http_only());
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }

    #[test]
    fn unknown_and_empty_attributes_are_ignored() {
        let cookie = parse("a=b;; Priority=High; Partitioned; Path=/");
        assert_eq!(cookie, Cookie::new("a", "b").with_path("/"));
    }

    #[test]
    fn last_duplicate_attribute_wins() {
        let cookie = parse("a=b; Path=/one; Path=/two");
        assert_eq!(cookie.path(), Some("/two"));
    }

    #[test]
    fn value_may_contain_equals() {
        let cookie = parse("token=abc==; Secure");
        assert_eq!(cookie.name(), "token");
        assert_eq!(cookie.value(), "abc==");
        assert!(cookie.is_secure());
    }

    #[test]
    fn missing_equals_is_a_name_with_empty_value() {
        let cookie = parse("lonely; HttpOnly");
        assert_eq!(cookie.name(), "lonely");
        assert_eq!(cookie.value(), "");
        assert!(cookie.is_http_only());
        assert!(Cookie::parse_strict("lonely; HttpOnly").is_err());
    }

    #[test]
    fn uninterpretable_attribute_values() {
        let line = "a=b; Expires=whenever; Max-Age=soon; SameSite=maybe; Path=/";
        assert_eq!(parse(line), Cookie::new("a", "b").with_path("/"));
        assert!(matches!(
            Cookie::parse_strict(line),
            Err(Error::MalformedCookieHeader(_))
        ));
    }

    #[test]
    fn expires_formats() {
        let expected = SystemTime::UNIX_EPOCH + Duration::from_secs(784111777);
        for line in [
            "a=b; Expires=Sun, 06 Nov 1994 08:49:37 GMT",
            "a=b; Expires=Sunday, 06-Nov-94 08:49:37 GMT",
            "a=b; Expires=Sun Nov  6 08:49:37 1994",
        ] {
            assert_eq!(parse(line).expires(), Some(expected), "{line}");
        }
    }

    #[test]
    fn negative_max_age_is_zero() {
        assert_eq!(parse("a=b; Max-Age=-1").max_age(), Some(Duration::ZERO));
        assert_eq!(
            parse("a=b; Max-Age=3600").max_age(),
            Some(Duration::from_secs(3600))
        );
    }

    #[test]
    fn whitespace_around_equals_is_not_trimmed() {
        let cookie = parse("a=b; Path = /x; Domain= example.com");
        assert_eq!(cookie.path(), None);
        assert_eq!(cookie.domain(), Some(" example.com"));
    }

    #[test]
    fn flags_with_values_are_not_flags() {
        let cookie = parse("a=b; Secure=yes; HttpOnly=1");
        assert!(!cookie.is_secure());
        assert!(!cookie.is_http_only());
    }
}
