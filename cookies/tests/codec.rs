use crumb_cookies::{parse, serialize, Cookie, Error, SameSite};
use pretty_assertions::{assert_eq, assert_str_eq};
use std::time::{Duration, SystemTime};
use test_harness::test;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn parses_a_session_cookie() {
    let cookie = parse("st=oFqpYxbMObHvpEW!QLzedHwSZ1gZnotBs$; Path=/; HttpOnly");
    assert_eq!(cookie.name(), "st");
    assert_eq!(cookie.value(), "oFqpYxbMObHvpEW!QLzedHwSZ1gZnotBs$");
    assert_eq!(cookie.expires(), None);
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.domain(), None);
    assert!(!cookie.is_secure());
    assert!(cookie.is_http_only());

    assert_eq!(
        cookie,
        Cookie::new("st", "oFqpYxbMObHvpEW!QLzedHwSZ1gZnotBs$")
            .with_path("/")
            .with_http_only(true)
    );
}

#[test]
fn empty_name_and_value_round_trip() {
    let cookie = Cookie::new("", "").with_path("/").with_secure(true);
    assert_str_eq!(serialize(&cookie), "=; Path=/; Secure");
    assert_eq!(parse(&serialize(&cookie)), cookie);
}

#[test]
fn round_trips() {
    init_logger();
    let expires = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);

    let cookies = [
        Cookie::new("a", "b"),
        Cookie::new("a", ""),
        Cookie::new("", "value with spaces"),
        Cookie::new("theme", "dark").with_domain("example.com"),
        Cookie::new("x", "!$%&'()*+-./:<>?@[]^_`{|}~"),
        Cookie::new("id", "1")
            .with_path("/app")
            .with_domain("")
            .with_secure(true)
            .with_http_only(true),
        Cookie::new("id", "1").with_http_only(true),
        Cookie::new("a", "b")
            .with_path(" /x")
            .with_domain(" example.com"),
        Cookie::new("exp", "1").with_expires(expires),
        Cookie::new("age", "1").with_max_age(Duration::from_secs(60)),
        Cookie::new("site", "1").with_same_site(SameSite::None),
        Cookie::new("everything", "yes")
            .with_path("/")
            .with_domain("example.org")
            .with_expires(expires)
            .with_max_age(Duration::ZERO)
            .with_same_site(SameSite::Strict)
            .with_secure(true)
            .with_http_only(true),
    ];

    for cookie in cookies {
        let line = serialize(&cookie);
        assert_eq!(parse(&line), cookie, "{line}");
        assert_eq!(Cookie::parse_strict(&line), Ok(cookie));
    }
}

#[test]
fn attribute_order_is_fixed() {
    let cookie = Cookie::new("n", "v")
        .with_http_only(true)
        .with_secure(true)
        .with_same_site(SameSite::Lax)
        .with_max_age(Duration::from_secs(10))
        .with_expires(SystemTime::UNIX_EPOCH + Duration::from_secs(784111777))
        .with_domain("example.com")
        .with_path("/");

    assert_str_eq!(
        cookie.to_string(),
        "n=v; Path=/; Domain=example.com; Expires=Sun, 06 Nov 1994 08:49:37 GMT; \
         Max-Age=10; SameSite=Lax; Secure; HttpOnly"
    );
}

#[test]
fn expires_drops_subsecond_precision() {
    let expires = SystemTime::UNIX_EPOCH + Duration::from_millis(1_500);
    let cookie = Cookie::new("a", "b").with_expires(expires);
    assert_eq!(
        cookie.expires(),
        Some(SystemTime::UNIX_EPOCH + Duration::from_secs(1))
    );
    assert_eq!(parse(&cookie.to_string()), cookie);
}

#[test]
fn strict_parsing() {
    init_logger();
    assert_eq!(
        Cookie::parse_strict("novalue"),
        Err(Error::MalformedCookieHeader(String::from(
            "expected name=value but found \"novalue\""
        )))
    );
    assert!(Cookie::parse_strict("a=b; Expires=garbage").is_err());
    assert!(Cookie::parse_strict("a=b; Max-Age=1.5").is_err());
    assert_eq!(
        Cookie::parse_strict("a=b; Priority=High"),
        Ok(Cookie::new("a", "b"))
    );
}

#[test]
fn from_str_is_lenient() {
    init_logger();
    let cookie: Cookie = "a=b; Expires=garbage; Secure".parse().unwrap();
    assert_eq!(cookie, Cookie::new("a", "b").with_secure(true));
}

#[test]
fn removal_cookie() {
    let cookie = Cookie::removal("session");
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.expires(), Some(SystemTime::UNIX_EPOCH));
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    assert_eq!(parse(&cookie.to_string()), cookie);
}

#[test]
fn spaced_attribute_key_is_unrecognized() {
    init_logger();
    let cookie = parse("a=b; Path = /x");
    assert_eq!(cookie.path(), None);
    assert_eq!(cookie, Cookie::new("a", "b"));
}
