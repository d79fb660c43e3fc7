use crumb_response::{cookies::Cookie, CookiesExt, CookiesHandler, Response};
use http::{header::COOKIE, HeaderMap, HeaderValue};

pub fn main() {
    env_logger::init();

    let handler = CookiesHandler::new();

    let mut request_headers = HeaderMap::new();
    request_headers.insert(COOKIE, HeaderValue::from_static("some_cookie=trillium"));

    match handler.read_request(&request_headers) {
        Ok(cookies) => {
            if let Some(cookie_value) = cookies.get("some_cookie") {
                println!("current cookie value: {cookie_value}");
            }
        }
        Err(e) => eprintln!("could not read request cookies: {e}"),
    }

    let response = Response::new()
        .with_cookie(("some_cookie", "some-cookie-value"))
        .with_cookie(Cookie::new("theme", "dark").with_path("/"))
        .finish(&handler);

    for (name, value) in response.headers() {
        println!("{name}: {value:?}");
    }
}
