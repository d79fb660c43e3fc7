use crate::{CookieStore, Response};
use crumb_cookies::Cookie;

/**
Extension trait adding cookie capacities to a response carrier.

Only [`cookies`](CookiesExt::cookies) and
[`cookies_mut`](CookiesExt::cookies_mut) need to be implemented.
*/
pub trait CookiesExt {
    /// gets a reference to the cookie store
    fn cookies(&self) -> &CookieStore;

    /// gets a mutable reference to the cookie store
    fn cookies_mut(&mut self) -> &mut CookieStore;

    /// sets a cookie, replacing any earlier cookie with the same name
    fn set_cookie(&mut self, cookie: impl Into<Cookie>) {
        self.cookies_mut().set(cookie);
    }

    /// sets a cookie and returns self
    #[must_use]
    fn with_cookie(mut self, cookie: impl Into<Cookie>) -> Self
    where
        Self: Sized,
    {
        self.set_cookie(cookie);
        self
    }

    /// replaces the cookie called `name` with a
    /// [removal cookie](Cookie::removal), asking the client to discard it
    fn unset_cookie(&mut self, name: &str) {
        self.set_cookie(Cookie::removal(name));
    }
}

impl CookiesExt for Response {
    fn cookies(&self) -> &CookieStore {
        self.cookie_store()
    }

    fn cookies_mut(&mut self) -> &mut CookieStore {
        self.cookie_store_mut()
    }
}
