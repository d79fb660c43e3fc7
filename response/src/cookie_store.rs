use crumb_cookies::Cookie;
use std::collections::BTreeMap;

/**
The cookies that a response will set, keyed by name.

Setting a cookie whose name is already present replaces the previous
cookie entirely. No attributes carry over from the earlier write.
Iteration is in name order.
*/
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieStore {
    cookies: BTreeMap<String, Cookie>,
}

impl CookieStore {
    /// constructs an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// stores `cookie`, returning the cookie it replaced if one had the
    /// same name
    pub fn set(&mut self, cookie: impl Into<Cookie>) -> Option<Cookie> {
        let cookie = cookie.into();
        let previous = self.cookies.insert(cookie.name().to_owned(), cookie);
        if let Some(previous) = &previous {
            log::trace!("replacing cookie {:?}", previous.name());
        }
        previous
    }

    /// the current cookie for `name`
    pub fn get(&self, name: &str) -> Option<&Cookie> {
        self.cookies.get(name)
    }

    /// takes the cookie for `name` out of the store. Note that this
    /// only stops the cookie from being sent; to ask the client to
    /// discard it, use
    /// [`CookiesExt::unset_cookie`](crate::CookiesExt::unset_cookie)
    pub fn remove(&mut self, name: &str) -> Option<Cookie> {
        self.cookies.remove(name)
    }

    /// is there a cookie for `name`
    pub fn contains(&self, name: &str) -> bool {
        self.cookies.contains_key(name)
    }

    /// the number of distinct cookie names
    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    /// is the store empty
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    /// iterates over the stored cookies in name order
    pub fn iter(&self) -> impl Iterator<Item = &Cookie> {
        self.cookies.values()
    }
}

impl<'a> IntoIterator for &'a CookieStore {
    type Item = &'a Cookie;
    type IntoIter = std::collections::btree_map::Values<'a, String, Cookie>;

    fn into_iter(self) -> Self::IntoIter {
        self.cookies.values()
    }
}

impl IntoIterator for CookieStore {
    type Item = Cookie;
    type IntoIter = std::collections::btree_map::IntoValues<String, Cookie>;

    fn into_iter(self) -> Self::IntoIter {
        self.cookies.into_values()
    }
}

impl<C: Into<Cookie>> Extend<C> for CookieStore {
    fn extend<T: IntoIterator<Item = C>>(&mut self, iter: T) {
        for cookie in iter {
            self.set(cookie);
        }
    }
}

impl<C: Into<Cookie>> FromIterator<C> for CookieStore {
    fn from_iter<T: IntoIterator<Item = C>>(iter: T) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}
