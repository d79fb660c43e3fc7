use std::collections::{hash_map, HashMap};

/// The name/value pairs a client sent in its `Cookie` request headers.
/// When a name repeats, the last pair wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestCookies {
    pairs: HashMap<String, String>,
}

impl RequestCookies {
    /// constructs an empty set of request cookies
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: &str, value: &str) {
        self.pairs.insert(name.to_owned(), value.to_owned());
    }

    /// the value sent for `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs.get(name).map(String::as_str)
    }

    /// was a cookie called `name` sent
    pub fn contains(&self, name: &str) -> bool {
        self.pairs.contains_key(name)
    }

    /// the number of distinct names
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// were no cookies sent
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// iterates over name/value pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl IntoIterator for RequestCookies {
    type Item = (String, String);
    type IntoIter = hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}
