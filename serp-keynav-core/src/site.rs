//! Location helpers
//!
//! Parsing of page locations: which hosts get result navigation, image search
//! detection, search URL construction and relative link resolution.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

static SEARCH_HOST: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(www|encrypted)\.google\.").ok());

/// Whether `location` is on a search host that navigation is installed for
pub fn is_search_host(location: &str) -> bool {
    let Ok(url) = Url::parse(location) else {
        return false;
    };
    match (url.host_str(), SEARCH_HOST.as_ref()) {
        (Some(host), Some(re)) => re.is_match(host),
        _ => false,
    }
}

/// Value of the query parameter `name`, with `+` decoded as space
pub fn query_param(location: &str, name: &str) -> Option<String> {
    let url = Url::parse(location).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// Image search pages (`tbm=isch`) get no result navigation
pub fn is_image_search(location: &str) -> bool {
    query_param(location, "tbm").as_deref() == Some("isch")
}

/// Build `<base>?q=<query>` for a search
pub fn search_url(base: &str, query: &str) -> Option<String> {
    let mut url = Url::parse(base).ok()?;
    url.query_pairs_mut().clear().append_pair("q", query);
    Some(url.into())
}

/// Resolve `href` against `location`; unparseable input is returned unchanged
pub fn resolve(location: &str, href: &str) -> String {
    Url::parse(location)
        .and_then(|base| base.join(href))
        .map_or_else(|_| href.to_string(), Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_search_hosts() {
        assert!(is_search_host("https://www.google.com/search?q=cats"));
        assert!(is_search_host("https://encrypted.google.co.uk/search?q=cats"));
        assert!(!is_search_host("https://maps.google.com/"));
        assert!(!is_search_host("https://x/search?q=cats"));
        assert!(!is_search_host("not a url"));
    }

    #[test]
    fn decodes_query_params() {
        let location = "https://www.google.com/search?q=rust+lang%21&tbm=nws";
        assert_eq!(query_param(location, "q").as_deref(), Some("rust lang!"));
        assert_eq!(query_param(location, "tbm").as_deref(), Some("nws"));
        assert_eq!(query_param(location, "start"), None);
    }

    #[test]
    fn detects_image_search() {
        assert!(is_image_search("https://www.google.com/search?q=cats&tbm=isch"));
        assert!(!is_image_search("https://www.google.com/search?q=cats&tbm=vid"));
        assert!(!is_image_search("https://x/search?q=cats"));
    }

    #[test]
    fn builds_search_url() {
        let url = search_url("https://www.google.com/search?old=1", "cats & dogs").unwrap();
        assert_eq!(url, "https://www.google.com/search?q=cats+%26+dogs");
        assert!(search_url("nope", "x").is_none());
    }

    #[test]
    fn resolves_relative_links() {
        let location = "https://www.google.com/search?q=cats";
        assert_eq!(
            resolve(location, "/search?q=cats&tbm=isch"),
            "https://www.google.com/search?q=cats&tbm=isch"
        );
        assert_eq!(resolve(location, "https://a.example/"), "https://a.example/");
        assert_eq!(resolve("bad", "/x"), "/x");
    }
}
