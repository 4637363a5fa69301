// src/uri.rs

//! Low-level URI inspection helpers.
//!
//! URIs are treated as opaque strings throughout; every probe here works by
//! substring search rather than a parsed representation.

/// Characters allowed inside a scheme component.
///
/// RFC 2396 §3.1, simplified: the first character is not required to be a
/// letter.
fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-')
}

/// Extract the scheme of a URI, without the trailing `:`.
///
/// Returns `None` for relative references.
///
/// # Examples
/// ```
/// use relref::uri::scheme;
///
/// assert_eq!(scheme("http://example.com/"), Some("http"));
/// assert_eq!(scheme("help:control-center"), Some("help"));
/// assert_eq!(scheme("index.html#intro"), None);
/// ```
pub fn scheme(uri: &str) -> Option<&str> {
    // The scheme ends at the first character outside the scheme set; the
    // URI is absolute only when that character is ':' with at least one
    // scheme character before it.
    let end = uri.find(|c: char| !is_scheme_char(c))?;
    if end > 0 && uri[end..].starts_with(':') {
        Some(&uri[..end])
    } else {
        None
    }
}

/// Whether a URI reference is absolute (carries a scheme).
pub fn is_absolute(uri: &str) -> bool {
    scheme(uri).is_some()
}

/// Extract the host from a URI.
///
/// # Examples
/// ```
/// use relref::uri::host;
///
/// assert_eq!(host("https://Example.COM/path"), Some("example.com".to_string()));
/// assert_eq!(host("help:control-center"), None);
/// ```
pub fn host(uri: &str) -> Option<String> {
    let scheme_end = uri.find("://")?;
    let after_scheme = &uri[scheme_end + 3..];
    let authority = after_scheme.split('/').next()?;
    let host = authority.split(':').next()?;
    Some(host.to_lowercase())
}

/// Strip the fragment and query components from a URI.
///
/// The fragment is cut at the last `#`, then the query at the last `?` of
/// what remains.
pub fn strip_fragment_and_query(uri: &str) -> &str {
    let uri = match uri.rfind('#') {
        Some(idx) => &uri[..idx],
        None => uri,
    };
    match uri.rfind('?') {
        Some(idx) => &uri[..idx],
        None => uri,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_simple() {
        assert_eq!(scheme("http://a/b/c"), Some("http"));
        assert_eq!(scheme("mailto:user@example.com"), Some("mailto"));
        assert_eq!(scheme("help:control-center"), Some("help"));
    }

    #[test]
    fn test_scheme_exotic_characters() {
        // digits, '+', '.', '-' are all legal, in any position
        assert_eq!(scheme("svn+ssh://host/repo"), Some("svn+ssh"));
        assert_eq!(scheme("x-gnome-help:intro"), Some("x-gnome-help"));
        assert_eq!(scheme("1234:rest"), Some("1234"));
    }

    #[test]
    fn test_scheme_relative_references() {
        assert_eq!(scheme("g"), None);
        assert_eq!(scheme("../g"), None);
        assert_eq!(scheme("//g"), None);
        assert_eq!(scheme("#s"), None);
        assert_eq!(scheme("?y"), None);
        // the path stops the scan before any ':' is reached
        assert_eq!(scheme("index.html#intro"), None);
    }

    #[test]
    fn test_scheme_requires_at_least_one_character() {
        assert_eq!(scheme(":rest"), None);
        assert_eq!(scheme(""), None);
    }

    #[test]
    fn test_is_absolute() {
        assert!(is_absolute("http://a/b"));
        assert!(is_absolute("help:control-center"));
        assert!(!is_absolute("g;x?y#s"));
        assert!(!is_absolute("/g"));
    }

    #[test]
    fn test_host() {
        assert_eq!(host("http://a/b/c/d;p?q"), Some("a".to_string()));
        assert_eq!(
            host("https://Example.COM/path"),
            Some("example.com".to_string())
        );
        assert_eq!(
            host("https://example.com:8080/path"),
            Some("example.com".to_string())
        );
        assert_eq!(host("help:control-center"), None);
    }

    #[test]
    fn test_strip_fragment_and_query() {
        assert_eq!(
            strip_fragment_and_query("http://a/b/c/d;p?q"),
            "http://a/b/c/d;p"
        );
        assert_eq!(strip_fragment_and_query("http://a/b#frag"), "http://a/b");
        assert_eq!(strip_fragment_and_query("http://a/b?q#frag"), "http://a/b");
        assert_eq!(strip_fragment_and_query("http://a/b"), "http://a/b");
    }

    #[test]
    fn test_strip_fragment_then_query_order() {
        // a '?' inside the fragment is gone after the fragment cut
        assert_eq!(strip_fragment_and_query("http://a/b#x?y"), "http://a/b");
    }
}
