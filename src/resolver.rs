// src/resolver.rs

//! Relative URI reference resolution.
//!
//! Implements the RFC 2396 §5.2 subset that legacy document viewers used
//! for link following. Callers depend on byte-exact output, so the quirks
//! of that lineage are kept on purpose rather than upgraded to RFC 3986:
//!
//! - a fragment-only reference (`#s`) is appended to the base with its
//!   final path segment intact;
//! - leading `..` segments that cannot be consumed against the base are
//!   emitted literally;
//! - no validation is performed: malformed input degrades to best-effort
//!   concatenation and the functions never fail.
//!
//! Everything works on opaque strings via substring search; inputs are
//! never mutated and the result is always freshly allocated.

use crate::uri;

/// Resolve a possibly-relative URI reference against a base URI.
///
/// An absolute `reference` (one carrying a scheme) is returned verbatim
/// regardless of the base. With no base to resolve against, the reference
/// is likewise returned unchanged.
///
/// # Examples
/// ```
/// use relref::resolver::resolve;
///
/// assert_eq!(
///     resolve(Some("http://a/b/c/d;p?q"), "../g"),
///     "http://a/b/g"
/// );
/// assert_eq!(
///     resolve(Some("http://a/b/c/d;p?q"), "ftp://other/x"),
///     "ftp://other/x"
/// );
/// assert_eq!(resolve(None, "g"), "g");
/// ```
pub fn resolve(base_uri: Option<&str>, reference: &str) -> String {
    if uri::is_absolute(reference) {
        return reference.to_string();
    }

    let Some(base) = base_uri else {
        return reference.to_string();
    };

    // The base contributes neither its query nor its fragment.
    let base = uri::strip_fragment_and_query(base);

    if let Some(rest) = reference.strip_prefix("//") {
        resolve_network_path(base, rest)
    } else if reference.starts_with('/') {
        resolve_absolute_path(base, reference)
    } else if reference.starts_with('#') {
        // Fragment-only reference: the base keeps its final path segment.
        format!("{base}{reference}")
    } else {
        resolve_relative_path(base, reference)
    }
}

/// Network-path reference (`//authority/...`): only the scheme survives
/// from the base.
fn resolve_network_path(base: &str, rest: &str) -> String {
    match base.find(':') {
        Some(idx) => format!("{}//{}", &base[..=idx], rest),
        None => format!("{base}//{rest}"),
    }
}

/// Absolute-path reference (`/...`): the base is truncated at the end of
/// its authority component.
fn resolve_absolute_path(base: &str, reference: &str) -> String {
    let root = match base.find(':') {
        Some(idx) if base[idx + 1..].starts_with("//") => {
            let authority = idx + 3;
            match base[authority..].find('/') {
                Some(slash) => &base[..authority + slash],
                // authority with no path, e.g. "http://a"
                None => base,
            }
        }
        Some(idx) => &base[..=idx],
        None => base,
    };
    format!("{root}{reference}")
}

/// Relative-path reference: resolved against the base's directory after
/// dot-segment normalization.
fn resolve_relative_path(base: &str, reference: &str) -> String {
    // Directory of the base: everything before the last '/'. A base with
    // no '/' at all (e.g. "help:control-center") is used whole.
    let mut dir = match base.rfind('/') {
        Some(idx) => base[..idx].to_string(),
        None => base.to_string(),
    };

    let normalized = normalize_dot_segments(reference);
    let mut rest = normalized.as_str();

    // Each leading "../" climbs one directory segment. When the directory
    // cannot climb any further, the remaining ".." segments stay in the
    // reference and end up in the output literally.
    while let Some(tail) = rest.strip_prefix("../") {
        let Some(idx) = dir.rfind('/') else {
            break;
        };
        dir.truncate(idx);
        rest = tail;
    }

    // A residual ".." consumes one further segment and leaves nothing.
    if rest == ".." {
        if let Some(idx) = dir.rfind('/') {
            dir.truncate(idx);
        }
        rest = "";
    }

    format!("{dir}/{rest}")
}

/// Collapse `.` and interior `..` segments of a relative path.
///
/// Leading runs of `..` are preserved untouched so the caller can consume
/// them against the base directory one at a time.
fn normalize_dot_segments(reference: &str) -> String {
    let mut segments: Vec<&str> = reference.split('/').collect();

    // A final "." keeps its slot so the rejoined path stays '/'-terminated.
    if segments.last() == Some(&".") {
        let last = segments.len() - 1;
        segments[last] = "";
    }
    segments.retain(|segment| *segment != ".");

    let mut stack: Vec<&str> = Vec::with_capacity(segments.len());
    for segment in segments {
        let collapsible = segment == ".."
            && matches!(stack.last(), Some(&top) if top != "..");
        if collapsible {
            stack.pop();
        } else {
            stack.push(segment);
        }
    }

    stack.join("/")
}
