//! Syntactic split of a URL string into its seven raw components.
//!
//! This is not a validator: every input, including the empty string, splits
//! into some set of components. Grammar checks live in `validate`.

/// Borrowed, not yet canonicalized components of a URL string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct RawParts<'a> {
    pub scheme: &'a str,
    pub userinfo: &'a str,
    pub host: &'a str,
    pub port: &'a str,
    pub path: &'a str,
    pub query: &'a str,
    pub fragment: &'a str,
}

/// Splits `input` following the generic syntax of RFC 3986 Appendix B:
///
/// `[scheme ":"] ["//" [userinfo "@"] host [":" port]] path ["?" query] ["#" fragment]`
///
/// Delimiters are consumed and never appear in the returned components.
pub(crate) fn split(input: &str) -> RawParts<'_> {
    let mut parts = RawParts::default();
    let mut rest = input;

    // Scheme is everything before a ':' that comes ahead of any of "/?#".
    if let Some(idx) = rest.find([':', '/', '?', '#']) {
        if idx > 0 && rest.as_bytes()[idx] == b':' {
            parts.scheme = &rest[..idx];
            rest = &rest[idx + 1..];
        }
    }

    if let Some(after) = rest.strip_prefix("//") {
        let end = after.find(['/', '?', '#']).unwrap_or(after.len());
        let authority = &after[..end];
        rest = &after[end..];

        let host_port = match authority.find('@') {
            Some(at) => {
                parts.userinfo = &authority[..at];
                &authority[at + 1..]
            }
            None => authority,
        };
        let (host, port) = split_port(host_port);
        parts.host = host;
        parts.port = port;
    }

    let path_end = rest.find(['?', '#']).unwrap_or(rest.len());
    parts.path = &rest[..path_end];
    rest = &rest[path_end..];

    if let Some(after) = rest.strip_prefix('?') {
        let query_end = after.find('#').unwrap_or(after.len());
        parts.query = &after[..query_end];
        rest = &after[query_end..];
    }

    if let Some(after) = rest.strip_prefix('#') {
        parts.fragment = after;
    }

    parts
}

/// Second pass over the `host[:port]` candidate.
///
/// A host may itself contain ':' (IP literals), so the port is only split
/// off at the rightmost ':' when everything after it is digits. An empty
/// suffix also splits: the colon is dropped and the port stays empty.
pub(crate) fn split_port(candidate: &str) -> (&str, &str) {
    match candidate.rfind(':') {
        Some(idx) => {
            let port = &candidate[idx + 1..];
            if port.bytes().all(|b| b.is_ascii_digit()) {
                (&candidate[..idx], port)
            } else {
                (candidate, "")
            }
        }
        None => (candidate, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(input: &str) -> [&str; 7] {
        let p = split(input);
        [
            p.scheme, p.userinfo, p.host, p.port, p.path, p.query, p.fragment,
        ]
    }

    #[test]
    fn empty_input_splits_to_nothing() {
        assert_eq!(parts(""), [""; 7]);
    }

    #[test]
    fn full_url() {
        assert_eq!(
            parts("https://user:pw@Host:8080/p/a?q=1#frag"),
            ["https", "user:pw", "Host", "8080", "/p/a", "q=1", "frag"]
        );
    }

    #[test]
    fn scheme_requires_colon_before_delimiters() {
        assert_eq!(parts("a/b:c")[0], "");
        assert_eq!(parts("a/b:c")[4], "a/b:c");
        assert_eq!(parts(":x")[0], "");
        assert_eq!(parts(":x")[4], ":x");
        assert_eq!(
            parts("mailto:joe@example.com")[..5],
            ["mailto", "", "", "", "joe@example.com"]
        );
    }

    #[test]
    fn authority_without_scheme() {
        assert_eq!(parts("//g"), ["", "", "g", "", "", "", ""]);
        assert_eq!(parts("//"), [""; 7]);
    }

    #[test]
    fn userinfo_stops_at_first_at_sign() {
        assert_eq!(parts("//a@b@c/")[1..5], ["a", "b@c", "", "/"]);
    }

    #[test]
    fn ipv6_literal_with_port() {
        assert_eq!(
            parts("http://user:pass@[::1]:80/")[..5],
            ["http", "user:pass", "[::1]", "80", "/"]
        );
        assert_eq!(parts("http://[::1]/")[2..4], ["[::1]", ""]);
    }

    #[test]
    fn non_digit_port_stays_in_host() {
        assert_eq!(parts("//a:b")[2..4], ["a:b", ""]);
        assert_eq!(parts("//host:80x")[2..4], ["host:80x", ""]);
    }

    #[test]
    fn empty_port_drops_colon() {
        assert_eq!(parts("//host:/p")[2..5], ["host", "", "/p"]);
        assert_eq!(parts("//a:80:")[2..4], ["a:80", ""]);
    }

    #[test]
    fn query_and_fragment_delimiters() {
        assert_eq!(parts("?")[4..], ["", "", ""]);
        assert_eq!(parts("#a?b#c")[4..], ["", "", "a?b#c"]);
        assert_eq!(parts("p?a?b#c")[4..], ["p", "a?b", "c"]);
    }

    #[test]
    fn split_port_rightmost_colon() {
        assert_eq!(split_port("example.com:8080"), ("example.com", "8080"));
        assert_eq!(split_port("example.com"), ("example.com", ""));
        assert_eq!(split_port("[v1.fe:80]"), ("[v1.fe:80]", ""));
    }
}
