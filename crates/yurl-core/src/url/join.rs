//! Reference resolution (RFC 3986 section 5.2).
//!
//! Empty and undefined components are not distinguished, so a reference
//! such as `?` keeps the base query instead of clearing it. This matches
//! `urllib.parse.urljoin` and callers rely on it.

use std::ops::Add;

use super::{remove_dot_segments, Url, UrlParts};

impl Url {
    /// Resolves `reference` against `self` as the base URL.
    pub fn join(&self, reference: &Url) -> Url {
        let mut parts = reference.clone().into_parts();

        if parts.scheme.is_empty() {
            parts.scheme = self.scheme.clone();

            if !reference.has_authority() {
                parts.userinfo = self.userinfo.clone();
                parts.host = self.host.clone();
                parts.port = self.port.clone();

                if parts.path.is_empty() {
                    parts.path = self.path.clone();
                    if parts.query.is_empty() {
                        parts.query = self.query.clone();
                    }
                } else if !parts.path.starts_with('/') {
                    parts.path = merge_paths(&self.path, &parts.path);
                }
            }
        }

        parts.path = remove_dot_segments(&parts.path);
        Url::build(parts)
    }
}

/// Base path up to and including its last '/', followed by `reference`.
fn merge_paths(base: &str, reference: &str) -> String {
    let dir = base.rfind('/').map_or("", |idx| &base[..=idx]);
    let mut merged = String::with_capacity(dir.len() + reference.len());
    merged.push_str(dir);
    merged.push_str(reference);
    merged
}

impl Add<&Url> for &Url {
    type Output = Url;

    fn add(self, reference: &Url) -> Url {
        self.join(reference)
    }
}

impl Add<&Url> for Url {
    type Output = Url;

    fn add(self, reference: &Url) -> Url {
        self.join(reference)
    }
}

impl Add for Url {
    type Output = Url;

    fn add(self, reference: Url) -> Url {
        self.join(&reference)
    }
}

impl Add<UrlParts> for &Url {
    type Output = Url;

    fn add(self, reference: UrlParts) -> Url {
        self.join(&Url::build(reference))
    }
}
