//! Immutable URL value split into the seven RFC 3986 components.
//!
//! A [`Url`] is produced either by splitting a string ([`Url::parse`]) or
//! from explicit components ([`Url::build`]). Both paths lowercase the
//! scheme and host; only the explicit path adds a leading '/' to a relative
//! path when an authority is present. Absent components are empty strings.
//! Nothing here decodes percent escapes or applies scheme-specific rules.

mod combinators;
mod dot_segments;
mod join;
mod split;
mod validate;

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use combinators::{Replace, ReplaceError};
pub use dot_segments::remove_dot_segments;
pub use validate::ValidationError;

/// The seven components of a URL as plain strings, used as input to
/// [`Url::build`] and as the serde representation of [`Url`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlParts {
    pub scheme: String,
    pub userinfo: String,
    pub host: String,
    pub port: String,
    pub path: String,
    pub query: String,
    pub fragment: String,
}

/// Canonicalized, immutable URL.
///
/// Equality, ordering and hashing are structural over the components in
/// the order scheme, userinfo, host, port, path, query, fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "UrlParts", into = "UrlParts")]
pub struct Url {
    scheme: String,
    userinfo: String,
    host: String,
    port: String,
    path: String,
    query: String,
    fragment: String,
}

impl Url {
    /// Splits `input` into components. Never fails.
    pub fn parse(input: &str) -> Self {
        let raw = split::split(input);
        Self {
            scheme: raw.scheme.to_lowercase(),
            userinfo: raw.userinfo.to_string(),
            host: raw.host.to_lowercase(),
            port: raw.port.to_string(),
            path: raw.path.to_string(),
            query: raw.query.to_string(),
            fragment: raw.fragment.to_string(),
        }
    }

    /// Builds a URL from explicit components. Never fails.
    ///
    /// When an authority is present, a non-empty path that does not start
    /// with '/' gets one prepended.
    pub fn build(parts: UrlParts) -> Self {
        let UrlParts {
            scheme,
            userinfo,
            host,
            port,
            mut path,
            query,
            fragment,
        } = parts;

        let has_authority = !userinfo.is_empty() || !host.is_empty() || !port.is_empty();
        if has_authority && !path.is_empty() && !path.starts_with('/') {
            path.insert(0, '/');
        }

        Self {
            scheme: scheme.to_lowercase(),
            userinfo,
            host: host.to_lowercase(),
            port,
            path,
            query,
            fragment,
        }
    }

    /// Gives the components back as owned strings.
    pub fn into_parts(self) -> UrlParts {
        UrlParts {
            scheme: self.scheme,
            userinfo: self.userinfo,
            host: self.host,
            port: self.port,
            path: self.path,
            query: self.query,
            fragment: self.fragment,
        }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn userinfo(&self) -> &str {
        &self.userinfo
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Userinfo text before the first ':'.
    pub fn username(&self) -> &str {
        self.userinfo
            .split_once(':')
            .map_or(self.userinfo.as_str(), |(name, _)| name)
    }

    /// Userinfo text after the first ':', empty if there is none.
    pub fn authorization(&self) -> &str {
        self.userinfo.split_once(':').map_or("", |(_, auth)| auth)
    }

    /// `[userinfo "@"] host [":" port]`.
    ///
    /// With no port, a host that itself ends in `:<digits>` gets a bare
    /// trailing ':' so that re-parsing does not read those digits as a port.
    pub fn authority(&self) -> String {
        let mut authority = String::with_capacity(
            self.userinfo.len() + self.host.len() + self.port.len() + 2,
        );
        if !self.userinfo.is_empty() {
            authority.push_str(&self.userinfo);
            authority.push('@');
        }
        authority.push_str(&self.host);
        if !self.port.is_empty() {
            authority.push(':');
            authority.push_str(&self.port);
        } else if host_ends_with_port(&self.host) {
            authority.push(':');
        }
        authority
    }

    /// `path ["?" query] ["#" fragment]`.
    pub fn full_path(&self) -> String {
        let mut full = self.path.clone();
        if !self.query.is_empty() {
            full.push('?');
            full.push_str(&self.query);
        }
        if !self.fragment.is_empty() {
            full.push('#');
            full.push_str(&self.fragment);
        }
        full
    }

    /// True when every component is empty.
    pub fn is_empty(&self) -> bool {
        self.scheme.is_empty()
            && self.userinfo.is_empty()
            && self.host.is_empty()
            && self.port.is_empty()
            && self.path.is_empty()
            && self.query.is_empty()
            && self.fragment.is_empty()
    }

    pub fn has_authority(&self) -> bool {
        !self.host.is_empty() || !self.userinfo.is_empty() || !self.port.is_empty()
    }

    /// A URL without a scheme is a relative reference.
    pub fn is_relative(&self) -> bool {
        self.scheme.is_empty()
    }

    /// Relative reference whose path is merged with the base path on join
    /// rather than replacing it.
    pub fn is_relative_path(&self) -> bool {
        self.scheme.is_empty()
            && if self.path.is_empty() {
                !self.has_authority()
            } else {
                !self.path.starts_with('/')
            }
    }

    /// Dotted-quad host with every part a decimal number below 256.
    pub fn is_host_ipv4(&self) -> bool {
        if self.host.starts_with('[') {
            return false;
        }
        let parts: Vec<&str> = self.host.split('.').collect();
        parts.len() == 4
            && parts.iter().all(|part| {
                !part.is_empty()
                    && part.bytes().all(|b| b.is_ascii_digit())
                    && part.parse::<u32>().is_ok_and(|n| n < 256)
            })
    }

    /// IPv4 host or bracketed IP literal. The literal itself is not checked.
    pub fn is_host_ip(&self) -> bool {
        self.is_host_ipv4() || (self.host.starts_with('[') && self.host.ends_with(']'))
    }
}

fn host_ends_with_port(host: &str) -> bool {
    host.rfind(':').is_some_and(|idx| {
        let tail = &host[idx + 1..];
        !tail.is_empty() && tail.bytes().all(|b| b.is_ascii_digit())
    })
}

/// Serializes in a form that re-parses to the same components.
///
/// An authority-less path starting with "//" gets an explicit empty
/// authority, and a scheme-less path whose first segment holds ':' gets a
/// "./" prefix.
impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.scheme.is_empty() {
            write!(f, "{}:", self.scheme)?;
        }

        let authority = self.authority();
        if !authority.is_empty() || self.path.starts_with("//") {
            write!(f, "//{authority}")?;
        } else if self.scheme.is_empty() && first_segment_has_colon(&self.path) {
            f.write_str("./")?;
        }

        f.write_str(&self.full_path())
    }
}

fn first_segment_has_colon(path: &str) -> bool {
    match path.find(':') {
        Some(idx) => idx > 0 && !path[..idx].contains('/'),
        None => false,
    }
}

impl FromStr for Url {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Url::parse(s))
    }
}

impl From<&str> for Url {
    fn from(s: &str) -> Self {
        Url::parse(s)
    }
}

impl From<UrlParts> for Url {
    fn from(parts: UrlParts) -> Self {
        Url::build(parts)
    }
}

impl From<Url> for UrlParts {
    fn from(url: Url) -> Self {
        url.into_parts()
    }
}
