//! Per-component grammar checks.

use thiserror::Error;

use super::Url;

/// First grammar violation found by [`Url::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    #[error("invalid scheme")]
    InvalidScheme,
    #[error("invalid userinfo")]
    InvalidUserinfo,
    #[error("invalid host")]
    InvalidHost,
    #[error("invalid path")]
    InvalidPath,
    #[error("invalid query")]
    InvalidQuery,
}

impl ValidationError {
    /// Whether the failing component belongs to the authority (userinfo or host).
    pub fn is_authority_error(&self) -> bool {
        matches!(
            self,
            ValidationError::InvalidUserinfo | ValidationError::InvalidHost
        )
    }

    /// Short stable name of the error kind, e.g. `InvalidHost`.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::InvalidScheme => "InvalidScheme",
            ValidationError::InvalidUserinfo => "InvalidUserinfo",
            ValidationError::InvalidHost => "InvalidHost",
            ValidationError::InvalidPath => "InvalidPath",
            ValidationError::InvalidQuery => "InvalidQuery",
        }
    }
}

impl Url {
    /// Checks every non-empty component against its grammar.
    ///
    /// Components are checked in the order scheme, userinfo, host, path,
    /// query; the fragment is never checked. Paths whose first segment
    /// contains ':' are accepted because serialization escapes them.
    pub fn validate(&self) -> Result<&Url, ValidationError> {
        if !self.scheme.is_empty() && !is_valid_scheme(&self.scheme) {
            return Err(ValidationError::InvalidScheme);
        }
        if !self.userinfo.is_empty() && !is_valid_userinfo(&self.userinfo) {
            return Err(ValidationError::InvalidUserinfo);
        }
        if !self.host.is_empty() && !is_valid_host(&self.host) {
            return Err(ValidationError::InvalidHost);
        }
        if !self.path.is_empty() && !excludes(&self.path, &['?', '#']) {
            return Err(ValidationError::InvalidPath);
        }
        if !self.query.is_empty() && !excludes(&self.query, &['#']) {
            return Err(ValidationError::InvalidQuery);
        }
        Ok(self)
    }
}

/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`, lowercase only.
fn is_valid_scheme(scheme: &str) -> bool {
    let mut bytes = scheme.bytes();
    matches!(bytes.next(), Some(b'a'..=b'z'))
        && bytes.all(|b| matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'+' | b'-' | b'.'))
}

fn is_valid_userinfo(userinfo: &str) -> bool {
    excludes(userinfo, &['/', '?', '#', '@', '[', ']'])
}

fn is_valid_host(host: &str) -> bool {
    match host
        .strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
    {
        Some(literal) => is_valid_ip_literal(literal),
        // A dotted IPv4 address is also a valid reg-name.
        None => excludes(host, &['/', '?', '#', '@', '[', ']', ':']),
    }
}

/// Permissive IP-literal check: either `v<hex>.<chars>` (IPvFuture) or a
/// run of hex digits, ':' and '.'. Not a full IPv6 grammar.
fn is_valid_ip_literal(literal: &str) -> bool {
    let future = literal
        .strip_prefix(['v', 'V'])
        .and_then(|rest| rest.split_once('.'))
        .is_some_and(|(version, tail)| {
            !version.is_empty()
                && version.bytes().all(|b| b.is_ascii_hexdigit())
                && !tail.is_empty()
                && tail.bytes().all(is_ip_future_byte)
        });

    future
        || (!literal.is_empty()
            && literal
                .bytes()
                .all(|b| b.is_ascii_hexdigit() || b == b':' || b == b'.'))
}

fn is_ip_future_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'-' | b'.'
                | b'_'
                | b'~'
                | b'!'
                | b'$'
                | b'&'
                | b'\''
                | b'('
                | b')'
                | b'*'
                | b','
                | b';'
                | b'='
                | b':'
        )
}

/// True when `value` has none of `forbidden`, no ASCII whitespace and no
/// ASCII control characters.
fn excludes(value: &str, forbidden: &[char]) -> bool {
    !value
        .chars()
        .any(|c| forbidden.contains(&c) || c.is_ascii_whitespace() || c.is_ascii_control())
}
