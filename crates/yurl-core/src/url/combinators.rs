//! Component replacement and per-field defaults.

use thiserror::Error;

use super::{Url, UrlParts};

/// Misuse of the combined `authority` / `full_path` shortcuts of [`Replace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReplaceError {
    #[error("authority cannot be replaced together with userinfo, host or port")]
    AuthorityConflict,
    #[error("full path cannot be replaced together with path, query or fragment")]
    FullPathConflict,
}

/// Set of component overrides for [`Url::replace`].
///
/// Unset fields are copied from the original URL. `authority` and
/// `full_path` are split like URL text and assigned component by component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Replace {
    pub scheme: Option<String>,
    pub userinfo: Option<String>,
    pub host: Option<String>,
    pub port: Option<String>,
    pub path: Option<String>,
    pub query: Option<String>,
    pub fragment: Option<String>,
    pub authority: Option<String>,
    pub full_path: Option<String>,
}

impl Replace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    pub fn userinfo(mut self, userinfo: impl Into<String>) -> Self {
        self.userinfo = Some(userinfo.into());
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn port(mut self, port: impl Into<String>) -> Self {
        self.port = Some(port.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = Some(fragment.into());
        self
    }

    /// Replaces userinfo, host and port at once from `[userinfo@]host[:port]`.
    pub fn authority(mut self, authority: impl Into<String>) -> Self {
        self.authority = Some(authority.into());
        self
    }

    /// Replaces path, query and fragment at once from `path[?query][#fragment]`.
    pub fn full_path(mut self, full_path: impl Into<String>) -> Self {
        self.full_path = Some(full_path.into());
        self
    }
}

/// A constituent conflicts with a shortcut only when given a non-empty value.
fn is_set(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|v| !v.is_empty())
}

impl Url {
    /// Returns a new URL with the fields set in `changes` overriding this one's.
    pub fn replace(&self, changes: Replace) -> Result<Url, ReplaceError> {
        let Replace {
            scheme,
            mut userinfo,
            mut host,
            mut port,
            mut path,
            mut query,
            mut fragment,
            authority,
            full_path,
        } = changes;

        if let Some(authority) = authority {
            if is_set(&userinfo) || is_set(&host) || is_set(&port) {
                return Err(ReplaceError::AuthorityConflict);
            }
            let parsed = Url::parse(&format!("//{authority}"));
            userinfo = Some(parsed.userinfo);
            host = Some(parsed.host);
            port = Some(parsed.port);
        }

        if let Some(full_path) = full_path {
            if is_set(&path) || is_set(&query) || is_set(&fragment) {
                return Err(ReplaceError::FullPathConflict);
            }
            let parsed = Url::parse(&full_path);
            path = Some(parsed.path);
            query = Some(parsed.query);
            fragment = Some(parsed.fragment);
        }

        Ok(Url::build(UrlParts {
            scheme: scheme.unwrap_or_else(|| self.scheme.clone()),
            userinfo: userinfo.unwrap_or_else(|| self.userinfo.clone()),
            host: host.unwrap_or_else(|| self.host.clone()),
            port: port.unwrap_or_else(|| self.port.clone()),
            path: path.unwrap_or_else(|| self.path.clone()),
            query: query.unwrap_or_else(|| self.query.clone()),
            fragment: fragment.unwrap_or_else(|| self.fragment.clone()),
        }))
    }

    /// Returns a new URL where every empty component is taken from `defaults`.
    ///
    /// Each field is decided on its own, unlike [`Url::join`].
    pub fn with_defaults(&self, defaults: &UrlParts) -> Url {
        fn pick(own: &str, default: &str) -> String {
            let chosen = if own.is_empty() { default } else { own };
            chosen.to_string()
        }

        Url::build(UrlParts {
            scheme: pick(&self.scheme, &defaults.scheme),
            userinfo: pick(&self.userinfo, &defaults.userinfo),
            host: pick(&self.host, &defaults.host),
            port: pick(&self.port, &defaults.port),
            path: pick(&self.path, &defaults.path),
            query: pick(&self.query, &defaults.query),
            fragment: pick(&self.fragment, &defaults.fragment),
        })
    }
}
