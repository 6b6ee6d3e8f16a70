//! More-link resolution.
//!
//! A content block either links to the site's full event listing with the
//! active query attached, or to a custom target an editor typed in. Custom
//! targets are untrusted input: anything that is not a well-formed
//! reference resolves to no link at all.

use serde::Serialize;
use url::Url;

/// Link inviting the user to view the full result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoreLink {
    /// Link label.
    pub text: String,
    /// Link target.
    pub url: String,
}

impl MoreLink {
    /// Builds the link to the full event listing, carrying the query as a
    /// `q` parameter. An empty query is omitted.
    pub fn to_all_events(text: impl Into<String>, path: &str, query: &str) -> Self {
        let url = if query.is_empty() {
            path.to_string()
        } else {
            format!("{path}?q={}", urlencoding::encode(query))
        };

        Self {
            text: text.into(),
            url,
        }
    }

    /// Resolves an editor-supplied target, or `None` when the target is
    /// not a well-formed reference.
    pub fn from_user_input(text: impl Into<String>, target: &str) -> Option<Self> {
        if !is_well_formed_reference(target) {
            return None;
        }

        Some(Self {
            text: text.into(),
            url: target.to_string(),
        })
    }
}

/// Accepts site-local references and absolute http(s) URLs.
fn is_well_formed_reference(target: &str) -> bool {
    if target.starts_with('/') || target.starts_with('#') || target.starts_with('?') {
        return true;
    }

    match Url::parse(target) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.has_host(),
        Err(_) => false,
    }
}
