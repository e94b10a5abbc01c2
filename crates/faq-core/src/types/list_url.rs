//! Where lists are kept.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::{Host, Url};

use crate::error::{Error, InvalidInputError};

/// Location of the lists: a site on a list service or a local directory.
///
/// Remote sites must use `https`, except on the loopback interface where
/// plain `http` is accepted. Their REST endpoints live under `<site>/_api/`.
/// Local directories are given as `file://` URLs.
///
/// ```
/// use faq_core::ListUrl;
///
/// let site = ListUrl::new("https://contoso.sharepoint.com/sites/help").unwrap();
/// assert_eq!(site.api_url("web/lists"),
///            "https://contoso.sharepoint.com/sites/help/_api/web/lists");
///
/// assert!(ListUrl::new("file:///tmp/lists").unwrap().is_local());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ListUrl(Url);

impl ListUrl {
    /// Parse and check a list location.
    ///
    /// # Errors
    ///
    /// Returns an error for relative URLs, for schemes other than `file`,
    /// `https` and loopback `http`, and for remote URLs without a host.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let raw = s.as_ref();
        let reject = |reason: String| -> Error {
            InvalidInputError::ListUrl {
                value: raw.to_string(),
                reason,
            }
            .into()
        };

        let url = Url::parse(raw).map_err(|e| reject(e.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(reject("must be an absolute URL".to_string()));
        }

        match url.scheme() {
            "file" => {}
            "https" if url.host().is_some() => {}
            "http" if is_loopback(&url) => {}
            "https" => return Err(reject("must have a host".to_string())),
            "http" => {
                return Err(reject(
                    "plain http is only accepted for localhost".to_string(),
                ));
            }
            other => return Err(reject(format!("unsupported scheme '{}'", other))),
        }

        Ok(Self(url))
    }

    /// The `file://` location of a directory.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is relative.
    pub fn from_directory(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        match Url::from_directory_path(path) {
            Ok(url) => Ok(Self(url)),
            Err(()) => Err(InvalidInputError::ListUrl {
                value: path.display().to_string(),
                reason: "directory must be an absolute path".to_string(),
            }
            .into()),
        }
    }

    /// The REST endpoint for `path` below the site's `_api/`.
    pub fn api_url(&self, path: &str) -> String {
        format!(
            "{}/_api/{}",
            self.0.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// True for a local directory.
    pub fn is_local(&self) -> bool {
        self.0.scheme() == "file"
    }

    /// True for a site on a list service.
    pub fn is_network(&self) -> bool {
        matches!(self.0.scheme(), "http" | "https")
    }

    /// The directory of a local location; `None` for remote sites.
    pub fn to_file_path(&self) -> Option<PathBuf> {
        self.is_local().then(|| self.0.to_file_path().ok()).flatten()
    }
}

fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(Host::Domain(name)) => name == "localhost",
        Some(Host::Ipv4(addr)) => addr.is_loopback(),
        Some(Host::Ipv6(addr)) => addr.is_loopback(),
        None => false,
    }
}

impl fmt::Display for ListUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl FromStr for ListUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ListUrl {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ListUrl> for String {
    fn from(url: ListUrl) -> Self {
        url.0.into()
    }
}

impl AsRef<str> for ListUrl {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_root_keeps_single_slash() {
        for raw in ["https://contoso.sharepoint.com", "https://contoso.sharepoint.com/"] {
            let site = ListUrl::new(raw).unwrap();
            assert_eq!(site.as_str(), "https://contoso.sharepoint.com/");
            assert_eq!(site.to_string(), "https://contoso.sharepoint.com/");
        }

        let site = ListUrl::new("https://contoso.sharepoint.com/").unwrap();
        assert_eq!(
            site.api_url("/web/lists"),
            "https://contoso.sharepoint.com/_api/web/lists"
        );
    }

    #[test]
    fn api_url_keeps_site_path() {
        let site = ListUrl::new("https://contoso.sharepoint.com/sites/help/").unwrap();
        assert_eq!(
            site.api_url("web"),
            "https://contoso.sharepoint.com/sites/help/_api/web"
        );
    }

    #[test]
    fn plain_http_only_on_loopback() {
        assert!(ListUrl::new("http://localhost:8080").unwrap().is_network());
        assert!(ListUrl::new("http://127.0.0.1:9000").is_ok());
        assert!(ListUrl::new("http://[::1]:9000").is_ok());
        assert!(ListUrl::new("http://contoso.sharepoint.com").is_err());
    }

    #[test]
    fn rejects_relative_and_foreign_urls() {
        assert!(ListUrl::new("/_api/web").is_err());
        assert!(ListUrl::new("ftp://example.com/lists").is_err());
        assert!(ListUrl::new("mailto:help@example.com").is_err());
    }

    #[test]
    fn file_urls_are_local() {
        let local = ListUrl::new("file:///tmp/lists").unwrap();
        assert!(local.is_local());
        assert!(!local.is_network());

        let site = ListUrl::new("https://contoso.sharepoint.com").unwrap();
        assert!(site.to_file_path().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn directory_round_trips() {
        let local = ListUrl::from_directory("/tmp/lists").unwrap();
        assert_eq!(local.to_file_path().unwrap(), PathBuf::from("/tmp/lists/"));
        assert!(ListUrl::from_directory("relative/lists").is_err());
    }

    #[test]
    fn serde_uses_the_string_form() {
        let site = ListUrl::new("https://contoso.sharepoint.com/sites/help").unwrap();
        let json = serde_json::to_string(&site).unwrap();
        assert_eq!(json, "\"https://contoso.sharepoint.com/sites/help\"");
        assert_eq!(serde_json::from_str::<ListUrl>(&json).unwrap(), site);
        assert!(serde_json::from_str::<ListUrl>("\"http://example.com\"").is_err());
    }
}
