use std::fmt;

use relative_path::RelativePath;

/// Directory relative to the descriptor, like `srcDir` or `outputDir`.
pub type RelPath = relative_path::RelativePathBuf;

/// A path inside the published site.
///
/// Written root-relative (`/assets/css/app.css`) and resolved against the
/// output directory, or an absolute URL for content hosted elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SitePath(String);

impl SitePath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root_relative(&self) -> bool {
        is_root_relative(&self.0)
    }

    pub fn is_absolute_url(&self) -> bool {
        is_absolute_url(&self.0)
    }

    /// The path below the site root, `None` for anything not root-relative.
    pub fn relative(&self) -> Option<&RelativePath> {
        self.is_root_relative()
            .then(|| RelativePath::new(self.0.trim_start_matches('/')))
    }
}

impl fmt::Display for SitePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for SitePath {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl From<&str> for SitePath {
    fn from(path: &str) -> Self {
        Self(path.to_owned())
    }
}

impl AsRef<str> for SitePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// `/`-prefixed, but not a protocol-relative `//host` reference.
pub fn is_root_relative(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//")
}

/// An `http` or `https` URL with a host.
pub fn is_absolute_url(s: &str) -> bool {
    match url::Url::parse(s) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.has_host(),
        Err(_) => false,
    }
}

/// Treat a blank string as an unset value.
///
/// The descriptor commonly carries `light: ''` for "no logo".
pub(crate) fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: From<String>,
{
    let value: Option<String> = serde::Deserialize::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()).map(T::from))
}
