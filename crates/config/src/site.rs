use std::fmt;

use crate::Result;
use crate::SitePath;
use crate::Status;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Logo {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::path::empty_as_none"
    )]
    pub light: Option<SitePath>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::path::empty_as_none"
    )]
    pub dark: Option<SitePath>,
    pub alt: String,
    pub href: String,
}

impl Default for Logo {
    fn default() -> Self {
        Self {
            light: None,
            dark: None,
            alt: "Logo".into(),
            href: "/".into(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Sidebar {
    pub collapsible: bool,
    pub default_collapsed: bool,
}

/// "Edit this page" link shown on every page.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct EditLink {
    pub enabled: bool,
    /// Folder holding `srcDir` in the forge, e.g. `.../edit/main/docs`.
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::path::empty_as_none"
    )]
    pub base_url: Option<String>,
    pub text: String,
}

impl Default for EditLink {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: None,
            text: "Edit this page".into(),
        }
    }
}

impl EditLink {
    /// Link for a source file, given relative to `srcDir`.
    pub fn url_for(&self, source: &str) -> Option<String> {
        if !self.enabled {
            return None;
        }
        let base = self.base_url.as_deref()?;
        Some(format!(
            "{}/{}",
            base.trim_end_matches('/'),
            source.trim_start_matches('/')
        ))
    }
}

/// Sponsor ribbon.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Sponsor {
    pub enabled: bool,
    pub title: String,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::path::empty_as_none"
    )]
    pub link: Option<String>,
}

impl Default for Sponsor {
    fn default() -> Self {
        Self {
            enabled: false,
            title: "Support".into(),
            link: None,
        }
    }
}

/// Markdown footer text, evaluated as a Liquid template.
///
/// `{{ year }}` and `{{ site_title }}` are in scope.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Footer(String);

impl Footer {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn render(&self, year: i32, site_title: &str) -> Result<String> {
        let template = self.parse()?;

        let mut globals = liquid::Object::new();
        globals.insert("year".into(), liquid::model::Value::scalar(i64::from(year)));
        globals.insert(
            "site_title".into(),
            liquid::model::Value::scalar(site_title.to_owned()),
        );

        template.render(&globals).map_err(|e| {
            Status::new("Failed to render footer")
                .with_source(e)
                .context_with(|c| c.insert("Footer", self.0.clone()))
        })
    }

    pub(crate) fn parse(&self) -> Result<liquid::Template> {
        let parser = liquid::ParserBuilder::with_stdlib()
            .build()
            .map_err(|e| Status::new("Failed to build footer parser").with_source(e))?;
        parser.parse(&self.0).map_err(|e| {
            Status::new("Failed to parse footer")
                .with_source(e)
                .context_with(|c| c.insert("Footer", self.0.clone()))
        })
    }
}

impl fmt::Display for Footer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for Footer {
    fn from(text: &str) -> Self {
        Self(text.to_owned())
    }
}
