use crate::SitePath;

/// Per-plugin settings, keyed by plugin name.
///
/// `seo`, `analytics` and `sitemap` have typed schemas. Any other key is kept
/// verbatim, in declared order, for the plugin that claims it.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
pub struct Plugins {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoPlugin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics: Option<AnalyticsPlugin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sitemap: Option<SitemapPlugin>,
    #[serde(flatten)]
    pub other: serde_yaml::Mapping,
}

impl Plugins {
    pub fn is_empty(&self) -> bool {
        self.seo.is_none()
            && self.analytics.is_none()
            && self.sitemap.is_none()
            && self.other.is_empty()
    }

    /// Names of every configured plugin, typed ones first.
    pub fn names(&self) -> Vec<String> {
        let typed = [
            ("seo", self.seo.is_some()),
            ("analytics", self.analytics.is_some()),
            ("sitemap", self.sitemap.is_some()),
        ];
        typed
            .into_iter()
            .filter(|(_, present)| *present)
            .map(|(name, _)| name.to_owned())
            .chain(self.other.keys().filter_map(|k| k.as_str().map(str::to_owned)))
            .collect()
    }

    /// Raw settings for a plugin without a typed schema.
    pub fn get(&self, name: &str) -> Option<&serde_yaml::Value> {
        self.other.get(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct SeoPlugin {
    /// Used when a page's frontmatter has no description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph: Option<OpenGraph>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<TwitterCard>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct OpenGraph {
    /// Falls back to `siteTitle`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::path::empty_as_none"
    )]
    pub default_image: Option<SitePath>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct TwitterCard {
    pub card_type: CardType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_username: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    Summary,
    #[default]
    SummaryLargeImage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct AnalyticsPlugin {
    /// Google Analytics 4.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_v4: Option<GoogleV4>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct GoogleV4 {
    pub measurement_id: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct SitemapPlugin {
    pub default_changefreq: ChangeFreq,
    /// Between 0.0 and 1.0.
    pub default_priority: f64,
}

impl Default for SitemapPlugin {
    fn default() -> Self {
        Self {
            default_changefreq: ChangeFreq::default(),
            default_priority: 0.5,
        }
    }
}

/// `<changefreq>` values from the sitemaps.org protocol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    #[default]
    Weekly,
    Monthly,
    Yearly,
    Never,
}
