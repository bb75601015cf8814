use std::fmt;
use std::path;
use std::str::FromStr;

use super::*;

/// Descriptor file names, in lookup order.
pub const CONFIG_FILE_NAMES: &[&str] = &["docmd.yml", "docmd.yaml", "docmd.json", "docmd.toml"];

/// The site descriptor.
///
/// Loaded once at build start and never mutated afterwards. Missing keys take
/// the built-in defaults.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct SiteConfig {
    /// Directory holding the descriptor; `srcDir` and `outputDir` are below it.
    #[serde(skip)]
    pub root: path::PathBuf,
    pub site_title: String,
    /// Canonical base URL, without a trailing slash.
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::path::empty_as_none"
    )]
    pub site_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,
    pub src_dir: RelPath,
    pub output_dir: RelPath,
    pub search: bool,
    pub minify: bool,
    pub sidebar: Sidebar,
    pub theme: Theme,
    /// Scripts appended to the end of `<body>`, in this order.
    pub custom_js: Vec<SitePath>,
    #[serde(rename = "autoTitleFromH1")]
    pub auto_title_from_h1: bool,
    pub copy_code: bool,
    pub plugins: Plugins,
    pub edit_link: EditLink,
    pub navigation: Vec<NavNode>,
    pub page_navigation: bool,
    #[serde(alias = "Sponsor")]
    pub sponsor: Sponsor,
    pub footer: Footer,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::path::empty_as_none"
    )]
    pub favicon: Option<SitePath>,
}

impl Default for SiteConfig {
    fn default() -> SiteConfig {
        SiteConfig {
            root: Default::default(),
            site_title: "Documentation".into(),
            site_url: None,
            logo: None,
            src_dir: RelPath::from("docs"),
            output_dir: RelPath::from("site"),
            search: true,
            minify: true,
            sidebar: Sidebar::default(),
            theme: Theme::default(),
            custom_js: Default::default(),
            auto_title_from_h1: true,
            copy_code: true,
            plugins: Plugins::default(),
            edit_link: EditLink::default(),
            navigation: Default::default(),
            page_navigation: true,
            sponsor: Sponsor::default(),
            footer: Footer::default(),
            favicon: None,
        }
    }
}

impl SiteConfig {
    pub fn from_file<P: Into<path::PathBuf>>(path: P) -> Result<SiteConfig> {
        Self::from_file_internal(path.into())
    }

    fn from_file_internal(path: path::PathBuf) -> Result<SiteConfig> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Status::new("Failed to read config")
                .with_source(e)
                .context_with(|c| c.insert("Path", path.display().to_string()))
        })?;

        let format = Format::from_path(&path);
        let mut config = Self::parse(&content, format).map_err(|e| {
            e.context_with(|c| c.insert("Path", path.display().to_string()))
        })?;

        let mut root = path;
        root.pop(); // Remove filename
        if root == path::Path::new("") {
            root = path::Path::new(".").to_owned();
        }
        config.root = root;

        Ok(config)
    }

    /// Parse descriptor text. Blank input yields the defaults.
    pub fn parse(content: &str, format: Format) -> Result<SiteConfig> {
        if content.trim().is_empty() {
            return Ok(SiteConfig::default());
        }

        let config: SiteConfig = match format {
            Format::Yaml => serde_yaml::from_str(content)
                .map_err(|e| Status::new("Failed to parse config").with_source(e)),
            Format::Json => serde_json::from_str(content)
                .map_err(|e| Status::new("Failed to parse config").with_source(e)),
            Format::Toml => toml::from_str(content)
                .map_err(|e| Status::new("Failed to parse config").with_source(e)),
        }?;
        Ok(config)
    }

    pub fn from_cwd<P: Into<path::PathBuf>>(cwd: P) -> Result<SiteConfig> {
        Self::from_cwd_internal(cwd.into())
    }

    fn from_cwd_internal(cwd: path::PathBuf) -> Result<SiteConfig> {
        let file_path = find_project_file(&cwd, CONFIG_FILE_NAMES);
        let config = file_path
            .map(|p| {
                log::debug!("Using config file `{}`", p.display());
                Self::from_file(&p)
            })
            .unwrap_or_else(|| {
                log::warn!("No docmd.yml file found in current directory, using default config.");
                let config = SiteConfig {
                    root: cwd,
                    ..Default::default()
                };
                Ok(config)
            })?;
        Ok(config)
    }

    pub fn to_string_as(&self, format: Format) -> Result<String> {
        let content = match format {
            Format::Yaml => serde_yaml::to_string(self)
                .map_err(|e| Status::new("Failed to serialize config").with_source(e))?,
            Format::Json => serde_json::to_string_pretty(self)
                .map_err(|e| Status::new("Failed to serialize config").with_source(e))?,
            Format::Toml => toml::to_string_pretty(self)
                .map_err(|e| Status::new("Failed to serialize config").with_source(e))?,
        };
        Ok(content)
    }
}

impl fmt::Display for SiteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}

/// On-disk encoding of the descriptor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Format {
    #[default]
    Yaml,
    Json,
    Toml,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Yaml, Format::Json, Format::Toml];

    /// Format implied by a file extension; unknown extensions read as YAML.
    pub fn from_path(path: &path::Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Format::Json,
            Some("toml") => Format::Toml,
            _ => Format::Yaml,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Format::Yaml => "yaml",
            Format::Json => "json",
            Format::Toml => "toml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "yaml" | "yml" => Ok(Format::Yaml),
            "json" => Ok(Format::Json),
            "toml" => Ok(Format::Toml),
            _ => Err(format!("unknown format `{s}`, expected yaml, json or toml")),
        }
    }
}

/// Walk up from `dir` until a directory contains one of `names`.
pub fn find_project_file<P: Into<path::PathBuf>>(dir: P, names: &[&str]) -> Option<path::PathBuf> {
    find_project_file_internal(dir.into(), names)
}

fn find_project_file_internal(dir: path::PathBuf, names: &[&str]) -> Option<path::PathBuf> {
    let mut dir = dir;
    loop {
        if let Some(found) = names.iter().map(|n| dir.join(n)).find(|p| p.is_file()) {
            return Some(found);
        }
        let hit_bottom = !dir.pop();
        if hit_bottom {
            return None;
        }
    }
}
