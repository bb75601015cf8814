use std::fmt;
use std::path;

use docmd_config::SiteConfig;
use docmd_config::SitePath;

use crate::assets;
use crate::assets::Asset;
use crate::nav;
use crate::nav::PageLink;
use crate::Result;
use crate::Status;

/// A validated descriptor resolved against the filesystem.
///
/// This is what the generator works from: absolute directories, rendered
/// footer, assets mapped into the output tree and pages in reading order.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Site {
    pub source: path::PathBuf,
    pub destination: path::PathBuf,
    pub footer: String,
    pub pages: Vec<PageLink>,
    pub assets: Vec<Asset>,
    #[serde(skip)]
    pub config: SiteConfig,
}

impl Site {
    pub fn from_config(config: SiteConfig) -> Result<Self> {
        let year = time::OffsetDateTime::now_utc().year();
        Self::from_config_with_year(config, year)
    }

    /// As [`Site::from_config`], with the footer rendered for `year`.
    pub fn from_config_with_year(config: SiteConfig, year: i32) -> Result<Self> {
        config.validate()?;

        let root = match dunce::canonicalize(&config.root) {
            Ok(root) => root,
            Err(e) => {
                log::debug!(
                    "Could not canonicalize `{}`, using as-is: {e}",
                    config.root.display()
                );
                config.root.clone()
            }
        };
        let source = config.src_dir.to_path(&root);
        let destination = config.output_dir.to_path(&root);

        let footer = config.footer.render(year, &config.site_title)?;
        let pages = nav::flatten(&config.navigation);
        let assets = assets::referenced(&config)
            .into_iter()
            .map(|(role, path)| Asset {
                role,
                path: path.clone(),
                dest: assets::dest_path(&destination, path),
            })
            .collect();

        Ok(Self {
            source,
            destination,
            footer,
            pages,
            assets,
            config,
        })
    }

    /// Where a root-relative path lands in the output directory.
    pub fn asset_dest(&self, path: &SitePath) -> Option<path::PathBuf> {
        assets::dest_path(&self.destination, path)
    }

    /// Previous and next page, when `pageNavigation` is on.
    pub fn neighbors(&self, route: &str) -> (Option<&PageLink>, Option<&PageLink>) {
        if !self.config.page_navigation {
            return (None, None);
        }
        nav::neighbors(&self.pages, route)
    }

    /// Absolute URL of a route, when `siteUrl` is set.
    pub fn canonical_url(&self, route: &str) -> Option<String> {
        let base = self.config.site_url.as_deref()?;
        let route = nav::normalize_route(route);
        if route == "/" {
            Some(format!("{base}/"))
        } else {
            Some(format!("{base}{route}"))
        }
    }

    /// "Edit this page" link for a route.
    pub fn edit_url(&self, route: &str) -> Option<String> {
        let source = nav::source_file(&self.source, route)?;
        let rel = source.strip_prefix(&self.source).ok()?;
        let rel = relative_path::RelativePathBuf::from_path(rel).ok()?;
        self.config.edit_link.url_for(rel.as_str())
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}

impl TryFrom<SiteConfig> for Site {
    type Error = Status;

    fn try_from(config: SiteConfig) -> Result<Self> {
        Self::from_config(config)
    }
}
