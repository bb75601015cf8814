//! Files the descriptor references inside the published site.

use std::fmt;
use std::path;

use docmd_config::SiteConfig;
use docmd_config::SitePath;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetRole {
    Favicon,
    LogoLight,
    LogoDark,
    Stylesheet,
    Script,
    SocialImage,
}

impl AssetRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Favicon => "favicon",
            Self::LogoLight => "logo-light",
            Self::LogoDark => "logo-dark",
            Self::Stylesheet => "stylesheet",
            Self::Script => "script",
            Self::SocialImage => "social-image",
        }
    }
}

impl fmt::Display for AssetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Asset {
    pub role: AssetRole,
    pub path: SitePath,
    /// Location in the output directory; `None` for off-site URLs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dest: Option<path::PathBuf>,
}

/// Every asset reference, in the order the generator emits them.
pub fn referenced(config: &SiteConfig) -> Vec<(AssetRole, &SitePath)> {
    let mut found = Vec::new();
    if let Some(favicon) = &config.favicon {
        found.push((AssetRole::Favicon, favicon));
    }
    if let Some(logo) = &config.logo {
        if let Some(light) = &logo.light {
            found.push((AssetRole::LogoLight, light));
        }
        if let Some(dark) = &logo.dark {
            found.push((AssetRole::LogoDark, dark));
        }
    }
    found.extend(
        config
            .theme
            .custom_css
            .iter()
            .map(|p| (AssetRole::Stylesheet, p)),
    );
    found.extend(config.custom_js.iter().map(|p| (AssetRole::Script, p)));
    let social = config
        .plugins
        .seo
        .as_ref()
        .and_then(|seo| seo.open_graph.as_ref())
        .and_then(|og| og.default_image.as_ref());
    if let Some(image) = social {
        found.push((AssetRole::SocialImage, image));
    }
    found
}

/// Resolve a root-relative site path to a file under `destination`.
pub fn dest_path(destination: &path::Path, path: &SitePath) -> Option<path::PathBuf> {
    path.relative().map(|rel| rel.to_path(destination))
}

#[cfg(test)]
mod test {
    use super::*;

    use docmd_config::Logo;

    #[test]
    fn referenced_in_emit_order() {
        let mut config = SiteConfig::default();
        config.favicon = Some("/assets/favicon.ico".into());
        config.logo = Some(Logo {
            light: Some("/assets/logo.svg".into()),
            ..Default::default()
        });
        config.theme.custom_css = vec!["/assets/css/typography.css".into()];
        config.custom_js = vec![
            "/assets/js/b.js".into(),
            "https://cdn.example.com/a.js".into(),
        ];

        let roles: Vec<_> = referenced(&config)
            .into_iter()
            .map(|(role, path)| format!("{role} {path}"))
            .collect();
        assert_eq!(
            roles,
            [
                "favicon /assets/favicon.ico",
                "logo-light /assets/logo.svg",
                "stylesheet /assets/css/typography.css",
                "script /assets/js/b.js",
                "script https://cdn.example.com/a.js",
            ]
        );
    }

    #[test]
    fn dest_under_output_dir() {
        let dest = path::Path::new("/srv/blog/site");
        assert_eq!(
            dest_path(dest, &SitePath::new("/assets/css/typography.css")),
            Some(path::PathBuf::from("/srv/blog/site/assets/css/typography.css"))
        );
        assert_eq!(dest_path(dest, &SitePath::new("https://cdn.example.com/a.js")), None);
    }
}
