use std::fmt;

use itertools::Itertools;

use crate::path::is_absolute_url;
use crate::path::is_root_relative;
use crate::*;

/// One failed descriptor check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Key path, e.g. `navigation[1].children[0].path`.
    pub field: String,
    pub problem: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, problem: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            problem: problem.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.problem)
    }
}

/// Every check that failed, in descriptor order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<Violation> {
        self.0
    }

    /// Whether any violation is reported against `field`.
    pub fn has(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join("\n"))
    }
}

impl std::error::Error for Violations {}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl SiteConfig {
    /// Run every structural check, collecting all failures.
    pub fn check(&self) -> Violations {
        let mut checker = Checker::default();

        checker.not_blank("siteTitle", &self.site_title);
        if let Some(site_url) = &self.site_url {
            checker.absolute_url("siteUrl", site_url);
            if site_url.ends_with('/') {
                checker.report("siteUrl", "must not end with `/`");
            }
        }

        if let Some(logo) = &self.logo {
            checker.site_path_opt("logo.light", logo.light.as_ref());
            checker.site_path_opt("logo.dark", logo.dark.as_ref());
            if !is_root_relative(&logo.href) && !is_absolute_url(&logo.href) {
                checker.report(
                    "logo.href",
                    format!("`{}` is neither root-relative nor an absolute URL", logo.href),
                );
            }
        }

        checker.directories(&self.src_dir, &self.output_dir);

        for (i, css) in self.theme.custom_css.iter().enumerate() {
            checker.site_path(&format!("theme.customCss[{i}]"), css);
        }
        for (i, js) in self.custom_js.iter().enumerate() {
            checker.site_path(&format!("customJs[{i}]"), js);
        }
        checker.site_path_opt("favicon", self.favicon.as_ref());

        checker.plugins(&self.plugins);

        if self.edit_link.enabled {
            match &self.edit_link.base_url {
                Some(url) => checker.absolute_url("editLink.baseUrl", url),
                None => checker.report("editLink.baseUrl", "required when editLink is enabled"),
            }
        }
        if self.sponsor.enabled {
            match &self.sponsor.link {
                Some(url) => checker.absolute_url("sponsor.link", url),
                None => checker.report("sponsor.link", "required when sponsor is enabled"),
            }
        }

        for (i, node) in self.navigation.iter().enumerate() {
            checker.nav_node(&format!("navigation[{i}]"), node, 1);
        }

        if let Err(e) = self.footer.parse() {
            checker.report("footer", e.to_string());
        }

        checker.finish()
    }

    /// Fail with every violation when the descriptor is malformed.
    pub fn validate(&self) -> Result<()> {
        let violations = self.check();
        if violations.is_empty() {
            return Ok(());
        }
        let count = violations.len();
        Err(Status::new("Invalid site descriptor")
            .with_source(violations)
            .context_with(|c| c.insert("Violations", count)))
    }
}

#[derive(Default)]
struct Checker {
    found: Vec<Violation>,
}

impl Checker {
    fn report(&mut self, field: &str, problem: impl Into<String>) {
        self.found.push(Violation::new(field, problem));
    }

    fn finish(self) -> Violations {
        Violations(self.found)
    }

    fn not_blank(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.report(field, "must not be empty");
        }
    }

    fn absolute_url(&mut self, field: &str, value: &str) {
        if !is_absolute_url(value) {
            self.report(field, format!("`{value}` is not an absolute http(s) URL"));
        }
    }

    fn site_path(&mut self, field: &str, path: &SitePath) {
        if !path.is_root_relative() {
            self.report(field, format!("`{path}` must start with `/`"));
        }
    }

    fn site_path_opt(&mut self, field: &str, path: Option<&SitePath>) {
        if let Some(path) = path {
            self.site_path(field, path);
        }
    }

    fn directories(&mut self, src: &RelPath, out: &RelPath) {
        let src_blank = src.as_str().trim().is_empty();
        let out_blank = out.as_str().trim().is_empty();
        if src_blank {
            self.report("srcDir", "must not be empty");
        }
        if out_blank {
            self.report("outputDir", "must not be empty");
        }
        if src_blank || out_blank {
            return;
        }

        let src = src.normalize();
        let out = out.normalize();
        if src == out {
            self.report("outputDir", format!("must differ from srcDir `{src}`"));
        } else if out.starts_with(&src) {
            self.report("outputDir", format!("`{out}` is inside srcDir `{src}`"));
        } else if src.starts_with(&out) {
            self.report("srcDir", format!("`{src}` is inside outputDir `{out}`"));
        }
    }

    fn plugins(&mut self, plugins: &Plugins) {
        if let Some(seo) = &plugins.seo {
            if let Some(og) = &seo.open_graph {
                self.site_path_opt(
                    "plugins.seo.openGraph.defaultImage",
                    og.default_image.as_ref(),
                );
            }
        }
        if let Some(ga) = plugins
            .analytics
            .as_ref()
            .and_then(|a| a.google_v4.as_ref())
        {
            self.not_blank("plugins.analytics.googleV4.measurementId", &ga.measurement_id);
        }
        if let Some(sitemap) = &plugins.sitemap {
            let priority = sitemap.default_priority;
            if !(0.0..=1.0).contains(&priority) {
                self.report(
                    "plugins.sitemap.defaultPriority",
                    format!("{priority} is outside 0.0..=1.0"),
                );
            }
        }
    }

    fn nav_node(&mut self, field: &str, node: &NavNode, level: usize) {
        self.not_blank(&format!("{field}.title"), &node.title);

        let path_field = format!("{field}.path");
        match node.target() {
            NavTarget::Placeholder => {
                if !node.is_group() {
                    self.report(&path_field, "`#` is only allowed on entries with children");
                }
            }
            NavTarget::Route(route) => {
                if !is_root_relative(route) {
                    self.report(&path_field, format!("`{route}` must start with `/`"));
                }
            }
            NavTarget::External(url) => self.absolute_url(&path_field, url),
        }

        if level == MAX_NAV_DEPTH && node.is_group() {
            self.report(
                &format!("{field}.children"),
                format!("navigation is nested deeper than {MAX_NAV_DEPTH} levels"),
            );
            return;
        }
        for (i, child) in node.children.iter().enumerate() {
            self.nav_node(&format!("{field}.children[{i}]"), child, level + 1);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn fixture() -> SiteConfig {
        SiteConfig::from_file("tests/fixtures/config/docmd.yml").unwrap()
    }

    #[test]
    fn blog_fixture_is_valid() {
        let violations = fixture().check();
        assert!(violations.is_empty(), "{violations}");
        fixture().validate().unwrap();
    }

    #[test]
    fn defaults_are_valid() {
        SiteConfig::default().validate().unwrap();
    }

    #[test]
    fn all_violations_are_collected() {
        let config = SiteConfig::from_file("tests/fixtures/config/violations.yml").unwrap();
        let violations = config.check();
        let fields: Vec<_> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(
            fields,
            [
                "siteUrl",
                "outputDir",
                "theme.customCss[1]",
                "customJs[0]",
                "favicon",
                "navigation[0].path",
                "navigation[1].path",
                "navigation[2].children[0].children",
                "navigation[3].title",
            ]
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn relative_asset_path() {
        let mut config = SiteConfig::default();
        config.custom_js.push(SitePath::new("assets/app.js"));
        let violations = config.check();
        assert_eq!(
            violations.into_vec(),
            [Violation::new("customJs[0]", "`assets/app.js` must start with `/`")]
        );
    }

    #[test]
    fn site_url_trailing_slash() {
        let config = SiteConfig {
            site_url: Some("https://blog.youngest.dev/".into()),
            ..Default::default()
        };
        assert!(config.check().has("siteUrl"));
    }

    #[test]
    fn site_url_not_absolute() {
        let config = SiteConfig {
            site_url: Some("blog.youngest.dev".into()),
            ..Default::default()
        };
        assert!(config.check().has("siteUrl"));
    }

    #[test]
    fn same_directories() {
        let config = SiteConfig {
            src_dir: RelPath::from("docs"),
            output_dir: RelPath::from("./docs"),
            ..Default::default()
        };
        assert!(config.check().has("outputDir"));
    }

    #[test]
    fn nested_directories() {
        let config = SiteConfig {
            src_dir: RelPath::from("docs"),
            output_dir: RelPath::from("docs/_site"),
            ..Default::default()
        };
        assert!(config.check().has("outputDir"));

        let config = SiteConfig {
            src_dir: RelPath::from("site/docs"),
            output_dir: RelPath::from("site"),
            ..Default::default()
        };
        assert!(config.check().has("srcDir"));
    }

    #[test]
    fn sibling_directories_with_shared_prefix() {
        let config = SiteConfig {
            src_dir: RelPath::from("docs"),
            output_dir: RelPath::from("docs-site"),
            ..Default::default()
        };
        assert!(config.check().is_empty());
    }

    #[test]
    fn empty_directories() {
        let config = SiteConfig {
            src_dir: RelPath::from(""),
            output_dir: RelPath::from(""),
            ..Default::default()
        };
        let violations = config.check();
        assert!(violations.has("srcDir"));
        assert!(violations.has("outputDir"));
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn external_link_must_be_url() {
        let config = SiteConfig {
            navigation: vec![NavNode::new("GitHub", "github.com/Youngestdev").with_external(true)],
            ..Default::default()
        };
        assert!(config.check().has("navigation[0].path"));
    }

    #[test]
    fn external_group_cannot_use_placeholder() {
        let config = SiteConfig {
            navigation: vec![
                NavNode::new("Elsewhere", "#")
                    .with_external(true)
                    .with_children(vec![NavNode::new("Child", "/child")]),
            ],
            ..Default::default()
        };
        let violations = config.check();
        assert_eq!(
            violations.into_vec(),
            [Violation::new(
                "navigation[0].path",
                "`#` is not an absolute http(s) URL"
            )]
        );
    }

    #[test]
    fn logo_href_must_be_route_or_url() {
        let mut config = SiteConfig {
            logo: Some(Logo {
                href: "home".into(),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(config.check().has("logo.href"));

        if let Some(logo) = config.logo.as_mut() {
            logo.href = "https://youngest.dev".into();
        }
        assert!(config.check().is_empty());
    }

    #[test]
    fn relative_social_image() {
        let mut config = SiteConfig::default();
        config.plugins.seo = Some(SeoPlugin {
            open_graph: Some(OpenGraph {
                default_image: Some(SitePath::new("assets/preview.png")),
                ..Default::default()
            }),
            ..Default::default()
        });
        assert_eq!(
            config.check().into_vec(),
            [Violation::new(
                "plugins.seo.openGraph.defaultImage",
                "`assets/preview.png` must start with `/`"
            )]
        );
    }

    #[test]
    fn blank_measurement_id() {
        let mut config = SiteConfig::default();
        config.plugins.analytics = Some(AnalyticsPlugin {
            google_v4: Some(GoogleV4 {
                measurement_id: "  ".into(),
            }),
        });
        assert!(config
            .check()
            .has("plugins.analytics.googleV4.measurementId"));
    }

    #[test]
    fn placeholder_needs_children() {
        let config = SiteConfig {
            navigation: vec![NavNode::new("Empty group", "#")],
            ..Default::default()
        };
        assert!(config.check().has("navigation[0].path"));
    }

    #[test]
    fn edit_link_requires_base_url() {
        let mut config = SiteConfig::default();
        config.edit_link.enabled = true;
        assert!(config.check().has("editLink.baseUrl"));
    }

    #[test]
    fn sponsor_requires_link() {
        let mut config = SiteConfig::default();
        config.sponsor.enabled = true;
        assert!(config.check().has("sponsor.link"));
        config.sponsor.link = Some("https://github.com/sponsors/mgks".into());
        assert!(config.check().is_empty());
    }

    #[test]
    fn sitemap_priority_range() {
        let mut config = SiteConfig::default();
        config.plugins.sitemap = Some(SitemapPlugin {
            default_priority: 1.5,
            ..Default::default()
        });
        assert!(config.check().has("plugins.sitemap.defaultPriority"));
    }

    #[test]
    fn broken_footer() {
        let config = SiteConfig {
            footer: Footer::new("{% if %}"),
            ..Default::default()
        };
        assert!(config.check().has("footer"));
    }

    #[test]
    fn violations_display() {
        let violations = Violations(vec![
            Violation::new("srcDir", "must not be empty"),
            Violation::new("favicon", "`x.ico` must start with `/`"),
        ]);
        assert_eq!(
            violations.to_string(),
            "srcDir: must not be empty\nfavicon: `x.ico` must start with `/`"
        );
    }
}
