//! Navigation tree walking.

use std::path;

use docmd_config::NavNode;
use docmd_config::NavTarget;
use relative_path::RelativePathBuf;

/// An internal page reachable from the navigation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PageLink {
    pub title: String,
    /// Route as written in the descriptor.
    pub route: String,
    /// Title of the enclosing group, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

/// Internal pages in reading order (depth-first, declaration order).
///
/// Group placeholders and external links are skipped.
pub fn flatten(navigation: &[NavNode]) -> Vec<PageLink> {
    let mut pages = Vec::new();
    for node in navigation {
        flatten_node(node, None, &mut pages);
    }
    pages
}

fn flatten_node(node: &NavNode, section: Option<&str>, pages: &mut Vec<PageLink>) {
    if let NavTarget::Route(route) = node.target() {
        pages.push(PageLink {
            title: node.title.clone(),
            route: route.to_owned(),
            section: section.map(str::to_owned),
        });
    }
    for child in &node.children {
        flatten_node(child, Some(node.title.as_str()), pages);
    }
}

/// Previous and next page around `route`, for page-bottom navigation.
pub fn neighbors<'p>(
    pages: &'p [PageLink],
    route: &str,
) -> (Option<&'p PageLink>, Option<&'p PageLink>) {
    let route = normalize_route(route);
    let Some(index) = pages
        .iter()
        .position(|p| normalize_route(&p.route) == route)
    else {
        return (None, None);
    };
    let prev = index.checked_sub(1).and_then(|i| pages.get(i));
    let next = pages.get(index + 1);
    (prev, next)
}

/// Canonical form of a route: no `.md`, no `/index`, no trailing `/`.
pub fn normalize_route(route: &str) -> String {
    let route = route.split(['#', '?']).next().unwrap_or_default();
    let route = route.strip_suffix(".md").unwrap_or(route);
    let route = route.strip_suffix("/index").unwrap_or(route);
    let route = route.trim_end_matches('/');
    if route.is_empty() || route == "index" {
        "/".to_owned()
    } else if route.starts_with('/') {
        route.to_owned()
    } else {
        format!("/{route}")
    }
}

/// Markdown files, relative to `srcDir`, the generator would try for `route`.
pub fn source_candidates(route: &str) -> Vec<RelativePathBuf> {
    let route = route.split(['#', '?']).next().unwrap_or_default();
    let trimmed = route.trim_matches('/');
    if trimmed.is_empty() {
        return vec![RelativePathBuf::from("index.md")];
    }
    if trimmed.ends_with(".md") {
        return vec![RelativePathBuf::from(trimmed)];
    }
    vec![
        RelativePathBuf::from(format!("{trimmed}.md")),
        RelativePathBuf::from(format!("{trimmed}/index.md")),
    ]
}

/// The first existing source file for `route` under `source_dir`.
pub fn source_file(source_dir: &path::Path, route: &str) -> Option<path::PathBuf> {
    source_candidates(route)
        .into_iter()
        .map(|rel| rel.to_path(source_dir))
        .find(|p| p.is_file())
}

/// Indented outline of the navigation, one entry per line.
pub fn render_tree(navigation: &[NavNode]) -> String {
    let mut out = String::new();
    for node in navigation {
        render_node(&mut out, node, 0);
    }
    out
}

fn render_node(out: &mut String, node: &NavNode, level: usize) {
    let indent = "  ".repeat(level);
    let external = if node.external { " (external)" } else { "" };
    out.push_str(&format!("{indent}{} -> {}{external}\n", node.title, node.path));
    for child in &node.children {
        render_node(out, child, level + 1);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn navigation() -> Vec<NavNode> {
        vec![
            NavNode::new("Welcome", "/").with_icon("home"),
            NavNode::new("Building Fisco", "#").with_children(vec![
                NavNode::new("Headless Commerce Architecture", "/fisco-headless-arch"),
                NavNode::new("Batch Imports Optimization", "/batch_imports"),
            ]),
            NavNode::new("Backend Engineering", "#").with_children(vec![
                NavNode::new("Mini Server Watch Board", "/server_dashboard.md"),
            ]),
            NavNode::new("GitHub", "https://github.com/Youngestdev").with_external(true),
        ]
    }

    #[test]
    fn flatten_reading_order() {
        let pages = flatten(&navigation());
        let routes: Vec<_> = pages.iter().map(|p| p.route.as_str()).collect();
        assert_eq!(
            routes,
            [
                "/",
                "/fisco-headless-arch",
                "/batch_imports",
                "/server_dashboard.md"
            ]
        );
        assert_eq!(pages[0].section, None);
        assert_eq!(pages[1].section.as_deref(), Some("Building Fisco"));
    }

    #[test]
    fn neighbors_middle() {
        let pages = flatten(&navigation());
        let (prev, next) = neighbors(&pages, "/fisco-headless-arch");
        assert_eq!(prev.unwrap().route, "/");
        assert_eq!(next.unwrap().route, "/batch_imports");
    }

    #[test]
    fn neighbors_edges() {
        let pages = flatten(&navigation());
        let (prev, next) = neighbors(&pages, "/");
        assert_eq!(prev, None);
        assert_eq!(next.unwrap().route, "/fisco-headless-arch");

        let (prev, next) = neighbors(&pages, "/server_dashboard");
        assert_eq!(prev.unwrap().route, "/batch_imports");
        assert_eq!(next, None);
    }

    #[test]
    fn neighbors_unknown_route() {
        let pages = flatten(&navigation());
        assert_eq!(neighbors(&pages, "/nope"), (None, None));
    }

    #[test]
    fn normalize() {
        assert_eq!(normalize_route("/"), "/");
        assert_eq!(normalize_route(""), "/");
        assert_eq!(normalize_route("/index.md"), "/");
        assert_eq!(normalize_route("/recursion/"), "/recursion");
        assert_eq!(normalize_route("/server_dashboard.md"), "/server_dashboard");
        assert_eq!(normalize_route("/guide/index"), "/guide");
        assert_eq!(normalize_route("/guide#install"), "/guide");
    }

    #[test]
    fn candidates() {
        assert_eq!(source_candidates("/"), [RelativePathBuf::from("index.md")]);
        assert_eq!(
            source_candidates("/recursion"),
            [
                RelativePathBuf::from("recursion.md"),
                RelativePathBuf::from("recursion/index.md")
            ]
        );
        assert_eq!(
            source_candidates("/server_dashboard.md"),
            [RelativePathBuf::from("server_dashboard.md")]
        );
    }

    #[test]
    fn source_file_lookup() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.md"), "# Welcome").unwrap();
        std::fs::create_dir(dir.path().join("guide")).unwrap();
        std::fs::write(dir.path().join("guide/index.md"), "# Guide").unwrap();

        assert_eq!(source_file(dir.path(), "/"), Some(dir.path().join("index.md")));
        assert_eq!(
            source_file(dir.path(), "/guide"),
            Some(dir.path().join("guide").join("index.md"))
        );
        assert_eq!(source_file(dir.path(), "/missing"), None);
    }

    #[test]
    fn tree_outline() {
        let actual = render_tree(&navigation());
        let expected = "\
Welcome -> /
Building Fisco -> #
  Headless Commerce Architecture -> /fisco-headless-arch
  Batch Imports Optimization -> /batch_imports
Backend Engineering -> #
  Mini Server Watch Board -> /server_dashboard.md
GitHub -> https://github.com/Youngestdev (external)
";
        assert_eq!(actual, expected);
    }
}
