/// Path used by group headers that have no page of their own.
pub const PLACEHOLDER_PATH: &str = "#";

/// Maximum nesting the sidebar renders.
pub const MAX_NAV_DEPTH: usize = 2;

/// One entry of the navigation tree.
///
/// Entries keep their declared order; that order is the sidebar order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
pub struct NavNode {
    pub title: String,
    pub path: String,
    /// Lucide icon name, in kebab-case.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Link leaves the site and bypasses internal routing.
    #[serde(default, skip_serializing_if = "is_false")]
    pub external: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub collapsible: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavNode>,
}

/// How a [`NavNode`] path is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget<'a> {
    /// `#`, a group header.
    Placeholder,
    /// A page route such as `/recursion`.
    Route(&'a str),
    /// An off-site URL.
    External(&'a str),
}

impl NavNode {
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            icon: None,
            external: false,
            collapsible: false,
            children: Vec::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_external(mut self, yes: bool) -> Self {
        self.external = yes;
        self
    }

    pub fn with_children(mut self, children: Vec<NavNode>) -> Self {
        self.collapsible = true;
        self.children = children;
        self
    }

    pub fn target(&self) -> NavTarget<'_> {
        if self.external {
            NavTarget::External(&self.path)
        } else if self.path == PLACEHOLDER_PATH {
            NavTarget::Placeholder
        } else {
            NavTarget::Route(&self.path)
        }
    }

    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }

    /// Levels in this subtree, counting the node itself.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(NavNode::depth).max().unwrap_or(0)
    }

    /// Pre-order walk over this node and its descendants.
    pub fn walk(&self) -> impl Iterator<Item = &NavNode> + '_ {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[cfg(test)]
mod test {
    use super::*;

    fn fisco() -> NavNode {
        NavNode::new("Building Fisco", "#")
            .with_icon("building-2")
            .with_children(vec![
                NavNode::new("Headless Commerce Architecture", "/fisco-headless-arch"),
                NavNode::new("Batch Imports Optimization", "/batch_imports"),
            ])
    }

    #[test]
    fn target_placeholder() {
        assert_eq!(fisco().target(), NavTarget::Placeholder);
        assert_eq!(
            fisco().with_external(true).target(),
            NavTarget::External("#")
        );
    }

    #[test]
    fn target_route() {
        let node = NavNode::new("Welcome", "/");
        assert_eq!(node.target(), NavTarget::Route("/"));
    }

    #[test]
    fn target_external() {
        let node = NavNode::new("GitHub", "https://github.com/Youngestdev").with_external(true);
        assert_eq!(
            node.target(),
            NavTarget::External("https://github.com/Youngestdev")
        );
    }

    #[test]
    fn depth_counts_levels() {
        assert_eq!(NavNode::new("Welcome", "/").depth(), 1);
        assert_eq!(fisco().depth(), 2);
        let deep = NavNode::new("a", "#").with_children(vec![fisco()]);
        assert_eq!(deep.depth(), 3);
    }

    #[test]
    fn walk_is_preorder() {
        let titles: Vec<_> = fisco().walk().map(|n| n.title.clone()).collect();
        assert_eq!(
            titles,
            [
                "Building Fisco",
                "Headless Commerce Architecture",
                "Batch Imports Optimization"
            ]
        );
    }

    #[test]
    fn optional_keys_are_omitted() {
        let yaml = serde_yaml::to_string(&NavNode::new("Welcome", "/").with_icon("home")).unwrap();
        assert_eq!(yaml, "title: Welcome\npath: /\nicon: home\n");
    }

    #[test]
    fn missing_title_is_rejected() {
        let result: Result<NavNode, _> = serde_yaml::from_str("path: /\n");
        assert!(result.is_err());
    }
}
