//! Markdown sources under `srcDir`, cross-checked against the navigation.

use std::collections::BTreeSet;
use std::path;

use relative_path::RelativePath;
use relative_path::RelativePathBuf;

use crate::nav;
use crate::nav::PageLink;
use crate::Result;
use crate::Status;

#[derive(Debug, Clone)]
pub struct SourceTree {
    files: Vec<RelativePathBuf>,
}

impl SourceTree {
    /// Collect every `.md` file below `root`, skipping hidden entries.
    pub fn scan(root: &path::Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(Status::new("Source directory does not exist")
                .context_with(|c| c.insert("Path", root.display().to_string())));
        }

        let mut files = Vec::new();
        let walker = walkdir::WalkDir::new(root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_hidden(e));
        for entry in walker {
            let entry = entry.map_err(|e| {
                Status::new("Failed to scan source directory")
                    .with_source(e)
                    .context_with(|c| c.insert("Path", root.display().to_string()))
            })?;
            if !entry.file_type().is_file() || !is_markdown(entry.path()) {
                continue;
            }
            let Some(rel) = entry
                .path()
                .strip_prefix(root)
                .ok()
                .and_then(|p| RelativePathBuf::from_path(p).ok())
            else {
                log::trace!("{}: not representable below source root", entry.path().display());
                continue;
            };
            files.push(rel);
        }

        log::debug!("Found {} markdown files in {}", files.len(), root.display());
        Ok(Self { files })
    }

    pub fn files(&self) -> &[RelativePathBuf] {
        &self.files
    }

    /// Route a source file is published under.
    pub fn route_of(file: &RelativePath) -> String {
        nav::normalize_route(file.as_str())
    }

    pub fn contains_route(&self, route: &str) -> bool {
        nav::source_candidates(route)
            .iter()
            .any(|candidate| self.files.contains(candidate))
    }
}

/// Navigation routes without a source file, and sources not in the navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageAudit {
    pub missing: Vec<PageLink>,
    pub orphans: Vec<RelativePathBuf>,
}

impl PageAudit {
    pub fn new(pages: &[PageLink], tree: &SourceTree) -> Self {
        let missing = pages
            .iter()
            .filter(|p| !tree.contains_route(&p.route))
            .cloned()
            .collect();

        let linked: BTreeSet<_> = pages.iter().map(|p| nav::normalize_route(&p.route)).collect();
        let orphans = tree
            .files()
            .iter()
            .filter(|f| !linked.contains(&SourceTree::route_of(f)))
            .cloned()
            .collect();

        Self { missing, orphans }
    }

    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.orphans.is_empty()
    }
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|s| s.starts_with('.') || s.starts_with('_'))
            .unwrap_or(false)
}

fn is_markdown(path: &path::Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("md")
}
