use std::fs;
use std::io::Write;
use std::path;

use crate::Result;
use crate::Status;

const DOCMD_YML: &str = "# docmd site descriptor
siteTitle: My Documentation
# No trailing slash
siteUrl: https://example.com

srcDir: docs
outputDir: site

search: true
minify: true

sidebar:
  collapsible: true
  defaultCollapsed: false

theme:
  name: default
  defaultMode: light
  enableModeToggle: true
  positionMode: top
  codeHighlight: true
  customCss: []

# Loaded at the end of <body>, in order
customJs: []

plugins:
  seo:
    defaultDescription: Documentation built with docmd.
  sitemap:
    defaultChangefreq: weekly
    defaultPriority: 0.8

navigation:
  - title: Home
    path: /
    icon: home

footer: '© {{ year }} My Documentation.'
";

const INDEX_MD: &str = "# Welcome

Start writing your documentation here.
";

/// Scaffold a descriptor and an index page under `dest`.
///
/// Existing files are left untouched unless `force` is set.
pub fn create_new_project<P: AsRef<path::Path>>(dest: P, force: bool) -> Result<()> {
    create_new_project_for_path(dest.as_ref(), force)
}

fn create_new_project_for_path(dest: &path::Path, force: bool) -> Result<()> {
    fs::create_dir_all(dest).map_err(|e| {
        Status::new("Failed to create project directory")
            .with_source(e)
            .context_with(|c| c.insert("Path", dest.display().to_string()))
    })?;

    let descriptor = dest.join("docmd.yml");
    if descriptor.exists() && !force {
        return Err(Status::new("Descriptor already exists, use --force to overwrite")
            .context_with(|c| c.insert("Path", descriptor.display().to_string())));
    }
    create_file(&descriptor, DOCMD_YML)?;

    let docs = dest.join("docs");
    fs::create_dir_all(&docs).map_err(|e| {
        Status::new("Failed to create source directory")
            .with_source(e)
            .context_with(|c| c.insert("Path", docs.display().to_string()))
    })?;
    let index = docs.join("index.md");
    if index.exists() {
        log::debug!("Keeping existing {}", index.display());
    } else {
        create_file(&index, INDEX_MD)?;
    }

    Ok(())
}

fn create_file(path: &path::Path, content: &str) -> Result<()> {
    log::trace!("Creating file {}", path.display());

    let mut file = fs::File::create(path).map_err(|e| {
        Status::new("Failed to create file")
            .with_source(e)
            .context_with(|c| c.insert("Path", path.display().to_string()))
    })?;
    file.write_all(content.as_bytes()).map_err(|e| {
        Status::new("Failed to write file")
            .with_source(e)
            .context_with(|c| c.insert("Path", path.display().to_string()))
    })?;

    log::info!("Created {}", path.display());
    Ok(())
}
