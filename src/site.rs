//! Whole-site generation: renders every route and writes it with assets.

use anyhow::{Context, Result};
use maud::Markup;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::assets::write_assets;
use crate::components::layout::PageContext;
use crate::content::{NAV_LINKS, page_intro};
use crate::pages;
use crate::util::route_file;

/// Options for a generation run.
#[derive(Debug, Clone)]
pub struct SiteOptions {
    pub output: PathBuf,
    pub base_path: String,
    pub year: i32,
}

/// Files written by a generation run.
#[derive(Debug, Default)]
pub struct SiteReport {
    pub pages: Vec<PathBuf>,
    pub assets_dir: PathBuf,
}

/// Renders the page for a route.
///
/// `/` renders the landing page; routes with a known intro render a
/// heading page. Returns `None` for routes the site has no content for.
pub fn render_route(route: &str, base_path: &str, year: i32) -> Option<Markup> {
    let ctx = PageContext {
        route,
        base_path,
        year,
    };

    if route == "/" {
        return Some(pages::home::generate(&ctx));
    }

    page_intro(route).map(|(title, lead)| pages::section::generate(&ctx, title, lead))
}

/// Generates the complete site into `options.output`.
///
/// Writes one `index.html` per navigation route plus bundled assets.
///
/// # Errors
///
/// Returns error if a route is invalid, has no content, or a file write fails
#[instrument(skip_all, fields(output = %options.output.display()))]
pub fn generate_site(options: &SiteOptions) -> Result<SiteReport> {
    fs::create_dir_all(&options.output).context("Failed to create output directory")?;

    let assets_dir = options.output.join("assets");
    write_assets(&assets_dir)?;

    let mut report = SiteReport {
        pages: Vec::with_capacity(NAV_LINKS.len()),
        assets_dir,
    };

    for link in NAV_LINKS {
        let markup = render_route(link.path, &options.base_path, options.year)
            .with_context(|| format!("No page content for route {}", link.path))?;

        let page_path = write_page(&options.output, link.path, markup)
            .with_context(|| format!("Failed to generate page for {}", link.path))?;

        info!(route = link.path, path = %page_path.display(), "generated page");
        report.pages.push(page_path);
    }

    info!(pages = report.pages.len(), "site generated");
    Ok(report)
}

fn write_page(output: &Path, route: &str, markup: Markup) -> Result<PathBuf> {
    let page_path = output.join(route_file(route)?);

    if let Some(parent) = page_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    fs::write(&page_path, markup.into_string())
        .with_context(|| format!("Failed to write page {}", page_path.display()))?;

    Ok(page_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_render_route_home() {
        // Arrange & Act
        let html = render_route("/", "", 2024).map(Markup::into_string);

        // Assert
        let html = html.expect("home should render");
        assert!(html.contains("Welcome to Excellence"));
    }

    #[test]
    fn test_render_route_section() {
        // Arrange & Act
        let html = render_route("/teachers", "", 2024).map(Markup::into_string);

        // Assert
        let html = html.expect("teachers should render");
        assert!(html.contains("Meet Our Teachers"));
        assert!(html.contains(r#"aria-current="page">Teachers</a>"#));
    }

    #[test]
    fn test_render_route_unknown() {
        // Arrange & Act & Assert
        assert!(render_route("/news", "", 2024).is_none());
    }

    #[test]
    fn test_generate_site_writes_every_route() {
        // Arrange
        let dir = TempDir::new().expect("temp dir");
        let options = SiteOptions {
            output: dir.path().join("dist"),
            base_path: String::new(),
            year: 2024,
        };

        // Act
        let report = generate_site(&options).expect("generation should succeed");

        // Assert
        assert_eq!(report.pages.len(), NAV_LINKS.len());
        assert!(options.output.join("index.html").exists());
        assert!(options.output.join("about").join("index.html").exists());
        assert!(options.output.join("contact").join("index.html").exists());
        assert!(report.assets_dir.join("menu.js").exists());
    }
}
