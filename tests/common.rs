//! Shared test utilities for integration tests.
//!
//! Provides helpers for generating the site into temporary directories and
//! slicing rendered markup.

#![allow(dead_code)]

use anyhow::Result;
use northgate::{SiteOptions, SiteReport, generate_site};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Year used by tests so the footer output is deterministic.
pub const TEST_YEAR: i32 = 2024;

/// Generates the full site into a fresh temporary directory.
///
/// # Errors
///
/// Returns error if directory creation or site generation fails
pub fn generate_test_site(base_path: &str) -> Result<(TempDir, SiteReport)> {
    let dir = TempDir::new()?;
    let options = SiteOptions {
        output: dir.path().to_path_buf(),
        base_path: base_path.to_string(),
        year: TEST_YEAR,
    };
    let report = generate_site(&options)?;
    Ok((dir, report))
}

/// Reads a generated page by route.
///
/// # Errors
///
/// Returns error if the route is invalid or the file cannot be read
pub fn read_page(output: &Path, route: &str) -> Result<String> {
    let path = output.join(northgate::route_file(route)?);
    Ok(fs::read_to_string(path)?)
}

/// Returns the desktop navigation row of a rendered page.
pub fn desktop_nav(html: &str) -> &str {
    slice_between(html, "hidden md:flex", r#"data-testid="sheet""#)
}

/// Returns the mobile sheet content of a rendered page.
pub fn sheet_content(html: &str) -> &str {
    slice_between(html, r#"data-testid="sheet-content""#, "</header>")
}

fn slice_between<'a>(html: &'a str, start: &str, end: &str) -> &'a str {
    let Some(from) = html.find(start) else {
        return "";
    };
    let rest = &html[from..];
    let to = rest.find(end).unwrap_or(rest.len());
    &rest[..to]
}
