//! Static asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const SITE_CSS: &str = include_str!("../assets/site.css");
const MENU_JS: &str = include_str!("../assets/menu.js");

/// Bundled assets written below `<output>/assets`, as (file name, content).
pub const ASSETS: &[(&str, &str)] = &[("site.css", SITE_CSS), ("menu.js", MENU_JS)];

/// Writes all bundled assets to the assets directory
///
/// # Errors
///
/// Returns error if the directory cannot be created or a file write fails
pub fn write_assets(assets_dir: &Path) -> Result<()> {
    fs::create_dir_all(assets_dir).context("Failed to create assets directory")?;
    for (name, content) in ASSETS {
        write_asset(assets_dir, name, content)?;
    }
    Ok(())
}

fn write_asset(dir: &Path, name: &str, content: &str) -> Result<()> {
    fs::write(dir.join(name), content)
        .with_context(|| format!("Failed to write asset: {}", name))?;
    tracing::debug!(asset = name, "wrote asset");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_assets_creates_files() {
        // Arrange
        let dir = TempDir::new().expect("temp dir");
        let assets_dir = dir.path().join("assets");

        // Act
        let result = write_assets(&assets_dir);

        // Assert
        assert!(result.is_ok());
        for (name, content) in ASSETS {
            let written = std::fs::read_to_string(assets_dir.join(name))
                .unwrap_or_else(|_| panic!("{} should exist", name));
            assert_eq!(written, *content, "{} should match bundled content", name);
        }
    }

    #[test]
    fn test_assets_table_names_unique() {
        // Arrange
        let mut names: Vec<&str> = ASSETS.iter().map(|(name, _)| *name).collect();

        // Act
        names.sort_unstable();
        names.dedup();

        // Assert
        assert_eq!(names.len(), ASSETS.len());
        assert!(names.contains(&"site.css") && names.contains(&"menu.js"));
    }

    #[test]
    fn test_menu_script_handles_trigger_and_links() {
        // Arrange & Act & Assert
        assert!(MENU_JS.contains("[data-menu-trigger]"));
        assert!(MENU_JS.contains("[data-menu-close]"));
        assert!(MENU_JS.contains("data-open"));
    }

    #[test]
    fn test_site_css_hides_closed_panel() {
        // Arrange & Act & Assert
        assert!(SITE_CSS.contains(".sheet-panel[hidden]"));
    }
}
