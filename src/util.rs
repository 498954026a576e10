//! Utility functions for route handling

use anyhow::{Result, bail};
use std::path::PathBuf;

/// Builds an href for an internal route under the deployment base path.
///
/// # Arguments
///
/// * `base_path`: Deployment prefix without trailing slash (empty for root)
/// * `route`: Route path starting with `/`
///
/// # Returns
///
/// Link target string, e.g. `/school/about` for base `/school`
pub fn href(base_path: &str, route: &str) -> String {
    format!("{}{}", base_path, route)
}

/// Validates a route path before it is mapped to an output file.
///
/// # Errors
///
/// Returns error if the route is not absolute or contains `..`
pub fn validate_route(route: &str) -> Result<()> {
    if !route.starts_with('/') {
        bail!("Route must start with '/': {}", route);
    }
    if route.contains("..") {
        bail!("Route contains directory traversal: {}", route);
    }
    Ok(())
}

/// Maps a route to its HTML file relative to the output directory.
///
/// `/` becomes `index.html`, `/about` becomes `about/index.html`.
///
/// # Errors
///
/// Returns error if the route fails validation
pub fn route_file(route: &str) -> Result<PathBuf> {
    validate_route(route)?;

    let mut path = PathBuf::new();
    for segment in route.split('/').filter(|s| !s.is_empty()) {
        path.push(segment);
    }
    path.push("index.html");
    Ok(path)
}
