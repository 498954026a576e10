//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

use super::footer::footer;
use super::navbar::navbar;
use crate::content::ACADEMY_NAME;
use crate::nav::MenuState;
use crate::util::href;

/// Per-page rendering context supplied by the site generator.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    /// Route of the page being rendered, used for active link detection
    pub route: &'a str,
    /// Deployment prefix for internal hrefs
    pub base_path: &'a str,
    /// Copyright year
    pub year: i32,
}

/// Wraps page content with standard HTML structure
///
/// Provides DOCTYPE, head, navigation bar and footer around page-specific
/// body content. The navigation bar is rendered for `ctx.route` with the
/// mobile menu closed.
///
/// # Arguments
///
/// * `ctx`: Route, base path and year for the page
/// * `title`: Page title text (without suffix)
/// * `body`: Page-specific main content
///
/// # Returns
///
/// Complete HTML document
pub fn page_wrapper(ctx: &PageContext<'_>, title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - " (ACADEMY_NAME) }
                script src="https://cdn.tailwindcss.com" {}
                script src="https://unpkg.com/@phosphor-icons/web" {}
                link rel="stylesheet" href=(href(ctx.base_path, "/assets/site.css"));
                script src=(href(ctx.base_path, "/assets/menu.js")) defer {}
            }
            body class="min-h-screen bg-white font-sans antialiased" {
                (navbar(ctx.route, MenuState::default(), ctx.base_path))
                main {
                    (body)
                }
                (footer(ctx.year, ctx.base_path))
            }
        }
    }
}
