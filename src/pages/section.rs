//! Standard content page with a heading section

use maud::{Markup, html};

use crate::components::layout::{PageContext, page_wrapper};

/// Generates a page with a heading banner and lead paragraph.
///
/// # Arguments
///
/// * `ctx`: Page context for the route being rendered
/// * `title`: Document title and banner heading
/// * `lead`: Introductory paragraph below the heading
///
/// # Returns
///
/// Complete HTML document
pub fn generate(ctx: &PageContext<'_>, title: &str, lead: &str) -> Markup {
    page_wrapper(
        ctx,
        title,
        html! {
            section class="bg-gradient-to-br from-blue-50 via-white to-blue-50 py-20" {
                div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 space-y-4" {
                    h1 class="text-4xl sm:text-5xl font-extrabold text-gray-900" { (title) }
                    p class="text-lg text-gray-600 leading-relaxed max-w-3xl" { (lead) }
                }
            }
        },
    )
}
