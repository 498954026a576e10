//! Landing page composed of the hero banner and about preview

use maud::{Markup, html};

use crate::components::about_preview::about_preview;
use crate::components::hero::hero;
use crate::components::layout::{PageContext, page_wrapper};

/// Generates the landing page.
pub fn generate(ctx: &PageContext<'_>) -> Markup {
    page_wrapper(
        ctx,
        "Home",
        html! {
            (hero(ctx.base_path))
            (about_preview(ctx.base_path))
        },
    )
}
