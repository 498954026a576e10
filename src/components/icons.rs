//! Phosphor icon rendering

use maud::{Markup, html};

/// Renders a decorative Phosphor icon hidden from assistive technology.
///
/// # Arguments
///
/// * `icon_class`: Phosphor class pair, e.g. `ph ph-arrow-right`
/// * `extra`: Additional utility classes for sizing and color
///
/// # Returns
///
/// Icon markup with `aria-hidden="true"`
pub fn icon(icon_class: &str, extra: &str) -> Markup {
    let class = if extra.is_empty() {
        icon_class.to_string()
    } else {
        format!("{} {}", icon_class, extra)
    };

    html! {
        i class=(class) aria-hidden="true" {}
    }
}

/// Renders the school logo mark: a graduation cap in a gradient tile.
pub fn logo_mark() -> Markup {
    html! {
        div class="rounded-2xl bg-gradient-to-br from-blue-700 to-blue-500 p-2 transition-transform group-hover:scale-105" {
            i class="ph-fill ph-graduation-cap text-2xl leading-none text-white"
                aria-hidden="true"
                data-testid="graduation-cap-icon" {}
        }
    }
}
