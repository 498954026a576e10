//! Site navigation bar with desktop link row and mobile slide-in sheet

use maud::{Markup, html};

use super::icons::{icon, logo_mark};
use crate::content::{ACADEMY_NAME, ADMISSIONS_PATH, NAV_LINKS};
use crate::nav::{MenuState, NavLink, active_links};
use crate::util::href;

const ACTIVE_CLASSES: &str = "bg-blue-700 text-white shadow-sm";
const INACTIVE_CLASSES: &str = "text-gray-600 hover:bg-gray-100 hover:text-gray-900";
const CTA_CLASSES: &str = "rounded-2xl bg-blue-700 px-5 font-medium text-white shadow-sm hover:bg-blue-800 hover:shadow-md transition-all";

/// Id of the mobile panel, referenced by the trigger's `aria-controls`.
pub const MOBILE_MENU_ID: &str = "mobile-menu";

/// Returns highlight classes for a navigation link.
pub fn link_classes(base: &str, active: bool) -> String {
    let state = if active {
        ACTIVE_CLASSES
    } else {
        INACTIVE_CLASSES
    };
    format!("{} {}", base, state)
}

/// Renders the navigation bar for the page at `current_path`.
///
/// Both the desktop row and the mobile sheet mark the link whose path
/// equals `current_path` with highlight classes and `aria-current="page"`.
/// `menu` controls the initial visibility of the mobile sheet. The sheet's
/// close button and every link inside it carry `data-menu-close` so the
/// client runtime collapses the panel on activation.
///
/// # Arguments
///
/// * `current_path`: Route of the page being rendered
/// * `menu`: Mobile menu state to render
/// * `base_path`: Deployment prefix for internal hrefs
///
/// # Returns
///
/// Header markup containing the full navigation
pub fn navbar(current_path: &str, menu: MenuState, base_path: &str) -> Markup {
    navbar_with_links(current_path, NAV_LINKS, menu, base_path)
}

/// Renders the navigation bar for an arbitrary link list.
pub fn navbar_with_links(
    current_path: &str,
    links: &[NavLink],
    menu: MenuState,
    base_path: &str,
) -> Markup {
    let is_open = menu.is_open();
    let open_attr = if is_open { "true" } else { "false" };

    html! {
        header class="sticky top-0 z-50 w-full border-b bg-white/95 backdrop-blur supports-[backdrop-filter]:bg-white/60" {
            nav class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8" aria-label="Main navigation" {
                div class="flex h-16 items-center justify-between" {
                    a href=(href(base_path, "/")) class="flex items-center space-x-2 group" {
                        (logo_mark())
                        span class="text-xl font-extrabold text-gray-900" { (ACADEMY_NAME) }
                    }

                    div class="hidden md:flex md:items-center md:space-x-1" {
                        @for (link, active) in active_links(current_path, links) {
                            a href=(href(base_path, link.path))
                                class=(link_classes("rounded-2xl px-4 py-2 text-sm font-medium transition-all", active))
                                aria-current=[active.then_some("page")] {
                                (link.label)
                            }
                        }
                        a href=(href(base_path, ADMISSIONS_PATH)) class=(format!("ml-4 py-2.5 {}", CTA_CLASSES)) {
                            "Apply Now"
                        }
                    }

                    div class="md:hidden" data-testid="sheet" data-menu data-open=(open_attr) {
                        div data-testid="sheet-trigger" {
                            button type="button"
                                class="rounded-2xl p-2 text-gray-700 hover:bg-gray-100"
                                aria-label="Open menu"
                                aria-controls=(MOBILE_MENU_ID)
                                aria-expanded=(open_attr)
                                data-menu-trigger {
                                (icon("ph ph-list", "text-2xl"))
                            }
                        }
                        div id=(MOBILE_MENU_ID)
                            class="sheet-panel w-64"
                            data-testid="sheet-content"
                            data-side="right"
                            hidden[!is_open] {
                            div class="flex justify-end" {
                                button type="button"
                                    class="rounded-2xl p-2 text-gray-700 hover:bg-gray-100"
                                    aria-label="Close menu"
                                    data-menu-close {
                                    (icon("ph ph-x", "text-2xl"))
                                }
                            }
                            div class="flex flex-col space-y-4 mt-8" {
                                @for (link, active) in active_links(current_path, links) {
                                    a href=(href(base_path, link.path))
                                        class=(link_classes("rounded-2xl px-4 py-3 text-base font-medium transition-all", active))
                                        aria-current=[active.then_some("page")]
                                        data-menu-close {
                                        (link.label)
                                    }
                                }
                                a href=(href(base_path, ADMISSIONS_PATH))
                                    class=(format!("py-3 {}", CTA_CLASSES))
                                    data-menu-close {
                                    "Apply Now"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
