//! About section preview shown on the landing page

use maud::{Markup, html};

use super::icons::icon;
use crate::content::{ABOUT_IMAGE, ABOUT_IMAGE_ALT, ABOUT_PATH, ACADEMY_NAME};
use crate::util::href;

/// Renders a mission or vision block.
fn pillar(icon_class: &str, title: &str, text: &str) -> Markup {
    html! {
        div class="flex items-start space-x-4" {
            div class="rounded-2xl bg-blue-100 p-3 flex-shrink-0" {
                (icon(icon_class, "text-2xl text-blue-700"))
            }
            div {
                h3 class="font-bold text-gray-900 mb-1" { (title) }
                p class="text-gray-600 text-sm leading-relaxed" { (text) }
            }
        }
    }
}

/// Renders the about preview with image, mission, vision and a link to
/// the full about page.
pub fn about_preview(base_path: &str) -> Markup {
    html! {
        section class="py-20 bg-white" {
            div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8" {
                div class="grid lg:grid-cols-2 gap-12 items-center" {
                    div class="relative fade-in-left" {
                        div class="rounded-2xl overflow-hidden shadow-xl" {
                            img src=(ABOUT_IMAGE) alt=(ABOUT_IMAGE_ALT)
                                width="800" height="500"
                                class="w-full h-[500px] object-cover" loading="lazy";
                        }
                        div class="absolute -bottom-6 -left-6 rounded-2xl bg-blue-700 text-white p-6 shadow-xl max-w-xs" {
                            p class="text-4xl font-extrabold" { "25+" }
                            p class="text-sm font-medium" { "Years of Excellence in Education" }
                        }
                    }

                    div class="space-y-6 fade-in-right" {
                        div {
                            p class="text-blue-700 font-semibold uppercase tracking-wide text-sm mb-2" {
                                "About Our School"
                            }
                            h2 class="text-3xl sm:text-4xl font-extrabold text-gray-900" {
                                "Building Foundations for Tomorrow's Leaders"
                            }
                        }

                        p class="text-gray-600 leading-relaxed text-lg" {
                            "At " (ACADEMY_NAME) ", we believe every student has unique talents "
                            "waiting to be discovered. Our dedicated faculty and modern "
                            "facilities create an environment where curiosity thrives and "
                            "excellence becomes a habit."
                        }

                        div class="space-y-4" {
                            (pillar(
                                "ph ph-target",
                                "Our Mission",
                                "To provide transformative education that nurtures critical thinking, creativity, and character.",
                            ))
                            (pillar(
                                "ph ph-eye",
                                "Our Vision",
                                "To be a beacon of educational excellence that inspires lifelong learning and global citizenship.",
                            ))
                        }

                        a href=(href(base_path, ABOUT_PATH))
                            class="inline-flex items-center rounded-2xl bg-blue-700 px-6 py-4 font-medium text-white shadow-sm hover:bg-blue-800 hover:shadow-md transition-all group" {
                            "Discover Our Story"
                            (icon("ph ph-arrow-right", "ml-2 text-xl group-hover:translate-x-1 transition-transform"))
                        }
                    }
                }
            }
        }
    }
}
