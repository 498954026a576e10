//! Landing page hero banner

use maud::{Markup, html};

use super::icons::icon;
use crate::content::{ABOUT_PATH, ADMISSIONS_PATH, HERO_IMAGE, HERO_IMAGE_ALT};
use crate::util::href;

/// Renders the hero banner with headline, calls to action and image.
pub fn hero(base_path: &str) -> Markup {
    html! {
        section class="relative overflow-hidden bg-gradient-to-br from-blue-50 via-white to-blue-50 py-20 sm:py-28" {
            div class="absolute inset-0 bg-grid -z-10" {}

            div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8" {
                div class="grid lg:grid-cols-2 gap-12 items-center" {
                    div class="space-y-8 fade-in-up" {
                        div class="inline-flex items-center space-x-2 rounded-2xl bg-blue-100 px-4 py-2 text-blue-700" {
                            (icon("ph ph-sparkle", "text-base"))
                            span class="text-sm font-medium" { "Welcome to Excellence" }
                        }

                        h1 class="text-4xl sm:text-5xl lg:text-6xl font-extrabold text-gray-900 leading-tight" {
                            "Empowering Future Leaders Through "
                            span class="text-blue-700" { "Quality Education" }
                        }

                        p class="text-lg sm:text-xl text-gray-600 leading-relaxed" {
                            "Where curiosity meets excellence. Join our community of learners "
                            "and unlock your full potential in a supportive, innovative "
                            "environment."
                        }

                        div class="flex flex-col sm:flex-row gap-4" {
                            a href=(href(base_path, ADMISSIONS_PATH))
                                class="inline-flex items-center justify-center rounded-2xl bg-blue-700 px-6 py-4 font-medium text-white shadow-sm hover:bg-blue-800 hover:shadow-md transition-all group" {
                                "Enroll Now"
                                (icon("ph ph-arrow-right", "ml-2 text-xl group-hover:translate-x-1 transition-transform"))
                            }
                            a href=(href(base_path, ABOUT_PATH))
                                class="inline-flex items-center justify-center rounded-2xl px-6 py-4 font-medium border-2 border-gray-300 hover:bg-gray-50 transition-all" {
                                "Learn More"
                            }
                        }
                    }

                    div class="relative fade-in-scale" {
                        div class="aspect-square rounded-2xl bg-gradient-to-br from-blue-700 to-blue-500 p-1 shadow-2xl" {
                            div class="h-full w-full rounded-2xl bg-white overflow-hidden" {
                                img src=(HERO_IMAGE) alt=(HERO_IMAGE_ALT) class="h-full w-full object-cover" loading="eager";
                            }
                        }

                        div class="absolute -bottom-6 -right-6 rounded-2xl bg-white p-4 shadow-xl border border-gray-100 hidden sm:block" {
                            div class="flex items-center space-x-3" {
                                div class="rounded-2xl bg-green-100 p-2" {
                                    (icon("ph-bold ph-check", "text-2xl text-green-600"))
                                }
                                div {
                                    p class="text-sm font-bold text-gray-900" { "98% Success Rate" }
                                    p class="text-xs text-gray-600" { "Student Achievement" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
