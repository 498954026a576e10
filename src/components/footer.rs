//! Site footer with brand, quick links, contact details and social links

use maud::{Markup, html};

use super::icons::{icon, logo_mark};
use crate::content::{CONTACT, NAV_LINKS, SCHOOL_NAME, SOCIAL_LINKS, TAGLINE};
use crate::util::href;

/// Renders the site footer.
///
/// Quick links reuse the navigation list but carry no active highlighting.
/// Social links open in a new tab.
///
/// # Arguments
///
/// * `year`: Year shown in the copyright line
/// * `base_path`: Deployment prefix for internal hrefs
///
/// # Returns
///
/// Footer markup (`contentinfo` landmark)
pub fn footer(year: i32, base_path: &str) -> Markup {
    html! {
        footer class="bg-gray-900 text-gray-300" {
            div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12" {
                div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8" {
                    div class="space-y-4" {
                        a href=(href(base_path, "/")) class="flex items-center space-x-2 group" {
                            (logo_mark())
                            span class="text-xl font-extrabold text-white" { (SCHOOL_NAME) }
                        }
                        p class="text-sm leading-relaxed" { (TAGLINE) }
                    }

                    div {
                        h3 class="text-white font-bold mb-4" { "Quick Links" }
                        ul class="space-y-2" {
                            @for link in NAV_LINKS {
                                li {
                                    a href=(href(base_path, link.path)) class="text-sm hover:text-blue-400 transition-colors" {
                                        (link.label)
                                    }
                                }
                            }
                        }
                    }

                    div {
                        h3 class="text-white font-bold mb-4" { "Contact Us" }
                        ul class="space-y-3" {
                            li class="flex items-start space-x-2" {
                                (icon("ph ph-map-pin", "text-xl text-blue-400 flex-shrink-0 mt-0.5"))
                                span class="text-sm" { (CONTACT.address) }
                            }
                            li class="flex items-center space-x-2" {
                                (icon("ph ph-phone", "text-xl text-blue-400 flex-shrink-0"))
                                a href=(CONTACT.phone_href) class="text-sm hover:text-blue-400 transition-colors" {
                                    (CONTACT.phone_display)
                                }
                            }
                            li class="flex items-center space-x-2" {
                                (icon("ph ph-envelope", "text-xl text-blue-400 flex-shrink-0"))
                                a href=(format!("mailto:{}", CONTACT.email)) class="text-sm hover:text-blue-400 transition-colors" {
                                    (CONTACT.email)
                                }
                            }
                        }
                    }

                    div {
                        h3 class="text-white font-bold mb-4" { "Follow Us" }
                        div class="flex space-x-3" {
                            @for social in SOCIAL_LINKS {
                                a href=(social.href)
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=(social.label)
                                    class="rounded-2xl bg-gray-800 p-2.5 hover:bg-blue-700 transition-all hover:scale-110" {
                                    (icon(social.icon, "text-xl"))
                                }
                            }
                        }
                    }
                }

                div class="mt-12 pt-8 border-t border-gray-800 text-center" {
                    p class="text-sm" {
                        "© " (year) " " (SCHOOL_NAME) ". All rights reserved."
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_landmark() {
        // Arrange & Act
        let html = footer(2024, "").into_string();

        // Assert
        assert!(html.starts_with("<footer"), "Should render contentinfo landmark");
    }

    #[test]
    fn test_footer_brand_section() {
        // Arrange & Act
        let html = footer(2024, "").into_string();

        // Assert
        assert!(html.contains("Northgate School"));
        assert!(html.contains(
            "Empowering future leaders through quality education. Where curiosity meets excellence."
        ));
        assert!(html.contains(r#"data-testid="graduation-cap-icon""#));
    }

    #[test]
    fn test_footer_quick_links() {
        // Arrange & Act
        let html = footer(2024, "").into_string();

        // Assert
        assert!(html.contains("Quick Links"));
        for link in NAV_LINKS {
            assert!(
                html.contains(&format!(r#"href="{}""#, link.path)),
                "Missing quick link {}",
                link.path
            );
            assert!(html.contains(&format!(">{}</a>", link.label)));
        }
        assert!(!html.contains("aria-current"), "Footer links are never active");
    }

    #[test]
    fn test_footer_contact_information() {
        // Arrange & Act
        let html = footer(2024, "").into_string();

        // Assert
        assert!(html.contains("123 Education Street, Learning City, LC 12345"));
        assert!(html.contains(r#"href="tel:+1234567890""#));
        assert!(html.contains("+1 (234) 567-890"));
        assert!(html.contains(r#"href="mailto:info@northgateschool.edu""#));
    }

    #[test]
    fn test_footer_social_links() {
        // Arrange & Act
        let html = footer(2024, "").into_string();

        // Assert
        for label in ["Facebook", "Twitter", "Instagram", "LinkedIn"] {
            assert!(html.contains(&format!(r#"aria-label="{}""#, label)));
        }
        assert_eq!(html.matches(r#"target="_blank""#).count(), 4);
        assert_eq!(html.matches(r#"rel="noopener noreferrer""#).count(), 4);
    }

    #[test]
    fn test_footer_copyright_year() {
        // Arrange & Act
        let html = footer(2024, "").into_string();

        // Assert
        assert!(html.contains("© 2024 Northgate School. All rights reserved."));
    }
}
