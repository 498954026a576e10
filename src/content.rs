//! Static site content: brand names, link lists, contact details and copy.

use crate::nav::NavLink;

pub const ACADEMY_NAME: &str = "Northgate Academy";
pub const SCHOOL_NAME: &str = "Northgate School";
pub const TAGLINE: &str =
    "Empowering future leaders through quality education. Where curiosity meets excellence.";

/// Primary navigation, in display order.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink::new("/", "Home"),
    NavLink::new("/about", "About"),
    NavLink::new("/courses", "Courses"),
    NavLink::new("/teachers", "Teachers"),
    NavLink::new("/admissions", "Admissions"),
    NavLink::new("/contact", "Contact"),
];

/// Target of every "Apply Now" and "Enroll Now" call to action.
pub const ADMISSIONS_PATH: &str = "/admissions";
pub const ABOUT_PATH: &str = "/about";

pub struct ContactInfo {
    pub address: &'static str,
    pub phone_display: &'static str,
    pub phone_href: &'static str,
    pub email: &'static str,
}

pub const CONTACT: ContactInfo = ContactInfo {
    address: "123 Education Street, Learning City, LC 12345",
    phone_display: "+1 (234) 567-890",
    phone_href: "tel:+1234567890",
    email: "info@northgateschool.edu",
};

pub struct SocialLink {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        href: "https://facebook.com",
        label: "Facebook",
        icon: "ph ph-facebook-logo",
    },
    SocialLink {
        href: "https://twitter.com",
        label: "Twitter",
        icon: "ph ph-twitter-logo",
    },
    SocialLink {
        href: "https://instagram.com",
        label: "Instagram",
        icon: "ph ph-instagram-logo",
    },
    SocialLink {
        href: "https://linkedin.com",
        label: "LinkedIn",
        icon: "ph ph-linkedin-logo",
    },
];

pub const HERO_IMAGE: &str = "https://images.pexels.com/photos/8500704/pexels-photo-8500704.jpeg?auto=compress&cs=tinysrgb&w=800";
pub const HERO_IMAGE_ALT: &str =
    "Students engaged in collaborative learning in a modern classroom environment";

pub const ABOUT_IMAGE: &str = "https://images.pexels.com/photos/8500657/pexels-photo-8500657.jpeg?auto=compress&cs=tinysrgb&w=800";
pub const ABOUT_IMAGE_ALT: &str =
    "Students and teachers collaborating in a modern learning environment";

/// Heading and lead paragraph for routes without a dedicated layout.
pub fn page_intro(path: &str) -> Option<(&'static str, &'static str)> {
    let intro = match path {
        "/about" => (
            "About Northgate",
            "Over 25 years of nurturing curious minds and building the leaders of tomorrow.",
        ),
        "/courses" => (
            "Our Courses",
            "A broad curriculum spanning sciences, humanities, arts and technology.",
        ),
        "/teachers" => (
            "Meet Our Teachers",
            "Dedicated educators who bring expertise and care to every classroom.",
        ),
        "/admissions" => (
            "Admissions",
            "Join our community of learners. Applications are open for the coming year.",
        ),
        "/contact" => (
            "Contact Us",
            "We would love to hear from you. Reach out with any questions.",
        ),
        _ => return None,
    };
    Some(intro)
}
