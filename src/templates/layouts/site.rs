use maud::{html, Markup, DOCTYPE};

pub const SITE_NAME: &str = "Aaram Luxury Living";
pub const CONTACT_PHONE: &str = "+91 92843 88074";
pub const CONTACT_PHONE_HREF: &str = "tel:+919284388074";
pub const CONTACT_EMAIL: &str = "contact@aaramluxury.com";
pub const CONTACT_ADDRESS: &str = "Plot 803, Sector 42, Gurugram, Haryana 122001";

const NAV_LINKS: [(&str, &str); 5] = [
    ("About", "/#about"),
    ("Rooms", "/#rooms"),
    ("Amenities", "/#amenities"),
    ("Gallery", "/#gallery"),
    ("Contact", "/#contact"),
];

pub fn site_layout(title: &str, description: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(description);
                title { (title) }
                link rel="stylesheet" href="/static/site.css";
            }
            body {
                header class="site-header" {
                    a href="/" class="brand" { (SITE_NAME) }
                    nav {
                        ul {
                            @for (label, href) in NAV_LINKS {
                                li { a href=(href) { (label) } }
                            }
                        }
                    }
                    a href="/contact" class="btn btn-gold" { "Book Now" }
                }

                (content)

                (site_footer())
            }
        }
    }
}

fn site_footer() -> Markup {
    html! {
        footer class="site-footer" {
            div class="footer-grid" {
                div {
                    h3 class="gold" { (SITE_NAME) }
                    p {
                        "Redefining luxury living with our exclusive collection of premium rooms and exceptional services."
                    }
                }
                div {
                    h4 { "Quick Links" }
                    ul {
                        li { a href="/#about" { "About Us" } }
                        li { a href="/#rooms" { "Our Rooms" } }
                        li { a href="/#amenities" { "Amenities" } }
                        li { a href="/#gallery" { "Gallery" } }
                        li { a href="/#contact" { "Contact" } }
                    }
                }
                div {
                    h4 { "Services" }
                    ul {
                        li { a href="/#rooms" { "Short Stays" } }
                        li { a href="/#rooms" { "Long Term Residences" } }
                        li { a href="/#amenities" { "Concierge Services" } }
                        li { a href="/#amenities" { "Dining Experience" } }
                    }
                }
            }
            p class="copyright" {
                "© " (chrono::Utc::now().format("%Y").to_string()) " " (SITE_NAME) ". All rights reserved."
            }
        }
    }
}
