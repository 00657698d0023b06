// templates/pages/home.rs

use crate::domain::Listing;
use crate::templates::components::{button_link, contact_form, featured_room, room_card};
use crate::templates::layouts::site::{
    CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONE, CONTACT_PHONE_HREF, SITE_NAME,
};
use crate::templates::{section_heading, site_layout, ContactFormVm};
use maud::{html, Markup};

/// The homepage grid shows at most this many rooms.
pub const ROOM_GRID_LIMIT: usize = 6;

const AMENITIES: [(&str, &str); 3] = [
    (
        "24/7 Concierge",
        "Our dedicated staff is available around the clock to assist with any request, from restaurant reservations to travel arrangements.",
    ),
    (
        "Security Service",
        "Enjoy peace of mind with our comprehensive security system and 24-hour monitoring by professional staff.",
    ),
    (
        "Coffee Shop/Patisserie",
        "Indulge in fresh coffee and delectable pastries at our in-house café.",
    ),
];

const GALLERY: [&str; 12] = [
    "/images/IMG_5116-HDR.jpg",
    "/images/IMG_5120-HDR.jpg",
    "/images/IMG_5123-HDR.jpg",
    "/images/IMG_5135-HDR.jpg",
    "/images/IMG_5138-HDR.jpg",
    "/images/IMG_5144-HDR.jpg",
    "/images/IMG_5150-HDR.jpg",
    "/images/IMG_5153-HDR.jpg",
    "/images/IMG_5159-HDR.jpg",
    "/images/IMG_5162-HDR.jpg",
    "/images/IMG_5165-HDR.jpg",
    "/images/IMG_5177-HDR.jpg",
];

pub struct HomeVm<'a> {
    pub rooms: &'a [Listing],
    pub featured: Option<&'a Listing>,
    pub form: &'a ContactFormVm,
}

pub fn home_page(vm: &HomeVm) -> Markup {
    site_layout(
        &format!("{SITE_NAME} | Premium Accommodation Experience"),
        "Experience unrivaled luxury living at Aaram Luxury Living with our collection of 22 exceptional rooms for your perfect stay.",
        html! {
            main {
                (hero())
                (about())
                (mission_vision())
                (rooms_section(vm.rooms))
                @if let Some(room) = vm.featured {
                    (featured_room(room))
                }
                (amenities())
                (gallery())
                (booking_cta())
                (contact_section(vm.form))
            }
        },
    )
}

fn hero() -> Markup {
    html! {
        section id="hero" class="hero" {
            img src="/images/hero.jpg" alt="Aaram Luxury Living property exterior";
            div class="hero-content" {
                h1 {
                    span { "Experience Unrivaled" }
                    span class="gold" { "Luxury Living" }
                }
                p {
                    "Where timeless elegance meets modern comfort. A collection of 22 exceptional rooms for your perfect stay."
                }
                div class="actions" {
                    (button_link("Explore Rooms", "#rooms", "btn-gold"))
                    (button_link("Learn More", "#about", "btn-outline"))
                }
            }
        }
    }
}

fn about() -> Markup {
    html! {
        section id="about" class="section" {
            div class="split" {
                div {
                    (section_heading("About Us", "A Legacy of Luxury"))
                    p class="muted" {
                        "Aaram Luxury Living was founded with a singular vision: to create an unparalleled living experience that combines the comfort of home with the indulgence of a five-star hotel. Our exclusive property stands as a testament to craftsmanship, attention to detail, and a passion for luxury."
                    }
                    p class="muted" {
                        "Each of our 22 meticulously designed rooms offers a unique experience, catering to both short stays and extended residences. From hand-selected furnishings to personalized concierge services, we've crafted every aspect of your stay to exceed expectations."
                    }
                }
                img src="/images/IMG_5138-HDR.jpg" alt="Aaram Luxury Living space";
            }
        }
    }
}

fn mission_vision() -> Markup {
    html! {
        section id="mission" class="section alt" {
            (section_heading("Our Purpose", "Mission & Vision"))
            div class="split" {
                div class="panel" {
                    h3 { "Mission Statement" }
                    p class="muted" {
                        "At Aaram Luxury Living, we are committed to redefining the essence of luxury living by providing an unparalleled lifestyle experience. Situated in the heart of Gurugram, right on the prestigious Golf Course Road, we offer exceptional hospitality, state-of-the-art amenities, and bespoke services."
                    }
                    p class="muted" {
                        "Our mission is to create a serene and opulent sanctuary where comfort meets sophistication, ensuring every moment spent with us is one of pure indulgence and tranquility."
                    }
                }
                div class="panel" {
                    h3 { "Vision Statement" }
                    p class="muted" {
                        "To become the leading name in luxury real estate in India, offering a portfolio of extraordinary properties that set new standards for elegance, comfort, and hospitality."
                    }
                    p class="muted" {
                        "At Aaram Luxury Living, we envision a future where our brand symbolizes trust, exclusivity, and an unwavering commitment to providing a life of unparalleled luxury and sophistication, making every resident feel like royalty."
                    }
                }
            }
        }
    }
}

fn rooms_section(rooms: &[Listing]) -> Markup {
    html! {
        section id="rooms" class="section" {
            (section_heading("Accommodations", "Our Luxury Rooms"))
            p class="muted" {
                "Discover our collection of 22 impeccably designed rooms, each offering a unique blend of comfort and sophistication."
            }
            div class="room-grid" {
                @for room in rooms.iter().take(ROOM_GRID_LIMIT) {
                    (room_card(room))
                }
            }
        }
    }
}

fn amenities() -> Markup {
    html! {
        section id="amenities" class="section alt" {
            (section_heading("Services", "Exceptional Amenities"))
            p class="muted" {
                "Experience a wealth of premium services and facilities designed to enhance your stay."
            }
            div class="amenity-cards" {
                @for (title, description) in AMENITIES {
                    div class="panel" {
                        h3 { (title) }
                        p class="muted" { (description) }
                    }
                }
            }
        }
    }
}

fn gallery() -> Markup {
    html! {
        section id="gallery" class="section" {
            (section_heading("Gallery", "Visual Journey"))
            p class="muted" {
                "Explore our stunning spaces through this curated collection of images."
            }
            div class="gallery-grid" {
                @for src in GALLERY {
                    a href=(src) target="_blank" {
                        img src=(src) alt="Luxury Living Space" loading="lazy";
                    }
                }
            }
        }
    }
}

fn booking_cta() -> Markup {
    html! {
        section id="booking" class="section cta" {
            h2 {
                span { "Experience the Epitome of" }
                span class="gold" { "Luxury Living" }
            }
            p {
                "Secure your place in our exclusive property. Whether for a night or an extended stay, a world of luxury awaits."
            }
            div class="actions" {
                (button_link("View Our Rooms", "#rooms", "btn-gold"))
                (button_link("Call to Book", CONTACT_PHONE_HREF, "btn-outline"))
            }
        }
    }
}

fn contact_section(form: &ContactFormVm) -> Markup {
    html! {
        section id="contact" class="section alt" {
            div class="split" {
                div {
                    (section_heading("Get In Touch", "Contact Us"))
                    p class="muted" {
                        "We're here to answer any questions about our luxury accommodations. Whether you're planning a stay or interested in learning more, our dedicated team is ready to assist you."
                    }
                    (contact_details())
                }
                div class="panel" {
                    (contact_form(form))
                }
            }
        }
    }
}

pub fn contact_details() -> Markup {
    html! {
        dl class="contact-details" {
            dt { "Location" }
            dd { (CONTACT_ADDRESS) }
            dt { "Phone" }
            dd { a href=(CONTACT_PHONE_HREF) { (CONTACT_PHONE) } }
            dt { "Email" }
            dd { a href=(format!("mailto:{CONTACT_EMAIL}")) { (CONTACT_EMAIL) } }
        }
    }
}
