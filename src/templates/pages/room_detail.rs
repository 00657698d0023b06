use crate::domain::{Listing, PriceUnit};
use crate::templates::components::button_link;
use crate::templates::layouts::site::SITE_NAME;
use crate::templates::site_layout;
use maud::{html, Markup};

const ROOM_AMENITIES: [&str; 5] = [
    "Daily housekeeping",
    "Premium bedding",
    "High-speed Wi-Fi",
    "Smart TV with streaming",
    "Luxury toiletries",
];

const PROPERTY_ACCESS: [&str; 5] = [
    "24/7 concierge service",
    "24-hour security",
    "Daily cleaning service",
    "Complimentary coffee & tea",
    "Secure parking",
];

fn checklist(items: &[&str]) -> Markup {
    html! {
        ul class="checklist" {
            @for item in items {
                li { "✓ " (item) }
            }
        }
    }
}

pub fn room_detail_page(room: &Listing) -> Markup {
    let minimum_stay = match room.price_unit {
        PriceUnit::Night => "Minimum stay: 1 night",
        PriceUnit::Month => "Minimum stay: 1 month",
    };

    site_layout(
        &format!("{} | {SITE_NAME}", room.name),
        &format!(
            "Experience the luxury of our {} at {SITE_NAME}. Book your stay in this premium accommodation today.",
            room.name
        ),
        html! {
            main class="section room-detail" {
                div class="detail-grid" {
                    div class="detail-main" {
                        img class="detail-image" src=(room.image_url)
                            alt=(format!("{} at {SITE_NAME}", room.name));

                        div class="detail-header" {
                            div {
                                span class="eyebrow" { "Luxury Accommodation" }
                                h1 { (room.name) }
                            }
                            div class="detail-price" {
                                span class="gold price" { (room.formatted_price()) }
                                span class="muted" { "per " (room.price_unit.as_str()) }
                            }
                        }

                        p class="muted" { (room.description) }

                        div class="amenity-grid" {
                            @for amenity in &room.amenities {
                                div class="amenity-chip" { "✓ " (amenity) }
                            }
                        }

                        hr;

                        h2 { "Room Details" }
                        p class="muted" {
                            "Our " (room.name) " provides the perfect blend of comfort and luxury. Designed with meticulous attention to detail, this room offers an exceptional living experience with premium amenities and furnishings."
                        }
                        div class="split" {
                            div {
                                h3 { "Room Amenities" }
                                (checklist(&ROOM_AMENITIES))
                            }
                            div {
                                h3 { "Property Access" }
                                (checklist(&PROPERTY_ACCESS))
                            }
                        }
                    }

                    aside class="panel booking-sidebar" {
                        h2 { "Book This Room" }
                        p class="muted" {
                            "Select your dates and preferences to check availability and reserve your stay."
                        }
                        div class="price-row" {
                            span { (room.display_price()) }
                            span class="muted" { (minimum_stay) }
                        }
                        (button_link("Enquire Now", "/contact", "btn-gold btn-block"))
                        p class="muted center" {
                            "or " a href="/#contact" class="gold" { "Contact for Special Requests" }
                        }
                    }
                }
            }
        },
    )
}
