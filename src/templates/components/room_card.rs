use crate::domain::{Listing, StayType};
use crate::templates::components::{button_link, section_heading};
use maud::{html, Markup};

pub fn room_card(room: &Listing) -> Markup {
    html! {
        article class="room-card" {
            img src=(room.image_url) alt=(format!("{} at Aaram Luxury Living", room.name)) loading="lazy";
            div class="room-card-body" {
                span class="eyebrow" { (room.stay_type.label()) }
                h3 { (room.name) }
                div class="room-card-footer" {
                    span class="muted" { (room.display_price()) }
                    a href=(format!("/rooms/{}", room.id)) class="gold" { "View Details →" }
                }
            }
        }
    }
}

/// Homepage highlight for the featured listing.
pub fn featured_room(room: &Listing) -> Markup {
    let eyebrow = match room.stay_type {
        StayType::Long => "Featured Room With Kitchen",
        _ => "Featured Room Without Kitchen",
    };
    let detail_href = format!("/rooms/{}", room.id);

    html! {
        section id="featured" class="section featured" {
            div class="split" {
                div {
                    img src=(room.image_url) alt=(format!("{} at Aaram Luxury Living", room.name));
                }
                div {
                    (section_heading(eyebrow, &room.name))
                    p class="muted" { (room.description) }
                    div class="amenity-grid" {
                        @for amenity in &room.amenities {
                            div class="amenity-chip" { "✓ " (amenity) }
                        }
                    }
                    p class="price" {
                        span class="gold" { (room.formatted_price()) }
                        " / " (room.price_unit.as_str())
                    }
                    div class="actions" {
                        (button_link("Book Now", &detail_href, "btn-gold"))
                        (button_link("View Details", &detail_href, "btn-outline"))
                    }
                }
            }
        }
    }
}
