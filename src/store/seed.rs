use crate::domain::{NewListing, PriceUnit, StayType};

#[allow(clippy::too_many_arguments)]
fn room(
    name: &str,
    description: &str,
    price: i64,
    stay_type: StayType,
    price_unit: PriceUnit,
    image_url: &str,
    amenities: &[&str],
    featured: bool,
) -> NewListing {
    NewListing {
        name: name.to_string(),
        description: description.to_string(),
        price,
        stay_type,
        price_unit,
        image_url: image_url.to_string(),
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
        featured: Some(featured),
    }
}

/// The fixed catalog loaded on every start. Prices are in cents.
pub fn rooms() -> Vec<NewListing> {
    vec![
        room(
            "Deluxe King Suite",
            "A spacious suite with a king-sized bed, luxurious bathroom, and stunning city views.",
            45000,
            StayType::Short,
            PriceUnit::Night,
            "/images/room1.jpg",
            &["King Bed", "Rainfall Shower", "City View", "Mini Bar", "Room Service"],
            false,
        ),
        room(
            "Executive Apartment",
            "Sophisticated apartment with a separate bedroom, full kitchen, and workspace.",
            350000,
            StayType::Long,
            PriceUnit::Month,
            "/images/room2.jpg",
            &["King Bed", "Full Kitchen", "Workspace", "Laundry", "Concierge Service"],
            false,
        ),
        room(
            "Premium Double Room",
            "Elegant room with two queen beds, perfect for families or groups.",
            38000,
            StayType::Short,
            PriceUnit::Night,
            "/images/room3.jpg",
            &["Two Queen Beds", "Ensuite Bathroom", "Smart TV", "Coffee Machine"],
            false,
        ),
        room(
            "Luxury Penthouse",
            "Our most exclusive offering with panoramic views, multiple bedrooms, and private terrace.",
            580000,
            StayType::Long,
            PriceUnit::Month,
            "/images/room4.jpg",
            &["Multiple Bedrooms", "Private Terrace", "Jacuzzi", "Private Chef", "Panoramic Views"],
            false,
        ),
        room(
            "Signature Suite",
            "Spacious suite with separate living area and designer furnishings.",
            52000,
            StayType::Short,
            PriceUnit::Night,
            "/images/room5.jpg",
            &["King Bed", "Living Area", "Designer Furnishings", "Premium Toiletries"],
            false,
        ),
        room(
            "Luxury Studio",
            "Contemporary studio apartment with high-end finishes and efficient layout.",
            280000,
            StayType::Long,
            PriceUnit::Month,
            "/images/room6.jpg",
            &["Queen Bed", "Kitchenette", "Designer Bathroom", "Workspace"],
            false,
        ),
        room(
            "Royal Penthouse Suite",
            "Our crown jewel, the Royal Penthouse Suite, offers an unparalleled luxury experience with panoramic views, exclusive amenities, and exceptional design. Perfect for both short stays and extended residences.",
            95000,
            StayType::Short,
            PriceUnit::Night,
            "/images/featured-room.jpg",
            &[
                "King Size Beds",
                "Marble Bathroom",
                "Living Area",
                "Kitchenette",
                "Panoramic Views",
                "Private Butler",
            ],
            true,
        ),
    ]
}
