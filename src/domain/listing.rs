use serde::{Deserialize, Serialize};
use std::fmt;

/// Category tag attached to every listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StayType {
    Short,
    Long,
    General,
}

impl StayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StayType::Short => "short",
            StayType::Long => "long",
            StayType::General => "general",
        }
    }

    /// Label shown on room cards.
    pub fn label(&self) -> &'static str {
        match self {
            StayType::Short => "Short Stay",
            StayType::Long => "Long Term",
            StayType::General => "Flexible Stay",
        }
    }
}

impl fmt::Display for StayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceUnit {
    Night,
    Month,
}

impl PriceUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceUnit::Night => "night",
            PriceUnit::Month => "month",
        }
    }
}

/// A bookable unit shown on the site (a "room").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Minor currency units (cents).
    pub price: i64,
    pub stay_type: StayType,
    pub price_unit: PriceUnit,
    pub image_url: String,
    pub amenities: Vec<String>,
    pub featured: bool,
}

/// Listing data before the store assigns an id.
#[derive(Debug, Clone)]
pub struct NewListing {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub stay_type: StayType,
    pub price_unit: PriceUnit,
    pub image_url: String,
    pub amenities: Vec<String>,
    pub featured: Option<bool>,
}

impl NewListing {
    pub fn into_listing(self, id: i64) -> Listing {
        Listing {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            stay_type: self.stay_type,
            price_unit: self.price_unit,
            image_url: self.image_url,
            amenities: self.amenities,
            featured: self.featured.unwrap_or(false),
        }
    }
}

impl Listing {
    /// "$3,500" for a price of 350000 cents.
    pub fn formatted_price(&self) -> String {
        format_usd(self.price)
    }

    /// "$450 / night"
    pub fn display_price(&self) -> String {
        format!("{} / {}", self.formatted_price(), self.price_unit.as_str())
    }
}

/// Whole US dollars with thousands separators. Cents are dropped.
pub fn format_usd(cents: i64) -> String {
    let dollars = cents / 100;
    let digits = dollars.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if dollars < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
