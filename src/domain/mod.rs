pub mod inquiry;
pub mod listing;
pub mod validation;

pub use inquiry::{Inquiry, InquiryForm, NewInquiry};
pub use listing::{Listing, NewListing, PriceUnit, StayType};
