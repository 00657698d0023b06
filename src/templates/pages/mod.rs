pub mod contact;
pub mod error;
pub mod home;
pub mod room_detail;

pub use contact::{contact_page, thank_you_page};
pub use error::error_page;
pub use home::{home_page, HomeVm};
pub use room_detail::room_detail_page;
