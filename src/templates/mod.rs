pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{contact_form, room_card, section_heading, ContactFormVm};
pub use layouts::site::site_layout;
