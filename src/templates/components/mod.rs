use maud::{html, Markup};

pub mod contact_form;
pub mod room_card;

pub use contact_form::{contact_form, ContactFormVm};
pub use room_card::{featured_room, room_card};

pub fn section_heading(eyebrow: &str, title: &str) -> Markup {
    html! {
        span class="eyebrow" { (eyebrow) }
        h2 { (title) }
    }
}

pub fn button_link(label: &str, href: &str, class: &str) -> Markup {
    html! {
        a href=(href) class=(format!("btn {class}")) { (label) }
    }
}
