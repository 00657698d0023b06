use crate::domain::Inquiry;
use crate::templates::layouts::site::SITE_NAME;
use crate::templates::pages::home::contact_details;
use crate::templates::{contact_form, section_heading, site_layout, ContactFormVm};
use maud::{html, Markup};

pub fn contact_page(form: &ContactFormVm) -> Markup {
    site_layout(
        &format!("Contact | {SITE_NAME}"),
        "Get in touch with Aaram Luxury Living about short stays and extended residences.",
        html! {
            main class="section" {
                div class="split" {
                    div {
                        (section_heading("Get In Touch", "Contact Us"))
                        p class="muted" {
                            "We're here to answer any questions about our luxury accommodations."
                        }
                        (contact_details())
                    }
                    div class="panel" {
                        @if !form.errors.is_empty() {
                            p class="form-alert" { "Please correct the highlighted fields." }
                        }
                        (contact_form(form))
                    }
                }
            }
        },
    )
}

pub fn thank_you_page(inquiry: &Inquiry) -> Markup {
    site_layout(
        &format!("Thank you | {SITE_NAME}"),
        "Your message has been received.",
        html! {
            main class="section center" {
                h1 { "Thank you for your message!" }
                p class="muted" {
                    "We will get back to you shortly at "
                    strong { (inquiry.email) }
                    "."
                }
                p class="muted" { "Reference #" (inquiry.id) }
                p { a href="/" class="gold" { "← Back to home" } }
            }
        },
    )
}
