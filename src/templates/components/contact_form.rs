use crate::domain::InquiryForm;
use crate::errors::FieldError;
use maud::{html, Markup};

/// State of the contact form: what the visitor typed and what was wrong with it.
#[derive(Debug, Default)]
pub struct ContactFormVm {
    pub values: InquiryForm,
    pub errors: Vec<FieldError>,
}

impl ContactFormVm {
    pub fn with_errors(values: InquiryForm, errors: Vec<FieldError>) -> Self {
        Self { values, errors }
    }

    fn value(&self, field: &str) -> &str {
        let value = match field {
            "name" => self.values.name.as_deref(),
            "email" => self.values.email.as_deref(),
            "subject" => self.values.subject.as_deref(),
            "message" => self.values.message.as_deref(),
            _ => None,
        };
        value.unwrap_or_default()
    }

    fn error(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field() == field)
            .map(|e| e.message.as_str())
    }
}

fn field_error(vm: &ContactFormVm, field: &str) -> Markup {
    html! {
        @if let Some(message) = vm.error(field) {
            p class="field-error" { (message) }
        }
    }
}

pub fn contact_form(vm: &ContactFormVm) -> Markup {
    html! {
        form method="post" action="/contact" class="contact-form" novalidate {
            div class="field-row" {
                div class="field" {
                    label for="name" { "Your Name" }
                    input type="text" id="name" name="name" placeholder="John Doe"
                        value=(vm.value("name")) required;
                    (field_error(vm, "name"))
                }
                div class="field" {
                    label for="email" { "Email Address" }
                    input type="email" id="email" name="email" placeholder="john@example.com"
                        value=(vm.value("email")) required;
                    (field_error(vm, "email"))
                }
            }
            div class="field" {
                label for="subject" { "Subject" }
                input type="text" id="subject" name="subject" placeholder="Booking Inquiry"
                    value=(vm.value("subject")) required;
                (field_error(vm, "subject"))
            }
            div class="field" {
                label for="message" { "Message" }
                textarea id="message" name="message" rows="5"
                    placeholder="Tell us about your requirements..." required {
                    (vm.value("message"))
                }
                (field_error(vm, "message"))
            }
            button type="submit" class="btn btn-gold" { "Send Message" }
        }
    }
}
