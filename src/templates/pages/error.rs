use crate::templates::layouts::site::SITE_NAME;
use crate::templates::site_layout;
use maud::{html, Markup};

/// Full HTML error page for non-API routes.
pub fn error_page(status: u16, message: &str) -> Markup {
    let heading = match status {
        404 => "Page not found",
        400 => "Bad request",
        _ => "Something went wrong",
    };

    site_layout(
        &format!("Error {status} | {SITE_NAME}"),
        heading,
        html! {
            main class="section center error-page" {
                h1 { (status) " · " (heading) }
                p class="muted" { (message) }
                p { a href="/#rooms" class="gold" { "← Back to rooms" } }
            }
        },
    )
}
