// handlers/pages.rs
use chrono::Utc;

use crate::domain::InquiryForm;
use crate::errors::{ResultResp, ServerError};
use crate::handlers::read_body;
use crate::responses::{html_response, html_response_with_status};
use crate::store::{inquiries, rooms, Store};
use crate::templates::pages::{self, HomeVm};
use crate::templates::ContactFormVm;
use astra::Request;

const ROOM_NOT_FOUND: &str = "The room you're looking for doesn't exist or has been removed.";

pub fn home(store: &Store) -> ResultResp {
    let rooms = rooms::list_all(store)?;
    let featured = rooms::get_featured(store)?;
    let form = ContactFormVm::default();

    html_response(pages::home_page(&HomeVm {
        rooms: &rooms,
        featured: featured.as_ref(),
        form: &form,
    }))
}

pub fn room_detail(store: &Store, raw_id: &str) -> ResultResp {
    let id: i64 = raw_id
        .parse()
        .map_err(|_| ServerError::NotFound(ROOM_NOT_FOUND.into()))?;

    let room = rooms::get_by_id(store, id)?
        .ok_or_else(|| ServerError::NotFound(ROOM_NOT_FOUND.into()))?;

    html_response(pages::room_detail_page(&room))
}

pub fn contact() -> ResultResp {
    html_response(pages::contact_page(&ContactFormVm::default()))
}

/// POST /contact from the HTML form (`application/x-www-form-urlencoded`).
pub fn submit_contact(req: Request, store: &Store) -> ResultResp {
    let body = read_body(req)?;
    let form = InquiryForm::from_pairs(url::form_urlencoded::parse(&body).into_owned());

    match form.validate() {
        Ok(new_inquiry) => {
            let inquiry = inquiries::submit(store, new_inquiry, Utc::now())?;
            tracing::info!(inquiry_id = inquiry.id, "inquiry received via contact form");
            html_response(pages::thank_you_page(&inquiry))
        }
        Err(errors) => {
            tracing::warn!(failed_fields = errors.len(), "contact form rejected");
            let vm = ContactFormVm::with_errors(form, errors);
            html_response_with_status(400, pages::contact_page(&vm))
        }
    }
}
