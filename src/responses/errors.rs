use crate::errors::{FieldError, ServerError};
use crate::templates;
use astra::{Body, Response, ResponseBuilder};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a [FieldError]>,
}

/// Convert a ServerError into a `{"message": ...}` JSON response.
pub fn json_error_response(err: &ServerError) -> Response {
    let errors = match err {
        ServerError::Validation(fields) => Some(fields.as_slice()),
        _ => None,
    };
    let body = ErrorBody {
        message: err.public_message(),
        errors,
    };

    let json = serde_json::to_vec(&body)
        .unwrap_or_else(|_| br#"{"message":"Internal Server Error"}"#.to_vec());

    ResponseBuilder::new()
        .status(err.status())
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(json))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}

/// Convert a ServerError into a full HTML error page.
pub fn html_error_response(err: &ServerError) -> Response {
    let markup = templates::pages::error_page(err.status(), &err.public_message());

    ResponseBuilder::new()
        .status(err.status())
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(markup.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
