// responses/assets.rs
use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};

const SITE_CSS: &str = include_str!("../../static/site.css");

/// Serve the bundled stylesheet.
pub fn stylesheet_response() -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_CSS_UTF_8.as_ref())
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(SITE_CSS))
        .map_err(|_| ServerError::Internal("Failed to serve stylesheet".into()))
}
