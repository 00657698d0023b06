use crate::errors::ServerError;
use astra::Request;
use std::io::Read;

pub mod api;
pub mod pages;

/// Largest request body accepted by any route.
pub const MAX_BODY_BYTES: u64 = 64 * 1024;

/// Read the whole request body, refusing anything over `MAX_BODY_BYTES`.
pub fn read_body(req: Request) -> Result<Vec<u8>, ServerError> {
    let mut body = req.into_body();
    let mut buf = Vec::new();

    body.reader()
        .take(MAX_BODY_BYTES + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("Failed to read request body: {e}")))?;

    if buf.len() as u64 > MAX_BODY_BYTES {
        return Err(ServerError::BadRequest("Request body too large".into()));
    }

    Ok(buf)
}

/// Log the underlying store fault and replace it with a route-specific message.
pub(crate) fn fault(err: ServerError, message: &str) -> ServerError {
    tracing::error!(error = %err, "{message}");
    ServerError::Internal(message.to_string())
}
