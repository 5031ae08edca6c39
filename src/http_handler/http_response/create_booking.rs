use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Echo of a successfully created booking. Only the id and the echoed
/// status are of interest to the engine.
#[derive(serde::Deserialize, Debug)]
pub struct CreateBookingResponse {
    id: String,
    status: Option<String>,
}

impl CreateBookingResponse {
    pub fn id(&self) -> &str { &self.id }
    pub fn status(&self) -> Option<&str> { self.status.as_deref() }
}

impl SerdeJSONBodyHTTPResponseType for CreateBookingResponse {}
