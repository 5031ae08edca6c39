use super::http_request::request_common::RequestError;
use super::http_response::response_common::ResponseError;
use strum_macros::Display;

/// An optional piece of equipment that can be attached to a booking,
/// as reported by the `GET /equipments` endpoint.
#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Equipment {
    id: String,
    name: String,
}

impl Equipment {
    pub fn id(&self) -> &str { &self.id }
    pub fn name(&self) -> &str { &self.name }

    #[cfg(test)]
    pub(crate) fn test(id: &str, name: &str) -> Self {
        Self { id: String::from(id), name: String::from(name) }
    }
}

#[derive(Debug, Display)]
pub enum HTTPError {
    HTTPRequestError(RequestError),
    HTTPResponseError(ResponseError),
}

impl std::error::Error for HTTPError {}
