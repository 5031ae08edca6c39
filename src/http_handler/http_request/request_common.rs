use crate::http_handler::HTTPError;
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_response::response_common::HTTPResponseType;
use strum_macros::Display;

pub(crate) enum HTTPRequestMethod {
    Get,
    Post,
}

/// One value per REST endpoint of the reservation backend. The default
/// `send_request` drives the whole request/response cycle against a
/// preconfigured [`HTTPClient`].
pub(crate) trait HTTPRequestType {
    type Response: HTTPResponseType;
    type Body: serde::Serialize;

    fn endpoint(&self) -> &str;
    fn request_method(&self) -> HTTPRequestMethod;
    fn body(&self) -> &Self::Body;
    fn query_params(&self) -> Vec<(&'static str, String)> { Vec::new() }
    fn header_params(&self) -> reqwest::header::HeaderMap {
        reqwest::header::HeaderMap::default()
    }

    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let url = format!("{}{}", client.url(), self.endpoint());
        let request = match self.request_method() {
            HTTPRequestMethod::Get => client.client().get(url),
            HTTPRequestMethod::Post => client.client().post(url).json(self.body()),
        };
        let response = request
            .query(&self.query_params())
            .headers(self.header_params())
            .send()
            .await
            .map_err(|e| HTTPError::HTTPResponseError(e.into()))?;
        Self::Response::read_response(response).await.map_err(HTTPError::HTTPResponseError)
    }
}

#[derive(Debug, Display)]
pub enum RequestError {
    /// The requested month is outside `1..=12`.
    InvalidMonth(u32),
}

impl std::error::Error for RequestError {}
