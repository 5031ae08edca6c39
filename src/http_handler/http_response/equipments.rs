use crate::http_handler::Equipment;
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// The `GET /equipments` endpoint answers with a bare JSON array.
#[derive(serde::Deserialize, Debug)]
#[serde(transparent)]
pub struct EquipmentsResponse {
    equipments: Vec<Equipment>,
}

impl EquipmentsResponse {
    pub fn equipments(&self) -> &[Equipment] { &self.equipments }
    pub fn into_equipments(self) -> Vec<Equipment> { self.equipments }
}

impl SerdeJSONBodyHTTPResponseType for EquipmentsResponse {}
