//! Bookings submitted by the app (`booking` table).
//!
//! The booking schema belongs to the client: the object is stored verbatim in
//! a JSON column and handed back with the store-assigned `id` merged in.
use sea_orm::{entity::prelude::*, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Client-defined booking fields.
pub type BookingPayload = serde_json::Map<String, Json>;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "booking")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "JsonBinary")]
    pub payload: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// API view of a booking: `{"id": 1, ...client fields}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i32,
    #[serde(flatten)]
    pub details: BookingPayload,
}

impl TryFrom<Model> for Booking {
    type Error = ModelError;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        match m.payload {
            Json::Object(details) => Ok(Booking { id: m.id, details }),
            other => Err(ModelError::Validation(format!(
                "booking {} payload is not a JSON object: {}",
                m.id, other
            ))),
        }
    }
}

/// Build the row for a new booking. A client-side `id` key is dropped so the
/// stored object never disagrees with the primary key.
pub fn new_active_model(mut payload: BookingPayload) -> ActiveModel {
    payload.remove("id");
    ActiveModel { id: NotSet, payload: Set(Json::Object(payload)) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn view_merges_id_with_client_fields() {
        let m = Model { id: 7, payload: json!({"providerId": 2, "date": "2025-01-10"}) };
        let b = Booking::try_from(m).unwrap();
        let out = serde_json::to_value(&b).unwrap();
        assert_eq!(out, json!({"id": 7, "providerId": 2, "date": "2025-01-10"}));
    }

    #[test]
    fn non_object_payload_is_rejected() {
        let m = Model { id: 1, payload: json!([1, 2, 3]) };
        assert!(matches!(Booking::try_from(m), Err(ModelError::Validation(_))));
    }

    #[test]
    fn client_id_is_not_persisted() {
        let payload = json!({"id": 99, "note": "gate code 42"});
        let am = new_active_model(payload.as_object().cloned().unwrap());
        assert!(am.id.is_not_set());
        assert_eq!(am.payload.clone().unwrap(), json!({"note": "gate code 42"}));
    }
}
