//! A person offering one kind of home service (`provider` table).
//!
//! `service_type` is a soft reference to a service name: nothing checks that
//! the service exists, and lookups compare it case-insensitively. Free-text
//! fields (`price`, `gender`, `phone`) and the numeric ones (`rating`, `lat`,
//! `lng`) are stored exactly as submitted, without range checks.
use sea_orm::{entity::prelude::*, NotSet, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "provider")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub service_type: String,
    pub price: Option<String>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub rating: Option<f64>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub image: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Provider payload accepted on create. Any `id` sent by the client is ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProvider {
    pub name: String,
    pub service_type: String,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
}

impl NewProvider {
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            name: Set(self.name),
            service_type: Set(self.service_type),
            price: Set(self.price),
            gender: Set(self.gender),
            phone: Set(self.phone),
            rating: Set(self.rating),
            lat: Set(self.lat),
            lng: Set(self.lng),
            image: Set(self.image),
        }
    }
}
