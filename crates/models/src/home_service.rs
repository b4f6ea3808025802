//! A bookable service category (`service` table), e.g. "Plumber".
use sea_orm::{entity::prelude::*, NotSet, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Material icon identifier rendered by the app, e.g. `plumbing`.
    pub icon: String,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// A service that has not been persisted yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewService {
    pub name: String,
    pub icon: String,
    pub description: String,
}

impl NewService {
    pub fn new(name: &str, icon: &str, description: &str) -> Self {
        Self { name: name.to_string(), icon: icon.to_string(), description: description.to_string() }
    }

    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            name: Set(self.name),
            icon: Set(self.icon),
            description: Set(self.description),
        }
    }
}
