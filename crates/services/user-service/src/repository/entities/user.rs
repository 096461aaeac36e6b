//! User profile database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{UserFields, UserRecord};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub username: String,
    pub location: String,
    pub skills: String,
    pub interests: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for UserRecord {
    fn from(model: Model) -> Self {
        UserRecord::new(
            model.id.into(),
            UserFields {
                username: model.username,
                location: model.location,
                skills: model.skills,
                interests: model.interests,
            },
        )
    }
}
