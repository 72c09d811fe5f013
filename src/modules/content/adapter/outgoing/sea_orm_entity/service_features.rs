use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::{trim_set, trim_set_opt};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_features")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub title_ar: String,

    #[sea_orm(column_type = "Text")]
    pub title_en: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description_ar: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub description_en: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub icon_name: Option<String>,

    pub order: i32,

    pub is_active: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        trim_set(&mut self.title_ar);
        trim_set(&mut self.title_en);
        trim_set_opt(&mut self.description_ar);
        trim_set_opt(&mut self.description_en);

        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;
            use sea_orm::ActiveValue::Set;

            if !_insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}
