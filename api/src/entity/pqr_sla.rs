use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pqr_sla")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub complex_id: i64,
    /// NULL matches any category
    pub category: Option<String>,
    /// NULL matches any priority
    pub priority: Option<String>,
    pub resolution_time_minutes: i64,
    pub business_hours_only: bool,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
