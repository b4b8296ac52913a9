use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pqr_assignment_rules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub complex_id: i64,
    pub category: String,
    pub subcategory: Option<String>,
    /// Exactly one of `assign_to_user_id` / `assign_to_team_id` is set
    pub assign_to_user_id: Option<i64>,
    pub assign_to_team_id: Option<i64>,
    pub rule_order: i32,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
