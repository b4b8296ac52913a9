use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pqr_teams")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub complex_id: i64,
    pub name: String,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::pqr_team_categories::Entity")]
    PqrTeamCategories,
}

impl Related<super::pqr_team_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PqrTeamCategories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
