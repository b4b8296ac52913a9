use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pqr_team_categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub team_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub category: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pqr_teams::Entity",
        from = "Column::TeamId",
        to = "super::pqr_teams::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    PqrTeams,
}

impl Related<super::pqr_teams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PqrTeams.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
