use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "job_post")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub job_rowid: i64,
    pub co_rowid: i64,
    pub job_title: Option<String>,
    pub job_type: Option<String>,
    pub job_location: Option<String>,
    pub job_url: Option<String>,
    pub job_posted_at: Option<String>, // free text as scraped, e.g. "3 days ago"
    pub job_source: Option<String>,
    pub job_pay: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::company::Entity",
        from = "Column::CoRowid",
        to = "super::company::Column::CoRowid"
    )]
    Company,
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
