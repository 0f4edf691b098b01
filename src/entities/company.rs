use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "company")]
pub struct Model {
    // Keys are assigned upstream; this service never inserts.
    #[sea_orm(primary_key, auto_increment = false)]
    pub co_rowid: i64,
    pub company_name: String,
    pub company_website: Option<String>,
    pub linkedin_company_url: Option<String>,
    pub is_profiled: Option<bool>,
    pub market_size: Option<String>,
    pub company_size: Option<String>,
    pub revenue_threshold: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub pain_points: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub buying_triggers: Option<String>,
    pub last_profiled_on: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::job_post::Entity")]
    JobPosts,
}

impl Related<super::job_post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JobPosts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
