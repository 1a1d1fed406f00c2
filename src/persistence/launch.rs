use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ordered customer organizations of a launch, kept in a single JSON column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Customers(pub Vec<String>);

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "launches")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub flight_number: i32,
    pub mission: String,
    pub rocket: String,
    pub launch_date: DateTimeUtc,
    pub target: String,
    #[sea_orm(column_type = "Json")]
    pub customers: Customers,
    pub upcoming: bool,
    pub success: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
