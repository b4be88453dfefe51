use serde::Serialize;
use sqlx::FromRow;

/// User record in the database. `id` is assigned by the store and never changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}
