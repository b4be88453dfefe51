use sqlx::SqlitePool;

use crate::users::repo_types::User;

impl User {
    /// All users in rowid order.
    pub async fn list(db: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(db)
        .await
    }

    pub async fn find_by_id(db: &SqlitePool, id: i64) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_one(db)
        .await
    }

    /// Insert a new row and return it with the store-assigned id.
    pub async fn create(db: &SqlitePool, name: &str, email: &str) -> Result<User, sqlx::Error> {
        let id = sqlx::query("INSERT INTO users (name, email) VALUES (?, ?)")
            .bind(name)
            .bind(email)
            .execute(db)
            .await?
            .last_insert_rowid();
        Ok(User {
            id,
            name: name.to_string(),
            email: email.to_string(),
        })
    }

    /// Overwrite name and email; returns rows affected (0 when the id is unknown).
    pub async fn update(
        db: &SqlitePool,
        id: i64,
        name: &str,
        email: &str,
    ) -> Result<u64, sqlx::Error> {
        let res = sqlx::query("UPDATE users SET name = ?, email = ? WHERE id = ?")
            .bind(name)
            .bind(email)
            .bind(id)
            .execute(db)
            .await?;
        Ok(res.rows_affected())
    }

    pub async fn delete(db: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
        let res = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(db)
            .await?;
        Ok(res.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let state = AppState::in_memory().await;
        let a = User::create(&state.db, "Ana", "ana@x.com").await.unwrap();
        let b = User::create(&state.db, "Bo", "bo@x.com").await.unwrap();
        assert_eq!(a.id, 1);
        assert!(b.id > a.id);

        let found = User::find_by_id(&state.db, b.id).await.unwrap();
        assert_eq!(found, b);
    }

    #[tokio::test]
    async fn find_missing_is_row_not_found() {
        let state = AppState::in_memory().await;
        let err = User::find_by_id(&state.db, 42).await.unwrap_err();
        assert!(matches!(err, sqlx::Error::RowNotFound));
    }

    #[tokio::test]
    async fn update_and_delete_report_rows_affected() {
        let state = AppState::in_memory().await;
        let u = User::create(&state.db, "Ana", "ana@x.com").await.unwrap();

        assert_eq!(User::update(&state.db, u.id, "Ana B", "ab@x.com").await.unwrap(), 1);
        assert_eq!(User::update(&state.db, 999, "x", "y").await.unwrap(), 0);
        assert_eq!(User::list(&state.db).await.unwrap().len(), 1);

        assert_eq!(User::delete(&state.db, u.id).await.unwrap(), 1);
        assert_eq!(User::delete(&state.db, u.id).await.unwrap(), 0);
        assert!(User::list(&state.db).await.unwrap().is_empty());
    }
}
