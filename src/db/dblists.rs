use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Error as SqlxError;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, error, info};
use uuid::Uuid;

/// List Row from database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ListRow {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Item Row from database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ItemRow {
    pub id: i64,
    pub list_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

const SCHEMA: [&str; 3] = [
    r#"
        CREATE TABLE IF NOT EXISTS lists (
            id BLOB PRIMARY KEY NOT NULL,
            created_at TEXT NOT NULL
        )
    "#,
    r#"
        CREATE TABLE IF NOT EXISTS items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            list_id BLOB NOT NULL REFERENCES lists(id),
            text TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_items_list ON items(list_id, id)",
];

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Database connection pool holding lists and their items
pub struct DbLists {
    pool: SqlitePool,
}

impl DbLists {
    /// Create a new database connection pool and make sure the schema exists
    ///
    /// # Arguments
    /// * `database_url` - SQLite connection string (`sqlite::memory:` for a throwaway store)
    /// * `max_connections` - Upper bound of pooled connections
    ///
    /// # Returns
    /// * `Result<Self, SqlxError>` - Database connection pool or error
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, SqlxError> {
        info!("Connecting to database...");

        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        // Every connection to an in-memory database is its own database, so
        // keep exactly one connection and never recycle it.
        let in_memory = is_in_memory(database_url);
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
                .max_connections(max_connections.max(1))
                .acquire_timeout(Duration::from_secs(30))
                .idle_timeout(Duration::from_secs(600)) // Close idle connections after 10 minutes
                .max_lifetime(Duration::from_secs(1800)) // Recycle connections after 30 minutes
        };

        let pool = pool_options.connect_with(options).await?;
        info!("Database connection pool created successfully");

        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    /// Create the tables if they are missing
    async fn migrate(&self) -> Result<(), SqlxError> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        debug!("Database schema is up to date");
        Ok(())
    }

    /// Check that the database answers queries
    pub async fn ping(&self) -> Result<(), SqlxError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close every pooled connection, later queries fail with `PoolClosed`
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database connection pool closed");
    }

    /// Create a new list holding its first item
    ///
    /// Both rows are written in one transaction, so a list never exists
    /// without the item that created it.
    ///
    /// # Arguments
    /// * `text` - Text of the first item
    ///
    /// # Returns
    /// * `Result<(ListRow, ItemRow), SqlxError>` - The new list and its item
    pub async fn create_list_with_item(&self, text: &str) -> Result<(ListRow, ItemRow), SqlxError> {
        let list = ListRow {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
        };

        let mut tx = match self.pool.begin().await {
            Ok(tx) => tx,
            Err(e) => {
                error!(
                    "Failed to acquire connection from pool for new list: {}. Pool state: {} idle, {} total",
                    e,
                    self.pool.num_idle(),
                    self.pool.size()
                );
                return Err(e);
            }
        };

        sqlx::query("INSERT INTO lists(id, created_at) VALUES (?, ?)")
            .bind(list.id)
            .bind(list.created_at)
            .execute(&mut *tx)
            .await?;

        let item = sqlx::query_as::<_, ItemRow>(
            r#"
            INSERT INTO items(list_id, text, created_at)
            VALUES (?, ?, ?)
            RETURNING id, list_id, text, created_at
            "#,
        )
        .bind(list.id)
        .bind(text)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        info!("List created: {}", list.id);
        Ok((list, item))
    }

    /// Append an item to an existing list
    ///
    /// # Returns
    /// * `Result<Option<ItemRow>, SqlxError>` - The new item, or None if the list does not exist
    pub async fn add_item(&self, list_id: Uuid, text: &str) -> Result<Option<ItemRow>, SqlxError> {
        let mut tx = self.pool.begin().await?;

        let exists = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM lists WHERE id = ?")
            .bind(list_id)
            .fetch_one(&mut *tx)
            .await?;
        if exists == 0 {
            debug!("List not found: {}", list_id);
            return Ok(None);
        }

        let item = sqlx::query_as::<_, ItemRow>(
            r#"
            INSERT INTO items(list_id, text, created_at)
            VALUES (?, ?, ?)
            RETURNING id, list_id, text, created_at
            "#,
        )
        .bind(list_id)
        .bind(text)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        info!("Item {} added to list {}", item.id, list_id);
        Ok(Some(item))
    }

    /// Get a list by id
    pub async fn get_list(&self, list_id: Uuid) -> Result<Option<ListRow>, SqlxError> {
        sqlx::query_as::<_, ListRow>("SELECT id, created_at FROM lists WHERE id = ?")
            .bind(list_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// All items of a list, oldest first
    pub async fn list_items(&self, list_id: Uuid) -> Result<Vec<ItemRow>, SqlxError> {
        sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, list_id, text, created_at
            FROM items
            WHERE list_id = ?
            ORDER BY id ASC
            "#,
        )
        .bind(list_id)
        .fetch_all(&self.pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_test_db() -> DbLists {
        DbLists::connect("sqlite::memory:", 1)
            .await
            .expect("Failed to init test DB")
    }

    #[tokio::test]
    async fn test_create_list_with_item() {
        let db = setup_test_db().await;

        let (list, item) = db.create_list_with_item("Buy milk").await.unwrap();

        assert_eq!(item.list_id, list.id);
        assert_eq!(item.text, "Buy milk");
        assert!(db.get_list(list.id).await.unwrap().is_some());
        assert_eq!(db.list_items(list.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_items_come_back_in_creation_order() {
        let db = setup_test_db().await;

        let (list, _) = db.create_list_with_item("first").await.unwrap();
        db.add_item(list.id, "second").await.unwrap();
        db.add_item(list.id, "third").await.unwrap();

        let texts: Vec<String> = db
            .list_items(list.id)
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.text)
            .collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_add_item_to_unknown_list() {
        let db = setup_test_db().await;

        let added = db.add_item(Uuid::new_v4(), "orphan").await.unwrap();

        assert!(added.is_none());
    }

    #[tokio::test]
    async fn test_lists_are_partitioned() {
        let db = setup_test_db().await;

        let (list_a, _) = db.create_list_with_item("Item 1").await.unwrap();
        let (list_b, _) = db.create_list_with_item("Other 1").await.unwrap();
        db.add_item(list_a.id, "Item 2").await.unwrap();
        db.add_item(list_b.id, "Other 2").await.unwrap();

        let items_a = db.list_items(list_a.id).await.unwrap();
        assert_eq!(items_a.len(), 2);
        assert!(items_a.iter().all(|item| item.list_id == list_a.id));
        assert!(items_a.iter().all(|item| !item.text.starts_with("Other")));
    }

    #[tokio::test]
    async fn test_unknown_list_is_empty() {
        let db = setup_test_db().await;

        let id = Uuid::new_v4();

        assert!(db.get_list(id).await.unwrap().is_none());
        assert!(db.list_items(id).await.unwrap().is_empty());
    }

    #[test]
    fn test_in_memory_urls() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite:file:lists?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://superlists.db?mode=rwc"));
    }

    #[tokio::test]
    async fn test_named_in_memory_store_keeps_data() {
        let db = DbLists::connect("sqlite:keep_data?mode=memory", 4)
            .await
            .unwrap();

        let (list, _) = db.create_list_with_item("kept").await.unwrap();

        assert_eq!(db.list_items(list.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_ping_fails_after_close() {
        let db = setup_test_db().await;
        db.close().await;
        assert!(db.ping().await.is_err());
    }

    #[tokio::test]
    async fn test_ping() {
        let db = setup_test_db().await;
        assert!(db.ping().await.is_ok());
    }
}
