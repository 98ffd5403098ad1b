//! Cabins Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};

use crate::domain::cabins::{
    data::NewCabin,
    records::{CabinId, CabinRecord},
};

const LIST_CABINS_SQL: &str = include_str!("sql/list_cabins.sql");
const CREATE_CABIN_SQL: &str = include_str!("sql/create_cabin.sql");
const DELETE_CABIN_SQL: &str = include_str!("sql/delete_cabin.sql");

/// Table-backed storage for cabin records.
#[automock]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Retrieves every cabin record.
    async fn select_cabins(&self) -> Result<Vec<CabinRecord>, sqlx::Error>;

    /// Inserts a cabin, returning it with its assigned id.
    async fn insert_cabin(&self, cabin: NewCabin) -> Result<CabinRecord, sqlx::Error>;

    /// Deletes a cabin by id, returning the number of rows removed.
    async fn delete_cabin(&self, cabin: CabinId) -> Result<u64, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub struct PgCabinsRepository {
    pool: PgPool,
}

impl PgCabinsRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgCabinsRepository {
    async fn select_cabins(&self) -> Result<Vec<CabinRecord>, sqlx::Error> {
        query_as::<Postgres, CabinRecord>(LIST_CABINS_SQL)
            .fetch_all(&self.pool)
            .await
    }

    async fn insert_cabin(&self, cabin: NewCabin) -> Result<CabinRecord, sqlx::Error> {
        let max_capacity = encode_capacity(cabin.max_capacity)?;

        query_as::<Postgres, CabinRecord>(CREATE_CABIN_SQL)
            .bind(cabin.name)
            .bind(max_capacity)
            .bind(cabin.regular_price)
            .bind(cabin.discount)
            .bind(cabin.description)
            .bind(cabin.image_path)
            .fetch_one(&self.pool)
            .await
    }

    async fn delete_cabin(&self, cabin: CabinId) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CABIN_SQL)
            .bind(cabin.into_i64())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

fn encode_capacity(max_capacity: u32) -> Result<i32, sqlx::Error> {
    i32::try_from(max_capacity).map_err(|e| sqlx::Error::Encode(Box::new(e)))
}

impl<'r> FromRow<'r, PgRow> for CabinRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let max_capacity_i32: i32 = row.try_get("max_capacity")?;

        let max_capacity = u32::try_from(max_capacity_i32).map_err(|e| sqlx::Error::ColumnDecode {
            index: "max_capacity".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            id: CabinId::from_i64(row.try_get("id")?),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            name: row.try_get("name")?,
            max_capacity,
            regular_price: row.try_get("regular_price")?,
            discount: row.try_get("discount")?,
            description: row.try_get("description")?,
            image_path: row.try_get("image")?,
        })
    }
}
