//! Products Repository

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use rustc_hash::FxHashMap;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::domain::products::{
    data::NewProduct,
    records::{ProductRecord, ProductUuid},
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const FIND_PRODUCTS_SQL: &str = include_str!("sql/find_products.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        point_in_time: Timestamp,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .bind(SqlxTimestamp::from(point_in_time))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        point_in_time: Timestamp,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(SqlxTimestamp::from(point_in_time))
            .fetch_one(&mut **tx)
            .await
    }

    /// Current (non-deleted) catalog entries for the given products, keyed by UUID.
    ///
    /// Products that do not resolve are simply absent from the map.
    pub(crate) async fn find_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        products: &[ProductUuid],
    ) -> Result<FxHashMap<ProductUuid, ProductRecord>, sqlx::Error> {
        if products.is_empty() {
            return Ok(FxHashMap::default());
        }

        let uuids: Vec<Uuid> = products.iter().map(|uuid| uuid.into_uuid()).collect();

        let records = query_as::<Postgres, ProductRecord>(FIND_PRODUCTS_SQL)
            .bind(uuids)
            .fetch_all(&mut **tx)
            .await?;

        Ok(records
            .into_iter()
            .map(|record| (record.uuid, record))
            .collect())
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: NewProduct,
    ) -> Result<ProductRecord, sqlx::Error> {
        let price = i64::try_from(product.price).map_err(|e| sqlx::Error::ColumnDecode {
            index: "price".to_string(),
            source: Box::new(e),
        })?;

        let stock = i32::try_from(product.stock).map_err(|e| sqlx::Error::ColumnDecode {
            index: "stock".to_string(),
            source: Box::new(e),
        })?;

        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(product.uuid.into_uuid())
            .bind(product.name)
            .bind(price)
            .bind(stock)
            .bind(product.thumbnail)
            .bind(product.brand)
            .bind(product.category)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let price_i64: i64 = row.try_get("price")?;
        let stock_i32: i32 = row.try_get("stock")?;

        let price = u64::try_from(price_i64).map_err(|e| sqlx::Error::ColumnDecode {
            index: "price".to_string(),
            source: Box::new(e),
        })?;

        let stock = u32::try_from(stock_i32).map_err(|e| sqlx::Error::ColumnDecode {
            index: "stock".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            price,
            stock,
            thumbnail: row.try_get("thumbnail")?,
            brand: row.try_get("brand")?,
            category: row.try_get("category")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
