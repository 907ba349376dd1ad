//! Cart Items Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    carts::records::{CartItemRecord, CartItemUuid},
    products::records::ProductUuid,
    users::records::UserUuid,
};

const GET_CART_ITEMS_SQL: &str = include_str!("../sql/get_cart_items.sql");
const INSERT_CART_ITEM_SQL: &str = include_str!("../sql/insert_cart_item.sql");
const FIND_CART_ITEM_BY_SELECTION_SQL: &str = include_str!("../sql/find_cart_item_by_selection.sql");
const LOCK_CART_ITEM_SQL: &str = include_str!("../sql/lock_cart_item.sql");
const UPDATE_CART_ITEM_QUANTITY_SQL: &str = include_str!("../sql/update_cart_item_quantity.sql");
const DELETE_CART_ITEM_SQL: &str = include_str!("../sql/delete_cart_item.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartItemsRepository;

impl PgCartItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// All line items owned by `user`, oldest first.
    pub(crate) async fn get_cart_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Vec<CartItemRecord>, sqlx::Error> {
        query_as::<Postgres, CartItemRecord>(GET_CART_ITEMS_SQL)
            .bind(user.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    /// Insert a line item unless the user already has one for the same
    /// product and option, in which case `None` is returned.
    pub(crate) async fn insert_cart_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: CartItemUuid,
        user: UserUuid,
        product: ProductUuid,
        selected_option: &str,
        quantity: u32,
    ) -> Result<Option<CartItemRecord>, sqlx::Error> {
        query_as::<Postgres, CartItemRecord>(INSERT_CART_ITEM_SQL)
            .bind(uuid.into_uuid())
            .bind(user.into_uuid())
            .bind(product.into_uuid())
            .bind(selected_option)
            .bind(to_column(quantity)?)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn find_cart_item_by_selection(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        product: ProductUuid,
        selected_option: &str,
    ) -> Result<Option<CartItemRecord>, sqlx::Error> {
        query_as::<Postgres, CartItemRecord>(FIND_CART_ITEM_BY_SELECTION_SQL)
            .bind(user.into_uuid())
            .bind(product.into_uuid())
            .bind(selected_option)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Fetch a line item by UUID and hold a row lock on it until the
    /// transaction ends.
    pub(crate) async fn lock_cart_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: CartItemUuid,
    ) -> Result<Option<CartItemRecord>, sqlx::Error> {
        query_as::<Postgres, CartItemRecord>(LOCK_CART_ITEM_SQL)
            .bind(item.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn update_cart_item_quantity(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: CartItemUuid,
        quantity: u32,
    ) -> Result<CartItemRecord, sqlx::Error> {
        query_as::<Postgres, CartItemRecord>(UPDATE_CART_ITEM_QUANTITY_SQL)
            .bind(item.into_uuid())
            .bind(to_column(quantity)?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_cart_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        item: CartItemUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CART_ITEM_SQL)
            .bind(item.into_uuid())
            .bind(user.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

fn to_column(quantity: u32) -> Result<i32, sqlx::Error> {
    i32::try_from(quantity).map_err(|e| sqlx::Error::Encode(Box::new(e)))
}

impl<'r> FromRow<'r, PgRow> for CartItemRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let quantity_i32: i32 = row.try_get("quantity")?;

        let quantity = u32::try_from(quantity_i32).map_err(|e| sqlx::Error::ColumnDecode {
            index: "quantity".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: CartItemUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            selected_option: row.try_get("selected_option")?,
            quantity,
            added_at: row.try_get::<SqlxTimestamp, _>("added_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
