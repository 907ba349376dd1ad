//! Carts service.

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashSet;
use tracing::{Span, debug, info};

use crate::{
    database::Db,
    domain::{
        carts::{
            data::{AddedItem, GuestCartItem, NewCartItem, QuantityUpdate},
            errors::CartsServiceError,
            lines::{CartLine, enrich},
            quantity::{cap_to_stock, initial_quantity, positive_quantity},
            records::{CartItemRecord, CartItemUuid},
            repositories::PgCartItemsRepository,
        },
        products::{records::ProductUuid, repository::PgProductsRepository},
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    items_repository: PgCartItemsRepository,
    products_repository: PgProductsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            items_repository: PgCartItemsRepository::new(),
            products_repository: PgProductsRepository::new(),
        }
    }
}

/// Reject access to a line item owned by someone else.
fn ensure_owner(item: &CartItemRecord, user: UserUuid) -> Result<(), CartsServiceError> {
    if item.user_uuid == user {
        Ok(())
    } else {
        Err(CartsServiceError::Forbidden)
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    #[tracing::instrument(
        name = "carts.service.get_cart",
        skip(self),
        fields(user_uuid = %user, item_count = tracing::field::Empty),
        err
    )]
    async fn get_cart(&self, user: UserUuid) -> Result<Vec<CartLine>, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let items = self.items_repository.get_cart_items(&mut tx, user).await?;

        let product_uuids: Vec<ProductUuid> = items
            .iter()
            .map(|item| item.product_uuid)
            .collect::<FxHashSet<_>>()
            .into_iter()
            .collect();

        let products = self
            .products_repository
            .find_products(&mut tx, &product_uuids)
            .await?;

        tx.commit().await?;

        Span::current().record("item_count", items.len());

        Ok(enrich(items, &products))
    }

    #[tracing::instrument(
        name = "carts.service.add_item",
        skip(self, item),
        fields(
            guest = user.is_none(),
            product_uuid = %item.product_uuid,
            selected_option = %item.selected_option
        ),
        err
    )]
    async fn add_item(
        &self,
        user: Option<UserUuid>,
        item: NewCartItem,
    ) -> Result<AddedItem, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let products = self
            .products_repository
            .find_products(&mut tx, &[item.product_uuid])
            .await?;

        if !products.contains_key(&item.product_uuid) {
            return Err(CartsServiceError::ProductNotFound);
        }

        let quantity = initial_quantity(item.quantity);

        let Some(user) = user else {
            tx.commit().await?;

            return Ok(AddedItem::Guest(GuestCartItem {
                product_uuid: item.product_uuid,
                selected_option: item.selected_option,
                quantity,
            }));
        };

        let inserted = self
            .items_repository
            .insert_cart_item(
                &mut tx,
                item.uuid,
                user,
                item.product_uuid,
                &item.selected_option,
                quantity,
            )
            .await?;

        if let Some(record) = inserted {
            tx.commit().await?;

            info!(cart_item_uuid = %record.uuid, user_uuid = %user, "added cart item");

            return Ok(AddedItem::Persisted(record));
        }

        // Lost to an existing row; each statement sees the latest committed
        // data, so the winner is visible here.
        let existing = self
            .items_repository
            .find_cart_item_by_selection(&mut tx, user, item.product_uuid, &item.selected_option)
            .await?;

        tx.commit().await?;

        debug!(
            existing_uuid = ?existing.as_ref().map(|record| record.uuid),
            "cart item already exists for selection"
        );

        Err(CartsServiceError::Duplicate(existing.map(Box::new)))
    }

    #[tracing::instrument(
        name = "carts.service.update_quantity",
        skip(self),
        fields(user_uuid = %user, cart_item_uuid = %item, clamped = tracing::field::Empty),
        err
    )]
    async fn update_quantity(
        &self,
        user: UserUuid,
        item: CartItemUuid,
        quantity: i64,
    ) -> Result<QuantityUpdate, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let record = self
            .items_repository
            .lock_cart_item(&mut tx, item)
            .await?
            .ok_or(CartsServiceError::NotFound)?;

        ensure_owner(&record, user)?;

        let Some(requested) = positive_quantity(quantity) else {
            self.items_repository
                .delete_cart_item(&mut tx, user, item)
                .await?;

            tx.commit().await?;

            info!(cart_item_uuid = %item, "removed cart item on non-positive quantity");

            return Ok(QuantityUpdate::Deleted);
        };

        let stock = self
            .products_repository
            .find_products(&mut tx, &[record.product_uuid])
            .await?
            .get(&record.product_uuid)
            .map(|product| product.stock);

        let capped = cap_to_stock(requested, stock);

        let updated = self
            .items_repository
            .update_cart_item_quantity(&mut tx, item, capped.quantity)
            .await?;

        tx.commit().await?;

        Span::current().record("clamped", capped.clamped);

        if capped.clamped {
            info!(
                cart_item_uuid = %item,
                requested = quantity,
                stock = capped.quantity,
                "clamped cart item quantity to stock"
            );
        }

        Ok(QuantityUpdate::Updated {
            item: updated,
            requested: quantity,
            clamped: capped.clamped,
        })
    }

    #[tracing::instrument(
        name = "carts.service.remove_item",
        skip(self),
        fields(user_uuid = %user, cart_item_uuid = %item),
        err
    )]
    async fn remove_item(&self, user: UserUuid, item: CartItemUuid) -> Result<(), CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let record = self
            .items_repository
            .lock_cart_item(&mut tx, item)
            .await?
            .ok_or(CartsServiceError::NotFound)?;

        ensure_owner(&record, user)?;

        let rows_affected = self
            .items_repository
            .delete_cart_item(&mut tx, user, item)
            .await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// The user's line items, oldest first, each joined with catalog details.
    async fn get_cart(&self, user: UserUuid) -> Result<Vec<CartLine>, CartsServiceError>;

    /// Add a product selection to the user's cart.
    ///
    /// Without a user nothing is stored and the normalised selection is handed
    /// back for the guest cart.
    async fn add_item(
        &self,
        user: Option<UserUuid>,
        item: NewCartItem,
    ) -> Result<AddedItem, CartsServiceError>;

    /// Set a line item's quantity, capped to current stock. Non-positive
    /// quantities remove the line item.
    async fn update_quantity(
        &self,
        user: UserUuid,
        item: CartItemUuid,
        quantity: i64,
    ) -> Result<QuantityUpdate, CartsServiceError>;

    /// Remove a line item from the user's cart.
    async fn remove_item(&self, user: UserUuid, item: CartItemUuid) -> Result<(), CartsServiceError>;
}
