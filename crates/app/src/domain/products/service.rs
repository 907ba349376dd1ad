//! Products service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use crate::{
    database::Db,
    domain::products::{
        data::NewProduct,
        errors::ProductsServiceError,
        records::{ProductRecord, ProductUuid},
        repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(
        &self,
        point_in_time: Timestamp,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let products = self
            .repository
            .list_products(&mut tx, point_in_time)
            .await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(
        &self,
        product: ProductUuid,
        point_in_time: Timestamp,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let product = self
            .repository
            .get_product(&mut tx, product, point_in_time)
            .await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let created = self.repository.create_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self.repository.delete_product(&mut tx, product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products visible at the given point in time.
    async fn list_products(
        &self,
        point_in_time: Timestamp,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(
        &self,
        product: ProductUuid,
        point_in_time: Timestamp,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Creates a new catalog entry.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Soft-deletes a product; it stops resolving for carts and listings.
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use testresult::TestResult;

    use crate::test::{TestContext, helpers::new_product};

    use super::*;

    #[tokio::test]
    async fn create_product_returns_catalog_fields() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        let product = ctx
            .products
            .create_product(NewProduct {
                brand: Some("Acme".to_string()),
                ..new_product(uuid, 999, 4)
            })
            .await?;

        assert_eq!(product.uuid, uuid);
        assert_eq!(product.price, 999);
        assert_eq!(product.stock, 4);
        assert_eq!(product.brand.as_deref(), Some("Acme"));
        assert!(product.deleted_at.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn get_product_returns_created_product() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        ctx.products
            .create_product(new_product(uuid, 1500, 10))
            .await?;

        let product = ctx.products.get_product(uuid, Timestamp::now()).await?;

        assert_eq!(product.uuid, uuid);
        assert_eq!(product.price, 1500);
        assert_eq!(product.stock, 10);

        Ok(())
    }

    #[tokio::test]
    async fn get_product_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .get_product(ProductUuid::new(), Timestamp::now())
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_products_returns_created_products() -> TestResult {
        let ctx = TestContext::new().await;

        let uuid_a = ProductUuid::new();
        let uuid_b = ProductUuid::new();

        ctx.products
            .create_product(new_product(uuid_a, 100, 1))
            .await?;
        ctx.products
            .create_product(new_product(uuid_b, 200, 2))
            .await?;

        let products = ctx.products.list_products(Timestamp::now()).await?;

        let uuids: Vec<ProductUuid> = products.iter().map(|p| p.uuid).collect();

        assert!(uuids.contains(&uuid_a), "product A should be in the list");
        assert!(uuids.contains(&uuid_b), "product B should be in the list");

        Ok(())
    }

    #[tokio::test]
    async fn list_products_empty_when_none_created() -> TestResult {
        let ctx = TestContext::new().await;

        let products = ctx.products.list_products(Timestamp::now()).await?;

        assert!(products.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn create_product_duplicate_uuid_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        ctx.products.create_product(new_product(uuid, 100, 1)).await?;

        let result = ctx.products.create_product(new_product(uuid, 200, 1)).await;

        assert!(
            matches!(result, Err(ProductsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn delete_product_makes_it_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        ctx.products.create_product(new_product(uuid, 300, 1)).await?;
        ctx.products.delete_product(uuid).await?;

        let result = ctx.products.get_product(uuid, Timestamp::now()).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound after deletion, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn delete_product_twice_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        ctx.products.create_product(new_product(uuid, 300, 1)).await?;
        ctx.products.delete_product(uuid).await?;

        let result = ctx.products.delete_product(uuid).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn deleted_product_still_visible_in_the_past() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        ctx.products.create_product(new_product(uuid, 300, 1)).await?;

        let before_delete = Timestamp::now();

        ctx.products.delete_product(uuid).await?;

        let product = ctx.products.get_product(uuid, before_delete).await?;

        assert_eq!(product.uuid, uuid);

        let products = ctx.products.list_products(Timestamp::now()).await?;

        assert!(
            !products.iter().any(|p| p.uuid == uuid),
            "deleted product should not appear in current list"
        );

        Ok(())
    }
}
