use clap::Args;
use storefront_app::{
    database::{self, Db},
    domain::products::{PgProductsService, ProductsService, data::NewProduct, records::ProductUuid},
};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct CreateProductArgs {
    /// Product display name
    #[arg(long)]
    name: String,

    /// Price in minor currency units
    #[arg(long)]
    price: u64,

    /// Units currently in stock
    #[arg(long, default_value_t = 0)]
    stock: u32,

    #[arg(long)]
    thumbnail: Option<String>,

    #[arg(long)]
    brand: Option<String>,

    #[arg(long)]
    category: Option<String>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Optional product UUID; generated when omitted
    #[arg(long)]
    product_uuid: Option<Uuid>,
}

pub(crate) async fn run(args: CreateProductArgs) -> Result<(), String> {
    if args.name.trim().is_empty() {
        return Err("name cannot be empty".to_string());
    }

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgProductsService::new(Db::new(pool));
    let uuid = args
        .product_uuid
        .map_or_else(ProductUuid::new, ProductUuid::from_uuid);

    let product = service
        .create_product(NewProduct {
            uuid,
            name: args.name,
            price: args.price,
            stock: args.stock,
            thumbnail: args.thumbnail,
            brand: args.brand,
            category: args.category,
        })
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    println!("product_uuid: {}", product.uuid);
    println!("product_name: {}", product.name);
    println!("product_price: {}", product.price);
    println!("product_stock: {}", product.stock);

    Ok(())
}
