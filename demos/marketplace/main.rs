//! Marketplace catalog server with seeded storefront and admin data
//!
//! ```text
//! cargo run --example marketplace
//! CATALOG_CONFIG=catalog.yaml cargo run --example marketplace
//! ```
//!
//! Then try:
//! - GET  /products?search=table&price=50000-150000&sort=price:desc
//! - GET  /orders?status=Shipped
//! - POST /submissions/bulk-status  {"ids":["1","3"],"action":"reject"}
//! - GET  /submissions/export.csv?status=pending

use anyhow::Result;
use catalog::prelude::*;

fn day(y: i32, m: u32, d: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| anyhow::anyhow!("invalid date {}-{}-{}", y, m, d))
}

fn products() -> Vec<Product> {
    vec![
        Product::new(1, "Modern Wooden Coffee Table", 120_000.0, "Living Room", "Kigali")
            .with_description("Handcrafted from local hardwood."),
        Product::new(2, "Velvet Armchair", 95_000.0, "Living Room", "Kigali"),
        Product::new(3, "Office Chair", 75_000.0, "Office", "Musanze"),
        Product::new(4, "Minimalist Dining Table", 210_000.0, "Dining", "Kigali"),
        Product::new(5, "Luxury King Bed", 350_000.0, "Bedroom", "Huye"),
        Product::new(6, "Study Desk", 85_000.0, "Office", "Musanze"),
        Product::new(7, "Lounge Sofa", 220_000.0, "Living Room", "Huye"),
        Product::new(8, "Bookshelf", 60_000.0, "Office", "Kigali"),
        Product::new(9, "Outdoor Patio Set", 180_000.0, "Outdoor", "Rwamagana"),
        Product::new(10, "Custom Coffee Table", 140_000.0, "Custom Made", "Kigali"),
    ]
}

fn orders() -> Result<Vec<Order>> {
    Ok(vec![
        Order::new(
            "#HL-2841",
            Customer::named("Alice Johnson"),
            day(2023, 6, 15)?,
            245_000.0,
            OrderStatus::Delivered,
            2,
        ),
        Order::new(
            "#HL-2840",
            Customer::named("Robert Smith"),
            day(2023, 6, 14)?,
            180_000.0,
            OrderStatus::Shipped,
            1,
        ),
        Order::new(
            "#HL-2839",
            Customer::named("Maria Garcia"),
            day(2023, 6, 13)?,
            320_000.0,
            OrderStatus::Pending,
            3,
        ),
        Order::new(
            "#HL-2838",
            Customer::named("James Wilson"),
            day(2023, 6, 12)?,
            95_000.0,
            OrderStatus::Delivered,
            1,
        ),
        Order::new(
            "#HL-2837",
            Customer::named("Sarah Miller"),
            day(2023, 6, 11)?,
            210_000.0,
            OrderStatus::Shipped,
            2,
        ),
    ])
}

fn submissions() -> Result<Vec<ProductSubmission>> {
    Ok(vec![
        ProductSubmission::new(
            "1",
            "Velvet Sofa",
            "Living Room",
            120_000.0,
            "Kigali Crafts",
            day(2024, 3, 1)?,
        ),
        ProductSubmission::new(
            "2",
            "Oak Desk",
            "Office",
            75_000.0,
            "Musanze Wood",
            day(2024, 3, 2)?,
        ),
        ProductSubmission::new(
            "3",
            "Bar Stool",
            "Kitchen",
            45_000.0,
            "Huye Home",
            day(2024, 3, 3)?,
        ),
    ])
}

fn sellers() -> Result<Vec<SellerApplication>> {
    Ok(vec![
        SellerApplication::new(
            "s-1",
            "Aline Uwase",
            "aline@example.rw",
            "Nyamirambo Woodworks",
            "Kigali",
            day(2024, 1, 15)?,
        ),
        SellerApplication::new(
            "s-2",
            "Jean Habimana",
            "jean@example.rw",
            "Huye Home",
            "Huye",
            day(2024, 1, 20)?,
        ),
    ])
}

fn users() -> Result<Vec<PlatformUser>> {
    Ok(vec![
        PlatformUser::new(
            "u-1",
            "Eric Mugisha",
            "eric@example.rw",
            UserType::Seller,
            day(2023, 11, 4)?,
        ),
        PlatformUser::new(
            "u-2",
            "Grace Ingabire",
            "grace@example.rw",
            UserType::Buyer,
            day(2023, 12, 1)?,
        ),
    ])
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("info,tower_http=debug");

    let config = match std::env::var("CATALOG_CONFIG") {
        Ok(path) => CatalogConfig::from_yaml_file(&path)?,
        Err(_) => CatalogConfig::default(),
    };
    let latency = config.moderation.latency();

    // Status changes are logged as they happen
    let bus = EventBus::default();
    let mut events = bus.subscribe();
    tokio::spawn(async move {
        while let Ok(envelope) = events.recv().await {
            tracing::info!(event = ?envelope.event, "catalog event");
        }
    });

    ServerBuilder::new()
        .with_config(config)
        .with_permissive_cors()
        .register(ResourceRoutes::listing(InMemoryCatalog::with_records(products())))
        .register(ResourceRoutes::listing(InMemoryCatalog::with_records(orders()?)))
        .register(
            ResourceRoutes::listing(
                InMemoryCatalog::with_records(submissions()?)
                    .with_latency(latency)
                    .with_event_bus(bus.clone()),
            )
            .with_moderation()
            .with_export(),
        )
        .register(
            ResourceRoutes::listing(
                InMemoryCatalog::with_records(sellers()?)
                    .with_latency(latency)
                    .with_event_bus(bus.clone()),
            )
            .with_moderation(),
        )
        .register(
            ResourceRoutes::listing(
                InMemoryCatalog::with_records(users()?)
                    .with_latency(latency)
                    .with_event_bus(bus.clone()),
            )
            .with_moderation(),
        )
        .serve("127.0.0.1:3000")
        .await
}
