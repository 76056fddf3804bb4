//! Shared fixtures for integration tests

#![allow(dead_code)]

use catalog::prelude::*;

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// The storefront grid
pub fn storefront() -> Vec<Product> {
    vec![
        Product::new(1, "Modern Wooden Coffee Table", 120_000.0, "Living Room", "Kigali"),
        Product::new(2, "Velvet Armchair", 95_000.0, "Living Room", "Kigali"),
        Product::new(3, "Office Chair", 75_000.0, "Office", "Musanze"),
        Product::new(4, "Minimalist Dining Table", 210_000.0, "Dining", "Kigali"),
        Product::new(5, "Luxury King Bed", 350_000.0, "Bedroom", "Huye"),
        Product::new(6, "Study Desk", 85_000.0, "Office", "Musanze"),
        Product::new(7, "Lounge Sofa", 220_000.0, "Living Room", "Huye"),
        Product::new(8, "Bookshelf", 60_000.0, "Office", "Kigali"),
        Product::new(9, "Outdoor Patio Set", 180_000.0, "Outdoor", "Rwamagana"),
        Product::new(10, "Custom Coffee Table", 140_000.0, "Custom Made", "Kigali"),
        Product::new(11, "Bar Stool", 45_000.0, "Dining", "Rubavu"),
        Product::new(12, "Bedside Lamp", 50_000.0, "Bedroom", "Kigali"),
    ]
}

pub fn orders() -> Vec<Order> {
    vec![
        Order::new(
            "#HL-2841",
            Customer::named("Alice Johnson"),
            day(2023, 6, 15),
            245_000.0,
            OrderStatus::Delivered,
            2,
        ),
        Order::new(
            "#HL-2840",
            Customer::named("Robert Smith"),
            day(2023, 6, 14),
            180_000.0,
            OrderStatus::Shipped,
            1,
        ),
        Order::new(
            "#HL-2839",
            Customer::named("Maria Garcia"),
            day(2023, 6, 13),
            320_000.0,
            OrderStatus::Pending,
            3,
        ),
        Order::new(
            "#HL-2838",
            Customer::named("James Wilson"),
            day(2023, 6, 12),
            95_000.0,
            OrderStatus::Delivered,
            1,
        ),
        Order::new(
            "#HL-2837",
            Customer::named("Sarah Miller"),
            day(2023, 6, 11),
            210_000.0,
            OrderStatus::Shipped,
            2,
        ),
    ]
}

pub fn submissions() -> Vec<ProductSubmission> {
    vec![
        ProductSubmission::new(
            "1",
            "Velvet Sofa",
            "Living Room",
            120_000.0,
            "Kigali Crafts",
            day(2024, 3, 1),
        ),
        ProductSubmission::new(
            "2",
            "Oak Desk",
            "Office",
            75_000.0,
            "Musanze Wood",
            day(2024, 3, 2),
        ),
        ProductSubmission::new("3", "Bar Stool", "Kitchen", 45_000.0, "Huye Home", day(2024, 3, 3)),
        ProductSubmission::new(
            "4",
            "Canopy Bed",
            "Bedroom",
            280_000.0,
            "Kigali Crafts",
            day(2024, 3, 4),
        )
        .with_status(ApprovalStatus::Approved),
    ]
}

pub fn sellers() -> Vec<SellerApplication> {
    vec![
        SellerApplication::new(
            "s-1",
            "Aline Uwase",
            "aline@example.rw",
            "Nyamirambo Woodworks",
            "Kigali",
            day(2024, 1, 15),
        ),
        SellerApplication::new(
            "s-2",
            "Jean Habimana",
            "jean@example.rw",
            "Huye Home",
            "Huye",
            day(2024, 1, 20),
        ),
    ]
}

pub fn users() -> Vec<PlatformUser> {
    vec![
        PlatformUser::new(
            "u-1",
            "Eric Mugisha",
            "eric@example.rw",
            UserType::Seller,
            day(2023, 11, 4),
        ),
        PlatformUser::new(
            "u-2",
            "Grace Ingabire",
            "grace@example.rw",
            UserType::Buyer,
            day(2023, 12, 1),
        ),
        PlatformUser::new(
            "u-3",
            "Patrick Nshuti",
            "patrick@example.rw",
            UserType::Buyer,
            day(2024, 2, 9),
        ),
    ]
}

pub fn ids<T: Record>(records: &[T]) -> Vec<T::Id> {
    records.iter().map(|r| r.id().clone()).collect()
}
