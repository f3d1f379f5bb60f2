//! Seed catalog for the winter-clothing storefront.
//!
//! Products and orders are loaded once at process start and reset on
//! restart; there is no data-loading pipeline.

use chrono::NaiveDate;
use common::{Money, ProductId};

use crate::order::Order;
use crate::product::Product;
use crate::status::OrderStatus;

/// The fixed product catalog.
pub fn seed_products() -> Vec<Product> {
    let units = Money::from_units;
    vec![
        Product::new("201", "Men's Parka Jacket", units(150), "Men's Winter Clothing"),
        Product::new("202", "Women's Wool Coat", units(180), "Women's Winter Clothing"),
        Product::new("203", "Kids' Puffer Jacket", units(90), "Kids' Winter Clothing"),
        Product::new("204", "Men's Thermal Set", units(50), "Men's Winter Clothing"),
        Product::new("205", "Women's Knitted Sweater", units(70), "Women's Winter Clothing"),
        Product::new("206", "Kids' Snow Boots", units(45), "Kids' Winter Clothing"),
        Product::new("207", "Men's Winter Scarf", units(30), "Men's Winter Accessories"),
        Product::new("208", "Women's Leather Gloves", units(40), "Women's Winter Accessories"),
        Product::new("209", "Kids' Beanie", units(20), "Kids' Winter Accessories"),
        Product::new("210", "Men's Down Jacket", units(200), "Men's Winter Clothing"),
        Product::new("211", "Women's Puffer Jacket", units(190), "Women's Winter Clothing"),
        Product::new("212", "Kids' Thermal Socks", units(15), "Kids' Winter Accessories"),
        Product::new("213", "Men's Waterproof Gloves", units(35), "Men's Winter Accessories"),
        Product::new("214", "Women's Fur-Lined Boots", units(85), "Women's Winter Clothing"),
        Product::new("215", "Kids' Snow Pants", units(50), "Kids' Winter Clothing"),
    ]
}

/// The fixed order book: one order per product 201–212, in assorted
/// lifecycle stages. Each order's `total_price` is the price its product
/// carried at creation.
pub fn seed_orders() -> Vec<Order> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d);
    let order = |id: &str, product: &str, price: i64, status, delivery_date| {
        Order::seeded(
            id,
            vec![ProductId::new(product)],
            Money::from_units(price),
            status,
            delivery_date,
        )
    };
    vec![
        order("1", "201", 150, OrderStatus::Shipped, date(2024, 9, 1)),
        order("2", "202", 180, OrderStatus::Processing, None),
        order("3", "203", 90, OrderStatus::Delivered, date(2024, 8, 25)),
        order("4", "204", 50, OrderStatus::Canceled, None),
        order("5", "205", 70, OrderStatus::Processing, None),
        order("6", "206", 45, OrderStatus::Shipped, date(2024, 9, 2)),
        order("7", "207", 30, OrderStatus::Delivered, date(2024, 8, 30)),
        order("8", "208", 40, OrderStatus::Processing, None),
        order("9", "209", 20, OrderStatus::Shipped, date(2024, 9, 3)),
        order("10", "210", 200, OrderStatus::Canceled, None),
        order("11", "211", 190, OrderStatus::Processing, None),
        order("12", "212", 15, OrderStatus::Delivered, date(2024, 8, 28)),
    ]
}
