//! Built-in sample catalog, used when no product list is supplied.

use super::Product;

/// The six hard-coded sample products.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new("1", "Premium Wireless Headphones")
            .with_description("High-quality sound with active noise cancellation")
            .with_category("Electronics")
            .with_price(299.0)
            .with_image(unsplash("photo-1505740420928-5e560c06d30e"))
            .with_rating(4.8)
            .with_stock(45)
            .featured(),
        Product::new("2", "Smart Watch Pro")
            .with_description("Track your fitness and stay connected")
            .with_category("Electronics")
            .with_price(399.0)
            .with_image(unsplash("photo-1523275335684-37898b6baf30"))
            .with_rating(4.6)
            .with_stock(12),
        Product::new("3", "Leather Messenger Bag")
            .with_description("Handcrafted genuine leather bag")
            .with_category("Fashion")
            .with_price(179.0)
            .with_image(unsplash("photo-1553062407-98eeb64c6a62"))
            .with_rating(4.9)
            .with_stock(28)
            .featured(),
        Product::new("4", "Organic Coffee Beans")
            .with_description("Single-origin Ethiopian coffee")
            .with_category("Food")
            .with_price(24.0)
            .with_image(unsplash("photo-1559056199-641a0ac8b55e"))
            .with_rating(4.7)
            .with_stock(156),
        Product::new("5", "Yoga Mat Premium")
            .with_description("Non-slip eco-friendly material")
            .with_category("Sports")
            .with_price(49.0)
            .with_image(unsplash("photo-1601925260368-ae2f83cf8b7f"))
            .with_rating(4.5)
            .with_stock(8),
        Product::new("6", "Minimalist Desk Lamp")
            .with_description("LED lamp with adjustable brightness")
            .with_category("Home")
            .with_price(89.0)
            .with_image(unsplash("photo-1507473885765-e6ed057f782c"))
            .with_rating(4.4)
            .with_stock(0),
    ]
}

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/{}?w=500&h=500&fit=crop", photo)
}
