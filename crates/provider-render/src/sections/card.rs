//! Product card section.

use provider_catalog::catalog::{Product, MAX_RATING};
use provider_catalog::grid::{ProductTile, ViewMode};

use crate::html::{escape, short_price};

/// Render one product card.
pub fn render_product_card(tile: &ProductTile<'_>, mode: ViewMode) -> String {
    let product = tile.product;
    let stock = product.stock_status();

    let featured = if product.featured {
        r#"<span class="badge badge-featured">Featured</span>"#
    } else {
        ""
    };

    let (wish_class, wish_label) = if tile.wishlisted {
        ("wishlist active", "Remove from wishlist")
    } else {
        ("wishlist", "Add to wishlist")
    };

    format!(
        r#"<article class="product-card product-card--{mode}" data-product-id="{id}">
    <div class="product-image">
        <img src="{image}" alt="{name}" loading="lazy">
        {featured}
        <button class="{wish_class}" data-action="toggle-wishlist" data-product-id="{id}" aria-label="{wish_label}" aria-pressed="{wishlisted}">&hearts;</button>
    </div>
    <div class="product-info">
        <span class="product-category">{category}</span>
        <h3 class="product-title">{name}</h3>
        <p class="product-description">{description}</p>
        <div class="product-rating">
            {stars}
            <span class="rating-value">{rating:.1}</span>
        </div>
        <div class="product-price">{price}</div>
        <div class="product-stock {stock_class}">{stock_text}</div>
    </div>
    <div class="product-actions">
        <button class="view-details" data-action="view-details" data-product-id="{id}">View Details</button>
        <button class="add-to-cart" data-action="add-to-cart" data-product-id="{id}"{disabled}>Add to Cart</button>
    </div>
</article>"#,
        mode = mode.as_str(),
        id = escape(product.id.as_str()),
        image = escape(&product.image),
        name = escape(&product.name),
        featured = featured,
        wish_class = wish_class,
        wish_label = wish_label,
        wishlisted = tile.wishlisted,
        category = escape(&product.category),
        description = escape(&product.description),
        stars = render_stars(product),
        rating = product.rating,
        price = short_price(product.price),
        stock_class = stock.as_str(),
        stock_text = escape(&stock.message()),
        disabled = if product.is_in_stock() { "" } else { " disabled" },
    )
}

/// Five stars with full, half, and empty states.
pub fn render_stars(product: &Product) -> String {
    let full_stars = u32::from(product.full_stars());
    let has_half = product.has_half_star();
    let empty_stars = 5 - full_stars - u32::from(has_half);

    let mut html = format!(
        r#"<span class="stars" aria-label="{:.1} out of 5">"#,
        product.rating.clamp(0.0, MAX_RATING)
    );

    for _ in 0..full_stars {
        html.push_str(r#"<span class="star full">★</span>"#);
    }
    if has_half {
        html.push_str(r#"<span class="star half">★</span>"#);
    }
    for _ in 0..empty_stars {
        html.push_str(r#"<span class="star empty">☆</span>"#);
    }

    html.push_str("</span>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use provider_catalog::catalog::Product;

    fn tile(product: &Product, wishlisted: bool) -> ProductTile<'_> {
        ProductTile {
            product,
            wishlisted,
        }
    }

    #[test]
    fn test_card_contents() {
        let product = Product::new("1", "Premium Wireless Headphones")
            .with_category("Electronics")
            .with_price(299.0)
            .with_rating(4.8)
            .with_stock(45)
            .featured();
        let html = render_product_card(&tile(&product, false), ViewMode::Grid);

        assert!(html.contains(r#"data-product-id="1""#));
        assert!(html.contains("product-card--grid"));
        assert!(html.contains("$299"));
        assert!(html.contains("Featured"));
        assert!(html.contains("In Stock (45 available)"));
        assert!(!html.contains(" disabled"));
        assert!(html.contains(r#"aria-pressed="false""#));
    }

    #[test]
    fn test_out_of_stock_card_disables_cart() {
        let product = Product::new("6", "Minimalist Desk Lamp").with_price(89.0);
        let html = render_product_card(&tile(&product, true), ViewMode::List);
        assert!(html.contains("Out of Stock"));
        assert!(html.contains(" disabled>Add to Cart"));
        assert!(html.contains("wishlist active"));
        assert!(html.contains("product-card--list"));
    }

    #[test]
    fn test_card_escapes_text() {
        let product = Product::new("x", "<script>").with_description("a & b");
        let html = render_product_card(&tile(&product, false), ViewMode::Grid);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
    }

    #[test]
    fn test_stars() {
        let rated = |rating| Product::new("r", "Rated").with_rating(rating);

        let html = render_stars(&rated(4.5));
        assert_eq!(html.matches("star full").count(), 4);
        assert_eq!(html.matches("star half").count(), 1);
        assert_eq!(html.matches("star empty").count(), 0);

        let html = render_stars(&rated(5.0));
        assert_eq!(html.matches("star full").count(), 5);

        let html = render_stars(&rated(0.0));
        assert_eq!(html.matches("star empty").count(), 5);

        let html = render_stars(&rated(4.4));
        assert_eq!(html.matches("star full").count(), 4);
        assert_eq!(html.matches("star empty").count(), 1);
        assert!(html.contains(r#"aria-label="4.4 out of 5""#));
    }
}
