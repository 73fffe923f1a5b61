//! Product detail panel.

use provider_catalog::detail::ProductDetail;

use super::render_stars;
use crate::html::{escape, price, short_price};

/// Render the detail panel for the product and its chosen quantity.
pub fn render_product_detail(detail: &ProductDetail) -> String {
    let product = &detail.product;

    let stock = if product.is_in_stock() {
        format!(
            r#"<span class="stock in-stock">In Stock ({} available)</span>"#,
            product.stock
        )
    } else {
        r#"<span class="stock out-of-stock">Out of Stock</span>"#.to_string()
    };

    let featured = if product.featured {
        r#"<span class="badge badge-featured">Featured Product</span>"#
    } else {
        ""
    };

    let add_label = if detail.can_add_to_cart() {
        format!(
            "Add {} to Cart - {}",
            detail.quantity(),
            price(detail.line_total())
        )
    } else {
        "Out of Stock".to_string()
    };

    format!(
        r#"<div class="product-detail" role="dialog" aria-modal="true" data-product-id="{id}">
    <button class="close" data-action="close-details" aria-label="Close">&times;</button>
    <div class="detail-image">
        <img src="{image}" alt="{name}">
        {featured}
    </div>
    <div class="detail-info">
        <span class="product-category">{category}</span>
        <h2>{name}</h2>
        <div class="product-rating">{stars}<span class="rating-value">{rating:.1}</span></div>
        <div class="product-price">{unit_price}</div>
        <p class="product-description">{description}</p>
        <div class="availability">{stock}</div>
        <div class="quantity-selector">
            <button data-action="decrement" aria-label="Decrease quantity"{dec_disabled}>-</button>
            <span class="quantity">{quantity}</span>
            <button data-action="increment" aria-label="Increase quantity"{inc_disabled}>+</button>
        </div>
        <button class="add-to-cart" data-action="add-to-cart"{add_disabled}>{add_label}</button>
    </div>
</div>"#,
        id = escape(product.id.as_str()),
        image = escape(&product.image),
        name = escape(&product.name),
        featured = featured,
        category = escape(&product.category),
        stars = render_stars(product),
        rating = product.rating,
        unit_price = short_price(product.price),
        description = escape(&product.description),
        stock = stock,
        quantity = detail.quantity(),
        dec_disabled = disabled(!detail.can_decrement()),
        inc_disabled = disabled(!detail.can_increment()),
        add_disabled = disabled(!detail.can_add_to_cart()),
        add_label = add_label,
    )
}

fn disabled(flag: bool) -> &'static str {
    if flag {
        " disabled"
    } else {
        ""
    }
}
