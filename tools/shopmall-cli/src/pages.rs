//! Storefront pages rendered as terminal lines.
//!
//! Pages only read cart snapshots; every mutation goes through the cart's
//! command API.

use console::style;
use shopmall_commerce::cart::{CartLine, CartState, CartSummary};
use shopmall_commerce::catalog::{Product, MAX_RATING};
use shopmall_commerce::{Money, PriceFormat};

/// Page renderer for one storefront.
#[derive(Debug, Clone)]
pub struct Storefront {
    name: String,
    prices: PriceFormat,
}

impl Storefront {
    pub fn new(name: impl Into<String>, prices: PriceFormat) -> Self {
        Self {
            name: name.into(),
            prices,
        }
    }

    fn price(&self, money: Money) -> String {
        self.prices.format(money)
    }

    /// Navigation bar with the cart badge.
    pub fn header(&self, state: &CartState) -> Vec<String> {
        let badge = if state.total_items() > 0 {
            format!("Cart ({})", style(state.total_items()).red().bold())
        } else {
            "Cart".to_string()
        };
        vec![
            String::new(),
            format!(
                "{}   Home · Products · {} · Login",
                style(&self.name).bold(),
                badge
            ),
            style("─".repeat(60)).dim().to_string(),
        ]
    }

    pub fn footer(&self) -> Vec<String> {
        vec![
            style("─".repeat(60)).dim().to_string(),
            style(format!("{} · Free shipping on every order", self.name))
                .dim()
                .to_string(),
        ]
    }

    /// Product listing page.
    pub fn product_listing(&self, products: &[Product], state: &CartState) -> Vec<String> {
        let mut lines = vec![style("Featured products").bold().to_string()];

        if state.total_items() > 0 {
            lines.push(format!(
                "Your cart holds {} item(s). Type `cart` to review it.",
                state.total_items()
            ));
        }
        lines.push(String::new());

        for product in products {
            lines.extend(self.product_card(product, state.contains(product.id)));
            lines.push(String::new());
        }
        lines
    }

    /// One product card.
    pub fn product_card(&self, product: &Product, in_cart: bool) -> Vec<String> {
        let mut title = format!("[{}] {}", product.id, style(&product.name).bold());
        if let Some(percent) = product.discount_percentage() {
            title.push_str(&format!("  {}", style(format!("-{percent}%")).red()));
        }

        let mut price = style(self.price(product.price)).red().to_string();
        if let (true, Some(original)) = (product.is_on_sale(), product.original_price) {
            price.push_str(&format!(
                "  {}",
                style(format!("was {}", self.price(original))).dim()
            ));
        }

        let action = if in_cart {
            style("In cart").green().to_string()
        } else {
            format!("Add with `add {}`", product.id)
        };

        let mut card = vec![
            title,
            format!("    {price}"),
            format!(
                "    {} {:.1} ({} reviews)",
                stars(product),
                product.rating,
                product.reviews
            ),
        ];
        if !product.description.is_empty() {
            card.push(format!("    {}", product.description));
        }
        card.push(format!("    {action}"));
        card
    }

    /// Cart page: line list plus order summary, or the empty-cart notice.
    pub fn cart_page(&self, state: &CartState) -> Vec<String> {
        if state.is_empty() {
            return vec![
                style("Your cart is empty").bold().to_string(),
                "Browse the catalog with `list` and add something you like.".to_string(),
            ];
        }

        let mut lines = vec![
            style("Shopping cart").bold().to_string(),
            format!("You have {} item(s)", state.total_items()),
            String::new(),
        ];
        for line in state.lines() {
            lines.push(self.cart_line(line));
        }
        lines.push(String::new());
        lines.extend(self.order_summary(&CartSummary::from_state(state)));
        lines
    }

    fn cart_line(&self, line: &CartLine) -> String {
        let mut unit = self.price(line.unit_price());
        if let (true, Some(original)) = (line.product.is_on_sale(), line.product.original_price) {
            unit.push_str(&format!(" {}", style(format!("(was {})", self.price(original))).dim()));
        }
        format!(
            "[{}] {}  {} x {} = {}",
            line.id(),
            line.product.name,
            line.quantity,
            unit,
            style(self.price(line.line_total())).bold()
        )
    }

    /// Order summary panel.
    pub fn order_summary(&self, summary: &CartSummary) -> Vec<String> {
        let mut lines = vec![
            style("Order summary").underlined().to_string(),
            format!("  Items      {}", summary.total_items),
            format!("  Subtotal   {}", self.price(summary.subtotal)),
            format!("  Shipping   {}", style("Free").green()),
        ];
        if summary.has_savings() {
            lines.push(format!("  You save   {}", self.price(summary.savings)));
        }
        lines.push(format!(
            "  Total      {}",
            style(self.price(summary.grand_total)).red().bold()
        ));
        lines
    }
}

fn stars(product: &Product) -> String {
    let full = product.full_stars() as usize;
    let empty = (MAX_RATING as usize).saturating_sub(full);
    format!("{}{}", "★".repeat(full), "☆".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopmall_commerce::cart::CartStore;
    use shopmall_commerce::catalog::{CatalogProvider, StaticCatalog};
    use shopmall_commerce::ProductId;

    fn plain(lines: Vec<String>) -> String {
        lines
            .iter()
            .map(|l| console::strip_ansi_codes(l).into_owned())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn storefront() -> Storefront {
        Storefront::new("ShopMall", PriceFormat::default())
    }

    #[test]
    fn test_header_badge() {
        let mut store = CartStore::new();
        let empty = plain(storefront().header(&store.state()));
        assert!(empty.contains("Cart ·"));

        let catalog = StaticCatalog::sample();
        store.add_to_cart(catalog.get(ProductId::new(2)).cloned().unwrap());
        let header = plain(storefront().header(&store.state()));
        assert!(header.contains("Cart (1)"));
    }

    #[test]
    fn test_product_card_on_sale() {
        let catalog = StaticCatalog::sample();
        let phone = catalog.get(ProductId::new(1)).unwrap();
        let card = plain(storefront().product_card(phone, false));
        assert!(card.contains("[1] Apple iPhone 15 Pro  -8%"));
        assert!(card.contains("NT$ 36,900  was NT$ 39,900"));
        assert!(card.contains("★★★★☆ 4.8 (1247 reviews)"));
        assert!(card.contains("Add with `add 1`"));

        let card = plain(storefront().product_card(phone, true));
        assert!(card.contains("In cart"));
    }

    #[test]
    fn test_listing_banner_only_with_items() {
        let catalog = StaticCatalog::sample();
        let mut store = CartStore::new();
        let listing = plain(storefront().product_listing(catalog.products(), &store.state()));
        assert!(!listing.contains("Your cart holds"));

        store.add_to_cart(catalog.get(ProductId::new(4)).cloned().unwrap());
        let listing = plain(storefront().product_listing(catalog.products(), &store.state()));
        assert!(listing.contains("Your cart holds 1 item(s)"));
    }

    #[test]
    fn test_empty_cart_page() {
        let page = plain(storefront().cart_page(&CartState::empty()));
        assert!(page.contains("Your cart is empty"));
    }

    #[test]
    fn test_cart_page_with_summary() {
        let catalog = StaticCatalog::sample();
        let mut store = CartStore::new();
        let switch = catalog.get(ProductId::new(5)).cloned().unwrap();
        store.add_to_cart(switch.clone());
        store.add_to_cart(switch);

        let page = plain(storefront().cart_page(&store.state()));
        assert!(page.contains("[5] Nintendo Switch OLED  2 x NT$ 10,980 (was NT$ 12,980) = NT$ 21,960"));
        assert!(page.contains("Subtotal   NT$ 21,960"));
        assert!(page.contains("Shipping   Free"));
        assert!(page.contains("You save   NT$ 4,000"));
        assert!(page.contains("Total      NT$ 21,960"));
    }
}
