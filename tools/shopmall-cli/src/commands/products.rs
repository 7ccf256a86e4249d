//! Product listing page.

use anyhow::Result;
use shopmall_commerce::cart::CartState;
use shopmall_commerce::catalog::{CatalogProvider, Product};

use super::ProductsArgs;
use crate::context::Context;
use crate::pages::Storefront;

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let products: Vec<Product> = catalog
        .products()
        .iter()
        .filter(|p| !args.on_sale || p.is_on_sale())
        .cloned()
        .collect();

    // A one-shot listing has no session, so the cart is always empty.
    let state = CartState::empty();
    let storefront = Storefront::new(&ctx.config.storefront.name, ctx.config.pricing.clone());
    ctx.output.show(&products, || {
        let mut page = storefront.header(&state);
        page.extend(storefront.product_listing(&products, &state));
        page.extend(storefront.footer());
        page
    });
    ctx.output
        .debug(&format!("{} of {} products listed", products.len(), catalog.len()));
    Ok(())
}
