//! Interactive shopping session.
//!
//! One cart lives for the whole session. The session only talks to it
//! through its handle and redraws the header whenever the snapshot changes.

use std::sync::Arc;

use anyhow::{Context as _, Result};
use shopmall_commerce::cart::{spawn_cart, CartHandle, CartState, CartStore};
use shopmall_commerce::catalog::{CatalogProvider, StaticCatalog};
use shopmall_commerce::ProductId;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::watch;

use super::ShopArgs;
use crate::context::Context;
use crate::pages::Storefront;

/// A parsed session command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopCommand {
    List,
    Add(ProductId),
    Remove(ProductId),
    Quantity(ProductId, i64),
    Increment(ProductId),
    Decrement(ProductId),
    Clear,
    Cart,
    Help,
    Quit,
}

const HELP: &[&str] = &[
    "list              show the product listing",
    "add <id>          add one unit of a product",
    "remove <id>       remove a product from the cart",
    "qty <id> <n>      set a quantity (0 or less removes)",
    "inc <id>          one more unit",
    "dec <id>          one fewer unit",
    "clear             empty the cart",
    "cart              show the cart and order summary",
    "help              show this help",
    "quit              leave the shop",
];

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> Result<Option<ShopCommand>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let verb = words.next().unwrap_or_default().to_lowercase();
    let args: Vec<&str> = words.collect();

    let id = |index: usize| -> Result<ProductId, String> {
        let raw = args
            .get(index)
            .ok_or_else(|| format!("`{verb}` needs a product id"))?;
        raw.parse()
            .map_err(|_| format!("`{raw}` is not a product id"))
    };

    let command = match verb.as_str() {
        "list" | "ls" | "products" => ShopCommand::List,
        "add" => ShopCommand::Add(id(0)?),
        "remove" | "rm" => ShopCommand::Remove(id(0)?),
        "qty" | "quantity" | "set" => {
            let raw = args
                .get(1)
                .ok_or_else(|| format!("`{verb}` needs a product id and a quantity"))?;
            let quantity = raw
                .parse()
                .map_err(|_| format!("`{raw}` is not a quantity"))?;
            ShopCommand::Quantity(id(0)?, quantity)
        }
        "inc" | "+" => ShopCommand::Increment(id(0)?),
        "dec" | "-" => ShopCommand::Decrement(id(0)?),
        "clear" => ShopCommand::Clear,
        "cart" => ShopCommand::Cart,
        "help" | "?" => ShopCommand::Help,
        "quit" | "exit" | "q" => ShopCommand::Quit,
        other => return Err(format!("Unknown command `{other}`. Type `help` for a list.")),
    };
    Ok(Some(command))
}

struct Session<'a> {
    ctx: &'a Context,
    catalog: StaticCatalog,
    storefront: Storefront,
    cart: CartHandle,
    changes: watch::Receiver<Arc<CartState>>,
}

impl Session<'_> {
    /// Execute a command. Returns false when the session should end.
    async fn execute(&mut self, command: ShopCommand) -> Result<bool> {
        match command {
            ShopCommand::List => self.show_listing(),
            ShopCommand::Cart => self.show_cart(),
            ShopCommand::Help => {
                for line in HELP {
                    self.ctx.output.list_item(line);
                }
            }
            ShopCommand::Quit => return Ok(false),
            ShopCommand::Add(id) => match self.catalog.require(id) {
                Ok(product) => {
                    self.cart.add_to_cart(product.clone()).await?;
                }
                Err(e) => self.ctx.output.warn(&e.to_string()),
            },
            ShopCommand::Remove(id) => {
                self.cart.remove_from_cart(id).await?;
            }
            ShopCommand::Quantity(id, quantity) => {
                self.cart.set_quantity(id, quantity).await?;
            }
            ShopCommand::Increment(id) => {
                let current = self.current_quantity(id);
                self.cart.set_quantity(id, current.saturating_add(1)).await?;
            }
            ShopCommand::Decrement(id) => {
                let current = self.current_quantity(id);
                self.cart.set_quantity(id, current - 1).await?;
            }
            ShopCommand::Clear => {
                self.cart.clear_cart().await?;
            }
        }

        self.redraw_if_changed()?;
        Ok(true)
    }

    fn current_quantity(&self, id: ProductId) -> i64 {
        self.cart
            .state()
            .line(id)
            .map_or(0, |line| i64::try_from(line.quantity).unwrap_or(i64::MAX))
    }

    fn redraw_if_changed(&mut self) -> Result<()> {
        if !self
            .changes
            .has_changed()
            .context("Cart task stopped unexpectedly")?
        {
            return Ok(());
        }
        let state = self.changes.borrow_and_update().clone();
        self.ctx
            .output
            .show(&*state, || self.storefront.header(&state));
        Ok(())
    }

    fn show_listing(&self) {
        let state = self.cart.state();
        let products = self.catalog.products();
        self.ctx.output.show(&products, || {
            let mut page = self.storefront.header(&state);
            page.extend(self.storefront.product_listing(products, &state));
            page
        });
    }

    fn show_cart(&self) {
        let state = self.cart.state();
        self.ctx
            .output
            .show(&*state, || self.storefront.cart_page(&state));
    }
}

/// Run the shop command.
pub async fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let storefront = Storefront::new(&ctx.config.storefront.name, ctx.config.pricing.clone());
    let cart = spawn_cart(CartStore::new());
    let changes = cart.subscribe();

    let interactive = args.script.is_none() && !ctx.output.is_json();
    let input: Box<dyn AsyncBufRead + Unpin + Send> = match &args.script {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("Failed to open script: {}", path))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(tokio::io::stdin())),
    };

    let mut session = Session {
        ctx,
        catalog,
        storefront,
        cart: cart.clone(),
        changes,
    };
    session.show_listing();
    if interactive {
        ctx.output.info("Type `help` for commands.");
    }

    let mut lines = input.lines();
    loop {
        if interactive {
            ctx.output.prompt();
        }
        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };

        match parse_command(&line) {
            Ok(Some(command)) => {
                tracing::debug!(?command, "session command");
                if !session.execute(command).await? {
                    break;
                }
            }
            Ok(None) => {}
            Err(message) => ctx.output.warn(&message),
        }
    }

    let state = cart.state();
    if !state.is_empty() {
        ctx.output.debug(&format!(
            "Session ended with {} item(s) in the cart; carts are not saved.",
            state.total_items()
        ));
    }
    cart.close();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u64) -> ProductId {
        ProductId::new(n)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("list"), Ok(Some(ShopCommand::List)));
        assert_eq!(parse_command("  ADD 3 "), Ok(Some(ShopCommand::Add(id(3)))));
        assert_eq!(parse_command("rm 2"), Ok(Some(ShopCommand::Remove(id(2)))));
        assert_eq!(
            parse_command("qty 1 -5"),
            Ok(Some(ShopCommand::Quantity(id(1), -5)))
        );
        assert_eq!(parse_command("inc 4"), Ok(Some(ShopCommand::Increment(id(4)))));
        assert_eq!(parse_command("dec 4"), Ok(Some(ShopCommand::Decrement(id(4)))));
        assert_eq!(parse_command("clear"), Ok(Some(ShopCommand::Clear)));
        assert_eq!(parse_command("q"), Ok(Some(ShopCommand::Quit)));
    }

    #[test]
    fn test_parse_skips_blank_and_comments() {
        assert_eq!(parse_command(""), Ok(None));
        assert_eq!(parse_command("   "), Ok(None));
        assert_eq!(parse_command("# add 1"), Ok(None));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("add").is_err());
        assert!(parse_command("add phone").is_err());
        assert!(parse_command("qty 1").is_err());
        assert!(parse_command("qty 1 many").is_err());
        assert!(parse_command("checkout").is_err());
    }
}
