use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;
use shopmall_commerce::prelude::*;

/// Fixed catalog so every id always carries the same price.
fn catalog_product(id: u64) -> Product {
    Product::new(id, format!("Product {id}"), Money::new(id as i64 * 125 + 99))
}

fn command() -> impl Strategy<Value = CartCommand> {
    prop_oneof![
        3 => (1u64..6).prop_map(|id| CartCommand::AddToCart(catalog_product(id))),
        1 => (1u64..8).prop_map(|id| CartCommand::RemoveFromCart(ProductId::new(id))),
        2 => ((1u64..8), (-3i64..20)).prop_map(|(id, quantity)| CartCommand::SetQuantity {
            id: ProductId::new(id),
            quantity,
        }),
        1 => Just(CartCommand::ClearCart),
    ]
}

fn run(commands: &[CartCommand]) -> Arc<CartState> {
    let mut store = CartStore::new();
    for command in commands {
        store.dispatch(command.clone());
    }
    store.state()
}

proptest! {
    #[test]
    fn prop_aggregates_match_lines(commands in prop::collection::vec(command(), 0..60)) {
        let mut store = CartStore::new();
        for command in commands {
            let state = store.dispatch(command);
            prop_assert_eq!(state.total_items(), state.recomputed_total_items());
            prop_assert_eq!(state.total_price(), state.recomputed_total_price());
        }
    }

    #[test]
    fn prop_one_line_per_product(commands in prop::collection::vec(command(), 0..60)) {
        let state = run(&commands);
        let ids: HashSet<ProductId> = state.lines().iter().map(CartLine::id).collect();
        prop_assert_eq!(ids.len(), state.lines().len());
        prop_assert!(state.lines().iter().all(|line| line.quantity >= 1));
    }

    #[test]
    fn prop_remove_is_idempotent(
        commands in prop::collection::vec(command(), 0..40),
        id in 1u64..8,
    ) {
        let state = run(&commands);
        let remove = CartCommand::RemoveFromCart(ProductId::new(id));
        let once = apply(&state, &remove);
        let twice = apply(&once, &remove);
        prop_assert_eq!(&*once, &*twice);
        prop_assert!(Arc::ptr_eq(&once, &twice));
    }

    #[test]
    fn prop_non_positive_quantity_is_removal(
        commands in prop::collection::vec(command(), 0..40),
        id in 1u64..8,
        quantity in i64::MIN..=0,
    ) {
        let state = run(&commands);
        let removed = apply(&state, &CartCommand::RemoveFromCart(ProductId::new(id)));
        let updated = apply(&state, &CartCommand::SetQuantity { id: ProductId::new(id), quantity });
        prop_assert_eq!(&*removed, &*updated);
    }

    #[test]
    fn prop_clear_yields_initial_state(commands in prop::collection::vec(command(), 0..60)) {
        let state = run(&commands);
        let cleared = apply(&state, &CartCommand::ClearCart);
        prop_assert_eq!(&*cleared, &CartState::empty());
    }
}
