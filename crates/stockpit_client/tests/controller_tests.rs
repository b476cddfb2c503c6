//! Controller behavior against a scripted in-memory service.
//!
//! These tests drive the public context operations end to end: the initial
//! fetch, create-then-refetch, delete-then-refetch, the draft lifecycle,
//! the health probe and the failure paths that must leave state untouched.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures_lite::future::block_on;
use leptos::prelude::*;

use stockpit_client::{
    ApiError, ApiStatus, DashboardContext, DraftField, InventoryApi, NewProduct, Product,
    ProductDraft, ProductId,
};

/// Scripted stand-in for the remote service.
///
/// Holds the authoritative product list behind a mutex, hands out clones on
/// list and mutates it on create/delete, so refetch-after-write is
/// observable end to end. Failure toggles force the error paths.
#[derive(Default)]
struct ScriptedApi {
    state: Mutex<ServiceState>,
}

#[derive(Default)]
struct ServiceState {
    products: Vec<Product>,
    next_id: i64,
    healthy: bool,
    fail_list: bool,
    fail_create: bool,
    fail_delete: bool,
    list_calls: usize,
    create_calls: usize,
}

impl ScriptedApi {
    fn new(products: Vec<Product>) -> Arc<Self> {
        let next_id = products
            .iter()
            .map(|product| product.id.0)
            .max()
            .unwrap_or(0);
        Arc::new(Self {
            state: Mutex::new(ServiceState {
                products,
                next_id,
                healthy: true,
                ..ServiceState::default()
            }),
        })
    }

    fn set_healthy(&self, healthy: bool) {
        self.state.lock().unwrap().healthy = healthy;
    }

    fn set_fail_list(&self, fail: bool) {
        self.state.lock().unwrap().fail_list = fail;
    }

    fn set_fail_create(&self, fail: bool) {
        self.state.lock().unwrap().fail_create = fail;
    }

    fn set_fail_delete(&self, fail: bool) {
        self.state.lock().unwrap().fail_delete = fail;
    }

    fn list_calls(&self) -> usize {
        self.state.lock().unwrap().list_calls
    }

    fn create_calls(&self) -> usize {
        self.state.lock().unwrap().create_calls
    }
}

#[async_trait(?Send)]
impl InventoryApi for ScriptedApi {
    async fn probe_health(&self) -> Result<(), ApiError> {
        if self.state.lock().unwrap().healthy {
            Ok(())
        } else {
            Err(ApiError::Timeout)
        }
    }

    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.list_calls += 1;
        if state.fail_list {
            return Err(ApiError::Status(500));
        }
        Ok(state.products.clone())
    }

    async fn create_product(&self, product: NewProduct) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.create_calls += 1;
        if state.fail_create {
            return Err(ApiError::Status(400));
        }
        state.next_id += 1;
        let description = if product.description.is_empty() {
            None
        } else {
            Some(product.description)
        };
        let record = Product {
            id: ProductId(state.next_id),
            name: product.name,
            description,
            price: product.price,
            quantity: product.quantity,
        };
        state.products.push(record);
        Ok(())
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_delete {
            return Err(ApiError::Status(500));
        }
        state.products.retain(|product| product.id != id);
        Ok(())
    }
}

fn product(id: i64, name: &str, price: f64, quantity: u32) -> Product {
    Product {
        id: ProductId(id),
        name: name.to_string(),
        description: None,
        price,
        quantity,
    }
}

fn seeded() -> (Arc<ScriptedApi>, DashboardContext) {
    let api = ScriptedApi::new(vec![
        product(1, "Widget", 10.0, 2),
        product(2, "Gadget", 5.0, 3),
    ]);
    let ctx = DashboardContext::new(api.clone());
    (api, ctx)
}

fn fill_draft(ctx: &DashboardContext, name: &str, price: &str, quantity: &str) {
    ctx.set_draft_field(DraftField::Name, name.to_string());
    ctx.set_draft_field(DraftField::Price, price.to_string());
    ctx.set_draft_field(DraftField::Quantity, quantity.to_string());
}

#[test]
fn test_initial_load_replaces_collection_and_finishes_loading() {
    let (_, ctx) = seeded();
    assert!(ctx.loading().get_untracked());

    block_on(ctx.initial_load());

    let expected = vec![product(1, "Widget", 10.0, 2), product(2, "Gadget", 5.0, 3)];
    assert_eq!(ctx.products().get_untracked(), expected);
    assert!(!ctx.loading().get_untracked());
    assert_eq!(ctx.error().get_untracked(), None);
}

#[test]
fn test_initial_load_failure_sets_error_and_finishes_loading() {
    let (api, ctx) = seeded();
    api.set_fail_list(true);

    block_on(ctx.initial_load());

    assert!(ctx.products().get_untracked().is_empty());
    assert!(!ctx.loading().get_untracked());
    assert_eq!(
        ctx.error().get_untracked().as_deref(),
        Some("Failed to fetch products")
    );
}

#[test]
fn test_create_refetches_instead_of_patching_locally() {
    let (api, ctx) = seeded();
    block_on(ctx.initial_load());

    let result = block_on(ctx.create(NewProduct {
        name: "Doohickey".to_string(),
        description: String::new(),
        price: 2.5,
        quantity: 4,
    }));

    assert!(result.is_ok());
    // one initial fetch plus one refetch after the write
    assert_eq!(api.list_calls(), 2);
    let products = ctx.products().get_untracked();
    assert_eq!(products.len(), 3);
    // the new row carries a server-assigned id, proof it came from the refetch
    assert_eq!(products[2].id, ProductId(3));
    assert_eq!(products[2].name, "Doohickey");
    assert_eq!(products[2].description, None);
}

#[test]
fn test_submit_draft_success_resets_draft_and_hides_form() {
    let (_, ctx) = seeded();
    block_on(ctx.initial_load());

    ctx.toggle_form();
    fill_draft(&ctx, "Doohickey", "2.50", "4");

    block_on(ctx.submit_draft());

    assert!(!ctx.form_open().get_untracked());
    assert_eq!(ctx.draft().get_untracked(), ProductDraft::default());
    assert_eq!(ctx.products().get_untracked().len(), 3);
}

#[test]
fn test_failed_create_keeps_draft_form_and_collection() {
    let (api, ctx) = seeded();
    block_on(ctx.initial_load());
    let before = ctx.products().get_untracked();

    api.set_fail_create(true);
    ctx.toggle_form();
    fill_draft(&ctx, "Doohickey", "2.50", "4");

    block_on(ctx.submit_draft());

    assert!(ctx.form_open().get_untracked());
    let draft = ctx.draft().get_untracked();
    assert_eq!(draft.name, "Doohickey");
    assert_eq!(draft.price, "2.50");
    assert_eq!(ctx.products().get_untracked(), before);
    // no refetch happened for the failed write
    assert_eq!(api.list_calls(), 1);
    assert_eq!(
        ctx.error().get_untracked().as_deref(),
        Some("Failed to create product")
    );
}

#[test]
fn test_non_numeric_draft_never_reaches_the_server() {
    let (api, ctx) = seeded();
    block_on(ctx.initial_load());

    ctx.toggle_form();
    fill_draft(&ctx, "Doohickey", "two fifty", "4");

    block_on(ctx.submit_draft());

    assert_eq!(api.create_calls(), 0);
    assert!(ctx.form_open().get_untracked());
    assert_eq!(ctx.draft().get_untracked().price, "two fifty");
    assert_eq!(
        ctx.error().get_untracked().as_deref(),
        Some("Failed to create product")
    );
}

#[test]
fn test_remove_refetches_and_drops_the_row() {
    let (api, ctx) = seeded();
    block_on(ctx.initial_load());

    let result = block_on(ctx.remove(ProductId(1)));

    assert!(result.is_ok());
    assert_eq!(api.list_calls(), 2);
    assert_eq!(
        ctx.products().get_untracked(),
        vec![product(2, "Gadget", 5.0, 3)]
    );
}

#[test]
fn test_failed_remove_keeps_collection_and_sets_error() {
    let (api, ctx) = seeded();
    block_on(ctx.initial_load());

    api.set_fail_delete(true);
    let result = block_on(ctx.remove(ProductId(1)));

    assert!(result.is_err());
    assert_eq!(ctx.products().get_untracked().len(), 2);
    assert_eq!(api.list_calls(), 1);
    assert_eq!(
        ctx.error().get_untracked().as_deref(),
        Some("Failed to delete product")
    );
}

#[test]
fn test_health_probe_settles_up() {
    let (_, ctx) = seeded();
    assert_eq!(ctx.api_status().get_untracked(), ApiStatus::Checking);

    block_on(ctx.probe_health());

    assert_eq!(ctx.api_status().get_untracked(), ApiStatus::Up);
}

#[test]
fn test_health_probe_settles_down_and_never_reverts() {
    let (api, ctx) = seeded();
    api.set_healthy(false);

    block_on(ctx.probe_health());
    assert_eq!(ctx.api_status().get_untracked(), ApiStatus::Down);

    // a later success cannot move a settled status
    api.set_healthy(true);
    block_on(ctx.probe_health());
    assert_eq!(ctx.api_status().get_untracked(), ApiStatus::Down);
}

#[test]
fn test_error_survives_later_successful_operations() {
    let (api, ctx) = seeded();
    api.set_fail_list(true);
    block_on(ctx.initial_load());
    assert!(ctx.error().get_untracked().is_some());

    api.set_fail_list(false);
    block_on(ctx.refresh());

    // the refresh replaced the collection but left the error banner up
    assert_eq!(ctx.products().get_untracked().len(), 2);
    assert_eq!(
        ctx.error().get_untracked().as_deref(),
        Some("Failed to fetch products")
    );
}

#[test]
fn test_error_is_overwritten_by_the_next_failure() {
    let (api, ctx) = seeded();
    api.set_fail_list(true);
    block_on(ctx.initial_load());
    assert_eq!(
        ctx.error().get_untracked().as_deref(),
        Some("Failed to fetch products")
    );

    api.set_fail_list(false);
    api.set_fail_delete(true);
    let _ = block_on(ctx.remove(ProductId(1)));
    assert_eq!(
        ctx.error().get_untracked().as_deref(),
        Some("Failed to delete product")
    );
}
