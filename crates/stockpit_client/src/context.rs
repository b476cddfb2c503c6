//! Shared controller state and the operations that drive it.

use std::sync::{Arc, Mutex};

use leptos::prelude::*;

use crate::api::InventoryApi;
use crate::draft::{DraftField, ProductDraft};
use crate::error::ApiError;
use crate::types::{ApiStatus, NewProduct, Product, ProductId};

// User-visible failure strings, one per data operation.
const FETCH_ERROR: &str = "Failed to fetch products";
const CREATE_ERROR: &str = "Failed to create product";
const DELETE_ERROR: &str = "Failed to delete product";

/// Shared controller state for the dashboard.
///
/// Created by `DashboardProvider` and handed to components through the
/// hooks. One instance owns every piece of view state, and each field has
/// a fixed set of writers:
///
/// - `products` is replaced wholesale by `initial_load` / `refresh`,
///   never patched in place.
/// - `loading` starts `true` and is set to `false` exactly once, by
///   `initial_load`.
/// - `error` is written by failed fetch/create/delete operations. No
///   success path clears it, so a banner can outlive the failure it
///   reports; it only changes when a later failure overwrites it.
/// - `api_status` is settled at most once, by `probe_health`.
/// - `draft` and `form_open` belong to the draft lifecycle
///   (`set_draft_field`, `toggle_form`, `submit_draft`).
#[derive(Clone)]
pub struct DashboardContext {
    api: Arc<dyn InventoryApi>,
    products: RwSignal<Vec<Product>>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    api_status: RwSignal<ApiStatus>,
    draft: RwSignal<ProductDraft>,
    form_open: RwSignal<bool>,
    /// Monotonic id handed to each refresh; stale responses are discarded.
    refresh_generation: Arc<Mutex<u64>>,
}

impl DashboardContext {
    /// Create a context over the given transport.
    ///
    /// Normally called by `DashboardProvider`; tests call it directly with
    /// a scripted transport.
    pub fn new(api: Arc<dyn InventoryApi>) -> Self {
        Self {
            api,
            products: RwSignal::new(Vec::new()),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
            api_status: RwSignal::new(ApiStatus::Checking),
            draft: RwSignal::new(ProductDraft::default()),
            form_open: RwSignal::new(false),
            refresh_generation: Arc::new(Mutex::new(0)),
        }
    }

    /// The current product collection, in server order.
    pub fn products(&self) -> ReadSignal<Vec<Product>> {
        self.products.read_only()
    }

    /// Whether the first fetch is still outstanding.
    pub fn loading(&self) -> ReadSignal<bool> {
        self.loading.read_only()
    }

    /// The most recent data-operation failure, if any.
    pub fn error(&self) -> ReadSignal<Option<String>> {
        self.error.read_only()
    }

    /// Service availability as settled by the health probe.
    pub fn api_status(&self) -> ReadSignal<ApiStatus> {
        self.api_status.read_only()
    }

    /// The in-progress creation draft.
    pub fn draft(&self) -> ReadSignal<ProductDraft> {
        self.draft.read_only()
    }

    /// Whether the creation form is visible.
    pub fn form_open(&self) -> ReadSignal<bool> {
        self.form_open.read_only()
    }

    /// Probe the service once and settle `api_status`.
    ///
    /// Runs concurrently with `initial_load`; neither waits for the other.
    /// Probe failures map to `ApiStatus::Down` and are never surfaced
    /// through `error`.
    pub async fn probe_health(&self) {
        match self.api.probe_health().await {
            Ok(()) => self.settle_health(ApiStatus::Up),
            Err(err) => {
                log::warn!("health probe failed: {}", err);
                self.settle_health(ApiStatus::Down);
            }
        }
    }

    /// Move `Checking` to the probe outcome. Anything already settled is
    /// left alone, so the status can neither change twice nor revert.
    fn settle_health(&self, outcome: ApiStatus) {
        self.api_status.update(|status| {
            if *status == ApiStatus::Checking {
                *status = outcome;
            }
        });
    }

    /// First fetch after mount: refresh, then mark loading finished.
    ///
    /// `loading` flips to `false` whether the fetch succeeded or not;
    /// a failure leaves the collection empty with `error` set.
    pub async fn initial_load(&self) {
        self.refresh().await;
        self.loading.set(false);
    }

    /// Refetch the whole collection and replace the local copy.
    ///
    /// Each refresh takes a generation number. If another refresh was
    /// issued while this one was in flight, the late response is discarded,
    /// so the displayed collection always reflects the most recently issued
    /// fetch rather than whichever response happened to land last.
    pub async fn refresh(&self) {
        let generation = self.begin_refresh();
        let result = self.api.list_products().await;
        self.apply_refresh(generation, result);
    }

    fn begin_refresh(&self) -> u64 {
        let mut current = self.refresh_generation.lock().unwrap();
        *current += 1;
        *current
    }

    fn apply_refresh(&self, generation: u64, result: Result<Vec<Product>, ApiError>) {
        if *self.refresh_generation.lock().unwrap() != generation {
            log::debug!("discarding stale product refresh (generation {})", generation);
            return;
        }
        match result {
            Ok(products) => self.products.set(products),
            Err(err) => {
                log::warn!("product fetch failed: {}", err);
                self.error.set(Some(FETCH_ERROR.to_string()));
            }
        }
    }

    /// Create a product on the server, then refetch the collection.
    ///
    /// On failure nothing is refetched, the collection keeps its last
    /// synchronized contents and `error` is set.
    pub async fn create(&self, product: NewProduct) -> Result<(), ApiError> {
        match self.api.create_product(product).await {
            Ok(()) => {
                self.refresh().await;
                Ok(())
            }
            Err(err) => {
                log::warn!("product create failed: {}", err);
                self.error.set(Some(CREATE_ERROR.to_string()));
                Err(err)
            }
        }
    }

    /// Delete a product on the server, then refetch the collection.
    pub async fn remove(&self, id: ProductId) -> Result<(), ApiError> {
        match self.api.delete_product(id).await {
            Ok(()) => {
                self.refresh().await;
                Ok(())
            }
            Err(err) => {
                log::warn!("product delete failed: {}", err);
                self.error.set(Some(DELETE_ERROR.to_string()));
                Err(err)
            }
        }
    }

    /// Replace a single draft field with raw input text.
    pub fn set_draft_field(&self, field: DraftField, value: String) {
        self.draft.update(|draft| draft.set_field(field, value));
    }

    /// Show or hide the creation form. Closing it resets the draft.
    pub fn toggle_form(&self) {
        let opening = !self.form_open.get_untracked();
        self.form_open.set(opening);
        if !opening {
            self.draft.set(ProductDraft::default());
        }
    }

    /// Submit the current draft as a new product.
    ///
    /// Coerces the numeric fields, then runs `create`. On success the form
    /// is hidden and the draft reset. On any failure, including a draft
    /// that does not parse (which never reaches the server), the draft and
    /// the open form survive so the user can correct and retry.
    pub async fn submit_draft(&self) {
        let payload = match self.draft.get_untracked().to_payload() {
            Ok(payload) => payload,
            Err(err) => {
                log::warn!("draft rejected before submission: {}", err);
                self.error.set(Some(CREATE_ERROR.to_string()));
                return;
            }
        };

        if self.create(payload).await.is_ok() {
            self.form_open.set(false);
            self.draft.set(ProductDraft::default());
        }
    }
}
