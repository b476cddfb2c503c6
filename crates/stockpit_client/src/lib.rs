//! # Stockpit Client
//!
//! Reactive synchronization controller for a product-inventory dashboard,
//! built on Leptos signals.
//!
//! The crate keeps a browser-local view of a remote product collection
//! consistent with the server. It follows a refetch-after-write policy:
//! after every successful create or delete the whole collection is re-read
//! rather than patched in place, so the displayed list always matches
//! server truth. Around the collection it manages the creation-form draft
//! lifecycle and a one-shot health probe that settles the service status
//! for the page load.
//!
//! ## Features
//!
//! - **Provider/hook API**: wrap the app in [`DashboardProvider`], read
//!   state anywhere with hooks like [`use_products`].
//! - **Refetch-after-write**: mutations never patch the local collection.
//! - **Stale-response guard**: overlapping refreshes resolve to the most
//!   recently issued one, not whichever response lands last.
//! - **Swappable transport**: the [`InventoryApi`] trait separates the
//!   controller from the browser fetch layer, so tests run against a
//!   scripted in-memory service.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use stockpit_client::{DashboardProvider, use_inventory_stats, use_products};
//!
//! #[component]
//! fn App() -> impl IntoView {
//!     view! {
//!         <DashboardProvider api_url="http://localhost:8080/api".to_string()>
//!             <Inventory/>
//!         </DashboardProvider>
//!     }
//! }
//!
//! #[component]
//! fn Inventory() -> impl IntoView {
//!     let products = use_products();
//!     let stats = use_inventory_stats();
//!
//!     view! {
//!         <p>{move || stats.get().count} " products"</p>
//!         <ul>
//!             <For
//!                 each=move || products.get()
//!                 key=|product| product.id
//!                 let:product
//!             >
//!                 <li>{product.name.clone()}</li>
//!             </For>
//!         </ul>
//!     }
//! }
//! ```

// Module declarations
mod api;
mod context;
mod draft;
mod error;
mod hooks;
mod provider;
mod stats;
mod types;

// Re-exports
pub use api::{HEALTH_PROBE_TIMEOUT_MS, HttpInventoryApi, InventoryApi};
pub use context::DashboardContext;
pub use draft::{DraftField, DraftParseError, ProductDraft};
pub use error::ApiError;
pub use hooks::{
    use_api_status, use_dashboard, use_draft, use_inventory_stats, use_products, use_view_state,
};
pub use provider::DashboardProvider;
pub use stats::InventoryStats;
pub use types::{ApiStatus, NewProduct, Product, ProductId};
