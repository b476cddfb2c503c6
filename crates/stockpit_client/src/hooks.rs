//! Hooks for reading controller state inside components.

use leptos::prelude::*;

use crate::context::DashboardContext;
use crate::draft::ProductDraft;
use crate::stats::InventoryStats;
use crate::types::{ApiStatus, Product};

/// Hook returning the shared [`DashboardContext`].
///
/// Use this when a component needs to invoke operations (submit, delete,
/// toggle) rather than just read state.
///
/// # Panics
///
/// Panics if called outside of a `DashboardProvider` context.
///
/// # Example
///
/// ```rust,ignore
/// use leptos::prelude::*;
/// use leptos::task::spawn_local;
/// use stockpit_client::{use_dashboard, ProductId};
///
/// #[component]
/// fn DeleteButton(id: ProductId) -> impl IntoView {
///     let ctx = use_dashboard();
///     view! {
///         <button on:click=move |_| {
///             let ctx = ctx.clone();
///             spawn_local(async move {
///                 let _ = ctx.remove(id).await;
///             });
///         }>"Delete"</button>
///     }
/// }
/// ```
pub fn use_dashboard() -> DashboardContext {
    expect_context::<DashboardContext>()
}

/// Hook to read the product collection.
///
/// # Panics
///
/// Panics if called outside of a `DashboardProvider` context.
pub fn use_products() -> ReadSignal<Vec<Product>> {
    use_dashboard().products()
}

/// Hook to read the service availability settled by the health probe.
///
/// # Panics
///
/// Panics if called outside of a `DashboardProvider` context.
pub fn use_api_status() -> ReadSignal<ApiStatus> {
    use_dashboard().api_status()
}

/// Hook to read the loading flag and the persistent error text.
///
/// # Panics
///
/// Panics if called outside of a `DashboardProvider` context.
pub fn use_view_state() -> (ReadSignal<bool>, ReadSignal<Option<String>>) {
    let ctx = use_dashboard();
    (ctx.loading(), ctx.error())
}

/// Hook to read the creation draft.
///
/// # Panics
///
/// Panics if called outside of a `DashboardProvider` context.
pub fn use_draft() -> ReadSignal<ProductDraft> {
    use_dashboard().draft()
}

/// Hook computing [`InventoryStats`] from the live collection.
///
/// The result is derived, never stored; it recomputes from whatever
/// snapshot the collection currently holds.
///
/// # Panics
///
/// Panics if called outside of a `DashboardProvider` context.
///
/// # Example
///
/// ```rust,ignore
/// let stats = use_inventory_stats();
/// view! { <p>{move || stats.get().count} " products"</p> }
/// ```
pub fn use_inventory_stats() -> Signal<InventoryStats> {
    let products = use_products();
    Signal::derive(move || InventoryStats::of(&products.get()))
}
