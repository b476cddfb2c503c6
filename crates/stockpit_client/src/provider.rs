//! Provider component that wires the transport and shares the context.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpInventoryApi;
use crate::context::DashboardContext;

/// Wraps the application, builds the HTTP client and provides
/// [`DashboardContext`] to every child.
///
/// On mount it kicks off the one-shot health probe and the initial
/// collection fetch. The two run concurrently and independently, and
/// neither blocks rendering.
///
/// # Example
///
/// ```rust,ignore
/// use leptos::prelude::*;
/// use stockpit_client::DashboardProvider;
///
/// #[component]
/// fn App() -> impl IntoView {
///     view! {
///         <DashboardProvider api_url="http://localhost:8080/api".to_string()>
///             <Dashboard/>
///         </DashboardProvider>
///     }
/// }
/// ```
#[component]
pub fn DashboardProvider(
    /// Base URL of the inventory service.
    api_url: String,
    /// Child components
    children: Children,
) -> impl IntoView {
    let ctx = DashboardContext::new(Arc::new(HttpInventoryApi::new(api_url)));
    provide_context(ctx.clone());

    let probe_ctx = ctx.clone();
    spawn_local(async move {
        probe_ctx.probe_health().await;
    });

    spawn_local(async move {
        ctx.initial_load().await;
    });

    children()
}
