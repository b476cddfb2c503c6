//! Dashboard view components.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use stockpit_client::{
    ApiStatus, DraftField, Product, use_api_status, use_dashboard, use_draft,
    use_inventory_stats, use_products, use_view_state,
};

/// Title bar with the service status badge.
#[component]
pub fn DashboardHeader() -> impl IntoView {
    let status = use_api_status();

    let dot_class = move || match status.get() {
        ApiStatus::Checking => "status-dot checking",
        ApiStatus::Up => "status-dot up",
        ApiStatus::Down => "status-dot down",
    };
    let label = move || match status.get() {
        ApiStatus::Checking => "CHECKING",
        ApiStatus::Up => "UP",
        ApiStatus::Down => "DOWN",
    };

    view! {
        <header class="header">
            <h1>"Stockpit Dashboard"</h1>
            <div class="status-badge">
                <span class=dot_class></span>
                "API: "
                {label}
            </div>
        </header>
    }
}

/// Product count and total inventory value, derived from the collection.
#[component]
pub fn StatsRow() -> impl IntoView {
    let stats = use_inventory_stats();

    view! {
        <div class="stats">
            <div class="stat-card">
                <h3>"Total Products"</h3>
                <p class="stat-number">{move || stats.get().count}</p>
            </div>
            <div class="stat-card">
                <h3>"Total Value"</h3>
                <p class="stat-number">
                    {move || format!("${}", stats.get().total_value_display())}
                </p>
            </div>
        </div>
    }
}

/// Toggle button plus the creation form when it is open.
#[component]
pub fn ProductToolbar() -> impl IntoView {
    let ctx = use_dashboard();
    let form_open = ctx.form_open();

    view! {
        <div class="actions">
            <button
                class="btn-primary"
                on:click={
                    let ctx = ctx.clone();
                    move |_| ctx.toggle_form()
                }
            >
                {move || if form_open.get() { "Cancel" } else { "+ Add Product" }}
            </button>
        </div>
        <Show when=move || form_open.get()>
            <ProductForm/>
        </Show>
    }
}

/// Controlled inputs over the shared draft.
///
/// The inputs hold raw text; nothing is parsed until the submit handler
/// runs, and a failed submit leaves every field as typed.
#[component]
fn ProductForm() -> impl IntoView {
    let ctx = use_dashboard();
    let draft = use_draft();

    let on_submit = {
        let ctx = ctx.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let ctx = ctx.clone();
            spawn_local(async move {
                ctx.submit_draft().await;
            });
        }
    };

    view! {
        <form class="product-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Product Name"
                prop:value=move || draft.get().name
                on:input={
                    let ctx = ctx.clone();
                    move |ev| ctx.set_draft_field(DraftField::Name, event_target_value(&ev))
                }
                required=true
            />
            <input
                type="text"
                placeholder="Description"
                prop:value=move || draft.get().description
                on:input={
                    let ctx = ctx.clone();
                    move |ev| ctx.set_draft_field(DraftField::Description, event_target_value(&ev))
                }
            />
            <input
                type="number"
                placeholder="Price"
                step="0.01"
                prop:value=move || draft.get().price
                on:input={
                    let ctx = ctx.clone();
                    move |ev| ctx.set_draft_field(DraftField::Price, event_target_value(&ev))
                }
                required=true
            />
            <input
                type="number"
                placeholder="Quantity"
                prop:value=move || draft.get().quantity
                on:input={
                    let ctx = ctx.clone();
                    move |ev| ctx.set_draft_field(DraftField::Quantity, event_target_value(&ev))
                }
                required=true
            />
            <button type="submit" class="btn-primary">"Save Product"</button>
        </form>
    }
}

/// Persistent banner for the most recent data-operation failure.
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let (_, error) = use_view_state();

    view! {
        <Show when=move || error.get().is_some()>
            <div class="error">{move || error.get().unwrap_or_default()}</div>
        </Show>
    }
}

/// The product collection as a grid of cards.
#[component]
pub fn ProductGrid() -> impl IntoView {
    let products = use_products();
    let (loading, _) = use_view_state();

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <div class="loading">"Loading..."</div> }
        >
            <div class="product-grid">
                <For
                    each=move || products.get()
                    key=|product| product.id
                    let:product
                >
                    <ProductCard product=product/>
                </For>
                <Show when=move || products.get().is_empty()>
                    <p class="empty">"No products yet. Add your first product!"</p>
                </Show>
            </div>
        </Show>
    }
}

/// One product row with its delete action.
#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let ctx = use_dashboard();
    let Product {
        id,
        name,
        description,
        price,
        quantity,
    } = product;
    let description = description
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| "No description".to_string());

    view! {
        <div class="product-card">
            <h3>{name}</h3>
            <p>{description}</p>
            <div class="product-info">
                <span class="price">{format!("${}", price)}</span>
                <span class="quantity">{format!("Qty: {}", quantity)}</span>
            </div>
            <button
                class="btn-danger"
                on:click={
                    let ctx = ctx.clone();
                    move |_| {
                        let ctx = ctx.clone();
                        spawn_local(async move {
                            let _ = ctx.remove(id).await;
                        });
                    }
                }
            >
                "Delete"
            </button>
        </div>
    }
}

/// Static footer.
#[component]
pub fn DashboardFooter() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"Stockpit | Leptos | WebAssembly"</p>
        </footer>
    }
}
