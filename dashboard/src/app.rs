//! Application root component.

use leptos::prelude::*;
use stockpit_client::DashboardProvider;

use crate::components::{
    DashboardFooter, DashboardHeader, ErrorBanner, ProductGrid, ProductToolbar, StatsRow,
};

/// Base URL of the inventory service, overridable at build time.
fn api_url() -> String {
    option_env!("STOCKPIT_API_URL")
        .unwrap_or("http://localhost:8080/api")
        .to_string()
}

/// Application root: the provider plus the dashboard layout.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <DashboardProvider api_url=api_url()>
            <div class="app">
                <DashboardHeader/>
                <main class="main">
                    <StatsRow/>
                    <ProductToolbar/>
                    <ErrorBanner/>
                    <ProductGrid/>
                </main>
                <DashboardFooter/>
            </div>
        </DashboardProvider>
    }
}
