//! App Root Component

use leptos::*;

use crate::pages::Dashboard;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50 flex flex-col">
            <Dashboard />
        </div>
    }
}
