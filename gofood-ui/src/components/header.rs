//! Header Component
//!
//! Top bar with the brand and the "new dish" button.

use leptos::*;

/// Page header; `on_open_modal` opens the add-food modal
#[component]
pub fn Header(#[prop(into)] on_open_modal: Callback<()>) -> impl IntoView {
    view! {
        <header class="bg-red-700 border-b border-red-800">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-20">
                    <div class="flex items-center space-x-3">
                        <span class="text-3xl">"🍝"</span>
                        <span class="text-2xl font-bold text-white">"GoFood"</span>
                    </div>

                    <button
                        type="button"
                        data-testid="new-food-button"
                        on:click=move |_| on_open_modal.call(())
                        class="flex items-center space-x-2 bg-green-600 hover:bg-green-700
                               rounded-lg px-4 py-3 font-semibold text-white transition-colors"
                    >
                        <span>"Novo Prato"</span>
                        <span class="text-lg">"+"</span>
                    </button>
                </div>
            </div>
        </header>
    }
}
