//! Modal Component
//!
//! Overlay shell shared by the add and edit dialogs.

use leptos::*;

/// Renders `children` in an overlay while `is_open` is true.
/// Clicking the backdrop calls `on_close`.
#[component]
pub fn Modal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            <div
                class="fixed inset-0 z-40 bg-black/50 flex items-center justify-center"
                on:click=move |_| on_close.call(())
            >
                <div
                    class="bg-white text-gray-800 rounded-xl shadow-xl w-full max-w-lg p-8"
                    on:click=|ev| ev.stop_propagation()
                >
                    {children()}
                </div>
            </div>
        </Show>
    }
}
