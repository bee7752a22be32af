//! Food Form Fields
//!
//! The inputs shared by the add and edit dialogs, bound to a [`FoodForm`].

use leptos::*;

use crate::state::FoodForm;

/// Image, name, price and description inputs plus a submit button
#[component]
pub fn FoodFormFields(
    form: RwSignal<FoodForm>,
    #[prop(into)] error: Signal<Option<String>>,
    submit_label: &'static str,
    submit_testid: &'static str,
) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <TextField
                label="URL da imagem"
                placeholder="Cole o link aqui"
                value=Signal::derive(move || form.with(|f| f.image.clone()))
                on_input=move |v: String| form.update(|f| f.image = v)
            />
            <TextField
                label="Nome do prato"
                placeholder="Ex: Moda Italiana"
                value=Signal::derive(move || form.with(|f| f.name.clone()))
                on_input=move |v: String| form.update(|f| f.name = v)
            />
            <TextField
                label="Preço"
                placeholder="Ex: 19.90"
                value=Signal::derive(move || form.with(|f| f.price.clone()))
                on_input=move |v: String| form.update(|f| f.price = v)
            />
            <TextField
                label="Descrição"
                placeholder="Descrição"
                value=Signal::derive(move || form.with(|f| f.description.clone()))
                on_input=move |v: String| form.update(|f| f.description = v)
            />

            {move || error.get().map(|msg| view! {
                <p class="text-sm text-red-600">{msg}</p>
            })}

            <button
                type="submit"
                data-testid=submit_testid
                class="w-full bg-green-600 hover:bg-green-700 rounded-lg py-3 font-semibold
                       text-white transition-colors"
            >
                {submit_label}
            </button>
        </div>
    }
}

#[component]
fn TextField(
    label: &'static str,
    placeholder: &'static str,
    value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="block text-sm text-gray-500 mb-2">{label}</span>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
                class="w-full bg-gray-100 rounded-lg px-4 py-3 border border-gray-300
                       focus:border-green-500 focus:outline-none"
            />
        </label>
    }
}
