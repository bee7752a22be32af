//! Add Food Modal
//!
//! Form for a new dish. On a valid submit it hands the payload to
//! `on_add_food`, clears itself and closes.

use leptos::*;

use crate::components::{FoodFormFields, Modal};
use crate::state::{FoodForm, NewFood};

#[component]
pub fn ModalAddFood(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_add_food: Callback<NewFood>,
) -> impl IntoView {
    let form = create_rw_signal(FoodForm::default());
    let error = create_rw_signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        match form.with(|f| f.to_new_food()) {
            Ok(food) => {
                on_add_food.call(food);
                form.set(FoodForm::default());
                error.set(None);
                on_close.call(());
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <Modal is_open=is_open on_close=on_close>
            <form on:submit=on_submit data-testid="add-food-form">
                <h1 class="text-2xl font-semibold mb-6">"Novo Prato"</h1>
                <FoodFormFields
                    form=form
                    error=error
                    submit_label="Adicionar Prato"
                    submit_testid="add-food-button"
                />
            </form>
        </Modal>
    }
}
