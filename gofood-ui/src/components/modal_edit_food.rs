//! Edit Food Modal
//!
//! Form prefilled from the current edit target. On a valid submit it hands the
//! edited fields to `on_update_food` and closes.

use leptos::*;

use crate::components::{FoodFormFields, Modal};
use crate::state::{EditingFood, FoodForm, FoodPatch};

#[component]
pub fn ModalEditFood(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] editing_food: Signal<Option<EditingFood>>,
    #[prop(into)] on_update_food: Callback<FoodPatch>,
) -> impl IntoView {
    let form = create_rw_signal(FoodForm::default());
    let error = create_rw_signal(None::<String>);

    // Refill each time the dialog opens or the target changes
    create_effect(move |_| {
        if !is_open.get() {
            return;
        }
        if let Some(food) = editing_food.get() {
            form.set(FoodForm::from_editing(&food));
            error.set(None);
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        match form.with(|f| f.to_patch()) {
            Ok(patch) => {
                on_update_food.call(patch);
                error.set(None);
                on_close.call(());
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <Modal is_open=is_open on_close=on_close>
            <form on:submit=on_submit data-testid="edit-food-form">
                <h1 class="text-2xl font-semibold mb-6">"Editar Prato"</h1>
                <FoodFormFields
                    form=form
                    error=error
                    submit_label="Salvar alterações"
                    submit_testid="edit-food-button"
                />
            </form>
        </Modal>
    }
}
