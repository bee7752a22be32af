//! Food Card Component
//!
//! One catalog entry with its edit and delete actions.

use leptos::*;

use crate::state::{format_price, EditingFood, Food, FoodId};

/// A single food in the dashboard list
#[component]
pub fn FoodCard(
    food: Food,
    #[prop(into)] on_delete: Callback<FoodId>,
    #[prop(into)] on_edit: Callback<EditingFood>,
) -> impl IntoView {
    let id = food.id;
    let editing = EditingFood::from(&food);

    let (badge_class, badge_label, card_class) = if food.available {
        ("bg-green-600", "Disponível", "bg-gray-100 rounded-xl overflow-hidden shadow")
    } else {
        (
            "bg-red-600",
            "Indisponível",
            "bg-gray-100 rounded-xl overflow-hidden shadow opacity-60",
        )
    };

    view! {
        <div class=card_class data-testid=format!("food-{}", id)>
            <header class="bg-yellow-400 h-48 flex items-center justify-center">
                <img src=food.image.clone() alt=food.name.clone() class="max-h-40" />
            </header>

            <section class="p-6 space-y-2">
                <h2 class="text-xl font-semibold text-gray-800">{food.name.clone()}</h2>
                <p class="text-gray-600 text-sm">{food.description.clone()}</p>
                <p class="text-2xl text-green-700">
                    "R$ "<b>{format_price(food.price)}</b>
                </p>
            </section>

            <section class="flex items-center justify-between bg-gray-200 px-6 py-4">
                <div class="flex space-x-2">
                    <button
                        type="button"
                        data-testid=format!("edit-food-{}", id)
                        on:click=move |_| on_edit.call(editing.clone())
                        class="px-3 py-2 bg-white hover:bg-gray-50 rounded-lg text-gray-700 transition-colors"
                    >
                        "Editar"
                    </button>
                    <button
                        type="button"
                        data-testid=format!("remove-food-{}", id)
                        on:click=move |_| on_delete.call(id)
                        class="px-3 py-2 bg-white hover:bg-gray-50 rounded-lg text-gray-700 transition-colors"
                    >
                        "Remover"
                    </button>
                </div>

                <span class=format!("{} text-white text-xs font-medium px-2 py-1 rounded", badge_class)>
                    {badge_label}
                </span>
            </section>
        </div>
    }
}
