//! Dashboard Page
//!
//! Lists the catalog and wires the header, the two dialogs and every food card
//! to the dashboard state and its API actions.

use leptos::*;
use std::rc::Rc;

use crate::api::{self, FoodsClient, GlooTransport};
use crate::components::{FoodCard, Header, ModalAddFood, ModalEditFood};
use crate::state::{actions, DashboardState, EditingFood, FoodId, FoodPatch, NewFood};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = create_rw_signal(DashboardState::default());
    let client = Rc::new(FoodsClient::new(GlooTransport::new(api::get_api_base())));

    // Fetch the catalog once on mount
    {
        let client = Rc::clone(&client);
        spawn_local(async move {
            actions::load_foods(&*client, &state).await;
        });
    }

    let on_add_food = {
        let client = Rc::clone(&client);
        Callback::new(move |food: NewFood| {
            let client = Rc::clone(&client);
            spawn_local(async move {
                actions::add_food(&*client, &state, food).await;
            });
        })
    };

    let on_update_food = {
        let client = Rc::clone(&client);
        Callback::new(move |patch: FoodPatch| {
            let client = Rc::clone(&client);
            spawn_local(async move {
                actions::update_food(&*client, &state, patch).await;
            });
        })
    };

    let on_delete_food = {
        let client = Rc::clone(&client);
        Callback::new(move |id: FoodId| {
            let client = Rc::clone(&client);
            spawn_local(async move {
                actions::delete_food(&*client, &state, id).await;
            });
        })
    };

    let on_edit_food = Callback::new(move |food: EditingFood| {
        state.update(|s| s.begin_edit(food));
    });

    // Memos so the dialogs only react to their own slice of state
    let add_open = create_memo(move |_| state.with(|s| s.add_modal_open));
    let edit_open = create_memo(move |_| state.with(|s| s.edit_modal_open));
    let editing_food = create_memo(move |_| state.with(|s| s.editing.clone()));

    let toggle_modal = Callback::new(move |_: ()| state.update(|s| s.toggle_add_modal()));
    let toggle_edit_modal = Callback::new(move |_: ()| state.update(|s| s.toggle_edit_modal()));

    view! {
        <Header on_open_modal=toggle_modal />

        <ModalAddFood
            is_open=add_open
            on_close=toggle_modal
            on_add_food=on_add_food
        />

        <ModalEditFood
            is_open=edit_open
            on_close=toggle_edit_modal
            editing_food=editing_food
            on_update_food=on_update_food
        />

        <main class="container mx-auto px-4 py-10">
            <div
                class="grid gap-8 sm:grid-cols-2 lg:grid-cols-3"
                data-testid="foods-list"
            >
                {move || {
                    state.with(|s| s.foods.clone())
                        .into_iter()
                        .map(|food| view! {
                            <FoodCard
                                food=food
                                on_delete=on_delete_food
                                on_edit=on_edit_food
                            />
                        })
                        .collect_view()
                }}
            </div>

            {move || {
                state.with(|s| s.foods.is_empty()).then(|| view! {
                    <p class="text-center text-gray-400 mt-12">"Nenhum prato cadastrado"</p>
                })
            }}
        </main>
    }
}
