use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use triexplore_shared::chemical::MAX_SUGGESTIONS;

use crate::app::{Dispatcher, MapController};
use crate::controller::Action;

/// Delay before the suggestion list closes after the input loses focus.
const CLOSE_DELAY_MS: u32 = 150;

/// Chemical filter form with autocomplete over the loaded chemical list.
#[component]
pub fn ChemicalFilterForm() -> impl IntoView {
    let MapController(controller) = expect_context();
    let dispatcher: Dispatcher = expect_context();
    let text = RwSignal::new(String::new());
    let suggestions_open = RwSignal::new(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let suggestions = Memo::new(move |_| {
        let term = text.get();
        controller.with(|c| {
            c.chemicals()
                .map(|list| list.suggestions(&term, MAX_SUGGESTIONS))
                .unwrap_or_default()
        })
    });

    let submit = move || {
        suggestions_open.set(false);
        dispatcher.dispatch(Action::SubmitChemical(text.get_untracked()));
    };

    let pick = move |code: String| {
        text.set(code);
        submit();
    };

    // Hold the timeout handle so a refocus can cancel the pending close.
    let close_timeout = Rc::new(RefCell::new(None::<Timeout>));

    let on_blur = {
        let close_timeout = Rc::clone(&close_timeout);
        move |_: web_sys::FocusEvent| {
            let timeout = Timeout::new(CLOSE_DELAY_MS, move || suggestions_open.set(false));
            if let Some(old) = close_timeout.borrow_mut().replace(timeout) {
                old.cancel();
            }
        }
    };

    let on_focus = {
        let close_timeout = Rc::clone(&close_timeout);
        move |_: web_sys::FocusEvent| {
            if let Some(pending) = close_timeout.borrow_mut().take() {
                pending.cancel();
            }
        }
    };

    let on_drop_down = move |_: web_sys::MouseEvent| {
        text.set(String::new());
        suggestions_open.set(true);
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    };

    let on_show_all = move |e: web_sys::MouseEvent| {
        e.prevent_default();
        text.set(String::new());
        submit();
    };

    view! {
        <form
            id="chemicalForm"
            autocomplete="off"
            on:submit=move |e: web_sys::SubmitEvent| {
                e.prevent_default();
                submit();
            }
        >
            <label for="chemical">"Chemical"</label>
            <div class="chemicalInput" style="position: relative; display: inline-block;">
                <input
                    type="text"
                    id="chemical"
                    node_ref=input_ref
                    placeholder="ALL"
                    prop:value=move || text.get()
                    on:input=move |e| {
                        text.set(event_target_value(&e));
                        suggestions_open.set(true);
                    }
                    on:click=move |_| suggestions_open.set(true)
                    on:change=move |_| submit()
                    on:focus=on_focus
                    on:blur=on_blur
                />
                <button type="button" id="dropDownArrow" title="Show all chemicals" on:click=on_drop_down>
                    "\u{25BE}"
                </button>
                {move || {
                    let items = suggestions.get();
                    if !suggestions_open.get() || items.is_empty() {
                        return ().into_any();
                    }
                    view! {
                        <ul
                            class="chemicalSuggestions"
                            style="position: absolute; left: 0; right: 0; z-index: 20; max-height: 240px; overflow-y: auto;"
                        >
                            {items
                                .into_iter()
                                .map(|code| {
                                    let chosen = code.clone();
                                    view! {
                                        <li on:mousedown=move |e: web_sys::MouseEvent| {
                                            // Keep focus in the input so `change` doesn't fire first.
                                            e.prevent_default();
                                            pick(chosen.clone());
                                        }>{code}</li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_any()
                }}
            </div>
            <a href="#" id="showAll" on:click=on_show_all>
                "Show all"
            </a>
            <span id="error" class="error">
                {move || controller.with(|c| c.validation_error().unwrap_or_default().to_string())}
            </span>
        </form>
    }
}
