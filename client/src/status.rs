use leptos::prelude::*;

use crate::app::{Dispatcher, MapController};
use crate::controller::{Action, LoadState};

/// Page mask shown while a map request is in flight.
#[component]
pub fn BusyMask() -> impl IntoView {
    let MapController(controller) = expect_context();
    let busy = Memo::new(move |_| controller.with(|c| c.is_busy()));

    view! {
        <div
            class="loadmask"
            style:display=move || if busy.get() { "flex" } else { "none" }
            style="position: fixed; inset: 0; z-index: 50; align-items: center; justify-content: center;"
        >
            <div class="loadmask-msg">"Updating map ..."</div>
        </div>
    }
}

/// Banner shown when the last map request failed, with a way to retry it.
#[component]
pub fn FetchFailure() -> impl IntoView {
    let MapController(controller) = expect_context();
    let dispatcher: Dispatcher = expect_context();
    let failure = Memo::new(move |_| {
        controller.with(|c| match c.load_state() {
            LoadState::Failed(e) => Some(e.clone()),
            _ => None,
        })
    });

    view! {
        {move || {
            failure
                .get()
                .map(|message| {
                    view! {
                        <div id="fetchError" class="fetchError" role="alert">
                            <span>{format!("Could not load map data ({message}).")}</span>
                            <button type="button" on:click=move |_| dispatcher.dispatch(Action::Refresh)>
                                "Retry"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
