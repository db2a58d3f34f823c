use leptos::prelude::*;

use triexplore_shared::MetricChoice;

use crate::app::{Dispatcher, MapController};
use crate::controller::{Action, ViewState};

/// The four metric links: (element id, text, choice).
const METRIC_SELECTORS: [(&str, &str, MetricChoice); 4] = [
    ("by_incidents", "Incidents", MetricChoice::INCIDENTS),
    (
        "by_incidents_per_capita",
        "Incidents per capita",
        MetricChoice::INCIDENTS_PER_CAPITA,
    ),
    ("by_pounds", "Pounds released", MetricChoice::POUNDS),
    (
        "by_pounds_per_capita",
        "Pounds released per capita",
        MetricChoice::POUNDS_PER_CAPITA,
    ),
];

/// Id of the selector link matching the view's metric choice.
pub(crate) fn current_selector(view: &ViewState) -> &'static str {
    METRIC_SELECTORS
        .iter()
        .find(|(_, _, choice)| *choice == view.choice)
        .map_or(METRIC_SELECTORS[0].0, |(id, _, _)| *id)
}

/// Metric selector links. Exactly one carries the `current` class.
#[component]
pub fn MetricSelectors() -> impl IntoView {
    let MapController(controller) = expect_context();
    let dispatcher: Dispatcher = expect_context();

    view! {
        <div id="viewSelectors">
            {METRIC_SELECTORS
                .into_iter()
                .map(|(id, text, choice)| {
                    let is_current = move || controller.with(|c| current_selector(c.view()) == id);
                    view! {
                        <a
                            href="#"
                            id=id
                            class:current=is_current
                            on:click=move |e: web_sys::MouseEvent| {
                                e.prevent_default();
                                dispatcher.dispatch(Action::SelectMetric(choice));
                            }
                        >
                            {text}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Zoom in, zoom out and back to the original size.
#[component]
pub fn ZoomControls() -> impl IntoView {
    let MapController(controller) = expect_context();
    let dispatcher: Dispatcher = expect_context();
    let at_original = move || controller.with(|c| c.view().zoom.is_original());

    view! {
        <div id="zoomControls">
            <button
                type="button"
                id="enlarge"
                title="Zoom in"
                on:click=move |_| dispatcher.dispatch(Action::ZoomIn)
            >
                "+"
            </button>
            <button
                type="button"
                id="reduce"
                title="Zoom out"
                disabled=at_original
                on:click=move |_| dispatcher.dispatch(Action::ZoomOut)
            >
                "\u{2212}"
            </button>
            <button
                type="button"
                id="zoomOriginal"
                title="Original size"
                disabled=at_original
                on:click=move |_| dispatcher.dispatch(Action::ZoomReset)
            >
                "1:1"
            </button>
        </div>
    }
}
