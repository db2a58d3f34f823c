use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use triexplore_shared::Choropleth;

use crate::api;
use crate::chemical_filter::ChemicalFilterForm;
use crate::config::ClientConfig;
use crate::controller::{Action, Command, Completion, Controller};
use crate::controls::{MetricSelectors, ZoomControls};
use crate::legend::Legend;
use crate::map_dom;
use crate::status::{BusyMask, FetchFailure};
use crate::tooltip::{CountyHover, CountyTooltip};

/// Newtype wrappers so each signal gets a distinct type for Leptos context.
#[derive(Clone, Copy)]
pub(crate) struct MapController(pub RwSignal<Controller>);
#[derive(Clone, Copy)]
pub(crate) struct RenderedMap(pub RwSignal<Option<Choropleth>>);
#[derive(Clone, Copy)]
pub(crate) struct HoveredCounty(pub RwSignal<Option<CountyHover>>);

/// Runs user actions through the controller and executes the resulting commands.
#[derive(Clone, Copy)]
pub(crate) struct Dispatcher {
    controller: RwSignal<Controller>,
    rendered: RwSignal<Option<Choropleth>>,
    config: StoredValue<ClientConfig>,
}

impl Dispatcher {
    pub fn dispatch(self, action: Action) {
        let command = self
            .controller
            .try_update(|c| c.handle(action))
            .unwrap_or(Command::Nothing);
        self.execute(command);
    }

    fn execute(self, command: Command) {
        match command {
            Command::Nothing => {}
            Command::Rescale(zoom) => map_dom::apply_zoom(zoom),
            Command::Fetch(request) => {
                let config = self.config.get_value();
                spawn_local(async move {
                    let outcome = api::fetch_map(&config, &request).await;
                    let completion = self
                        .controller
                        .try_update(|c| c.complete(&request, outcome));
                    match completion {
                        Some(Completion::Rendered(map)) => self.rendered.set(Some(map)),
                        Some(Completion::Failed(e)) => {
                            web_sys::console::warn_1(&format!("Map fetch failed: {e}").into());
                        }
                        Some(Completion::Stale) => {
                            web_sys::console::info_1(
                                &format!("dropped stale map response seq={}", request.seq).into(),
                            );
                        }
                        None => {}
                    }
                });
            }
        }
    }

    /// Fetch the chemical list once and hand it to the controller.
    fn load_chemicals(self) {
        let config = self.config.get_value();
        spawn_local(async move {
            match api::fetch_chemicals(&config).await {
                Ok(list) => {
                    web_sys::console::info_1(&format!("loaded {} chemicals", list.len()).into());
                    self.dispatch(Action::ChemicalsLoaded(list));
                }
                Err(e) => {
                    web_sys::console::warn_1(&format!("Chemical list fetch failed: {e}").into());
                }
            }
        });
    }
}

/// Root application component. Owns the controller and wires the static map to it.
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let controller: RwSignal<Controller> = RwSignal::new(Controller::default());
    let rendered: RwSignal<Option<Choropleth>> = RwSignal::new(None);
    let hovered: RwSignal<Option<CountyHover>> = RwSignal::new(None);
    let dispatcher = Dispatcher {
        controller,
        rendered,
        config: StoredValue::new(config),
    };

    provide_context(MapController(controller));
    provide_context(RenderedMap(rendered));
    provide_context(HoveredCounty(hovered));
    provide_context(dispatcher);

    // Repaint counties whenever a new response is accepted.
    Effect::new(move || {
        rendered.with(|map| {
            if let Some(map) = map {
                map_dom::paint(map);
            }
        });
    });

    // Initialize on mount: tooltips, hover tracking, chemical list, first render.
    Effect::new(move || {
        map_dom::seed_tooltips();
        map_dom::bind_hover(hovered);
        dispatcher.load_chemicals();
        dispatcher.dispatch(Action::Refresh);
    });

    view! {
        <div class="controls">
            <MetricSelectors />
            <ZoomControls />
            <ChemicalFilterForm />
        </div>
        <Legend />
        <FetchFailure />
        <BusyMask />
        <CountyTooltip />
    }
}
