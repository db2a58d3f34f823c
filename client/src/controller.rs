//! State and transitions of the map view.
//!
//! Every user input becomes an [`Action`]. [`Controller::handle`] applies it
//! to the [`ViewState`] and returns the [`Command`] the app must execute.

use triexplore_shared::{ChemicalFilter, ChemicalList, Choropleth, MapResponse, MetricChoice};

use crate::zoom::ZoomScale;

pub const UNKNOWN_CHEMICAL_ERROR: &str = "Please select one of the listed chemicals";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub zoom: ZoomScale,
    pub choice: MetricChoice,
    pub chemical: ChemicalFilter,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ZoomIn,
    ZoomOut,
    ZoomReset,
    SelectMetric(MetricChoice),
    /// Raw text from the chemical filter input.
    SubmitChemical(String),
    ChemicalsLoaded(ChemicalList),
    /// Re-render the current view (initial load and retry after a failure).
    Refresh,
}

/// Map data request tagged with the sequence number it was issued under.
#[derive(Debug, Clone, PartialEq)]
pub struct MapRequest {
    pub seq: u64,
    pub choice: MetricChoice,
    pub chemical: ChemicalFilter,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Nothing,
    Rescale(ZoomScale),
    Fetch(MapRequest),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// Result of applying a finished map fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// A newer request was issued after this one; the response is dropped.
    Stale,
    Failed(String),
    Rendered(Choropleth),
}

#[derive(Debug, Clone, Default)]
pub struct Controller {
    view: ViewState,
    chemicals: Option<ChemicalList>,
    validation_error: Option<String>,
    load: LoadState,
    last_issued: u64,
}

impl Controller {
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn chemicals(&self) -> Option<&ChemicalList> {
        self.chemicals.as_ref()
    }

    pub fn validation_error(&self) -> Option<&str> {
        self.validation_error.as_deref()
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn is_busy(&self) -> bool {
        self.load == LoadState::Loading
    }

    pub fn handle(&mut self, action: Action) -> Command {
        match action {
            Action::ZoomIn => self.rescale(ZoomScale::zoom_in),
            Action::ZoomOut => self.rescale(ZoomScale::zoom_out),
            Action::ZoomReset => self.rescale(ZoomScale::reset),
            Action::SelectMetric(choice) => {
                self.view.choice = choice;
                self.issue_fetch()
            }
            Action::SubmitChemical(raw) => self.submit_chemical(&raw),
            Action::ChemicalsLoaded(list) => {
                self.chemicals = Some(list);
                Command::Nothing
            }
            Action::Refresh => self.issue_fetch(),
        }
    }

    /// Apply the outcome of `request`. Only the most recently issued request
    /// may change what is displayed.
    pub fn complete(
        &mut self,
        request: &MapRequest,
        outcome: Result<MapResponse, String>,
    ) -> Completion {
        if request.seq != self.last_issued {
            return Completion::Stale;
        }
        match outcome {
            Ok(response) => {
                self.load = LoadState::Ready;
                Completion::Rendered(Choropleth::new(request.choice, response))
            }
            Err(e) => {
                self.load = LoadState::Failed(e.clone());
                Completion::Failed(e)
            }
        }
    }

    fn rescale(&mut self, step: fn(&mut ZoomScale) -> bool) -> Command {
        if step(&mut self.view.zoom) {
            Command::Rescale(self.view.zoom)
        } else {
            Command::Nothing
        }
    }

    fn submit_chemical(&mut self, raw: &str) -> Command {
        let resolved = match &self.chemicals {
            Some(list) => list.resolve(raw),
            None => ChemicalList::default().resolve(raw),
        };
        match resolved {
            Some(filter) => {
                self.validation_error = None;
                // `change` and `submit` both fire for one entry; the filter is already applied.
                let applied = matches!(self.load, LoadState::Loading | LoadState::Ready);
                if applied && filter == self.view.chemical {
                    return Command::Nothing;
                }
                self.view.chemical = filter;
                self.issue_fetch()
            }
            None => {
                self.validation_error = Some(UNKNOWN_CHEMICAL_ERROR.to_string());
                Command::Nothing
            }
        }
    }

    fn issue_fetch(&mut self) -> Command {
        self.last_issued = self.last_issued.wrapping_add(1);
        self.load = LoadState::Loading;
        Command::Fetch(MapRequest {
            seq: self.last_issued,
            choice: self.view.choice,
            chemical: self.view.chemical.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> Controller {
        let mut controller = Controller::default();
        let list = ChemicalList::new(vec!["AMMONIA".to_string(), "TOLUENE".to_string()]);
        assert_eq!(
            controller.handle(Action::ChemicalsLoaded(list)),
            Command::Nothing
        );
        controller
    }

    fn fetch(command: Command) -> MapRequest {
        match command {
            Command::Fetch(request) => request,
            other => panic!("expected a fetch, got {other:?}"),
        }
    }

    #[test]
    fn initial_refresh_requests_unfiltered_incidents() {
        let mut controller = Controller::default();
        let request = fetch(controller.handle(Action::Refresh));
        assert_eq!(request.choice, MetricChoice::INCIDENTS);
        assert_eq!(request.chemical, ChemicalFilter::All);
        assert!(controller.is_busy());
    }

    #[test]
    fn unknown_chemical_sets_error_without_fetching() {
        let mut controller = loaded();
        let command = controller.handle(Action::SubmitChemical("benzene".to_string()));
        assert_eq!(command, Command::Nothing);
        assert_eq!(controller.validation_error(), Some(UNKNOWN_CHEMICAL_ERROR));
        assert_eq!(controller.view().chemical, ChemicalFilter::All);
        assert!(!controller.is_busy());
    }

    #[test]
    fn known_chemical_clears_error_and_fetches_once() {
        let mut controller = loaded();
        controller.handle(Action::SubmitChemical("benzene".to_string()));
        let request = fetch(controller.handle(Action::SubmitChemical("toluene".to_string())));
        assert_eq!(request.chemical, ChemicalFilter::Code("TOLUENE".to_string()));
        assert_eq!(controller.validation_error(), None);
    }

    #[test]
    fn repeated_submission_of_same_chemical_fetches_once() {
        let mut controller = loaded();
        controller.handle(Action::Refresh);
        let first = fetch(controller.handle(Action::SubmitChemical("toluene".to_string())));
        assert_eq!(
            controller.handle(Action::SubmitChemical("TOLUENE".to_string())),
            Command::Nothing
        );
        controller.complete(&first, Ok(MapResponse::default()));
        assert_eq!(
            controller.handle(Action::SubmitChemical(" toluene".to_string())),
            Command::Nothing
        );
        assert!(matches!(
            controller.handle(Action::SubmitChemical("ammonia".to_string())),
            Command::Fetch(_)
        ));
    }

    #[test]
    fn resubmitting_after_failure_fetches_again() {
        let mut controller = loaded();
        let request = fetch(controller.handle(Action::SubmitChemical("toluene".to_string())));
        controller.complete(&request, Err("HTTP 502".to_string()));
        assert!(matches!(
            controller.handle(Action::SubmitChemical("toluene".to_string())),
            Command::Fetch(_)
        ));
    }

    #[test]
    fn empty_chemical_clears_filter() {
        let mut controller = loaded();
        controller.handle(Action::SubmitChemical("AMMONIA".to_string()));
        let request = fetch(controller.handle(Action::SubmitChemical(String::new())));
        assert_eq!(request.chemical, ChemicalFilter::All);
    }

    #[test]
    fn filtering_before_list_loads_only_accepts_unfiltered() {
        let mut controller = Controller::default();
        assert_eq!(
            controller.handle(Action::SubmitChemical("AMMONIA".to_string())),
            Command::Nothing
        );
        assert!(matches!(
            controller.handle(Action::SubmitChemical(String::new())),
            Command::Fetch(_)
        ));
    }

    #[test]
    fn metric_selection_keeps_chemical_filter() {
        let mut controller = loaded();
        controller.handle(Action::SubmitChemical("AMMONIA".to_string()));
        let request = fetch(controller.handle(Action::SelectMetric(MetricChoice::POUNDS_PER_CAPITA)));
        assert_eq!(request.choice, MetricChoice::POUNDS_PER_CAPITA);
        assert_eq!(request.chemical, ChemicalFilter::Code("AMMONIA".to_string()));
        assert_eq!(controller.view().choice, MetricChoice::POUNDS_PER_CAPITA);
    }

    #[test]
    fn zoom_actions_rescale_without_fetching() {
        let mut controller = Controller::default();
        assert!(matches!(controller.handle(Action::ZoomIn), Command::Rescale(_)));
        assert!(matches!(controller.handle(Action::ZoomOut), Command::Rescale(_)));
        assert_eq!(controller.view().zoom.value(), 1.0);
        assert_eq!(controller.handle(Action::ZoomOut), Command::Nothing);
        assert_eq!(controller.handle(Action::ZoomReset), Command::Nothing);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut controller = Controller::default();
        let first = fetch(controller.handle(Action::Refresh));
        let second = fetch(controller.handle(Action::SelectMetric(MetricChoice::POUNDS)));
        assert_eq!(
            controller.complete(&first, Ok(MapResponse::default())),
            Completion::Stale
        );
        assert!(controller.is_busy());
        let Completion::Rendered(map) = controller.complete(&second, Ok(MapResponse::default()))
        else {
            panic!("latest response should render");
        };
        assert_eq!(map.label(), "pounds");
        assert_eq!(controller.load_state(), &LoadState::Ready);
    }

    #[test]
    fn failure_leaves_busy_state_and_retry_reissues_query() {
        let mut controller = loaded();
        controller.handle(Action::SubmitChemical("toluene".to_string()));
        let request = fetch(controller.handle(Action::SelectMetric(MetricChoice::POUNDS)));
        let completion = controller.complete(&request, Err("HTTP 500".to_string()));
        assert_eq!(completion, Completion::Failed("HTTP 500".to_string()));
        assert!(!controller.is_busy());
        assert_eq!(
            controller.load_state(),
            &LoadState::Failed("HTTP 500".to_string())
        );

        let retry = fetch(controller.handle(Action::Refresh));
        assert_eq!(retry.choice, request.choice);
        assert_eq!(retry.chemical, request.chemical);
        assert!(retry.seq > request.seq);
    }
}
