//! Runs the reducer against a reactive signal and executes the effects it asks for.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;
use rand::{SeedableRng, rngs::StdRng};
use wasm_bindgen_futures::spawn_local;

use crate::application::{
    Action, AppState, CheckConnectivityUseCase, Effect, LoadCatalogUseCase, RunAnalysisUseCase,
    SearchSymbolsUseCase, TaskSlot,
};
use crate::domain::logging::{LogComponent, get_logger, get_time_provider};
use crate::domain::market_data::SEARCH_LIMIT;
use crate::domain::settings::SettingsStore;
use crate::infrastructure::{BrowserStore, EChartsSurface, HttpMarketApi, IntervalHandle, TimeoutHandle};

pub const CHART_ELEMENT_ID: &str = "symbol-chart";

struct ShellInner {
    settings_store: SettingsStore<BrowserStore>,
    chart: EChartsSurface,
    search_debounce: RefCell<TaskSlot<TimeoutHandle>>,
    auto_refresh: RefCell<TaskSlot<IntervalHandle>>,
}

/// Handle shared by every component through context
#[derive(Clone)]
pub struct Shell {
    state: RwSignal<AppState>,
    inner: Rc<ShellInner>,
}

impl Shell {
    pub fn new() -> Self {
        let settings_store = SettingsStore::new(BrowserStore::open());
        let settings = settings_store.load();
        Self {
            state: create_rw_signal(AppState::new(settings)),
            inner: Rc::new(ShellInner {
                settings_store,
                chart: EChartsSurface::new(CHART_ELEMENT_ID),
                search_debounce: RefCell::new(TaskSlot::new()),
                auto_refresh: RefCell::new(TaskSlot::new()),
            }),
        }
    }

    pub fn state(&self) -> RwSignal<AppState> {
        self.state
    }

    /// Kick off catalog load, health check and the first render
    pub fn start(&self) {
        let effects = self.state.try_update(|state| state.start()).unwrap_or_default();
        self.run_all(effects);
    }

    pub fn dispatch(&self, action: Action) {
        let effects = self.state.try_update(|state| state.dispatch(action)).unwrap_or_default();
        self.run_all(effects);
    }

    pub fn resize_chart(&self) {
        self.inner.chart.resize();
    }

    fn run_all(&self, effects: Vec<Effect>) {
        for effect in effects {
            self.run(effect);
        }
    }

    fn api(&self) -> HttpMarketApi {
        HttpMarketApi::new(self.state.with_untracked(|s| s.settings.api_base().map(str::to_string)))
    }

    fn run(&self, effect: Effect) {
        match effect {
            Effect::LoadCatalog => {
                let shell = self.clone();
                spawn_local(async move {
                    let api = shell.api();
                    let catalog = LoadCatalogUseCase::new(&api).execute().await;
                    shell.dispatch(Action::CatalogLoaded(catalog));
                });
            }
            Effect::ScheduleSearch { ticket, delay } => {
                let shell = self.clone();
                let handle = TimeoutHandle::schedule(delay, move || {
                    shell.dispatch(Action::SearchDebounceElapsed(ticket));
                });
                self.inner.search_debounce.borrow_mut().replace(handle);
            }
            Effect::Search { ticket, query } => {
                let shell = self.clone();
                spawn_local(async move {
                    let api = shell.api();
                    let catalog = shell.state.with_untracked(|s| s.catalog.clone());
                    let results = SearchSymbolsUseCase::new(&api, &catalog).execute(&query, SEARCH_LIMIT).await;
                    shell.dispatch(Action::SearchResolved { ticket, results });
                });
            }
            Effect::RunAnalysis { seq, request } => {
                let shell = self.clone();
                spawn_local(async move {
                    let api = shell.api();
                    let mut rng = StdRng::from_entropy();
                    let now_ms = get_time_provider().current_timestamp();
                    let outcome = RunAnalysisUseCase::new(&api).execute(&request, now_ms, &mut rng).await;
                    shell.dispatch(Action::AnalysisCompleted { seq, outcome });
                });
            }
            Effect::RenderChart(config) => {
                if let Err(e) = self.inner.chart.render(&config) {
                    get_logger().error(LogComponent::Presentation("Shell"), &format!("Chart render failed: {e}"));
                }
            }
            Effect::PersistSettings(settings) => {
                let result = self.inner.settings_store.save(&settings).map_err(|e| e.to_string());
                self.dispatch(Action::SettingsPersisted(result));
            }
            Effect::StartAutoRefresh { every } => {
                let shell = self.clone();
                let handle = IntervalHandle::every(every, move || shell.dispatch(Action::AutoRefreshTick));
                self.inner.auto_refresh.borrow_mut().replace(handle);
                get_logger().info(
                    LogComponent::Presentation("Shell"),
                    &format!("Auto-refresh every {} s", every.as_secs()),
                );
            }
            Effect::CancelAutoRefresh => {
                if self.inner.auto_refresh.borrow_mut().cancel() {
                    get_logger().info(LogComponent::Presentation("Shell"), "Auto-refresh stopped");
                }
            }
            Effect::CheckConnectivity => {
                let shell = self.clone();
                spawn_local(async move {
                    let api = shell.api();
                    let status = CheckConnectivityUseCase::new(&api).execute().await;
                    shell.dispatch(Action::ConnectivityChecked(status));
                });
            }
            Effect::ScheduleDismiss { id, after } => {
                let shell = self.clone();
                TimeoutHandle::schedule(after, move || shell.dispatch(Action::DismissNotification(id))).detach();
            }
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}
