//! State transitions. `dispatch` mutates state and returns the effects the
//! shell has to carry out; it never touches the browser itself.

use std::time::Duration;

use super::actions::{Action, Effect, NotificationLevel, SEARCH_DEBOUNCE};
use super::analysis::{AnalysisOutcome, DataSource, RequestSeq};
use super::scheduler::Ticket;
use super::state::{AppState, ConnectionStatus, DataMode};
use crate::domain::chart::{ChartType, build_chart_config};
use crate::domain::errors::ValidationError;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{AnalysisRequest, Period, Symbol};
use crate::domain::settings::Settings;
use crate::{log_debug, log_info, log_warn};

const COMPONENT: LogComponent = LogComponent::Application("Reducer");

impl AppState {
    /// Effects to run once when the shell mounts
    pub fn start(&mut self) -> Vec<Effect> {
        self.connection = ConnectionStatus::Checking;
        vec![
            Effect::LoadCatalog,
            Effect::CheckConnectivity,
            Effect::RenderChart(build_chart_config(&self.chart_data, self.chart_type)),
        ]
    }

    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        let mut effects = Vec::new();
        match action {
            Action::CatalogLoaded(catalog) => {
                log_info!(COMPONENT, "Catalog ready with {} symbols", catalog.len());
                self.catalog = catalog;
                self.catalog_loaded = true;
            }
            Action::SearchInput(text) => self.on_search_input(text, &mut effects),
            Action::SearchDebounceElapsed(ticket) => self.on_debounce_elapsed(ticket, &mut effects),
            Action::SearchResolved { ticket, results } => {
                if self.search_tickets.is_current(ticket) {
                    self.suggestions = results;
                } else {
                    log_debug!(COMPONENT, "Dropping stale search results");
                }
            }
            Action::HideSuggestions => self.hide_suggestions(),
            Action::AddSymbol(raw) => self.on_add_symbol(&raw, &mut effects),
            Action::RemoveSymbol(raw) => self.on_remove_symbol(&raw, &mut effects),
            Action::ClearSelection => {
                self.selection.clear();
                self.chart_data.clear();
                self.data_mode = DataMode::Empty;
                self.push_render(&mut effects);
            }
            Action::SetPeriod(period) => self.on_set_period(period, &mut effects),
            Action::SetChartType(chart_type) => self.on_set_chart_type(chart_type, &mut effects),
            Action::Analyze => self.on_analyze(&mut effects),
            Action::AnalysisCompleted { seq, outcome } => self.on_analysis_completed(seq, outcome, &mut effects),
            Action::AutoRefreshTick => self.on_auto_refresh_tick(&mut effects),
            Action::OpenSettings => self.settings_open = true,
            Action::CloseSettings => {
                self.settings_open = false;
                self.pending_settings = None;
            }
            Action::SaveSettings(settings) => self.on_save_settings(settings, &mut effects),
            Action::SettingsPersisted(result) => self.on_settings_persisted(result, &mut effects),
            Action::ConnectivityChecked(status) => {
                log_info!(COMPONENT, "Connectivity: {}", status.label());
                self.connection = status;
            }
            Action::DismissNotification(id) => self.notifications.retain(|n| n.id != id),
        }
        effects
    }

    fn on_search_input(&mut self, text: String, effects: &mut Vec<Effect>) {
        let blank = text.trim().is_empty();
        self.query = text;
        if blank {
            self.hide_suggestions();
            return;
        }
        let ticket = self.search_tickets.issue();
        effects.push(Effect::ScheduleSearch { ticket, delay: SEARCH_DEBOUNCE });
    }

    fn on_debounce_elapsed(&mut self, ticket: Ticket, effects: &mut Vec<Effect>) {
        if !self.search_tickets.is_current(ticket) {
            log_debug!(COMPONENT, "Ignoring superseded debounce tick");
            return;
        }
        let query = self.query.trim().to_string();
        if !query.is_empty() {
            effects.push(Effect::Search { ticket, query });
        }
    }

    fn hide_suggestions(&mut self) {
        self.suggestions.clear();
        self.search_tickets.invalidate();
    }

    fn on_add_symbol(&mut self, raw: &str, effects: &mut Vec<Effect>) {
        let added = Symbol::new(raw).and_then(|symbol| {
            self.selection.add(symbol.clone())?;
            Ok(symbol)
        });
        match added {
            Ok(symbol) => {
                log_info!(COMPONENT, "Selected {} ({} total)", symbol, self.selection.len());
                self.query.clear();
                self.hide_suggestions();
            }
            Err(e) => self.warn(e, effects),
        }
    }

    fn on_remove_symbol(&mut self, raw: &str, effects: &mut Vec<Effect>) {
        let symbol = Symbol::from(raw);
        self.selection.remove(&symbol);
        self.chart_data.remove(&symbol);
        if self.chart_data.is_empty() {
            self.data_mode = DataMode::Empty;
        }
        self.push_render(effects);
    }

    fn on_set_period(&mut self, period: Period, effects: &mut Vec<Effect>) {
        if self.period == period {
            return;
        }
        self.period = period;
        let showing_data = !self.chart_data.is_empty() || self.is_loading();
        if showing_data && !self.selection.is_empty() {
            // A run for the old period may still be in flight; the new one supersedes it.
            self.start_analysis(effects);
        }
    }

    fn on_set_chart_type(&mut self, chart_type: ChartType, effects: &mut Vec<Effect>) {
        if self.chart_type == chart_type {
            return;
        }
        self.chart_type = chart_type;
        self.push_render(effects);
    }

    fn on_analyze(&mut self, effects: &mut Vec<Effect>) {
        if self.selection.is_empty() {
            self.warn(ValidationError::EmptySelection, effects);
            return;
        }
        if self.is_loading() {
            log_debug!(COMPONENT, "Analyze ignored, a run is in progress");
            return;
        }
        self.start_analysis(effects);
    }

    fn on_auto_refresh_tick(&mut self, effects: &mut Vec<Effect>) {
        if !self.auto_refresh_active || self.selection.is_empty() {
            return;
        }
        if self.is_loading() {
            log_debug!(COMPONENT, "Skipping refresh tick, a run is in progress");
            return;
        }
        self.start_analysis(effects);
    }

    fn start_analysis(&mut self, effects: &mut Vec<Effect>) {
        let seq = self.analysis.issue();
        let request = AnalysisRequest {
            symbols: self.selection.as_slice().to_vec(),
            period: self.period,
            chart_type: self.chart_type,
        };
        log_info!(
            COMPONENT,
            "Analysis #{} for {} symbols over {}",
            seq.value(),
            request.symbols.len(),
            request.period.token()
        );
        effects.push(Effect::RunAnalysis { seq, request });
    }

    fn on_analysis_completed(&mut self, seq: RequestSeq, outcome: AnalysisOutcome, effects: &mut Vec<Effect>) {
        if !self.analysis.complete(seq) {
            log_debug!(COMPONENT, "Discarding stale analysis #{}", seq.value());
            return;
        }

        let AnalysisOutcome { mut data, source, fallback_reason } = outcome;
        let selection = &self.selection;
        data.retain_symbols(|s| selection.contains(s));
        self.chart_data = data;

        self.data_mode = match (self.chart_data.is_empty(), source) {
            (true, _) => DataMode::Empty,
            (false, DataSource::Remote) => DataMode::Live,
            (false, DataSource::Synthetic) => DataMode::Demo,
        };

        if source == DataSource::Synthetic {
            let reason = fallback_reason.unwrap_or_else(|| "API unavailable".to_string());
            self.notify(NotificationLevel::Info, format!("{reason}. Showing demo data."), effects);
        }
        self.push_render(effects);
    }

    fn on_save_settings(&mut self, mut settings: Settings, effects: &mut Vec<Effect>) {
        settings.api_base_url = settings
            .api_base_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        if let Err(e) = settings.validate() {
            self.warn(e, effects);
            return;
        }
        self.pending_settings = Some(settings.clone());
        effects.push(Effect::PersistSettings(settings));
    }

    fn on_settings_persisted(&mut self, result: Result<(), String>, effects: &mut Vec<Effect>) {
        let Some(settings) = self.pending_settings.take() else {
            return;
        };
        if let Err(reason) = result {
            log_warn!(COMPONENT, "Settings not saved: {}", reason);
            self.notify(NotificationLevel::Error, format!("Could not save settings: {reason}"), effects);
            return;
        }

        let api_changed = settings.api_base() != self.settings.api_base();
        self.settings = settings;
        self.settings_open = false;
        if api_changed {
            effects.push(Effect::LoadCatalog);
        }

        if self.settings.auto_refresh && !self.selection.is_empty() {
            let every = Duration::from_secs(self.settings.refresh_interval_seconds as u64);
            self.auto_refresh_active = true;
            effects.push(Effect::StartAutoRefresh { every });
        } else {
            self.auto_refresh_active = false;
            effects.push(Effect::CancelAutoRefresh);
        }

        self.connection = ConnectionStatus::Checking;
        effects.push(Effect::CheckConnectivity);
        self.notify(NotificationLevel::Success, "Settings saved", effects);
    }

    fn warn(&mut self, error: ValidationError, effects: &mut Vec<Effect>) {
        log_debug!(COMPONENT, "Rejected: {}", error);
        self.notify(NotificationLevel::Warning, error.to_string(), effects);
    }

    fn push_render(&self, effects: &mut Vec<Effect>) {
        effects.push(Effect::RenderChart(build_chart_config(&self.chart_data, self.chart_type)));
    }
}
