//! Application state owned by the UI shell and mutated only through `dispatch`.

use super::actions::{Effect, Notification, NotificationLevel, TOAST_LIFETIME};
use super::analysis::AnalysisSequencer;
use super::scheduler::TicketCounter;
use crate::domain::chart::ChartType;
use crate::domain::market_data::{ChartDataMap, Period, SelectionSet, SymbolCatalog, SymbolInfo};
use crate::domain::settings::Settings;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Unknown,
    Checking,
    Connected { version: String },
    /// No endpoint configured
    Disconnected { reason: String },
    Error { reason: String },
}

impl ConnectionStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected { .. })
    }

    pub fn label(&self) -> String {
        match self {
            Self::Unknown => "Not checked".to_string(),
            Self::Checking => "Checking...".to_string(),
            Self::Connected { version } => format!("Connected (v{version})"),
            Self::Disconnected { reason } => format!("Offline: {reason}"),
            Self::Error { reason } => format!("Error: {reason}"),
        }
    }
}

/// Coarse UI phase, derived from state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiPhase {
    Idle,
    Suggesting,
    Loading,
}

/// Origin of what the chart currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataMode {
    #[default]
    Empty,
    Live,
    Demo,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub catalog: SymbolCatalog,
    pub catalog_loaded: bool,
    pub selection: SelectionSet,
    pub chart_data: ChartDataMap,
    pub period: Period,
    pub chart_type: ChartType,
    pub data_mode: DataMode,

    pub settings: Settings,
    /// Settings waiting for the storage write to be confirmed
    pub pending_settings: Option<Settings>,
    pub auto_refresh_active: bool,
    pub settings_open: bool,
    pub connection: ConnectionStatus,

    pub query: String,
    pub suggestions: Vec<SymbolInfo>,
    pub search_tickets: TicketCounter,
    pub analysis: AnalysisSequencer,

    pub notifications: Vec<Notification>,
    next_notification_id: u64,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self { settings, ..Self::default() }
    }

    pub fn is_loading(&self) -> bool {
        self.analysis.in_flight()
    }

    pub fn phase(&self) -> UiPhase {
        if self.is_loading() {
            UiPhase::Loading
        } else if !self.suggestions.is_empty() {
            UiPhase::Suggesting
        } else {
            UiPhase::Idle
        }
    }

    /// Queue a toast and its auto-dismissal
    pub(crate) fn notify(&mut self, level: NotificationLevel, message: impl Into<String>, effects: &mut Vec<Effect>) {
        self.next_notification_id += 1;
        let id = self.next_notification_id;
        self.notifications.push(Notification { id, level, message: message.into() });
        effects.push(Effect::ScheduleDismiss { id, after: TOAST_LIFETIME });
    }

    /// True when chart data only covers selected symbols
    pub fn chart_data_consistent(&self) -> bool {
        self.chart_data.symbols().all(|s| self.selection.contains(s))
    }
}
