//! Typed UI actions and the side-effect intents the reducer emits for them.

use std::time::Duration;

use super::analysis::{AnalysisOutcome, RequestSeq};
use super::scheduler::Ticket;
use super::state::ConnectionStatus;
use crate::domain::chart::{ChartConfig, ChartType};
use crate::domain::market_data::{AnalysisRequest, Period, SymbolCatalog, SymbolInfo};
use crate::domain::settings::Settings;

pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);
pub const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Info => "toast-info",
            Self::Success => "toast-success",
            Self::Warning => "toast-warning",
            Self::Error => "toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub level: NotificationLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    CatalogLoaded(SymbolCatalog),
    /// Raw text of the search box
    SearchInput(String),
    SearchDebounceElapsed(Ticket),
    SearchResolved { ticket: Ticket, results: Vec<SymbolInfo> },
    HideSuggestions,
    AddSymbol(String),
    RemoveSymbol(String),
    ClearSelection,
    SetPeriod(Period),
    SetChartType(ChartType),
    Analyze,
    AnalysisCompleted { seq: RequestSeq, outcome: AnalysisOutcome },
    AutoRefreshTick,
    OpenSettings,
    CloseSettings,
    SaveSettings(Settings),
    /// Result of writing settings to storage; `Err` carries the reason
    SettingsPersisted(Result<(), String>),
    ConnectivityChecked(ConnectionStatus),
    DismissNotification(u64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    LoadCatalog,
    ScheduleSearch { ticket: Ticket, delay: Duration },
    Search { ticket: Ticket, query: String },
    RunAnalysis { seq: RequestSeq, request: AnalysisRequest },
    RenderChart(ChartConfig),
    PersistSettings(Settings),
    StartAutoRefresh { every: Duration },
    CancelAutoRefresh,
    CheckConnectivity,
    ScheduleDismiss { id: u64, after: Duration },
}
