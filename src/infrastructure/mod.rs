//! Browser adapters: HTTP, localStorage, timers, console logging and the chart library.

pub mod dto;
pub mod http;
pub mod rendering;
pub mod services;
pub mod storage;
pub mod timers;

pub use http::HttpMarketApi;
pub use rendering::EChartsSurface;
pub use services::{BrowserTimeProvider, ConsoleLogger};
pub use storage::{BrowserStore, LocalStorage};
pub use timers::{IntervalHandle, TimeoutHandle};
