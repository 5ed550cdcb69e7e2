//! Market data: symbols, catalog, selection and time series.

pub mod catalog;
pub mod entities;
pub mod repositories;
pub mod selection;
pub mod synthetic;
pub mod value_objects;

pub use catalog::{SEARCH_LIMIT, SymbolCatalog};
pub use entities::*;
pub use repositories::{AnalysisRequest, MarketApi};
pub use selection::{MAX_SELECTION, SelectionSet};
pub use value_objects::*;
