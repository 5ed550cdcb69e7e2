pub mod catalog;
pub mod connectivity;
pub mod run_analysis;

pub use catalog::*;
pub use connectivity::*;
pub use run_analysis::*;
