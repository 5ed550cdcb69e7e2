pub mod actions;
pub mod analysis;
pub mod reducer;
pub mod scheduler;
pub mod state;
pub mod use_cases;

pub use actions::*;
pub use analysis::*;
pub use scheduler::*;
pub use state::*;
pub use use_cases::*;
