pub mod shell;

pub use shell::{CHART_ELEMENT_ID, Shell};
