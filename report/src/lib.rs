pub mod config;
pub mod source;
pub mod types;

pub use config::ReportConfig;
pub use source::{
    fetch_or_cached, HttpReportSource, ReportError, ReportResult, ReportSource,
};
pub use types::{Outcome, ResultReport};

pub mod prelude {
    pub use crate::config::*;
    pub use crate::source::*;
    pub use crate::types::*;
}
