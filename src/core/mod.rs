pub mod catalog;
pub mod engine;
pub mod filter;
pub mod geo;
pub mod report;
pub mod upcoming;

pub use crate::domain::model::{FilterCriteria, Session, SessionMatch};
pub use crate::domain::ports::{ConfigProvider, ReportSink, SessionSource};
pub use crate::utils::error::Result;
