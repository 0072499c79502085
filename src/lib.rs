pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};

pub use core::{catalog::HttpSessionSource, engine::FinderEngine, filter::filter_sessions};
pub use domain::model::{
    Coordinate, FilterCriteria, Partner, ProgramRef, Session, SessionMatch, DEFAULT_RADIUS_MILES,
};
pub use utils::error::{FinderError, Result};
