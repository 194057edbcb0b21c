pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{Settings, TomlConfig};

pub use crate::app::{InteractiveSession, OneShotSession};
pub use crate::core::{arithmetic, form::BillSplitForm};
pub use crate::domain::model::{FormSnapshot, SplitCount, TipPercent};
pub use crate::domain::ports::{FormDefaults, SubmitHandler};
pub use crate::utils::error::{Result, TipError};
