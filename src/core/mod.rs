pub mod arithmetic;
pub mod form;

pub use crate::domain::model::{FormSnapshot, SplitCount, TipPercent};
pub use crate::domain::ports::{FormDefaults, SubmitHandler};
pub use crate::utils::error::Result;
