pub mod session;

pub use session::{InteractiveSession, OneShotSession};
