pub mod classify;
pub mod identity;

pub use classify::{classify, Kind};
pub use identity::{parse, ModelIdentity};
