pub mod separator;
pub mod snapshot;
