//! Row-pair matrix refresh

pub mod refresh;

pub use refresh::refresh;
