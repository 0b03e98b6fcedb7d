#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod dispatch;
pub mod matcher;
pub mod pattern;
pub mod query;

pub use dispatch::{DispatchTable, Handler, NOT_UNDERSTOOD, NO_ANSWERS, Resolution};
pub use matcher::attempt_match;
pub use pattern::{Pattern, PatternError, PatternToken};
pub use query::normalize;
