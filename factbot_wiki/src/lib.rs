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

pub mod client;
pub mod fields;
pub mod handlers;
pub mod infobox;

pub use client::{PageSource, WikiClient, WikiConfig, WikiError};
pub use handlers::{FieldLookup, FullInfobox, InfoboxField};
pub use infobox::{clean_text, first_infobox_text};
