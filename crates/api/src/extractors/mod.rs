//! Custom Axum extractors.

pub mod requester;

pub use requester::{Requester, USER_ID_HEADER};
