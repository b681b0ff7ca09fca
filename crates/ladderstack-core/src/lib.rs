//! Game business logic for LadderStack.
#![allow(missing_docs, clippy::module_name_repetitions)]

pub mod config;
pub mod engine;
pub mod error;
pub mod handler;
pub mod provider;
pub mod store;
