//! HTTP service layer for LadderStack.
//!
//! This crate implements the plain-JSON game protocol, providing:
//!
//! - **Router**: Maps method + path + query string to a game operation
//! - **Handler trait**: Defines the boundary between HTTP and business logic
//! - **Service**: Hyper `Service` implementation for the game endpoints
//! - **Response helpers**: JSON success/error response formatting
#![allow(missing_docs)]

pub mod body;
pub mod dispatch;
pub mod response;
pub mod router;
pub mod service;

pub use body::LadderResponseBody;
pub use dispatch::{LadderHandler, NotImplementedHandler};
pub use service::{LadderHttpConfig, LadderHttpService};
