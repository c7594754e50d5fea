//! # pyropanel-domain
//!
//! Pure domain model for the PyroPanel dashboard client.
//!
//! ## Responsibilities
//! - Foundational types: server identifiers, error conventions, timestamps
//! - Define **server actions** (`start`, `stop`, `restart`, …) and the requests
//!   that carry them
//! - Define **server statuses** as rendered by status indicators
//! - Define **notifications** and their timed lifecycle
//! - Define **resource samples** and the bounded rolling chart buffer
//! - Define the **real-time message** union decoded from the push channel
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

#[macro_use]
mod macros;

pub mod error;
pub mod id;
pub mod time;

pub mod action;
pub mod chart;
pub mod message;
pub mod notification;
pub mod server;
pub mod stats;
