//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the browser.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.
//!
//! The dashboard runs on a single-threaded event loop, so the futures
//! returned by ports are not required to be `Send`.

pub mod action_gateway;
pub mod push_transport;
pub mod sleeper;
pub mod updates;

pub use action_gateway::{ActionError, ActionGateway};
pub use push_transport::{ChannelEvent, PushConnection, PushTransport, TransportError};
pub use sleeper::Sleeper;
pub use updates::{ActionControl, DashboardUpdates};
