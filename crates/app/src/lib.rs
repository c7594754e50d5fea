//! # pyropanel-app
//!
//! Application layer — use-cases, the explicit dashboard model, and **port
//! definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that the browser adapter implements:
//!   - `ActionGateway` — sends server action requests
//!   - `PushTransport` / `PushConnection` — the real-time push channel
//!   - `Sleeper` — timers
//!   - `DashboardUpdates` / `ActionControl` — visible effects on the page
//! - Define **use-cases**:
//!   - `ActionService` — click → request → notification + optimistic status
//!   - `NotificationCenter` — lazily created container, two-phase removal
//!   - `RealtimeChannel` — decode, dispatch, fixed-delay reconnect
//!   - `nav` — active link selection and the mobile menu toggle
//! - Hold the **dashboard model** (`DashboardStore`) renderers subscribe to
//! - Load and validate the dashboard **configuration**
//!
//! ## Dependency rule
//! Depends on `pyropanel-domain` only. Never imports browser crates; the
//! adapter depends on *this* crate, not the reverse.

pub mod config;
pub mod dashboard;
pub mod nav;
pub mod ports;
pub mod realtime;
pub mod services;
