//! Core systems for Formboard.
//!
//! This crate provides the foundational components of the Formboard form
//! builder engine:
//!
//! - **Signal/Slot System**: Type-safe change notification for the UI shell
//! - **Identifiers**: Process-unique field ids and interned container ids
//! - **Error Taxonomy**: Not-found and invalid-state errors behind the
//!   engine's fail-soft policy
//! - **Logging**: `tracing` target constants for filtering by subsystem
//!
//! # Threading Model
//!
//! The engine is single-threaded and event-driven: every operation executes
//! synchronously on the UI event loop in response to a discrete external
//! event, and the store has exactly one writer. Signals therefore invoke
//! their slots directly on the emitting thread; anything that introduces
//! background work must serialize its writes through that same single-writer
//! discipline.
//!
//! # Signal Example
//!
//! ```
//! use formboard_core::Signal;
//!
//! let fields_changed = Signal::<()>::new();
//!
//! let conn_id = fields_changed.connect(|_| {
//!     println!("re-render the containers");
//! });
//!
//! fields_changed.emit(());
//! fields_changed.disconnect(conn_id);
//! ```

mod error;
mod id;
pub mod logging;
mod signal;

pub use error::{BoardError, Result};
pub use id::{ContainerId, FieldId};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
