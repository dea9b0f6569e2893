//! Logging facilities for Formboard.
//!
//! Formboard uses the `tracing` crate for instrumentation. The library never
//! installs a subscriber; to see logs, install one in the application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Soft-failed operations (an unknown id, an action in the wrong mode) are
//! reported at `debug` level under the targets below; routine state
//! transitions trace at `trace` level.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "formboard_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "formboard_core::signal";
    /// Container registry target.
    pub const REGISTRY: &str = "formboard::registry";
    /// Drag/reorder engine target.
    pub const DRAG: &str = "formboard::drag";
    /// Field editing session target.
    pub const EDITOR: &str = "formboard::editor";
    /// Top-level store target.
    pub const BOARD: &str = "formboard::board";
    /// Form runtime model target.
    pub const RUNTIME: &str = "formboard::runtime";
}
