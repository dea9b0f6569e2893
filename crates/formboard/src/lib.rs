//! Formboard — a drag-and-drop form builder engine.
//!
//! The engine lets a UI shell assemble a form by dragging field
//! definitions from a source palette into a target canvas, reordering
//! them, editing per-field properties, and previewing the resulting
//! runtime form. It is deliberately headless: gesture detection,
//! hit-testing, and widget rendering are the shell's problem; this crate
//! owns the state and the invariants.
//!
//! - [`registry`] — containers and their ordered field lists, with the
//!   lookup / move / transfer primitives
//! - [`drag`] — the reorder algorithms: optimistic cross-container
//!   transfer on hover, same-container reorder on drop
//! - [`editor`] — copy-on-open, replace-on-commit edit sessions
//! - [`board`] — the central store tying it together, with change signals
//!   for re-rendering
//! - [`runtime`] — the preview-mode value collector
//! - [`seed`] — the stock palette a fresh board starts from
//!
//! # Example
//!
//! ```
//! use formboard::{ContainerId, FormBoard};
//!
//! let mut board = FormBoard::seeded();
//! let palette = ContainerId::new(formboard::seed::PALETTE);
//! let canvas = ContainerId::new(formboard::seed::CANVAS);
//!
//! board.signals().fields_changed.connect(|_| {
//!     // re-render both containers
//! });
//!
//! // Drag the first palette field onto the canvas.
//! let first = board.ids_of(&palette)[0];
//! board.drag_start(first);
//! board.drag_over(Some(canvas.clone().into()));
//! board.drag_end(Some(canvas.clone().into()));
//!
//! assert_eq!(board.ids_of(&canvas), vec![first]);
//! ```

pub mod board;
pub mod drag;
pub mod editor;
pub mod field;
pub mod registry;
pub mod runtime;
pub mod seed;

pub use board::{BoardSignals, FormBoard, Mode};
pub use drag::DropTarget;
pub use editor::{EditSession, NumericProp, TextProp};
pub use field::{Field, FieldExtra, FieldKind};
pub use registry::{Container, ContainerRegistry, InsertPosition};
pub use runtime::{FormRuntime, FormSubmission, FormValue};

pub use formboard_core::{BoardError, ConnectionId, ContainerId, FieldId, Signal};
