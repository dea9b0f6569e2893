//! The central form builder store.
//!
//! [`FormBoard`] owns the container registry, the current interaction mode,
//! and the preview flag, and exposes the action entry points the UI shell
//! wires to gesture and editor callbacks. Every mutation executes
//! synchronously on the caller's thread (the UI event loop — the store has
//! exactly one writer) and emits the matching [`BoardSignals`] signal after
//! the state has been applied, so slots always observe the post-mutation
//! state.
//!
//! Impossible user actions — dropping a ghost id, editing mid-drag,
//! committing with no session — are soft no-ops traced at `debug` level.
//! Nothing here panics or surfaces an error to the user.

use formboard_core::{BoardError, ContainerId, FieldId, Signal};

use crate::drag::{self, DropTarget};
use crate::editor::{EditSession, NumericProp, TextProp};
use crate::field::{Field, FieldKind};
use crate::registry::{Container, ContainerRegistry};
use crate::runtime::FormRuntime;
use crate::seed;

/// The single interaction mode of the board.
///
/// Dragging and editing are mutually exclusive by construction: there is
/// exactly one mode, so the conflicting combination cannot be represented.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Nothing in flight.
    Idle,
    /// A drag is active for the given field.
    Dragging(FieldId),
    /// An edit session is open.
    Editing(EditSession),
}

impl Mode {
    fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Dragging(_) => "dragging",
            Self::Editing(_) => "editing",
        }
    }
}

/// Signals the board emits for the UI shell.
///
/// All signals fire after the corresponding state change has been applied.
pub struct BoardSignals {
    /// Any registry mutation: add, delete, reorder, transfer, commit.
    pub fields_changed: Signal<()>,
    /// The active drag changed; carries the dragged field id, `None` when
    /// the drag ended.
    pub drag_changed: Signal<Option<FieldId>>,
    /// The open edit session changed; carries the session's target id,
    /// `None` when the session closed.
    pub editing_changed: Signal<Option<FieldId>>,
    /// Preview mode was entered (`true`) or left (`false`).
    pub preview_changed: Signal<bool>,
}

impl BoardSignals {
    fn new() -> Self {
        Self {
            fields_changed: Signal::new(),
            drag_changed: Signal::new(),
            editing_changed: Signal::new(),
            preview_changed: Signal::new(),
        }
    }
}

/// The form builder store.
pub struct FormBoard {
    registry: ContainerRegistry,
    mode: Mode,
    preview: bool,
    /// Container that receives newly added fields.
    palette: ContainerId,
    signals: BoardSignals,
}

impl FormBoard {
    /// Creates a board over an existing registry.
    ///
    /// `palette` names the container that the "add field" action appends
    /// to; it should be one of the registry's containers.
    pub fn new(registry: ContainerRegistry, palette: ContainerId) -> Self {
        Self {
            registry,
            mode: Mode::Idle,
            preview: false,
            palette,
            signals: BoardSignals::new(),
        }
    }

    /// Creates a board seeded with the stock palette and an empty canvas.
    pub fn seeded() -> Self {
        Self::new(seed::seed_registry(), ContainerId::new(seed::PALETTE))
    }

    // -------------------------------------------------------------------------
    // Read surface
    // -------------------------------------------------------------------------

    /// The current registry, for rendering both containers.
    pub fn registry(&self) -> &ContainerRegistry {
        &self.registry
    }

    /// An owned snapshot of all containers, in render order.
    pub fn snapshot(&self) -> Vec<Container> {
        self.registry.containers().to_vec()
    }

    /// The board's signals.
    pub fn signals(&self) -> &BoardSignals {
        &self.signals
    }

    /// The field currently being dragged, for overlay rendering.
    pub fn active_drag(&self) -> Option<FieldId> {
        match self.mode {
            Mode::Dragging(id) => Some(id),
            _ => None,
        }
    }

    /// The open edit session, for editor-panel rendering.
    pub fn editing(&self) -> Option<&EditSession> {
        match &self.mode {
            Mode::Editing(session) => Some(session),
            _ => None,
        }
    }

    /// Whether preview mode is active.
    pub fn is_previewing(&self) -> bool {
        self.preview
    }

    /// Ordered field ids of a container, for the gesture collaborator's
    /// draggable/droppable lists.
    pub fn ids_of(&self, container: &ContainerId) -> Vec<FieldId> {
        self.registry.ids_of(container)
    }

    // -------------------------------------------------------------------------
    // Field lifecycle
    // -------------------------------------------------------------------------

    /// Adds a fresh default field to the palette container.
    ///
    /// Returns the new field's id, or `None` when the palette container is
    /// missing from the registry.
    pub fn add_field(&mut self) -> Option<FieldId> {
        let field = Field::blank();
        let id = field.id;
        let palette = self.palette.clone();
        match self.registry.push_field(&palette, field) {
            Ok(()) => {
                tracing::trace!(target: "formboard::board", field = %id, "field added");
                self.signals.fields_changed.emit(());
                Some(id)
            }
            Err(err) => {
                self.trace_soft_fail("add field", &err);
                None
            }
        }
    }

    /// Deletes a field from whichever container holds it.
    ///
    /// An edit session open on that field is closed first, so a later
    /// commit cannot resurrect the deleted field.
    pub fn delete_field(&mut self, id: FieldId) {
        if self.editing().is_some_and(|s| s.target() == id) {
            self.mode = Mode::Idle;
            self.signals.editing_changed.emit(None);
        }
        match self.registry.remove_field(id) {
            Ok(_) => {
                tracing::trace!(target: "formboard::board", field = %id, "field deleted");
                self.signals.fields_changed.emit(());
            }
            Err(err) => self.trace_soft_fail("delete field", &err),
        }
    }

    // -------------------------------------------------------------------------
    // Drag lifecycle
    // -------------------------------------------------------------------------

    /// Begins dragging a field.
    ///
    /// Starting a drag always wins over editing: any open session is
    /// discarded uncommitted. A drag-start for an id the registry does not
    /// know is ignored.
    pub fn drag_start(&mut self, id: FieldId) {
        if matches!(self.mode, Mode::Editing(_)) {
            self.mode = Mode::Idle;
            self.signals.editing_changed.emit(None);
        }
        if !self.registry.contains(id) {
            self.trace_soft_fail("start drag", &BoardError::UnknownField(id));
            return;
        }
        self.mode = Mode::Dragging(id);
        tracing::trace!(target: "formboard::board", field = %id, "drag started");
        self.signals.drag_changed.emit(Some(id));
    }

    /// Reports what the drag is currently hovering over.
    ///
    /// Crossing into another container applies the optimistic transfer
    /// immediately; see [`crate::drag`]. Ignored while not dragging, and
    /// when `over` is `None` (pointer outside every droppable).
    pub fn drag_over(&mut self, over: Option<DropTarget>) {
        let Mode::Dragging(active) = self.mode else {
            self.trace_soft_fail(
                "hover drag",
                &BoardError::invalid_state("hover drag", self.mode.name()),
            );
            return;
        };
        let Some(over) = over else { return };

        match drag::hover(&mut self.registry, active, &over) {
            Ok(true) => self.signals.fields_changed.emit(()),
            Ok(false) => {}
            Err(err) => self.trace_soft_fail("hover drag", &err),
        }
    }

    /// Ends the drag, dropping on `over`.
    ///
    /// A drop outside every droppable (`None`) just ends the drag — the
    /// optimistic transfers applied during hovering stand; there is no
    /// rollback. A same-container drop on another field reorders the
    /// container. The board returns to idle in every case.
    pub fn drag_end(&mut self, over: Option<DropTarget>) {
        let Mode::Dragging(active) = self.mode else {
            self.trace_soft_fail(
                "end drag",
                &BoardError::invalid_state("end drag", self.mode.name()),
            );
            return;
        };

        if let Some(over) = over {
            match drag::drop_on(&mut self.registry, active, &over) {
                Ok(true) => self.signals.fields_changed.emit(()),
                Ok(false) => {}
                Err(err) => self.trace_soft_fail("end drag", &err),
            }
        }

        self.mode = Mode::Idle;
        tracing::trace!(target: "formboard::board", field = %active, "drag ended");
        self.signals.drag_changed.emit(None);
    }

    // -------------------------------------------------------------------------
    // Edit session lifecycle
    // -------------------------------------------------------------------------

    /// Opens an edit session over a copy of the given field.
    ///
    /// Rejected while a drag is active. Opening while another session is
    /// open replaces that session, discarding its uncommitted buffer. A
    /// no-op when the field cannot be located.
    pub fn open_editor(&mut self, id: FieldId) {
        if matches!(self.mode, Mode::Dragging(_)) {
            self.trace_soft_fail(
                "open editor",
                &BoardError::invalid_state("open editor", self.mode.name()),
            );
            return;
        }
        let Some(field) = self.registry.field(id).cloned() else {
            self.trace_soft_fail("open editor", &BoardError::UnknownField(id));
            return;
        };
        self.mode = Mode::Editing(EditSession::open(field));
        tracing::trace!(target: "formboard::board", field = %id, "edit session opened");
        self.signals.editing_changed.emit(Some(id));
    }

    /// Edits a text property of the open session's buffer.
    pub fn edit_text(&mut self, prop: TextProp, value: impl Into<String>) {
        match &mut self.mode {
            Mode::Editing(session) => session.set_text(prop, value),
            mode => {
                let mode = mode.name();
                self.trace_soft_fail("edit field", &BoardError::invalid_state("edit field", mode));
            }
        }
    }

    /// Switches the kind of the open session's buffer.
    pub fn edit_kind(&mut self, kind: FieldKind) {
        match &mut self.mode {
            Mode::Editing(session) => session.set_kind(kind),
            mode => {
                let mode = mode.name();
                self.trace_soft_fail("edit field", &BoardError::invalid_state("edit field", mode));
            }
        }
    }

    /// Toggles the required flag of the open session's buffer.
    pub fn edit_required(&mut self, required: bool) {
        match &mut self.mode {
            Mode::Editing(session) => session.set_required(required),
            mode => {
                let mode = mode.name();
                self.trace_soft_fail("edit field", &BoardError::invalid_state("edit field", mode));
            }
        }
    }

    /// Edits a numeric constraint of the open session's buffer from raw
    /// input text.
    pub fn edit_numeric(&mut self, prop: NumericProp, raw: &str) {
        match &mut self.mode {
            Mode::Editing(session) => session.set_numeric(prop, raw),
            mode => {
                let mode = mode.name();
                self.trace_soft_fail("edit field", &BoardError::invalid_state("edit field", mode));
            }
        }
    }

    /// Rebuilds the option list of the open session's buffer from raw
    /// comma-separated text.
    pub fn edit_options(&mut self, raw: &str) {
        match &mut self.mode {
            Mode::Editing(session) => session.set_options(raw),
            mode => {
                let mode = mode.name();
                self.trace_soft_fail("edit field", &BoardError::invalid_state("edit field", mode));
            }
        }
    }

    /// Commits the open session: the buffer replaces the field wholesale at
    /// its existing index.
    ///
    /// A no-op with no session open. If the field was deleted mid-edit the
    /// session is discarded without error.
    pub fn commit_edit(&mut self) {
        if !matches!(self.mode, Mode::Editing(_)) {
            self.trace_soft_fail(
                "commit edit",
                &BoardError::invalid_state("commit edit", self.mode.name()),
            );
            return;
        }
        let Mode::Editing(session) = std::mem::replace(&mut self.mode, Mode::Idle) else {
            return;
        };

        let target = session.target();
        match self.registry.replace_field(target, session.into_buffer()) {
            Ok(()) => {
                tracing::trace!(target: "formboard::board", field = %target, "edit committed");
                self.signals.fields_changed.emit(());
            }
            // Deleted mid-edit; the buffer is simply discarded.
            Err(err) => self.trace_soft_fail("commit edit", &err),
        }
        self.signals.editing_changed.emit(None);
    }

    /// Discards the open session unconditionally; the registry is
    /// untouched.
    pub fn cancel_edit(&mut self) {
        if matches!(self.mode, Mode::Editing(_)) {
            self.mode = Mode::Idle;
            tracing::trace!(target: "formboard::board", "edit session cancelled");
            self.signals.editing_changed.emit(None);
        }
    }

    // -------------------------------------------------------------------------
    // Preview
    // -------------------------------------------------------------------------

    /// Enters preview mode.
    pub fn enter_preview(&mut self) {
        if !self.preview {
            self.preview = true;
            self.signals.preview_changed.emit(true);
        }
    }

    /// Leaves preview mode.
    pub fn exit_preview(&mut self) {
        if self.preview {
            self.preview = false;
            self.signals.preview_changed.emit(false);
        }
    }

    /// Builds a runtime form over a container's current field list.
    ///
    /// Reads the list once; later registry changes do not affect the
    /// returned runtime. An unknown container yields an empty form.
    pub fn runtime_for(&self, container: &ContainerId) -> FormRuntime {
        let fields = self
            .registry
            .container(container)
            .map(|c| c.fields().to_vec())
            .unwrap_or_default();
        FormRuntime::new(fields)
    }

    fn trace_soft_fail(&self, operation: &str, err: &BoardError) {
        tracing::debug!(
            target: "formboard::board",
            operation,
            %err,
            "operation ignored"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldExtra;

    fn board() -> (FormBoard, ContainerId, ContainerId, Vec<FieldId>) {
        let palette = ContainerId::new("palette");
        let canvas = ContainerId::new("canvas");
        let fields: Vec<Field> = ["A", "B", "C"]
            .iter()
            .map(|l| Field::new(FieldKind::Text, *l, l.to_lowercase()))
            .collect();
        let ids = fields.iter().map(|f| f.id).collect();

        let mut registry = ContainerRegistry::new();
        registry.add_container(Container::with_fields(palette.clone(), "Palette", fields));
        registry.add_container(Container::new(canvas.clone(), "Canvas"));
        (
            FormBoard::new(registry, palette.clone()),
            palette,
            canvas,
            ids,
        )
    }

    #[test]
    fn test_add_field_goes_to_palette() {
        let (mut board, palette, _, _) = board();
        let id = board.add_field().unwrap();

        let ids = board.ids_of(&palette);
        assert_eq!(*ids.last().unwrap(), id);
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_added_ids_never_collide() {
        let (mut board, palette, _, mut ids) = board();
        for _ in 0..50 {
            ids.push(board.add_field().unwrap());
        }
        let mut sorted = board.ids_of(&palette);
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), ids.len());
    }

    #[test]
    fn test_drag_start_closes_edit_session() {
        let (mut board, _, _, ids) = board();
        board.open_editor(ids[0]);
        assert!(board.editing().is_some());

        board.drag_start(ids[1]);
        assert!(board.editing().is_none());
        assert_eq!(board.active_drag(), Some(ids[1]));
    }

    #[test]
    fn test_open_editor_rejected_while_dragging() {
        let (mut board, _, _, ids) = board();
        board.drag_start(ids[0]);

        board.open_editor(ids[1]);
        assert!(board.editing().is_none());
        assert_eq!(board.active_drag(), Some(ids[0]));
    }

    #[test]
    fn test_drag_events_ignored_while_idle() {
        let (mut board, _, canvas, ids) = board();
        let before = board.registry().clone();

        board.drag_over(Some(canvas.clone().into()));
        board.drag_end(Some(ids[0].into()));

        assert_eq!(board.registry(), &before);
        assert_eq!(board.active_drag(), None);
    }

    #[test]
    fn test_drop_outside_keeps_optimistic_move() {
        let (mut board, palette, canvas, ids) = board();

        board.drag_start(ids[1]);
        board.drag_over(Some(canvas.clone().into()));
        board.drag_end(None);

        assert_eq!(board.active_drag(), None);
        assert_eq!(board.ids_of(&palette), vec![ids[0], ids[2]]);
        assert_eq!(board.ids_of(&canvas), vec![ids[1]]);
    }

    #[test]
    fn test_commit_replaces_in_place() {
        let (mut board, palette, _, ids) = board();

        board.open_editor(ids[1]);
        board.edit_text(TextProp::Label, "Renamed");
        board.edit_required(true);
        board.commit_edit();

        assert!(board.editing().is_none());
        assert_eq!(board.ids_of(&palette), ids);
        let field = board.registry().field(ids[1]).unwrap();
        assert_eq!(field.label, "Renamed");
        assert!(field.required);
    }

    #[test]
    fn test_cancel_leaves_registry_untouched() {
        let (mut board, _, _, ids) = board();
        let before = board.registry().clone();

        board.open_editor(ids[0]);
        board.edit_text(TextProp::Label, "Scratch");
        board.edit_kind(FieldKind::Select);
        board.edit_options("a,b,c");
        board.cancel_edit();

        assert_eq!(board.registry(), &before);
        assert!(board.editing().is_none());
    }

    #[test]
    fn test_delete_closes_matching_session() {
        let (mut board, _, _, ids) = board();
        let closed = std::sync::Arc::new(parking_lot::Mutex::new(Vec::new()));

        let recv = closed.clone();
        board
            .signals()
            .editing_changed
            .connect(move |target| recv.lock().push(*target));

        board.open_editor(ids[1]);
        board.delete_field(ids[1]);

        assert!(board.editing().is_none());
        assert!(!board.registry().contains(ids[1]));
        assert_eq!(*closed.lock(), vec![Some(ids[1]), None]);

        // A commit after the delete must not resurrect the field.
        board.commit_edit();
        assert!(!board.registry().contains(ids[1]));
    }

    #[test]
    fn test_commit_after_mid_edit_delete_discards() {
        let (mut board, _, _, ids) = board();

        board.open_editor(ids[0]);
        board.edit_text(TextProp::Label, "Ghost");
        // Delete of a *different* field keeps the session alive.
        board.delete_field(ids[2]);
        assert!(board.editing().is_some());

        board.delete_field(ids[0]);
        board.commit_edit();
        assert!(!board.registry().contains(ids[0]));
    }

    #[test]
    fn test_edit_while_idle_is_ignored() {
        let (mut board, _, _, _) = board();
        let before = board.registry().clone();

        board.edit_text(TextProp::Label, "Nope");
        board.edit_options("a,b");
        board.commit_edit();

        assert_eq!(board.registry(), &before);
    }

    #[test]
    fn test_reopening_editor_replaces_session() {
        let (mut board, _, _, ids) = board();

        board.open_editor(ids[0]);
        board.edit_text(TextProp::Label, "Scratch");
        board.open_editor(ids[1]);

        let session = board.editing().unwrap();
        assert_eq!(session.target(), ids[1]);
        // ids[0]'s discarded buffer never landed.
        assert_eq!(board.registry().field(ids[0]).unwrap().label, "A");
    }

    #[test]
    fn test_signals_fire_after_mutation() {
        let (mut board, _, canvas, ids) = board();
        let changes = std::sync::Arc::new(parking_lot::Mutex::new(0));

        let recv = changes.clone();
        board.signals().fields_changed.connect(move |_| *recv.lock() += 1);

        board.drag_start(ids[0]);
        board.drag_over(Some(canvas.clone().into()));
        board.drag_end(Some(canvas.clone().into()));
        assert_eq!(*changes.lock(), 1); // only the transfer mutated

        board.delete_field(ids[0]);
        assert_eq!(*changes.lock(), 2);
    }

    #[test]
    fn test_preview_toggling() {
        let (mut board, _, _, _) = board();
        let events = std::sync::Arc::new(parking_lot::Mutex::new(Vec::new()));

        let recv = events.clone();
        board
            .signals()
            .preview_changed
            .connect(move |on| recv.lock().push(*on));

        board.enter_preview();
        board.enter_preview(); // no duplicate signal
        assert!(board.is_previewing());
        board.exit_preview();

        assert_eq!(*events.lock(), vec![true, false]);
    }

    #[test]
    fn test_runtime_reads_canvas_once() {
        let (mut board, _, canvas, ids) = board();
        board.drag_start(ids[0]);
        board.drag_over(Some(canvas.clone().into()));
        board.drag_end(None);

        let runtime = board.runtime_for(&canvas);
        assert_eq!(runtime.fields().len(), 1);

        // Later changes don't leak into the captured list.
        board.delete_field(ids[0]);
        assert_eq!(runtime.fields().len(), 1);
    }

    #[test]
    fn test_commit_preserves_kind_specific_edits() {
        let (mut board, _, _, ids) = board();

        board.open_editor(ids[0]);
        board.edit_kind(FieldKind::Number);
        board.edit_numeric(NumericProp::Min, "1");
        board.edit_numeric(NumericProp::Max, "10");
        board.edit_numeric(NumericProp::Step, "0.5");
        board.commit_edit();

        let field = board.registry().field(ids[0]).unwrap();
        assert_eq!(field.kind, FieldKind::Number);
        assert!(matches!(
            field.extra,
            FieldExtra::Number { min, max, step }
                if min == 1.0 && max == 10.0 && step == 0.5
        ));
    }
}
