//! Container registry — ordered containers of fields.
//!
//! The registry owns the mapping from container id to its ordered field
//! list and provides the lookup, move, and transfer primitives the drag
//! engine is built on. It knows nothing about drag semantics or editing;
//! it only maintains the structural invariants:
//!
//! - every field belongs to exactly one container,
//! - field ids are unique across the whole registry,
//! - container order is preserved except where an operation explicitly
//!   reorders it.
//!
//! Operations that reference a missing container, field, or index return an
//! error and leave the registry untouched; callers decide whether to trace
//! or swallow it (the store layer does both).

use formboard_core::{BoardError, ContainerId, FieldId, Result};

use crate::field::Field;

/// Where a transferred field lands in its target container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    /// Append after the last field.
    End,
    /// Insert before the field currently at this index (clamped to the
    /// container length).
    At(usize),
}

/// An ordered sequence of fields with a stable id and display title.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    id: ContainerId,
    title: String,
    fields: Vec<Field>,
}

impl Container {
    /// Creates an empty container.
    pub fn new(id: impl Into<ContainerId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            fields: Vec::new(),
        }
    }

    /// Creates a container pre-populated with fields.
    pub fn with_fields(
        id: impl Into<ContainerId>,
        title: impl Into<String>,
        fields: Vec<Field>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            fields,
        }
    }

    /// The container's id.
    pub fn id(&self) -> &ContainerId {
        &self.id
    }

    /// The container's display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The fields, in order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Number of fields in the container.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the container holds no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Position of a field within this container.
    pub fn index_of(&self, id: FieldId) -> Option<usize> {
        self.fields.iter().position(|f| f.id == id)
    }
}

/// The registry of all containers, in render order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContainerRegistry {
    containers: Vec<Container>,
}

impl ContainerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a container at the end of the render order.
    ///
    /// A container whose id is already registered is ignored; container ids
    /// must be unique.
    pub fn add_container(&mut self, container: Container) {
        if self.container(container.id()).is_some() {
            tracing::debug!(
                target: "formboard::registry",
                container = %container.id(),
                "duplicate container id ignored"
            );
            return;
        }
        self.containers.push(container);
    }

    /// All containers, in render order.
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// Looks up a container by id.
    pub fn container(&self, id: &ContainerId) -> Option<&Container> {
        self.containers.iter().find(|c| c.id() == id)
    }

    fn container_index(&self, id: &ContainerId) -> Option<usize> {
        self.containers.iter().position(|c| c.id() == id)
    }

    /// Returns the id of the container holding a field, scanning containers
    /// in render order.
    pub fn locate(&self, field: FieldId) -> Option<ContainerId> {
        self.containers
            .iter()
            .find(|c| c.index_of(field).is_some())
            .map(|c| c.id().clone())
    }

    /// Ordered field ids of a container; empty for an unknown container.
    ///
    /// This is the per-container draggable list handed to the gesture
    /// collaborator.
    pub fn ids_of(&self, container: &ContainerId) -> Vec<FieldId> {
        self.container(container)
            .map(|c| c.fields().iter().map(|f| f.id).collect())
            .unwrap_or_default()
    }

    /// Looks up a field anywhere in the registry.
    pub fn field(&self, id: FieldId) -> Option<&Field> {
        self.containers
            .iter()
            .find_map(|c| c.fields.iter().find(|f| f.id == id))
    }

    /// Returns the owning container id and index of a field.
    pub fn position(&self, id: FieldId) -> Option<(ContainerId, usize)> {
        self.containers.iter().find_map(|c| {
            c.index_of(id).map(|idx| (c.id().clone(), idx))
        })
    }

    /// Returns `true` if any container holds the field.
    pub fn contains(&self, id: FieldId) -> bool {
        self.field(id).is_some()
    }

    /// Total number of fields across all containers.
    pub fn total_fields(&self) -> usize {
        self.containers.iter().map(Container::len).sum()
    }

    /// Appends a field to a container.
    ///
    /// The field's id must not already be present anywhere in the registry;
    /// ids come from a process-wide counter, so a collision means a caller
    /// re-inserted a clone.
    pub fn push_field(&mut self, container: &ContainerId, field: Field) -> Result<()> {
        debug_assert!(!self.contains(field.id), "field id re-inserted: {}", field.id);
        let idx = self
            .container_index(container)
            .ok_or_else(|| BoardError::UnknownContainer(container.clone()))?;
        self.containers[idx].fields.push(field);
        Ok(())
    }

    /// Removes a field from whichever container holds it.
    pub fn remove_field(&mut self, id: FieldId) -> Result<Field> {
        for container in &mut self.containers {
            if let Some(idx) = container.index_of(id) {
                return Ok(container.fields.remove(idx));
            }
        }
        Err(BoardError::UnknownField(id))
    }

    /// Replaces a field in place, keeping its container and index.
    ///
    /// The replacement is a whole-object swap; the new value's id becomes
    /// the field's id from here on (edit sessions keep it unchanged).
    pub fn replace_field(&mut self, id: FieldId, replacement: Field) -> Result<()> {
        for container in &mut self.containers {
            if let Some(idx) = container.index_of(id) {
                container.fields[idx] = replacement;
                return Ok(());
            }
        }
        Err(BoardError::UnknownField(id))
    }

    /// Moves the field at `from` so it ends up at `to` within one container.
    ///
    /// Classic "move" semantics, not a swap: the element is removed at
    /// `from`, then reinserted at `to` computed against the post-removal
    /// sequence. `to` is clamped to the post-removal length; `from == to`
    /// is the identity.
    pub fn move_within(&mut self, container: &ContainerId, from: usize, to: usize) -> Result<()> {
        let idx = self
            .container_index(container)
            .ok_or_else(|| BoardError::UnknownContainer(container.clone()))?;
        let fields = &mut self.containers[idx].fields;

        if from >= fields.len() {
            return Err(BoardError::IndexOutOfBounds {
                container: container.clone(),
                index: from,
                len: fields.len(),
            });
        }
        if from == to {
            return Ok(());
        }

        let field = fields.remove(from);
        let to = to.min(fields.len());
        fields.insert(to, field);
        Ok(())
    }

    /// Moves a field from one container into another.
    ///
    /// The field is removed from `from` and inserted into `to` at the given
    /// position (index clamped to the target length). Errors leave both
    /// containers untouched.
    pub fn transfer(
        &mut self,
        from: &ContainerId,
        to: &ContainerId,
        field: FieldId,
        position: InsertPosition,
    ) -> Result<()> {
        let from_idx = self
            .container_index(from)
            .ok_or_else(|| BoardError::UnknownContainer(from.clone()))?;
        let to_idx = self
            .container_index(to)
            .ok_or_else(|| BoardError::UnknownContainer(to.clone()))?;
        let field_idx = self.containers[from_idx]
            .index_of(field)
            .ok_or(BoardError::UnknownField(field))?;

        let moved = self.containers[from_idx].fields.remove(field_idx);
        let target = &mut self.containers[to_idx].fields;
        match position {
            InsertPosition::End => target.push(moved),
            InsertPosition::At(index) => target.insert(index.min(target.len()), moved),
        }
        Ok(())
    }
}
