//! Drag/reorder algorithms.
//!
//! The gesture collaborator (pointer or keyboard) reports what sits under
//! the drag as a [`DropTarget`] — either a field or the body of a
//! container. This module turns those reports into registry mutations:
//!
//! - [`hover`] applies the optimistic cross-container transfer while the
//!   pointer moves. The move happens eagerly so the user sees where the
//!   field will land; a drag later cancelled by dropping outside does not
//!   roll it back.
//! - [`drop_on`] resolves a same-container drop into a reorder. Hovering
//!   within one container is deliberately *not* resolved continuously —
//!   only at drag end — to avoid thrashing the list under the pointer.
//!
//! Both are pure update functions over the live registry: every call
//! re-derives its indices from the current state, never from a snapshot
//! taken at drag start, so rapid-fire hover events always converge.
//! The drag state machine itself (who is being dragged, mutual exclusion
//! with editing) lives on [`FormBoard`](crate::board::FormBoard).

use formboard_core::{ContainerId, FieldId, Result};

use crate::registry::{ContainerRegistry, InsertPosition};

/// What the gesture collaborator reports under the pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// A draggable field.
    Field(FieldId),
    /// The body of a container (including its empty area).
    Container(ContainerId),
}

impl DropTarget {
    /// Resolves the target to the container it belongs to.
    ///
    /// A container target resolves to itself when the registry knows it; a
    /// field target resolves to its owning container. `None` if the target
    /// does not resolve.
    pub fn resolve(&self, registry: &ContainerRegistry) -> Option<ContainerId> {
        match self {
            Self::Container(id) => registry.container(id).map(|c| c.id().clone()),
            Self::Field(id) => registry.locate(*id),
        }
    }
}

impl From<FieldId> for DropTarget {
    fn from(id: FieldId) -> Self {
        Self::Field(id)
    }
}

impl From<ContainerId> for DropTarget {
    fn from(id: ContainerId) -> Self {
        Self::Container(id)
    }
}

/// Applies a hover event for the active field.
///
/// When the hover crosses into another container, the field is transferred
/// immediately: appended when hovering the container body, inserted before
/// the hovered field otherwise (the former occupant and everything after it
/// shift right). Hovering inside the field's own container changes nothing.
///
/// Returns `true` if the registry changed.
pub(crate) fn hover(
    registry: &mut ContainerRegistry,
    active: FieldId,
    over: &DropTarget,
) -> Result<bool> {
    let Some(active_container) = registry.locate(active) else {
        return Ok(false);
    };
    let Some(over_container) = over.resolve(registry) else {
        return Ok(false);
    };
    if active_container == over_container {
        return Ok(false);
    }

    let position = match over {
        DropTarget::Container(_) => InsertPosition::End,
        DropTarget::Field(over_field) => registry
            .container(&over_container)
            .and_then(|c| c.index_of(*over_field))
            .map_or(InsertPosition::End, InsertPosition::At),
    };

    tracing::trace!(
        target: "formboard::drag",
        field = %active,
        from = %active_container,
        to = %over_container,
        ?position,
        "optimistic cross-container transfer"
    );
    registry.transfer(&active_container, &over_container, active, position)?;
    Ok(true)
}

/// Applies a drop for the active field.
///
/// A cross-container drop needs no further work — [`hover`] already moved
/// the field. A drop on another field in the same container reorders the
/// container with remove-then-insert move semantics; a drop on the
/// container body of the field's own container leaves the order as-is.
///
/// Returns `true` if the registry changed.
pub(crate) fn drop_on(
    registry: &mut ContainerRegistry,
    active: FieldId,
    over: &DropTarget,
) -> Result<bool> {
    let Some((active_container, from)) = registry.position(active) else {
        return Ok(false);
    };
    let Some(over_container) = over.resolve(registry) else {
        return Ok(false);
    };
    if active_container != over_container {
        return Ok(false);
    }

    let DropTarget::Field(over_field) = over else {
        return Ok(false);
    };
    let Some(to) = registry
        .container(&active_container)
        .and_then(|c| c.index_of(*over_field))
    else {
        return Ok(false);
    };
    if from == to {
        return Ok(false);
    }

    tracing::trace!(
        target: "formboard::drag",
        field = %active,
        container = %active_container,
        from,
        to,
        "same-container reorder"
    );
    registry.move_within(&active_container, from, to)?;
    Ok(true)
}
