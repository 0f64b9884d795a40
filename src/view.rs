use std::{any::type_name, borrow::Cow};

use crate::InvalidationTypeSet;

/// The invalidation surface of a view.
///
/// Each method marks one piece of cached view state as stale so that the host framework
/// recomputes it before it is next used. [`Invalidating`](crate::Invalidating) calls these
/// methods; it never reads the state back.
pub trait View {
    /// Marks the rendered contents as needing a redraw.
    fn set_needs_display(&mut self);

    /// Marks the layout of the view and its subviews as needing to be recomputed.
    fn set_needs_layout(&mut self);

    /// Marks the constraints of the view as needing to be resolved again.
    fn set_needs_update_constraints(&mut self);

    /// Discards the cached intrinsic content size.
    fn invalidate_intrinsic_content_size(&mut self);

    /// Discards the persisted restoration state.
    ///
    /// Only some platforms persist restoration state, so the default does nothing.
    #[cfg(feature = "restorable-state")]
    fn invalidate_restorable_state(&mut self) {}

    /// Returns the custom invalidation receiver of this view, if it has one.
    ///
    /// Views that declare custom [`InvalidationType`](crate::InvalidationType)s on their
    /// properties must return `Some(self)` here.
    fn as_custom_invalidating(&mut self) -> Option<&mut dyn CustomInvalidating> {
        None
    }

    /// A human readable description used in diagnostics.
    fn view_description(&self) -> Cow<'static, str> {
        Cow::Borrowed(type_name::<Self>())
    }
}

/// Receives the custom invalidation types of a changed property.
pub trait CustomInvalidating {
    /// Called once per changing write with the custom types declared by the property.
    ///
    /// `types` never contains built-in types.
    fn invalidate_custom(&mut self, types: &InvalidationTypeSet);
}
