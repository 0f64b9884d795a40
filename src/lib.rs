//! Property wrappers that invalidate the view that owns them when their value changes.
//!
//! A field declared as [`Invalidating`] compares every written value against the stored one.
//! When the value actually changes, the declared [`Invalidation`]s run against the owning
//! [`View`]: built-in entries mark the view dirty for redraw, layout, constraints or intrinsic
//! size, [`InvalidateAction`]s run user code, and custom [`InvalidationType`]s are forwarded to
//! the view's [`CustomInvalidating`] implementation.
//!
//! ```rust
//! use invalidating::{DirtyFlags, Invalidating, Invalidation};
//!
//! let mut flags = DirtyFlags::default();
//! let mut color = Invalidating::new("blue", Invalidation::Display);
//!
//! assert!(!color.set_with("blue", &mut flags));
//! assert!(flags.is_clean());
//!
//! assert!(color.set_with("red", &mut flags));
//! assert!(flags.display);
//! ```

extern crate self as invalidating;

mod dirty;
mod invalidation;
mod invalidation_type;
mod property;
mod view;

#[cfg(test)]
mod test_helpers;

pub use dirty::*;
pub use invalidation::*;
pub use invalidation_type::*;
pub use property::*;
pub use view::*;

/// Generates a `set_<field>` method for every [`Invalidating`] field of a struct.
///
/// The generated method stores the value and, when it changed, runs the field's invalidations
/// against `self`. It returns `true` if the value changed.
///
/// - `#[invalidating(skip)]` leaves a field out.
/// - `#[invalidating(setter = "name")]` renames the generated method.
///
/// ```rust
/// use invalidating::{DirtyFlags, Invalidating, Invalidation, InvalidatingSetters, View};
///
/// #[derive(InvalidatingSetters)]
/// struct Label {
///     text: Invalidating<String>,
///     flags: DirtyFlags,
/// }
///
/// impl View for Label {
///     fn set_needs_display(&mut self) {
///         self.flags.set_needs_display();
///     }
///     fn set_needs_layout(&mut self) {
///         self.flags.set_needs_layout();
///     }
///     fn set_needs_update_constraints(&mut self) {
///         self.flags.set_needs_update_constraints();
///     }
///     fn invalidate_intrinsic_content_size(&mut self) {
///         self.flags.invalidate_intrinsic_content_size();
///     }
/// }
///
/// let mut label = Label {
///     text: Invalidating::new(String::new(), [Invalidation::Display, Invalidation::IntrinsicContentSize]),
///     flags: DirtyFlags::default(),
/// };
/// assert!(label.set_text("hello".into()));
/// assert!(label.flags.display && label.flags.intrinsic_content_size);
/// ```
pub use invalidating_macros::InvalidatingSetters;
