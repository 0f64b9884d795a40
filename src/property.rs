use std::{
    fmt,
    ops::{Deref, DerefMut},
};

use derive_ex::{derive_ex, Ex};
use serde::{Serialize, Serializer};

use crate::{Invalidations, MissingCustomInvalidating, View};


/// A value that invalidates the view owning it whenever it changes.
///
/// The property does not keep a reference to its owner. The owner is passed in on each write,
/// either to [`Dispatch::invalidate`] after [`set`](Self::set), or directly to
/// [`set_with`](Self::set_with) and [`borrow_mut`](Self::borrow_mut).
///
/// ```rust
/// use invalidating::{DirtyFlags, Invalidating, Invalidation, View};
///
/// struct Swatch {
///     color: Invalidating<u32>,
///     flags: DirtyFlags,
/// }
/// impl Swatch {
///     fn set_color(&mut self, color: u32) {
///         self.color.set(color).invalidate(self);
///     }
/// }
/// impl View for Swatch {
///     fn set_needs_display(&mut self) {
///         self.flags.display = true;
///     }
///     fn set_needs_layout(&mut self) {}
///     fn set_needs_update_constraints(&mut self) {}
///     fn invalidate_intrinsic_content_size(&mut self) {}
/// }
///
/// let mut swatch = Swatch {
///     color: Invalidating::new(0x0000ff, Invalidation::Display),
///     flags: DirtyFlags::default(),
/// };
/// swatch.set_color(0xff0000);
/// assert!(swatch.flags.display);
/// ```
pub struct Invalidating<T, V: ?Sized = dyn View> {
    value: T,
    invalidations: Invalidations<V>,
}

impl<T, V: ?Sized> Invalidating<T, V> {
    /// Creates a property with an initial value and the invalidations to run when it changes.
    ///
    /// # Panics
    ///
    /// Panics if no invalidation is specified.
    pub fn new(value: T, invalidations: impl Into<Invalidations<V>>) -> Self {
        Self {
            value,
            invalidations: invalidations.into(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    pub fn invalidations(&self) -> &Invalidations<V> {
        &self.invalidations
    }

    /// Sets the value and returns the invalidations to run if it changed.
    ///
    /// If `value` equals the current value, nothing is stored and the returned [`Dispatch`] is
    /// empty.
    pub fn set(&mut self, value: T) -> Dispatch<V>
    where
        T: PartialEq,
    {
        if self.value == value {
            return Dispatch::empty();
        }
        self.value = value;
        Dispatch(Some(self.invalidations.clone()))
    }

    /// Sets the value and invalidates `view` if it changed.
    ///
    /// Returns `true` if the value changed.
    pub fn set_with(&mut self, value: T, view: &mut V) -> bool
    where
        T: PartialEq,
        V: View,
    {
        self.set(value).invalidate(view)
    }

    /// Mutably borrows the value.
    ///
    /// When the borrow ends and the value differs from the value at the time of borrowing,
    /// `view` is invalidated.
    pub fn borrow_mut<'a>(&'a mut self, view: &'a mut V) -> InvalidatingRefMut<'a, T, V>
    where
        T: PartialEq + Clone,
        V: View,
    {
        let old = self.value.clone();
        InvalidatingRefMut {
            property: self,
            view,
            old,
            is_dirty: false,
        }
    }
}

impl<T: fmt::Debug, V: ?Sized> fmt::Debug for Invalidating<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invalidating")
            .field("value", &self.value)
            .field("invalidations", &self.invalidations)
            .finish()
    }
}

impl<T: Serialize, V: ?Sized> Serialize for Invalidating<T, V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

/// Invalidations pending after a write.
///
/// Empty if the write did not change the value.
#[derive(Ex)]
#[derive_ex(Clone, bound())]
#[must_use = "the view is only invalidated when `invalidate` is called."]
pub struct Dispatch<V: ?Sized = dyn View>(Option<Invalidations<V>>);

impl<V: ?Sized> Dispatch<V> {
    pub fn empty() -> Self {
        Self(None)
    }

    pub fn is_pending(&self) -> bool {
        self.0.is_some()
    }

    /// Runs the pending invalidations against `view`.
    ///
    /// Returns `true` if there was anything to run. See [`Invalidations::invalidate`] for how a
    /// missing custom receiver is reported.
    pub fn invalidate(self, view: &mut V) -> bool
    where
        V: View,
    {
        match self.0 {
            Some(invalidations) => {
                invalidations.invalidate(view);
                true
            }
            None => false,
        }
    }

    /// Runs the pending invalidations against `view`, returning an error if the view cannot
    /// receive the declared custom types.
    pub fn try_invalidate(self, view: &mut V) -> Result<bool, MissingCustomInvalidating>
    where
        V: View,
    {
        match self.0 {
            Some(invalidations) => {
                invalidations.try_invalidate(view)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl<V: ?Sized> fmt::Debug for Dispatch<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(invalidations) => f.debug_tuple("Pending").field(invalidations).finish(),
            None => f.write_str("Empty"),
        }
    }
}

/// Mutable borrow of an [`Invalidating`] value, returned by
/// [`Invalidating::borrow_mut`].
pub struct InvalidatingRefMut<'a, T, V>
where
    T: PartialEq,
    V: View + ?Sized,
{
    property: &'a mut Invalidating<T, V>,
    view: &'a mut V,
    old: T,
    is_dirty: bool,
}
impl<T: PartialEq, V: View + ?Sized> Deref for InvalidatingRefMut<'_, T, V> {
    type Target = T;
    fn deref(&self) -> &Self::Target {
        &self.property.value
    }
}
impl<T: PartialEq, V: View + ?Sized> DerefMut for InvalidatingRefMut<'_, T, V> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.is_dirty = true;
        &mut self.property.value
    }
}
impl<T: PartialEq, V: View + ?Sized> Drop for InvalidatingRefMut<'_, T, V> {
    fn drop(&mut self) {
        if self.is_dirty && self.old != self.property.value {
            self.property.invalidations.invalidate(self.view);
        }
    }
}
