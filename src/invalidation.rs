use std::{any::type_name, borrow::Cow, fmt, rc::Rc, slice, thread};

use derive_ex::{derive_ex, Ex};
use parse_display::Display;

use crate::{InvalidationType, InvalidationTypeSet, View};


/// A user-defined invalidation.
///
/// `V` is the view type the action runs against. With the default `dyn View` the action can be
/// attached to properties of any view.
pub trait InvalidateAction<V: ?Sized = dyn View> {
    fn invalidate(&self, view: &mut V);

    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed(type_name::<Self>())
    }
}

struct FnAction<F>(F);

impl<V: ?Sized, F: Fn(&mut V)> InvalidateAction<V> for FnAction<F> {
    fn invalidate(&self, view: &mut V) {
        (self.0)(view)
    }
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed(type_name::<F>())
    }
}

/// One invalidation declared on a property.
#[derive(Ex)]
#[derive_ex(Clone, bound())]
pub enum Invalidation<V: ?Sized = dyn View> {
    /// Calls [`View::set_needs_display`].
    Display,
    /// Calls [`View::set_needs_layout`].
    Layout,
    /// Calls [`View::set_needs_update_constraints`].
    Constraints,
    /// Calls [`View::invalidate_intrinsic_content_size`].
    IntrinsicContentSize,
    /// Calls [`View::invalidate_restorable_state`].
    #[cfg(feature = "restorable-state")]
    RestorableState,
    /// Forwarded to [`CustomInvalidating::invalidate_custom`](crate::CustomInvalidating::invalidate_custom).
    Custom(InvalidationType),
    /// Runs a user-defined action.
    Action(Rc<dyn InvalidateAction<V>>),
}

impl<V: ?Sized> Invalidation<V> {
    pub fn action(action: impl InvalidateAction<V> + 'static) -> Self {
        Self::Action(Rc::new(action))
    }

    pub fn from_fn(f: impl Fn(&mut V) + 'static) -> Self {
        Self::action(FnAction(f))
    }

    /// Returns the type of this invalidation, or `None` for an action.
    pub fn invalidation_type(&self) -> Option<InvalidationType> {
        match self {
            Self::Display => Some(InvalidationType::DISPLAY),
            Self::Layout => Some(InvalidationType::LAYOUT),
            Self::Constraints => Some(InvalidationType::CONSTRAINTS),
            Self::IntrinsicContentSize => Some(InvalidationType::INTRINSIC_CONTENT_SIZE),
            #[cfg(feature = "restorable-state")]
            Self::RestorableState => Some(InvalidationType::RESTORABLE_STATE),
            Self::Custom(ty) => Some(ty.clone()),
            Self::Action(_) => None,
        }
    }

    pub fn is_built_in(&self) -> bool {
        match self {
            Self::Custom(ty) => ty.is_built_in(),
            Self::Action(_) => false,
            _ => true,
        }
    }

    /// Runs this invalidation against `view`.
    ///
    /// [`Custom`](Self::Custom) does nothing here unless its type is built-in; custom types are
    /// delivered together by [`Invalidations::invalidate`].
    pub fn invalidate(&self, view: &mut V)
    where
        V: View,
    {
        match self {
            Self::Display => view.set_needs_display(),
            Self::Layout => view.set_needs_layout(),
            Self::Constraints => view.set_needs_update_constraints(),
            Self::IntrinsicContentSize => view.invalidate_intrinsic_content_size(),
            #[cfg(feature = "restorable-state")]
            Self::RestorableState => view.invalidate_restorable_state(),
            Self::Custom(ty) if ty.is_built_in() => Self::from(ty.clone()).invalidate(view),
            Self::Custom(_) => {}
            Self::Action(action) => action.invalidate(view),
        }
    }
}

impl<V: ?Sized> From<InvalidationType> for Invalidation<V> {
    fn from(ty: InvalidationType) -> Self {
        match ty {
            ty if ty == InvalidationType::DISPLAY => Self::Display,
            ty if ty == InvalidationType::LAYOUT => Self::Layout,
            ty if ty == InvalidationType::CONSTRAINTS => Self::Constraints,
            ty if ty == InvalidationType::INTRINSIC_CONTENT_SIZE => Self::IntrinsicContentSize,
            #[cfg(feature = "restorable-state")]
            ty if ty == InvalidationType::RESTORABLE_STATE => Self::RestorableState,
            ty => Self::Custom(ty),
        }
    }
}

impl<V: ?Sized> PartialEq for Invalidation<V> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Action(a), Self::Action(b)) => Rc::ptr_eq(a, b),
            (Self::Action(_), _) | (_, Self::Action(_)) => false,
            _ => self.invalidation_type() == other.invalidation_type(),
        }
    }
}

impl<V: ?Sized> fmt::Debug for Invalidation<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Display => f.write_str("Display"),
            Self::Layout => f.write_str("Layout"),
            Self::Constraints => f.write_str("Constraints"),
            Self::IntrinsicContentSize => f.write_str("IntrinsicContentSize"),
            #[cfg(feature = "restorable-state")]
            Self::RestorableState => f.write_str("RestorableState"),
            Self::Custom(ty) => f.debug_tuple("Custom").field(&ty.as_str()).finish(),
            Self::Action(action) => f.debug_tuple("Action").field(&action.name()).finish(),
        }
    }
}

/// The invalidations of a property.
///
/// The list is immutable and never empty. Cloning shares it.
#[derive(Ex)]
#[derive_ex(Clone, bound())]
pub struct Invalidations<V: ?Sized = dyn View>(Rc<InvalidationsData<V>>);

struct InvalidationsData<V: ?Sized> {
    items: Vec<Invalidation<V>>,
    custom_types: InvalidationTypeSet,
}

impl<V: ?Sized> Invalidations<V> {
    /// Creates a list from invalidations in the order they should run.
    ///
    /// A [`Custom`](Invalidation::Custom) entry whose type is built-in becomes that built-in
    /// entry.
    ///
    /// # Panics
    ///
    /// Panics if `items` is empty.
    pub fn new(items: impl IntoIterator<Item = Invalidation<V>>) -> Self {
        let items: Vec<_> = items
            .into_iter()
            .map(|item| match item {
                Invalidation::Custom(ty) => Invalidation::from(ty),
                item => item,
            })
            .collect();
        assert!(
            !items.is_empty(),
            "at least one invalidation must be specified."
        );
        let custom_types = items
            .iter()
            .filter_map(Invalidation::invalidation_type)
            .collect::<InvalidationTypeSet>()
            .custom();
        Self(Rc::new(InvalidationsData {
            items,
            custom_types,
        }))
    }

    pub fn len(&self) -> usize {
        self.0.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.items.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Invalidation<V>> {
        self.0.items.iter()
    }

    /// The custom types that are forwarded to [`CustomInvalidating`](crate::CustomInvalidating).
    pub fn custom_types(&self) -> &InvalidationTypeSet {
        &self.0.custom_types
    }

    /// Runs every invalidation against `view`, then delivers the custom types.
    ///
    /// If custom types are declared but `view` has no
    /// [`CustomInvalidating`](crate::CustomInvalidating) receiver, the other invalidations
    /// still run and an error is returned.
    pub fn try_invalidate(&self, view: &mut V) -> Result<(), MissingCustomInvalidating>
    where
        V: View,
    {
        for item in self.iter() {
            item.invalidate(view);
        }
        let types = self.custom_types();
        if types.is_empty() {
            return Ok(());
        }
        if let Some(receiver) = view.as_custom_invalidating() {
            receiver.invalidate_custom(types);
            return Ok(());
        }
        Err(MissingCustomInvalidating {
            view: view.view_description().into_owned(),
            types: types.clone(),
        })
    }

    /// Same as [`try_invalidate`](Self::try_invalidate), but reports a missing receiver
    /// instead of returning it.
    ///
    /// The error is logged. In builds with debug assertions it also panics, unless the thread
    /// is already panicking.
    pub fn invalidate(&self, view: &mut V)
    where
        V: View,
    {
        if let Err(e) = self.try_invalidate(view) {
            tracing::error!(view = %e.view, types = %e.types, "{e}");
            if cfg!(debug_assertions) && !thread::panicking() {
                panic!("{e}");
            }
        }
    }
}

impl<V: ?Sized> fmt::Debug for Invalidations<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, V: ?Sized> IntoIterator for &'a Invalidations<V> {
    type Item = &'a Invalidation<V>;
    type IntoIter = slice::Iter<'a, Invalidation<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: ?Sized> FromIterator<Invalidation<V>> for Invalidations<V> {
    fn from_iter<I: IntoIterator<Item = Invalidation<V>>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<V: ?Sized> From<Invalidation<V>> for Invalidations<V> {
    fn from(item: Invalidation<V>) -> Self {
        Self::new([item])
    }
}

impl<V: ?Sized> From<InvalidationType> for Invalidations<V> {
    fn from(ty: InvalidationType) -> Self {
        Self::new([ty.into()])
    }
}

impl<V: ?Sized, const N: usize> From<[Invalidation<V>; N]> for Invalidations<V> {
    fn from(items: [Invalidation<V>; N]) -> Self {
        Self::new(items)
    }
}

impl<V: ?Sized, const N: usize> From<[InvalidationType; N]> for Invalidations<V> {
    fn from(types: [InvalidationType; N]) -> Self {
        Self::new(types.into_iter().map(Invalidation::from))
    }
}

impl<V: ?Sized> From<Vec<Invalidation<V>>> for Invalidations<V> {
    fn from(items: Vec<Invalidation<V>>) -> Self {
        Self::new(items)
    }
}

/// A property declared custom invalidation types, but its view does not implement
/// [`CustomInvalidating`](crate::CustomInvalidating).
#[derive(Debug, Clone, Display)]
#[display(
    "`{view}` declares custom invalidation types {types} but does not implement `CustomInvalidating`."
)]
pub struct MissingCustomInvalidating {
    pub view: String,
    pub types: InvalidationTypeSet,
}

impl std::error::Error for MissingCustomInvalidating {}
