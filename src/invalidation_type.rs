use std::{borrow::Cow, fmt};

use indexmap::IndexSet;
use parse_display::Display;
use serde::{Deserialize, Serialize};


/// Identifies a kind of invalidation by name.
///
/// Two types are equal if their identifiers are equal. The built-in types are associated
/// constants; applications add their own by declaring constants with [`new`](Self::new).
///
/// ```rust
/// use invalidating::InvalidationType;
///
/// const SHADOW: InvalidationType = InvalidationType::new("shadow");
///
/// assert!(!SHADOW.is_built_in());
/// assert!(InvalidationType::DISPLAY.is_built_in());
/// ```
///
/// A custom identifier equal to a built-in one is treated as the built-in type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize)]
#[display("{0}")]
#[serde(transparent)]
pub struct InvalidationType(Cow<'static, str>);

impl InvalidationType {
    pub const DISPLAY: Self = Self::new("display");
    pub const LAYOUT: Self = Self::new("layout");
    pub const CONSTRAINTS: Self = Self::new("constraints");
    pub const INTRINSIC_CONTENT_SIZE: Self = Self::new("intrinsic_content_size");
    #[cfg(feature = "restorable-state")]
    pub const RESTORABLE_STATE: Self = Self::new("restorable_state");

    /// All built-in types.
    pub const BUILT_IN: &'static [Self] = &[
        Self::DISPLAY,
        Self::LAYOUT,
        Self::CONSTRAINTS,
        Self::INTRINSIC_CONTENT_SIZE,
        #[cfg(feature = "restorable-state")]
        Self::RESTORABLE_STATE,
    ];

    pub const fn new(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    /// Creates a type from an identifier only known at runtime.
    pub fn from_string(id: String) -> Self {
        Self(Cow::Owned(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_built_in(&self) -> bool {
        Self::BUILT_IN.contains(self)
    }
}

/// A set of [`InvalidationType`]s.
///
/// Iteration follows insertion order; equality ignores it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvalidationTypeSet(IndexSet<InvalidationType>);

impl InvalidationTypeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a type. Returns `false` if it was already present.
    pub fn insert(&mut self, ty: InvalidationType) -> bool {
        self.0.insert(ty)
    }

    pub fn contains(&self, ty: &InvalidationType) -> bool {
        self.0.contains(ty)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InvalidationType> + '_ {
        self.0.iter()
    }

    /// Returns the types of this set that are not built-in.
    pub fn custom(&self) -> Self {
        self.iter().filter(|ty| !ty.is_built_in()).cloned().collect()
    }
}

impl fmt::Display for InvalidationTypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, ty) in self.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{ty}")?;
        }
        write!(f, "}}")
    }
}

impl FromIterator<InvalidationType> for InvalidationTypeSet {
    fn from_iter<I: IntoIterator<Item = InvalidationType>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<InvalidationType> for InvalidationTypeSet {
    fn extend<I: IntoIterator<Item = InvalidationType>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl<const N: usize> From<[InvalidationType; N]> for InvalidationTypeSet {
    fn from(types: [InvalidationType; N]) -> Self {
        types.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a InvalidationTypeSet {
    type Item = &'a InvalidationType;
    type IntoIter = indexmap::set::Iter<'a, InvalidationType>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for InvalidationTypeSet {
    type Item = InvalidationType;
    type IntoIter = indexmap::set::IntoIter<InvalidationType>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
