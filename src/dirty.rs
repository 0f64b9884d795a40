use std::{
    mem::take,
    ops::{BitOr, BitOrAssign},
};

use serde::{Deserialize, Serialize};

use crate::View;


/// Dirty state of a view, one flag per kind of invalidation.
///
/// Hosts that keep their own dirty state in plain fields can embed this and forward the
/// [`View`] methods to it. The host clears it with [`take`](Self::take) once it has recomputed
/// the invalidated state.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct DirtyFlags {
    pub display: bool,
    pub layout: bool,
    pub constraints: bool,
    pub intrinsic_content_size: bool,
    #[cfg(feature = "restorable-state")]
    pub restorable_state: bool,
}

impl DirtyFlags {
    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }

    /// Returns the current flags and clears them.
    pub fn take(&mut self) -> Self {
        take(self)
    }
}

impl View for DirtyFlags {
    fn set_needs_display(&mut self) {
        self.display = true;
    }
    fn set_needs_layout(&mut self) {
        self.layout = true;
    }
    fn set_needs_update_constraints(&mut self) {
        self.constraints = true;
    }
    fn invalidate_intrinsic_content_size(&mut self) {
        self.intrinsic_content_size = true;
    }
    #[cfg(feature = "restorable-state")]
    fn invalidate_restorable_state(&mut self) {
        self.restorable_state = true;
    }
}

impl BitOr for DirtyFlags {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self {
            display: self.display | rhs.display,
            layout: self.layout | rhs.layout,
            constraints: self.constraints | rhs.constraints,
            intrinsic_content_size: self.intrinsic_content_size | rhs.intrinsic_content_size,
            #[cfg(feature = "restorable-state")]
            restorable_state: self.restorable_state | rhs.restorable_state,
        }
    }
}
impl BitOrAssign for DirtyFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}
