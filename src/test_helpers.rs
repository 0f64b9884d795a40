use assert_call::call;

use crate::{CustomInvalidating, InvalidationTypeSet, View};

/// Records every invalidation with [`call!`].
#[derive(Default)]
pub struct RecordingView {
    pub receives_custom: bool,
}

impl RecordingView {
    pub fn with_receiver() -> Self {
        Self {
            receives_custom: true,
        }
    }
}

impl View for RecordingView {
    fn set_needs_display(&mut self) {
        call!("display");
    }
    fn set_needs_layout(&mut self) {
        call!("layout");
    }
    fn set_needs_update_constraints(&mut self) {
        call!("constraints");
    }
    fn invalidate_intrinsic_content_size(&mut self) {
        call!("intrinsic_content_size");
    }
    #[cfg(feature = "restorable-state")]
    fn invalidate_restorable_state(&mut self) {
        call!("restorable_state");
    }
    fn as_custom_invalidating(&mut self) -> Option<&mut dyn CustomInvalidating> {
        if self.receives_custom {
            Some(self)
        } else {
            None
        }
    }
}

impl CustomInvalidating for RecordingView {
    fn invalidate_custom(&mut self, types: &InvalidationTypeSet) {
        call!("custom {}", types);
    }
}
