use invalidating::{DirtyFlags, InvalidatingSetters, View};

#[derive(InvalidatingSetters)]
pub struct Slider {
    pub value: invalidating::Invalidating<f64>,
    pub(crate) label: ::invalidating::Invalidating<String, Slider>,
    pub flags: DirtyFlags,
}

impl View for Slider {
    fn set_needs_display(&mut self) {
        self.flags.set_needs_display();
    }
    fn set_needs_layout(&mut self) {
        self.flags.set_needs_layout();
    }
    fn set_needs_update_constraints(&mut self) {
        self.flags.set_needs_update_constraints();
    }
    fn invalidate_intrinsic_content_size(&mut self) {
        self.flags.invalidate_intrinsic_content_size();
    }
}

fn main() {
    let mut slider = Slider {
        value: invalidating::Invalidating::new(0.5, invalidating::Invalidation::Display),
        label: invalidating::Invalidating::new(String::new(), invalidating::Invalidation::Layout),
        flags: DirtyFlags::default(),
    };
    assert!(slider.set_value(0.75));
    assert!(slider.set_label("volume".to_string()));
    assert!(slider.flags.display && slider.flags.layout);
}
