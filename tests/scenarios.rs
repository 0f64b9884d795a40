use assert_call::{call, CallRecorder};
use invalidating::{
    CustomInvalidating, DirtyFlags, InvalidateAction, Invalidating, Invalidation,
    InvalidationType, InvalidationTypeSet, View,
};

const SHADOW: InvalidationType = InvalidationType::new("shadow");
const BORDER: InvalidationType = InvalidationType::new("border");

#[derive(Debug, Clone, Copy, PartialEq)]
enum Color {
    Blue,
    Red,
}

#[derive(Default)]
struct Canvas {
    flags: DirtyFlags,
    custom: Vec<InvalidationTypeSet>,
    receives_custom: bool,
}

impl View for Canvas {
    fn set_needs_display(&mut self) {
        call!("display");
        self.flags.set_needs_display();
    }
    fn set_needs_layout(&mut self) {
        call!("layout");
        self.flags.set_needs_layout();
    }
    fn set_needs_update_constraints(&mut self) {
        call!("constraints");
        self.flags.set_needs_update_constraints();
    }
    fn invalidate_intrinsic_content_size(&mut self) {
        call!("intrinsic_content_size");
        self.flags.invalidate_intrinsic_content_size();
    }
    fn as_custom_invalidating(&mut self) -> Option<&mut dyn CustomInvalidating> {
        if self.receives_custom {
            Some(self)
        } else {
            None
        }
    }
}

impl CustomInvalidating for Canvas {
    fn invalidate_custom(&mut self, types: &InvalidationTypeSet) {
        call!("custom");
        self.custom.push(types.clone());
    }
}

#[test]
fn equal_write_is_a_no_op() {
    let mut cr = CallRecorder::new();
    let mut canvas = Canvas::default();
    let mut color = Invalidating::<_, Canvas>::new(Color::Blue, Invalidation::Display);

    assert!(!color.set_with(Color::Blue, &mut canvas));
    cr.verify(());
    assert!(canvas.flags.is_clean());

    assert!(color.set_with(Color::Red, &mut canvas));
    cr.verify("display");
    assert!(canvas.flags.display);
}

#[test]
fn all_declared_built_ins_run_once_in_order() {
    let mut cr = CallRecorder::new();
    let mut canvas = Canvas::default();
    let mut size = Invalidating::<_, Canvas>::new(
        10,
        [
            Invalidation::Display,
            Invalidation::Layout,
            Invalidation::IntrinsicContentSize,
        ],
    );
    size.set_with(20, &mut canvas);
    cr.verify(["display", "layout", "intrinsic_content_size"]);
    assert_eq!(
        canvas.flags,
        DirtyFlags {
            display: true,
            layout: true,
            intrinsic_content_size: true,
            ..DirtyFlags::default()
        }
    );
}

#[test]
fn custom_action_and_display() {
    struct Recompute;
    impl InvalidateAction<Canvas> for Recompute {
        fn invalidate(&self, canvas: &mut Canvas) {
            call!("recompute");
            canvas.flags.set_needs_update_constraints();
        }
    }

    let mut cr = CallRecorder::new();
    let mut canvas = Canvas::default();
    let mut text = Invalidating::new(
        String::new(),
        [Invalidation::action(Recompute), Invalidation::Display],
    );
    text.set_with("hello".to_string(), &mut canvas);
    cr.verify(["recompute", "display"]);
    assert!(canvas.flags.constraints && canvas.flags.display);
}

#[test]
fn custom_types_are_delivered_without_built_ins() {
    let mut cr = CallRecorder::new();
    let mut canvas = Canvas {
        receives_custom: true,
        ..Canvas::default()
    };
    let mut style = Invalidating::<_, Canvas>::new(0, [SHADOW, BORDER, InvalidationType::DISPLAY]);

    style.set_with(1, &mut canvas);
    cr.verify(["display", "custom"]);
    assert_eq!(canvas.custom, [InvalidationTypeSet::from([SHADOW, BORDER])]);

    style.set_with(1, &mut canvas);
    cr.verify(());
    assert_eq!(canvas.custom.len(), 1);
}

#[test]
fn built_ins_run_without_custom_receiver() {
    let mut cr = CallRecorder::new();
    let mut canvas = Canvas::default();
    let mut style = Invalidating::<_, Canvas>::new(0, [InvalidationType::DISPLAY, SHADOW]);

    let e = style.set(1).try_invalidate(&mut canvas).unwrap_err();
    cr.verify("display");
    assert!(canvas.flags.display);
    assert!(canvas.custom.is_empty());
    assert_eq!(e.types, InvalidationTypeSet::from([SHADOW]));
    assert!(e.to_string().contains("Canvas"));
}

#[cfg(not(debug_assertions))]
#[test]
fn missing_custom_receiver_does_not_panic_in_release() {
    let mut cr = CallRecorder::new();
    let mut canvas = Canvas::default();
    let mut style = Invalidating::<_, Canvas>::new(0, [InvalidationType::DISPLAY, SHADOW]);

    assert!(style.set_with(1, &mut canvas));
    cr.verify("display");
}

#[test]
fn same_invalidations_shared_by_properties() {
    let mut cr = CallRecorder::new();
    let mut canvas = Canvas::default();
    let geometry = invalidating::Invalidations::<Canvas>::from([
        Invalidation::Layout,
        Invalidation::Constraints,
    ]);
    let mut width = Invalidating::new(1, geometry.clone());
    let mut height = Invalidating::new(1, geometry);

    width.set_with(2, &mut canvas);
    height.set_with(3, &mut canvas);
    cr.verify(["layout", "constraints", "layout", "constraints"]);
}
