//! A color swatch driven by simulated slider events.
//!
//! Run with `cargo run --example color_swatch`. Every step is printed at `info` through the
//! `tracing-subscriber` fmt output.

use invalidating::{
    CustomInvalidating, DirtyFlags, Invalidating, InvalidatingSetters, Invalidation,
    InvalidationType, InvalidationTypeSet, View,
};
use tracing::info;

const SHADOW: InvalidationType = InvalidationType::new("shadow");

#[derive(Debug, Clone, Copy, PartialEq)]
struct Rgb(u8, u8, u8);

#[derive(InvalidatingSetters)]
struct Swatch {
    color: Invalidating<Rgb>,
    corner_radius: Invalidating<f32>,
    shadow_opacity: Invalidating<f32>,
    flags: DirtyFlags,
    shadow_dirty: bool,
}

impl Swatch {
    fn new() -> Self {
        Self {
            color: Invalidating::new(Rgb(0, 0, 255), Invalidation::Display),
            corner_radius: Invalidating::new(
                0.0,
                [
                    Invalidation::Display,
                    Invalidation::Layout,
                    Invalidation::IntrinsicContentSize,
                ],
            ),
            shadow_opacity: Invalidating::new(0.0, [InvalidationType::DISPLAY, SHADOW]),
            flags: DirtyFlags::default(),
            shadow_dirty: false,
        }
    }

    /// Stands in for the host's render pass: reports and clears the dirty state.
    fn render(&mut self) {
        let flags = self.flags.take();
        let shadow = std::mem::take(&mut self.shadow_dirty);
        if flags.is_clean() && !shadow {
            info!("nothing to redraw");
            return;
        }
        info!(
            display = flags.display,
            layout = flags.layout,
            intrinsic_content_size = flags.intrinsic_content_size,
            shadow,
            color = ?self.color.get(),
            corner_radius = self.corner_radius.get(),
            shadow_opacity = self.shadow_opacity.get(),
            "render"
        );
    }
}

impl View for Swatch {
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
    fn as_custom_invalidating(&mut self) -> Option<&mut dyn CustomInvalidating> {
        Some(self)
    }
}

impl CustomInvalidating for Swatch {
    fn invalidate_custom(&mut self, types: &InvalidationTypeSet) {
        if types.contains(&SHADOW) {
            self.shadow_dirty = true;
        }
    }
}

enum Slider {
    Red(u8),
    Radius(f32),
    Shadow(f32),
}

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let mut swatch = Swatch::new();
    let events = [
        Slider::Red(0),
        Slider::Red(128),
        Slider::Radius(8.0),
        Slider::Radius(8.0),
        Slider::Shadow(0.5),
        Slider::Red(255),
    ];
    for event in events {
        let changed = match event {
            Slider::Red(r) => {
                let Rgb(_, g, b) = *swatch.color.get();
                info!(r, "red slider moved");
                swatch.set_color(Rgb(r, g, b))
            }
            Slider::Radius(radius) => {
                info!(radius, "radius slider moved");
                swatch.set_corner_radius(radius)
            }
            Slider::Shadow(opacity) => {
                info!(opacity, "shadow slider moved");
                swatch.set_shadow_opacity(opacity)
            }
        };
        info!(changed, "slider applied");
        swatch.render();
    }
}
