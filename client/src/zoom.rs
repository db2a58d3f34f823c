/// Zoom level of the county map. Changes in fixed geometric steps and never
/// drops below the original size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomScale {
    scale: f64,
}

pub const ZOOM_FACTOR: f64 = 1.5;
const MAX_SCALE: f64 = 8.0;
/// Zooming out to this scale or below snaps back to the original size.
const SNAP_TO_ORIGINAL: f64 = 1.05;

/// Unscaled page dimensions the map was authored for.
const BASE_CONTENT_WIDTH: f64 = 960.0;
const BASE_MAP_WIDTH: f64 = 555.0;
const BASE_MAP_HEIGHT: f64 = 351.0;

impl Default for ZoomScale {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

/// Element sizes for a given zoom level.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledLayout {
    pub content_width: f64,
    pub map_width: f64,
    pub map_height: f64,
    /// Value of the scaling group's `transform` attribute.
    pub transform: String,
}

impl ZoomScale {
    pub fn value(self) -> f64 {
        self.scale
    }

    pub fn is_original(self) -> bool {
        self.scale <= 1.0
    }

    /// Returns whether the scale changed.
    pub fn zoom_in(&mut self) -> bool {
        let next = (self.scale * ZOOM_FACTOR).min(MAX_SCALE);
        self.set(next)
    }

    /// Returns whether the scale changed.
    pub fn zoom_out(&mut self) -> bool {
        if self.is_original() {
            return false;
        }
        let next = self.scale / ZOOM_FACTOR;
        self.set(if next <= SNAP_TO_ORIGINAL { 1.0 } else { next })
    }

    /// Returns whether the scale changed.
    pub fn reset(&mut self) -> bool {
        self.set(1.0)
    }

    fn set(&mut self, next: f64) -> bool {
        if next == self.scale {
            return false;
        }
        self.scale = next;
        true
    }

    pub fn layout(self) -> ScaledLayout {
        ScaledLayout {
            content_width: BASE_CONTENT_WIDTH * self.scale,
            map_width: BASE_MAP_WIDTH * self.scale,
            map_height: BASE_MAP_HEIGHT * self.scale,
            transform: format!("scale({})", self.value()),
        }
    }
}
