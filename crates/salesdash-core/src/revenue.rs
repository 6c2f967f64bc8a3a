//! Revenue-by-segment ring: wedge geometry, hit testing and hover state.
//!
//! Angles are in degrees, counter-clockwise from 3 o'clock, matching a
//! canvas whose y axis points up.

use crate::constants::{
    RING_ACTIVE_SCALE, RING_INNER_RADIUS, RING_OUTER_RADIUS, RING_PADDING_DEGREES,
    RING_START_DEGREES,
};

/// One slice of the revenue ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevenueSegment {
    pub name: &'static str,
    /// Share of revenue in percent. Shares are not required to sum to 100.
    pub value: u32,
    pub growth: &'static str,
    pub amount: &'static str,
}

/// Segment colours as `0xRRGGBB`, indexed by segment position (cycled).
pub const SEGMENT_COLORS: [u32; 3] = [0x004F_46E5, 0x0093_33EA, 0x00EC_4899];

/// Colour of the segment at `index`.
#[must_use]
pub fn segment_color(index: usize) -> u32 {
    SEGMENT_COLORS[index % SEGMENT_COLORS.len()]
}

/// Angular extent of one wedge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    pub start: f64,
    pub sweep: f64,
}

impl Wedge {
    /// Whether `angle` (any range) falls inside this wedge.
    #[must_use]
    pub fn contains(&self, angle: f64) -> bool {
        let offset = (angle - self.start).rem_euclid(360.0);
        offset < self.sweep
    }

    /// Angle at the middle of the wedge.
    #[must_use]
    pub fn mid(&self) -> f64 {
        self.start + self.sweep / 2.0
    }
}

/// Lay out wedges in segment order, proportional to each share, with a
/// fixed gap between non-empty wedges.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn layout_wedges(segments: &[RevenueSegment]) -> Vec<Wedge> {
    let total: u32 = segments.iter().map(|s| s.value).sum();
    if total == 0 {
        return segments
            .iter()
            .map(|_| Wedge {
                start: RING_START_DEGREES,
                sweep: 0.0,
            })
            .collect();
    }

    let non_empty = segments.iter().filter(|s| s.value > 0).count();
    let padding = if non_empty > 1 {
        RING_PADDING_DEGREES
    } else {
        0.0
    };
    let available = 360.0 - padding * non_empty as f64;

    let mut wedges = Vec::with_capacity(segments.len());
    let mut cursor = RING_START_DEGREES;
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 && segment.value > 0 {
            cursor += padding;
        }
        let sweep = f64::from(segment.value) / f64::from(total) * available;
        wedges.push(Wedge {
            start: cursor,
            sweep,
        });
        cursor += sweep;
    }
    wedges
}

/// Index of the wedge under the canvas point `(x, y)`, if the point lies
/// on the ring. The active wedge's enlarged radius counts as ring.
#[must_use]
pub fn segment_at(wedges: &[Wedge], x: f64, y: f64) -> Option<usize> {
    let radius = x.hypot(y);
    if !(RING_INNER_RADIUS..=RING_OUTER_RADIUS * RING_ACTIVE_SCALE).contains(&radius) {
        return None;
    }
    let angle = y.atan2(x).to_degrees().rem_euclid(360.0);
    wedges.iter().position(|w| w.contains(angle))
}

/// Hover state of the ring. The legend never reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevenueState {
    active: Option<usize>,
}

impl RevenueState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Pointer entered a wedge (or left the ring, with `None`).
    pub fn set_active(&mut self, index: Option<usize>) {
        self.active = index;
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Step through none, 0, 1, ..., len-1, none.
    pub fn cycle(&mut self, len: usize) {
        self.active = match self.active {
            None if len > 0 => Some(0),
            Some(i) if i + 1 < len => Some(i + 1),
            _ => None,
        };
    }
}
