//! Row geometry: points, panel ends, and the width snapshot a row is
//! measured into once at mount.

/// A point in pointer-event coordinates (logical pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Which side of a row an action panel sits on.
///
/// Leading is revealed by swiping right (positive offset), trailing by
/// swiping left (negative offset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelEnd {
    Leading,
    Trailing,
}

impl PanelEnd {
    /// Sign of the content offset that reveals this panel.
    pub fn sign(&self) -> f32 {
        match self {
            PanelEnd::Leading => 1.0,
            PanelEnd::Trailing => -1.0,
        }
    }
}

/// What to measure on the surrounding renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureTarget {
    Content,
    Panel(PanelEnd),
}

/// Natural-width measurement contract supplied by the host renderer.
///
/// Hosts are expected to measure with the element temporarily laid out at
/// its natural size (width auto, visibility hidden) and the previous styles
/// restored afterwards, so the measurement never flashes on screen.
pub trait WidthProvider {
    /// Natural width of the target in logical pixels.
    fn natural_width(&mut self, target: MeasureTarget) -> f32;
}

/// Width snapshot for one row, captured once when the row mounts.
///
/// The snapshot is immutable for the lifetime of the row, so a drag that
/// begins while a previous gesture is still tearing down always reads
/// consistent geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RowMetrics {
    pub content_width: f32,
    pub leading_width: f32,
    pub trailing_width: f32,
}

impl RowMetrics {
    pub fn new(content_width: f32, leading_width: f32, trailing_width: f32) -> Self {
        Self {
            content_width,
            leading_width,
            trailing_width,
        }
    }

    /// Measures content and the panels that exist. Absent panels report 0.
    pub fn capture(
        provider: &mut dyn WidthProvider,
        has_leading: bool,
        has_trailing: bool,
    ) -> Self {
        let content_width = provider.natural_width(MeasureTarget::Content);
        let leading_width = if has_leading {
            provider.natural_width(MeasureTarget::Panel(PanelEnd::Leading))
        } else {
            0.0
        };
        let trailing_width = if has_trailing {
            provider.natural_width(MeasureTarget::Panel(PanelEnd::Trailing))
        } else {
            0.0
        };
        Self::new(content_width, leading_width, trailing_width)
    }

    /// Width of the panel on the given end.
    pub fn panel_width(&self, end: PanelEnd) -> f32 {
        match end {
            PanelEnd::Leading => self.leading_width,
            PanelEnd::Trailing => self.trailing_width,
        }
    }

    /// Largest horizontal displacement a drag may reach: the content width,
    /// or the configured fraction of it.
    pub fn max_swipe(&self, fraction: Option<f32>) -> f32 {
        match fraction {
            Some(fraction) => self.content_width * fraction,
            None => self.content_width,
        }
    }
}

/// Swipe progress as an integer percentage of the content width.
///
/// `100 - round(100 * max(0, width - |offset|) / width)`. Returns `None`
/// for a zero-width row; callers keep their previous value in that case.
pub fn swipe_progress_percent(content_width: f32, offset: f32) -> Option<u8> {
    if content_width == 0.0 {
        return None;
    }
    let remaining = (content_width - offset.abs()).max(0.0);
    let percent = 100.0 - (100.0 * remaining / content_width).round();
    Some(percent as u8)
}
