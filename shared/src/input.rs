//! Axis sampling boundary between the input layer and the controller.
//!
//! The input layer maps devices (keyboard, gamepad, touch) to two named logical
//! axes. The controller only ever sees one [`AxisSample`] per tick.

use nalgebra::Vector3;

/// The two logical control axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left/right. Positive moves along +X.
    Horizontal,
    /// Forward/back. Positive moves along +Z.
    Vertical,
}

/// Anything that can report the current value of a logical axis.
///
/// Values are expected in `[-1, 1]`.
pub trait AxisSource {
    fn axis(&self, axis: Axis) -> f32;
}

impl<F> AxisSource for F
where
    F: Fn(Axis) -> f32,
{
    #[inline]
    fn axis(&self, axis: Axis) -> f32 {
        self(axis)
    }
}

/// One tick's worth of directional input.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisSample {
    pub horizontal: f32,
    pub vertical: f32,
}

impl AxisSample {
    pub const ZERO: Self = Self {
        horizontal: 0.0,
        vertical: 0.0,
    };

    #[inline]
    pub const fn new(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Sample both axes from `source`.
    pub fn read(source: &impl AxisSource) -> Self {
        Self::new(
            source.axis(Axis::Horizontal),
            source.axis(Axis::Vertical),
        )
    }

    /// Each axis clamped into `[-1, 1]`.
    #[inline]
    pub fn clamped(self) -> Self {
        Self::new(
            self.horizontal.clamp(-1.0, 1.0),
            self.vertical.clamp(-1.0, 1.0),
        )
    }

    /// The planar movement intent `(horizontal, 0, vertical)`.
    #[inline]
    pub fn intent(self) -> Vector3<f32> {
        Vector3::new(self.horizontal, 0.0, self.vertical)
    }
}
