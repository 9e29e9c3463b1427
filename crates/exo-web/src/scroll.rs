/// Accumulates sub-pixel scroll deltas until they add up to whole pixels.
///
/// Per-frame gesture scroll is usually well under a pixel, and `scrollTop`
/// only takes integers, so the fractional part is carried between frames.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollCarry {
    remainder: f32,
}

impl ScrollCarry {
    /// Add `delta` and return the whole pixels now ready to apply.
    /// The sign follows `delta`; the remainder stays within (-1, 1).
    pub fn take(&mut self, delta: f32) -> i32 {
        if !delta.is_finite() {
            return 0;
        }
        self.remainder += delta;
        let whole = self.remainder.trunc();
        self.remainder -= whole;
        whole as i32
    }

    #[inline]
    pub fn remainder(&self) -> f32 {
        self.remainder
    }
}
