/// Upper bound (exclusive) of the confidence perturbation.
const JITTER_SPAN: f32 = 0.1;

/// Source of the small random perturbation added to direct and pattern
/// confidences. Only used to break ranking ties; injectable so tests can
/// pin it to zero.
pub trait JitterSource: Send + Sync {
    /// A value in `[0, 0.1)`.
    fn jitter(&self) -> f32;
}

/// OS-entropy jitter. Falls back to zero if entropy is unavailable, since
/// jitter is cosmetic and must never fail a compression.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomJitter;

impl JitterSource for RandomJitter {
    fn jitter(&self) -> f32 {
        let mut bytes = [0u8; 2];
        if getrandom::getrandom(&mut bytes).is_err() {
            return 0.0;
        }
        // 16 bits of entropy is plenty for tie-breaking, and the division
        // is exact in f32, so the result stays strictly below the span.
        let unit = f32::from(u16::from_be_bytes(bytes)) / 65_536.0;
        unit * JITTER_SPAN
    }
}

/// Deterministic zero jitter for tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn jitter(&self) -> f32 {
        0.0
    }
}
