use std::{fmt, time::Duration};

use crate::{error::LagError, uniform::UniformFraction};

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Induced lag: either a fixed duration, or one chosen uniformly from
/// `[minimum, maximum)` each time it is asked for.
///
/// ```
/// use std::time::Duration;
/// use lag::Lag;
///
/// let simple = Lag::fixed(Duration::from_millis(1));
/// let random = Lag::between(Duration::from_millis(1), Duration::from_millis(10)).unwrap();
///
/// assert_eq!(simple.duration(), Duration::from_millis(1));
/// assert!(random.duration() < Duration::from_millis(10));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Lag {
    Fixed(Duration),
    Jittered(Window),
}

/// Bounds of a jittered lag. Only `Lag::between` builds one, so `maximum > minimum` always holds.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Window {
    minimum: Duration,
    maximum: Duration,
}

impl Lag {
    pub fn fixed(duration: Duration) -> Self {
        Lag::Fixed(duration)
    }

    /// No lag at all.
    pub fn minimal() -> Self {
        Lag::Fixed(Duration::ZERO)
    }

    pub fn between(minimum: Duration, maximum: Duration) -> Result<Self, LagError> {
        if maximum <= minimum {
            return Err(LagError::InvalidArgument { minimum, maximum });
        }
        Ok(Lag::Jittered(Window { minimum, maximum }))
    }

    /// `fixed` when there is no upper bound, `between` otherwise.
    pub fn window(minimum: Duration, maximum: Option<Duration>) -> Result<Self, LagError> {
        match maximum {
            Some(maximum) => Self::between(minimum, maximum),
            None => Ok(Self::fixed(minimum)),
        }
    }

    pub fn minimum(&self) -> Duration {
        match self {
            Lag::Fixed(duration) => *duration,
            Lag::Jittered(window) => window.minimum,
        }
    }

    pub fn maximum(&self) -> Option<Duration> {
        match self {
            Lag::Fixed(_) => None,
            Lag::Jittered(window) => Some(window.maximum),
        }
    }

    pub fn is_definite(&self) -> bool {
        matches!(self, Lag::Fixed(_))
    }

    /// Choose a duration using the thread-local generator.
    pub fn duration(&self) -> Duration {
        self.duration_with(&mut rand::thread_rng())
    }

    pub fn duration_with<S: UniformFraction + ?Sized>(&self, source: &mut S) -> Duration {
        match self {
            Lag::Fixed(duration) => *duration,
            Lag::Jittered(window) => window.interpolate(source.next_fraction()),
        }
    }
}

impl Default for Lag {
    fn default() -> Self {
        Self::minimal()
    }
}

impl Window {
    /// Works in whole nanoseconds and clamps below `maximum`, so float rounding
    /// can never produce the upper bound.
    fn interpolate(&self, fraction: f64) -> Duration {
        let fraction = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let span = (self.maximum - self.minimum).as_nanos();
        let offset = ((span as f64 * fraction) as u128).min(span - 1);
        self.minimum + from_nanos(offset)
    }
}

fn from_nanos(nanos: u128) -> Duration {
    Duration::new(
        (nanos / NANOS_PER_SEC) as u64,
        (nanos % NANOS_PER_SEC) as u32,
    )
}

impl fmt::Display for Lag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lag::Fixed(duration) => write!(f, "{:?}", duration),
            Lag::Jittered(window) => write!(f, "{:?}..{:?}", window.minimum, window.maximum),
        }
    }
}
