use std::time::Duration;

use crate::catalog::Price;

/// Animated move of the displayed total from one value to another.
///
/// Sampled values are eased, rounded to whole units and never leave the
/// closed range between `from` and `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TotalTransition {
    pub from: Price,
    pub to: Price,
    pub duration: Duration,
}

impl TotalTransition {
    pub fn new(from: Price, to: Price, duration: Duration) -> Self {
        Self { from, to, duration }
    }

    /// A transition that starts and ends at `value`.
    pub fn settled(value: Price) -> Self {
        Self::new(value, value, Duration::ZERO)
    }

    pub fn is_settled(&self) -> bool {
        self.from == self.to
    }

    /// Displayed value at `progress` (0.0 to 1.0, clamped), eased out.
    pub fn value_at(&self, progress: f64) -> Price {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        let eased = 1.0 - (1.0 - progress).powi(2);

        let from = self.from as f64;
        let to = self.to as f64;
        let value = (from + (to - from) * eased).round();

        let (low, high) = if self.from <= self.to {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        };
        (value.max(0.0) as Price).clamp(low, high)
    }

    /// Displayed value `elapsed` into the transition.
    pub fn value_after(&self, elapsed: Duration) -> Price {
        if self.duration.is_zero() {
            return self.to;
        }
        self.value_at(elapsed.as_secs_f64() / self.duration.as_secs_f64())
    }
}

/// Tracks the last value shown to the visitor and the transition in flight.
///
/// A new target restarts from whatever is currently displayed; the last
/// retarget wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalDisplay {
    displayed: Price,
    transition: Option<TotalTransition>,
}

impl TotalDisplay {
    pub fn new(total: Price) -> Self {
        Self {
            displayed: total,
            transition: None,
        }
    }

    pub fn displayed(&self) -> Price {
        self.displayed
    }

    /// The value the display is heading to.
    pub fn target(&self) -> Price {
        self.transition
            .map(|transition| transition.to)
            .unwrap_or(self.displayed)
    }

    pub fn transition(&self) -> Option<&TotalTransition> {
        self.transition.as_ref()
    }

    /// Start moving towards `total`. Returns `None` when already there.
    pub fn retarget(&mut self, total: Price, duration: Duration) -> Option<TotalTransition> {
        if total == self.displayed {
            self.transition = None;
            return None;
        }

        let transition = TotalTransition::new(self.displayed, total, duration);
        self.transition = Some(transition);
        Some(transition)
    }

    /// Advance the transition to `progress` and return the displayed value.
    pub fn sample(&mut self, progress: f64) -> Price {
        if let Some(transition) = self.transition {
            self.displayed = transition.value_at(progress);
            if progress >= 1.0 {
                self.transition = None;
            }
        }
        self.displayed
    }

    /// Jump straight to `total`, dropping any transition.
    pub fn settle(&mut self, total: Price) {
        self.displayed = total;
        self.transition = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: Duration = Duration::from_millis(600);

    #[test]
    fn endpoints_are_exact() {
        let transition = TotalTransition::new(1500, 1900, DURATION);
        assert_eq!(transition.value_at(0.0), 1500);
        assert_eq!(transition.value_at(1.0), 1900);
        assert_eq!(transition.value_after(DURATION * 2), 1900);
    }

    #[test]
    fn values_stay_within_range() {
        for (from, to) in [(1500, 5400), (5400, 1500), (0, 1), (7, 7)] {
            let transition = TotalTransition::new(from, to, DURATION);
            let (low, high) = (from.min(to), from.max(to));
            for step in -5..=25 {
                let value = transition.value_at(step as f64 / 20.0);
                assert!(value >= low && value <= high, "{value} outside {low}..={high}");
            }
            assert_eq!(transition.value_at(f64::NAN), from);
        }
    }

    #[test]
    fn eases_out() {
        let transition = TotalTransition::new(0, 1000, DURATION);
        assert_eq!(transition.value_at(0.5), 750);
        assert!(transition.value_at(0.25) > 250);
    }

    #[test]
    fn zero_duration_jumps_to_end() {
        assert_eq!(TotalTransition::new(1, 9, Duration::ZERO).value_after(Duration::ZERO), 9);
        assert!(TotalTransition::settled(5).is_settled());
    }

    #[test]
    fn retarget_restarts_from_displayed_value() {
        let mut display = TotalDisplay::new(1500);

        let first = display.retarget(3900, DURATION).unwrap();
        assert_eq!((first.from, first.to), (1500, 3900));

        let midway = display.sample(0.5);
        assert!(midway > 1500 && midway < 3900);

        let second = display.retarget(1900, DURATION).unwrap();
        assert_eq!((second.from, second.to), (midway, 1900));
        assert_eq!(display.target(), 1900);

        assert_eq!(display.sample(1.0), 1900);
        assert!(display.transition().is_none());
    }

    #[test]
    fn retarget_to_displayed_value_is_noop() {
        let mut display = TotalDisplay::new(1500);
        assert!(display.retarget(1500, DURATION).is_none());
        assert_eq!(display.sample(0.3), 1500);
    }
}
