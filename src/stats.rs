use super::*;

/// Full interpolation span of a counter sweep.
pub(crate) const ANIMATION_SPAN_MS: i64 = 2000;

/// Frame cadence of the animation callback chain.
pub(crate) const FRAME_INTERVAL_MS: i64 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatAnimation {
    /// Not yet scrolled into view.
    Idle,
    Running { started_at: i64 },
    Finished,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct StatCounter {
    pub(crate) label: String,
    pub(crate) target: f64,
    pub(crate) display: String,
    pub(crate) animation: StatAnimation,
}

impl StatCounter {
    pub(crate) fn new(label: &str, target: f64) -> Self {
        Self {
            label: label.to_string(),
            target,
            display: "0".to_string(),
            animation: StatAnimation::Idle,
        }
    }
}

/// Renders an in-flight or final counter value.
///
/// Non-integral targets show one decimal place throughout; integral targets
/// show the floor while running and the exact target on the final frame.
pub(crate) fn format_stat_value(target: f64, current: f64, final_frame: bool) -> String {
    let is_decimal = target.fract() != 0.0;
    if is_decimal {
        format!("{current:.1}")
    } else if final_frame {
        format!("{}", target as i64)
    } else {
        format!("{}", current.floor() as i64)
    }
}
