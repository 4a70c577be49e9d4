//! Derived-value formulas.
//!
//! Authors write totals and durations ("wears out after 50 uses", "dries in
//! 3 hours"); the simulation wants per-step rates. Every trait compiler goes
//! through these functions so the conversions exist exactly once.

/// Durability lost per step (day, hour, or use) so that `max_condition` is
/// exhausted after `steps` steps. Non-positive `steps` disables wear and
/// returns 0.
pub fn decay_per_step(steps: f32, max_condition: f32) -> f32 {
    if steps > 0.0 {
        max_condition / steps
    } else {
        0.0
    }
}

/// Interprets a 0..=100 author value as a probability, clamped to 0..=1.
pub fn clamp01_percent(value: f32) -> f32 {
    (value / 100.0).clamp(0.0, 1.0)
}

/// Percent progress per hour so that 100% is reached after `hours`.
/// Non-positive `hours` returns 0, same convention as [`decay_per_step`].
pub fn percent_per_hour(hours: f32) -> f32 {
    if hours > 0.0 { 100.0 / hours } else { 0.0 }
}

pub fn hours_from_minutes(minutes: f32) -> f32 {
    minutes / 60.0
}

pub fn hours_from_days(days: f32) -> f32 {
    days * 24.0
}

pub fn seconds_from_minutes(minutes: f32) -> f32 {
    minutes * 60.0
}
