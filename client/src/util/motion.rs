//! Entrance animation timing.
//!
//! Cards enter with a CSS keyframe animation (`animate-fade-in`,
//! `animate-slide-up`); lists stagger them by delaying each item a fixed step
//! after a section-level base delay.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

/// Delay before the `index`-th item of a list starts animating.
#[must_use]
pub fn stagger_ms(base_ms: u32, index: usize, step_ms: u32) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    base_ms.saturating_add(index.saturating_mul(step_ms))
}

/// Inline style carrying the staggered `animation-delay`.
#[must_use]
pub fn stagger_delay(base_ms: u32, index: usize, step_ms: u32) -> String {
    delay_style(stagger_ms(base_ms, index, step_ms))
}

/// Inline style for a single fixed delay.
#[must_use]
pub fn delay_style(ms: u32) -> String {
    format!("animation-delay: {ms}ms")
}
