use bevy::prelude::*;
use bevy_inspector_egui::prelude::*;
use serde::{Deserialize, Serialize};

/// Sinusoidal parameter source:
/// `baseline + amplitude * sin(angular_frequency * t + phase)`.
///
/// Stateless; callers pass the elapsed time every evaluation.
#[derive(Serialize, Deserialize, Reflect, InspectorOptions, Debug, Clone, Copy, PartialEq, Default)]
#[reflect(InspectorOptions)]
pub struct Oscillator {
    pub amplitude: f32,
    /// Radians per second.
    pub angular_frequency: f32,
    /// Phase offset in radians.
    pub phase: f32,
    pub baseline: f32,
}

impl Oscillator {
    pub fn new(amplitude: f32, angular_frequency: f32, phase: f32, baseline: f32) -> Self {
        Oscillator {
            amplitude,
            angular_frequency,
            phase,
            baseline,
        }
    }

    pub fn with_phase(self, phase: f32) -> Self {
        Oscillator { phase, ..self }
    }

    /// Value at elapsed time `t` seconds. Total over all real inputs.
    pub fn value(&self, t: f32) -> f32 {
        self.baseline + self.amplitude * (self.angular_frequency * t + self.phase).sin()
    }
}

/// Drives the local y translation of the tagged entity.
#[derive(Component, Reflect, InspectorOptions, Debug, Clone, Copy, Default)]
#[reflect(Component, InspectorOptions)]
pub struct Bouncing(pub Oscillator);

/// Drives the uniform scale of the tagged entity.
#[derive(Component, Reflect, InspectorOptions, Debug, Clone, Copy, Default)]
#[reflect(Component, InspectorOptions)]
pub struct Pulsing(pub Oscillator);

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{PI, TAU};

    #[test]
    fn rest_at_time_zero_with_no_phase() {
        let osc = Oscillator::new(1.5, 3.0, 0.0, 0.0);
        assert_eq!(osc.value(0.0), 0.0);
    }

    #[test]
    fn peaks_a_quarter_period_in() {
        // amplitude 1.5, ω = 3 ⇒ sin(3 · π/6) = sin(π/2) = 1
        let osc = Oscillator::new(1.5, 3.0, 0.0, 0.0);
        assert!((osc.value(PI / 6.0) - 1.5).abs() < 1.0e-5);
    }

    #[test]
    fn periodic_in_two_pi_over_omega() {
        let osc = Oscillator::new(0.5, 3.0, 1.0, 1.5);
        let period = TAU / osc.angular_frequency;
        for t in [0.0, 0.4, 1.7, 12.9] {
            assert!((osc.value(t + period) - osc.value(t)).abs() < 1.0e-4);
        }
    }

    #[test]
    fn baseline_shifts_the_whole_waveform() {
        let osc = Oscillator::new(1.5, 2.0, 0.0, -15.0);
        assert_eq!(osc.value(0.0), -15.0);
        assert!(osc.value(100.0) <= -13.5 && osc.value(100.0) >= -16.5);
    }

    #[test]
    fn phase_offsets_desynchronize_copies() {
        let base = Oscillator::new(0.5, 3.0, 0.0, 1.5);
        let shifted = base.with_phase(1.0);
        assert!((base.value(0.0) - shifted.value(0.0)).abs() > 1.0e-3);
        // a phase of ω·dt is the same as evaluating dt later
        assert!((shifted.value(0.0) - base.value(1.0 / 3.0)).abs() < 1.0e-5);
    }
}
