// tests/classifier_tests.rs

use glitchscope::{AsciiMode, ParameterSet, SystemState, classify};
use proptest::prelude::*;

// Helper for building a parameter set from the three classifier inputs
fn params(feedback_loop: bool, lucidity: f64, fractalization_depth: u8) -> ParameterSet {
    ParameterSet {
        feedback_loop,
        lucidity,
        fractalization_depth,
        ..ParameterSet::default()
    }
}

#[test]
fn test_feedback_short_circuits_high_lucidity() {
    assert_eq!(classify(&params(true, 0.9, 1)), SystemState::Chaos);
}

#[test]
fn test_high_lucidity_without_feedback_is_stable() {
    assert_eq!(classify(&params(false, 0.7, 2)), SystemState::Stable);
}

#[test]
fn test_mid_lucidity_is_transition() {
    assert_eq!(classify(&params(false, 0.45, 3)), SystemState::Transition);
}

#[test]
fn test_low_lucidity_clause() {
    assert_eq!(classify(&params(false, 0.2, 2)), SystemState::Chaos);
}

#[test]
fn test_depth_clause_overrides_high_lucidity() {
    assert_eq!(classify(&params(false, 0.9, 7)), SystemState::Chaos);
}

#[test]
fn test_boundary_values_fall_through() {
    assert_eq!(classify(&params(false, 0.3, 6)), SystemState::Transition);
    assert_eq!(classify(&params(false, 0.6, 6)), SystemState::Transition);
    assert_eq!(classify(&params(true, 0.6, 6)), SystemState::Chaos);
}

#[test]
fn test_color_and_overlay_do_not_affect_state() {
    let base = params(false, 0.7, 2);
    let decorated = ParameterSet {
        color_phase_degrees: 359,
        ascii_overlay_mode: AsciiMode::High,
        ..base
    };
    assert_eq!(classify(&base), classify(&decorated));
}

fn arb_params() -> impl Strategy<Value = ParameterSet> {
    (any::<bool>(), 0.0f64..=1.0, 1u8..=9, 0u16..360).prop_map(|(feedback_loop, lucidity, depth, phase)| {
        ParameterSet {
            feedback_loop,
            lucidity,
            fractalization_depth: depth,
            color_phase_degrees: phase,
            ascii_overlay_mode: AsciiMode::Off,
        }
    })
}

proptest! {
    #[test]
    fn classify_is_deterministic(p in arb_params()) {
        prop_assert_eq!(classify(&p), classify(&p));
    }

    #[test]
    fn feedback_always_means_chaos(p in arb_params()) {
        let engaged = ParameterSet { feedback_loop: true, ..p };
        prop_assert_eq!(classify(&engaged), SystemState::Chaos);
    }

    #[test]
    fn stable_requires_clear_shallow_signal(p in arb_params()) {
        if classify(&p) == SystemState::Stable {
            prop_assert!(!p.feedback_loop);
            prop_assert!(p.lucidity > 0.6);
            prop_assert!(p.fractalization_depth <= 6);
        }
    }
}
