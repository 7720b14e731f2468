// tests/panel_tests.rs

use glitchscope::{
    AsciiMode, GlitchError, GlitchPanel, LoopStatus, ManualHost, PanelConfig, ParameterName, ParameterSet,
    ParameterUpdate, ParameterValue, SystemState,
};
use std::cell::RefCell;
use std::rc::Rc;

// Helper that records every update the panel broadcasts
fn recording_panel() -> (GlitchPanel, Rc<RefCell<Vec<ParameterUpdate>>>) {
    let mut panel = GlitchPanel::default();
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    panel.subscribe(move |update| sink.borrow_mut().push(update.clone()));
    (panel, log)
}

#[test]
fn test_every_setter_broadcasts_the_new_snapshot() {
    let (mut panel, log) = recording_panel();

    panel.set_feedback_loop(true);
    panel.set_lucidity(0.42);
    panel.set_fractalization_depth(5);
    panel.set_color_phase(90);
    panel.set_ascii_mode(AsciiMode::Low);

    let log = log.borrow();
    let names: Vec<ParameterName> = log.iter().map(|u| u.parameter).collect();
    assert_eq!(
        names,
        vec![
            ParameterName::FeedbackLoop,
            ParameterName::Lucidity,
            ParameterName::FractalDepth,
            ParameterName::ColorPhase,
            ParameterName::AsciiMode,
        ]
    );
    assert_eq!(log[1].value, ParameterValue::Scalar(0.42));
    assert_eq!(log[1].snapshot.lucidity, 0.42);
    assert!(log[1].snapshot.feedback_loop);
    assert_eq!(log[4].snapshot, panel.get_state());
}

#[test]
fn test_broadcast_carries_clamped_values() {
    let (mut panel, log) = recording_panel();

    panel.set_lucidity(7.5);
    panel.set_fractalization_depth(-3);
    panel.set_color_phase(-90);

    let log = log.borrow();
    assert_eq!(log[0].value, ParameterValue::Scalar(1.0));
    assert_eq!(log[1].value, ParameterValue::Integer(1));
    assert_eq!(log[2].value, ParameterValue::Integer(270));
}

#[test]
fn test_listener_sees_state_after_reclassification() {
    let mut panel = GlitchPanel::default();
    let observed = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&observed);
    panel.subscribe(move |update| *sink.borrow_mut() = Some(glitchscope::classify(&update.snapshot)));

    let state = panel.set_lucidity(0.1);
    assert_eq!(state, SystemState::Chaos);
    assert_eq!(*observed.borrow(), Some(SystemState::Chaos));
}

#[test]
fn test_unsubscribe_stops_delivery() {
    let mut panel = GlitchPanel::default();
    let count = Rc::new(RefCell::new(0u32));
    let counter = Rc::clone(&count);
    let id = panel.subscribe(move |_| *counter.borrow_mut() += 1);

    panel.set_lucidity(0.5);
    assert!(panel.unsubscribe(id));
    panel.set_lucidity(0.6);

    assert_eq!(*count.borrow(), 1);
}

#[test]
fn test_set_state_replaces_without_broadcast() {
    let (mut panel, log) = recording_panel();

    let replacement = ParameterSet {
        feedback_loop: false,
        lucidity: 0.5,
        fractalization_depth: 4,
        color_phase_degrees: 10,
        ascii_overlay_mode: AsciiMode::High,
    };
    assert_eq!(panel.set_state(replacement), SystemState::Transition);
    assert_eq!(panel.get_state(), replacement);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_replacing_parameters_restarts_the_preview() -> Result<(), GlitchError> {
    let config = PanelConfig { seed: Some(8), ..PanelConfig::default() };
    let mut panel = GlitchPanel::new(config)?;
    let mut surface = panel.framebuffer()?;
    let mut animation = panel.preview_loop();

    assert_eq!(animation.attach(Some(&surface)), LoopStatus::Running);
    animation.run_frames(&mut ManualHost::new(), panel.params(), &mut surface, 6);
    assert_eq!(animation.frame(), 6);

    // single-field edits keep the animation going
    panel.set_color_phase(33);
    assert!(!animation.sync_generation(panel.generation(), &surface));

    panel.set_state(ParameterSet::default());
    assert!(animation.sync_generation(panel.generation(), &surface));
    assert_eq!(animation.frame(), 0);
    Ok(())
}

#[test]
fn test_update_json_for_bridge() -> Result<(), GlitchError> {
    let (mut panel, log) = recording_panel();
    panel.set_feedback_loop(true);

    let json = log.borrow()[0].to_json()?;
    assert!(json.contains(r#""parameter":"feedback-loop""#));
    assert!(json.contains(r#""value":true"#));
    assert!(json.contains(r#""fullState":{"#));
    Ok(())
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = PanelConfig { glitch_probability: -0.1, ..PanelConfig::default() };
    assert!(matches!(GlitchPanel::new(config), Err(GlitchError::InvalidConfig { .. })));
}

#[test]
fn test_config_sizes_the_framebuffer() -> Result<(), GlitchError> {
    let panel = GlitchPanel::new(PanelConfig::from_json(r#"{"width": 700, "height": 500}"#)?)?;
    let surface = panel.framebuffer()?;
    assert_eq!(surface.pixels().len(), 700 * 500);
    Ok(())
}
