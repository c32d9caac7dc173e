use super::Harness;
use approx::assert_abs_diff_eq;
use glam::Vec3;
use linkage_editor::AppIntent;

fn heights(harness: &Harness) -> Vec<f32> {
    harness.positions().iter().map(|p| p.y).collect()
}

#[test]
fn test_example_scenario_rotation_swings_descendant() {
    let mut harness = Harness::unit_chain(2);
    assert_eq!(
        harness.positions(),
        vec![Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, 2.0)]
    );

    harness.send(AppIntent::JointClicked { index: 1 });
    // 2.5 Reglereinheiten * 36°/Einheit = 90°
    harness.send(AppIntent::RotationControlChanged { value: 2.5 });

    let positions = harness.positions();
    assert_eq!(positions[0], Vec3::ZERO);
    assert_eq!(positions[1], Vec3::new(0.0, 0.0, 1.0));
    assert_abs_diff_eq!(positions[2], Vec3::new(1.0, 0.0, 1.0), epsilon = 1e-5);
    assert_eq!(harness.state.ui.rotation_display, "90");
    let rendered = harness.last_rendered().expect("Renderer synchronisiert");
    assert_eq!(rendered, positions);
}

#[test]
fn test_rotation_control_is_absolute() {
    let mut harness = Harness::unit_chain(3);
    let original = harness.positions();
    harness.send(AppIntent::JointClicked { index: 1 });

    harness.send(AppIntent::RotationControlChanged { value: 1.7 });
    let once = harness.positions();
    harness.send(AppIntent::RotationControlChanged { value: 1.7 });
    for (a, b) in once.iter().zip(harness.positions()) {
        assert_abs_diff_eq!(*a, b, epsilon = 1e-5);
    }

    harness.send(AppIntent::RotationControlChanged { value: 0.0 });
    for (a, b) in original.iter().zip(harness.positions()) {
        assert_abs_diff_eq!(*a, b, epsilon = 1e-5);
    }
}

#[test]
fn test_translation_round_trip_has_no_drift() {
    let mut harness = Harness::unit_chain(3);
    harness.send(AppIntent::JointClicked { index: 1 });
    harness.send(AppIntent::TranslationControlChanged { value: 0.5 });
    let at_a = heights(&harness);

    for value in [3.0, -2.25, 4.9, 0.1, -5.0, 1.3] {
        harness.send(AppIntent::TranslationControlChanged { value });
    }
    harness.send(AppIntent::TranslationControlChanged { value: 0.5 });

    assert_eq!(heights(&harness), at_a);
    assert_eq!(heights(&harness)[0], 0.0);

    harness.send(AppIntent::TranslationControlChanged { value: 0.0 });
    assert_eq!(heights(&harness), vec![0.0; 4]);
}

#[test]
fn test_translation_without_selection_is_ignored() {
    let mut harness = Harness::unit_chain(2);

    harness.send(AppIntent::TranslationControlChanged { value: 2.0 });

    assert_eq!(heights(&harness), vec![0.0; 3]);
    assert_eq!(harness.state.manipulator.translation_value, 0.0);
}

#[test]
fn test_translation_survives_rotation_of_selected_joint() {
    let mut harness = Harness::unit_chain(2);
    harness.send(AppIntent::JointClicked { index: 1 });
    harness.send(AppIntent::TranslationControlChanged { value: 1.0 });
    assert_eq!(heights(&harness), vec![0.0, 1.0, 1.0]);

    harness.send(AppIntent::RotateStepForwardRequested);
    assert_abs_diff_eq!(harness.positions()[2], Vec3::new(1.0, 1.0, 1.0), epsilon = 1e-5);

    harness.send(AppIntent::TranslationControlChanged { value: 0.0 });

    let positions = harness.positions();
    assert_abs_diff_eq!(positions[1], Vec3::new(0.0, 0.0, 1.0), epsilon = 1e-5);
    assert_abs_diff_eq!(positions[2], Vec3::new(1.0, 0.0, 1.0), epsilon = 1e-5);
}

#[test]
fn test_four_forward_steps_return_to_original_angle() {
    let mut harness = Harness::unit_chain(2);
    let original = harness.positions();
    let start = harness.angle(2);

    for _ in 0..4 {
        harness.send(AppIntent::RotateStepForwardRequested);
    }

    assert_eq!(harness.angle(2), start);
    for (a, b) in original.iter().zip(harness.positions()) {
        assert_abs_diff_eq!(*a, b, epsilon = 1e-5);
    }
    assert_abs_diff_eq!(harness.state.editor.current_direction, Vec3::Z, epsilon = 1e-5);
}

#[test]
fn test_step_changes_growth_direction_of_new_joints() {
    let mut harness = Harness::unit_chain(1);

    harness.send(AppIntent::RotateStepForwardRequested);
    harness.send(AppIntent::AddJointRequested);

    assert_abs_diff_eq!(harness.positions()[2], Vec3::new(1.0, 0.0, 1.0), epsilon = 1e-5);
}

#[test]
fn test_backward_step_wraps_angle() {
    let mut harness = Harness::unit_chain(1);

    harness.send(AppIntent::RotateStepBackwardRequested);

    assert_eq!(harness.angle(1), 270.0);
    assert_eq!(harness.state.ui.rotation_display, "270");
}
