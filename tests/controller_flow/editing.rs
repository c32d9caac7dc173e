use super::Harness;
use approx::assert_abs_diff_eq;
use glam::{Quat, Vec3};
use linkage_editor::{AppCommand, AppController, AppIntent, AppState, ChainModel, ChainOptions};

#[test]
fn test_add_joint_grows_chain_by_one_each_time() {
    let mut harness = Harness::new(ChainOptions::default());

    for n in 1..=6 {
        harness.send(AppIntent::AddJointRequested);

        assert_eq!(harness.state.joint_count(), 1 + n);
        assert_eq!(harness.positions().len(), 1 + n);
        let rendered = harness.last_rendered().expect("Renderer synchronisiert");
        assert_eq!(rendered.len(), 1 + n);
    }
}

#[test]
fn test_added_joints_follow_growth_direction_and_spacing() {
    let harness = Harness::unit_chain(2);

    assert_eq!(
        harness.positions(),
        vec![Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, 2.0)]
    );
    let chain = harness.state.chain.as_ref().expect("Kette vorhanden");
    assert_eq!(chain.get(2).map(|j| j.label.as_str()), Some("Joint 2"));
    assert_eq!(chain.get(2).map(|j| j.rotation), Some(Quat::IDENTITY));
}

#[test]
fn test_base_placement_is_one_shot() {
    let mut harness = Harness::unit_chain(1);

    harness.send(AppIntent::BasePlaced {
        position: Vec3::new(5.0, 5.0, 5.0),
        rotation: Quat::IDENTITY,
    });

    assert_eq!(harness.state.joint_count(), 2);
    assert_eq!(harness.positions()[0], Vec3::ZERO);
}

#[test]
fn test_increase_then_decrease_restores_end_joint_exactly() {
    let mut harness = Harness::unit_chain(3);
    harness.send(AppIntent::RotateStepForwardRequested);
    let before = harness.positions();

    harness.send(AppIntent::IncreaseLengthRequested);
    assert_ne!(harness.positions()[3], before[3]);
    assert_eq!(harness.state.ui.length_display, "0.1");

    harness.send(AppIntent::DecreaseLengthRequested);

    assert_eq!(harness.positions(), before);
    assert_eq!(harness.state.ui.length_display, "0.0");
}

#[test]
fn test_increase_moves_selected_joint_away_from_predecessor() {
    let mut harness = Harness::unit_chain(3);
    harness.send(AppIntent::JointClicked { index: 1 });

    harness.send(AppIntent::IncreaseLengthRequested);

    let positions = harness.positions();
    assert_abs_diff_eq!(positions[1], Vec3::new(0.0, 0.0, 1.1), epsilon = 1e-6);
    assert_eq!(positions[2], Vec3::new(0.0, 0.0, 2.0));
}

#[test]
fn test_decrease_restores_position_to_current_end_joint() {
    let mut harness = Harness::unit_chain(2);
    harness.send(AppIntent::IncreaseLengthRequested);
    assert_abs_diff_eq!(harness.positions()[2], Vec3::new(0.0, 0.0, 2.1), epsilon = 1e-6);

    // Selektion wechselt zwischen Verlängern und Verkürzen
    harness.send(AppIntent::JointClicked { index: 1 });
    harness.send(AppIntent::DecreaseLengthRequested);

    let positions = harness.positions();
    assert_eq!(positions[0], Vec3::ZERO);
    assert_eq!(positions[1], Vec3::new(0.0, 0.0, 2.0));
    assert_abs_diff_eq!(positions[2], Vec3::new(0.0, 0.0, 2.1), epsilon = 1e-6);
    assert!(harness.state.editor.length_history.is_empty());
    assert_eq!(harness.state.ui.length_display, "0.0");
}

#[test]
fn test_decrease_on_empty_history_is_noop() {
    let mut harness = Harness::unit_chain(2);
    let before = harness.positions();

    harness.send(AppIntent::DecreaseLengthRequested);

    assert_eq!(harness.positions(), before);
    assert_eq!(harness.state.editor.current_length, 0.0);
}

#[test]
fn test_increase_on_base_only_chain_is_noop() {
    let mut harness = Harness::new(ChainOptions::default());

    harness.send(AppIntent::IncreaseLengthRequested);

    assert_eq!(harness.positions(), vec![Vec3::ZERO]);
    assert!(harness.state.editor.length_history.is_empty());
}

#[test]
fn test_increase_stops_at_max_length() {
    let options = ChainOptions {
        max_length: 0.3,
        length_step: 0.1,
        ..ChainOptions::default()
    };
    let mut harness = Harness::new(options);
    harness.send(AppIntent::AddJointRequested);

    for _ in 0..5 {
        harness.send(AppIntent::IncreaseLengthRequested);
    }

    assert_eq!(harness.state.editor.length_history.len(), 3);
    assert_abs_diff_eq!(harness.state.editor.current_length, 0.3, epsilon = 1e-5);
    assert_eq!(harness.state.ui.length_display, "0.3");
}

#[test]
fn test_add_joint_without_template_aborts() {
    let mut harness = Harness::unit_chain(1);
    harness.state.joint_template = None;

    harness.send(AppIntent::AddJointRequested);

    assert_eq!(harness.state.joint_count(), 2);
}

#[test]
fn test_chain_commands_before_base_are_noops() {
    let mut controller = AppController::with_renderer(Box::new(super::RecordingRenderer::default()));
    let mut state = AppState::new();

    for intent in [
        AppIntent::AddJointRequested,
        AppIntent::IncreaseLengthRequested,
        AppIntent::RotateStepForwardRequested,
        AppIntent::TrajectoryDoneRequested,
    ] {
        controller
            .handle_intent(&mut state, intent)
            .expect("No-op ohne Kette");
    }

    assert!(state.chain.is_none());
}

#[test]
fn test_missing_renderer_rejects_chain_mutation() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.chain = Some(ChainModel::new(Vec3::ZERO, Quat::IDENTITY, [1.0; 4]));

    let result = controller.handle_intent(&mut state, AppIntent::AddJointRequested);

    assert!(result.is_err());
    assert_eq!(state.joint_count(), 1);
    assert!(state.command_log.is_empty());
}

#[test]
fn test_missing_renderer_still_allows_view_commands() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::CameraZoom { factor: 2.0 })
        .expect("Kamera braucht keinen Renderer");

    assert!(matches!(
        state.command_log.last(),
        Some(AppCommand::ZoomCamera { .. })
    ));
}
