use super::Harness;
use approx::assert_abs_diff_eq;
use glam::{Quat, Vec3};
use linkage_editor::{AppIntent, TrajectoryMode};

fn set_targets(harness: &mut Harness, targets: &[(usize, &str)]) {
    for (index, text) in targets {
        harness.send(AppIntent::TargetAngleEdited {
            index: *index,
            text: text.to_string(),
        });
    }
}

fn rotation(harness: &Harness, index: usize) -> Quat {
    harness
        .state
        .chain
        .as_ref()
        .and_then(|chain| chain.get(index))
        .map(|joint| joint.rotation)
        .expect("Gelenk vorhanden")
}

fn expected_rotation(angle_deg: f32) -> Quat {
    Quat::from_axis_angle(Vec3::Y, angle_deg.to_radians())
}

#[test]
fn test_coordinated_reaches_targets_independent_of_tick_count() {
    for ticks in [1_usize, 3, 7, 60] {
        let mut harness = Harness::unit_chain(3);
        set_targets(&mut harness, &[(1, "90"), (2, "-45"), (3, "30")]);
        harness.send(AppIntent::DurationEdited {
            text: "0.5".to_string(),
        });

        harness.send(AppIntent::TrajectoryDoneRequested);
        assert!(harness.state.is_animating());

        let dt = 0.5 / ticks as f32;
        harness.run_until_idle(dt, ticks + 2);

        assert!(!harness.state.is_animating(), "{ticks} Ticks");
        for (index, angle) in [(0, 0.0_f32), (1, 90.0), (2, -45.0), (3, 30.0)] {
            assert_abs_diff_eq!(
                rotation(&harness, index),
                expected_rotation(angle),
                epsilon = 1e-5
            );
        }
        assert_eq!(harness.angle(2), 315.0);
    }
}

#[test]
fn test_coordinated_halfway_interpolates() {
    let mut harness = Harness::unit_chain(2);
    set_targets(&mut harness, &[(1, "90")]);
    harness.send(AppIntent::DurationEdited {
        text: "2".to_string(),
    });
    harness.send(AppIntent::TrajectoryDoneRequested);

    harness.send(AppIntent::FrameTick { dt: 1.0 });

    assert!(harness.state.is_animating());
    assert_abs_diff_eq!(harness.angle(1), 45.0, epsilon = 1e-3);
    let rendered = harness.last_rendered().expect("Renderer synchronisiert");
    assert_eq!(rendered.len(), 3);
    assert_eq!(rendered, harness.positions());
}

#[test]
fn test_coordinated_final_pose_places_descendants() {
    let mut harness = Harness::unit_chain(2);
    set_targets(&mut harness, &[(1, "90")]);
    harness.send(AppIntent::TrajectoryDoneRequested);

    harness.run_until_idle(0.25, 10);

    let positions = harness.positions();
    assert_abs_diff_eq!(positions[1], Vec3::new(0.0, 0.0, 1.0), epsilon = 1e-6);
    assert_abs_diff_eq!(positions[2], Vec3::new(1.0, 0.0, 1.0), epsilon = 1e-5);
}

#[test]
fn test_sequential_animates_one_joint_at_a_time() {
    let mut harness = Harness::unit_chain(2);
    set_targets(&mut harness, &[(1, "90"), (2, "45")]);
    harness.send(AppIntent::CoordinatedModeToggled { coordinated: false });
    harness.send(AppIntent::TrajectoryDoneRequested);

    let mut order = Vec::new();
    while harness.state.is_animating() && order.len() < 100 {
        let active = harness
            .state
            .animation
            .active()
            .and_then(|task| task.active_joint());
        if let Some(index) = active {
            if order.last() != Some(&index) {
                order.push(index);
            }
            if index == 1 {
                assert_eq!(harness.angle(2), 0.0);
            }
        }
        harness.send(AppIntent::FrameTick { dt: 0.2 });
    }

    assert_eq!(order, vec![0, 1, 2]);
    assert_abs_diff_eq!(harness.angle(1), 90.0, epsilon = 1e-4);
    assert_abs_diff_eq!(harness.angle(2), 45.0, epsilon = 1e-4);
}

#[test]
fn test_sequential_reconstructs_downstream_joints_mid_segment() {
    let mut harness = Harness::unit_chain(2);
    set_targets(&mut harness, &[(1, "90")]);
    harness.send(AppIntent::DurationEdited {
        text: "1".to_string(),
    });
    harness.send(AppIntent::CoordinatedModeToggled { coordinated: false });
    harness.send(AppIntent::TrajectoryDoneRequested);

    // Segment 0 (Basis, Ziel 0°) vollständig durchlaufen
    harness.send(AppIntent::FrameTick { dt: 1.0 });
    let active = harness
        .state
        .animation
        .active()
        .and_then(|task| task.active_joint());
    assert_eq!(active, Some(1));

    harness.send(AppIntent::FrameTick { dt: 0.5 });

    let halfway = Quat::IDENTITY.slerp(expected_rotation(90.0), 0.5);
    let positions = harness.positions();
    assert_eq!(positions[0], Vec3::ZERO);
    assert_abs_diff_eq!(positions[1], Vec3::new(0.0, 0.0, 1.0), epsilon = 1e-6);
    assert_abs_diff_eq!(positions[2], positions[1] + halfway * Vec3::Z, epsilon = 1e-5);
    assert_abs_diff_eq!(
        positions[2],
        Vec3::new(0.70710677, 0.0, 1.7071068),
        epsilon = 1e-5
    );
    assert_eq!(harness.last_rendered(), Some(positions));
}

#[test]
fn test_start_while_running_is_rejected() {
    let mut harness = Harness::unit_chain(2);
    set_targets(&mut harness, &[(1, "90")]);
    harness.send(AppIntent::TrajectoryDoneRequested);
    harness.send(AppIntent::CoordinatedModeToggled { coordinated: false });

    harness.send(AppIntent::TrajectoryDoneRequested);

    let mode = harness.state.animation.active().map(|task| task.mode());
    assert_eq!(mode, Some(TrajectoryMode::Coordinated));
}

#[test]
fn test_edits_are_rejected_while_animating() {
    let mut harness = Harness::unit_chain(2);
    set_targets(&mut harness, &[(1, "90")]);
    harness.send(AppIntent::TrajectoryDoneRequested);
    harness.send(AppIntent::FrameTick { dt: 0.1 });
    let during = harness.positions();

    harness.send(AppIntent::AddJointRequested);
    harness.send(AppIntent::IncreaseLengthRequested);
    harness.send(AppIntent::RotateStepForwardRequested);

    assert_eq!(harness.state.joint_count(), 3);
    assert_eq!(harness.positions(), during);
}

#[test]
fn test_cancel_keeps_partial_pose() {
    let mut harness = Harness::unit_chain(2);
    set_targets(&mut harness, &[(1, "90")]);
    harness.send(AppIntent::DurationEdited {
        text: "2".to_string(),
    });
    harness.send(AppIntent::TrajectoryDoneRequested);
    harness.send(AppIntent::FrameTick { dt: 1.0 });

    harness.send(AppIntent::TrajectoryCancelRequested);
    harness.send(AppIntent::FrameTick { dt: 1.0 });

    assert!(!harness.state.is_animating());
    assert_abs_diff_eq!(harness.angle(1), 45.0, epsilon = 1e-3);
    assert_eq!(harness.state.animation.completed_runs(), 0);
}

#[test]
fn test_reset_restores_creation_pose_exactly() {
    let mut harness = Harness::unit_chain(3);
    let initial_positions = harness.positions();

    harness.send(AppIntent::RotateStepForwardRequested);
    harness.send(AppIntent::IncreaseLengthRequested);
    harness.send(AppIntent::JointClicked { index: 1 });
    harness.send(AppIntent::TranslationControlChanged { value: 2.0 });
    harness.send(AppIntent::RotationControlChanged { value: 3.3 });
    set_targets(&mut harness, &[(1, "120"), (3, "15")]);
    harness.send(AppIntent::DurationEdited {
        text: "3".to_string(),
    });
    harness.send(AppIntent::TrajectoryDoneRequested);
    harness.send(AppIntent::FrameTick { dt: 0.7 });

    harness.send(AppIntent::TrajectoryResetRequested);

    assert!(!harness.state.is_animating());
    assert_eq!(harness.positions(), initial_positions);
    let chain = harness.state.chain.as_ref().expect("Kette vorhanden");
    for joint in chain.joints() {
        assert_eq!(joint.rotation, joint.initial_rotation);
        assert_eq!(joint.angle_deg, joint.initial_angle_deg);
        assert!(joint.target_input.is_empty());
    }
    assert!(harness.state.ui.duration_input.is_empty());
    assert!(harness.state.editor.length_history.is_empty());
    assert_eq!(harness.state.editor.current_length, 0.0);
    assert_eq!(harness.state.editor.current_direction, Vec3::Z);
    assert_eq!(harness.state.manipulator.translation_value, 0.0);
    assert_eq!(harness.last_rendered(), Some(initial_positions));
}

#[test]
fn test_reset_after_completed_animation() {
    let mut harness = Harness::unit_chain(2);
    let initial_positions = harness.positions();
    set_targets(&mut harness, &[(0, "30"), (1, "90"), (2, "180")]);
    harness.send(AppIntent::TrajectoryDoneRequested);
    harness.run_until_idle(0.5, 10);
    assert_eq!(harness.state.animation.completed_runs(), 1);

    harness.send(AppIntent::TrajectoryResetRequested);

    assert_eq!(harness.positions(), initial_positions);
    assert_eq!(rotation(&harness, 0), Quat::IDENTITY);
}

#[test]
fn test_idle_frame_ticks_are_not_logged() {
    let mut harness = Harness::unit_chain(1);
    let logged = harness.state.command_log.len();

    for _ in 0..10 {
        harness.send(AppIntent::FrameTick { dt: 0.016 });
    }

    assert_eq!(harness.state.command_log.len(), logged);
}
