use super::Harness;
use glam::Vec3;
use linkage_editor::AppIntent;

fn joint_color(harness: &Harness, index: usize) -> [f32; 4] {
    harness
        .state
        .chain
        .as_ref()
        .and_then(|chain| chain.get(index))
        .map(|joint| joint.color)
        .expect("Gelenk vorhanden")
}

#[test]
fn test_click_selects_and_second_click_deselects() {
    let mut harness = Harness::unit_chain(2);
    let default_color = harness.state.options.joint_color_default;
    let selected_color = harness.state.options.joint_color_selected;

    harness.send(AppIntent::JointClicked { index: 1 });
    assert_eq!(harness.state.selection.selected_index, Some(1));
    assert_eq!(joint_color(&harness, 1), selected_color);

    harness.send(AppIntent::JointClicked { index: 1 });
    assert_eq!(harness.state.selection.selected_index, None);
    assert_eq!(joint_color(&harness, 1), default_color);
}

#[test]
fn test_pick_ray_selects_joint_under_cursor() {
    let mut harness = Harness::unit_chain(2);

    harness.send(AppIntent::JointPickRequested {
        ray_origin: Vec3::new(0.0, 5.0, 1.0),
        ray_direction: Vec3::NEG_Y,
    });

    assert_eq!(harness.state.selection.selected_index, Some(1));
}

#[test]
fn test_pick_ray_prefers_front_most_joint() {
    let mut harness = Harness::unit_chain(2);

    // Strahl entlang der Kette: Gelenk 2 liegt dem Ursprung am nächsten
    harness.send(AppIntent::JointPickRequested {
        ray_origin: Vec3::new(0.0, 0.0, 10.0),
        ray_direction: Vec3::NEG_Z,
    });

    assert_eq!(harness.state.selection.selected_index, Some(2));
}

#[test]
fn test_pick_miss_keeps_selection() {
    let mut harness = Harness::unit_chain(2);
    harness.send(AppIntent::JointClicked { index: 2 });

    harness.send(AppIntent::JointPickRequested {
        ray_origin: Vec3::new(50.0, 5.0, 50.0),
        ray_direction: Vec3::NEG_Y,
    });

    assert_eq!(harness.state.selection.selected_index, Some(2));
}

#[test]
fn test_switching_selection_resets_controls() {
    let mut harness = Harness::unit_chain(2);
    harness.send(AppIntent::JointClicked { index: 1 });
    harness.send(AppIntent::TranslationControlChanged { value: 1.0 });
    harness.send(AppIntent::RotationControlChanged { value: 1.0 });

    harness.send(AppIntent::JointClicked { index: 2 });

    assert_eq!(harness.state.manipulator.translation_value, 0.0);
    assert_eq!(harness.state.manipulator.rotation_value, 0.0);
    assert_eq!(
        joint_color(&harness, 1),
        harness.state.options.joint_color_default
    );
}

#[test]
fn test_clear_selection_restores_highlight() {
    let mut harness = Harness::unit_chain(2);
    harness.send(AppIntent::JointClicked { index: 2 });

    harness.send(AppIntent::SelectionClearRequested);

    assert_eq!(harness.state.selection.selected_index, None);
    assert_eq!(harness.state.selection.original_color, None);
    assert_eq!(
        joint_color(&harness, 2),
        harness.state.options.joint_color_default
    );
}

#[test]
fn test_out_of_range_click_is_ignored() {
    let mut harness = Harness::unit_chain(1);

    harness.send(AppIntent::JointClicked { index: 9 });

    assert_eq!(harness.state.selection.selected_index, None);
}
