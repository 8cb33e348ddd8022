use super::*;

// =============================================================
// decoration_class
// =============================================================

#[test]
fn decoration_class_appends_extra() {
    assert_eq!(decoration_class("decoration leaf", "hero-leaf"), "decoration leaf hero-leaf");
}

#[test]
fn decoration_class_without_extra_has_no_trailing_space() {
    assert_eq!(decoration_class("wave", ""), "wave");
    assert_eq!(decoration_class("wave", "   "), "wave");
}

#[test]
fn decoration_class_keeps_multiple_extra_classes() {
    assert_eq!(
        decoration_class("decoration butterfly", "float-4 slow"),
        "decoration butterfly float-4 slow"
    );
}

// =============================================================
// Style helpers
// =============================================================

#[test]
fn mirror_style_flips_horizontally() {
    assert_eq!(mirror_style(true), "transform: scaleX(-1)");
    assert_eq!(mirror_style(false), "transform: none");
}

#[test]
fn wave_style_rotates_half_turn() {
    assert_eq!(wave_style(true), "transform: rotate(180deg)");
    assert_eq!(wave_style(false), "transform: none");
}

#[test]
fn circle_style_sets_square_pixels() {
    assert_eq!(circle_style(300), "width: 300px; height: 300px");
    assert_eq!(circle_style(CIRCLE_DEFAULT_SIZE), "width: 200px; height: 200px");
}

#[test]
fn style_helpers_are_deterministic() {
    assert_eq!(circle_style(42), circle_style(42));
    assert_eq!(mirror_style(true), mirror_style(true));
}

// =============================================================
// FLOATING_CLUSTER
// =============================================================

#[test]
fn floating_cluster_has_six_numbered_members() {
    let classes: Vec<_> = FLOATING_CLUSTER.iter().map(|(class, _)| *class).collect();
    assert_eq!(classes, ["float-1", "float-2", "float-3", "float-4", "float-5", "float-6"]);
}

#[test]
fn floating_cluster_mixes_leaves_and_butterflies() {
    let butterflies = FLOATING_CLUSTER
        .iter()
        .filter(|(_, o)| matches!(o, Ornament::Butterfly { .. }))
        .count();
    assert_eq!(butterflies, 2);
    assert_eq!(FLOATING_CLUSTER[1].1, Ornament::Leaf { size: 45, flip: true });
}
