use crate::presentation::scene::{LabelScene, TapOutcome, WorldPoint};

const HIT: WorldPoint = WorldPoint {
    x: 0.1,
    y: -0.2,
    z: -1.5,
};

#[test]
fn test_tap_places_label_at_hit_point() {
    let mut scene = LabelScene::new();

    let outcome = scene.on_tap(Some(HIT), "Honda Civic");

    match outcome {
        TapOutcome::Placed(annotation) => {
            assert_eq!(annotation.text, "Honda Civic");
            assert_eq!(annotation.position, HIT);
        }
        _ => panic!("Unexpected outcome: {:?}", outcome),
    }
    assert_eq!(scene.annotations().len(), 1);
    assert!(scene.is_learn_more_visible());
}

#[test]
fn test_tap_replaces_previous_label() {
    let mut scene = LabelScene::new();
    scene.on_tap(Some(HIT), "Honda Civic");

    scene.on_tap(Some(HIT), "Tesla Model 3");

    assert_eq!(scene.annotations().len(), 1);
    assert_eq!(scene.annotations()[0].text, "Tesla Model 3");
}

#[test]
fn test_tap_without_label_clears_scene() {
    let mut scene = LabelScene::new();
    scene.on_tap(Some(HIT), "Honda Civic");

    let outcome = scene.on_tap(Some(HIT), "");

    assert_eq!(outcome, TapOutcome::Cleared);
    assert!(scene.annotations().is_empty());
    assert!(scene.is_learn_more_visible());
}

#[test]
fn test_tap_without_hit_changes_nothing() {
    let mut scene = LabelScene::new();
    scene.on_tap(Some(HIT), "Honda Civic");

    let outcome = scene.on_tap(None, "Tesla Model 3");

    assert_eq!(outcome, TapOutcome::NoHit);
    assert_eq!(scene.annotations()[0].text, "Honda Civic");
}
