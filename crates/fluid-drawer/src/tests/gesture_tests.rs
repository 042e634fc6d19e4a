use super::*;

fn recognizer_at_origin() -> DragRecognizer {
    let mut recognizer = DragRecognizer::new();
    recognizer.begin(Point::new(100.0, 500.0));
    recognizer
}

#[test]
fn vertical_downward_move_claims() {
    let mut recognizer = recognizer_at_origin();
    let decision = recognizer.on_move(Point::new(102.0, 540.0));
    assert_eq!(decision, MoveDecision::Claim { dy: 40.0 });
    assert!(recognizer.is_claimed());
}

#[test]
fn horizontal_dominant_move_passes_through() {
    let mut recognizer = recognizer_at_origin();
    let decision = recognizer.on_move(Point::new(150.0, 520.0));
    assert_eq!(decision, MoveDecision::PassThrough);
    assert!(!recognizer.is_claimed());
}

#[test]
fn equal_axes_move_passes_through() {
    // |dx| == |dy| is not predominantly vertical.
    let mut recognizer = recognizer_at_origin();
    let decision = recognizer.on_move(Point::new(130.0, 530.0));
    assert_eq!(decision, MoveDecision::PassThrough);
}

#[test]
fn upward_move_passes_through() {
    let mut recognizer = recognizer_at_origin();
    let decision = recognizer.on_move(Point::new(101.0, 460.0));
    assert_eq!(decision, MoveDecision::PassThrough);
    assert!(!recognizer.is_claimed());
}

#[test]
fn claim_test_reevaluates_on_every_move() {
    let mut recognizer = recognizer_at_origin();
    assert_eq!(
        recognizer.on_move(Point::new(140.0, 505.0)),
        MoveDecision::PassThrough
    );
    // Deltas are measured from the original down position.
    assert_eq!(
        recognizer.on_move(Point::new(103.0, 560.0)),
        MoveDecision::Claim { dy: 60.0 }
    );
}

#[test]
fn release_without_claim_passes() {
    let mut recognizer = recognizer_at_origin();
    recognizer.on_move(Point::new(150.0, 505.0));
    assert_eq!(recognizer.on_release(), ReleaseDecision::Pass);
    assert!(!recognizer.is_tracking());
}

#[test]
fn release_at_threshold_settles_back() {
    let mut recognizer = recognizer_at_origin();
    recognizer.on_move(Point::new(100.0, 500.0 + DISMISS_DRAG_DISTANCE));
    assert_eq!(recognizer.on_release(), ReleaseDecision::SettleBack);
}

#[test]
fn release_past_threshold_dismisses() {
    let mut recognizer = recognizer_at_origin();
    recognizer.on_move(Point::new(100.0, 701.0));
    assert_eq!(recognizer.on_release(), ReleaseDecision::Dismiss);
    assert!(!recognizer.is_tracking());
}

#[test]
fn claimed_drag_keeps_tracking_negative_deltas_without_applying() {
    let mut recognizer = recognizer_at_origin();
    recognizer.on_move(Point::new(100.0, 550.0));
    // Moving back above the origin still tracks; the drawer just does
    // not move the panel for non-positive deltas.
    assert_eq!(
        recognizer.on_move(Point::new(100.0, 480.0)),
        MoveDecision::Track { dy: -20.0 }
    );
    assert_eq!(recognizer.on_release(), ReleaseDecision::SettleBack);
}

#[test]
fn cancel_resets_tracking() {
    let mut recognizer = recognizer_at_origin();
    recognizer.on_move(Point::new(100.0, 550.0));
    recognizer.cancel();
    assert!(!recognizer.is_tracking());
    assert_eq!(recognizer.on_release(), ReleaseDecision::Pass);
}
