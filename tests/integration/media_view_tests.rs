//! Integration tests: MediaView → button bar / press timers → remote link.

use applink_hmi::adapters::log_link::LogRemoteLink;
use applink_hmi::app::events::{ButtonClass, ButtonEdge, PressKind};
use applink_hmi::config::HmiConfig;
use applink_hmi::media::{ControlVariant, MediaView, SoftButtonDescriptor};

use crate::mock_link::{LinkCall, RecordingLink};

fn make_view() -> MediaView {
    MediaView::new(&HmiConfig::default(), 77, "Radio Hosted", false)
}

fn descriptors(ids: &[u32]) -> Vec<SoftButtonDescriptor> {
    serde_json::from_str(
        &format!(
            "[{}]",
            ids.iter()
                .map(|id| format!(r#"{{"softButtonID":{id},"text":"b{id}"}}"#))
                .collect::<Vec<_>>()
                .join(",")
        ),
    )
    .unwrap()
}

// ── Variant switching ─────────────────────────────────────────

#[test]
fn version_toggle_round_trip_keeps_one_variant() {
    let mut view = make_view();
    assert_eq!(view.variant(), ControlVariant::V1);

    view.set_protocol_version(true);
    assert_eq!(view.variant(), ControlVariant::V2);

    view.set_protocol_version(false);
    assert_eq!(view.variant(), ControlVariant::V1);
}

// ── Deactivation edge ─────────────────────────────────────────

#[test]
fn falling_edge_fires_exactly_one_deactivation() {
    let mut view = make_view();
    let mut link = RecordingLink::new();

    view.set_active(true, "media.home", &mut link);
    assert_eq!(link.deactivation_count(), 0);

    view.set_active(false, "media.home", &mut link);
    assert_eq!(link.deactivation_count(), 1);
    assert_eq!(
        link.calls.last().unwrap(),
        &LinkCall::AppDeactivated {
            nav_target: "media.home".to_string(),
            app_id: 77,
            app_name: "Radio Hosted".to_string(),
        }
    );
}

#[test]
fn repeat_and_rising_observations_fire_nothing() {
    let mut view = make_view();
    let mut link = RecordingLink::new();

    // Already inactive: false → false is not an edge.
    view.set_active(false, "media.home", &mut link);
    assert_eq!(link.deactivation_count(), 0);

    // Rising edge fires nothing.
    view.set_active(true, "media.home", &mut link);
    assert_eq!(link.deactivation_count(), 0);

    // One falling edge, then repeats stay silent.
    view.set_active(false, "media.home", &mut link);
    view.set_active(false, "media.home", &mut link);
    assert_eq!(link.deactivation_count(), 1);
}

// ── Soft-button rebuild ───────────────────────────────────────

#[test]
fn rebuild_counts_match_descriptor_array() {
    let mut view = make_view();

    view.set_soft_buttons(Some(&descriptors(&[1, 2])));
    assert_eq!(view.bar().visible_count(), 3);
    let ids: Vec<u32> = view.bar().soft_buttons().iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![1, 2]);

    view.set_soft_buttons(Some(&[]));
    assert_eq!(view.bar().visible_count(), 1);
}

#[test]
fn clear_always_leaves_options_only() {
    let mut view = make_view();
    view.set_soft_buttons(Some(&descriptors(&[4, 5, 6])));
    view.clear_soft_buttons();
    assert_eq!(view.bar().visible_count(), 1);

    // Clearing an already-clear bar is harmless.
    view.clear_soft_buttons();
    assert_eq!(view.bar().visible_count(), 1);
}

// ── Press classification ──────────────────────────────────────

#[test]
fn short_press_under_threshold() {
    let mut view = make_view();
    let mut link = RecordingLink::new();
    view.set_soft_buttons(Some(&descriptors(&[9])));

    view.button_down(9, 0, &mut link);
    view.tick(500);
    view.button_up(9, 999, &mut link);

    assert_eq!(link.edges(), vec![(ButtonEdge::Down, 9), (ButtonEdge::Up, 9)]);
    assert_eq!(link.presses(), vec![(PressKind::Short, 9)]);

    // All soft-button traffic is tagged as custom-button class.
    assert!(link.calls.iter().all(|c| match c {
        LinkCall::ButtonEvent { class, .. } | LinkCall::ButtonPressed { class, .. } =>
            *class == ButtonClass::CustomButton,
        _ => true,
    }));
}

#[test]
fn long_press_at_threshold() {
    let mut view = make_view();
    let mut link = RecordingLink::new();
    view.set_soft_buttons(Some(&descriptors(&[9])));

    view.button_down(9, 0, &mut link);
    view.tick(1000);
    view.button_up(9, 1200, &mut link);

    assert_eq!(link.presses(), vec![(PressKind::Long, 9)]);
}

#[test]
fn long_press_classified_even_without_intermediate_tick() {
    let mut view = make_view();
    let mut link = RecordingLink::new();
    view.set_soft_buttons(Some(&descriptors(&[3])));

    // The host loop never ticked between the edges; press-up itself polls
    // the timer before classifying.
    view.button_down(3, 0, &mut link);
    view.button_up(3, 1500, &mut link);

    assert_eq!(link.presses(), vec![(PressKind::Long, 3)]);
}

#[test]
fn press_state_resets_between_presses() {
    let mut view = make_view();
    let mut link = RecordingLink::new();
    view.set_soft_buttons(Some(&descriptors(&[2])));

    view.button_down(2, 0, &mut link);
    view.tick(2000);
    view.button_up(2, 2000, &mut link);
    assert_eq!(link.presses(), vec![(PressKind::Long, 2)]);

    // The long timer from the first press was cancelled on press-up; a
    // quick second press must classify SHORT.
    view.button_down(2, 3000, &mut link);
    view.button_up(2, 3100, &mut link);
    assert_eq!(
        link.presses(),
        vec![(PressKind::Long, 2), (PressKind::Short, 2)]
    );
}

#[test]
fn each_button_times_its_own_press() {
    let mut view = make_view();
    let mut link = RecordingLink::new();
    view.set_soft_buttons(Some(&descriptors(&[1, 2])));

    view.button_down(1, 0, &mut link);
    view.button_down(2, 900, &mut link);
    view.tick(1100); // button 1 past threshold, button 2 not
    view.button_up(1, 1100, &mut link);
    view.button_up(2, 1150, &mut link);

    assert_eq!(
        link.presses(),
        vec![(PressKind::Long, 1), (PressKind::Short, 2)]
    );
}

#[test]
fn rebuild_drops_pending_press_timers() {
    let mut view = make_view();
    let mut link = RecordingLink::new();
    view.set_soft_buttons(Some(&descriptors(&[5])));

    view.button_down(5, 0, &mut link);
    // Host app replaces the button set mid-press; the stale press must
    // not produce an up or pressed event for the discarded element.
    view.set_soft_buttons(Some(&descriptors(&[6])));
    view.button_up(5, 2000, &mut link);

    assert_eq!(link.presses(), vec![]);
    assert_eq!(link.edges(), vec![(ButtonEdge::Down, 5)]);
}

// ── Log adapter smoke test ────────────────────────────────────

#[test]
fn log_link_accepts_full_traffic() {
    let mut view = make_view();
    let mut link = LogRemoteLink::new();

    view.set_soft_buttons(Some(&descriptors(&[1])));
    view.set_active(true, "media.home", &mut link);
    view.button_down(1, 0, &mut link);
    view.button_up(1, 50, &mut link);
    view.set_active(false, "media.home", &mut link);
}
