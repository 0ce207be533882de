//! Property-based tests for the list-state reducer
//!
//! Tests invariants:
//! - Selection equals an insertion-ordered model of the tick events
//! - `action_button_disabled` iff bulk mode and nothing ticked
//! - `ArchiveErr` leaves everything but `loading` untouched
//! - `SetStatus` always yields no search string and the default sort
//! - `next`/`prev` are inverse on status and sort tags

use proptest::prelude::*;

use crate::core::campaign::{
    CampaignListState, CampaignStatus, CheckedPayload, ListEvent, SortBy,
};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Small id pool so ticks and unticks collide often.
fn arb_campaign_id() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("c1".to_string()),
        Just("c2".to_string()),
        Just("c3".to_string()),
        Just("c4".to_string()),
    ]
}

fn arb_status() -> impl Strategy<Value = CampaignStatus> {
    prop::sample::select(CampaignStatus::ALL.to_vec())
}

fn arb_sort() -> impl Strategy<Value = SortBy> {
    prop::sample::select(SortBy::ALL.to_vec())
}

fn arb_toggle() -> impl Strategy<Value = ListEvent> {
    (arb_campaign_id(), any::<bool>())
        .prop_map(|(id, checked)| ListEvent::ToggleChecked(CheckedPayload::new(id, checked)))
}

fn arb_event() -> impl Strategy<Value = ListEvent> {
    prop_oneof![
        arb_status().prop_map(ListEvent::SetStatus),
        arb_sort().prop_map(ListEvent::SetSort),
        "[a-z ]{0,12}".prop_map(ListEvent::SetSearch),
        Just(ListEvent::CancelSearch),
        arb_toggle(),
        Just(ListEvent::ToggleBulk),
        Just(ListEvent::BeginArchive),
        Just(ListEvent::ArchiveOk),
        "[a-z]{1,8}".prop_map(ListEvent::ArchiveErr),
    ]
}

/// Reference model of the selection: ordered, no duplicates.
fn apply_model(model: &mut Vec<String>, event: &ListEvent) {
    match event {
        ListEvent::ToggleChecked(CheckedPayload {
            campaign_id,
            checked: true,
        }) => model.retain(|id| id != campaign_id),
        ListEvent::ToggleChecked(CheckedPayload {
            campaign_id,
            checked: false,
        }) => {
            if !model.contains(campaign_id) {
                model.push(campaign_id.clone());
            }
        }
        ListEvent::ArchiveOk => model.clear(),
        _ => {}
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_selection_matches_ordered_model(events in prop::collection::vec(arb_event(), 0..60)) {
        let mut state = CampaignListState::new();
        let mut model = Vec::new();

        for event in events {
            apply_model(&mut model, &event);
            state.reduce(event);
            prop_assert_eq!(state.archive_ids(), model.clone());
        }
    }

    #[test]
    fn prop_action_button_disabled_iff_bulk_and_empty(events in prop::collection::vec(arb_event(), 0..60)) {
        let mut state = CampaignListState::new();
        for event in events {
            state.reduce(event);
            prop_assert_eq!(
                state.action_button_disabled(),
                state.bulk_mode && state.selection.is_empty()
            );
        }
    }

    #[test]
    fn prop_archive_failure_only_clears_loading(
        events in prop::collection::vec(arb_event(), 0..40),
        message in "[a-z]{1,8}",
    ) {
        let mut state = CampaignListState::new();
        for event in events {
            state.reduce(event);
        }
        state.reduce(ListEvent::BeginArchive);

        let mut expected = state.clone();
        expected.loading = false;

        state.reduce(ListEvent::ArchiveErr(message));
        prop_assert_eq!(state, expected);
    }

    #[test]
    fn prop_status_change_drops_search_and_resets_sort(
        events in prop::collection::vec(arb_event(), 0..40),
        status in arb_status(),
    ) {
        let mut state = CampaignListState::new();
        for event in events {
            state.reduce(event);
        }
        state.reduce(ListEvent::SetStatus(status));

        prop_assert_eq!(state.filter.status, status);
        prop_assert_eq!(state.filter.search_string, None);
        prop_assert_eq!(state.sort_by, SortBy::DEFAULT);
    }

    #[test]
    fn prop_begin_archive_only_sets_loading(events in prop::collection::vec(arb_event(), 0..40)) {
        let mut state = CampaignListState::new();
        for event in events {
            state.reduce(event);
        }
        let mut expected = state.clone();
        expected.loading = true;

        state.reduce(ListEvent::BeginArchive);
        prop_assert_eq!(state, expected);
    }

    #[test]
    fn prop_cycling_is_reversible(status in arb_status(), sort in arb_sort()) {
        prop_assert_eq!(status.next().prev(), status);
        prop_assert_eq!(status.prev().next(), status);
        prop_assert_eq!(sort.next().prev(), sort);
        prop_assert_eq!(sort.prev().next(), sort);
    }
}
