use seat_map_editor::{
    AppCommand, AppController, AppIntent, AppState, CommandOutcome, EditorOptions, RowBatch,
    RowPatch, SeatPatch, SectionPatch, SequentialIdGenerator,
};
use std::collections::HashSet;
use std::sync::Arc;

fn new_state() -> AppState {
    AppState::with_id_generator(Box::new(SequentialIdGenerator::new("id")))
}

/// Legt eine Sektion an und gibt ihre ID zurück.
fn create_section(controller: &mut AppController, state: &mut AppState, label: &str) -> String {
    controller
        .handle_intent(
            state,
            AppIntent::CreateSectionRequested {
                label: label.into(),
                color: "#3b82f6".into(),
            },
        )
        .expect("CreateSectionRequested sollte durchlaufen");
    state
        .map()
        .sections
        .last()
        .expect("Sektion sollte existieren")
        .id
        .clone()
}

fn add_rows(
    controller: &mut AppController,
    state: &mut AppState,
    section_id: &str,
    batch: RowBatch,
) -> CommandOutcome {
    controller
        .handle_intent(
            state,
            AppIntent::AddRowsRequested {
                section_id: section_id.into(),
                batch,
            },
        )
        .expect("AddRowsRequested sollte durchlaufen")
}

#[test]
fn test_initial_state_is_empty_untitled_map() {
    let state = new_state();

    assert_eq!(state.map().id, "id-1");
    assert_eq!(state.map().name, "untitled");
    assert!(state.map().sections.is_empty());
    assert_eq!(state.store.selection.selected_section_id, None);
    assert!(state.command_log.is_empty());
}

#[test]
fn test_create_section_and_rows_produces_expected_labels() {
    let mut controller = AppController::new();
    let mut state = new_state();

    let section_id = create_section(&mut controller, &mut state, "A");
    let outcome = add_rows(
        &mut controller,
        &mut state,
        &section_id,
        RowBatch::new("A", 3, 5),
    );
    assert_eq!(outcome, CommandOutcome::Applied);

    let section = state.map().section(&section_id).expect("Sektion vorhanden");
    assert_eq!(section.position, glam::DVec2::new(100.0, 100.0));
    assert_eq!(section.rotation, 0.0);
    assert_eq!(section.color, "#3b82f6");

    let row_labels: Vec<&str> = section.rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(row_labels, vec!["A 1", "A 2", "A 3"]);

    let seat_labels: Vec<&str> = section.rows[0]
        .seats
        .iter()
        .map(|s| s.label.as_str())
        .collect();
    assert_eq!(seat_labels, vec!["A 11", "A 12", "A 13", "A 14", "A 15"]);
    assert_eq!(state.seat_count(), 15);

    match state.command_log.last() {
        Some(AppCommand::AddRows { batch, .. }) => assert_eq!(batch.row_count, 3),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_generated_ids_are_pairwise_distinct() {
    let mut controller = AppController::new();
    let mut state = new_state();

    for i in 0..20 {
        let id = create_section(&mut controller, &mut state, &format!("S{i}"));
        add_rows(&mut controller, &mut state, &id, RowBatch::new("R", 2, 3));
    }

    let map = state.map();
    let mut ids = HashSet::new();
    assert!(ids.insert(map.id.clone()));
    for section in &map.sections {
        assert!(ids.insert(section.id.clone()), "Doppelte ID {}", section.id);
        for row in &section.rows {
            assert!(ids.insert(row.id.clone()), "Doppelte ID {}", row.id);
            for seat in &row.seats {
                assert!(ids.insert(seat.id.clone()), "Doppelte ID {}", seat.id);
            }
        }
    }
    assert_eq!(ids.len(), 1 + 20 + 20 * 2 + 20 * 2 * 3);
}

#[test]
fn test_toggle_seat_occupancy_twice_restores_value() {
    let mut controller = AppController::new();
    let mut state = new_state();
    let section_id = create_section(&mut controller, &mut state, "A");
    add_rows(&mut controller, &mut state, &section_id, RowBatch::new("A", 1, 3));

    let row_id = state.map().sections[0].rows[0].id.clone();
    let seat_id = state.map().sections[0].rows[0].seats[1].id.clone();
    let toggle = AppIntent::SeatOccupancyToggled {
        section_id: section_id.clone(),
        row_id: row_id.clone(),
        seat_id: seat_id.clone(),
    };

    controller.handle_intent(&mut state, toggle.clone()).expect("Toggle 1");
    assert!(state.map().seat(&section_id, &row_id, &seat_id).expect("Sitz").occupied);
    assert_eq!(state.occupied_count(), 1);

    controller.handle_intent(&mut state, toggle).expect("Toggle 2");
    assert!(!state.map().seat(&section_id, &row_id, &seat_id).expect("Sitz").occupied);
    assert_eq!(state.occupied_count(), 0);
}

#[test]
fn test_rotate_section_cycles_and_slider_path_is_independent() {
    let mut controller = AppController::new();
    let mut state = new_state();
    let section_id = create_section(&mut controller, &mut state, "A");

    let mut seen = Vec::new();
    for _ in 0..4 {
        controller
            .handle_intent(
                &mut state,
                AppIntent::SectionRotateRequested {
                    section_id: section_id.clone(),
                },
            )
            .expect("Rotate sollte durchlaufen");
        seen.push(state.map().sections[0].rotation);
    }
    assert_eq!(seen, vec![90.0, 180.0, 270.0, 0.0]);

    // Slider setzt einen beliebigen Winkel, der Rotate-Button dreht von dort weiter
    controller
        .handle_intent(
            &mut state,
            AppIntent::SectionEdited {
                section_id: section_id.clone(),
                patch: SectionPatch {
                    rotation: Some(45.0),
                    ..Default::default()
                },
            },
        )
        .expect("Slider-Update");
    controller
        .handle_intent(&mut state, AppIntent::SectionRotateRequested { section_id })
        .expect("Rotate");
    approx::assert_relative_eq!(state.map().sections[0].rotation, 135.0);
}

#[test]
fn test_update_seat_shares_untouched_subtrees() {
    let mut controller = AppController::new();
    let mut state = new_state();
    let a = create_section(&mut controller, &mut state, "A");
    let b = create_section(&mut controller, &mut state, "B");
    add_rows(&mut controller, &mut state, &a, RowBatch::new("A", 2, 2));
    add_rows(&mut controller, &mut state, &b, RowBatch::new("B", 2, 2));

    let before = state.store.snapshot();
    let row_id = before.sections[0].rows[1].id.clone();
    let seat_id = before.sections[0].rows[1].seats[0].id.clone();

    let outcome = controller
        .handle_intent(
            &mut state,
            AppIntent::SeatEdited {
                section_id: a.clone(),
                row_id,
                seat_id,
                patch: SeatPatch {
                    label: Some("VIP".into()),
                    ..Default::default()
                },
            },
        )
        .expect("SeatEdited sollte durchlaufen");
    assert_eq!(outcome, CommandOutcome::Applied);

    let after = state.store.snapshot();
    assert!(Arc::ptr_eq(&before.sections[1], &after.sections[1]));
    assert!(!Arc::ptr_eq(&before.sections[0], &after.sections[0]));
    assert!(Arc::ptr_eq(&before.sections[0].rows[0], &after.sections[0].rows[0]));
    assert!(Arc::ptr_eq(
        &before.sections[0].rows[1].seats[1],
        &after.sections[0].rows[1].seats[1]
    ));
    assert_eq!(after.sections[0].rows[1].seats[0].label, "VIP");
    assert_ne!(before.sections[0].rows[1].seats[0].label, "VIP");
}

#[test]
fn test_missing_targets_are_reported_and_leave_tree_unchanged() {
    let mut controller = AppController::new();
    let mut state = new_state();
    let section_id = create_section(&mut controller, &mut state, "A");
    let before = state.store.snapshot();

    let intents = vec![
        AppIntent::SectionEdited {
            section_id: "gone".into(),
            patch: SectionPatch::position(glam::DVec2::ZERO),
        },
        AppIntent::SectionDeleteRequested {
            section_id: "gone".into(),
        },
        AppIntent::SectionRotateRequested {
            section_id: "gone".into(),
        },
        AppIntent::RowEdited {
            section_id: section_id.clone(),
            row_id: "gone".into(),
            patch: RowPatch::default(),
        },
        AppIntent::RowDeleteRequested {
            section_id: section_id.clone(),
            row_id: "gone".into(),
        },
        AppIntent::SeatOccupancyToggled {
            section_id: section_id.clone(),
            row_id: "gone".into(),
            seat_id: "gone".into(),
        },
        AppIntent::AddRowsRequested {
            section_id: "gone".into(),
            batch: RowBatch::new("X", 1, 1),
        },
    ];

    for intent in intents {
        let outcome = controller
            .handle_intent(&mut state, intent)
            .expect("Referenzfehler sind keine harten Fehler");
        assert_eq!(outcome, CommandOutcome::TargetMissing);
        assert!(Arc::ptr_eq(&before, &state.store.snapshot()));
    }
}

#[test]
fn test_delete_section_clears_only_matching_selection() {
    let mut controller = AppController::new();
    let mut state = new_state();
    let a = create_section(&mut controller, &mut state, "A");
    let b = create_section(&mut controller, &mut state, "B");
    add_rows(&mut controller, &mut state, &a, RowBatch::new("A", 1, 2));

    let row_id = state.map().sections[0].rows[0].id.clone();
    let seat_id = state.map().sections[0].rows[0].seats[0].id.clone();
    for intent in [
        AppIntent::SectionSelected {
            section_id: Some(a.clone()),
        },
        AppIntent::RowSelected {
            row_id: Some(row_id),
        },
        AppIntent::SeatSelectionToggled { seat_id },
    ] {
        controller.handle_intent(&mut state, intent).expect("Auswahl");
    }

    // Andere Sektion löschen: Auswahl bleibt
    controller
        .handle_intent(&mut state, AppIntent::SectionDeleteRequested { section_id: b })
        .expect("Delete B");
    assert_eq!(state.store.selection.selected_section_id.as_deref(), Some(a.as_str()));
    assert_eq!(state.store.selection.selected_seat_ids.len(), 1);

    // Ausgewählte Sektion löschen: Auswahl im Teilbaum wird geleert
    controller
        .handle_intent(
            &mut state,
            AppIntent::SectionDeleteRequested {
                section_id: a.clone(),
            },
        )
        .expect("Delete A");
    assert_eq!(state.store.selection.selected_section_id, None);
    assert_eq!(state.store.selection.selected_row_id, None);
    assert!(state.store.selection.selected_seat_ids.is_empty());
    assert!(state.map().sections.is_empty());
}

#[test]
fn test_delete_row_clears_selected_row_only_when_matching() {
    let mut controller = AppController::new();
    let mut state = new_state();
    let section_id = create_section(&mut controller, &mut state, "A");
    add_rows(&mut controller, &mut state, &section_id, RowBatch::new("A", 2, 1));

    let first = state.map().sections[0].rows[0].id.clone();
    let second = state.map().sections[0].rows[1].id.clone();
    controller
        .handle_intent(
            &mut state,
            AppIntent::RowSelected {
                row_id: Some(first.clone()),
            },
        )
        .expect("Auswahl");

    controller
        .handle_intent(
            &mut state,
            AppIntent::RowDeleteRequested {
                section_id: section_id.clone(),
                row_id: second,
            },
        )
        .expect("Delete zweite Reihe");
    assert_eq!(state.store.selection.selected_row_id.as_deref(), Some(first.as_str()));

    controller
        .handle_intent(
            &mut state,
            AppIntent::RowDeleteRequested {
                section_id,
                row_id: first,
            },
        )
        .expect("Delete erste Reihe");
    assert_eq!(state.store.selection.selected_row_id, None);
    assert!(state.map().sections[0].rows.is_empty());
}

#[test]
fn test_seat_selection_toggle_and_clear() {
    let mut controller = AppController::new();
    let mut state = new_state();

    for seat in ["s1", "s2", "s1"] {
        controller
            .handle_intent(
                &mut state,
                AppIntent::SeatSelectionToggled {
                    seat_id: seat.into(),
                },
            )
            .expect("Toggle");
    }
    let selected: Vec<&str> = state
        .store
        .selection
        .selected_seat_ids
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(selected, vec!["s2"]);

    controller
        .handle_intent(&mut state, AppIntent::SeatSelectionCleared)
        .expect("Clear");
    assert!(state.store.selection.selected_seat_ids.is_empty());
}

#[test]
fn test_rename_and_reset_map() {
    let mut controller = AppController::new();
    let mut state = new_state();
    let original_id = state.map().id.clone();
    create_section(&mut controller, &mut state, "A");

    controller
        .handle_intent(
            &mut state,
            AppIntent::MapRenameRequested {
                name: "Teatro".into(),
            },
        )
        .expect("Rename");
    assert_eq!(state.map().name, "Teatro");
    assert_eq!(state.map().id, original_id);

    controller
        .handle_intent(
            &mut state,
            AppIntent::SectionSelected {
                section_id: Some("x".into()),
            },
        )
        .expect("Auswahl");
    controller
        .handle_intent(&mut state, AppIntent::NewMapRequested)
        .expect("Reset");

    assert_ne!(state.map().id, original_id);
    assert_eq!(state.map().name, "untitled");
    assert!(state.map().sections.is_empty());
    assert_eq!(state.store.selection.selected_section_id, None);
}

#[test]
fn test_row_batch_validation_is_left_to_the_dialog() {
    let mut controller = AppController::new();
    let mut state = new_state();
    let section_id = create_section(&mut controller, &mut state, "A");
    let batch = RowBatch::new("A", 60, 1);

    assert!(batch.validate(&state.options).is_err());

    // Der Kern prüft keine Grenzen selbst
    add_rows(&mut controller, &mut state, &section_id, batch);
    assert_eq!(state.map().sections[0].rows.len(), 60);
}

#[test]
fn test_blank_section_color_falls_back_to_configured_default() {
    let mut controller = AppController::new();
    let options = EditorOptions {
        section_default_color: "#ec4899".into(),
        ..Default::default()
    };
    let mut state = AppState::with_parts(options, Box::new(SequentialIdGenerator::new("c")));

    for color in ["  ", "#10b981"] {
        controller
            .handle_intent(
                &mut state,
                AppIntent::CreateSectionRequested {
                    label: "A".into(),
                    color: color.into(),
                },
            )
            .expect("CreateSectionRequested sollte durchlaufen");
    }

    let colors: Vec<&str> = state.map().sections.iter().map(|s| s.color.as_str()).collect();
    assert_eq!(colors, vec!["#ec4899", "#10b981"]);
}
