//! Integration tests for the startup menu

use confab::chat::{Transcript, TranscriptStore};
use confab::cli::{run_menu, MenuOutcome};
use confab::prompt::Tint;
use tempfile::TempDir;

#[path = "common/mod.rs"]
mod common;

use common::{script, RecordingSink};

/// A store holding one empty transcript per name.
fn seeded_store(names: &[&str]) -> (TempDir, TranscriptStore) {
    let dir = TempDir::new().unwrap();
    let store = TranscriptStore::open(dir.path()).unwrap();
    for name in names {
        store.save(name, &Transcript::new(None)).unwrap();
    }
    (dir, store)
}

#[test]
fn test_empty_store_goes_straight_to_naming() {
    let (_dir, store) = seeded_store(&[]);
    let mut source = script(&["plans"]);
    let mut sink = RecordingSink::new();

    let outcome = run_menu(&store, &mut source, &mut sink).unwrap();

    match outcome {
        MenuOutcome::New { name } => assert_eq!(name, "plans"),
        other => panic!("expected a new conversation, got {:?}", other),
    }
    assert!(sink.contains("No conversations saved yet. Starting a new one."));
    assert!(sink.contains("Enter a name for the new conversation:"));
    assert!(
        !sink.contains("Choose an option:"),
        "the action menu should be skipped when nothing is saved"
    );
}

#[test]
fn test_seeded_store_renders_the_conversation_table() {
    let (_dir, store) = seeded_store(&["alpha", "beta"]);
    let mut source = script(&["exit"]);
    let mut sink = RecordingSink::new();

    let outcome = run_menu(&store, &mut source, &mut sink).unwrap();

    assert!(matches!(outcome, MenuOutcome::Exit));
    assert!(sink.contains("Saved conversations:"));
    assert!(sink.contains("Conversation"));
    assert!(sink.contains("Last updated"));
    assert!(sink.contains("alpha"));
    assert!(sink.contains("beta"));
    assert!(sink.contains("1: New"));
    assert!(sink.contains("4: Exit"));
}

#[test]
fn test_load_by_row_number() {
    let (_dir, store) = seeded_store(&["alpha", "beta"]);
    let mut source = script(&["load", "2"]);
    let mut sink = RecordingSink::new();

    let outcome = run_menu(&store, &mut source, &mut sink).unwrap();

    match outcome {
        MenuOutcome::Resume { name, transcript } => {
            assert_eq!(name, "beta", "rows are sorted by name; 2 is beta");
            assert!(transcript.messages.is_empty());
        }
        other => panic!("expected a resumed conversation, got {:?}", other),
    }
}

#[test]
fn test_menu_actions_answer_to_their_display_numbers() {
    let (_dir, store) = seeded_store(&["alpha"]);
    let mut source = script(&["2", "1"]);
    let mut sink = RecordingSink::new();

    let outcome = run_menu(&store, &mut source, &mut sink).unwrap();

    match outcome {
        MenuOutcome::Resume { name, .. } => assert_eq!(name, "alpha"),
        other => panic!("expected a resumed conversation, got {:?}", other),
    }
}

#[test]
fn test_delete_confirmed_removes_the_transcript() {
    let (_dir, store) = seeded_store(&["alpha", "beta"]);
    let mut source = script(&["delete", "1", "yes", "exit"]);
    let mut sink = RecordingSink::new();

    let outcome = run_menu(&store, &mut source, &mut sink).unwrap();

    assert!(matches!(outcome, MenuOutcome::Exit));
    assert!(sink.contains("Delete 'alpha'?"));
    assert!(sink.contains("Deleted 'alpha'."));
    assert_eq!(store.list().unwrap(), vec!["beta".to_string()]);
}

#[test]
fn test_delete_declined_keeps_the_transcript() {
    let (_dir, store) = seeded_store(&["alpha"]);
    let mut source = script(&["delete", "1", "no", "exit"]);
    let mut sink = RecordingSink::new();

    let outcome = run_menu(&store, &mut source, &mut sink).unwrap();

    assert!(matches!(outcome, MenuOutcome::Exit));
    assert!(sink.contains("Nothing deleted."));
    assert_eq!(store.list().unwrap(), vec!["alpha".to_string()]);
}

#[test]
fn test_deleting_the_last_conversation_starts_a_new_one() {
    let (_dir, store) = seeded_store(&["solo"]);
    let mut source = script(&["delete", "1", "yes", "plans"]);
    let mut sink = RecordingSink::new();

    let outcome = run_menu(&store, &mut source, &mut sink).unwrap();

    match outcome {
        MenuOutcome::New { name } => assert_eq!(name, "plans"),
        other => panic!("expected a new conversation, got {:?}", other),
    }
    assert!(sink.contains("Deleted 'solo'."));
    assert!(sink.contains("No conversations saved yet. Starting a new one."));
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn test_unrecognized_action_gets_a_diagnostic_and_a_retry() {
    let (_dir, store) = seeded_store(&["alpha"]);
    let mut source = script(&["banana", "4"]);
    let mut sink = RecordingSink::new();

    let outcome = run_menu(&store, &mut source, &mut sink).unwrap();

    assert!(matches!(outcome, MenuOutcome::Exit));
    let reds = sink
        .lines
        .iter()
        .filter(|(_, tint)| *tint == Some(Tint::Red))
        .count();
    assert_eq!(reds, 1);
}

#[test]
fn test_new_conversation_names_are_revalidated() {
    let (_dir, store) = seeded_store(&["alpha"]);
    let mut source = script(&["new", "../evil", "plans"]);
    let mut sink = RecordingSink::new();

    let outcome = run_menu(&store, &mut source, &mut sink).unwrap();

    match outcome {
        MenuOutcome::New { name } => assert_eq!(name, "plans"),
        other => panic!("expected a new conversation, got {:?}", other),
    }
    assert!(sink.contains("path separators"));
}
