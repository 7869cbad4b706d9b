// Integration tests for playback sessions and JSON output

use clap::Parser;
use sortty::config::{Cli, Settings, DEFAULT_DATA};
use sortty::dump::dump_run;
use sortty::playback::{FrameKind, PlaybackError, Session, Stats, Subject};
use sortty::sorting::Algorithm;
use sortty::structures::{Action, StructureKind};

const LIMIT: usize = 16 * 1024 * 1024;

fn settings(args: &[&str]) -> Settings {
    let cli = Cli::parse_from(std::iter::once("sortty").chain(args.iter().copied()));
    Settings::from_cli(cli).expect("valid arguments")
}

#[test]
fn test_backward_then_forward_replays_identical_frames() {
    let mut session = Session::new(LIMIT);
    session.start_sort(Algorithm::Insertion, &DEFAULT_DATA).unwrap();

    let mut played = vec![session.current().unwrap().clone()];
    for _ in 0..12 {
        played.push(session.step_forward().unwrap().clone());
    }
    assert_eq!(session.position(), 12);

    for expected in played.iter().rev().skip(1) {
        assert_eq!(session.step_backward().unwrap(), expected);
    }
    assert_eq!(session.step_backward().unwrap_err(), PlaybackError::AtStart);

    let recorded = session.total_frames();
    for expected in played.iter().skip(1) {
        assert_eq!(session.step_forward().unwrap(), expected);
    }
    // replaying does not pull new steps
    assert_eq!(session.total_frames(), recorded);
}

#[test]
fn test_stats_count_comparisons_and_swaps() {
    let mut session = Session::new(LIMIT);
    session.start_sort(Algorithm::Bubble, &[2, 1]).unwrap();

    let last = session.jump_to_end().unwrap();
    assert_eq!(last.kind, FrameKind::Complete);
    assert_eq!(last.caption, "Sorting complete");
    assert_eq!(
        last.stats,
        Stats {
            steps: 2,
            comparisons: 1,
            swaps: 1
        }
    );
    assert!(last.marks.is_empty());
    assert!(session.is_finished());
    assert!(!session.is_live());
}

#[test]
fn test_merge_sort_final_frame_is_sorted() {
    let mut session = Session::new(LIMIT);
    session.start_sort(Algorithm::Merge, &[4, 3, 2, 1]).unwrap();
    let last = session.jump_to_end().unwrap();
    assert_eq!(last.cells, vec![Some(1), Some(2), Some(3), Some(4)]);
}

#[test]
fn test_history_limit_stops_recording() {
    let limit = 4096;
    let mut session = Session::new(limit);
    session.start_sort(Algorithm::Bubble, &DEFAULT_DATA).unwrap();

    let err = session.jump_to_end().unwrap_err();
    assert!(matches!(err, PlaybackError::HistoryLimitExceeded { limit: 4096, .. }));
    assert!(session.memory_usage() <= limit);
    assert!(session.is_live());

    // what was recorded can still be navigated
    let recorded = session.total_frames();
    assert!(recorded > 1);
    assert_eq!(session.position(), recorded - 1);
    assert!(session.rewind_to_start().is_ok());
}

#[test]
fn test_initial_frame_must_fit() {
    let mut session = Session::new(1);
    let err = session.start_sort(Algorithm::Quick, &[1, 2, 3]).unwrap_err();
    assert_eq!(err, PlaybackError::HistoryLimitExceeded { current: 0, limit: 1 });
    assert!(session.current().is_none());
}

#[test]
fn test_operation_playback_starts_from_previous_state() {
    let mut session = Session::new(LIMIT);
    let mut stack = StructureKind::Stack.create();
    stack.seed(&[1, 2]);

    session.start_operation(stack.as_mut(), Action::Insert(3)).unwrap();
    assert_eq!(
        session.subject(),
        Some(Subject::Operation {
            structure: StructureKind::Stack,
            action: Action::Insert(3)
        })
    );
    assert_eq!(session.current().unwrap().cells, vec![Some(1), Some(2)]);

    let step = session.step_forward().unwrap();
    assert_eq!(step.caption, "Pushed 3 onto stack");
    assert_eq!(step.kind, FrameKind::Operation);

    let done = session.step_forward().unwrap();
    assert_eq!(done.caption, "Animation complete");
    assert_eq!(done.cells, vec![Some(1), Some(2), Some(3)]);
    assert_eq!(session.step_forward().unwrap_err(), PlaybackError::AtEnd);
}

#[test]
fn test_starting_a_new_run_drops_the_old_one() {
    let mut session = Session::new(LIMIT);
    session.start_sort(Algorithm::Bubble, &DEFAULT_DATA).unwrap();
    session.step_forward().unwrap();
    session.start_sort(Algorithm::Selection, &[2, 1]).unwrap();
    assert_eq!(session.position(), 0);
    assert_eq!(session.total_frames(), 1);
    assert_eq!(session.subject(), Some(Subject::Sort(Algorithm::Selection)));
}

#[test]
fn test_dump_writes_one_json_object_per_frame() {
    let settings = settings(&["--algorithm", "quick", "--data", "3,1,2"]);
    let mut out = Vec::new();
    let written = dump_run(&settings, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    // initial + five steps + complete
    assert_eq!(written, 7);
    assert_eq!(lines.len(), 7);

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["kind"], "Initial");
    assert_eq!(first["cells"], serde_json::json!([3, 1, 2]));

    let swap: serde_json::Value = serde_json::from_str(lines[4]).unwrap();
    assert_eq!(swap["kind"], "Swap");
    assert_eq!(swap["marks"], serde_json::json!([0, 1]));

    let last: serde_json::Value = serde_json::from_str(lines[6]).unwrap();
    assert_eq!(last["cells"], serde_json::json!([1, 2, 3]));
    assert_eq!(last["stats"]["swaps"], 2);
}

#[test]
fn test_dump_structure_demo() {
    let settings = settings(&["--mode", "structure", "--structure", "tree", "--seed", "3"]);
    let mut out = Vec::new();
    let written = dump_run(&settings, &mut out).unwrap();
    // initial, one visit per seeded node, complete
    assert_eq!(written, 1 + 7 + 1);
}

#[test]
fn test_dump_stack_demo_peeks_at_top() {
    let settings = settings(&["--mode", "structure", "--structure", "stack", "--seed", "3"]);
    let mut out = Vec::new();
    let written = dump_run(&settings, &mut out).unwrap();
    // initial, peek, complete
    assert_eq!(written, 3);

    let text = String::from_utf8(out).unwrap();
    let frames: Vec<serde_json::Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(frames[0]["caption"], "Stack: demo");
    assert_eq!(frames[1]["kind"], "Operation");
    assert!(frames[1]["caption"].as_str().unwrap().starts_with("Peeked at"));
    assert_eq!(frames[1]["marks"], serde_json::json!([6]));
}

#[test]
fn test_empty_tree_demo_narrates() {
    let mut session = Session::new(LIMIT);
    let mut tree = StructureKind::BinaryTree.create();
    session.start_demo(tree.as_mut()).unwrap();
    assert_eq!(session.current().unwrap().caption, "Binary Tree is empty");
    assert_eq!(session.step_forward().unwrap().caption, "Tree is empty");
    assert_eq!(session.step_forward().unwrap().kind, FrameKind::Complete);
}
