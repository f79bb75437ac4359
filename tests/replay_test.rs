// ABOUTME: Integration tests for offline landmark stream replay
// ABOUTME: Exercises stream parsing, segment reporting, timing, and error cases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{elbow_frame, extended_arm, flexed_arm, frame_line, shoulder_frame};
use std::fs::File;
use std::io::{BufReader, Cursor, Write};
use tempfile::NamedTempFile;
use trackg::errors::ErrorCode;
use trackg::exercises::{ExerciseKind, Stage};
use trackg::replay::{run_replay, Replay, ReplayEvent};
use trackg::tracking::SnapshotPublisher;

fn stream(lines: &[String]) -> Cursor<String> {
    Cursor::new(lines.join("\n"))
}

fn curl_lines(start_ms: u64, step_ms: u64) -> Vec<String> {
    vec![
        frame_line(start_ms, &flexed_arm()),
        frame_line(start_ms + step_ms, &extended_arm()),
    ]
}

#[test]
fn test_replay_counts_reps_with_stream_timing() {
    common::init_test_logging();
    let mut lines = vec![frame_line(0, &extended_arm())];
    lines.extend(curl_lines(500, 1_000));
    lines.extend(curl_lines(2_000, 1_000));

    let report = run_replay(stream(&lines), ExerciseKind::BicepCurl).unwrap();

    assert_eq!(report.frames, 5);
    assert_eq!(report.total_repetitions(), 2);
    assert_eq!(report.segments.len(), 1);
    assert_eq!(report.segments[0].rep_seconds, vec![1.5, 1.5]);
    assert_eq!(report.final_snapshot.stage, Some(Stage::Down));
    assert_eq!(report.final_snapshot.seconds_since_last_rep, Some(1.5));
}

#[test]
fn test_replay_skips_blank_and_comment_lines() {
    let lines = vec![
        "# recorded at the gym".to_owned(),
        String::new(),
        frame_line(0, &extended_arm()),
        "   ".to_owned(),
        frame_line(40, &flexed_arm()),
        frame_line(80, &extended_arm()),
    ];
    let report = run_replay(stream(&lines), ExerciseKind::HammerCurl).unwrap();
    assert_eq!(report.frames, 3);
    assert_eq!(report.total_repetitions(), 1);
}

#[test]
fn test_no_detection_events_do_not_change_state() {
    let lines = vec![
        frame_line(0, &extended_arm()),
        frame_line(33, &flexed_arm()),
        r#"{"type":"no_detection","at_ms":66}"#.to_owned(),
        r#"{"type":"no_detection","at_ms":99}"#.to_owned(),
        r#"{"type":"frame","at_ms":120,"joints":{}}"#.to_owned(),
    ];
    let report = run_replay(stream(&lines), ExerciseKind::BicepCurl).unwrap();

    assert_eq!(report.no_detections, 2);
    assert_eq!(report.frames, 3);
    assert_eq!(report.final_snapshot.stage, Some(Stage::Up));
    assert_eq!(report.final_snapshot.feedback, "Full flexion - perfect!");
}

#[test]
fn test_select_events_split_segments() {
    let mut lines = vec![frame_line(0, &extended_arm())];
    lines.extend(curl_lines(100, 100));
    lines.push(r#"{"type":"select","at_ms":400,"exercise":"3"}"#.to_owned());
    lines.push(frame_line(450, &shoulder_frame(10.0)));
    lines.push(frame_line(500, &shoulder_frame(100.0)));
    lines.push(frame_line(550, &shoulder_frame(10.0)));
    lines.push(frame_line(600, &shoulder_frame(100.0)));
    lines.push(frame_line(650, &shoulder_frame(10.0)));

    let report = run_replay(stream(&lines), ExerciseKind::BicepCurl).unwrap();

    assert_eq!(report.segments.len(), 2);
    assert_eq!(report.segments[0].exercise, ExerciseKind::BicepCurl);
    assert_eq!(report.segments[0].repetitions, 1);
    assert_eq!(report.segments[1].exercise_name, "Lateral Raise");
    assert_eq!(report.segments[1].repetitions, 2);
    assert_eq!(report.total_repetitions(), 3);
    assert_eq!(report.final_snapshot.repetitions, 2);
}

#[test]
fn test_invalid_select_is_reported_and_replay_continues() {
    let mut lines = vec![frame_line(0, &extended_arm())];
    lines.extend(curl_lines(100, 100));
    lines.push(r#"{"type":"select","at_ms":300,"exercise":"9"}"#.to_owned());
    lines.extend(curl_lines(400, 100));

    let report = run_replay(stream(&lines), ExerciseKind::BicepCurl).unwrap();

    assert_eq!(report.rejected_selections.len(), 1);
    let rejected = &report.rejected_selections[0];
    assert_eq!(rejected.line, 4);
    assert_eq!(rejected.exercise, "9");
    assert!(rejected.reason.contains("'9'"));
    assert_eq!(report.segments.len(), 1);
    assert_eq!(report.final_snapshot.repetitions, 2);
}

#[test]
fn test_malformed_line_aborts_with_line_number() {
    let lines = vec![
        frame_line(0, &extended_arm()),
        r#"{"type":"frame","at_ms":10,"joints":{"left_elbow":{"x":"a"}}}"#.to_owned(),
        frame_line(20, &flexed_arm()),
    ];
    let err = run_replay(stream(&lines), ExerciseKind::BicepCurl).unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidFormat);
    assert!(err.message.contains("line 2"), "{}", err.message);
    assert_eq!(err.details["line"], 2);
}

#[test]
fn test_backwards_timestamp_is_rejected() {
    let lines = vec![
        frame_line(100, &extended_arm()),
        frame_line(50, &flexed_arm()),
    ];
    let err = run_replay(stream(&lines), ExerciseKind::BicepCurl).unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(err.details["line"], 2);
    assert_eq!(err.details["previous_at_ms"], 100);
}

#[test]
fn test_equal_timestamps_are_accepted() {
    let lines = vec![
        frame_line(0, &extended_arm()),
        frame_line(0, &flexed_arm()),
        frame_line(0, &extended_arm()),
    ];
    let report = run_replay(stream(&lines), ExerciseKind::BicepCurl).unwrap();
    assert_eq!(report.segments[0].rep_seconds, vec![0.0]);
}

#[test]
fn test_replay_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", frame_line(0, &elbow_frame(175.0))).unwrap();
    writeln!(file, "{}", frame_line(900, &elbow_frame(45.0))).unwrap();
    writeln!(file, "{}", frame_line(1_800, &elbow_frame(175.0))).unwrap();
    file.flush().unwrap();

    let reader = BufReader::new(File::open(file.path()).unwrap());
    let report = run_replay(reader, ExerciseKind::TricepExtension).unwrap();

    assert_eq!(report.total_repetitions(), 1);
    assert_eq!(report.segments[0].rep_seconds, vec![1.8]);
    assert_eq!(report.final_snapshot.stage, Some(Stage::Extended));
}

#[test]
fn test_replay_publishes_snapshots() {
    let mut lines = vec![frame_line(0, &extended_arm())];
    lines.extend(curl_lines(100, 100));

    let replay = Replay::new(ExerciseKind::BicepCurl);
    let (publisher, receiver) = SnapshotPublisher::new(replay.session().snapshot());
    let report = replay.run(stream(&lines), Some(&publisher)).unwrap();

    assert_eq!(receiver.borrow().repetitions, 1);
    assert_eq!(receiver.borrow().session_id, report.final_snapshot.session_id);
}

#[test]
fn test_event_round_trips_through_json() {
    let event = ReplayEvent::Frame {
        at_ms: 42,
        joints: flexed_arm(),
    };
    let line = serde_json::to_string(&event).unwrap();
    assert!(line.contains(r#""type":"frame""#));
    assert_eq!(ReplayEvent::parse_line(&line, 1).unwrap(), Some(event));
}

#[test]
fn test_report_serializes_for_cli_output() {
    let lines = curl_lines(0, 250);
    let report = run_replay(stream(&lines), ExerciseKind::BicepCurl).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["segments"][0]["exercise"], "bicep_curl");
    assert_eq!(json["final_snapshot"]["exercise_name"], "Bicep Curl");
    assert!(json["rejected_selections"].as_array().unwrap().is_empty());
}
