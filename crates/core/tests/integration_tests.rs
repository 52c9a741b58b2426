//! Integration tests for quick-suggest-core
//!
//! These tests verify that the core pipeline works together correctly:
//! a raw frame stream is accumulated into response text, the text is parsed
//! into a command table, and a chosen entry runs with live-forwarded output.

use std::io::Cursor;

use quick_suggest_core::command_table::parse_command_table;
use quick_suggest_core::execution::run_command_with_sinks;
use quick_suggest_core::generation::accumulate;

const SHELL: &str = "/bin/sh";

/// Builds an Ollama-style frame stream out of text fragments, including the
/// warm-up frame and a trailing no-text frame, the way a backend delivers it.
fn frame_stream(fragments: &[&str]) -> String {
    let mut lines = vec!["{\"response\":\"warm-up echo of the prompt\"}".to_string()];
    for fragment in fragments {
        lines.push(format!(
            "{{\"response\":{}}}",
            serde_json::to_string(fragment).unwrap()
        ));
    }
    lines.push("{\"done\":true}".to_string());
    lines.join("\n")
}

#[test]
fn test_stream_to_table_workflow() {
    let stream = frame_stream(&[
        "1) echo hello",
        "\n    ↳ prints a greeting\n",
        "\n2) pwd",
        "\n    ↳ shows the current directory\n",
    ]);

    let mut echoed = Vec::new();
    let response = accumulate(Cursor::new(stream), &mut echoed).unwrap();

    // Live echo and accumulated text are the same view of the stream.
    assert_eq!(String::from_utf8(echoed).unwrap(), response);

    let table = parse_command_table(&response);
    assert_eq!(table.len(), 2);
    assert_eq!(table["1"], "echo hello");
    assert_eq!(table["2"], "pwd");
}

#[test]
fn test_noisy_stream_still_yields_a_usable_menu() {
    let stream = format!(
        "transport garbage\n{}\nmore garbage\n",
        frame_stream(&["```", "1) date", "```"])
    );

    let mut echoed = Vec::new();
    let response = accumulate(Cursor::new(stream), &mut echoed).unwrap();
    let table = parse_command_table(&response);

    assert_eq!(table.len(), 1);
    assert_eq!(table["1"], "date");
}

#[test]
fn test_selected_entry_executes_with_captured_output() {
    let stream = frame_stream(&["1) echo from-the-menu"]);

    let mut echoed = Vec::new();
    let response = accumulate(Cursor::new(stream), &mut echoed).unwrap();
    let table = parse_command_table(&response);

    let mut stdout_sink = Vec::new();
    let mut stderr_sink = Vec::new();
    let code =
        run_command_with_sinks(SHELL, &table["1"], &mut stdout_sink, &mut stderr_sink).unwrap();

    assert_eq!(code, 0);
    assert_eq!(String::from_utf8(stdout_sink).unwrap(), "from-the-menu\n");
    assert!(stderr_sink.is_empty());
}

#[test]
fn test_child_exit_code_travels_through() {
    let mut stdout_sink = Vec::new();
    let mut stderr_sink = Vec::new();
    let code = run_command_with_sinks(
        SHELL,
        "echo out; echo err 1>&2; exit 3",
        &mut stdout_sink,
        &mut stderr_sink,
    )
    .unwrap();

    assert_eq!(code, 3);
    assert_eq!(String::from_utf8(stdout_sink).unwrap(), "out\n");
    assert_eq!(String::from_utf8(stderr_sink).unwrap(), "err\n");
}

#[test]
fn test_interleaved_streams_each_stay_ordered() {
    let mut stdout_sink = Vec::new();
    let mut stderr_sink = Vec::new();
    let code = run_command_with_sinks(
        SHELL,
        "for i in 1 2 3; do echo out-$i; echo err-$i 1>&2; done",
        &mut stdout_sink,
        &mut stderr_sink,
    )
    .unwrap();

    assert_eq!(code, 0);
    // No assertion on stdout-vs-stderr interleaving, only per-stream order.
    assert_eq!(
        String::from_utf8(stdout_sink).unwrap(),
        "out-1\nout-2\nout-3\n"
    );
    assert_eq!(
        String::from_utf8(stderr_sink).unwrap(),
        "err-1\nerr-2\nerr-3\n"
    );
}

#[test]
fn test_large_one_sided_output_completes() {
    let mut stdout_sink = Vec::new();
    let mut stderr_sink = Vec::new();
    let code = run_command_with_sinks(SHELL, "seq 1 10000", &mut stdout_sink, &mut stderr_sink)
        .unwrap();

    assert_eq!(code, 0);
    let out = String::from_utf8(stdout_sink).unwrap();
    assert_eq!(out.lines().count(), 10000);
    assert_eq!(out.lines().last(), Some("10000"));
    assert!(stderr_sink.is_empty());
}
