//! End-to-end tests driving the console with scripted input.

use std::io::{Cursor, Write};
use tictactoe_console::{Console, ConsoleConfig};

fn run_script(config: ConsoleConfig, script: &str) -> (Console, String) {
    let mut console = Console::new(config);
    let mut out = Vec::new();
    console
        .run(Cursor::new(script.to_string()), &mut out, false)
        .expect("script runs");
    (console, String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn test_winning_game_reports_winner() {
    let (console, out) = run_script(
        ConsoleConfig::default(),
        "play 0\nplay 1\nplay 3\nplay 4\nplay 6\nplay 8\n",
    );

    assert!(out.contains("Winner: X"), "{out}");
    assert!(out.contains("ignored: Game is already over (X won)"), "{out}");
    assert_eq!(console.state().history().len(), 6);
}

#[test]
fn test_time_travel_branch() {
    let script = "\
# play five moves, go back to the start and branch
play 0
play 4
play 8
play 2
play 6
jump 0
play top-right
history
";
    let (console, out) = run_script(ConsoleConfig::default(), script);

    assert_eq!(console.state().history().len(), 2);
    assert_eq!(console.state().step_number(), 1);
    assert!(out.ends_with("  0. Go to game start\n> 1. Go to Move #1\n"), "{out}");
}

#[test]
fn test_quit_ignores_remaining_lines() {
    let (console, _) = run_script(ConsoleConfig::default(), "play 4\nquit\nplay 0\n");
    assert_eq!(console.state().history().len(), 2);
}

#[test]
fn test_parse_errors_do_not_stop_the_session() {
    let (console, out) = run_script(ConsoleConfig::default(), "undo\nplay 12\nplay 5\n");
    assert!(out.contains("error: unknown command 'undo'"), "{out}");
    assert!(out.contains("error: '12' is not a cell"), "{out}");
    assert_eq!(console.state().history().len(), 2);
}

#[test]
fn test_invalid_utf8_line_does_not_stop_the_session() {
    let mut script = b"play 4\n".to_vec();
    script.extend_from_slice(&[0xff, 0xfe, b'\n']);
    script.extend_from_slice(b"play 0\n");

    let mut console = Console::new(ConsoleConfig::default());
    let mut out = Vec::new();
    console
        .run(Cursor::new(script), &mut out, false)
        .expect("script runs");
    let out = String::from_utf8(out).expect("utf-8 output");

    assert!(out.contains("error: input line is not valid UTF-8"), "{out}");
    assert_eq!(console.state().history().len(), 3);
    assert_eq!(console.state().to_move(), tictactoe_timeline::Player::X);
}

#[test]
fn test_winning_line_and_past_view_are_shown() {
    let (_, out) = run_script(
        ConsoleConfig::default(),
        "play 0\nplay 1\nplay 3\nplay 4\nplay 6\njump 2\n",
    );
    assert!(out.contains("Winning line: Top-left, Middle-left, Bottom-left"), "{out}");
    assert!(out.contains("Viewing step 2 of 5"), "{out}");
}

#[test]
fn test_json_dump() {
    let (_, out) = run_script(ConsoleConfig::default(), "play 4\njson\n");
    let start = out.find('{').expect("json object in output");
    let end = out.rfind('}').expect("json object in output");
    let value: serde_json::Value = serde_json::from_str(&out[start..=end]).expect("valid json");

    assert_eq!(value["step_number"], 1);
    assert_eq!(value["history"]["snapshots"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_quiet_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "show_board = false\nshow_history = false").unwrap();
    let config = ConsoleConfig::from_file(file.path()).unwrap();

    let (_, out) = run_script(config, "play 4\nplay 0\n");
    // Only the initial board and status are printed.
    assert_eq!(out, "1|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9\nNext player: X\n");
}

#[test]
fn test_missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ConsoleConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"), "{err}");
}
