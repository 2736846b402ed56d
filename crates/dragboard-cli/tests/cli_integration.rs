use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::Path;
use tempfile::tempdir;

fn dragboard() -> Command {
    let mut cmd = Command::cargo_bin("dragboard").unwrap();
    cmd.env_remove("DRAGBOARD_FILE");
    cmd.env_remove("DRAGBOARD_DEBUG_LOG");
    // Keep a developer's own config.toml out of the run.
    let config_home = std::env::temp_dir().join("dragboard-cli-tests-no-config");
    cmd.env("XDG_CONFIG_HOME", &config_home);
    cmd.env("HOME", &config_home);
    cmd
}

fn parse_json_output(output: &[u8]) -> Value {
    serde_json::from_str(&String::from_utf8_lossy(output)).expect("Failed to parse JSON output")
}

fn run_ok(file: &Path, args: &[&str]) -> Value {
    let output = dragboard()
        .args(["--file", file.to_str().unwrap()])
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json = parse_json_output(&output);
    assert!(json["success"].as_bool().unwrap());
    json
}

fn board_with_cards(file: &Path) {
    run_ok(file, &["init"]);
    for title in ["A", "B", "C"] {
        run_ok(file, &["add-card", "--column", "todo", "--title", title]);
    }
    for title in ["X", "Y"] {
        run_ok(file, &["add-card", "--column", "done", "--title", title]);
    }
}

fn titles(show: &Value, column: &str) -> Vec<String> {
    show["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["key"] == column)
        .unwrap()["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|card| card["title"].as_str().unwrap().to_string())
        .collect()
}

mod board_tests {
    use super::*;

    #[test]
    fn test_init_default_columns() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("board.json");

        let json = run_ok(&file, &["init"]);
        assert_eq!(json["data"]["columns"][0], "todo");
        assert_eq!(json["data"]["columns"][2], "done");
        assert!(file.exists());
    }

    #[test]
    fn test_init_custom_columns() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("board.json");

        run_ok(
            &file,
            &["init", "--column", "backlog=Backlog", "--column", "live=Live"],
        );
        let show = run_ok(&file, &["show"]);
        assert_eq!(show["data"][0]["key"], "backlog");
        assert_eq!(show["data"][1]["title"], "Live");
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("board.json");
        run_ok(&file, &["init"]);

        dragboard()
            .args(["--file", file.to_str().unwrap(), "init"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));
    }

    #[test]
    fn test_init_refuses_board_sentinel_as_column_key() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("board.json");

        dragboard()
            .args(["--file", file.to_str().unwrap()])
            .args(["init", "--column", "board=Board", "--column", "done=Done"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("reserved"));
        assert!(!file.exists());
    }

    #[test]
    fn test_show_missing_file_fails() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("missing.json");

        dragboard()
            .args(["--file", file.to_str().unwrap(), "show"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("\"success\":false"));
    }

    #[test]
    fn test_file_from_env() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("board.json");
        run_ok(&file, &["init"]);

        dragboard()
            .env("DRAGBOARD_FILE", file.to_str().unwrap())
            .arg("show")
            .assert()
            .success()
            .stdout(predicate::str::contains("\"key\":\"doing\""));
    }

    #[test]
    fn test_add_card_to_unknown_column_fails() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("board.json");
        run_ok(&file, &["init"]);

        dragboard()
            .args(["--file", file.to_str().unwrap()])
            .args(["add-card", "--column", "archive", "--title", "Lost"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Not found"));
    }
}

mod drag_tests {
    use super::*;

    #[test]
    fn test_reorder_within_column() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("board.json");
        board_with_cards(&file);

        let json = run_ok(
            &file,
            &[
                "move-card",
                "--from-column",
                "todo",
                "--from-index",
                "2",
                "--to-column",
                "todo",
                "--to-index",
                "0",
            ],
        );
        let transition = &json["data"]["transition"];
        assert_eq!(transition["kind"], "card_reordered_within_column");
        assert_eq!(transition["card"]["title"], "C");
        assert!(transition.get("originalColumnId").is_none());

        let show = run_ok(&file, &["show"]);
        assert_eq!(titles(&show, "todo"), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_move_across_columns_is_persisted_and_journaled() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("board.json");
        board_with_cards(&file);

        let json = run_ok(
            &file,
            &[
                "move-card",
                "--from-column",
                "todo",
                "--from-index",
                "0",
                "--to-column",
                "done",
                "--to-index",
                "1",
            ],
        );
        let transition = &json["data"]["transition"];
        assert_eq!(transition["kind"], "card_moved_across_columns");
        assert_eq!(transition["originalColumnId"], "todo");
        assert_eq!(transition["destinationColumnId"], "done");
        assert_eq!(transition["destinationIndex"], 1);

        let show = run_ok(&file, &["show"]);
        assert_eq!(titles(&show, "todo"), vec!["B", "C"]);
        assert_eq!(titles(&show, "done"), vec!["X", "A", "Y"]);

        let activity = json["data"]["activity"].as_array().unwrap();
        assert_eq!(activity.len(), 1);
        assert!(activity[0]["message"]
            .as_str()
            .unwrap()
            .starts_with("Moved card"));

        let journal = run_ok(&file, &["journal"]);
        assert_eq!(journal["data"]["count"], 1);
        // X and Y sit at 0.0 and 1.0
        assert_eq!(journal["data"]["items"][0]["sortKey"], 0.5);
    }

    #[test]
    fn test_drop_in_place_is_unchanged() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("board.json");
        board_with_cards(&file);

        let json = run_ok(
            &file,
            &[
                "move-card",
                "--from-column",
                "todo",
                "--from-index",
                "1",
                "--to-column",
                "todo",
                "--to-index",
                "1",
            ],
        );
        assert_eq!(json["data"]["transition"]["kind"], "unchanged");
        assert_eq!(run_ok(&file, &["journal"])["data"]["count"], 0);
    }

    #[test]
    fn test_ignore_drop_cancels() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("board.json");
        board_with_cards(&file);

        let json = run_ok(
            &file,
            &[
                "move-card",
                "--from-column",
                "todo",
                "--from-index",
                "0",
                "--to-column",
                "done",
                "--to-index",
                "0",
                "--ignore-drop",
            ],
        );
        assert_eq!(json["data"]["transition"]["kind"], "cancelled");
        let show = run_ok(&file, &["show"]);
        assert_eq!(titles(&show, "todo"), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_ignore_drop_cancels_even_out_of_range() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("board.json");
        board_with_cards(&file);

        let json = run_ok(
            &file,
            &[
                "move-card",
                "--from-column",
                "todo",
                "--from-index",
                "5",
                "--to-column",
                "archive",
                "--to-index",
                "9",
                "--ignore-drop",
            ],
        );
        assert_eq!(json["data"]["transition"]["kind"], "cancelled");
        assert!(json["data"]["activity"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_out_of_range_move_is_rejected() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("board.json");
        board_with_cards(&file);

        dragboard()
            .args(["--file", file.to_str().unwrap()])
            .args([
                "move-card",
                "--from-column",
                "todo",
                "--from-index",
                "7",
                "--to-column",
                "done",
                "--to-index",
                "0",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("out of range"));
    }

    #[test]
    fn test_move_column_reorders_without_journal() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("board.json");
        board_with_cards(&file);

        let json = run_ok(&file, &["move-column", "--from-index", "2", "--to-index", "0"]);
        assert_eq!(json["data"]["transition"]["kind"], "column_reordered");
        assert_eq!(json["data"]["column_order"][0], "done");

        let show = run_ok(&file, &["show"]);
        assert_eq!(show["data"][0]["key"], "done");
        assert_eq!(run_ok(&file, &["journal"])["data"]["count"], 0);
    }

    #[test]
    fn test_raw_drag_without_destination_is_cancelled() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("board.json");
        board_with_cards(&file);

        let json = run_ok(
            &file,
            &["drag", "--json", r#"{"source":{"columnId":"todo","index":0}}"#],
        );
        assert_eq!(json["data"]["transition"]["kind"], "cancelled");
    }

    #[test]
    fn test_raw_drag_on_board_context_moves_column() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("board.json");
        board_with_cards(&file);

        let json = run_ok(
            &file,
            &[
                "drag",
                "--json",
                r#"{"source":{"columnId":"board","index":0},"destination":{"columnId":"board","index":1}}"#,
            ],
        );
        assert_eq!(json["data"]["transition"]["kind"], "column_reordered");
        assert_eq!(json["data"]["column_order"][0], "doing");
    }

    #[test]
    fn test_raw_column_drag_to_same_index_is_unchanged() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("board.json");
        board_with_cards(&file);

        let json = run_ok(
            &file,
            &[
                "drag",
                "--json",
                r#"{"source":{"columnId":"board","index":1},"destination":{"columnId":"todo","index":1}}"#,
            ],
        );
        assert_eq!(json["data"]["transition"]["kind"], "unchanged");
        assert_eq!(json["data"]["column_order"][0], "todo");
    }

    #[test]
    fn test_raw_drag_rejects_bad_json() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("board.json");
        board_with_cards(&file);

        dragboard()
            .args(["--file", file.to_str().unwrap(), "drag", "--json", "{oops"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Serialization error"));
    }
}

#[test]
fn test_completions_need_no_file() {
    dragboard()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dragboard"));
}
