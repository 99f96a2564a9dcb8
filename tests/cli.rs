use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn strokeboard_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("strokeboard").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

#[test]
fn strokeboard_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    strokeboard_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Replay freehand drawing input and report the generated geometry",
        ));
}

#[test]
fn replays_script_from_stdin() {
    let temp = TempDir::new().unwrap();
    strokeboard_cmd(&temp)
        .write_stdin("begin 0 0\npoint 10 0\nend\nrender\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "frame 1: 1 draw calls, 4 vertices",
        ))
        .stdout(predicate::str::contains(
            "frame 2: 1 draw calls, 4 vertices",
        ))
        .stdout(predicate::str::contains("strokes: 1, undo: 1, redo: 0"));
}

#[test]
fn replays_script_file_with_history() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("session.txt");
    std::fs::write(
        &script,
        "# two strokes, one undone\n\
         begin 0 0\npoint 5 0\npoint 10 0\nend\n\
         color 0 0 1\nsize 3\n\
         begin 0 10 0.5\npoint 10 10 0.5\nend\n\
         undo\n",
    )
    .unwrap();

    strokeboard_cmd(&temp)
        .arg(&script)
        .arg("--verbose-draws")
        .assert()
        .success()
        .stdout(predicate::str::contains("draw TriangleStrip: 8 vertices"))
        .stdout(predicate::str::contains(
            "frame 1: 1 draw calls, 8 vertices",
        ))
        .stdout(predicate::str::contains("strokes: 1, undo: 1, redo: 1"));
}

#[test]
fn reports_parse_errors_with_line_numbers() {
    let temp = TempDir::new().unwrap();
    strokeboard_cmd(&temp)
        .write_stdin("begin 0 0\n\nscribble 4\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "line 3: Unknown command 'scribble'",
        ));
}

#[test]
fn explicit_config_must_exist() {
    let temp = TempDir::new().unwrap();
    strokeboard_cmd(&temp)
        .args(["--config", "/nonexistent/strokeboard.toml"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config"));
}

#[test]
fn init_config_writes_example_file() {
    let temp = TempDir::new().unwrap();
    strokeboard_cmd(&temp)
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    let written = temp.path().join("strokeboard").join("config.toml");
    let contents = std::fs::read_to_string(written).unwrap();
    assert!(contents.contains("default_brush_size"));

    strokeboard_cmd(&temp)
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn live_brush_mode_from_config_file() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.toml");
    std::fs::write(&config, "[drawing]\nbrush_size_mode = \"live\"\n").unwrap();

    strokeboard_cmd(&temp)
        .args(["--config"])
        .arg(&config)
        .write_stdin("begin 0 0\npoint 1 1\nend\nclear\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "frame 1: 0 draw calls, 0 vertices",
        ))
        .stdout(predicate::str::contains("strokes: 0, undo: 0, redo: 0"));
}
