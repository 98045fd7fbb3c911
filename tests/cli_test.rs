mod common;

use assert_fs::TempDir;
use common::{BRANCHING_JSON, BRANCHING_OUTLINE, BRANCHING_TREE, leveltree, write_input};
use predicates::prelude::*;

#[test]
fn test_outline_from_file() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "tree.txt", BRANCHING_OUTLINE);

    leveltree()
        .arg(&input)
        .assert()
        .success()
        .stdout(BRANCHING_TREE);
}

#[test]
fn test_outline_from_stdin() {
    leveltree()
        .write_stdin(BRANCHING_OUTLINE)
        .assert()
        .success()
        .stdout(BRANCHING_TREE);

    leveltree()
        .arg("-")
        .write_stdin(BRANCHING_OUTLINE)
        .assert()
        .success()
        .stdout(BRANCHING_TREE);
}

#[test]
fn test_show_root() {
    leveltree()
        .arg("--show-root")
        .write_stdin(BRANCHING_OUTLINE)
        .assert()
        .success()
        .stdout(format!("A\n{BRANCHING_TREE}"));
}

#[test]
fn test_json_leveled_list_input() {
    leveltree()
        .args(["--input-format", "json"])
        .write_stdin(BRANCHING_JSON)
        .assert()
        .success()
        .stdout(BRANCHING_TREE);
}

#[test]
fn test_json_output() {
    leveltree()
        .arg("--json")
        .write_stdin(BRANCHING_OUTLINE)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""label": "A""#))
        .stdout(predicate::str::contains(r#""label": "D""#))
        .stdout(predicate::str::contains("├").not());
}

#[test]
fn test_indent_and_ascii_glyphs() {
    leveltree()
        .args(["--ascii", "--indent", "3"])
        .write_stdin(BRANCHING_OUTLINE)
        .assert()
        .success()
        .stdout("|---B\n`--+C\n   `---D\n\n");
}

#[test]
fn test_non_positive_indent_is_clamped() {
    let expected = "├─B\n└┬C\n └─D\n\n";
    for indent in ["0", "-4", "1"] {
        leveltree()
            .args(["--indent", indent])
            .write_stdin(BRANCHING_OUTLINE)
            .assert()
            .success()
            .stdout(expected);
    }
}

#[test]
fn test_glyph_overrides() {
    leveltree()
        .args(["--tee", "+", "--corner", "\\", "--horizontal", "=", "--fork", "v"])
        .write_stdin(BRANCHING_OUTLINE)
        .assert()
        .success()
        .stdout("+==B\n\\=vC\n  \\==D\n\n");
}

#[test]
fn test_color_wraps_glyphs_and_labels() {
    leveltree()
        .arg("--color")
        .write_stdin(BRANCHING_OUTLINE)
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}["))
        .stdout(predicate::str::contains("B"));
}

#[test]
fn test_level_jump_repaired() {
    leveltree()
        .write_stdin("A\n      B\n")
        .assert()
        .success()
        .stdout("└──B\n\n");
}

#[test]
fn test_empty_input() {
    leveltree().write_stdin("").assert().success().stdout("\n");
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();

    leveltree()
        .arg(dir.path().join("missing.txt"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_invalid_json() {
    leveltree()
        .args(["--input-format", "json"])
        .write_stdin("{\"name\": 1}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn test_json_output_of_deep_tree_is_refused() {
    let items: Vec<String> = (0..200_000)
        .map(|level| format!(r#"{{"level": {level}, "label": "n{level}"}}"#))
        .collect();

    leveltree()
        .args(["--input-format", "json", "--json"])
        .write_stdin(format!("[{}]", items.join(",")))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("JSON output supports at most"));
}

#[test]
fn test_extreme_levels_are_repaired() {
    leveltree()
        .args(["--input-format", "json"])
        .write_stdin(r#"[{"level": 9223372036854775807, "label": "A"}, {"level": 0, "label": "B"}]"#)
        .assert()
        .success()
        .stdout("└──B\n\n");
}
