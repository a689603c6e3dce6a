use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn class_union() -> Command {
    Command::cargo_bin("class-union").unwrap()
}

#[test]
fn writes_union_for_stylesheet() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("base.css");
    let output = dir.path().join("output.txt");
    fs::write(&input, ".foo { color: red; } .bar{margin:0;}").unwrap();

    class_union()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--quiet")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "'foo' | 'bar';");
}

#[test]
fn defaults_to_base_css_and_output_txt() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("base.css"), ".card {\n}\n.card-title {\n}\n").unwrap();

    class_union()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("base.css"));

    assert_eq!(
        fs::read_to_string(dir.path().join("output.txt")).unwrap(),
        "'card' | 'card-title';"
    );
}

#[test]
fn list_mode_keeps_trailing_empty_line() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("classes.txt");
    let output = dir.path().join("union.txt");
    fs::write(&input, "alpha\nbeta\n").unwrap();

    class_union()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("-q")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "'alpha' | 'beta' | '';");
}

#[test]
fn wraps_every_25_literals() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("names.txt");
    let output = dir.path().join("output.txt");
    let names: Vec<String> = (1..=30).map(|n| format!("n{}", n)).collect();
    fs::write(&input, names.join("\n")).unwrap();

    class_union()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("-q")
        .assert()
        .success();

    let written = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = written.split('\n').collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("'n25' | "));
    assert!(lines[1].ends_with("'n30';"));
}

#[test]
fn legacy_terminator_policy() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("names.txt");
    let output = dir.path().join("output.txt");
    fs::write(&input, "x\ny\nx").unwrap();

    class_union()
        .arg(&input)
        .args(["--terminator", "first-occurrence", "-q", "-o"])
        .arg(&output)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "'x' | 'y' | 'x' | ");
}

#[test]
fn missing_input_exits_with_code_3() {
    let dir = TempDir::new().unwrap();

    class_union()
        .current_dir(dir.path())
        .arg("nope.css")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("nope.css"));

    assert!(!dir.path().join("output.txt").exists());
}

#[test]
fn unwritable_output_exits_with_code_4() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("base.css");
    fs::write(&input, ".a {}").unwrap();

    class_union()
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("missing-dir").join("output.txt"))
        .assert()
        .code(4);
}

#[test]
fn dry_run_prints_without_writing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("base.css");
    let output = dir.path().join("output.txt");
    fs::write(&input, ".a {} .b {}").unwrap();

    class_union()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("'a' | 'b';"));

    assert!(!output.exists());
}

#[test]
fn json_report() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("base.css");
    fs::write(&input, ".a {} .b {} .c {}").unwrap();

    class_union()
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("output.txt"))
        .args(["--output-format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"identifier_count\": 3"))
        .stdout(predicate::str::contains("\"mode\": \"stylesheet\""));
}

#[test]
fn zero_wrap_is_a_config_error() {
    let dir = TempDir::new().unwrap();

    class_union()
        .current_dir(dir.path())
        .args(["--wrap", "0"])
        .assert()
        .code(2);
}

#[test]
fn reads_settings_from_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("names.txt"), "a\nb\nc").unwrap();
    fs::write(
        dir.path().join("class-union.toml"),
        "[input]\npath = \"names.txt\"\nmode = \"list\"\n\n[format]\nwrap_every = 2\nterminator = \"position\"\n\n[output]\npath = \"union.txt\"\n",
    )
    .unwrap();

    class_union()
        .current_dir(dir.path())
        .arg("-q")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("union.txt")).unwrap(),
        "'a' | 'b' | \n'c';"
    );
}

#[test]
fn generate_config_writes_sample() {
    let dir = TempDir::new().unwrap();

    class_union()
        .current_dir(dir.path())
        .arg("--generate-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("class-union.toml"));

    let content = fs::read_to_string(dir.path().join("class-union.toml")).unwrap();
    assert!(content.contains("wrap_every = 25"));
}

#[cfg(unix)]
#[test]
fn read_only_output_exits_with_code_4() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let input = dir.path().join("base.css");
    let output = dir.path().join("output.txt");
    fs::write(&input, ".a {}").unwrap();
    fs::write(&output, "previous").unwrap();
    fs::set_permissions(&output, fs::Permissions::from_mode(0o444)).unwrap();

    // Permission bits do not bind a privileged user
    if fs::OpenOptions::new().write(true).open(&output).is_ok() {
        return;
    }

    class_union()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("output.txt"));

    assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
}
