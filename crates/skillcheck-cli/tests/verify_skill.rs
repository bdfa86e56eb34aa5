use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const REQUIRED: [&str; 5] = [
    "SKILL.md",
    "references/ui-patterns.md",
    "references/visual-effects.md",
    "references/layout-patterns.md",
    "references/typography-advanced.md",
];

/// Lay out `<tmp>/designing-nextjs-ui/scripts/<binary>` plus the given files.
///
/// The binary is hard-linked when possible so the test never executes a file
/// it still holds open for writing.
fn install_skill(files: &[&str]) -> (TempDir, PathBuf) {
    let tmp = TempDir::new_in(env!("CARGO_TARGET_TMPDIR")).expect("temp dir should be creatable");
    let skill_root = tmp.path().join("designing-nextjs-ui");
    let scripts = skill_root.join("scripts");
    fs::create_dir_all(&scripts).expect("scripts dir should be creatable");

    let built = Path::new(env!("CARGO_BIN_EXE_verify-skill"));
    let installed = scripts.join(built.file_name().expect("binary has a file name"));
    if fs::hard_link(built, &installed).is_err() {
        fs::copy(built, &installed).expect("binary should be copyable");
    }

    for file in files {
        let path = skill_root.join(file);
        fs::create_dir_all(path.parent().expect("required file has a parent"))
            .expect("reference dir should be creatable");
        fs::write(&path, "# doc\n").expect("required file should be writable");
    }

    (tmp, installed)
}

fn run_from(binary: &Path, cwd: &Path, args: &[&str]) -> Output {
    Command::new(binary)
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .expect("verify-skill should execute")
}

#[test]
fn complete_skill_reports_ready() {
    let (tmp, binary) = install_skill(&REQUIRED);

    let output = run_from(&binary, tmp.path(), &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0), "stdout: {stdout}");
    assert_eq!(
        stdout,
        "Verifying designing-nextjs-ui...\n[OK] designing-nextjs-ui skill ready\n"
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn partial_skill_lists_missing_files_in_order() {
    let (tmp, binary) = install_skill(&["SKILL.md", "references/ui-patterns.md"]);

    let output = run_from(&binary, tmp.path(), &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1), "stdout: {stdout}");
    assert_eq!(
        stdout,
        "Verifying designing-nextjs-ui...\n\
         Missing files: ['references/visual-effects.md', 'references/layout-patterns.md', 'references/typography-advanced.md']\n"
    );
}

#[test]
fn first_and_last_missing_keep_declaration_order() {
    let (tmp, binary) = install_skill(&REQUIRED[1..4]);

    let output = run_from(&binary, tmp.path(), &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("Missing files: ['SKILL.md', 'references/typography-advanced.md']"));
}

#[test]
fn result_does_not_depend_on_working_directory() {
    let (tmp, binary) = install_skill(&REQUIRED);
    let elsewhere = TempDir::new().expect("temp dir should be creatable");

    let from_root = run_from(&binary, tmp.path(), &[]);
    let from_elsewhere = run_from(&binary, elsewhere.path(), &[]);
    let from_scripts = run_from(&binary, binary.parent().expect("scripts dir"), &[]);

    assert_eq!(from_root.status.code(), Some(0));
    assert_eq!(from_root.stdout, from_elsewhere.stdout);
    assert_eq!(from_root.stdout, from_scripts.stdout);
    assert_eq!(from_elsewhere.status.code(), Some(0));
    assert_eq!(from_scripts.status.code(), Some(0));
}

#[test]
fn repeated_runs_are_identical() {
    let (tmp, binary) = install_skill(&["SKILL.md"]);

    let first = run_from(&binary, tmp.path(), &[]);
    let second = run_from(&binary, tmp.path(), &[]);

    assert_eq!(first.status.code(), Some(1));
    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn json_mode_reports_missing_files() {
    let (tmp, binary) = install_skill(&REQUIRED[..4]);

    let output = run_from(&binary, tmp.path(), &["--json"]);
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(value["skill"], "designing-nextjs-ui");
    assert_eq!(value["ready"], false);
    assert_eq!(
        value["missing"],
        serde_json::json!(["references/typography-advanced.md"])
    );
}
