#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

/// Returns a configured Command for `awsdac`
pub fn awsdac_cmd() -> Command {
    Command::cargo_bin("awsdac").expect("Binary not found")
}

/// Prepares a temp dir with a DAC document, a CloudFormation template and a
/// `config.toml` pointing the engine at a script that records its arguments
/// into the output file.
pub fn setup_workspace() -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    fs::write(
        temp_dir.path().join("alb-ec2.yaml"),
        "Diagram:\n  Resources:\n    Canvas:\n      Type: AWS::Diagram::Canvas\n",
    )
    .unwrap();

    fs::write(
        temp_dir.path().join("stack.yaml"),
        "AWSTemplateFormatVersion: '2010-09-09'\nResources: {}\n",
    )
    .unwrap();

    write_renderer(temp_dir.path(), r#"echo "$@" > "$4""#);
    temp_dir
}

/// Replaces the renderer script and points `config.toml` at it.
pub fn write_renderer(dir: &Path, body: &str) {
    let script = dir.join("renderer.sh");
    fs::write(&script, format!("{}\n", body)).unwrap();
    fs::write(
        dir.join("config.toml"),
        format!(
            "[engine]\ncommand = \"sh\"\nargs = [\"{}\"]\ntimeout_secs = 10\n",
            script.display()
        ),
    )
    .unwrap();
}

/// Arguments the renderer script recorded for the last run. The renderer is
/// handed a hidden staging file next to the output (`.<name>.XXXXXX.<ext>`);
/// that argument is reported as the output's file name.
pub fn recorded_args(output: &Path) -> String {
    let recorded = fs::read_to_string(output).expect("Renderer did not write the output file");
    let name = output.file_name().unwrap().to_string_lossy().into_owned();
    let staged_prefix = format!(".{name}.");

    let mut args: Vec<String> = recorded.split_whitespace().map(str::to_string).collect();
    if let Some(index) = args.iter().position(|arg| arg == "--output") {
        if let Some(staged) = args.get_mut(index + 1) {
            let staged_name = Path::new(staged.as_str())
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            if staged_name.starts_with(&staged_prefix) {
                *staged = name;
            }
        }
    }
    args.join(" ")
}

/// Names in `dir`, sorted, so stray staging files show up in assertions.
pub fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
