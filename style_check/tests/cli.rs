//! End-to-end tests that run the compiled `style-check` binary.
use anyhow::{Result, ensure};
use assert_cmd::Command;
use rstest::rstest;
use tempfile::TempDir;
use test_helpers::documents::{STYLE_JSON, STYLE_TOML, STYLE_YAML};

#[expect(
    clippy::expect_used,
    reason = "cargo_bin is the standard assert_cmd API and test panics are acceptable"
)]
fn style_check() -> Command {
    Command::cargo_bin("style-check").expect("binary should exist")
}

fn write_document(dir: &TempDir, name: &str, contents: &str) -> Result<std::path::PathBuf> {
    let path = dir.path().join(name);
    std::fs::write(&path, contents)?;
    Ok(path)
}

#[rstest]
#[case::json("style.json", STYLE_JSON)]
#[case::toml("style.toml", STYLE_TOML)]
#[case::yaml("style.yaml", STYLE_YAML)]
fn summarises_every_format(#[case] name: &str, #[case] contents: &str) -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_document(&dir, name, contents)?;
    let output = style_check().arg(&path).output()?;
    ensure!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout)?;
    ensure!(stdout.starts_with("style: Transit\n"), "{stdout}");
    ensure!(stdout.contains("  stop-dots: circle from stops\n"), "{stdout}");
    ensure!(stdout.contains("  heat: heatmap from ridership (riders), hidden\n"), "{stdout}");
    Ok(())
}

#[rstest]
fn format_flag_overrides_the_extension() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_document(&dir, "style.txt", STYLE_JSON)?;
    style_check().arg(&path).assert().failure();
    style_check()
        .args(["--format", "json"])
        .arg(&path)
        .assert()
        .success();
    Ok(())
}

#[rstest]
fn json_output_includes_filled_defaults() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_document(&dir, "style.json", STYLE_JSON)?;
    let output = style_check()
        .args(["--json", "--fill-defaults"])
        .arg(&path)
        .output()?;
    ensure!(output.status.success());
    let rendered: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let opacity = &rendered["layers"][0]["paint"]["opacity"];
    ensure!(*opacity == serde_json::json!({"Constant": 1.0}), "{opacity}");
    Ok(())
}

#[rstest]
fn conversion_errors_name_the_member_path() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_document(
        &dir,
        "style.json",
        r#"{"layers": [{"id": "a", "type": "circle", "source": "s", "paint": {"circle-opacity": "half"}}]}"#,
    )?;
    let output = style_check().arg(&path).output()?;
    ensure!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    ensure!(
        stderr.contains(
            "Invalid style: layers: [0]: paint: circle-opacity: value must be a number, found a string"
        ),
        "{stderr}"
    );
    Ok(())
}

#[rstest]
fn missing_files_fail() -> Result<()> {
    let dir = tempfile::tempdir()?;
    style_check()
        .arg(dir.path().join("absent.json"))
        .assert()
        .failure();
    Ok(())
}
