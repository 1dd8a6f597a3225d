//! Integration tests for the `release_builder` binary

use crate::helpers::{BUILD_SCRIPT, TestProject, sha256_hex};
use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;

fn release_builder(project: &TestProject) -> Result<Command> {
    let mut cmd = Command::cargo_bin("release_builder")?;
    cmd.current_dir(&project.path)
        .env_remove("RELEASE_PROJECT_ROOT");
    Ok(cmd)
}

#[test]
fn test_missing_version_prints_usage() -> Result<()> {
    let project = TestProject::new()?;
    project.write_config(BUILD_SCRIPT, &["/bin/sh"])?;

    release_builder(&project)?
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));

    // Nothing ran: no build output, template untouched.
    assert!(!project.exists("dist"));
    assert!(project.template().contains("#define AppVersion \"1.0.0\""));
    Ok(())
}

#[test]
fn test_invalid_kind_is_rejected() -> Result<()> {
    let project = TestProject::new()?;
    project.write_config(BUILD_SCRIPT, &["/bin/sh"])?;

    release_builder(&project)?
        .args(["1.0.1", "minor"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid release kind 'minor'"));

    assert!(!project.exists("dist"));
    Ok(())
}

#[test]
fn test_help_exits_zero() -> Result<()> {
    let project = TestProject::new()?;

    release_builder(&project)?
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("patch or full"));
    Ok(())
}

#[test]
fn test_patch_release_succeeds() -> Result<()> {
    let project = TestProject::new()?;
    project.write_config(BUILD_SCRIPT, &["/bin/sh"])?;

    release_builder(&project)?
        .args(["1.0.1", "patch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BUILD COMPLETE"))
        .stdout(predicate::str::contains("git tag -a v1.0.1"));

    let installer = project.output("App-1.0.1-Patch.exe");
    let notes = std::fs::read_to_string(project.output("RELEASE_NOTES_v1.0.1.md"))?;
    assert!(notes.contains(&format!("sha256:{}", sha256_hex(&installer)?)));
    Ok(())
}

#[test]
fn test_full_release_without_compiler_exits_one() -> Result<()> {
    let project = TestProject::new()?;
    project.write_config(BUILD_SCRIPT, &["/definitely/missing/ISCC.exe"])?;

    release_builder(&project)?
        .args(["2.1.0", "full"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("not found"))
        .stderr(predicate::str::contains("Step 2"));

    assert!(project.exists("dist/App"));
    assert!(!project.exists("installer/output/RELEASE_NOTES_v2.1.0.md"));
    Ok(())
}

#[test]
fn test_project_root_flag() -> Result<()> {
    let project = TestProject::new()?;
    project.write_config(BUILD_SCRIPT, &["/bin/sh"])?;
    let elsewhere = tempfile::tempdir()?;

    let mut cmd = Command::cargo_bin("release_builder")?;
    cmd.current_dir(elsewhere.path())
        .args(["1.2.3", "full", "--quiet", "--project-root"])
        .arg(&project.path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(project.exists("installer/output/App-1.2.3-Setup.exe"));
    assert!(project.exists("installer/output/RELEASE_NOTES_v1.2.3.md"));
    Ok(())
}
