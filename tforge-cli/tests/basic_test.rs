use assert_cmd::Command;
use predicates::prelude::*;
use tforge_test_utils::ConfigDirsTestGuard;

/// A `tforge` command isolated from the developer's own config and environment
fn tforge(dirs: &ConfigDirsTestGuard) -> Command {
  let mut cmd = Command::cargo_bin("tforge").expect("tforge binary should be built");
  cmd
    .env("HOME", dirs.temp_dir.path())
    .env("XDG_CONFIG_HOME", dirs.xdg_config_home())
    .env_remove("TFORGE_BASE_URL")
    .env_remove("TFORGE_USERNAME")
    .env_remove("TFORGE_PASSWORD")
    .env_remove("RUST_LOG");
  cmd
}

#[test]
fn test_help_command() -> anyhow::Result<()> {
  let dirs = ConfigDirsTestGuard::new()?;

  tforge(&dirs)
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("tforge"))
    .stdout(predicate::str::contains("setup"))
    .stdout(predicate::str::contains("list"))
    .stdout(predicate::str::contains("show"))
    .stdout(predicate::str::contains("create"))
    .stdout(predicate::str::contains("update"));
  Ok(())
}

#[test]
fn test_update_help_lists_flags() -> anyhow::Result<()> {
  let dirs = ConfigDirsTestGuard::new()?;

  tforge(&dirs)
    .args(["update", "--help"])
    .assert()
    .success()
    .stdout(predicate::str::contains("--stage"))
    .stdout(predicate::str::contains("--custom-fields"))
    .stdout(predicate::str::contains("--depends-on"));
  Ok(())
}

#[test]
fn test_missing_config_points_to_setup() -> anyhow::Result<()> {
  let dirs = ConfigDirsTestGuard::new()?;

  tforge(&dirs)
    .arg("list")
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("Error: Config not found. Run: tforge setup"));
  Ok(())
}

#[test]
fn test_invalid_stage_fails_before_loading_config() -> anyhow::Result<()> {
  let dirs = ConfigDirsTestGuard::new()?;

  // No config exists, so reaching the config loader would report that instead
  tforge(&dirs)
    .args(["update", "TF-160", "--stage", "bogus"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Invalid stage 'bogus'"))
    .stderr(predicate::str::contains("Config not found").not());
  Ok(())
}

#[test]
fn test_invalid_custom_fields_fail() -> anyhow::Result<()> {
  let dirs = ConfigDirsTestGuard::new()?;

  tforge(&dirs)
    .args(["update", "TF-160", "--custom-fields", "j9"])
    .assert()
    .failure()
    .stderr(predicate::str::contains(
      "Invalid custom fields format. Use: key=value,key2=value2",
    ));
  Ok(())
}

#[test]
fn test_zero_limit_is_rejected() -> anyhow::Result<()> {
  let dirs = ConfigDirsTestGuard::new()?;

  tforge(&dirs).args(["list", "--limit", "0"]).assert().failure();
  Ok(())
}
