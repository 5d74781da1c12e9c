// The statistics program is replaced by a shell script reading the counts
// from a `# stats:` comment of each catalog.
#![cfg(unix)]

use assert_fs::TempDir;
use assert_fs::prelude::*;
use insta::assert_snapshot;
use predicates::prelude::*;
use serial_test::serial;
use std::os::unix::fs::PermissionsExt as _;
use std::path::PathBuf;

const FAKE_MSGFMT: &str = r#"#!/bin/sh
for last; do :; done
sed -n 's/^# stats: //p' "$last" >&2
"#;

struct Project {
    temp: TempDir,
    msgfmt: PathBuf,
}

impl Project {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        temp.child("po").create_dir_all().unwrap();

        let msgfmt = temp.path().join("fake-msgfmt");
        std::fs::write(&msgfmt, FAKE_MSGFMT).unwrap();
        std::fs::set_permissions(&msgfmt, std::fs::Permissions::from_mode(0o755)).unwrap();

        let project = Self { temp, msgfmt };
        project.territories(r#"{"fr": "fr", "ja": "jp"}"#);
        project
    }

    fn territories(&self, json: &str) -> &Self {
        self.temp.child("territories.json").write_str(json).unwrap();
        self
    }

    /// Writes `po/<name>` with the given counts.
    fn catalog(&self, name: &str, translated: u32, fuzzy: u32, untranslated: u32) -> &Self {
        let content = format!(
            "# stats: {} translated messages, {} fuzzy translations, {} untranslated messages.\n\
             msgid \"\"\n\
             msgstr \"\"\n",
            translated, fuzzy, untranslated
        );
        self.temp.child("po").child(name).write_str(&content).unwrap();
        self
    }

    fn command(&self, args: &[&str]) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("polangs");
        cmd.current_dir(self.temp.path())
            .env_remove("RUST_LOG")
            .arg("--no-color")
            .args(args)
            .arg("--msgfmt")
            .arg(&self.msgfmt);
        cmd
    }

    fn stdout(&self, args: &[&str]) -> String {
        let output = self.command(args).assert().success().get_output().clone();
        String::from_utf8(output.stdout).unwrap()
    }

    fn stderr(&self, args: &[&str]) -> String {
        let output = self.command(args).assert().success().get_output().clone();
        String::from_utf8(output.stderr).unwrap()
    }
}

#[test]
#[serial]
fn test_generate_languages() {
    let project = Project::new();
    project
        .catalog("de_de.po", 57, 3, 0)
        .catalog("fr.po", 40, 0, 60);

    project
        .command(&["generate-languages"])
        .assert()
        .success()
        .stderr("not enough coverage for 'fr-fr' (40%)\n");

    assert_snapshot!(project.stdout(&["generate-languages"]), @r#"
    {
      "de-de": "German",
      "en-us": "English"
    }
    "#);
}

#[test]
#[serial]
fn test_generate_languages_is_idempotent() {
    let project = Project::new();
    project
        .catalog("pt_BR.po", 90, 0, 10)
        .catalog("ja.po", 100, 0, 0)
        .catalog("de.po", 10, 0, 90);

    let first = project.stdout(&["generate-languages"]);
    let second = project.stdout(&["generate-languages"]);
    assert_eq!(first, second);
}

#[test]
#[serial]
fn test_missing_territory_is_reported_once() {
    let project = Project::new();
    project.catalog("ka.po", 100, 0, 0);

    assert_eq!(
        project.stderr(&["generate-languages"]),
        "could not find a territory for 'ka'\n"
    );
    assert_snapshot!(project.stdout(&["generate-languages"]), @r#"
    {
      "en-us": "English"
    }
    "#);
}

#[test]
#[serial]
fn test_shared_language_uses_territory_names() {
    let project = Project::new();
    project
        .catalog("pt_BR.po", 100, 0, 0)
        .catalog("pt_PT.po", 80, 10, 10)
        .catalog("de_DE.po", 100, 0, 0);

    assert_snapshot!(project.stdout(&["generate-languages"]), @r#"
    {
      "de-de": "German",
      "en-us": "English",
      "pt-br": "Portuguese (Brazil)",
      "pt-pt": "Portuguese (Portugal)"
    }
    "#);
}

#[test]
#[serial]
fn test_threshold_flag_and_config_file() {
    let project = Project::new();
    project.catalog("fr.po", 40, 0, 60);

    let with_flag = project.stdout(&["generate-languages", "--threshold", "40"]);
    assert!(with_flag.contains("\"fr-fr\": \"French\""));

    project.temp.child("polangs.toml").write_str("threshold = 30\n").unwrap();
    let with_config = project.stdout(&["generate-languages"]);
    assert_eq!(with_flag, with_config);

    let flag_wins = project.stdout(&["generate-languages", "--threshold", "90"]);
    assert!(!flag_wins.contains("fr-fr"));
}

#[test]
#[serial]
fn test_threshold_out_of_range_is_rejected() {
    let project = Project::new();
    project
        .command(&["generate-languages", "--threshold", "101"])
        .assert()
        .failure();
}

#[test]
#[serial]
fn test_update_manifest() {
    let project = Project::new();
    project
        .catalog("de_DE.po", 57, 3, 0)
        .catalog("fr.po", 40, 0, 60)
        .catalog("ja.po", 100, 0, 0);

    let manifest = project.temp.child("manifest.json");
    manifest
        .write_str(
            r#"{
  "name": "Installer",
  "locales": {
    "xx-xx": "Old"
  },
  "description": "Überblick"
}
"#,
        )
        .unwrap();

    project
        .command(&["update-manifest", "manifest.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated manifest.json (3 locale(s))"))
        .stderr("not enough coverage for 'fr-fr' (40%)\n");

    let updated = std::fs::read_to_string(manifest.path()).unwrap();
    assert_snapshot!(updated, @r#"
    {
      "name": "Installer",
      "locales": {
        "en-us": "English",
        "de-de": "German",
        "ja-jp": "Japanese"
      },
      "description": "Überblick"
    }
    "#);
}

#[test]
#[serial]
fn test_update_manifest_dry_run() {
    let project = Project::new();
    project.catalog("ja.po", 100, 0, 0);

    let original = "{\"name\": \"Installer\"}\n";
    let manifest = project.temp.child("manifest.json");
    manifest.write_str(original).unwrap();

    project
        .command(&["update-manifest", "manifest.json", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would update: manifest.json"))
        .stdout(predicate::str::contains("\"ja-jp\": \"Japanese\""));

    manifest.assert(original);
}

#[test]
#[serial]
fn test_missing_territory_map_fails() {
    let project = Project::new();
    project.catalog("ja.po", 100, 0, 0);

    project
        .command(&["generate-languages", "--territories", "missing.json"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("territory map not found"));
}

#[test]
#[serial]
fn test_ambiguous_territory_map_fails() {
    let project = Project::new();
    project.catalog("pt.po", 100, 0, 0);

    project.territories(r#"{"pt": "br", "PT": "pt"}"#);
    project
        .command(&["generate-languages"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("failed to parse territory map"))
        .stderr(predicate::str::contains("listed more than once"));

    project.territories(r#"{"pt": ""}"#);
    project
        .command(&["generate-languages"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid territory '' for language 'pt'"));
}

#[test]
#[serial]
fn test_missing_manifest_fails() {
    let project = Project::new();

    project
        .command(&["update-manifest", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("manifest file not found"));
}

#[test]
#[serial]
fn test_invalid_manifest_is_left_alone() {
    let project = Project::new();
    project.catalog("ja.po", 100, 0, 0);

    let manifest = project.temp.child("manifest.json");
    manifest.write_str("[\"not\", \"an\", \"object\"]").unwrap();

    project
        .command(&["update-manifest", "manifest.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse manifest"));

    manifest.assert("[\"not\", \"an\", \"object\"]");
}

#[test]
#[serial]
fn test_missing_statistics_program_fails() {
    let project = Project::new();
    project.catalog("ja.po", 100, 0, 0);

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("polangs");
    cmd.current_dir(project.temp.path())
        .args([
            "--no-color",
            "generate-languages",
            "--msgfmt",
            "polangs-test-no-such-msgfmt",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "cannot run statistics program 'polangs-test-no-such-msgfmt'",
        ));
}

#[test]
#[serial]
fn test_missing_po_directory_fails() {
    let project = Project::new();

    project
        .command(&["generate-languages", "--po-directory", "translations"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("po directory not found"));
}
