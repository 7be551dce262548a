use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated config location; the file itself is only created when a test writes it
struct TestFixture {
    temp_dir: TempDir,
    config_path: PathBuf,
}

impl TestFixture {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        Self {
            temp_dir,
            config_path,
        }
    }

    #[allow(deprecated)]
    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("cinelist").expect("Failed to find cinelist binary");
        cmd.arg("--config").arg(&self.config_path);
        cmd.env_remove("RUST_LOG");
        cmd
    }

    fn write_seed(&self, name: &str, content: &str) {
        fs::write(self.temp_dir.path().join(name), content).expect("Failed to write seed");
        fs::write(&self.config_path, format!("seed_path = \"{}\"\n", name))
            .expect("Failed to write config");
    }

    fn json(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .command()
            .args(["--format", "json"])
            .args(args)
            .output()
            .expect("Failed to run cinelist");
        assert!(output.status.success(), "{:?}", output);
        serde_json::from_slice(&output.stdout).expect("stdout is JSON")
    }
}

#[test]
fn test_list_shows_whole_catalog() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("My Movie Collection"))
        .stdout(predicate::str::contains("Showing 6 of 6 movies"))
        .stdout(predicate::str::contains("The Shawshank Redemption"));
}

#[test]
fn test_list_filters_by_title_and_rating() {
    let fixture = TestFixture::new();

    let json = fixture.json(&["list", "--title", "THE", "--min-rating", "5"]);

    let titles: Vec<_> = json["content"]["movies"]
        .as_array()
        .expect("movies array")
        .iter()
        .map(|m| m["title"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(titles, vec!["The Shawshank Redemption", "The Godfather"]);
    assert_eq!(json["content"]["showing"], 2);
    assert_eq!(json["content"]["total"], 6);
}

#[test]
fn test_list_with_no_matches_shows_empty_state() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["list", "--title", "no such movie"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No movies found matching your criteria",
        ))
        .stdout(predicate::str::contains("cinelist list"));
}

#[test]
fn test_list_rejects_out_of_range_rating() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["list", "--min-rating", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid rating '9'"));
}

#[test]
fn test_show_existing_movie() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["show", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Dark Knight"))
        .stdout(predicate::str::contains("★★★★☆ 4/5"))
        .stdout(predicate::str::contains("Trailer: https://www.youtube.com/embed/"));
}

#[test]
fn test_show_missing_movie_renders_fallback() {
    let fixture = TestFixture::new();

    let json = fixture.json(&["show", "999"]);

    assert_eq!(json["badge"]["label"], "Movie not found");
    assert_eq!(json["content"]["movie_id"], 999);
    assert!(json["content"]["movie"].is_null());
}

#[test]
fn test_open_unknown_route_prints_nothing() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["open", "reviews"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_open_detail_route() {
    let fixture = TestFixture::new();

    let json = fixture.json(&["open", "detail", "--movie-id", "6"]);

    assert_eq!(json["content"]["route"], "detail");
    assert_eq!(json["content"]["page"]["kind"], "detail");
    assert_eq!(json["content"]["page"]["data"]["movie"]["title"], "Inception");
}

#[test]
fn test_seed_file_replaces_catalog() {
    let fixture = TestFixture::new();
    fixture.write_seed(
        "movies.toml",
        r#"
[[movies]]
id = 10
title = "Heat"
description = "Cops and robbers."
rating = 4

[[movies]]
id = 11
title = "Alien"
description = "In space no one can hear you scream."
rating = 5
"#,
    );

    let json = fixture.json(&["list"]);

    assert_eq!(json["content"]["total"], 2);
    assert_eq!(json["content"]["movies"][0]["title"], "Heat");
    assert_eq!(
        json["content"]["movies"][0]["poster_url"],
        "https://via.placeholder.com/300x400/6b7280/ffffff?text=No+Image"
    );
}

#[test]
fn test_broken_seed_file_fails() {
    let fixture = TestFixture::new();
    fixture.write_seed("movies.json", "{\"movies\": [");

    fixture
        .command()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_config_init_then_show() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file written"));
    assert!(fixture.config_path.exists());

    fixture
        .command()
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    let json = fixture.json(&["config", "show"]);
    assert_eq!(json["content"]["exists"], true);
    assert!(json["content"]["seed_path"].is_null());
}

#[test]
fn test_config_show_without_file() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not created, using defaults"))
        .stdout(predicate::str::contains("(built-in catalog)"));
}
