/// End-to-end tests for the CLI
///
/// Every run is offline: POMs come from a pre-populated cache directory and
/// the only configured repository is a closed local port.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const OFFLINE_REPO: &str = "http://127.0.0.1:9/";

fn cache_pom(cache: &Path, group_path: &str, artifact_id: &str, version: &str, body: &str) {
    let dir = cache.join(group_path).join(artifact_id).join(version);
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join(format!("{}-{}.pom", artifact_id, version)),
        format!(
            "<project xmlns=\"http://maven.apache.org/POM/4.0.0\">{}</project>",
            body
        ),
    )
    .unwrap();
}

/// `org.example:app:1.0` (aar) depending on `org.example:lib:2.0`
fn populated_cache() -> TempDir {
    let cache = TempDir::new().unwrap();
    cache_pom(
        cache.path(),
        "org/example",
        "app",
        "1.0",
        "<packaging>aar</packaging><dependencies><dependency>\
         <groupId>org.example</groupId><artifactId>lib</artifactId><version>2.0</version>\
         </dependency></dependencies>",
    );
    cache_pom(cache.path(), "org/example", "lib", "2.0", "");
    cache
}

fn cache_arg(cache: &TempDir) -> String {
    cache.path().to_str().unwrap().to_string()
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("mvn-resolve").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("mvn-resolve")
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("mvn-resolve")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("mvn-resolve")
            .args(["g:a:1.0", "-f", "invalid_format"])
            .assert()
            .code(2);
    }

    /// Exit code 3: nothing to resolve
    #[test]
    fn test_exit_code_no_dependencies() {
        cargo_bin_cmd!("mvn-resolve")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("no initial dependencies given"));
    }

    /// Exit code 3: repository URL that is not http(s)
    #[test]
    fn test_exit_code_invalid_repository() {
        cargo_bin_cmd!("mvn-resolve")
            .args(["g:a:1.0", "-r", "ftp://repo.example/"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid repository URL"));
    }

    /// Exit code 3: blacklist entry without an artifactId
    #[test]
    fn test_exit_code_invalid_blacklist() {
        cargo_bin_cmd!("mvn-resolve")
            .args(["g:a:1.0", "-b", "only-a-group"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid coordinate"));
    }

    /// Exit code 3: the POM cache directory cannot be created
    #[test]
    fn test_exit_code_failed_report() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("cache");
        fs::write(&blocker, "not a directory").unwrap();

        cargo_bin_cmd!("mvn-resolve")
            .args(["g:a:1.0", "-r", OFFLINE_REPO, "--quiet", "--pom-cache-dir"])
            .arg(&blocker)
            .assert()
            .code(3)
            .stdout(predicate::str::contains("\"status\": \"failed\""));
    }
}

#[test]
fn test_e2e_json_from_disk_cache() {
    let cache = populated_cache();

    let output = cargo_bin_cmd!("mvn-resolve")
        .args([
            "org.example:app:1.0",
            "-r",
            OFFLINE_REPO,
            "--pom-cache-dir",
            &cache_arg(&cache),
            "--quiet",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total_unique_dependencies"], 2);
    assert_eq!(report["dependencies"][0]["artifactId"], "app");
    assert_eq!(report["dependencies"][0]["packaging"], "aar");
    assert_eq!(
        report["dependencies"][0]["download_url"],
        "http://127.0.0.1:9/org/example/app/1.0/app-1.0.aar"
    );
    assert_eq!(report["dependencies"][1]["artifactId"], "lib");
    assert_eq!(report["dependencies"][1]["first_depender"], "org.example:app:1.0");
    assert_eq!(report["warnings"], serde_json::json!([]));
    assert!(output.stderr.is_empty());
}

#[test]
fn test_e2e_progress_on_stderr() {
    let cache = populated_cache();

    cargo_bin_cmd!("mvn-resolve")
        .args([
            "org.example:app:1.0",
            "-r",
            OFFLINE_REPO,
            "--pom-cache-dir",
            &cache_arg(&cache),
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "🔍 Resolving 1 initial dependencies against 1 repositories...",
        ))
        .stderr(predicate::str::contains("INFO: Loaded POM from disk cache:"))
        .stderr(predicate::str::contains("✅ Resolved 2 unique dependencies (0 warnings)"))
        .stderr(predicate::str::contains("📝 Generating JSON report..."));
}

#[test]
fn test_e2e_markdown_to_file() {
    let cache = populated_cache();
    let out_dir = TempDir::new().unwrap();
    let report_path = out_dir.path().join("report.md");

    cargo_bin_cmd!("mvn-resolve")
        .args([
            "org.example:app:1.0",
            "-r",
            OFFLINE_REPO,
            "--pom-cache-dir",
            &cache_arg(&cache),
            "-f",
            "markdown",
            "-o",
            report_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let report = fs::read_to_string(&report_path).unwrap();
    assert!(report.starts_with("# Maven Dependency Resolution Report"));
    assert!(report.contains("| org.example:lib | 2.0 | jar | org.example:app:1.0 |"));
}

#[test]
fn test_e2e_blacklist_and_missing_pom_warning() {
    let cache = populated_cache();

    let output = cargo_bin_cmd!("mvn-resolve")
        .args([
            "org.example:app:1.0",
            "org.example:absent:3.1",
            "-r",
            OFFLINE_REPO,
            "--pom-cache-dir",
            &cache_arg(&cache),
            "-b",
            "org.example:lib",
            "--quiet",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let gavs: Vec<String> = report["dependencies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| format!("{}:{}", d["artifactId"].as_str().unwrap(), d["version"].as_str().unwrap()))
        .collect();
    assert_eq!(gavs, vec!["absent:3.1", "app:1.0"]);
    assert_eq!(
        report["warnings"],
        serde_json::json!([
            "WARNING: Failed to fetch POM for org.example:absent:3.1 from any configured repository."
        ])
    );
}

#[test]
fn test_e2e_fail_on_missing() {
    let cache = populated_cache();

    cargo_bin_cmd!("mvn-resolve")
        .args([
            "org.example:app:1.0",
            "-r",
            OFFLINE_REPO,
            "--pom-cache-dir",
            &cache_arg(&cache),
            "--check-existence",
            "--fail-on-missing",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"artifact_exists\": false"))
        .stderr(predicate::str::contains(
            "2 dependencies have no downloadable artifact",
        ));
}

#[test]
fn test_e2e_missing_artifacts_tolerated_by_default() {
    let cache = populated_cache();

    cargo_bin_cmd!("mvn-resolve")
        .args([
            "org.example:app:1.0",
            "-r",
            OFFLINE_REPO,
            "--pom-cache-dir",
            &cache_arg(&cache),
            "--check-existence",
            "--quiet",
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "WARNING: Artifact file not found in any configured repository for org.example:lib:2.0 (packaging: jar).",
        ));
}
