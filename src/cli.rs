use clap::Parser;
use mvn_resolve::application::dto::OutputFormat;
use std::path::PathBuf;

/// Resolve the transitive closure of Maven dependencies with
/// highest-version-wins mediation
#[derive(Parser, Debug)]
#[command(name = "mvn-resolve")]
#[command(version)]
#[command(about = "Resolve transitive Maven dependencies and their download URLs", long_about = None)]
pub struct Args {
    /// Initial dependencies as groupId:artifactId:version[:scope]
    #[arg(value_name = "COORDINATE")]
    pub dependencies: Vec<String>,

    /// Repository base URL, in priority order (replaces the defaults)
    /// Can be specified multiple times: -r URL1 -r URL2
    #[arg(short, long = "repository", value_name = "URL")]
    pub repositories: Vec<String>,

    /// Scope whose transitive dependencies are followed (default: compile, runtime)
    #[arg(short, long = "scope", value_name = "SCOPE")]
    pub scopes: Vec<String>,

    /// Follow dependencies marked <optional>true</optional>
    #[arg(long)]
    pub include_optional: bool,

    /// Do not follow runtime-scoped dependencies
    #[arg(long)]
    pub exclude_runtime: bool,

    /// groupId:artifactId never resolved, fetched or traversed
    #[arg(short, long = "blacklist", value_name = "GROUP:ARTIFACT")]
    pub blacklist: Vec<String>,

    /// Directory used as a persistent POM cache (Maven repository layout)
    #[arg(long, value_name = "DIR")]
    pub pom_cache_dir: Option<PathBuf>,

    /// Probe each repository with HEAD requests before reporting a download URL
    #[arg(long)]
    pub check_existence: bool,

    /// Output format: json or markdown
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to a config file (default: ./mvn-resolve.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress and warnings on stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Exit with code 1 when a binary artifact has no download URL
    #[arg(long)]
    pub fail_on_missing: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_full_command_line() {
        let args = Args::try_parse_from([
            "mvn-resolve",
            "androidx.core:core:1.13.1",
            "com.squareup.okhttp3:okhttp:4.12.0:runtime",
            "-r",
            "https://repo.example/maven2",
            "-r",
            "https://mirror.example/",
            "-s",
            "compile",
            "--include-optional",
            "-b",
            "org.jetbrains.kotlin:kotlin-stdlib",
            "--pom-cache-dir",
            "/tmp/poms",
            "--check-existence",
            "-f",
            "md",
            "-o",
            "report.md",
            "--fail-on-missing",
        ])
        .unwrap();

        assert_eq!(args.dependencies.len(), 2);
        assert_eq!(args.repositories.len(), 2);
        assert_eq!(args.scopes, vec!["compile"]);
        assert!(args.include_optional);
        assert!(!args.exclude_runtime);
        assert_eq!(args.blacklist, vec!["org.jetbrains.kotlin:kotlin-stdlib"]);
        assert_eq!(args.pom_cache_dir, Some(PathBuf::from("/tmp/poms")));
        assert!(args.check_existence);
        assert_eq!(args.format, Some(OutputFormat::Markdown));
        assert_eq!(args.output, Some(PathBuf::from("report.md")));
        assert!(args.fail_on_missing);
        assert!(!args.quiet);
    }

    #[test]
    fn test_defaults_leave_options_unset() {
        let args = Args::try_parse_from(["mvn-resolve", "g:a:1.0"]).unwrap();
        assert!(args.repositories.is_empty());
        assert!(args.scopes.is_empty());
        assert!(args.format.is_none());
        assert!(args.config.is_none());
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        let err = Args::try_parse_from(["mvn-resolve", "-f", "xml"]).unwrap_err();
        assert!(err.to_string().contains("Invalid format"));
    }
}
