mod cli;
mod config;

use cli::Args;
use config::ConfigFile;
use mvn_resolve::adapters::outbound::console::{SilentProgressReporter, StderrProgressReporter};
use mvn_resolve::adapters::outbound::filesystem::DiskPomCache;
use mvn_resolve::adapters::outbound::network::MavenRepositoryClient;
use mvn_resolve::application::dto::{OutputFormat, ResolutionReport, ResolveRequest};
use mvn_resolve::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use mvn_resolve::application::use_cases::ResolveDependenciesUseCase;
use mvn_resolve::ports::outbound::{OutputPresenter, ProgressReporter, ReportFormatter};
use mvn_resolve::shared::error::{ExitCode, ResolveError};
use mvn_resolve::shared::Result;
use std::path::Path;
use std::process;

fn main() {
    let args = Args::parse_args();

    match run(&args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    let config = match args.config.as_deref() {
        Some(path) => {
            let loaded = config::load_config_from_path(path)?;
            if !args.quiet {
                eprintln!("📄 Loaded config from: {}", path.display());
            }
            Some(loaded)
        }
        None => {
            let discovered = config::discover_config(Path::new("."))?;
            if discovered.is_some() && !args.quiet {
                eprintln!("📄 Auto-discovered config file: {}", config::CONFIG_FILENAME);
            }
            discovered
        }
    };

    let format = select_format(args, config.as_ref());
    let request = build_request(args, config)?;

    let repository = MavenRepositoryClient::new()?;
    let pom_cache = request.pom_cache_dir.clone().map(DiskPomCache::new);

    let report = if args.quiet {
        execute(repository, pom_cache, SilentProgressReporter::new(), request)
    } else {
        execute(repository, pom_cache, StderrProgressReporter::new(), request)
    };

    if !args.quiet {
        eprintln!("{}", FormatterFactory::progress_message(format));
    }
    let formatted_output = FormatterFactory::create(format).format(&report)?;

    PresenterFactory::create(PresenterType::from(args.output.clone()))
        .present(&formatted_output)?;

    Ok(exit_code_for(&report, args.fail_on_missing))
}

fn execute<PR: ProgressReporter>(
    repository: MavenRepositoryClient,
    pom_cache: Option<DiskPomCache>,
    progress_reporter: PR,
    request: ResolveRequest,
) -> ResolutionReport {
    ResolveDependenciesUseCase::new(repository, pom_cache, progress_reporter).execute(request)
}

/// CLI format first, then the config file, then JSON
fn select_format(args: &Args, config: Option<&ConfigFile>) -> OutputFormat {
    args.format
        .or_else(|| config.and_then(ConfigFile::output_format))
        .unwrap_or_default()
}

fn cli_or_config(cli: &[String], config: Option<Vec<String>>) -> Option<Vec<String>> {
    if cli.is_empty() {
        config
    } else {
        Some(cli.to_vec())
    }
}

/// Merges command-line options over the config file
///
/// Lists given on the command line replace the configured ones, except
/// dependencies: configured dependencies come first, then the CLI ones.
fn build_request(args: &Args, config: Option<ConfigFile>) -> Result<ResolveRequest> {
    let config = config.unwrap_or_default();

    let dependencies: Vec<String> = config
        .dependencies
        .unwrap_or_default()
        .into_iter()
        .chain(args.dependencies.iter().cloned())
        .collect();

    if dependencies.is_empty() {
        return Err(ResolveError::Validation {
            message: "no initial dependencies given. Pass groupId:artifactId:version \
                      arguments or list them under 'dependencies' in the config file"
                .to_string(),
        }
        .into());
    }

    let ignore_optional = if args.include_optional {
        false
    } else {
        config.ignore_optional.unwrap_or(true)
    };

    let mut builder = ResolveRequest::builder()
        .dependencies(dependencies)
        .ignore_optional(ignore_optional)
        .exclude_runtime(args.exclude_runtime || config.exclude_runtime.unwrap_or(false))
        .blacklist(cli_or_config(&args.blacklist, config.blacklist).unwrap_or_default())
        .pom_cache_dir(args.pom_cache_dir.clone().or(config.pom_cache_dir))
        .check_artifact_existence(
            args.check_existence || config.check_artifact_existence.unwrap_or(false),
        );

    if let Some(repositories) = cli_or_config(&args.repositories, config.repositories) {
        builder = builder.repositories(repositories);
    }
    if let Some(scopes) = cli_or_config(&args.scopes, config.scopes) {
        builder = builder.scopes(scopes);
    }

    builder.build()
}

fn exit_code_for(report: &ResolutionReport, fail_on_missing: bool) -> ExitCode {
    if report.is_failed() {
        return ExitCode::ApplicationError;
    }

    let missing = report.missing_artifacts().count();
    if fail_on_missing && missing > 0 {
        eprintln!(
            "❌ {} dependencies have no downloadable artifact in any configured repository",
            missing
        );
        return ExitCode::MissingArtifacts;
    }

    ExitCode::Success
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use mvn_resolve::application::dto::ResolvedDependency;
    use std::path::PathBuf;

    fn args(argv: &[&str]) -> Args {
        let mut full = vec!["mvn-resolve"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn dependency(packaging: &str, url: Option<&str>) -> ResolvedDependency {
        ResolvedDependency {
            group_id: "g".to_string(),
            artifact_id: "a".to_string(),
            version: "1.0".to_string(),
            packaging: packaging.to_string(),
            first_depender: "root project".to_string(),
            download_url: url.map(str::to_string),
            artifact_exists: url.is_some(),
        }
    }

    #[test]
    fn test_build_request_from_cli_only() {
        let request = build_request(
            &args(&["g:a:1.0", "-r", "https://repo.example/", "--exclude-runtime"]),
            None,
        )
        .unwrap();

        assert_eq!(request.dependencies, vec!["g:a:1.0"]);
        assert_eq!(request.repositories.len(), 1);
        assert_eq!(request.effective_scopes(), vec!["compile"]);
        assert!(request.ignore_optional);
    }

    #[test]
    fn test_config_dependencies_come_first() {
        let config = ConfigFile {
            dependencies: Some(strings(&["g:from-config:1.0"])),
            ..Default::default()
        };

        let request = build_request(&args(&["g:from-cli:1.0"]), Some(config)).unwrap();

        assert_eq!(request.dependencies, vec!["g:from-config:1.0", "g:from-cli:1.0"]);
    }

    #[test]
    fn test_cli_lists_replace_config_lists() {
        let config = ConfigFile {
            repositories: Some(strings(&["https://config.example/"])),
            scopes: Some(strings(&["compile", "runtime", "provided"])),
            blacklist: Some(strings(&["g:banned"])),
            ..Default::default()
        };

        let request = build_request(
            &args(&["g:a:1.0", "-r", "https://cli.example/", "-s", "compile"]),
            Some(config),
        )
        .unwrap();

        assert_eq!(request.repositories[0].as_str(), "https://cli.example/");
        assert_eq!(request.include_scopes, vec!["compile"]);
        assert_eq!(request.blacklist.len(), 1);
    }

    #[test]
    fn test_config_values_apply_when_cli_is_silent() {
        let config = ConfigFile {
            repositories: Some(strings(&["https://config.example"])),
            ignore_optional: Some(false),
            check_artifact_existence: Some(true),
            pom_cache_dir: Some(PathBuf::from("cache")),
            ..Default::default()
        };

        let request = build_request(&args(&["g:a:1.0"]), Some(config)).unwrap();

        assert_eq!(request.repositories[0].as_str(), "https://config.example/");
        assert!(!request.ignore_optional);
        assert!(request.check_artifact_existence);
        assert_eq!(request.pom_cache_dir, Some(PathBuf::from("cache")));
    }

    #[test]
    fn test_no_dependencies_is_an_error() {
        let err = build_request(&args(&[]), None).unwrap_err();
        assert!(err.to_string().contains("no initial dependencies given"));
    }

    #[test]
    fn test_select_format_precedence() {
        let config = ConfigFile {
            format: Some("markdown".to_string()),
            ..Default::default()
        };

        assert_eq!(select_format(&args(&[]), None), OutputFormat::Json);
        assert_eq!(select_format(&args(&[]), Some(&config)), OutputFormat::Markdown);
        assert_eq!(
            select_format(&args(&["-f", "json"]), Some(&config)),
            OutputFormat::Json
        );
    }

    #[test]
    fn test_exit_codes() {
        let complete = ResolutionReport::completed(
            vec![dependency("jar", Some("https://repo/g/a/1.0/a-1.0.jar"))],
            vec![],
        );
        let missing = ResolutionReport::completed(vec![dependency("aar", None)], vec![]);
        let parent_only = ResolutionReport::completed(vec![dependency("pom", None)], vec![]);
        let failed = ResolutionReport::failed(&anyhow::anyhow!("boom"), vec![]);

        assert_eq!(exit_code_for(&complete, true), ExitCode::Success);
        assert_eq!(exit_code_for(&missing, false), ExitCode::Success);
        assert_eq!(exit_code_for(&missing, true), ExitCode::MissingArtifacts);
        assert_eq!(exit_code_for(&parent_only, true), ExitCode::Success);
        assert_eq!(exit_code_for(&failed, false), ExitCode::ApplicationError);
    }
}
