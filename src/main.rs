use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::debug;

use pypi_release_check::config::{CheckConfig, ConfigOverrides};
use pypi_release_check::error::ReleaseCheckError;
use pypi_release_check::local::SitePackages;
use pypi_release_check::logging;
use pypi_release_check::output::{OutputSink, OutputValue, SHOULD_RELEASE_KEY, release_outputs};
use pypi_release_check::release::check_release;
use pypi_release_check::version::checker::compare;
use pypi_release_check::version::registries::PypiRegistry;

#[derive(Parser)]
#[command(name = "pypi-release-check")]
#[command(
    version,
    about = "Decide whether the local build of a Python package is newer than the one on PyPI",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    check: CheckArgs,

    /// File receiving key=value outputs (appended)
    #[arg(long, env = "GITHUB_OUTPUT", global = true)]
    github_output: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log debug details
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Compare two explicit versions and emit `should-release` only
    Compare {
        /// Version of the local build
        #[arg(long, alias = "local_version")]
        local_version: String,
        /// Latest version published on the index
        #[arg(long, alias = "pypi_version")]
        pypi_version: String,
    },
}

#[derive(Args)]
struct CheckArgs {
    /// Package name; inferred from the single editable install when omitted
    package: Option<String>,

    /// Package name, for names that clash with a subcommand (e.g. `compare`)
    #[arg(long = "package", value_name = "NAME", conflicts_with = "package")]
    package_name: Option<String>,

    /// JSON config file; command-line flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base URL of the package index
    #[arg(long, env = "PYPI_INDEX_URL")]
    index_url: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Do not verify the index's TLS certificate or host name
    #[arg(long)]
    insecure_skip_tls_verify: bool,

    /// Python interpreter asked for its site-packages directories
    #[arg(long, env = "PYTHON")]
    python: Option<String>,

    /// site-packages directory to search instead of asking the interpreter (repeatable)
    #[arg(long = "site-packages", value_name = "DIR")]
    site_packages: Vec<PathBuf>,
}

impl CheckArgs {
    fn package(&self) -> Option<&str> {
        self.package_name.as_deref().or(self.package.as_deref())
    }

    fn config(&self) -> Result<CheckConfig, ReleaseCheckError> {
        let config = match &self.config {
            Some(path) => CheckConfig::from_file(path)?,
            None => CheckConfig::default(),
        };

        Ok(config.with_overrides(ConfigOverrides {
            index_url: self.index_url.clone(),
            timeout_ms: self.timeout_ms,
            insecure_skip_tls_verify: self.insecure_skip_tls_verify,
            python: self.python.clone(),
            site_packages: self.site_packages.clone(),
        }))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _guard = match logging::init(cli.verbose, cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("error: failed to open log file: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let sink = OutputSink::from_path(cli.github_output);

    match cli.command {
        Some(Command::Compare {
            local_version,
            pypi_version,
        }) => {
            let decision = compare(&local_version, Some(pypi_version.as_str()))?;
            sink.emit(&[(
                SHOULD_RELEASE_KEY,
                OutputValue::Flag(decision.should_release),
            )])?;
        }
        None => {
            let config = cli.check.config()?;
            debug!("Using configuration: {:?}", config);

            let source = if config.site_packages.is_empty() {
                SitePackages::discover(&config.python)?
            } else {
                SitePackages::new(config.site_packages.clone())
            };
            debug!("Searching distributions in {:?}", source.roots());

            let registry = PypiRegistry::from_config(&config)?;

            let decision = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?
                .block_on(check_release(
                    &source,
                    &registry,
                    cli.check.package(),
                ))?;

            sink.emit(&release_outputs(&decision))?;
        }
    }

    Ok(())
}

/// Print the error and its causes, skipping causes already quoted by the line above
fn print_error(error: &anyhow::Error) {
    let mut previous = error.to_string();
    eprintln!("error: {previous}");
    for cause in error.chain().skip(1) {
        let message = cause.to_string();
        if !previous.contains(&message) {
            eprintln!("  caused by: {message}");
        }
        previous = message;
    }
}
