use clap::Parser;
use common::config::ObservabilityConfig;
use common::observability::{init_tracing, LogTarget};
use jwks_fixture::{generate, FixtureConfig, FixtureError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// Generate a JWKS document and a signed test token from an existing RSA key pair.
#[derive(Debug, Parser)]
#[command(name = "jwks-gen", version)]
struct Cli {
    /// Where to write the JWKS document [default: test-keys/jwks.json]
    output: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(e) = init_tracing(
        &ObservabilityConfig::from_env(),
        "jwks_fixture=info,jwks_gen=info",
        LogTarget::Stderr,
    ) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(stage = e.stage(), "Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), FixtureError> {
    let config = FixtureConfig::from_env()?.with_jwks_output_path(cli.output);

    let report = generate(&config).await?;

    info!(
        jwks = %report.jwks_path.display(),
        token = %report.token_path.display(),
        "All fixtures generated"
    );
    info!("Bearer: {}", report.token.token);

    Ok(())
}
