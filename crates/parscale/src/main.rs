//! parscale: parallel scaling analysis and charts.

use std::process::ExitCode;

use parscale_cli::CLIReportPresenter;
use parscale_report::interfaces::ReportPresenter;
use parscale_lib::{app, config, errors};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let config = config::AppConfig::parse();
    let code = match app::run(&config) {
        Ok(code) => code,
        Err(err) => {
            let presenter = CLIReportPresenter::new(config.verbose, config.quiet);
            presenter.present_error(&format!("{err:#}"));
            errors::exit_code(&err)
        }
    };
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
