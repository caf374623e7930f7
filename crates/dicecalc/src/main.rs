//! dicecalc: expected rounds until every die shows six.

use dicecalc_cli::ui::{print_status, Status};
use dicecalc_lib::{app, config, errors};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    if let Err(err) = app::run(&config) {
        print_status(Status::Error, &format!("{err:#}"));
        std::process::exit(errors::exit_code(&err));
    }
}
