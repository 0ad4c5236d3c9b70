//! Application startup
//!
//! Parses arguments, applies the configuration file, initialises logging,
//! resolves the backend configuration once and dispatches the command.

use crate::app::cli::args::{Args, Command};
use crate::app::commands::{self, EXIT_FAILURE};
use crate::app::display::DisplayOptions;
use crate::app::session::run_session;
use crate::backend::api::BackendClient;
use crate::core::error_handling::{headline, log_error_with_context};
use crate::core::logging::init_logging;
use crate::core::styles::palette_to_clap;
use crate::scanner::api::ScanOrchestrator;
use clap::{CommandFactory, FromArgMatches};
use std::io::IsTerminal;
use std::sync::Arc;

/// Run the application and return the process exit code
pub fn startup() -> i32 {
    let styled = std::io::stdout().is_terminal();
    let matches = <Args as CommandFactory>::command()
        .styles(palette_to_clap(styled))
        .get_matches();
    let args = match Args::from_arg_matches(&matches) {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to start async runtime: {}", e);
            return EXIT_FAILURE;
        }
    };

    runtime.block_on(run(args))
}

/// Configure and dispatch the parsed command
pub async fn run(mut args: Args) -> i32 {
    // Logging is not up yet, so configuration errors go straight to stderr
    let config_path = match args.apply_config_file().await {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {}", headline(&e, "Loading configuration"));
            return EXIT_FAILURE;
        }
    };

    let color = args.use_color();
    if let Err(e) = init_logging(
        args.log_level.as_deref(),
        args.log_format.as_deref(),
        args.log_file_str().as_deref(),
        color,
    ) {
        eprintln!("Error: failed to initialise logging: {}", e);
        return EXIT_FAILURE;
    }

    log::debug!(
        "authscan {} starting",
        crate::core::version::long_version()
    );
    if let Some(path) = config_path {
        log::info!("Configuration loaded from {}", path.display());
    }

    let config = match args.backend_config() {
        Ok(config) => config,
        Err(e) => {
            log_error_with_context(&e, "Resolving backend URL");
            eprintln!("Error: {}", headline(&e, "Resolving backend URL"));
            return EXIT_FAILURE;
        }
    };
    log::info!(
        "Using backend {} ({}, timeout {}s)",
        config.base_url(),
        config.source(),
        config.timeout().as_secs()
    );

    let client = match BackendClient::new(config) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            log_error_with_context(&e, "Creating backend client");
            eprintln!("Error: {}", headline(&e, "Creating backend client"));
            return EXIT_FAILURE;
        }
    };
    let orchestrator = ScanOrchestrator::new(client.clone());
    let options = DisplayOptions {
        color,
        json: args.json,
    };

    let mut stdout = std::io::stdout();
    let outcome = match args.selected_command() {
        Command::Verify { code } => {
            commands::verify(&orchestrator, &code, &mut stdout, options).await
        }
        Command::Demo => commands::demo(&orchestrator, &mut stdout, options).await,
        Command::Get { product_id } => {
            commands::get(client.as_ref(), &product_id, &mut stdout, options).await
        }
        Command::Register { file } => {
            commands::register(client.as_ref(), &file, &mut stdout).await
        }
        Command::Session => {
            let input = tokio::io::BufReader::new(tokio::io::stdin());
            run_session(&orchestrator, input, &mut stdout, options)
                .await
                .map(|_| commands::EXIT_SUCCESS)
        }
    };

    outcome.unwrap_or_else(|e| {
        log::error!("Failed to write output: {}", e);
        EXIT_FAILURE
    })
}
