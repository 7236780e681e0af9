use fnol::{
    cli::{init_tracing, Cli, CliHandler},
    error::FnolError,
};
use std::process;

#[tokio::main]
async fn main() {
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };

    init_tracing(cli.is_verbose(), cli.is_debug());

    let exit_code = match CliHandler::new(cli).run().await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "claim submission failed");
            match e {
                FnolError::ValidationFailed(_) => 2,
                FnolError::InvalidArguments(_) => 2,
                FnolError::ConfigError(_) => 2,
                _ => 1,
            }
        }
    };

    process::exit(exit_code);
}
