use colored::Colorize;
use ipcalc::config::{init_logging, LogSettings};
use ipcalc::{run, Cli, IpcalcError};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    if let Err(e) = init_logging(&LogSettings::from_env()) {
        eprintln!("{} logging disabled: {e}", "warning:".yellow());
    }
    log::info!("#Start main()");

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("try_main() failed: {e:?}");
            let err = e.downcast_ref::<IpcalcError>();
            match err {
                // clap already formats its own usage message
                Some(IpcalcError::Usage(msg)) => eprintln!("{}", msg.trim_end()),
                _ => eprintln!("{} {e}", "Error:".red()),
            }
            ExitCode::from(err.map_or(1, IpcalcError::exit_code))
        }
    }
}

fn try_main() -> Result<(), Box<dyn Error>> {
    let cli = match Cli::try_from_args(std::env::args_os()) {
        Ok(cli) => cli,
        // --help and --version print to stdout and exit 0
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => return Err(IpcalcError::from(e).into()),
    };
    print!("{}", run(&cli)?);
    Ok(())
}
