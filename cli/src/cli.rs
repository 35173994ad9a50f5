use crate::actions::Action;
use structopt::StructOpt;
use utils::xlogging::{init_log, LoggingSettings};
use xerror::cli::CliError;

#[derive(StructOpt, Debug)]
#[structopt(name = "lnurl", about = "Convert lightning addresses to LNURL.")]
pub struct Cli {
    /// trace, debug, info, warning, error or critical
    #[structopt(long = "log-level", default_value = "warning")]
    log_level: String,
    #[structopt(subcommand)]
    action: Action,
}

impl Cli {
    pub fn execute(self) -> Result<(), CliError> {
        let logger = init_log(&LoggingSettings::terminal("lnurl", &self.log_level))?;
        let outcome = self.action.run(&logger)?;

        for line in outcome.lines {
            println!("{}", line);
        }
        if let Some(path) = outcome.written {
            println!("QR code saved to {}", path.display());
        }
        Ok(())
    }
}
