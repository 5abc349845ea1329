use stderrlog::{LogLevelNum, Timestamp};

/// The verbosity used when no `-v` flag is given: info.
pub const DEFAULT_VERBOSITY: u8 = 3;

/// Modules whose records reach stderr.
const LOGGED_MODULES: [&str; 2] = ["childes_prep", "childes_prep_cli"];

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long)]
    pub quiet: bool,

    /// Raise verbosity past the default (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Prefix log lines with a timestamp.
    #[clap(short, long)]
    pub ts: bool,
}

impl LogArgs {
    /// The stderr verbosity: `default` raised by one step per `-v`.
    pub fn verbosity(
        &self,
        default: u8,
    ) -> LogLevelNum {
        match default.saturating_add(self.verbose) {
            0 => LogLevelNum::Off,
            1 => LogLevelNum::Error,
            2 => LogLevelNum::Warn,
            3 => LogLevelNum::Info,
            4 => LogLevelNum::Debug,
            _ => LogLevelNum::Trace,
        }
    }

    /// Install the stderr logger for the library and CLI modules.
    pub fn setup_logging(&self) -> Result<(), Box<dyn std::error::Error>> {
        stderrlog::new()
            .modules(LOGGED_MODULES)
            .quiet(self.quiet)
            .verbosity(self.verbosity(DEFAULT_VERBOSITY))
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}
