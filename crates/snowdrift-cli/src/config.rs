use anyhow::bail;
use clap::{Parser, Subcommand};
use core::time::Duration;
use snowdrift::codec::{MAX_DISCRIMINATOR, MAX_HALF_DISCRIMINATOR};

/// Upper bound on the number of IDs minted by one `generate` invocation.
pub const MAX_COUNT: usize = 10_000_000;

/// Command-line configuration for the `snowdrift` binary.
///
/// Every option can also be supplied through the environment (or a `.env`
/// file in the working directory).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "snowdrift",
    version,
    about = "Generate and parse coordination-free Snowflake IDs"
)]
pub struct CliArgs {
    /// Custom epoch, in milliseconds since 1970-01-01 UTC.
    ///
    /// Must be non-zero and not in the future. Defaults to
    /// 2012-03-28T00:00:00Z. IDs only decode to the right time under the
    /// epoch they were minted with.
    ///
    /// Environment variable: `SNOWDRIFT_EPOCH_MS`
    #[arg(long, env = "SNOWDRIFT_EPOCH_MS", global = true)]
    pub epoch_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Mint new IDs, one per line.
    Generate {
        /// Machine discriminator. 0..=1023 alone, 0..=31 with `--process-id`.
        ///
        /// Environment variable: `SNOWDRIFT_MACHINE_ID`
        #[arg(long, env = "SNOWDRIFT_MACHINE_ID")]
        machine_id: u64,

        /// Process discriminator (0..=31). Switches to the two-field layout.
        ///
        /// Environment variable: `SNOWDRIFT_PROCESS_ID`
        #[arg(long, env = "SNOWDRIFT_PROCESS_ID")]
        process_id: Option<u64>,

        /// Number of IDs to mint.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
    /// Decode an ID into its timestamp, discriminator(s), and sequence.
    Parse {
        /// The raw 64-bit ID.
        id: u64,

        /// Decode with the two-field (machine + process) layout.
        #[arg(long, default_value_t = false)]
        dual: bool,

        /// Print JSON instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discriminator {
    Single(u64),
    Dual { machine_id: u64, process_id: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Generate {
        discriminator: Discriminator,
        count: usize,
    },
    Parse {
        id: u64,
        dual: bool,
        format: OutputFormat,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub epoch: Option<Duration>,
    pub action: Action,
}

impl TryFrom<CliArgs> for AppConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let action = match args.command {
            Command::Generate {
                machine_id,
                process_id,
                count,
            } => {
                if count == 0 {
                    bail!("count must be greater than 0");
                }
                if count > MAX_COUNT {
                    bail!("count ({count}) exceeds the maximum of {MAX_COUNT}");
                }

                // The codec would silently store these as 0.
                let discriminator = match process_id {
                    None => {
                        if machine_id > MAX_DISCRIMINATOR {
                            bail!(
                                "SNOWDRIFT_MACHINE_ID ({machine_id}) exceeds the 10-bit field (max = {MAX_DISCRIMINATOR})"
                            );
                        }
                        Discriminator::Single(machine_id)
                    }
                    Some(process_id) => {
                        if machine_id > MAX_HALF_DISCRIMINATOR {
                            bail!(
                                "SNOWDRIFT_MACHINE_ID ({machine_id}) exceeds the 5-bit field (max = {MAX_HALF_DISCRIMINATOR})"
                            );
                        }
                        if process_id > MAX_HALF_DISCRIMINATOR {
                            bail!(
                                "SNOWDRIFT_PROCESS_ID ({process_id}) exceeds the 5-bit field (max = {MAX_HALF_DISCRIMINATOR})"
                            );
                        }
                        Discriminator::Dual {
                            machine_id,
                            process_id,
                        }
                    }
                };
                Action::Generate {
                    discriminator,
                    count,
                }
            }
            Command::Parse { id, dual, json } => Action::Parse {
                id,
                dual,
                format: if json {
                    OutputFormat::Json
                } else {
                    OutputFormat::Text
                },
            },
        };

        Ok(Self {
            epoch: args.epoch_ms.map(Duration::from_millis),
            action,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> anyhow::Result<AppConfig> {
        let args = CliArgs::try_parse_from(std::iter::once("snowdrift").chain(args.iter().copied()))?;
        AppConfig::try_from(args)
    }

    #[test]
    fn generate_single_field() {
        let config = config(&["generate", "--machine-id", "1023", "-n", "3"]).unwrap();
        assert_eq!(config.epoch, None);
        assert_eq!(
            config.action,
            Action::Generate {
                discriminator: Discriminator::Single(1023),
                count: 3,
            }
        );
    }

    #[test]
    fn generate_dual_field() {
        let config = config(&[
            "--epoch-ms",
            "1262304000000",
            "generate",
            "--machine-id",
            "1",
            "--process-id",
            "24",
        ])
        .unwrap();
        assert_eq!(config.epoch, Some(Duration::from_secs(1_262_304_000)));
        assert_eq!(
            config.action,
            Action::Generate {
                discriminator: Discriminator::Dual {
                    machine_id: 1,
                    process_id: 24,
                },
                count: 1,
            }
        );
    }

    #[test]
    fn rejects_out_of_range_discriminators() {
        assert!(config(&["generate", "--machine-id", "1024"]).is_err());
        assert!(config(&["generate", "--machine-id", "32", "--process-id", "1"]).is_err());
        assert!(config(&["generate", "--machine-id", "1", "--process-id", "32"]).is_err());
    }

    #[test]
    fn rejects_zero_count() {
        let err = config(&["generate", "--machine-id", "1", "-n", "0"]).unwrap_err();
        assert!(err.to_string().contains("count"), "{err}");
    }

    #[test]
    fn parse_flags() {
        let config = config(&["parse", "--dual", "--json", "1292065108376162304"]).unwrap();
        assert_eq!(
            config.action,
            Action::Parse {
                id: 1_292_065_108_376_162_304,
                dual: true,
                format: OutputFormat::Json,
            }
        );
    }
}
