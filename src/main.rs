// SPDX-License-Identifier: MPL-2.0
use iced_alerts::app::{self, Flags};
use std::path::PathBuf;

const HELP: &str = "\
iced_alerts - stacked alert demo

USAGE:
  iced_alerts [OPTIONS]

OPTIONS:
  --config <path>        Settings file (default: <config dir>/IcedAlerts/settings.toml)
  --diagnostics <path>   Where to write the diagnostics report
  -h, --help             Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        config_path: args.opt_value_from_os_str("--config", |s| {
            Ok::<_, std::convert::Infallible>(PathBuf::from(s))
        })?,
        diagnostics_path: args.opt_value_from_os_str("--diagnostics", |s| {
            Ok::<_, std::convert::Infallible>(PathBuf::from(s))
        })?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Ignoring unexpected arguments: {remaining:?}");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    match parse_flags() {
        Ok(Some(flags)) => app::run(flags),
        Ok(None) => {
            print!("{HELP}");
            Ok(())
        }
        Err(error) => {
            eprintln!("Error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    }
}
