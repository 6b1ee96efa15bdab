// SPDX-License-Identifier: MPL-2.0
use summon_docs::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
summon-docs: documentation for the Summon LLM proxy

USAGE:
  summon-docs [OPTIONS]

OPTIONS:
  --lang <code>        Select a language (en, ko, ja, zh, vi, de, es)
  --route <path>       Open a page, e.g. /usage or #/providers
  --data-dir <dir>     Directory for stored preferences
  --config-dir <dir>   Directory for settings.toml
  -h, --help           Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        route: args.opt_value_from_str("--route")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("summon_docs=info")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}
