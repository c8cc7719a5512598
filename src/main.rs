// SPDX-License-Identifier: MPL-2.0
use pinch::app::{self, paths, Flags};

const HELP: &str = "\
Pinch - image viewer with pinch-to-zoom

USAGE:
  pinch [OPTIONS]

OPTIONS:
  --lang <ID>          Interface language (e.g. en-US, fr)
  --config-dir <DIR>   Directory holding settings.toml
  --catalog <FILE>     TOML file listing the pages to show
  --assets-dir <DIR>   Directory holding the page images
  -h, --help           Print this help

ENVIRONMENT:
  PINCH_CONFIG_DIR     Same as --config-dir
  PINCH_ASSETS_DIR     Default for --assets-dir
  RUST_LOG             Log filter (e.g. pinch=debug)
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        catalog: args.opt_value_from_str("--catalog")?,
        assets_dir: args.opt_value_from_str("--assets-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("Ignoring unexpected arguments: {:?}", rest);
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    env_logger::init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
