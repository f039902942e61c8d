// SPDX-License-Identifier: MPL-2.0
use lens_gallery::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Usage: lens-gallery [--config-dir DIR] [DIRECTORY]

Options:
  --config-dir DIR   Directory holding settings.toml
  -h, --help         Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lens_gallery=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let config_dir = match args.opt_value_from_str("--config-dir") {
        Ok(value) => value,
        Err(err) => {
            eprintln!("lens-gallery: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let flags = Flags {
        directory: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
        config_dir,
    };

    tracing::info!(directory = ?flags.directory, "starting lens-gallery");
    app::run(flags)
}
