// SPDX-License-Identifier: MPL-2.0
use iced_clock::app::{self, paths, Flags};
use iced_clock::config;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    let dump_config = args.contains("--dump-config");
    let config_dir = args
        .opt_value_from_str("--config-dir")
        .unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring --config-dir");
            None
        });
    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    let flags = Flags {
        config_dir,
        dump_config,
    };

    if flags.dump_config {
        paths::init_cli_override(flags.config_dir);
        let (config, warning) = config::load();
        if let Some(key) = warning {
            tracing::warn!(%key, "falling back to default settings");
        }
        match config.to_toml() {
            Ok(rendered) => print!("{rendered}"),
            Err(err) => tracing::error!(%err, "failed to render configuration"),
        }
        return Ok(());
    }

    app::run(flags)
}
