// SPDX-License-Identifier: MPL-2.0
use simvla_page::app::{self, paths, Flags};
use simvla_page::asset_sync::SyncPlan;
use simvla_page::{config, logging};
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
simvla_page

USAGE:
  simvla_page [--config-dir DIR] [--root DIR] [--base-path PREFIX]
  simvla_page sync-assets [--config-dir DIR] [--root DIR]

OPTIONS:
  --config-dir DIR     Directory holding settings.toml
  --root DIR           Project root with simVLA.pdf, paper/ and public/
  --base-path PREFIX   Image locator prefix for this run (e.g. /SimVLA)
  -h, --help           Print this help
";

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    logging::init();

    let parsed = parse_common(&mut args);
    let (config_dir, root, base_path) = match parsed {
        Ok(values) => values,
        Err(err) => {
            tracing::error!("{err}");
            return ExitCode::from(2);
        }
    };
    paths::init_cli_overrides(config_dir.clone(), root.clone());

    let subcommand = match args.subcommand() {
        Ok(subcommand) => subcommand,
        Err(err) => {
            tracing::error!("{err}");
            return ExitCode::from(2);
        }
    };

    let unused = args.finish();
    if !unused.is_empty() {
        tracing::warn!(?unused, "ignoring unrecognized arguments");
    }

    match subcommand.as_deref() {
        Some("sync-assets") => sync_assets(),
        Some(other) => {
            tracing::error!("unknown command `{other}`");
            ExitCode::from(2)
        }
        None => {
            let flags = Flags {
                config_dir: config_dir.map(PathBuf::from),
                root: root.map(PathBuf::from),
                base_path,
            };
            match app::run(flags) {
                Ok(()) => ExitCode::SUCCESS,
                Err(err) => {
                    tracing::error!(%err, "page window failed");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

type CommonArgs = (Option<String>, Option<String>, Option<String>);

fn parse_common(args: &mut pico_args::Arguments) -> Result<CommonArgs, pico_args::Error> {
    Ok((
        args.opt_value_from_str("--config-dir")?,
        args.opt_value_from_str("--root")?,
        args.opt_value_from_str("--base-path")?,
    ))
}

fn sync_assets() -> ExitCode {
    let (config, warning) = config::load();
    if let Some(warning) = warning {
        tracing::warn!("{warning}");
    }

    let root = paths::project_root();
    match SyncPlan::from_config(&root, &config).run() {
        Ok(report) => {
            if report.changed.is_empty() {
                tracing::info!("Assets already up to date");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
