use std::path::PathBuf;

use clap::ArgMatches;
use tracing::warn;

use crate::args::LoadGenArgs;
use crate::error::{AppError, AppResult, ValidationError};
use crate::http::ClientOptions;
use crate::run::{BaseUrl, RunConfig};

use super::types::RunPlan;

pub(crate) fn build_plan(mut args: LoadGenArgs, matches: &ArgMatches) -> AppResult<RunPlan> {
    apply_config(&mut args, matches)?;

    let base_url = match args.base_url.as_deref() {
        Some(raw) => BaseUrl::parse(raw)?,
        None => {
            tracing::error!("Missing responder base URL (set --base-url or provide in config).");
            return Err(AppError::validation(ValidationError::MissingBaseUrl));
        }
    };
    let issuer_path = required_path(args.issuer.take(), ValidationError::MissingIssuer)?;
    let serials_path = required_path(args.serials.take(), ValidationError::MissingSerials)?;
    let latency_path =
        required_path(args.latency_path.take(), ValidationError::MissingLatencyPath)?;

    if !args.get_rate.is_enabled() && !args.post_rate.is_enabled() {
        warn!("Both --get-rate and --post-rate are disabled; the run will send nothing.");
    }

    Ok(RunPlan {
        run: RunConfig::new(base_url, args.get_rate, args.post_rate, args.duration),
        client: ClientOptions {
            request_timeout: args.request_timeout,
            connect_timeout: args.connect_timeout,
            no_user_agent: args.no_ua,
        },
        issuer_path,
        serials_path,
        latency_path,
    })
}

fn apply_config(args: &mut LoadGenArgs, matches: &ArgMatches) -> AppResult<()> {
    if let Some(config) = crate::config::load_config(args.config.as_deref())? {
        crate::config::apply_config(args, matches, &config)?;
    }
    Ok(())
}

fn required_path(value: Option<String>, missing: ValidationError) -> AppResult<PathBuf> {
    match value {
        Some(path) if !path.trim().is_empty() => Ok(PathBuf::from(path)),
        _ => Err(AppError::validation(missing)),
    }
}
