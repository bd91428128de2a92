use std::path::PathBuf;

use crate::http::ClientOptions;
use crate::run::RunConfig;

/// A validated run, ready for warm-up.
#[derive(Debug)]
pub(in crate::entry) struct RunPlan {
    pub(super) run: RunConfig,
    pub(super) client: ClientOptions,
    pub(super) issuer_path: PathBuf,
    pub(super) serials_path: PathBuf,
    pub(super) latency_path: PathBuf,
}
