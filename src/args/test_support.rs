use clap::Parser;

use crate::error::{AppError, AppResult};

use super::LoadGenArgs;

pub(crate) fn parse_test_args<I, T>(args: I) -> AppResult<LoadGenArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    LoadGenArgs::try_parse_from(args).map_err(AppError::from)
}
