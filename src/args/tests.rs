use super::*;
use crate::args::parsers::{parse_bool_env, parse_duration_text};
use crate::error::{AppError, AppResult};
use crate::run::Rate;
use std::time::Duration;
use super::test_support::parse_test_args;

mod defaults;
mod options;
mod parsers;
