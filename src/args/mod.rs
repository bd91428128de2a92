//! CLI argument types and parsing helpers.
mod cli;
pub(crate) mod parsers;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;

pub use cli::LoadGenArgs;

pub(crate) use parsers::parse_duration_text;
