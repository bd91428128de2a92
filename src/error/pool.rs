use thiserror::Error;

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("No requests to send: none of the {attempted} serial(s) produced a usable request.")]
    Empty { attempted: usize },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
