use super::{ConfigError, PoolError, RecorderError, ValidationError};

impl From<&'static str> for ValidationError {
    fn from(message: &'static str) -> Self {
        ValidationError::TestExpectation { message }
    }
}

impl From<String> for ValidationError {
    fn from(value: String) -> Self {
        ValidationError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}

impl From<&'static str> for ConfigError {
    fn from(message: &'static str) -> Self {
        ConfigError::TestExpectation { message }
    }
}

impl From<String> for ConfigError {
    fn from(value: String) -> Self {
        ConfigError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}

impl From<&'static str> for PoolError {
    fn from(message: &'static str) -> Self {
        PoolError::TestExpectation { message }
    }
}

impl From<String> for PoolError {
    fn from(value: String) -> Self {
        PoolError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}

impl From<&'static str> for RecorderError {
    fn from(message: &'static str) -> Self {
        RecorderError::TestExpectation { message }
    }
}

impl From<String> for RecorderError {
    fn from(value: String) -> Self {
        RecorderError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}
