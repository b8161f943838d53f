//! Error macros for minpath

/// Macro for rejecting an edge weight
#[macro_export]
macro_rules! bail_weight {
    ($weight:expr, $reason:expr) => {
        return Err($crate::error::MinPathError::invalid_weight($weight, $reason))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::MinPathError::UsageError($msg.to_string()))
    };
}

/// Macro for reporting a malformed script line
#[macro_export]
macro_rules! bail_script {
    ($line:expr, $reason:expr) => {
        return Err($crate::error::MinPathError::script($line, $reason))
    };
}
