//! Error macros for wayfinder

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::WayfinderError::invalid_value($context, $value))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::WayfinderError::UsageError($msg.to_string()))
    };
}

/// Macro for rejecting an edge read from a graph file
#[macro_export]
macro_rules! bail_graph_file {
    ($path:expr, $reason:expr) => {
        return Err($crate::error::WayfinderError::graph_file($path, $reason))
    };
}
