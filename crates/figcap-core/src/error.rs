//! Error types for figcap-core.
//!
//! The core is pure computation, so the only failure mode lives in the
//! geometric primitives. Backend and extraction failures are defined by the
//! crates that own those concerns.

use std::fmt;

/// Errors from the geometric primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// The two lines are parallel or coincident; no unique crossing exists.
    ParallelLines,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::ParallelLines => {
                write!(f, "lines are parallel or coincident: no unique intersection")
            }
        }
    }
}

impl std::error::Error for GeometryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallel_lines_display() {
        let err = GeometryError::ParallelLines;
        assert_eq!(
            err.to_string(),
            "lines are parallel or coincident: no unique intersection"
        );
    }

    #[test]
    fn geometry_error_implements_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(GeometryError::ParallelLines);
        assert!(err.to_string().contains("parallel"));
    }

    #[test]
    fn geometry_error_clone_and_eq() {
        let err1 = GeometryError::ParallelLines;
        let err2 = err1;
        assert_eq!(err1, err2);
    }
}
