use thiserror::Error;

/// Recognized rejection values. These never cross the simulation boundary
/// as panics; callers check the returned `Result`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Configuration failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A manual resize would take the arena outside [min_size, original_size].
    /// The arena is left unchanged.
    #[error("arena resize rejected: {width:.0}x{height:.0} outside allowed bounds")]
    ResizeRejected { width: f32, height: f32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SimError::ResizeRejected {
            width: 90.0,
            height: 200.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("90"));
        assert!(msg.contains("rejected"));
    }
}
