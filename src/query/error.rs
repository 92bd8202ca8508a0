use core::fmt;

/// Error indicating that a ray with a zero-length direction was passed to a
/// ray-casting query.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DegenerateRay;

impl fmt::Display for DegenerateRay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad("ray direction has zero length")
    }
}

impl core::error::Error for DegenerateRay {}
