use crate::shared::frame::{Frame, InvalidImage};

/// Domain interface for per-frame processing: the host calls `process` once
/// per decoded frame.
///
/// Mutation policy: in place. The filter draws into the borrowed buffer and
/// never allocates a copy; callers that need the original must clone the
/// frame first. Implementations hold configuration only (no interior
/// mutability), so a host that pipelines frames across worker threads may
/// invoke `process` concurrently on distinct frames.
pub trait FrameFilter: Send + Sync {
    fn process(&self, frame: &mut Frame) -> Result<(), InvalidImage>;
}
