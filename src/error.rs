use thiserror::Error;

/// The error type for a whole export invocation.
///
/// Degenerate geometry (zero-area triangles, zero-length normals, near-zero
/// quaternions) is never an error; those cases resolve locally through the
/// documented fallbacks. Only a missing scene or failing I/O aborts an export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no mesh geometry to export")]
    NoGeometry,
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
