use std::io::Write;

use crate::{ExportError, ExportOptions, PlySplats, SceneGeometry, sampler};

/// Export a scene's meshes as 3DGS splats into an arbitrary writer.
///
/// Returns the number of splats written. Sampling failures (including
/// [`ExportError::NoGeometry`]) surface before anything is written.
pub fn export_ply(
    scene: &SceneGeometry,
    options: &ExportOptions,
    writer: &mut impl Write,
) -> Result<usize, ExportError> {
    let samples = sampler::sample_scene(scene, options)?;
    let splats = PlySplats::from_samples(&samples, options);
    splats.write_ply(writer)?;
    Ok(splats.len())
}

/// Export a scene's meshes as a 3DGS PLY file.
///
/// The file is created (or truncated) only after sampling succeeds, so a
/// geometry-less scene never leaves a file behind. A failure mid-write may
/// leave a partial file; writes are not transactional. The export runs to
/// completion synchronously, with no retries.
pub fn export_ply_file(
    scene: &SceneGeometry,
    options: &ExportOptions,
    path: impl AsRef<std::path::Path>,
) -> Result<usize, ExportError> {
    let samples = sampler::sample_scene(scene, options)?;
    let splats = PlySplats::from_samples(&samples, options);
    splats.write_ply_file(path.as_ref())?;

    log::info!(
        "PLY written: {} ({} splats)",
        path.as_ref().display(),
        splats.len()
    );

    Ok(splats.len())
}
