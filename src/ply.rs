use std::io::{BufRead, Write};

use bytemuck::Zeroable;
use glam::*;
use itertools::Itertools;

use crate::{ExportOptions, RotOrder, SIGMA_MIN, SplatSample, orientation, sanitize};

/// The POD representation of one splat in 3DGS PLY format.
///
/// Fields are stored as arrays because using glam types would add padding
/// according to C alignment rules. The record is exactly 62 floats
/// (248 bytes) with no internal padding.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PlySplatPod {
    pub pos: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
    /// Higher-order SH bands; this exporter never estimates directional
    /// reflectance, so these are always zero.
    pub sh_rest: [f32; 45],
    pub opacity: f32,
    pub scale: [f32; 3],
    pub rot: [f32; 4],
}

impl PlySplatPod {
    /// Build the record for one sample under the given options.
    ///
    /// `opacity` is the shared per-export logit; see
    /// [`PlySplats::from_samples`].
    pub fn from_sample(sample: &SplatSample, opacity: f32, options: &ExportOptions) -> Self {
        let pos = sanitize::finite_vec3(sample.position);

        // Orientation always uses the real normal; the written normal is
        // gated by the export-normals switch.
        let normal = sanitize::finite_vec3(sample.normal);
        let q = sanitize::unit_or_identity(orientation::from_normal(normal));
        let written_normal = if options.export_normals {
            normal
        } else {
            Vec3::Z
        };

        let corrected = options.correction.apply(sample.color_linear);
        let color = sanitize::finite_vec3(options.encoding.encode(corrected));

        let scale = sample
            .sigma
            .max(Vec3::splat(SIGMA_MIN))
            .map(|x| x.ln())
            .to_array();

        let rot = match options.rot_order {
            RotOrder::WFirst => [q.w, q.x, q.y, q.z],
            RotOrder::XFirst => [q.x, q.y, q.z, q.w],
        };

        Self {
            pos: pos.to_array(),
            normal: written_normal.to_array(),
            color: color.to_array(),
            sh_rest: [0.0; 45],
            opacity,
            scale,
            rot,
        }
    }
}

/// The ordered list of PLY splat records of one export.
#[derive(Debug, Default, Clone)]
pub struct PlySplats(pub Vec<PlySplatPod>);

impl PlySplats {
    /// Upper bound on the record capacity reserved from the header count
    /// alone, before any payload byte backs it up (64Ki records, ~16 MiB).
    const READ_CAPACITY_LIMIT: usize = 1 << 16;

    /// The 62 property names of the 3DGS PLY schema, in file order.
    pub fn ply_properties() -> impl Iterator<Item = String> {
        ["x", "y", "z", "nx", "ny", "nz", "f_dc_0", "f_dc_1", "f_dc_2"]
            .into_iter()
            .map(str::to_owned)
            .chain((0..45).map(|i| format!("f_rest_{i}")))
            .chain(
                ["opacity", "scale_0", "scale_1", "scale_2", "rot_0", "rot_1", "rot_2", "rot_3"]
                    .into_iter()
                    .map(str::to_owned),
            )
    }

    /// Convert sampled splats into PLY records.
    ///
    /// The opacity logit is computed once from the configured alpha, clamped
    /// to `[1e-6, 1 - 1e-6]` so the transform stays finite.
    pub fn from_samples(samples: &[SplatSample], options: &ExportOptions) -> Self {
        let a = options.alpha.clamp(1e-6, 1.0 - 1e-6);
        let opacity = (a / (1.0 - a)).ln();

        Self(
            samples
                .iter()
                .map(|sample| PlySplatPod::from_sample(sample, opacity, options))
                .collect(),
        )
    }

    /// Get the number of splats.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no splats.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the records.
    pub fn iter(&self) -> impl Iterator<Item = &PlySplatPod> {
        self.0.iter()
    }

    /// Write the splats to a PLY buffer.
    ///
    /// The header is ASCII terminated by `end_header`; the payload is one
    /// fixed 248-byte binary little-endian record per splat.
    pub fn write_ply(&self, writer: &mut impl Write) -> Result<(), std::io::Error> {
        writeln!(writer, "ply")?;
        writeln!(writer, "format binary_little_endian 1.0")?;
        writeln!(writer, "element vertex {}", self.0.len())?;
        for property in Self::ply_properties() {
            writeln!(writer, "property float {property}")?;
        }
        writeln!(writer, "end_header")?;

        self.0
            .iter()
            .try_for_each(|splat| writer.write_all(bytemuck::bytes_of(splat)))?;

        Ok(())
    }

    /// Write the splats to a PLY file, truncating any existing file.
    pub fn write_ply_file(&self, path: impl AsRef<std::path::Path>) -> Result<(), std::io::Error> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        self.write_ply(&mut writer)
    }

    /// Read splats back from a PLY buffer.
    ///
    /// Only the exact schema produced by [`PlySplats::write_ply`] is
    /// accepted; anything else fails with
    /// [`std::io::ErrorKind::InvalidData`].
    pub fn read_ply(reader: &mut impl BufRead) -> Result<Self, std::io::Error> {
        let count = Self::read_ply_header(reader)?;
        log::info!("Reading 3DGS PLY with {count} splats");

        // The header count is not trusted for preallocation; a malformed
        // file claiming billions of records would otherwise allocate up
        // front before the payload disproves it.
        let mut splats = Vec::with_capacity(count.min(Self::READ_CAPACITY_LIMIT));
        for _ in 0..count {
            let mut splat = PlySplatPod::zeroed();
            reader.read_exact(bytemuck::bytes_of_mut(&mut splat))?;
            splats.push(splat);
        }

        Ok(Self(splats))
    }

    /// Read splats back from a PLY file.
    pub fn read_ply_file(path: impl AsRef<std::path::Path>) -> Result<Self, std::io::Error> {
        let file = std::fs::File::open(path)?;
        let mut reader = std::io::BufReader::new(file);
        Self::read_ply(&mut reader)
    }

    /// Parse and validate the header, returning the splat count.
    pub fn read_ply_header(reader: &mut impl BufRead) -> Result<usize, std::io::Error> {
        let parser = ply_rs::parser::Parser::<ply_rs::ply::DefaultElement>::new();
        let header = parser.read_header(reader)?;

        if header.encoding != ply_rs::ply::Encoding::BinaryLittleEndian {
            return Err(invalid_data("PLY encoding is not binary little endian"));
        }

        let vertex = header
            .elements
            .get("vertex")
            .ok_or_else(|| invalid_data("vertex element not found in PLY header"))?;

        let matches_schema = vertex.properties.len() == Self::ply_properties().count()
            && vertex
                .properties
                .iter()
                .zip_eq(Self::ply_properties())
                .all(|((name, property), expected)| {
                    *name == expected
                        && property.data_type
                            == ply_rs::ply::PropertyType::Scalar(ply_rs::ply::ScalarType::Float)
                });

        if !matches_schema {
            return Err(invalid_data("PLY properties do not match the 3DGS schema"));
        }

        Ok(vertex.count)
    }
}

impl From<Vec<PlySplatPod>> for PlySplats {
    fn from(splats: Vec<PlySplatPod>) -> Self {
        Self(splats)
    }
}

impl FromIterator<PlySplatPod> for PlySplats {
    fn from_iter<T: IntoIterator<Item = PlySplatPod>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn invalid_data(message: &str) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidData, message.to_string())
}
