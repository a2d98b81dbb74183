use std::io::Cursor;

use glam::*;
use mesh_3dgs_export::{ExportOptions, PlySplatPod, PlySplats, SplatSample, export_ply};

use crate::common::given;

fn sample_splats() -> PlySplats {
    let samples = [
        SplatSample::new(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::Z,
            Vec3::new(0.9, 0.1, 0.4),
            Vec3::new(0.1, 0.2, 0.3),
        ),
        SplatSample::new(
            Vec3::new(-4.0, 0.5, 8.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.2, 0.8, 0.3),
            Vec3::new(0.05, 0.05, 1e-6),
        ),
    ];

    PlySplats::from_samples(&samples, &ExportOptions::default())
}

#[test]
fn test_record_should_be_exactly_62_floats_with_no_padding() {
    assert_eq!(std::mem::size_of::<PlySplatPod>(), 248);
    assert_eq!(PlySplats::ply_properties().count(), 62);
}

#[test]
fn test_header_should_declare_the_exact_3dgs_schema() {
    let splats = sample_splats();
    let mut buffer = Vec::new();
    splats.write_ply(&mut buffer).unwrap();

    let end = buffer
        .windows(b"end_header\n".len())
        .position(|w| w == b"end_header\n")
        .expect("end_header present")
        + b"end_header\n".len();
    let header = std::str::from_utf8(&buffer[..end]).unwrap();

    assert!(header.starts_with("ply\nformat binary_little_endian 1.0\n"));
    assert!(header.contains("element vertex 2\n"));
    assert!(header.contains("property float x\n"));
    assert!(header.contains("property float f_rest_44\n"));
    assert!(header.contains("property float rot_3\n"));
    assert_eq!(header.matches("property float ").count(), 62);

    // Payload is exactly one fixed record per splat.
    assert_eq!(buffer.len() - end, 2 * 248);
}

#[test]
fn test_write_then_read_should_round_trip_records() {
    let splats = sample_splats();

    let mut buffer = Vec::new();
    splats.write_ply(&mut buffer).unwrap();

    let read = PlySplats::read_ply(&mut Cursor::new(buffer)).unwrap();

    assert_eq!(read.0, splats.0);
}

#[test]
fn test_export_ply_into_buffer_should_match_header_count() {
    let scene = given::red_quad_scene();
    let mut buffer = Vec::new();

    let count = export_ply(&scene, &ExportOptions::default(), &mut buffer).unwrap();

    assert_eq!(count, 4);
    let read = PlySplats::read_ply(&mut Cursor::new(buffer)).unwrap();
    assert_eq!(read.len(), 4);
}

#[test]
fn test_read_should_reject_foreign_schema() {
    let foreign = b"ply\nformat binary_little_endian 1.0\nelement vertex 0\nproperty float x\nend_header\n";

    let error = PlySplats::read_ply(&mut Cursor::new(foreign.to_vec())).unwrap_err();

    assert_eq!(error.kind(), std::io::ErrorKind::InvalidData);
}

#[test]
fn test_read_should_reject_ascii_encoding() {
    let ascii = b"ply\nformat ascii 1.0\nelement vertex 0\nend_header\n";

    let error = PlySplats::read_ply(&mut Cursor::new(ascii.to_vec())).unwrap_err();

    assert_eq!(error.kind(), std::io::ErrorKind::InvalidData);
}

#[test]
fn test_huge_header_count_with_empty_payload_should_fail_cheaply() {
    // A valid header lying about its record count; no payload follows.
    let mut lying = String::from("ply\nformat binary_little_endian 1.0\nelement vertex 4000000000\n");
    for property in PlySplats::ply_properties() {
        lying.push_str(&format!("property float {property}\n"));
    }
    lying.push_str("end_header\n");

    let error = PlySplats::read_ply(&mut Cursor::new(lying.into_bytes())).unwrap_err();

    assert_eq!(error.kind(), std::io::ErrorKind::UnexpectedEof);
}

#[test]
fn test_truncated_payload_should_fail() {
    let splats = sample_splats();
    let mut buffer = Vec::new();
    splats.write_ply(&mut buffer).unwrap();
    buffer.truncate(buffer.len() - 10);

    assert!(PlySplats::read_ply(&mut Cursor::new(buffer)).is_err());
}
