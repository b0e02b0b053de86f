use std::io::Cursor;

use base64::Engine as _;
use vellum::{Context, Format, ImageSurface};

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

/// A 1x1 ARGB32 PNG with a single semi-transparent pixel.
fn png_fixture() -> Vec<u8> {
    base64::engine::general_purpose::STANDARD
        .decode(
            "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVQI12O\
             w69x7BgAE3gJRgNit0AAAAABJRU5ErkJggg==",
        )
        .unwrap()
}

fn pixel(argb: [u8; 4]) -> [u8; 4] {
    if cfg!(target_endian = "little") {
        [argb[3], argb[2], argb[1], argb[0]]
    } else {
        argb
    }
}

#[test]
fn encoding_targets_agree() {
    let surface = ImageSurface::new(Format::Argb32, 1, 1).unwrap();
    let context = Context::new(&surface).unwrap();
    context.set_source_rgba(1.0, 0.5, 0.25, 0.75).unwrap();
    context.paint().unwrap();

    let bytes = surface.write_to_png_bytes().unwrap();
    assert!(bytes.starts_with(PNG_MAGIC));

    let mut streamed = Vec::new();
    surface.write_to_png_stream(&mut streamed).unwrap();
    assert_eq!(streamed, bytes);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.png");
    surface.write_to_png(&path).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), bytes);
}

#[test]
fn decoding_from_stream_and_file_agree() {
    let fixture = png_fixture();

    let image = ImageSurface::from_png_stream(&mut Cursor::new(&fixture)).unwrap();
    assert_eq!(image.format(), Some(Format::Argb32));
    assert_eq!(image.width(), 1);
    assert_eq!(image.height(), 1);
    assert_eq!(image.stride(), 4);
    assert_eq!(image.data().unwrap(), pixel([0xcc, 0x32, 0x6e, 0x97]));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fixture.png");
    std::fs::write(&path, &fixture).unwrap();
    let image = ImageSurface::from_png(&path).unwrap();
    assert_eq!(image.data().unwrap(), pixel([0xcc, 0x32, 0x6e, 0x97]));
}

#[test]
fn decoded_pixels_round_trip_through_encoding() {
    let original = ImageSurface::from_png_stream(&mut Cursor::new(png_fixture())).unwrap();
    let encoded = original.write_to_png_bytes().unwrap();
    let decoded = ImageSurface::from_png_stream(&mut Cursor::new(encoded)).unwrap();
    assert_eq!(decoded.data().unwrap(), original.data().unwrap());
}

#[test]
fn truncated_and_empty_input_fail_to_decode() {
    let fixture = png_fixture();
    assert!(ImageSurface::from_png_stream(&mut Cursor::new(&fixture[..30])).is_err());
    assert!(ImageSurface::from_png_stream(&mut Cursor::new(&[] as &[u8])).is_err());
    assert!(ImageSurface::from_png("/nonexistent/path.png").is_err());
}
