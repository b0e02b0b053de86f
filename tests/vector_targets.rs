use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use vellum::{
    Context, Error, PdfMetadata, PdfOutlineFlags, PdfSurface, PsLevel, PsSurface, SvgSurface,
    SvgUnit, SvgVersion, PDF_OUTLINE_ROOT,
};

#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    fn bytes(&self) -> Vec<u8> {
        self.0.borrow().clone()
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

#[test]
fn pdf_version_restriction_changes_the_header() {
    let versions = PdfSurface::versions();
    assert!(versions.contains(&vellum::PdfVersion::V1_4));
    assert!(versions.contains(&vellum::PdfVersion::V1_5));
    assert_eq!(
        PdfSurface::version_to_string(vellum::PdfVersion::V1_4).unwrap(),
        "PDF 1.4"
    );

    let target = SharedBuffer::default();
    PdfSurface::for_stream(target.clone(), 1.0, 1.0)
        .unwrap()
        .finish()
        .unwrap();
    let bytes = target.bytes();
    assert!(bytes.starts_with(b"%PDF-1.5") || bytes.starts_with(b"%PDF-1.7"));

    let target = SharedBuffer::default();
    let surface = PdfSurface::for_stream(target.clone(), 1.0, 1.0).unwrap();
    surface.restrict_to_version(vellum::PdfVersion::V1_4).unwrap();
    surface.finish().unwrap();
    assert!(target.bytes().starts_with(b"%PDF-1.4"));
}

#[test]
fn pdf_pages_take_their_size_from_set_size() {
    let target = SharedBuffer::default();
    let surface = PdfSurface::for_stream(target.clone(), 1.0, 1.0).unwrap();
    let context = Context::new(&surface).unwrap();
    surface.set_size(12.0, 100.0).unwrap();
    context.show_page().unwrap();
    surface.set_size(42.0, 700.0).unwrap();
    context.copy_page().unwrap();
    surface.finish().unwrap();

    let bytes = target.bytes();
    assert!(!contains(&bytes, b"/MediaBox [ 0 0 1 1 ]"));
    assert!(contains(&bytes, b"/MediaBox [ 0 0 12 100 ]"));
    assert!(contains(&bytes, b"/MediaBox [ 0 0 42 700 ]"));
}

#[test]
fn pdf_document_metadata_and_outline() {
    if vellum::version() < 11600 {
        return;
    }
    let target = SharedBuffer::default();
    let surface = PdfSurface::for_stream(target.clone(), 100.0, 100.0).unwrap();
    surface.set_metadata(PdfMetadata::Title, "Vellum fixture").unwrap();
    surface.set_metadata(PdfMetadata::Author, "vellum tests").unwrap();
    let chapter = surface
        .add_outline(
            PDF_OUTLINE_ROOT,
            "Chapter 1",
            "page=1 pos=[0 0]",
            PdfOutlineFlags::OPEN | PdfOutlineFlags::BOLD,
        )
        .unwrap();
    surface
        .add_outline(chapter, "Section 1.1", "page=1 pos=[0 50]", PdfOutlineFlags::empty())
        .unwrap();
    surface.set_page_label("i").unwrap();

    let context = Context::new(&surface).unwrap();
    context.show_page().unwrap();
    surface.finish().unwrap();

    let bytes = target.bytes();
    assert!(contains(&bytes, b"Vellum fixture"));
    assert!(contains(&bytes, b"Chapter 1"));
}

#[test]
fn larger_pdf_thumbnails_grow_the_document() {
    if vellum::version() < 11504 {
        return;
    }
    let mut sizes = Vec::new();
    for edge in [1, 9] {
        let target = SharedBuffer::default();
        let surface = PdfSurface::for_stream(target.clone(), 100.0, 100.0).unwrap();
        surface.set_thumbnail_size(edge, edge).unwrap();
        let context = Context::new(&surface).unwrap();
        context.paint().unwrap();
        context.show_page().unwrap();
        surface.finish().unwrap();
        sizes.push(target.bytes().len());
    }
    assert!(sizes[0] < sizes[1]);
}

#[test]
fn svg_document_carries_view_box_and_unit() {
    let versions = SvgSurface::versions();
    assert!(versions.contains(&SvgVersion::V1_1));
    assert!(versions.contains(&SvgVersion::V1_2));
    assert_eq!(
        SvgSurface::version_to_string(SvgVersion::V1_1).unwrap(),
        "SVG 1.1"
    );

    let target = SharedBuffer::default();
    SvgSurface::for_stream(target.clone(), 123.0, 432.0)
        .unwrap()
        .finish()
        .unwrap();
    let bytes = target.bytes();
    assert!(bytes.starts_with(b"<?xml"));
    assert!(contains(&bytes, b"viewBox=\"0 0 123 432\""));

    if vellum::version() < 11600 {
        return;
    }
    let target = SharedBuffer::default();
    let surface = SvgSurface::for_stream(target.clone(), 123.0, 432.0).unwrap();
    assert_eq!(surface.document_unit(), Some(SvgUnit::Pt));
    surface.set_document_unit(SvgUnit::Px).unwrap();
    assert_eq!(surface.document_unit(), Some(SvgUnit::Px));
    surface.finish().unwrap();
    assert!(contains(&target.bytes(), b"width=\"123px\""));
}

#[test]
fn svg_version_restriction_is_accepted() {
    let target = SharedBuffer::default();
    let surface = SvgSurface::for_stream(target, 1.0, 1.0).unwrap();
    surface.restrict_to_version(SvgVersion::V1_1).unwrap();
    surface.finish().unwrap();
}

#[test]
fn ps_document_header_levels_and_dsc_comments() {
    let levels = PsSurface::levels();
    assert!(levels.contains(&PsLevel::Level2));
    assert!(levels.contains(&PsLevel::Level3));
    assert_eq!(
        PsSurface::level_to_string(PsLevel::Level3).unwrap(),
        "PS Level 3"
    );

    let target = SharedBuffer::default();
    let surface = PsSurface::for_stream(target.clone(), 123.0, 432.0).unwrap();
    surface.restrict_to_level(PsLevel::Level2).unwrap();
    assert!(!surface.eps());
    surface.set_eps(true).unwrap();
    assert!(surface.eps());
    surface.set_eps(false).unwrap();
    assert!(!surface.eps());
    surface.set_size(10.0, 12.0).unwrap();
    surface.dsc_comment("%%Lorem").unwrap();
    surface.dsc_begin_setup().unwrap();
    surface.dsc_comment("%%ipsum").unwrap();
    surface.dsc_begin_page_setup().unwrap();
    surface.dsc_comment("%%dolor").unwrap();
    surface.finish().unwrap();

    let bytes = target.bytes();
    assert!(bytes.starts_with(b"%!PS"));
    assert!(contains(&bytes, b"%%Lorem"));
    assert!(contains(&bytes, b"%%ipsum"));
    assert!(contains(&bytes, b"%%dolor"));
}

#[test]
fn pdf_link_tags_survive_to_the_output() {
    if vellum::version() < 11600 {
        return;
    }
    let target = SharedBuffer::default();
    let surface = PdfSurface::for_stream(target.clone(), 100.0, 100.0).unwrap();
    let context = Context::new(&surface).unwrap();
    context
        .tag_begin("Link", "uri='https://example.com/'")
        .unwrap();
    context.move_to(10.0, 10.0).unwrap();
    context.line_to(50.0, 10.0).unwrap();
    context.stroke().unwrap();
    context.tag_end("Link").unwrap();
    context.show_page().unwrap();
    surface.finish().unwrap();
    assert!(contains(&target.bytes(), b"example.com"));
}

#[test]
fn targetless_surfaces_support_drawing_for_measurement() {
    let surface = PdfSurface::without_target(1.0, 9.0).unwrap();
    let context = Context::new(&surface).unwrap();
    context.rectangle(0.0, 0.0, 1.0, 1.0).unwrap();
    context.fill().unwrap();
    surface.finish().unwrap();

    SvgSurface::without_target(10.0, 10.0).unwrap().finish().unwrap();
    PsSurface::without_target(10.0, 10.0).unwrap().finish().unwrap();
}

#[test]
fn write_errors_surface_as_the_original_io_error() {
    struct FailingWriter;

    impl io::Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let surface = PdfSurface::for_stream(FailingWriter, 10.0, 10.0).unwrap();
    let context = Context::new(&surface).unwrap();
    context.show_page().unwrap();
    match surface.finish() {
        Err(Error::Io(err)) => assert_eq!(err.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("expected the writer's error back, got {other:?}"),
    }
}
