use std::f64::consts::PI;

use vellum::patterns::Gradient;
use vellum::{
    Antialias, AnyFontFace, AnyPattern, AnySurface, Content, Context, FillRule, FontOptions,
    FontSlant, FontWeight, Format, HintMetrics, ImageSurface, LineCap, LineJoin, LinearGradient,
    Matrix, Operator, PathSegment, ScaledFont, SurfacePattern, TextCluster, TextExtents,
    ToyFontFace,
};

fn pixel(argb: [u8; 4]) -> [u8; 4] {
    if cfg!(target_endian = "little") {
        [argb[3], argb[2], argb[1], argb[0]]
    } else {
        argb
    }
}

fn round_tuple(values: (f64, f64, f64, f64, f64, f64)) -> (f64, f64, f64, f64, f64, f64) {
    fn r(v: f64) -> f64 {
        (v * 1e6).round() / 1e6
    }
    (
        r(values.0),
        r(values.1),
        r(values.2),
        r(values.3),
        r(values.4),
        r(values.5),
    )
}

fn test_context() -> (ImageSurface, Context) {
    let surface = ImageSurface::new(Format::Argb32, 1, 1).unwrap();
    let context = Context::new(&surface).unwrap();
    (surface, context)
}

#[test]
fn graphics_state_defaults_and_round_trips() {
    let (_surface, context) = test_context();

    assert_eq!(context.antialias(), Some(Antialias::Default));
    context.set_antialias(Antialias::Best).unwrap();
    assert_eq!(context.antialias(), Some(Antialias::Best));

    assert_eq!(context.dash(), (vec![], 0.0));
    context.set_dash(&[4.0, 1.0, 3.0, 2.0], 1.5).unwrap();
    assert_eq!(context.dash(), (vec![4.0, 1.0, 3.0, 2.0], 1.5));
    assert_eq!(context.dash_count(), 4);

    assert_eq!(context.fill_rule(), Some(FillRule::Winding));
    context.set_fill_rule(FillRule::EvenOdd).unwrap();
    assert_eq!(context.fill_rule(), Some(FillRule::EvenOdd));

    assert_eq!(context.line_cap(), Some(LineCap::Butt));
    context.set_line_cap(LineCap::Square).unwrap();
    assert_eq!(context.line_cap(), Some(LineCap::Square));

    assert_eq!(context.line_join(), Some(LineJoin::Miter));
    context.set_line_join(LineJoin::Round).unwrap();
    assert_eq!(context.line_join(), Some(LineJoin::Round));

    assert_eq!(context.line_width(), 2.0);
    context.set_line_width(13.0).unwrap();
    assert_eq!(context.line_width(), 13.0);

    assert_eq!(context.miter_limit(), 10.0);
    context.set_miter_limit(4.0).unwrap();
    assert_eq!(context.miter_limit(), 4.0);

    assert_eq!(context.operator(), Some(Operator::Over));
    context.set_operator(Operator::Xor).unwrap();
    assert_eq!(context.operator(), Some(Operator::Xor));

    assert_eq!(context.tolerance(), 0.1);
    context.set_tolerance(0.25).unwrap();
    assert_eq!(context.tolerance(), 0.25);

    // An all-zero dash pattern is invalid and the error sticks to the
    // context.
    assert!(context.set_dash(&[0.0, 0.0], 0.0).is_err());
}

#[test]
fn save_restore_scopes_the_state() {
    let (_surface, context) = test_context();
    context.set_line_width(5.0).unwrap();
    context.save().unwrap();
    context.set_line_width(9.0).unwrap();
    assert_eq!(context.line_width(), 9.0);
    context.restore().unwrap();
    assert_eq!(context.line_width(), 5.0);
    // Restoring past the outermost state is an error.
    assert!(context.restore().is_err());
}

#[test]
fn transform_matrix_composition() {
    let (_surface, context) = test_context();
    assert_eq!(context.matrix().as_tuple(), (1.0, 0.0, 0.0, 1.0, 0.0, 0.0));
    context.translate(6.0, 5.0).unwrap();
    assert_eq!(context.matrix().as_tuple(), (1.0, 0.0, 0.0, 1.0, 6.0, 5.0));
    context.scale(1.0, 6.0).unwrap();
    assert_eq!(context.matrix().as_tuple(), (1.0, 0.0, 0.0, 6.0, 6.0, 5.0));
    context.rotate(PI / 2.0).unwrap();
    assert_eq!(
        round_tuple(context.matrix().as_tuple()),
        (0.0, 6.0, -1.0, 0.0, 6.0, 5.0)
    );

    context.identity_matrix().unwrap();
    context.set_matrix(&Matrix::new(2.0, 1.0, 3.0, 7.0, 8.0, 2.0)).unwrap();
    assert_eq!(context.matrix().as_tuple(), (2.0, 1.0, 3.0, 7.0, 8.0, 2.0));
    context.transform(&Matrix::new(2.0, 0.0, 0.0, 0.5, 0.0, 0.0)).unwrap();
    assert_eq!(context.matrix().as_tuple(), (4.0, 2.0, 1.5, 3.5, 8.0, 2.0));

    context.set_matrix(&Matrix::new(2.0, 0.0, 0.0, 3.0, 12.0, 4.0)).unwrap();
    assert_eq!(context.user_to_device_distance(1.0, 2.0), (2.0, 6.0));
    assert_eq!(context.user_to_device(1.0, 2.0), (14.0, 10.0));
    assert_eq!(context.device_to_user_distance(2.0, 6.0), (1.0, 2.0));
    let (x, y) = context.device_to_user(14.0, 10.0);
    assert_eq!(((x * 1e6).round() / 1e6, (y * 1e6).round() / 1e6), (1.0, 2.0));
}

#[test]
fn paths_are_copied_as_typed_segments() {
    let (_surface, context) = test_context();

    assert_eq!(context.copy_path().unwrap(), vec![]);
    assert!(!context.has_current_point());
    assert_eq!(context.current_point(), None);

    context.arc(100.0, 200.0, 20.0, PI / 2.0, 0.0).unwrap();
    let arc_path = context.copy_path().unwrap();
    assert_eq!(arc_path[0], PathSegment::MoveTo(100.0, 220.0));
    assert!(arc_path.len() > 1);
    assert!(arc_path[1..]
        .iter()
        .all(|segment| matches!(segment, PathSegment::CurveTo(..))));
    assert_eq!(context.current_point(), Some((120.0, 200.0)));

    context.new_sub_path().unwrap();
    assert_eq!(context.copy_path().unwrap(), arc_path);
    assert!(!context.has_current_point());

    context.new_path().unwrap();
    assert_eq!(context.copy_path().unwrap(), vec![]);

    context.arc_negative(100.0, 200.0, 20.0, PI / 2.0, 0.0).unwrap();
    let negative_path = context.copy_path().unwrap();
    assert_eq!(negative_path[0], PathSegment::MoveTo(100.0, 220.0));
    assert_ne!(negative_path, arc_path);

    context.new_path().unwrap();
    context.rectangle(10.0, 20.0, 100.0, 200.0).unwrap();
    let mut path = context.copy_path().unwrap();
    // Some cairo versions append a move-to after closing a rectangle.
    if path.last() == Some(&PathSegment::MoveTo(10.0, 20.0)) {
        path.pop();
    }
    assert_eq!(
        path,
        vec![
            PathSegment::MoveTo(10.0, 20.0),
            PathSegment::LineTo(110.0, 20.0),
            PathSegment::LineTo(110.0, 220.0),
            PathSegment::LineTo(10.0, 220.0),
            PathSegment::ClosePath,
        ]
    );
}

#[test]
fn appended_segments_match_a_directly_built_path() {
    let (_surface, context) = test_context();
    context.move_to(10.0, 15.0).unwrap();
    context.line_to(20.0, 30.0).unwrap();
    context.curve_to(1.0, 2.0, 3.0, 4.0, 5.0, 6.0).unwrap();
    context.close_path().unwrap();
    let path = context.copy_path().unwrap();

    context.new_path().unwrap();
    context.append_path(&path).unwrap();
    assert_eq!(context.copy_path().unwrap(), path);

    // Relative variants extend from the current point.
    context.new_path().unwrap();
    context.move_to(10.0, 15.0).unwrap();
    context.rel_move_to(2.0, 3.0).unwrap();
    context.rel_line_to(4.0, 5.0).unwrap();
    assert_eq!(
        context.copy_path().unwrap(),
        vec![PathSegment::MoveTo(12.0, 18.0), PathSegment::LineTo(16.0, 23.0)]
    );

    // Flattening replaces curves with line segments.
    context.new_path().unwrap();
    context.move_to(0.0, 0.0).unwrap();
    context.curve_to(10.0, 0.0, 10.0, 10.0, 20.0, 10.0).unwrap();
    assert!(context
        .copy_path_flat()
        .unwrap()
        .iter()
        .all(|segment| !matches!(segment, PathSegment::CurveTo(..))));
}

#[test]
fn fill_covers_the_rectangle_and_preserve_keeps_the_path() {
    let surface = ImageSurface::new(Format::A8, 4, 4).unwrap();
    assert_eq!(surface.data().unwrap(), vec![0u8; 16]);
    let context = Context::new(&surface).unwrap();
    context.set_source_rgba(0.0, 0.0, 0.0, 0.5).unwrap();
    context.set_line_width(0.5).unwrap();
    context.rectangle(1.0, 1.0, 2.0, 2.0).unwrap();
    assert_eq!(context.fill_extents(), (1.0, 1.0, 3.0, 3.0));
    assert_eq!(context.stroke_extents(), (0.75, 0.75, 3.25, 3.25));
    assert!(context.in_fill(2.0, 2.0));
    assert!(!context.in_fill(0.8, 2.0));
    assert!(!context.in_stroke(2.0, 2.0));
    assert!(context.in_stroke(0.8, 2.0));

    let path = context.copy_path().unwrap();
    assert!(!path.is_empty());
    context.fill_preserve().unwrap();
    assert_eq!(context.copy_path().unwrap(), path);
    assert_eq!(
        surface.data().unwrap(),
        b"\x00\x00\x00\x00\
          \x00\x80\x80\x00\
          \x00\x80\x80\x00\
          \x00\x00\x00\x00"
    );
    context.fill().unwrap();
    assert_eq!(context.copy_path().unwrap(), vec![]);
    assert_eq!(
        surface.data().unwrap(),
        b"\x00\x00\x00\x00\
          \x00\xC0\xC0\x00\
          \x00\xC0\xC0\x00\
          \x00\x00\x00\x00"
    );
}

#[test]
fn clip_restricts_painting() {
    let surface = ImageSurface::new(Format::A8, 4, 4).unwrap();
    let context = Context::new(&surface).unwrap();
    context.rectangle(1.0, 1.0, 2.0, 2.0).unwrap();
    context.clip().unwrap();
    assert_eq!(context.clip_extents(), (1.0, 1.0, 3.0, 3.0));
    let rectangles = context.clip_rectangle_list().unwrap();
    assert_eq!(rectangles.len(), 1);
    assert_eq!(
        (rectangles[0].x, rectangles[0].y, rectangles[0].width, rectangles[0].height),
        (1.0, 1.0, 2.0, 2.0)
    );
    assert!(context.in_clip(2.0, 2.0));
    assert!(!context.in_clip(0.5, 0.5));

    context.paint().unwrap();
    assert_eq!(
        surface.data().unwrap(),
        b"\x00\x00\x00\x00\
          \x00\xFF\xFF\x00\
          \x00\xFF\xFF\x00\
          \x00\x00\x00\x00"
    );

    context.reset_clip().unwrap();
    assert_eq!(context.clip_extents(), (0.0, 0.0, 4.0, 4.0));
}

#[test]
fn linear_gradient_paints_an_exact_ramp() {
    // Stop values chosen so each column is an exact multiple of 0x33.
    let surface = ImageSurface::new(Format::A8, 8, 4).unwrap();
    assert_eq!(surface.data().unwrap(), vec![0u8; 32]);
    let gradient = LinearGradient::new(1.5, 0.0, 6.5, 0.0).unwrap();
    gradient.add_color_stop_rgba(0.0, 0.0, 0.0, 0.0, 0.0).unwrap();
    gradient.add_color_stop_rgba(1.0, 0.0, 0.0, 0.0, 1.0).unwrap();
    let context = Context::new(&surface).unwrap();
    context.set_source(&gradient).unwrap();
    context.paint().unwrap();
    let expected: Vec<u8> = b"\x00\x00\x33\x66\x99\xCC\xFF\xFF".repeat(4);
    assert_eq!(surface.data().unwrap(), expected);
}

#[test]
fn mask_uses_the_pattern_alpha_channel() {
    let mask_surface = ImageSurface::new(Format::Argb32, 2, 2).unwrap();
    let context = Context::new(&mask_surface).unwrap();
    context.set_source_rgba(1.0, 0.0, 0.5, 1.0).unwrap();
    context.rectangle(0.0, 0.0, 1.0, 1.0).unwrap();
    context.fill().unwrap();
    context.set_source_rgba(1.0, 0.5, 1.0, 0.5).unwrap();
    context.rectangle(1.0, 1.0, 1.0, 1.0).unwrap();
    context.fill().unwrap();

    let surface = ImageSurface::new(Format::Argb32, 4, 4).unwrap();
    let context = Context::new(&surface).unwrap();
    let pattern = SurfacePattern::new(&mask_surface).unwrap();
    context.mask(&pattern).unwrap();
    let o = pixel([0x00, 0, 0, 0]);
    let half = pixel([0x80, 0, 0, 0]);
    let full = pixel([0xFF, 0, 0, 0]);
    let expected: Vec<u8> = [
        full, o, o, o, //
        o, half, o, o, //
        o, o, o, o, //
        o, o, o, o,
    ]
    .concat();
    assert_eq!(surface.data().unwrap(), expected);
}

#[test]
fn groups_redirect_painting_until_popped() {
    let surface = ImageSurface::new(Format::Argb32, 1, 1).unwrap();
    let context = Context::new(&surface).unwrap();
    assert!(matches!(context.target().unwrap(), AnySurface::Image(_)));
    assert_eq!(context.group_target().unwrap().as_raw(), surface.as_raw());
    assert_eq!(
        context.group_target().unwrap().content(),
        Some(Content::ColorAlpha)
    );

    context.save().unwrap();
    context.push_group_with_content(Content::Alpha).unwrap();
    assert_eq!(
        context.group_target().unwrap().content(),
        Some(Content::Alpha)
    );
    context.set_source_rgba(1.0, 0.2, 0.4, 0.8).unwrap();
    assert!(matches!(context.source().unwrap(), AnyPattern::Solid(_)));
    context.paint().unwrap();
    context.pop_group_to_source().unwrap();
    assert!(matches!(context.source().unwrap(), AnyPattern::Surface(_)));
    // Nothing lands on the target until the group source is painted.
    assert_eq!(surface.data().unwrap(), pixel([0x00, 0, 0, 0]));
    context.paint().unwrap();
    assert_eq!(surface.data().unwrap(), pixel([0xCC, 0, 0, 0]));
    context.restore().unwrap();

    context.save().unwrap();
    context.push_group().unwrap();
    context.set_source_rgba(0.0, 0.0, 0.0, 1.0).unwrap();
    context.paint().unwrap();
    let group = context.pop_group().unwrap();
    match &group {
        AnyPattern::Surface(pattern) => {
            assert!(matches!(pattern.surface().unwrap(), AnySurface::Image(_)));
        }
        other => panic!("expected a surface pattern, got {other:?}"),
    }
    context.set_source(&group).unwrap();
    context.paint().unwrap();
    assert_eq!(surface.data().unwrap(), pixel([0xFF, 0, 0, 0]));
    context.restore().unwrap();
}

fn round_extents(extents: TextExtents) -> [f64; 6] {
    [
        extents.x_bearing,
        extents.y_bearing,
        extents.width,
        extents.height,
        extents.x_advance,
        extents.y_advance,
    ]
    .map(|v| (v * 1e6).round() / 1e6)
}

#[test]
fn context_font_state_round_trips() {
    let (surface, context) = test_context();

    assert_eq!(context.font_matrix().as_tuple(), (10.0, 0.0, 0.0, 10.0, 0.0, 0.0));
    context
        .set_font_matrix(&Matrix::new(2.0, 0.0, 0.0, 3.0, 12.0, 4.0))
        .unwrap();
    assert_eq!(context.font_matrix().as_tuple(), (2.0, 0.0, 0.0, 3.0, 12.0, 4.0));
    assert_eq!(
        context.scaled_font().unwrap().font_matrix().as_tuple(),
        (2.0, 0.0, 0.0, 3.0, 12.0, 4.0)
    );
    context.set_font_size(14.0).unwrap();
    assert_eq!(context.font_matrix().as_tuple(), (14.0, 0.0, 0.0, 14.0, 0.0, 0.0));

    context
        .select_font_face("serif", FontSlant::Italic, FontWeight::Bold)
        .unwrap();
    match context.font_face().unwrap() {
        AnyFontFace::Toy(face) => {
            assert_eq!(face.family(), "serif");
            assert_eq!(face.slant(), Some(FontSlant::Italic));
            assert_eq!(face.weight(), Some(FontWeight::Bold));
        }
        other => panic!("expected a toy font face, got {other:?}"),
    }

    let font_extents = context.font_extents().unwrap();
    assert!(font_extents.max_x_advance > 0.0);
    assert_eq!(font_extents.max_y_advance, 0.0);
    let serif = context.text_extents("iiiiiiiiii").unwrap();
    assert!(serif.x_advance > 0.0);
    assert_eq!(serif.y_advance, 0.0);
    context
        .select_font_face("monospace", FontSlant::Normal, FontWeight::Bold)
        .unwrap();
    let mono = context.text_extents("iiiiiiiiii").unwrap();
    assert!(mono.x_advance > serif.x_advance);

    let mut options = FontOptions::new().unwrap();
    assert_eq!(options.hint_metrics(), Some(HintMetrics::Default));
    options.set_hint_metrics(HintMetrics::On);
    context.set_font_options(&options).unwrap();
    assert_eq!(
        context.font_options().unwrap().hint_metrics(),
        Some(HintMetrics::On)
    );
    assert_eq!(
        surface.font_options().unwrap().hint_metrics(),
        Some(HintMetrics::On)
    );

    let face = ToyFontFace::new("monospace", FontSlant::Normal, FontWeight::Normal).unwrap();
    let font = ScaledFont::with_matrices(
        &face,
        &Matrix::new(0.0, 1.0, 4.0, 0.0, 12.0, 4.0),
        &Matrix::identity(),
        &options,
    )
    .unwrap();
    context.set_scaled_font(&font).unwrap();
    assert_eq!(context.font_matrix().as_tuple(), (0.0, 1.0, 4.0, 0.0, 12.0, 4.0));

    context.set_font_face(None).unwrap();
    match context.font_face().unwrap() {
        AnyFontFace::Toy(face) => assert_ne!(face.family(), "monospace"),
        AnyFontFace::Base(_) => {}
    }
}

#[test]
fn show_text_leaves_ink_behind() {
    let surface = ImageSurface::new(Format::A8, 10, 10).unwrap();
    let context = Context::new(&surface).unwrap();
    assert!(surface.data().unwrap().iter().all(|&byte| byte == 0));

    assert!(context.copy_path().unwrap().is_empty());
    context.move_to(1.0, 9.0).unwrap();
    context.text_path("a").unwrap();
    assert!(!context.copy_path().unwrap().is_empty());
    context.new_path().unwrap();

    context.move_to(1.0, 9.0).unwrap();
    context.show_text("a").unwrap();
    assert!(surface.data().unwrap().iter().any(|&byte| byte != 0));
}

#[test]
fn text_renders_the_same_through_glyph_and_cluster_calls() {
    let text = "Étt";
    let empty = vec![0u8; 100 * 20 * 4];

    let surface = ImageSurface::new(Format::Argb32, 100, 20).unwrap();
    let context = Context::new(&surface).unwrap();
    let font = context.scaled_font().unwrap();
    let (glyphs, clusters, backward) =
        font.text_to_glyphs_with_clusters(5.0, 15.0, text).unwrap();
    assert_eq!(glyphs.len(), 3);
    assert_ne!(glyphs[0].index, glyphs[1].index);
    assert_eq!(glyphs[1].index, glyphs[2].index);
    assert_eq!(glyphs[0].x, 5.0);
    assert!(glyphs[0].x < glyphs[1].x && glyphs[1].x < glyphs[2].x);
    assert!(glyphs.iter().all(|glyph| glyph.y == 15.0));
    assert_eq!(
        clusters,
        [
            TextCluster { num_bytes: 2, num_glyphs: 1 },
            TextCluster { num_bytes: 1, num_glyphs: 1 },
            TextCluster { num_bytes: 1, num_glyphs: 1 },
        ]
    );
    assert!(!backward);

    // Measuring by text or by the equivalent glyphs agrees, whether the
    // scaled font or the context does the measuring.
    let by_text = round_extents(font.text_extents(text).unwrap());
    assert_eq!(round_extents(font.glyph_extents(&glyphs).unwrap()), by_text);
    assert_eq!(round_extents(context.glyph_extents(&glyphs).unwrap()), by_text);

    context.glyph_path(&glyphs).unwrap();
    let glyph_path = context.copy_path().unwrap();
    assert!(!glyph_path.is_empty());
    context.new_path().unwrap();

    context.move_to(10.0, 20.0).unwrap();
    context.text_path(text).unwrap();
    let shifted_path = context.copy_path().unwrap();
    assert_ne!(shifted_path, glyph_path);
    context.new_path().unwrap();

    // Both paths end with a move-to back to the current point.
    context.move_to(5.0, 15.0).unwrap();
    context.text_path(text).unwrap();
    let text_path = context.copy_path().unwrap();
    assert_eq!(
        &text_path[..text_path.len() - 1],
        &glyph_path[..glyph_path.len() - 1]
    );
    context.new_path().unwrap();

    context.show_glyphs(&glyphs).unwrap();
    let ink = surface.data().unwrap();
    assert_ne!(ink, empty);

    let surface = ImageSurface::new(Format::Argb32, 100, 20).unwrap();
    let context = Context::new(&surface).unwrap();
    context.move_to(5.0, 15.0).unwrap();
    context
        .show_text_glyphs(text, &glyphs, &clusters, backward)
        .unwrap();
    assert_eq!(surface.data().unwrap(), ink);

    let surface = ImageSurface::new(Format::Argb32, 100, 20).unwrap();
    let context = Context::new(&surface).unwrap();
    context.move_to(5.0, 15.0).unwrap();
    context.show_text(text).unwrap();
    assert_eq!(surface.data().unwrap(), ink);
}

#[test]
fn in_fill_honors_the_fill_rule() {
    let (_surface, context) = test_context();
    context.rectangle(0.0, 0.0, 4.0, 4.0).unwrap();
    context.rectangle(1.0, 1.0, 2.0, 2.0).unwrap();
    assert!(context.in_fill(2.0, 2.0));
    context.set_fill_rule(FillRule::EvenOdd).unwrap();
    assert!(!context.in_fill(2.0, 2.0));
}
