//! The drawing context: state, paths, painting and text.
//!
//! Native errors are sticky on the context; every operation that calls into
//! cairo checks the context status afterwards and reports it as a typed
//! error, so a failure surfaces at the call that caused it rather than at
//! some later unrelated one.

use std::fmt;
use std::slice;

use libc::c_int;

use crate::error::{Error, Result, Status};
use crate::fonts::{AnyFontFace, FontFace, FontOptions, FontSlant, FontWeight, ScaledFont};
use crate::handle::{Handle, RefCounted};
use crate::matrix::Matrix;
use crate::patterns::{AnyPattern, Pattern};
use crate::surfaces::{c_string, AnySurface, Content, Surface};
use crate::{ffi, FontExtents, Glyph, Rectangle, TextCluster, TextExtents};

unsafe impl RefCounted for ffi::cairo_t {
    unsafe fn reference(ptr: *mut Self) {
        ffi::cairo_reference(ptr);
    }

    unsafe fn destroy(ptr: *mut Self) {
        ffi::cairo_destroy(ptr);
    }
}

ffi_enum! {
    /// Compositing operator applied when painting.
    pub enum Operator {
        Clear = 0,
        Source = 1,
        Over = 2,
        In = 3,
        Out = 4,
        Atop = 5,
        Dest = 6,
        DestOver = 7,
        DestIn = 8,
        DestOut = 9,
        DestAtop = 10,
        Xor = 11,
        Add = 12,
        Saturate = 13,
        Multiply = 14,
        Screen = 15,
        Overlay = 16,
        Darken = 17,
        Lighten = 18,
        ColorDodge = 19,
        ColorBurn = 20,
        HardLight = 21,
        SoftLight = 22,
        Difference = 23,
        Exclusion = 24,
        HslHue = 25,
        HslSaturation = 26,
        HslColor = 27,
        HslLuminosity = 28,
    }
}

ffi_enum! {
    /// Edge rendering quality.
    pub enum Antialias {
        Default = 0,
        None = 1,
        Gray = 2,
        Subpixel = 3,
        Fast = 4,
        Good = 5,
        Best = 6,
    }
}

ffi_enum! {
    /// How self-intersecting paths are filled.
    pub enum FillRule {
        Winding = 0,
        EvenOdd = 1,
    }
}

ffi_enum! {
    pub enum LineCap {
        Butt = 0,
        Round = 1,
        Square = 2,
    }
}

ffi_enum! {
    pub enum LineJoin {
        Miter = 0,
        Round = 1,
        Bevel = 2,
    }
}

ffi_enum! {
    /// Operation tag of one element in path data.
    pub enum PathDataType {
        MoveTo = 0,
        LineTo = 1,
        CurveTo = 2,
        ClosePath = 3,
    }
}

impl PathDataType {
    /// Number of coordinate pairs the operation carries.
    fn point_count(self) -> usize {
        match self {
            PathDataType::MoveTo | PathDataType::LineTo => 1,
            PathDataType::CurveTo => 3,
            PathDataType::ClosePath => 0,
        }
    }
}

/// One typed element of a copied path. The variants carry exactly the
/// coordinates their operation needs, so a well-typed segment can always be
/// appended back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    CurveTo(f64, f64, f64, f64, f64, f64),
    ClosePath,
}

impl PathSegment {
    /// Builds a segment from an untyped operation and coordinate list, as
    /// decoded from native path data. The coordinate count must match the
    /// operation exactly.
    pub fn from_coords(op: PathDataType, coords: &[f64]) -> Result<PathSegment> {
        match (op, coords) {
            (PathDataType::MoveTo, &[x, y]) => Ok(PathSegment::MoveTo(x, y)),
            (PathDataType::LineTo, &[x, y]) => Ok(PathSegment::LineTo(x, y)),
            (PathDataType::CurveTo, &[x1, y1, x2, y2, x3, y3]) => {
                Ok(PathSegment::CurveTo(x1, y1, x2, y2, x3, y3))
            }
            (PathDataType::ClosePath, &[]) => Ok(PathSegment::ClosePath),
            _ => Err(Error::PathArity {
                op,
                expected: op.point_count() * 2,
                actual: coords.len(),
            }),
        }
    }

    fn data_type(&self) -> PathDataType {
        match self {
            PathSegment::MoveTo(..) => PathDataType::MoveTo,
            PathSegment::LineTo(..) => PathDataType::LineTo,
            PathSegment::CurveTo(..) => PathDataType::CurveTo,
            PathSegment::ClosePath => PathDataType::ClosePath,
        }
    }
}

/// An owned reference to a cairo drawing context.
pub struct Context {
    handle: Handle<ffi::cairo_t>,
}

impl Context {
    /// A new context drawing onto `target`. The native context keeps its
    /// own reference to the surface.
    pub fn new(target: &Surface) -> Result<Context> {
        let ptr = unsafe { ffi::cairo_create(target.as_ptr()) };
        let context = Context {
            handle: Handle::wrap(ptr, false)?,
        };
        context.check()?;
        Ok(context)
    }

    /// The raw pointer; the reference stays owned by this wrapper.
    pub fn as_raw(&self) -> *mut ffi::cairo_t {
        self.handle.as_ptr()
    }

    pub(crate) fn as_ptr(&self) -> *mut ffi::cairo_t {
        self.handle.as_ptr()
    }

    pub(crate) fn addr(&self) -> usize {
        self.handle.addr()
    }

    pub fn status(&self) -> Status {
        Status::from_raw(unsafe { ffi::cairo_status(self.as_ptr()) })
    }

    pub(crate) fn check(&self) -> Result<()> {
        self.status().to_result()
    }

    pub fn save(&self) -> Result<()> {
        unsafe { ffi::cairo_save(self.as_ptr()) };
        self.check()
    }

    pub fn restore(&self) -> Result<()> {
        unsafe { ffi::cairo_restore(self.as_ptr()) };
        self.check()
    }

    /// The surface this context draws onto, resolved to its concrete
    /// wrapper.
    pub fn target(&self) -> Result<AnySurface> {
        let ptr = unsafe { ffi::cairo_get_target(self.as_ptr()) };
        Ok(Surface::from_raw_borrowed(ptr)?.into_typed())
    }

    // Groups

    pub fn push_group(&self) -> Result<()> {
        unsafe { ffi::cairo_push_group(self.as_ptr()) };
        self.check()
    }

    pub fn push_group_with_content(&self, content: Content) -> Result<()> {
        unsafe { ffi::cairo_push_group_with_content(self.as_ptr(), content.to_raw()) };
        self.check()
    }

    /// Ends the current group and returns it as a pattern.
    pub fn pop_group(&self) -> Result<AnyPattern> {
        let ptr = unsafe { ffi::cairo_pop_group(self.as_ptr()) };
        self.check()?;
        Ok(Pattern::from_raw_full(ptr)?.into_typed())
    }

    /// Ends the current group and installs it as the source pattern.
    pub fn pop_group_to_source(&self) -> Result<()> {
        unsafe { ffi::cairo_pop_group_to_source(self.as_ptr()) };
        self.check()
    }

    /// The surface drawing currently lands on: the innermost group if one
    /// is pushed, the target otherwise.
    pub fn group_target(&self) -> Result<AnySurface> {
        let ptr = unsafe { ffi::cairo_get_group_target(self.as_ptr()) };
        Ok(Surface::from_raw_borrowed(ptr)?.into_typed())
    }

    // Sources

    pub fn set_source_rgb(&self, red: f64, green: f64, blue: f64) -> Result<()> {
        unsafe { ffi::cairo_set_source_rgb(self.as_ptr(), red, green, blue) };
        self.check()
    }

    pub fn set_source_rgba(&self, red: f64, green: f64, blue: f64, alpha: f64) -> Result<()> {
        unsafe { ffi::cairo_set_source_rgba(self.as_ptr(), red, green, blue, alpha) };
        self.check()
    }

    /// The native context keeps its own reference to the pattern.
    pub fn set_source(&self, source: &Pattern) -> Result<()> {
        unsafe { ffi::cairo_set_source(self.as_ptr(), source.as_ptr()) };
        self.check()
    }

    /// Shorthand for a surface pattern with the given origin offset.
    pub fn set_source_surface(&self, surface: &Surface, x: f64, y: f64) -> Result<()> {
        unsafe { ffi::cairo_set_source_surface(self.as_ptr(), surface.as_ptr(), x, y) };
        self.check()
    }

    /// The current source, resolved to its concrete pattern wrapper.
    pub fn source(&self) -> Result<AnyPattern> {
        let ptr = unsafe { ffi::cairo_get_source(self.as_ptr()) };
        Ok(Pattern::from_raw_borrowed(ptr)?.into_typed())
    }

    // Graphics state

    pub fn set_antialias(&self, antialias: Antialias) -> Result<()> {
        unsafe { ffi::cairo_set_antialias(self.as_ptr(), antialias.to_raw()) };
        self.check()
    }

    pub fn antialias(&self) -> Option<Antialias> {
        Antialias::from_raw(unsafe { ffi::cairo_get_antialias(self.as_ptr()) })
    }

    /// Sets the dash pattern for stroking. An empty list restores solid
    /// lines; an all-zero list is an error.
    pub fn set_dash(&self, dashes: &[f64], offset: f64) -> Result<()> {
        unsafe {
            ffi::cairo_set_dash(self.as_ptr(), dashes.as_ptr(), dashes.len() as c_int, offset)
        };
        self.check()
    }

    pub fn dash(&self) -> (Vec<f64>, f64) {
        let count = unsafe { ffi::cairo_get_dash_count(self.as_ptr()) };
        let mut dashes = vec![0.0; count as usize];
        let mut offset = 0.0;
        unsafe { ffi::cairo_get_dash(self.as_ptr(), dashes.as_mut_ptr(), &mut offset) };
        (dashes, offset)
    }

    pub fn dash_count(&self) -> usize {
        unsafe { ffi::cairo_get_dash_count(self.as_ptr()) as usize }
    }

    pub fn set_fill_rule(&self, fill_rule: FillRule) -> Result<()> {
        unsafe { ffi::cairo_set_fill_rule(self.as_ptr(), fill_rule.to_raw()) };
        self.check()
    }

    pub fn fill_rule(&self) -> Option<FillRule> {
        FillRule::from_raw(unsafe { ffi::cairo_get_fill_rule(self.as_ptr()) })
    }

    pub fn set_line_cap(&self, line_cap: LineCap) -> Result<()> {
        unsafe { ffi::cairo_set_line_cap(self.as_ptr(), line_cap.to_raw()) };
        self.check()
    }

    pub fn line_cap(&self) -> Option<LineCap> {
        LineCap::from_raw(unsafe { ffi::cairo_get_line_cap(self.as_ptr()) })
    }

    pub fn set_line_join(&self, line_join: LineJoin) -> Result<()> {
        unsafe { ffi::cairo_set_line_join(self.as_ptr(), line_join.to_raw()) };
        self.check()
    }

    pub fn line_join(&self) -> Option<LineJoin> {
        LineJoin::from_raw(unsafe { ffi::cairo_get_line_join(self.as_ptr()) })
    }

    pub fn set_line_width(&self, width: f64) -> Result<()> {
        unsafe { ffi::cairo_set_line_width(self.as_ptr(), width) };
        self.check()
    }

    pub fn line_width(&self) -> f64 {
        unsafe { ffi::cairo_get_line_width(self.as_ptr()) }
    }

    pub fn set_miter_limit(&self, limit: f64) -> Result<()> {
        unsafe { ffi::cairo_set_miter_limit(self.as_ptr(), limit) };
        self.check()
    }

    pub fn miter_limit(&self) -> f64 {
        unsafe { ffi::cairo_get_miter_limit(self.as_ptr()) }
    }

    pub fn set_operator(&self, operator: Operator) -> Result<()> {
        unsafe { ffi::cairo_set_operator(self.as_ptr(), operator.to_raw()) };
        self.check()
    }

    pub fn operator(&self) -> Option<Operator> {
        Operator::from_raw(unsafe { ffi::cairo_get_operator(self.as_ptr()) })
    }

    pub fn set_tolerance(&self, tolerance: f64) -> Result<()> {
        unsafe { ffi::cairo_set_tolerance(self.as_ptr(), tolerance) };
        self.check()
    }

    pub fn tolerance(&self) -> f64 {
        unsafe { ffi::cairo_get_tolerance(self.as_ptr()) }
    }

    // Clipping

    pub fn clip(&self) -> Result<()> {
        unsafe { ffi::cairo_clip(self.as_ptr()) };
        self.check()
    }

    pub fn clip_preserve(&self) -> Result<()> {
        unsafe { ffi::cairo_clip_preserve(self.as_ptr()) };
        self.check()
    }

    /// Bounding box of the current clip as `(x1, y1, x2, y2)`.
    pub fn clip_extents(&self) -> (f64, f64, f64, f64) {
        let mut x1 = 0.0;
        let mut y1 = 0.0;
        let mut x2 = 0.0;
        let mut y2 = 0.0;
        unsafe { ffi::cairo_clip_extents(self.as_ptr(), &mut x1, &mut y1, &mut x2, &mut y2) };
        (x1, y1, x2, y2)
    }

    pub fn in_clip(&self, x: f64, y: f64) -> bool {
        unsafe { ffi::cairo_in_clip(self.as_ptr(), x, y) != 0 }
    }

    pub fn reset_clip(&self) -> Result<()> {
        unsafe { ffi::cairo_reset_clip(self.as_ptr()) };
        self.check()
    }

    /// The current clip as a list of rectangles, when it can be represented
    /// that way.
    pub fn clip_rectangle_list(&self) -> Result<Vec<Rectangle>> {
        let list = unsafe { ffi::cairo_copy_clip_rectangle_list(self.as_ptr()) };
        if list.is_null() {
            return Err(Error::NullPointer);
        }
        let result = (|| {
            let list_ref = unsafe { &*list };
            Status::from_raw(list_ref.status).to_result()?;
            if list_ref.rectangles.is_null() {
                return Ok(Vec::new());
            }
            let rectangles = unsafe {
                slice::from_raw_parts(list_ref.rectangles, list_ref.num_rectangles as usize)
            };
            Ok(rectangles.to_vec())
        })();
        unsafe { ffi::cairo_rectangle_list_destroy(list) };
        result
    }

    // Painting

    pub fn paint(&self) -> Result<()> {
        unsafe { ffi::cairo_paint(self.as_ptr()) };
        self.check()
    }

    pub fn paint_with_alpha(&self, alpha: f64) -> Result<()> {
        unsafe { ffi::cairo_paint_with_alpha(self.as_ptr(), alpha) };
        self.check()
    }

    pub fn fill(&self) -> Result<()> {
        unsafe { ffi::cairo_fill(self.as_ptr()) };
        self.check()
    }

    pub fn fill_preserve(&self) -> Result<()> {
        unsafe { ffi::cairo_fill_preserve(self.as_ptr()) };
        self.check()
    }

    pub fn fill_extents(&self) -> (f64, f64, f64, f64) {
        let mut x1 = 0.0;
        let mut y1 = 0.0;
        let mut x2 = 0.0;
        let mut y2 = 0.0;
        unsafe { ffi::cairo_fill_extents(self.as_ptr(), &mut x1, &mut y1, &mut x2, &mut y2) };
        (x1, y1, x2, y2)
    }

    pub fn in_fill(&self, x: f64, y: f64) -> bool {
        unsafe { ffi::cairo_in_fill(self.as_ptr(), x, y) != 0 }
    }

    /// Paints the source through the alpha channel of `pattern`.
    pub fn mask(&self, pattern: &Pattern) -> Result<()> {
        unsafe { ffi::cairo_mask(self.as_ptr(), pattern.as_ptr()) };
        self.check()
    }

    pub fn mask_surface(&self, surface: &Surface, x: f64, y: f64) -> Result<()> {
        unsafe { ffi::cairo_mask_surface(self.as_ptr(), surface.as_ptr(), x, y) };
        self.check()
    }

    pub fn stroke(&self) -> Result<()> {
        unsafe { ffi::cairo_stroke(self.as_ptr()) };
        self.check()
    }

    pub fn stroke_preserve(&self) -> Result<()> {
        unsafe { ffi::cairo_stroke_preserve(self.as_ptr()) };
        self.check()
    }

    pub fn stroke_extents(&self) -> (f64, f64, f64, f64) {
        let mut x1 = 0.0;
        let mut y1 = 0.0;
        let mut x2 = 0.0;
        let mut y2 = 0.0;
        unsafe { ffi::cairo_stroke_extents(self.as_ptr(), &mut x1, &mut y1, &mut x2, &mut y2) };
        (x1, y1, x2, y2)
    }

    pub fn in_stroke(&self, x: f64, y: f64) -> bool {
        unsafe { ffi::cairo_in_stroke(self.as_ptr(), x, y) != 0 }
    }

    /// Emits the current page of a paged target without clearing it.
    pub fn copy_page(&self) -> Result<()> {
        unsafe { ffi::cairo_copy_page(self.as_ptr()) };
        self.check()
    }

    /// Emits and clears the current page of a paged target.
    pub fn show_page(&self) -> Result<()> {
        unsafe { ffi::cairo_show_page(self.as_ptr()) };
        self.check()
    }

    // Transformations

    pub fn translate(&self, tx: f64, ty: f64) -> Result<()> {
        unsafe { ffi::cairo_translate(self.as_ptr(), tx, ty) };
        self.check()
    }

    pub fn scale(&self, sx: f64, sy: f64) -> Result<()> {
        unsafe { ffi::cairo_scale(self.as_ptr(), sx, sy) };
        self.check()
    }

    pub fn rotate(&self, radians: f64) -> Result<()> {
        unsafe { ffi::cairo_rotate(self.as_ptr(), radians) };
        self.check()
    }

    /// Applies `matrix` on top of the current transformation.
    pub fn transform(&self, matrix: &Matrix) -> Result<()> {
        unsafe { ffi::cairo_transform(self.as_ptr(), matrix) };
        self.check()
    }

    pub fn set_matrix(&self, matrix: &Matrix) -> Result<()> {
        unsafe { ffi::cairo_set_matrix(self.as_ptr(), matrix) };
        self.check()
    }

    pub fn matrix(&self) -> Matrix {
        let mut matrix = Matrix::identity();
        unsafe { ffi::cairo_get_matrix(self.as_ptr(), &mut matrix) };
        matrix
    }

    pub fn identity_matrix(&self) -> Result<()> {
        unsafe { ffi::cairo_identity_matrix(self.as_ptr()) };
        self.check()
    }

    pub fn user_to_device(&self, x: f64, y: f64) -> (f64, f64) {
        let (mut x, mut y) = (x, y);
        unsafe { ffi::cairo_user_to_device(self.as_ptr(), &mut x, &mut y) };
        (x, y)
    }

    pub fn user_to_device_distance(&self, dx: f64, dy: f64) -> (f64, f64) {
        let (mut dx, mut dy) = (dx, dy);
        unsafe { ffi::cairo_user_to_device_distance(self.as_ptr(), &mut dx, &mut dy) };
        (dx, dy)
    }

    pub fn device_to_user(&self, x: f64, y: f64) -> (f64, f64) {
        let (mut x, mut y) = (x, y);
        unsafe { ffi::cairo_device_to_user(self.as_ptr(), &mut x, &mut y) };
        (x, y)
    }

    pub fn device_to_user_distance(&self, dx: f64, dy: f64) -> (f64, f64) {
        let (mut dx, mut dy) = (dx, dy);
        unsafe { ffi::cairo_device_to_user_distance(self.as_ptr(), &mut dx, &mut dy) };
        (dx, dy)
    }

    // Paths

    pub fn new_path(&self) -> Result<()> {
        unsafe { ffi::cairo_new_path(self.as_ptr()) };
        self.check()
    }

    pub fn new_sub_path(&self) -> Result<()> {
        unsafe { ffi::cairo_new_sub_path(self.as_ptr()) };
        self.check()
    }

    pub fn move_to(&self, x: f64, y: f64) -> Result<()> {
        unsafe { ffi::cairo_move_to(self.as_ptr(), x, y) };
        self.check()
    }

    pub fn line_to(&self, x: f64, y: f64) -> Result<()> {
        unsafe { ffi::cairo_line_to(self.as_ptr(), x, y) };
        self.check()
    }

    pub fn curve_to(&self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> Result<()> {
        unsafe { ffi::cairo_curve_to(self.as_ptr(), x1, y1, x2, y2, x3, y3) };
        self.check()
    }

    pub fn arc(&self, xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64) -> Result<()> {
        unsafe { ffi::cairo_arc(self.as_ptr(), xc, yc, radius, angle1, angle2) };
        self.check()
    }

    pub fn arc_negative(
        &self,
        xc: f64,
        yc: f64,
        radius: f64,
        angle1: f64,
        angle2: f64,
    ) -> Result<()> {
        unsafe { ffi::cairo_arc_negative(self.as_ptr(), xc, yc, radius, angle1, angle2) };
        self.check()
    }

    pub fn rel_move_to(&self, dx: f64, dy: f64) -> Result<()> {
        unsafe { ffi::cairo_rel_move_to(self.as_ptr(), dx, dy) };
        self.check()
    }

    pub fn rel_line_to(&self, dx: f64, dy: f64) -> Result<()> {
        unsafe { ffi::cairo_rel_line_to(self.as_ptr(), dx, dy) };
        self.check()
    }

    pub fn rel_curve_to(
        &self,
        dx1: f64,
        dy1: f64,
        dx2: f64,
        dy2: f64,
        dx3: f64,
        dy3: f64,
    ) -> Result<()> {
        unsafe { ffi::cairo_rel_curve_to(self.as_ptr(), dx1, dy1, dx2, dy2, dx3, dy3) };
        self.check()
    }

    pub fn rectangle(&self, x: f64, y: f64, width: f64, height: f64) -> Result<()> {
        unsafe { ffi::cairo_rectangle(self.as_ptr(), x, y, width, height) };
        self.check()
    }

    pub fn close_path(&self) -> Result<()> {
        unsafe { ffi::cairo_close_path(self.as_ptr()) };
        self.check()
    }

    pub fn path_extents(&self) -> (f64, f64, f64, f64) {
        let mut x1 = 0.0;
        let mut y1 = 0.0;
        let mut x2 = 0.0;
        let mut y2 = 0.0;
        unsafe { ffi::cairo_path_extents(self.as_ptr(), &mut x1, &mut y1, &mut x2, &mut y2) };
        (x1, y1, x2, y2)
    }

    /// A typed copy of the current path.
    pub fn copy_path(&self) -> Result<Vec<PathSegment>> {
        let path = unsafe { ffi::cairo_copy_path(self.as_ptr()) };
        parse_path(path)
    }

    /// Like [`copy_path`](Self::copy_path), with curves flattened to line
    /// segments within the current tolerance.
    pub fn copy_path_flat(&self) -> Result<Vec<PathSegment>> {
        let path = unsafe { ffi::cairo_copy_path_flat(self.as_ptr()) };
        parse_path(path)
    }

    /// Appends segments onto the current path.
    pub fn append_path(&self, segments: &[PathSegment]) -> Result<()> {
        let mut data: Vec<ffi::cairo_path_data_t> = Vec::new();
        for segment in segments {
            let op = segment.data_type();
            data.push(ffi::cairo_path_data_t {
                header: ffi::cairo_path_data_header {
                    data_type: op.to_raw(),
                    length: (op.point_count() + 1) as c_int,
                },
            });
            let mut push_point = |x: f64, y: f64| {
                data.push(ffi::cairo_path_data_t {
                    point: ffi::cairo_path_data_point { x, y },
                });
            };
            match *segment {
                PathSegment::MoveTo(x, y) | PathSegment::LineTo(x, y) => push_point(x, y),
                PathSegment::CurveTo(x1, y1, x2, y2, x3, y3) => {
                    push_point(x1, y1);
                    push_point(x2, y2);
                    push_point(x3, y3);
                }
                PathSegment::ClosePath => {}
            }
        }
        let path = ffi::cairo_path_t {
            status: ffi::CAIRO_STATUS_SUCCESS,
            data: data.as_mut_ptr(),
            num_data: data.len() as c_int,
        };
        unsafe { ffi::cairo_append_path(self.as_ptr(), &path) };
        self.check()
    }

    pub fn has_current_point(&self) -> bool {
        unsafe { ffi::cairo_has_current_point(self.as_ptr()) != 0 }
    }

    pub fn current_point(&self) -> Option<(f64, f64)> {
        if !self.has_current_point() {
            return None;
        }
        let mut x = 0.0;
        let mut y = 0.0;
        unsafe { ffi::cairo_get_current_point(self.as_ptr(), &mut x, &mut y) };
        Some((x, y))
    }

    // Text

    /// Selects a font through the toy text API.
    pub fn select_font_face(
        &self,
        family: &str,
        slant: FontSlant,
        weight: FontWeight,
    ) -> Result<()> {
        let family = c_string(family)?;
        unsafe {
            ffi::cairo_select_font_face(
                self.as_ptr(),
                family.as_ptr(),
                slant.to_raw(),
                weight.to_raw(),
            )
        };
        self.check()
    }

    /// Shorthand for a font matrix scaling uniformly by `size`.
    pub fn set_font_size(&self, size: f64) -> Result<()> {
        unsafe { ffi::cairo_set_font_size(self.as_ptr(), size) };
        self.check()
    }

    pub fn set_font_matrix(&self, matrix: &Matrix) -> Result<()> {
        unsafe { ffi::cairo_set_font_matrix(self.as_ptr(), matrix) };
        self.check()
    }

    pub fn font_matrix(&self) -> Matrix {
        let mut matrix = Matrix::identity();
        unsafe { ffi::cairo_get_font_matrix(self.as_ptr(), &mut matrix) };
        matrix
    }

    pub fn set_font_options(&self, options: &FontOptions) -> Result<()> {
        unsafe { ffi::cairo_set_font_options(self.as_ptr(), options.as_ptr()) };
        self.check()
    }

    pub fn font_options(&self) -> Result<FontOptions> {
        let options = FontOptions::new()?;
        unsafe { ffi::cairo_get_font_options(self.as_ptr(), options.as_ptr()) };
        options.check()?;
        Ok(options)
    }

    /// The native context keeps its own reference to the face. `None`
    /// restores the default font.
    pub fn set_font_face(&self, font_face: Option<&FontFace>) -> Result<()> {
        let ptr = font_face.map_or(std::ptr::null_mut(), |face| face.as_ptr());
        unsafe { ffi::cairo_set_font_face(self.as_ptr(), ptr) };
        self.check()
    }

    /// The current font face, resolved to its concrete wrapper.
    pub fn font_face(&self) -> Result<AnyFontFace> {
        let ptr = unsafe { ffi::cairo_get_font_face(self.as_ptr()) };
        Ok(FontFace::from_raw_borrowed(ptr)?.into_typed())
    }

    /// Replaces font face, font matrix and options in one call.
    pub fn set_scaled_font(&self, scaled_font: &ScaledFont) -> Result<()> {
        unsafe { ffi::cairo_set_scaled_font(self.as_ptr(), scaled_font.as_ptr()) };
        self.check()
    }

    /// The current font frozen with the context's font matrix and CTM.
    pub fn scaled_font(&self) -> Result<ScaledFont> {
        let ptr = unsafe { ffi::cairo_get_scaled_font(self.as_ptr()) };
        ScaledFont::from_raw_borrowed(ptr)
    }

    /// Draws text with the current font, advancing the current point.
    pub fn show_text(&self, text: &str) -> Result<()> {
        let text = c_string(text)?;
        unsafe { ffi::cairo_show_text(self.as_ptr(), text.as_ptr()) };
        self.check()
    }

    pub fn show_glyphs(&self, glyphs: &[Glyph]) -> Result<()> {
        unsafe { ffi::cairo_show_glyphs(self.as_ptr(), glyphs.as_ptr(), glyphs.len() as c_int) };
        self.check()
    }

    /// Draws glyphs and embeds the text-to-glyph mapping, for backends that
    /// can use it (e.g. PDF text extraction). `backward` marks clusters
    /// mapping to glyphs in reverse order.
    pub fn show_text_glyphs(
        &self,
        text: &str,
        glyphs: &[Glyph],
        clusters: &[TextCluster],
        backward: bool,
    ) -> Result<()> {
        let utf8_len = text.len() as c_int;
        let text = c_string(text)?;
        unsafe {
            ffi::cairo_show_text_glyphs(
                self.as_ptr(),
                text.as_ptr(),
                utf8_len,
                glyphs.as_ptr(),
                glyphs.len() as c_int,
                clusters.as_ptr(),
                clusters.len() as c_int,
                backward as c_int,
            )
        };
        self.check()
    }

    /// Adds the outlines of text to the current path.
    pub fn text_path(&self, text: &str) -> Result<()> {
        let text = c_string(text)?;
        unsafe { ffi::cairo_text_path(self.as_ptr(), text.as_ptr()) };
        self.check()
    }

    pub fn glyph_path(&self, glyphs: &[Glyph]) -> Result<()> {
        unsafe { ffi::cairo_glyph_path(self.as_ptr(), glyphs.as_ptr(), glyphs.len() as c_int) };
        self.check()
    }

    pub fn text_extents(&self, text: &str) -> Result<TextExtents> {
        let text = c_string(text)?;
        let mut extents = TextExtents::default();
        unsafe { ffi::cairo_text_extents(self.as_ptr(), text.as_ptr(), &mut extents) };
        self.check()?;
        Ok(extents)
    }

    pub fn glyph_extents(&self, glyphs: &[Glyph]) -> Result<TextExtents> {
        let mut extents = TextExtents::default();
        unsafe {
            ffi::cairo_glyph_extents(
                self.as_ptr(),
                glyphs.as_ptr(),
                glyphs.len() as c_int,
                &mut extents,
            )
        };
        self.check()?;
        Ok(extents)
    }

    pub fn font_extents(&self) -> Result<FontExtents> {
        let mut extents = FontExtents::default();
        unsafe { ffi::cairo_font_extents(self.as_ptr(), &mut extents) };
        self.check()?;
        Ok(extents)
    }

    // Tagged structure

    /// Opens a structure tag in backends that support logical structure
    /// (PDF). Attributes use cairo's `key=value` syntax.
    pub fn tag_begin(&self, name: &str, attributes: &str) -> Result<()> {
        let name = c_string(name)?;
        let attributes = c_string(attributes)?;
        unsafe { ffi::cairo_tag_begin(self.as_ptr(), name.as_ptr(), attributes.as_ptr()) };
        self.check()
    }

    pub fn tag_end(&self, name: &str) -> Result<()> {
        let name = c_string(name)?;
        unsafe { ffi::cairo_tag_end(self.as_ptr(), name.as_ptr()) };
        self.check()
    }
}

impl PartialEq for Context {
    /// Two wrappers are equal when they refer to the same native object.
    fn eq(&self, other: &Context) -> bool {
        self.addr() == other.addr()
    }
}

impl Eq for Context {}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context").field("ptr", &self.as_ptr()).finish()
    }
}

/// Decodes and frees a native path. Headers carry their own length, so a
/// malformed coordinate count surfaces as a `PathArity` error instead of a
/// bad read.
fn parse_path(path: *mut ffi::cairo_path_t) -> Result<Vec<PathSegment>> {
    if path.is_null() {
        return Err(Error::NullPointer);
    }
    let result = (|| {
        let path_ref = unsafe { &*path };
        Status::from_raw(path_ref.status).to_result()?;
        if path_ref.data.is_null() {
            return Ok(Vec::new());
        }
        let data = unsafe { slice::from_raw_parts(path_ref.data, path_ref.num_data as usize) };
        let mut segments = Vec::new();
        let mut index = 0;
        while index < data.len() {
            let header = unsafe { data[index].header };
            let op = PathDataType::from_raw(header.data_type)
                .ok_or(Error::Cairo(Status::InvalidPathData))?;
            let length = header.length as usize;
            if length == 0 || index + length > data.len() {
                return Err(Error::Cairo(Status::InvalidPathData));
            }
            let mut coords = Vec::with_capacity((length - 1) * 2);
            for element in &data[index + 1..index + length] {
                let point = unsafe { element.point };
                coords.push(point.x);
                coords.push(point.y);
            }
            segments.push(PathSegment::from_coords(op, &coords)?);
            index += length;
        }
        Ok(segments)
    })();
    unsafe { ffi::cairo_path_destroy(path) };
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_reject_wrong_coordinate_counts() {
        assert_eq!(
            PathSegment::from_coords(PathDataType::MoveTo, &[1.0, 2.0]).unwrap(),
            PathSegment::MoveTo(1.0, 2.0)
        );
        assert_eq!(
            PathSegment::from_coords(PathDataType::ClosePath, &[]).unwrap(),
            PathSegment::ClosePath
        );
        assert!(matches!(
            PathSegment::from_coords(PathDataType::LineTo, &[1.0, 2.0, 3.0]),
            Err(Error::PathArity {
                op: PathDataType::LineTo,
                expected: 2,
                actual: 3
            })
        ));
        assert!(matches!(
            PathSegment::from_coords(PathDataType::CurveTo, &[1.0, 2.0]),
            Err(Error::PathArity {
                op: PathDataType::CurveTo,
                expected: 6,
                actual: 2
            })
        ));
    }
}
