//! Paint sources: solid colors, surface tiles and gradients.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;

use libc::c_int;

use crate::error::{Result, Status};
use crate::handle::{Handle, RefCounted};
use crate::matrix::Matrix;
use crate::surfaces::{AnySurface, Surface};
use crate::ffi;

unsafe impl RefCounted for ffi::cairo_pattern_t {
    unsafe fn reference(ptr: *mut Self) {
        ffi::cairo_pattern_reference(ptr);
    }

    unsafe fn destroy(ptr: *mut Self) {
        ffi::cairo_pattern_destroy(ptr);
    }
}

ffi_enum! {
    /// Kind tag reported by the native library.
    pub enum PatternKind {
        Solid = 0,
        Surface = 1,
        Linear = 2,
        Radial = 3,
        Mesh = 4,
        RasterSource = 5,
    }
}

ffi_enum! {
    /// What a pattern paints outside its natural area.
    pub enum Extend {
        None = 0,
        Repeat = 1,
        Reflect = 2,
        Pad = 3,
    }
}

ffi_enum! {
    /// Resampling filter used when a pattern is transformed.
    pub enum Filter {
        Fast = 0,
        Good = 1,
        Best = 2,
        Nearest = 3,
        Bilinear = 4,
        Gaussian = 5,
    }
}

/// An owned reference to any cairo pattern.
pub struct Pattern {
    handle: Handle<ffi::cairo_pattern_t>,
}

impl Pattern {
    pub(crate) fn from_raw_full(ptr: *mut ffi::cairo_pattern_t) -> Result<Pattern> {
        Ok(Pattern {
            handle: Handle::wrap(ptr, false)?,
        })
    }

    pub(crate) fn from_raw_borrowed(ptr: *mut ffi::cairo_pattern_t) -> Result<Pattern> {
        Ok(Pattern {
            handle: Handle::wrap(ptr, true)?,
        })
    }

    /// The raw pointer; the reference stays owned by this wrapper.
    pub fn as_raw(&self) -> *mut ffi::cairo_pattern_t {
        self.handle.as_ptr()
    }

    pub(crate) fn as_ptr(&self) -> *mut ffi::cairo_pattern_t {
        self.handle.as_ptr()
    }

    pub(crate) fn addr(&self) -> usize {
        self.handle.addr()
    }

    pub fn status(&self) -> Status {
        Status::from_raw(unsafe { ffi::cairo_pattern_status(self.as_ptr()) })
    }

    pub(crate) fn check(&self) -> Result<()> {
        self.status().to_result()
    }

    pub fn kind(&self) -> Option<PatternKind> {
        PatternKind::from_raw(unsafe { ffi::cairo_pattern_get_type(self.as_ptr()) })
    }

    /// Resolves this pattern to its concrete wrapper by the native kind
    /// tag. Kinds without a registered constructor come back as
    /// [`AnyPattern::Base`].
    pub fn into_typed(self) -> AnyPattern {
        let ctor = self.kind().and_then(|kind| {
            PATTERN_CTORS.with(|ctors| ctors.borrow().get(&kind).copied())
        });
        match ctor {
            Some(ctor) => ctor(self),
            None => AnyPattern::Base(self),
        }
    }

    pub fn set_extend(&self, extend: Extend) -> Result<()> {
        unsafe { ffi::cairo_pattern_set_extend(self.as_ptr(), extend.to_raw()) };
        self.check()
    }

    pub fn extend(&self) -> Option<Extend> {
        Extend::from_raw(unsafe { ffi::cairo_pattern_get_extend(self.as_ptr()) })
    }

    pub fn set_filter(&self, filter: Filter) -> Result<()> {
        unsafe { ffi::cairo_pattern_set_filter(self.as_ptr(), filter.to_raw()) };
        self.check()
    }

    pub fn filter(&self) -> Option<Filter> {
        Filter::from_raw(unsafe { ffi::cairo_pattern_get_filter(self.as_ptr()) })
    }

    /// Sets the transformation from user space to pattern space.
    pub fn set_matrix(&self, matrix: &Matrix) -> Result<()> {
        unsafe { ffi::cairo_pattern_set_matrix(self.as_ptr(), matrix) };
        self.check()
    }

    pub fn matrix(&self) -> Matrix {
        let mut matrix = Matrix::identity();
        unsafe { ffi::cairo_pattern_get_matrix(self.as_ptr(), &mut matrix) };
        matrix
    }
}

impl PartialEq for Pattern {
    /// Two wrappers are equal when they refer to the same native object.
    fn eq(&self, other: &Pattern) -> bool {
        self.addr() == other.addr()
    }
}

impl Eq for Pattern {}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("kind", &self.kind())
            .field("ptr", &self.as_ptr())
            .finish()
    }
}

/// Constructor turning a base wrapper into its concrete variant.
pub type PatternCtor = fn(Pattern) -> AnyPattern;

thread_local! {
    static PATTERN_CTORS: RefCell<HashMap<PatternKind, PatternCtor>> =
        RefCell::new(default_pattern_ctors());
}

fn default_pattern_ctors() -> HashMap<PatternKind, PatternCtor> {
    let mut ctors: HashMap<PatternKind, PatternCtor> = HashMap::new();
    ctors.insert(PatternKind::Solid, |pattern| {
        AnyPattern::Solid(SolidPattern(pattern))
    });
    ctors.insert(PatternKind::Surface, |pattern| {
        AnyPattern::Surface(SurfacePattern(pattern))
    });
    ctors.insert(PatternKind::Linear, |pattern| {
        AnyPattern::Linear(LinearGradient(pattern))
    });
    ctors.insert(PatternKind::Radial, |pattern| {
        AnyPattern::Radial(RadialGradient(pattern))
    });
    ctors
}

/// Replaces the constructor for `kind`, returning the previous one.
pub fn register_pattern_kind(kind: PatternKind, ctor: PatternCtor) -> Option<PatternCtor> {
    PATTERN_CTORS.with(|ctors| ctors.borrow_mut().insert(kind, ctor))
}

/// Removes the constructor for `kind`, returning it.
pub fn unregister_pattern_kind(kind: PatternKind) -> Option<PatternCtor> {
    PATTERN_CTORS.with(|ctors| ctors.borrow_mut().remove(&kind))
}

/// A pattern recovered from a native pointer, resolved to its concrete
/// wrapper where one is registered.
#[derive(Debug)]
pub enum AnyPattern {
    Solid(SolidPattern),
    Surface(SurfacePattern),
    Linear(LinearGradient),
    Radial(RadialGradient),
    Base(Pattern),
}

impl Deref for AnyPattern {
    type Target = Pattern;

    fn deref(&self) -> &Pattern {
        match self {
            AnyPattern::Solid(pattern) => pattern,
            AnyPattern::Surface(pattern) => pattern,
            AnyPattern::Linear(pattern) => pattern,
            AnyPattern::Radial(pattern) => pattern,
            AnyPattern::Base(pattern) => pattern,
        }
    }
}

/// A single opaque or translucent color.
#[derive(Debug, PartialEq, Eq)]
pub struct SolidPattern(Pattern);

impl Deref for SolidPattern {
    type Target = Pattern;

    fn deref(&self) -> &Pattern {
        &self.0
    }
}

impl SolidPattern {
    pub fn from_rgb(red: f64, green: f64, blue: f64) -> Result<SolidPattern> {
        let ptr = unsafe { ffi::cairo_pattern_create_rgb(red, green, blue) };
        let pattern = Pattern::from_raw_full(ptr)?;
        pattern.check()?;
        Ok(SolidPattern(pattern))
    }

    pub fn from_rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Result<SolidPattern> {
        let ptr = unsafe { ffi::cairo_pattern_create_rgba(red, green, blue, alpha) };
        let pattern = Pattern::from_raw_full(ptr)?;
        pattern.check()?;
        Ok(SolidPattern(pattern))
    }

    /// The color as `(red, green, blue, alpha)`, each in `0.0..=1.0`.
    pub fn rgba(&self) -> Result<(f64, f64, f64, f64)> {
        let mut red = 0.0;
        let mut green = 0.0;
        let mut blue = 0.0;
        let mut alpha = 0.0;
        let status = unsafe {
            ffi::cairo_pattern_get_rgba(self.as_ptr(), &mut red, &mut green, &mut blue, &mut alpha)
        };
        Status::from_raw(status).to_result()?;
        Ok((red, green, blue, alpha))
    }
}

/// A pattern painting the contents of another surface.
#[derive(Debug, PartialEq, Eq)]
pub struct SurfacePattern(Pattern);

impl Deref for SurfacePattern {
    type Target = Pattern;

    fn deref(&self) -> &Pattern {
        &self.0
    }
}

impl SurfacePattern {
    /// The native pattern keeps its own reference to `surface`.
    pub fn new(surface: &Surface) -> Result<SurfacePattern> {
        let ptr = unsafe { ffi::cairo_pattern_create_for_surface(surface.as_ptr()) };
        let pattern = Pattern::from_raw_full(ptr)?;
        pattern.check()?;
        Ok(SurfacePattern(pattern))
    }

    /// The surface this pattern paints, resolved to its concrete wrapper.
    pub fn surface(&self) -> Result<AnySurface> {
        let mut raw = std::ptr::null_mut();
        let status = unsafe { ffi::cairo_pattern_get_surface(self.as_ptr(), &mut raw) };
        Status::from_raw(status).to_result()?;
        Ok(Surface::from_raw_borrowed(raw)?.into_typed())
    }
}

/// Shared color-stop interface of the two gradient kinds.
pub trait Gradient: Deref<Target = Pattern> {
    fn add_color_stop_rgb(&self, offset: f64, red: f64, green: f64, blue: f64) -> Result<()> {
        unsafe {
            ffi::cairo_pattern_add_color_stop_rgb(self.as_ptr(), offset, red, green, blue)
        };
        self.check()
    }

    fn add_color_stop_rgba(
        &self,
        offset: f64,
        red: f64,
        green: f64,
        blue: f64,
        alpha: f64,
    ) -> Result<()> {
        unsafe {
            ffi::cairo_pattern_add_color_stop_rgba(self.as_ptr(), offset, red, green, blue, alpha)
        };
        self.check()
    }

    /// All color stops as `(offset, red, green, blue, alpha)`, ordered by
    /// offset with insertion order preserved among equal offsets.
    fn color_stops(&self) -> Result<Vec<(f64, f64, f64, f64, f64)>> {
        let mut count: c_int = 0;
        let status =
            unsafe { ffi::cairo_pattern_get_color_stop_count(self.as_ptr(), &mut count) };
        Status::from_raw(status).to_result()?;
        let mut stops = Vec::with_capacity(count as usize);
        for index in 0..count {
            let mut offset = 0.0;
            let mut red = 0.0;
            let mut green = 0.0;
            let mut blue = 0.0;
            let mut alpha = 0.0;
            let status = unsafe {
                ffi::cairo_pattern_get_color_stop_rgba(
                    self.as_ptr(),
                    index,
                    &mut offset,
                    &mut red,
                    &mut green,
                    &mut blue,
                    &mut alpha,
                )
            };
            Status::from_raw(status).to_result()?;
            stops.push((offset, red, green, blue, alpha));
        }
        Ok(stops)
    }
}

/// A gradient along a line segment.
#[derive(Debug, PartialEq, Eq)]
pub struct LinearGradient(Pattern);

impl Deref for LinearGradient {
    type Target = Pattern;

    fn deref(&self) -> &Pattern {
        &self.0
    }
}

impl Gradient for LinearGradient {}

impl LinearGradient {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Result<LinearGradient> {
        let ptr = unsafe { ffi::cairo_pattern_create_linear(x0, y0, x1, y1) };
        let pattern = Pattern::from_raw_full(ptr)?;
        pattern.check()?;
        Ok(LinearGradient(pattern))
    }

    /// The endpoints as `(x0, y0, x1, y1)`.
    pub fn linear_points(&self) -> Result<(f64, f64, f64, f64)> {
        let mut x0 = 0.0;
        let mut y0 = 0.0;
        let mut x1 = 0.0;
        let mut y1 = 0.0;
        let status = unsafe {
            ffi::cairo_pattern_get_linear_points(self.as_ptr(), &mut x0, &mut y0, &mut x1, &mut y1)
        };
        Status::from_raw(status).to_result()?;
        Ok((x0, y0, x1, y1))
    }
}

/// A gradient between two circles.
#[derive(Debug, PartialEq, Eq)]
pub struct RadialGradient(Pattern);

impl Deref for RadialGradient {
    type Target = Pattern;

    fn deref(&self) -> &Pattern {
        &self.0
    }
}

impl Gradient for RadialGradient {}

impl RadialGradient {
    pub fn new(
        cx0: f64,
        cy0: f64,
        radius0: f64,
        cx1: f64,
        cy1: f64,
        radius1: f64,
    ) -> Result<RadialGradient> {
        let ptr =
            unsafe { ffi::cairo_pattern_create_radial(cx0, cy0, radius0, cx1, cy1, radius1) };
        let pattern = Pattern::from_raw_full(ptr)?;
        pattern.check()?;
        Ok(RadialGradient(pattern))
    }

    /// The two circles as `(x0, y0, radius0, x1, y1, radius1)`.
    pub fn radial_circles(&self) -> Result<(f64, f64, f64, f64, f64, f64)> {
        let mut x0 = 0.0;
        let mut y0 = 0.0;
        let mut r0 = 0.0;
        let mut x1 = 0.0;
        let mut y1 = 0.0;
        let mut r1 = 0.0;
        let status = unsafe {
            ffi::cairo_pattern_get_radial_circles(
                self.as_ptr(),
                &mut x0,
                &mut y0,
                &mut r0,
                &mut x1,
                &mut y1,
                &mut r1,
            )
        };
        Status::from_raw(status).to_result()?;
        Ok((x0, y0, r0, x1, y1, r1))
    }
}
