//! Safe Rust bindings for the cairo 2D vector graphics library.
//!
//! This crate links against the system `libcairo` and mirrors its object
//! model: surfaces, drawing contexts, patterns, font faces, scaled fonts and
//! affine matrices. The binding layer takes care of three things the raw C
//! API leaves to the caller:
//!
//! - **Handle lifetimes**: every wrapper owns exactly one native reference,
//!   released exactly once when the wrapper is dropped.
//! - **Pinning**: stream writers, caller-supplied pixel buffers and MIME
//!   payloads that cairo only sees as raw pointers are kept alive for the
//!   full lifetime of the native object that points at them.
//! - **Type recovery**: generic accessors such as [`Context::target`] return
//!   polymorphic handles; the concrete wrapper is re-derived from the
//!   native-reported kind tag, with a fallback to the base wrapper for
//!   unknown kinds.
//!
//! # Example
//!
//! ```no_run
//! use vellum::{Context, Format, ImageSurface};
//!
//! # fn main() -> vellum::Result<()> {
//! let surface = ImageSurface::new(Format::Argb32, 120, 120)?;
//! let context = Context::new(&surface)?;
//! context.set_source_rgb(1.0, 0.5, 0.25)?;
//! context.rectangle(10.0, 10.0, 100.0, 100.0)?;
//! context.fill()?;
//! surface.write_to_png("rectangle.png")?;
//! # Ok(())
//! # }
//! ```

use std::ffi::CStr;

/// Generates a C-compatible enum with raw-value conversions. Unknown raw
/// values surface as `None` so callers can fall back explicitly.
macro_rules! ffi_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            pub fn to_raw(self) -> libc::c_int {
                match self {
                    $(Self::$variant => $value,)+
                }
            }

            pub fn from_raw(raw: libc::c_int) -> Option<Self> {
                match raw {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

pub mod context;
pub mod error;
pub mod ffi;
pub mod fonts;
mod handle;
pub mod keep_alive;
pub mod matrix;
pub mod patterns;
mod stream;
pub mod surfaces;

pub use context::{
    Antialias, Context, FillRule, LineCap, LineJoin, Operator, PathDataType, PathSegment,
};
pub use error::{Error, Result, Status};
pub use fonts::{
    AnyFontFace, FontFace, FontKind, FontOptions, FontSlant, FontWeight, HintMetrics, HintStyle,
    ScaledFont, SubpixelOrder, ToyFontFace,
};
pub use matrix::Matrix;
pub use patterns::{
    AnyPattern, Extend, Filter, Gradient, LinearGradient, Pattern, PatternKind, RadialGradient,
    SolidPattern, SurfacePattern,
};
pub use surfaces::{
    AnySurface, Content, Format, ImageSurface, PdfMetadata, PdfOutlineFlags, PdfSurface,
    PdfVersion, PsLevel, PsSurface, RecordingSurface, Surface, SurfaceKind, SvgSurface, SvgUnit,
    SvgVersion, PDF_OUTLINE_ROOT,
};

/// The version of the linked cairo library, encoded as
/// `major * 10000 + minor * 100 + micro`.
pub fn version() -> i32 {
    unsafe { ffi::cairo_version() }
}

/// The version of the linked cairo library as a string, e.g. `"1.16.0"`.
pub fn version_string() -> String {
    let cstr = unsafe { CStr::from_ptr(ffi::cairo_version_string()) };
    cstr.to_string_lossy().into_owned()
}

/// A rectangle with double-precision coordinates, in cairo's C layout.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Rectangle {
        Rectangle { x, y, width, height }
    }
}

/// Extents of a rendered string or glyph run, in cairo's C layout.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextExtents {
    pub x_bearing: f64,
    pub y_bearing: f64,
    pub width: f64,
    pub height: f64,
    pub x_advance: f64,
    pub y_advance: f64,
}

/// Metrics of a font at a particular scale, in cairo's C layout.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FontExtents {
    pub ascent: f64,
    pub descent: f64,
    pub height: f64,
    pub max_x_advance: f64,
    pub max_y_advance: f64,
}

/// A single positioned glyph, in cairo's C layout.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub index: libc::c_ulong,
    pub x: f64,
    pub y: f64,
}

/// A mapping from a run of text bytes to a run of glyphs, in cairo's C
/// layout.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextCluster {
    pub num_bytes: i32,
    pub num_glyphs: i32,
}
