//! Font faces, scaled fonts and rendering options.
//!
//! The toy font API selects fonts by family name; it is meant for simple
//! text output and tests. Real text layout goes through FreeType or
//! platform font systems, which are out of scope here, but native-returned
//! faces of those kinds still come back as [`AnyFontFace::Base`] and carry
//! all generic operations.

use std::ffi::CStr;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ptr::NonNull;

use libc::c_int;

use crate::context::Antialias;
use crate::error::{Error, Result, Status};
use crate::handle::{Handle, RefCounted};
use crate::matrix::Matrix;
use crate::surfaces::c_string;
use crate::{ffi, FontExtents, Glyph, TextCluster, TextExtents};

unsafe impl RefCounted for ffi::cairo_font_face_t {
    unsafe fn reference(ptr: *mut Self) {
        ffi::cairo_font_face_reference(ptr);
    }

    unsafe fn destroy(ptr: *mut Self) {
        ffi::cairo_font_face_destroy(ptr);
    }
}

unsafe impl RefCounted for ffi::cairo_scaled_font_t {
    unsafe fn reference(ptr: *mut Self) {
        ffi::cairo_scaled_font_reference(ptr);
    }

    unsafe fn destroy(ptr: *mut Self) {
        ffi::cairo_scaled_font_destroy(ptr);
    }
}

ffi_enum! {
    /// Kind tag reported by the native library.
    pub enum FontKind {
        Toy = 0,
        FreeType = 1,
        Win32 = 2,
        Quartz = 3,
        User = 4,
    }
}

ffi_enum! {
    pub enum FontSlant {
        Normal = 0,
        Italic = 1,
        Oblique = 2,
    }
}

ffi_enum! {
    pub enum FontWeight {
        Normal = 0,
        Bold = 1,
    }
}

ffi_enum! {
    /// Order of color elements within a subpixel-rendered pixel.
    pub enum SubpixelOrder {
        Default = 0,
        Rgb = 1,
        Bgr = 2,
        Vrgb = 3,
        Vbgr = 4,
    }
}

ffi_enum! {
    /// How much to force glyph outlines onto integer positions.
    pub enum HintStyle {
        Default = 0,
        None = 1,
        Slight = 2,
        Medium = 3,
        Full = 4,
    }
}

ffi_enum! {
    /// Whether font metrics are rounded to integer device units.
    pub enum HintMetrics {
        Default = 0,
        Off = 1,
        On = 2,
    }
}

/// An owned reference to any cairo font face.
pub struct FontFace {
    handle: Handle<ffi::cairo_font_face_t>,
}

impl FontFace {
    pub(crate) fn from_raw_full(ptr: *mut ffi::cairo_font_face_t) -> Result<FontFace> {
        Ok(FontFace {
            handle: Handle::wrap(ptr, false)?,
        })
    }

    pub(crate) fn from_raw_borrowed(ptr: *mut ffi::cairo_font_face_t) -> Result<FontFace> {
        Ok(FontFace {
            handle: Handle::wrap(ptr, true)?,
        })
    }

    /// The raw pointer; the reference stays owned by this wrapper.
    pub fn as_raw(&self) -> *mut ffi::cairo_font_face_t {
        self.handle.as_ptr()
    }

    pub(crate) fn as_ptr(&self) -> *mut ffi::cairo_font_face_t {
        self.handle.as_ptr()
    }

    pub(crate) fn addr(&self) -> usize {
        self.handle.addr()
    }

    pub fn status(&self) -> Status {
        Status::from_raw(unsafe { ffi::cairo_font_face_status(self.as_ptr()) })
    }

    pub(crate) fn check(&self) -> Result<()> {
        self.status().to_result()
    }

    pub fn kind(&self) -> Option<FontKind> {
        FontKind::from_raw(unsafe { ffi::cairo_font_face_get_type(self.as_ptr()) })
    }

    /// Resolves this face to its concrete wrapper by the native kind tag.
    pub fn into_typed(self) -> AnyFontFace {
        let ctor = self.kind().and_then(|kind| {
            FONT_CTORS.with(|ctors| ctors.borrow().get(&kind).copied())
        });
        match ctor {
            Some(ctor) => ctor(self),
            None => AnyFontFace::Base(self),
        }
    }
}

impl PartialEq for FontFace {
    /// Two wrappers are equal when they refer to the same native object.
    fn eq(&self, other: &FontFace) -> bool {
        self.addr() == other.addr()
    }
}

impl Eq for FontFace {}

impl fmt::Debug for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontFace")
            .field("kind", &self.kind())
            .field("ptr", &self.as_ptr())
            .finish()
    }
}

/// Constructor turning a base wrapper into its concrete variant.
pub type FontFaceCtor = fn(FontFace) -> AnyFontFace;

thread_local! {
    static FONT_CTORS: RefCell<HashMap<FontKind, FontFaceCtor>> =
        RefCell::new(default_font_ctors());
}

fn default_font_ctors() -> HashMap<FontKind, FontFaceCtor> {
    let mut ctors: HashMap<FontKind, FontFaceCtor> = HashMap::new();
    ctors.insert(FontKind::Toy, |face| AnyFontFace::Toy(ToyFontFace(face)));
    ctors
}

/// Replaces the constructor for `kind`, returning the previous one.
pub fn register_font_kind(kind: FontKind, ctor: FontFaceCtor) -> Option<FontFaceCtor> {
    FONT_CTORS.with(|ctors| ctors.borrow_mut().insert(kind, ctor))
}

/// Removes the constructor for `kind`, returning it.
pub fn unregister_font_kind(kind: FontKind) -> Option<FontFaceCtor> {
    FONT_CTORS.with(|ctors| ctors.borrow_mut().remove(&kind))
}

/// A font face recovered from a native pointer, resolved to its concrete
/// wrapper where one is registered.
#[derive(Debug)]
pub enum AnyFontFace {
    Toy(ToyFontFace),
    Base(FontFace),
}

impl std::ops::Deref for AnyFontFace {
    type Target = FontFace;

    fn deref(&self) -> &FontFace {
        match self {
            AnyFontFace::Toy(face) => face,
            AnyFontFace::Base(face) => face,
        }
    }
}

/// A font face selected by family name through cairo's toy text API.
#[derive(Debug, PartialEq, Eq)]
pub struct ToyFontFace(FontFace);

impl std::ops::Deref for ToyFontFace {
    type Target = FontFace;

    fn deref(&self) -> &FontFace {
        &self.0
    }
}

impl ToyFontFace {
    pub fn new(family: &str, slant: FontSlant, weight: FontWeight) -> Result<ToyFontFace> {
        let family = c_string(family)?;
        let ptr = unsafe {
            ffi::cairo_toy_font_face_create(family.as_ptr(), slant.to_raw(), weight.to_raw())
        };
        let face = FontFace::from_raw_full(ptr)?;
        face.check()?;
        Ok(ToyFontFace(face))
    }

    pub fn family(&self) -> String {
        let family = unsafe { ffi::cairo_toy_font_face_get_family(self.as_ptr()) };
        if family.is_null() {
            return String::new();
        }
        unsafe { CStr::from_ptr(family) }.to_string_lossy().into_owned()
    }

    pub fn slant(&self) -> Option<FontSlant> {
        FontSlant::from_raw(unsafe { ffi::cairo_toy_font_face_get_slant(self.as_ptr()) })
    }

    pub fn weight(&self) -> Option<FontWeight> {
        FontWeight::from_raw(unsafe { ffi::cairo_toy_font_face_get_weight(self.as_ptr()) })
    }
}

/// A font face frozen at a particular size and transformation.
pub struct ScaledFont {
    handle: Handle<ffi::cairo_scaled_font_t>,
}

impl ScaledFont {
    /// A scaled font with cairo's defaults: a size-10 font matrix, an
    /// identity CTM and default options.
    pub fn new(font_face: &FontFace) -> Result<ScaledFont> {
        ScaledFont::with_matrices(
            font_face,
            &Matrix::init_scale(10.0, 10.0),
            &Matrix::identity(),
            &FontOptions::new()?,
        )
    }

    pub fn with_matrices(
        font_face: &FontFace,
        font_matrix: &Matrix,
        ctm: &Matrix,
        options: &FontOptions,
    ) -> Result<ScaledFont> {
        let ptr = unsafe {
            ffi::cairo_scaled_font_create(font_face.as_ptr(), font_matrix, ctm, options.as_ptr())
        };
        let font = ScaledFont {
            handle: Handle::wrap(ptr, false)?,
        };
        font.check()?;
        Ok(font)
    }

    pub(crate) fn from_raw_borrowed(ptr: *mut ffi::cairo_scaled_font_t) -> Result<ScaledFont> {
        Ok(ScaledFont {
            handle: Handle::wrap(ptr, true)?,
        })
    }

    /// The raw pointer; the reference stays owned by this wrapper.
    pub fn as_raw(&self) -> *mut ffi::cairo_scaled_font_t {
        self.handle.as_ptr()
    }

    pub(crate) fn as_ptr(&self) -> *mut ffi::cairo_scaled_font_t {
        self.handle.as_ptr()
    }

    pub(crate) fn addr(&self) -> usize {
        self.handle.addr()
    }

    pub fn status(&self) -> Status {
        Status::from_raw(unsafe { ffi::cairo_scaled_font_status(self.as_ptr()) })
    }

    pub(crate) fn check(&self) -> Result<()> {
        self.status().to_result()
    }

    /// The face this font was created from, resolved to its concrete
    /// wrapper.
    pub fn font_face(&self) -> Result<AnyFontFace> {
        let ptr = unsafe { ffi::cairo_scaled_font_get_font_face(self.as_ptr()) };
        Ok(FontFace::from_raw_borrowed(ptr)?.into_typed())
    }

    pub fn font_matrix(&self) -> Matrix {
        let mut matrix = Matrix::identity();
        unsafe { ffi::cairo_scaled_font_get_font_matrix(self.as_ptr(), &mut matrix) };
        matrix
    }

    pub fn ctm(&self) -> Matrix {
        let mut matrix = Matrix::identity();
        unsafe { ffi::cairo_scaled_font_get_ctm(self.as_ptr(), &mut matrix) };
        matrix
    }

    /// The font matrix with the CTM applied; the transformation actually
    /// used to render glyphs.
    pub fn scale_matrix(&self) -> Matrix {
        let mut matrix = Matrix::identity();
        unsafe { ffi::cairo_scaled_font_get_scale_matrix(self.as_ptr(), &mut matrix) };
        matrix
    }

    pub fn font_options(&self) -> Result<FontOptions> {
        let options = FontOptions::new()?;
        unsafe { ffi::cairo_scaled_font_get_font_options(self.as_ptr(), options.as_ptr()) };
        options.check()?;
        Ok(options)
    }

    pub fn extents(&self) -> FontExtents {
        let mut extents = FontExtents::default();
        unsafe { ffi::cairo_scaled_font_extents(self.as_ptr(), &mut extents) };
        extents
    }

    pub fn text_extents(&self, text: &str) -> Result<TextExtents> {
        let text = c_string(text)?;
        let mut extents = TextExtents::default();
        unsafe { ffi::cairo_scaled_font_text_extents(self.as_ptr(), text.as_ptr(), &mut extents) };
        self.check()?;
        Ok(extents)
    }

    pub fn glyph_extents(&self, glyphs: &[Glyph]) -> Result<TextExtents> {
        let mut extents = TextExtents::default();
        unsafe {
            ffi::cairo_scaled_font_glyph_extents(
                self.as_ptr(),
                glyphs.as_ptr(),
                glyphs.len() as c_int,
                &mut extents,
            )
        };
        self.check()?;
        Ok(extents)
    }

    /// Converts text to positioned glyphs starting at `(x, y)`.
    pub fn text_to_glyphs(&self, x: f64, y: f64, text: &str) -> Result<Vec<Glyph>> {
        Ok(self.text_to_glyphs_with_clusters(x, y, text)?.0)
    }

    /// Converts text to glyphs together with cluster mappings. The boolean
    /// is true when clusters map to glyphs in reverse order (right-to-left
    /// text).
    pub fn text_to_glyphs_with_clusters(
        &self,
        x: f64,
        y: f64,
        text: &str,
    ) -> Result<(Vec<Glyph>, Vec<TextCluster>, bool)> {
        let utf8_len = text.len() as c_int;
        let text = c_string(text)?;
        let mut glyphs: *mut Glyph = std::ptr::null_mut();
        let mut num_glyphs: c_int = 0;
        let mut clusters: *mut TextCluster = std::ptr::null_mut();
        let mut num_clusters: c_int = 0;
        let mut cluster_flags: c_int = 0;
        let status = unsafe {
            ffi::cairo_scaled_font_text_to_glyphs(
                self.as_ptr(),
                x,
                y,
                text.as_ptr(),
                utf8_len,
                &mut glyphs,
                &mut num_glyphs,
                &mut clusters,
                &mut num_clusters,
                &mut cluster_flags,
            )
        };
        Status::from_raw(status).to_result()?;
        let glyph_vec = if glyphs.is_null() {
            Vec::new()
        } else {
            let copied =
                unsafe { std::slice::from_raw_parts(glyphs, num_glyphs as usize) }.to_vec();
            unsafe { ffi::cairo_glyph_free(glyphs) };
            copied
        };
        let cluster_vec = if clusters.is_null() {
            Vec::new()
        } else {
            let copied =
                unsafe { std::slice::from_raw_parts(clusters, num_clusters as usize) }.to_vec();
            unsafe { ffi::cairo_text_cluster_free(clusters) };
            copied
        };
        Ok((glyph_vec, cluster_vec, cluster_flags & 1 != 0))
    }
}

impl PartialEq for ScaledFont {
    fn eq(&self, other: &ScaledFont) -> bool {
        self.addr() == other.addr()
    }
}

impl Eq for ScaledFont {}

impl fmt::Debug for ScaledFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScaledFont").field("ptr", &self.as_ptr()).finish()
    }
}

/// Options controlling how glyphs are rasterized.
///
/// Unlike the other wrappers this is a plain owned object, not a shared
/// refcounted one: the native type has copy/destroy semantics only.
pub struct FontOptions {
    ptr: NonNull<ffi::cairo_font_options_t>,
    _marker: PhantomData<*mut ffi::cairo_font_options_t>,
}

impl FontOptions {
    pub fn new() -> Result<FontOptions> {
        let ptr = unsafe { ffi::cairo_font_options_create() };
        let options = FontOptions {
            ptr: NonNull::new(ptr).ok_or(Error::NullPointer)?,
            _marker: PhantomData,
        };
        options.check()?;
        Ok(options)
    }

    pub(crate) fn as_ptr(&self) -> *mut ffi::cairo_font_options_t {
        self.ptr.as_ptr()
    }

    pub fn status(&self) -> Status {
        Status::from_raw(unsafe { ffi::cairo_font_options_status(self.as_ptr()) })
    }

    pub(crate) fn check(&self) -> Result<()> {
        self.status().to_result()
    }

    /// An independent copy of these options.
    pub fn copy(&self) -> Result<FontOptions> {
        let ptr = unsafe { ffi::cairo_font_options_copy(self.as_ptr()) };
        let options = FontOptions {
            ptr: NonNull::new(ptr).ok_or(Error::NullPointer)?,
            _marker: PhantomData,
        };
        options.check()?;
        Ok(options)
    }

    /// Replaces non-default values of `self` with non-default values of
    /// `other`.
    pub fn merge(&mut self, other: &FontOptions) -> Result<()> {
        unsafe { ffi::cairo_font_options_merge(self.as_ptr(), other.as_ptr()) };
        self.check()
    }

    pub fn set_antialias(&mut self, antialias: Antialias) {
        unsafe { ffi::cairo_font_options_set_antialias(self.as_ptr(), antialias.to_raw()) };
    }

    pub fn antialias(&self) -> Option<Antialias> {
        Antialias::from_raw(unsafe { ffi::cairo_font_options_get_antialias(self.as_ptr()) })
    }

    pub fn set_subpixel_order(&mut self, subpixel_order: SubpixelOrder) {
        unsafe {
            ffi::cairo_font_options_set_subpixel_order(self.as_ptr(), subpixel_order.to_raw())
        };
    }

    pub fn subpixel_order(&self) -> Option<SubpixelOrder> {
        SubpixelOrder::from_raw(unsafe {
            ffi::cairo_font_options_get_subpixel_order(self.as_ptr())
        })
    }

    pub fn set_hint_style(&mut self, hint_style: HintStyle) {
        unsafe { ffi::cairo_font_options_set_hint_style(self.as_ptr(), hint_style.to_raw()) };
    }

    pub fn hint_style(&self) -> Option<HintStyle> {
        HintStyle::from_raw(unsafe { ffi::cairo_font_options_get_hint_style(self.as_ptr()) })
    }

    pub fn set_hint_metrics(&mut self, hint_metrics: HintMetrics) {
        unsafe { ffi::cairo_font_options_set_hint_metrics(self.as_ptr(), hint_metrics.to_raw()) };
    }

    pub fn hint_metrics(&self) -> Option<HintMetrics> {
        HintMetrics::from_raw(unsafe { ffi::cairo_font_options_get_hint_metrics(self.as_ptr()) })
    }

    /// Sets OpenType variation axes as a `"wght=200,wdth=140.5"` style
    /// string. `None` resets to the default.
    pub fn set_variations(&mut self, variations: Option<&str>) -> Result<()> {
        match variations {
            Some(variations) => {
                let variations = c_string(variations)?;
                unsafe {
                    ffi::cairo_font_options_set_variations(self.as_ptr(), variations.as_ptr())
                };
            }
            None => unsafe {
                ffi::cairo_font_options_set_variations(self.as_ptr(), std::ptr::null())
            },
        }
        self.check()
    }

    pub fn variations(&self) -> Option<String> {
        let variations = unsafe { ffi::cairo_font_options_get_variations(self.as_ptr()) };
        if variations.is_null() {
            None
        } else {
            Some(unsafe { CStr::from_ptr(variations) }.to_string_lossy().into_owned())
        }
    }
}

impl Drop for FontOptions {
    fn drop(&mut self) {
        unsafe { ffi::cairo_font_options_destroy(self.ptr.as_ptr()) };
    }
}

impl PartialEq for FontOptions {
    /// Structural comparison through the native library, not pointer
    /// identity.
    fn eq(&self, other: &FontOptions) -> bool {
        unsafe { ffi::cairo_font_options_equal(self.as_ptr(), other.as_ptr()) != 0 }
    }
}

impl Eq for FontOptions {}

impl Hash for FontOptions {
    fn hash<H: Hasher>(&self, state: &mut H) {
        unsafe { ffi::cairo_font_options_hash(self.as_ptr()) }.hash(state);
    }
}

impl fmt::Debug for FontOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontOptions")
            .field("antialias", &self.antialias())
            .field("subpixel_order", &self.subpixel_order())
            .field("hint_style", &self.hint_style())
            .field("hint_metrics", &self.hint_metrics())
            .finish()
    }
}
