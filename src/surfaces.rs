//! Render targets: raster images, paged vector backends and recordings.
//!
//! [`Surface`] wraps any `cairo_surface_t` and carries the operations shared
//! by every backend. The concrete wrappers ([`ImageSurface`], [`PdfSurface`],
//! [`SvgSurface`], [`PsSurface`], [`RecordingSurface`]) deref to it and add
//! their backend-specific calls. Native-returned surfaces of a kind without
//! a registered wrapper come back as [`AnySurface::Base`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::CString;
use std::fmt;
use std::io;
use std::ops::Deref;
use std::path::Path;
use std::ptr;
use std::slice;

use libc::{c_int, c_ulong, c_void};

use crate::error::{Error, Result, Status};
use crate::fonts::FontOptions;
use crate::handle::{Handle, RefCounted};
use crate::keep_alive;
use crate::stream;
use crate::{ffi, Rectangle};

unsafe impl RefCounted for ffi::cairo_surface_t {
    unsafe fn reference(ptr: *mut Self) {
        ffi::cairo_surface_reference(ptr);
    }

    unsafe fn destroy(ptr: *mut Self) {
        ffi::cairo_surface_destroy(ptr);
    }
}

static STREAM_PIN_KEY: ffi::cairo_user_data_key_t = ffi::cairo_user_data_key_t { unused: 0 };
static DATA_PIN_KEY: ffi::cairo_user_data_key_t = ffi::cairo_user_data_key_t { unused: 0 };

pub(crate) fn c_string(text: &str) -> Result<CString> {
    CString::new(text).map_err(|_| Error::Cairo(Status::InvalidString))
}

pub(crate) fn path_to_c(path: &Path) -> Result<CString> {
    let text = path
        .to_str()
        .ok_or(Error::Cairo(Status::InvalidString))?;
    c_string(text)
}

ffi_enum! {
    /// Pixel layout of an image surface.
    pub enum Format {
        Invalid = -1,
        /// 32 bits per pixel, alpha then RGB, premultiplied, native endian.
        Argb32 = 0,
        Rgb24 = 1,
        /// 8-bit alpha only.
        A8 = 2,
        A1 = 3,
        Rgb16_565 = 4,
        Rgb30 = 5,
    }
}

ffi_enum! {
    /// Which channels a surface stores.
    pub enum Content {
        Color = 0x1000,
        Alpha = 0x2000,
        ColorAlpha = 0x3000,
    }
}

ffi_enum! {
    /// Backend tag reported by the native library.
    pub enum SurfaceKind {
        Image = 0,
        Pdf = 1,
        Ps = 2,
        Xlib = 3,
        Xcb = 4,
        Glitz = 5,
        Quartz = 6,
        Win32 = 7,
        BeOs = 8,
        DirectFb = 9,
        Svg = 10,
        Os2 = 11,
        Win32Printing = 12,
        QuartzImage = 13,
        Script = 14,
        Qt = 15,
        Recording = 16,
        Vg = 17,
        Gl = 18,
        Drm = 19,
        Tee = 20,
        Xml = 21,
        Skia = 22,
        Subsurface = 23,
        Cogl = 24,
    }
}

ffi_enum! {
    /// PDF specification versions the PDF backend can target.
    pub enum PdfVersion {
        V1_4 = 0,
        V1_5 = 1,
    }
}

ffi_enum! {
    /// Document metadata fields of a PDF surface.
    pub enum PdfMetadata {
        Title = 0,
        Author = 1,
        Subject = 2,
        Keywords = 3,
        Creator = 4,
        CreateDate = 5,
        ModDate = 6,
    }
}

ffi_enum! {
    /// SVG specification versions the SVG backend can target.
    pub enum SvgVersion {
        V1_1 = 0,
        V1_2 = 1,
    }
}

ffi_enum! {
    /// Unit used for the width and height attributes of an SVG document.
    pub enum SvgUnit {
        User = 0,
        Em = 1,
        Ex = 2,
        Px = 3,
        In = 4,
        Cm = 5,
        Mm = 6,
        Pt = 7,
        Pc = 8,
        Percent = 9,
    }
}

ffi_enum! {
    /// PostScript language levels the PS backend can target.
    pub enum PsLevel {
        Level2 = 0,
        Level3 = 1,
    }
}

bitflags::bitflags! {
    /// Display flags for a PDF outline item.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PdfOutlineFlags: u32 {
        const OPEN = 1;
        const BOLD = 2;
        const ITALIC = 4;
    }
}

/// Parent id for top-level PDF outline items.
pub const PDF_OUTLINE_ROOT: i32 = 0;

/// An owned reference to any cairo surface.
pub struct Surface {
    handle: Handle<ffi::cairo_surface_t>,
}

impl Surface {
    /// Adopts a reference the caller owns (freshly created surfaces).
    pub(crate) fn from_raw_full(ptr: *mut ffi::cairo_surface_t) -> Result<Surface> {
        Ok(Surface {
            handle: Handle::wrap(ptr, false)?,
        })
    }

    /// Takes an additional reference to a borrowed pointer (peek accessors).
    pub(crate) fn from_raw_borrowed(ptr: *mut ffi::cairo_surface_t) -> Result<Surface> {
        Ok(Surface {
            handle: Handle::wrap(ptr, true)?,
        })
    }

    /// The raw pointer, for interoperating with other cairo bindings. The
    /// reference stays owned by this wrapper.
    pub fn as_raw(&self) -> *mut ffi::cairo_surface_t {
        self.handle.as_ptr()
    }

    pub(crate) fn as_ptr(&self) -> *mut ffi::cairo_surface_t {
        self.handle.as_ptr()
    }

    pub(crate) fn addr(&self) -> usize {
        self.handle.addr()
    }

    pub fn status(&self) -> Status {
        Status::from_raw(unsafe { ffi::cairo_surface_status(self.as_ptr()) })
    }

    pub(crate) fn check(&self) -> Result<()> {
        self.status().to_result()
    }

    pub fn kind(&self) -> Option<SurfaceKind> {
        SurfaceKind::from_raw(unsafe { ffi::cairo_surface_get_type(self.as_ptr()) })
    }

    pub fn content(&self) -> Option<Content> {
        Content::from_raw(unsafe { ffi::cairo_surface_get_content(self.as_ptr()) })
    }

    /// Resolves this surface to its concrete wrapper by the native kind tag.
    /// Kinds without a registered constructor come back as
    /// [`AnySurface::Base`].
    pub fn into_typed(self) -> AnySurface {
        let ctor = self.kind().and_then(|kind| {
            SURFACE_CTORS.with(|ctors| ctors.borrow().get(&kind).copied())
        });
        match ctor {
            Some(ctor) => ctor(self),
            None => AnySurface::Base(self),
        }
    }

    /// Finishes the surface, flushing pending output. Drawing through a
    /// finished surface fails with [`Error::Finished`]. Calling this twice
    /// is harmless. On a stream-backed surface whose writer failed, this
    /// returns the writer's [`io::Error`] instead of the native status.
    pub fn finish(&self) -> Result<()> {
        unsafe { ffi::cairo_surface_finish(self.as_ptr()) };
        if let Some(err) = self.take_stream_error() {
            return Err(Error::Io(err));
        }
        self.check()
    }

    pub fn flush(&self) -> Result<()> {
        unsafe { ffi::cairo_surface_flush(self.as_ptr()) };
        if let Some(err) = self.take_stream_error() {
            return Err(Error::Io(err));
        }
        self.check()
    }

    /// The first `io::Error` raised by this surface's output stream, if it
    /// is stream-backed and a write has failed.
    fn take_stream_error(&self) -> Option<io::Error> {
        let closure = unsafe {
            ffi::cairo_surface_get_user_data(self.as_ptr(), &STREAM_PIN_KEY)
        };
        if closure.is_null() {
            return None;
        }
        unsafe { (*(closure as *const stream::WriteClosure)).take_error() }
    }

    /// Tells cairo the pixel contents were modified outside of cairo.
    pub fn mark_dirty(&self) -> Result<()> {
        unsafe { ffi::cairo_surface_mark_dirty(self.as_ptr()) };
        self.check()
    }

    pub fn mark_dirty_rectangle(&self, x: i32, y: i32, width: i32, height: i32) -> Result<()> {
        unsafe {
            ffi::cairo_surface_mark_dirty_rectangle(self.as_ptr(), x, y, width, height)
        };
        self.check()
    }

    /// Emits the current page without clearing it. Only meaningful for
    /// paged backends.
    pub fn copy_page(&self) -> Result<()> {
        unsafe { ffi::cairo_surface_copy_page(self.as_ptr()) };
        self.check()
    }

    /// Emits and clears the current page.
    pub fn show_page(&self) -> Result<()> {
        unsafe { ffi::cairo_surface_show_page(self.as_ptr()) };
        self.check()
    }

    pub fn set_device_offset(&self, x_offset: f64, y_offset: f64) -> Result<()> {
        unsafe { ffi::cairo_surface_set_device_offset(self.as_ptr(), x_offset, y_offset) };
        self.check()
    }

    pub fn device_offset(&self) -> (f64, f64) {
        let mut x = 0.0;
        let mut y = 0.0;
        unsafe { ffi::cairo_surface_get_device_offset(self.as_ptr(), &mut x, &mut y) };
        (x, y)
    }

    pub fn set_device_scale(&self, x_scale: f64, y_scale: f64) -> Result<()> {
        unsafe { ffi::cairo_surface_set_device_scale(self.as_ptr(), x_scale, y_scale) };
        self.check()
    }

    pub fn device_scale(&self) -> (f64, f64) {
        let mut x = 0.0;
        let mut y = 0.0;
        unsafe { ffi::cairo_surface_get_device_scale(self.as_ptr(), &mut x, &mut y) };
        (x, y)
    }

    pub fn set_fallback_resolution(&self, x_ppi: f64, y_ppi: f64) -> Result<()> {
        unsafe { ffi::cairo_surface_set_fallback_resolution(self.as_ptr(), x_ppi, y_ppi) };
        self.check()
    }

    pub fn fallback_resolution(&self) -> (f64, f64) {
        let mut x = 0.0;
        let mut y = 0.0;
        unsafe { ffi::cairo_surface_get_fallback_resolution(self.as_ptr(), &mut x, &mut y) };
        (x, y)
    }

    /// A new surface as compatible as possible with this one.
    pub fn create_similar(&self, content: Content, width: i32, height: i32) -> Result<Surface> {
        let ptr = unsafe {
            ffi::cairo_surface_create_similar(self.as_ptr(), content.to_raw(), width, height)
        };
        let surface = Surface::from_raw_full(ptr)?;
        surface.check()?;
        Ok(surface)
    }

    /// A new image surface suited for fast blitting onto this one.
    pub fn create_similar_image(
        &self,
        format: Format,
        width: i32,
        height: i32,
    ) -> Result<ImageSurface> {
        let ptr = unsafe {
            ffi::cairo_surface_create_similar_image(self.as_ptr(), format.to_raw(), width, height)
        };
        let surface = Surface::from_raw_full(ptr)?;
        surface.check()?;
        Ok(ImageSurface(surface))
    }

    /// A subsurface clipped to a rectangle of this surface, in target
    /// coordinates. The native object keeps its parent alive.
    pub fn create_for_rectangle(&self, x: f64, y: f64, width: f64, height: f64) -> Result<Surface> {
        let ptr = unsafe {
            ffi::cairo_surface_create_for_rectangle(self.as_ptr(), x, y, width, height)
        };
        let surface = Surface::from_raw_full(ptr)?;
        surface.check()?;
        Ok(surface)
    }

    /// The default font rendering options of this surface's backend.
    pub fn font_options(&self) -> Result<FontOptions> {
        let options = FontOptions::new()?;
        unsafe { ffi::cairo_surface_get_font_options(self.as_ptr(), options.as_ptr()) };
        options.check()?;
        Ok(options)
    }

    pub fn has_show_text_glyphs(&self) -> bool {
        unsafe { ffi::cairo_surface_has_show_text_glyphs(self.as_ptr()) != 0 }
    }

    /// Attaches an out-of-band representation (e.g. the original JPEG bytes
    /// of a decoded image) that vector backends may embed verbatim. The
    /// bytes are copied and pinned until the surface drops them or replaces
    /// them. `None` clears a previous attachment.
    pub fn set_mime_data(&self, mime_type: &str, data: Option<&[u8]>) -> Result<()> {
        let mime = c_string(mime_type)?;
        let status = match data {
            Some(bytes) => {
                let pinned: Box<[u8]> = bytes.into();
                let data_ptr = pinned.as_ptr();
                // The pin key must be unique per attachment. Empty payloads
                // all share one dangling data address, so the key is the
                // pin's own heap slot, not the payload address.
                let holder = Box::new(pinned);
                let token = &*holder as *const Box<[u8]> as *mut c_void;
                let status = unsafe {
                    ffi::cairo_surface_set_mime_data(
                        self.as_ptr(),
                        mime.as_ptr(),
                        data_ptr,
                        holder.len() as c_ulong,
                        Some(keep_alive::release_pin),
                        token,
                    )
                };
                if status == ffi::CAIRO_STATUS_SUCCESS {
                    keep_alive::register(self.addr(), holder, token as usize);
                }
                status
            }
            None => unsafe {
                ffi::cairo_surface_set_mime_data(
                    self.as_ptr(),
                    mime.as_ptr(),
                    ptr::null(),
                    0,
                    None,
                    ptr::null_mut(),
                )
            },
        };
        Status::from_raw(status).to_result()
    }

    /// A copy of the attachment for `mime_type`, if any.
    pub fn mime_data(&self, mime_type: &str) -> Result<Option<Vec<u8>>> {
        let mime = c_string(mime_type)?;
        let mut data: *const u8 = ptr::null();
        let mut length: c_ulong = 0;
        unsafe {
            ffi::cairo_surface_get_mime_data(self.as_ptr(), mime.as_ptr(), &mut data, &mut length)
        };
        if data.is_null() {
            Ok(None)
        } else {
            let bytes = unsafe { slice::from_raw_parts(data, length as usize) };
            Ok(Some(bytes.to_vec()))
        }
    }

    pub fn supports_mime_type(&self, mime_type: &str) -> Result<bool> {
        let mime = c_string(mime_type)?;
        Ok(unsafe { ffi::cairo_surface_supports_mime_type(self.as_ptr(), mime.as_ptr()) != 0 })
    }

    /// Encodes the surface contents as PNG into a file.
    pub fn write_to_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let filename = path_to_c(path.as_ref())?;
        let status =
            unsafe { ffi::cairo_surface_write_to_png(self.as_ptr(), filename.as_ptr()) };
        Status::from_raw(status).to_result()
    }

    /// Encodes the surface contents as PNG into any writer.
    pub fn write_to_png_stream<W: io::Write>(&self, writer: &mut W) -> Result<()> {
        let mut closure = stream::BorrowedWriteClosure::new(writer);
        let status = unsafe {
            ffi::cairo_surface_write_to_png_stream(
                self.as_ptr(),
                Some(stream::write_to_borrowed_closure),
                closure.context_ptr(),
            )
        };
        if let Some(err) = closure.error.take() {
            return Err(Error::Io(err));
        }
        Status::from_raw(status).to_result()
    }

    /// Encodes the surface contents as PNG into a fresh byte vector.
    pub fn write_to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.write_to_png_stream(&mut bytes)?;
        Ok(bytes)
    }
}

impl PartialEq for Surface {
    /// Two wrappers are equal when they refer to the same native object.
    fn eq(&self, other: &Surface) -> bool {
        self.addr() == other.addr()
    }
}

impl Eq for Surface {}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("kind", &self.kind())
            .field("ptr", &self.as_ptr())
            .finish()
    }
}

/// Constructor turning a base wrapper into its concrete variant.
pub type SurfaceCtor = fn(Surface) -> AnySurface;

thread_local! {
    static SURFACE_CTORS: RefCell<HashMap<SurfaceKind, SurfaceCtor>> =
        RefCell::new(default_surface_ctors());
}

fn default_surface_ctors() -> HashMap<SurfaceKind, SurfaceCtor> {
    let mut ctors: HashMap<SurfaceKind, SurfaceCtor> = HashMap::new();
    ctors.insert(SurfaceKind::Image, |surface| {
        AnySurface::Image(ImageSurface(surface))
    });
    ctors.insert(SurfaceKind::Pdf, |surface| AnySurface::Pdf(PdfSurface(surface)));
    ctors.insert(SurfaceKind::Svg, |surface| AnySurface::Svg(SvgSurface(surface)));
    ctors.insert(SurfaceKind::Ps, |surface| AnySurface::Ps(PsSurface(surface)));
    ctors.insert(SurfaceKind::Recording, |surface| {
        AnySurface::Recording(RecordingSurface(surface))
    });
    ctors
}

/// Replaces the constructor for `kind`, returning the previous one.
pub fn register_surface_kind(kind: SurfaceKind, ctor: SurfaceCtor) -> Option<SurfaceCtor> {
    SURFACE_CTORS.with(|ctors| ctors.borrow_mut().insert(kind, ctor))
}

/// Removes the constructor for `kind`, returning it. Surfaces of that kind
/// fall back to [`AnySurface::Base`] until a constructor is registered
/// again.
pub fn unregister_surface_kind(kind: SurfaceKind) -> Option<SurfaceCtor> {
    SURFACE_CTORS.with(|ctors| ctors.borrow_mut().remove(&kind))
}

/// A surface recovered from a native pointer, resolved to its concrete
/// wrapper where one is registered.
#[derive(Debug)]
pub enum AnySurface {
    Image(ImageSurface),
    Pdf(PdfSurface),
    Svg(SvgSurface),
    Ps(PsSurface),
    Recording(RecordingSurface),
    Base(Surface),
}

impl Deref for AnySurface {
    type Target = Surface;

    fn deref(&self) -> &Surface {
        match self {
            AnySurface::Image(surface) => surface,
            AnySurface::Pdf(surface) => surface,
            AnySurface::Svg(surface) => surface,
            AnySurface::Ps(surface) => surface,
            AnySurface::Recording(surface) => surface,
            AnySurface::Base(surface) => surface,
        }
    }
}

/// A raster surface backed by pixels in memory.
#[derive(Debug, PartialEq, Eq)]
pub struct ImageSurface(Surface);

impl Deref for ImageSurface {
    type Target = Surface;

    fn deref(&self) -> &Surface {
        &self.0
    }
}

impl ImageSurface {
    /// A new surface with pixels owned and zero-initialized by cairo.
    pub fn new(format: Format, width: i32, height: i32) -> Result<ImageSurface> {
        let ptr = unsafe { ffi::cairo_image_surface_create(format.to_raw(), width, height) };
        let surface = Surface::from_raw_full(ptr)?;
        surface.check()?;
        Ok(ImageSurface(surface))
    }

    /// The row stride cairo requires for `format` at `width` pixels.
    pub fn stride_for_width(format: Format, width: i32) -> Result<usize> {
        let stride = unsafe { ffi::cairo_format_stride_for_width(format.to_raw(), width) };
        if stride < 0 {
            Err(Error::Cairo(Status::InvalidFormat))
        } else {
            Ok(stride as usize)
        }
    }

    /// Wraps a caller-supplied pixel buffer without copying it. The buffer
    /// is pinned for the lifetime of the native surface; its length must
    /// cover `stride * height` bytes.
    pub fn from_raw_data(
        data: Vec<u8>,
        format: Format,
        width: i32,
        height: i32,
        stride: i32,
    ) -> Result<ImageSurface> {
        let required = stride as usize * height as usize;
        if data.len() < required {
            return Err(Error::BufferTooSmall {
                required,
                actual: data.len(),
            });
        }
        let mut pinned = data.into_boxed_slice();
        let data_ptr = pinned.as_mut_ptr();
        let ptr = unsafe {
            ffi::cairo_image_surface_create_for_data(
                data_ptr,
                format.to_raw(),
                width,
                height,
                stride,
            )
        };
        let surface = Surface::from_raw_full(ptr)?;
        surface.check()?;
        let holder = Box::new(pinned);
        let token = &*holder as *const Box<[u8]> as *mut c_void;
        let status = unsafe {
            ffi::cairo_surface_set_user_data(
                surface.as_ptr(),
                &DATA_PIN_KEY,
                token,
                Some(keep_alive::release_pin),
            )
        };
        Status::from_raw(status).to_result()?;
        keep_alive::register(surface.addr(), holder, token as usize);
        Ok(ImageSurface(surface))
    }

    /// Decodes a PNG file into a new ARGB32 or RGB24 surface.
    pub fn from_png<P: AsRef<Path>>(path: P) -> Result<ImageSurface> {
        let filename = path_to_c(path.as_ref())?;
        let ptr = unsafe { ffi::cairo_image_surface_create_from_png(filename.as_ptr()) };
        let surface = Surface::from_raw_full(ptr)?;
        surface.check()?;
        Ok(ImageSurface(surface))
    }

    /// Decodes PNG bytes from any reader into a new surface.
    pub fn from_png_stream<R: io::Read>(reader: &mut R) -> Result<ImageSurface> {
        let mut closure = stream::ReadClosure::new(reader);
        let ptr = unsafe {
            ffi::cairo_image_surface_create_from_png_stream(
                Some(stream::read_from_closure),
                closure.context_ptr(),
            )
        };
        let surface = Surface::from_raw_full(ptr)?;
        if let Some(err) = closure.error.take() {
            return Err(Error::Io(err));
        }
        surface.check()?;
        Ok(ImageSurface(surface))
    }

    pub fn format(&self) -> Option<Format> {
        Format::from_raw(unsafe { ffi::cairo_image_surface_get_format(self.as_ptr()) })
    }

    pub fn width(&self) -> i32 {
        unsafe { ffi::cairo_image_surface_get_width(self.as_ptr()) }
    }

    pub fn height(&self) -> i32 {
        unsafe { ffi::cairo_image_surface_get_height(self.as_ptr()) }
    }

    pub fn stride(&self) -> i32 {
        unsafe { ffi::cairo_image_surface_get_stride(self.as_ptr()) }
    }

    /// A copy of the pixel data, `stride * height` bytes, flushed first.
    pub fn data(&self) -> Result<Vec<u8>> {
        self.flush()?;
        let data = unsafe { ffi::cairo_image_surface_get_data(self.as_ptr()) };
        if data.is_null() {
            return Err(Error::Finished);
        }
        let length = self.stride() as usize * self.height() as usize;
        Ok(unsafe { slice::from_raw_parts(data, length) }.to_vec())
    }
}

fn stream_surface<W, F>(writer: W, create: F) -> Result<Surface>
where
    W: io::Write + 'static,
    F: FnOnce(ffi::cairo_write_func_t, *mut c_void) -> *mut ffi::cairo_surface_t,
{
    let (pinned, context) = stream::boxed_write_closure(writer);
    let ptr = create(Some(stream::write_to_closure), context);
    let surface = Surface::from_raw_full(ptr)?;
    surface.check()?;
    let status = unsafe {
        ffi::cairo_surface_set_user_data(
            surface.as_ptr(),
            &STREAM_PIN_KEY,
            context,
            Some(keep_alive::release_pin),
        )
    };
    Status::from_raw(status).to_result()?;
    keep_alive::register(surface.addr(), pinned, context as usize);
    Ok(surface)
}

/// A paged vector surface producing a PDF document.
#[derive(Debug, PartialEq, Eq)]
pub struct PdfSurface(Surface);

impl Deref for PdfSurface {
    type Target = Surface;

    fn deref(&self) -> &Surface {
        &self.0
    }
}

impl PdfSurface {
    /// A new PDF document written to `path`. Dimensions are in points
    /// (1 point = 1/72 inch).
    pub fn new<P: AsRef<Path>>(path: P, width: f64, height: f64) -> Result<PdfSurface> {
        let filename = path_to_c(path.as_ref())?;
        let ptr = unsafe { ffi::cairo_pdf_surface_create(filename.as_ptr(), width, height) };
        let surface = Surface::from_raw_full(ptr)?;
        surface.check()?;
        Ok(PdfSurface(surface))
    }

    /// A new PDF document written to `writer`, which is pinned until the
    /// native surface is destroyed.
    pub fn for_stream<W: io::Write + 'static>(
        writer: W,
        width: f64,
        height: f64,
    ) -> Result<PdfSurface> {
        let surface = stream_surface(writer, |write_func, closure| unsafe {
            ffi::cairo_pdf_surface_create_for_stream(write_func, closure, width, height)
        })?;
        Ok(PdfSurface(surface))
    }

    /// A PDF surface with no output target, for measuring without
    /// producing a document.
    pub fn without_target(width: f64, height: f64) -> Result<PdfSurface> {
        let ptr = unsafe { ffi::cairo_pdf_surface_create(ptr::null(), width, height) };
        let surface = Surface::from_raw_full(ptr)?;
        surface.check()?;
        Ok(PdfSurface(surface))
    }

    /// Changes the page size. Takes effect on the next page.
    pub fn set_size(&self, width: f64, height: f64) -> Result<()> {
        unsafe { ffi::cairo_pdf_surface_set_size(self.as_ptr(), width, height) };
        self.check()
    }

    /// Must be called before any drawing happens.
    pub fn restrict_to_version(&self, version: PdfVersion) -> Result<()> {
        unsafe { ffi::cairo_pdf_surface_restrict_to_version(self.as_ptr(), version.to_raw()) };
        self.check()
    }

    /// The PDF versions the linked cairo supports.
    pub fn versions() -> Vec<PdfVersion> {
        let mut data: *const c_int = ptr::null();
        let mut count: c_int = 0;
        unsafe { ffi::cairo_pdf_get_versions(&mut data, &mut count) };
        if data.is_null() {
            return Vec::new();
        }
        unsafe { slice::from_raw_parts(data, count as usize) }
            .iter()
            .filter_map(|&raw| PdfVersion::from_raw(raw))
            .collect()
    }

    pub fn version_to_string(version: PdfVersion) -> Option<String> {
        let text = unsafe { ffi::cairo_pdf_version_to_string(version.to_raw()) };
        if text.is_null() {
            None
        } else {
            Some(unsafe { std::ffi::CStr::from_ptr(text) }.to_string_lossy().into_owned())
        }
    }

    pub fn set_metadata(&self, metadata: PdfMetadata, value: &str) -> Result<()> {
        let value = c_string(value)?;
        unsafe {
            ffi::cairo_pdf_surface_set_metadata(self.as_ptr(), metadata.to_raw(), value.as_ptr())
        };
        self.check()
    }

    /// Adds an outline (bookmark) item and returns its id, usable as the
    /// parent of further items. Use [`PDF_OUTLINE_ROOT`] for top-level
    /// items.
    pub fn add_outline(
        &self,
        parent_id: i32,
        text: &str,
        link_attribs: &str,
        flags: PdfOutlineFlags,
    ) -> Result<i32> {
        let text = c_string(text)?;
        let link_attribs = c_string(link_attribs)?;
        let id = unsafe {
            ffi::cairo_pdf_surface_add_outline(
                self.as_ptr(),
                parent_id,
                text.as_ptr(),
                link_attribs.as_ptr(),
                flags.bits() as c_int,
            )
        };
        self.check()?;
        Ok(id)
    }

    pub fn set_page_label(&self, label: &str) -> Result<()> {
        let label = c_string(label)?;
        unsafe { ffi::cairo_pdf_surface_set_page_label(self.as_ptr(), label.as_ptr()) };
        self.check()
    }

    pub fn set_thumbnail_size(&self, width: i32, height: i32) -> Result<()> {
        unsafe { ffi::cairo_pdf_surface_set_thumbnail_size(self.as_ptr(), width, height) };
        self.check()
    }
}

/// A vector surface producing an SVG document.
#[derive(Debug, PartialEq, Eq)]
pub struct SvgSurface(Surface);

impl Deref for SvgSurface {
    type Target = Surface;

    fn deref(&self) -> &Surface {
        &self.0
    }
}

impl SvgSurface {
    pub fn new<P: AsRef<Path>>(path: P, width: f64, height: f64) -> Result<SvgSurface> {
        let filename = path_to_c(path.as_ref())?;
        let ptr = unsafe { ffi::cairo_svg_surface_create(filename.as_ptr(), width, height) };
        let surface = Surface::from_raw_full(ptr)?;
        surface.check()?;
        Ok(SvgSurface(surface))
    }

    pub fn for_stream<W: io::Write + 'static>(
        writer: W,
        width: f64,
        height: f64,
    ) -> Result<SvgSurface> {
        let surface = stream_surface(writer, |write_func, closure| unsafe {
            ffi::cairo_svg_surface_create_for_stream(write_func, closure, width, height)
        })?;
        Ok(SvgSurface(surface))
    }

    /// An SVG surface with no output target.
    pub fn without_target(width: f64, height: f64) -> Result<SvgSurface> {
        let ptr = unsafe { ffi::cairo_svg_surface_create(ptr::null(), width, height) };
        let surface = Surface::from_raw_full(ptr)?;
        surface.check()?;
        Ok(SvgSurface(surface))
    }

    /// Must be called before any drawing happens.
    pub fn restrict_to_version(&self, version: SvgVersion) -> Result<()> {
        unsafe { ffi::cairo_svg_surface_restrict_to_version(self.as_ptr(), version.to_raw()) };
        self.check()
    }

    pub fn versions() -> Vec<SvgVersion> {
        let mut data: *const c_int = ptr::null();
        let mut count: c_int = 0;
        unsafe { ffi::cairo_svg_get_versions(&mut data, &mut count) };
        if data.is_null() {
            return Vec::new();
        }
        unsafe { slice::from_raw_parts(data, count as usize) }
            .iter()
            .filter_map(|&raw| SvgVersion::from_raw(raw))
            .collect()
    }

    pub fn version_to_string(version: SvgVersion) -> Option<String> {
        let text = unsafe { ffi::cairo_svg_version_to_string(version.to_raw()) };
        if text.is_null() {
            None
        } else {
            Some(unsafe { std::ffi::CStr::from_ptr(text) }.to_string_lossy().into_owned())
        }
    }

    /// Sets the unit of the document's width and height attributes.
    pub fn set_document_unit(&self, unit: SvgUnit) -> Result<()> {
        unsafe { ffi::cairo_svg_surface_set_document_unit(self.as_ptr(), unit.to_raw()) };
        self.check()
    }

    pub fn document_unit(&self) -> Option<SvgUnit> {
        SvgUnit::from_raw(unsafe { ffi::cairo_svg_surface_get_document_unit(self.as_ptr()) })
    }
}

/// A paged surface producing a PostScript document.
#[derive(Debug, PartialEq, Eq)]
pub struct PsSurface(Surface);

impl Deref for PsSurface {
    type Target = Surface;

    fn deref(&self) -> &Surface {
        &self.0
    }
}

impl PsSurface {
    pub fn new<P: AsRef<Path>>(path: P, width: f64, height: f64) -> Result<PsSurface> {
        let filename = path_to_c(path.as_ref())?;
        let ptr = unsafe { ffi::cairo_ps_surface_create(filename.as_ptr(), width, height) };
        let surface = Surface::from_raw_full(ptr)?;
        surface.check()?;
        Ok(PsSurface(surface))
    }

    pub fn for_stream<W: io::Write + 'static>(
        writer: W,
        width: f64,
        height: f64,
    ) -> Result<PsSurface> {
        let surface = stream_surface(writer, |write_func, closure| unsafe {
            ffi::cairo_ps_surface_create_for_stream(write_func, closure, width, height)
        })?;
        Ok(PsSurface(surface))
    }

    /// A PostScript surface with no output target.
    pub fn without_target(width: f64, height: f64) -> Result<PsSurface> {
        let ptr = unsafe { ffi::cairo_ps_surface_create(ptr::null(), width, height) };
        let surface = Surface::from_raw_full(ptr)?;
        surface.check()?;
        Ok(PsSurface(surface))
    }

    /// Must be called before any drawing happens.
    pub fn restrict_to_level(&self, level: PsLevel) -> Result<()> {
        unsafe { ffi::cairo_ps_surface_restrict_to_level(self.as_ptr(), level.to_raw()) };
        self.check()
    }

    pub fn levels() -> Vec<PsLevel> {
        let mut data: *const c_int = ptr::null();
        let mut count: c_int = 0;
        unsafe { ffi::cairo_ps_get_levels(&mut data, &mut count) };
        if data.is_null() {
            return Vec::new();
        }
        unsafe { slice::from_raw_parts(data, count as usize) }
            .iter()
            .filter_map(|&raw| PsLevel::from_raw(raw))
            .collect()
    }

    pub fn level_to_string(level: PsLevel) -> Option<String> {
        let text = unsafe { ffi::cairo_ps_level_to_string(level.to_raw()) };
        if text.is_null() {
            None
        } else {
            Some(unsafe { std::ffi::CStr::from_ptr(text) }.to_string_lossy().into_owned())
        }
    }

    /// Switches output between Encapsulated PostScript and plain
    /// PostScript.
    pub fn set_eps(&self, eps: bool) -> Result<()> {
        unsafe { ffi::cairo_ps_surface_set_eps(self.as_ptr(), eps as c_int) };
        self.check()
    }

    pub fn eps(&self) -> bool {
        unsafe { ffi::cairo_ps_surface_get_eps(self.as_ptr()) != 0 }
    }

    pub fn set_size(&self, width: f64, height: f64) -> Result<()> {
        unsafe { ffi::cairo_ps_surface_set_size(self.as_ptr(), width, height) };
        self.check()
    }

    /// Emits a DSC comment into the output, in the section selected by
    /// [`dsc_begin_setup`](Self::dsc_begin_setup) or
    /// [`dsc_begin_page_setup`](Self::dsc_begin_page_setup).
    pub fn dsc_comment(&self, comment: &str) -> Result<()> {
        let comment = c_string(comment)?;
        unsafe { ffi::cairo_ps_surface_dsc_comment(self.as_ptr(), comment.as_ptr()) };
        self.check()
    }

    pub fn dsc_begin_setup(&self) -> Result<()> {
        unsafe { ffi::cairo_ps_surface_dsc_begin_setup(self.as_ptr()) };
        self.check()
    }

    pub fn dsc_begin_page_setup(&self) -> Result<()> {
        unsafe { ffi::cairo_ps_surface_dsc_begin_page_setup(self.as_ptr()) };
        self.check()
    }
}

/// A surface that records drawing commands for later replay instead of
/// rasterizing them.
#[derive(Debug, PartialEq, Eq)]
pub struct RecordingSurface(Surface);

impl Deref for RecordingSurface {
    type Target = Surface;

    fn deref(&self) -> &Surface {
        &self.0
    }
}

impl RecordingSurface {
    /// A new recording, bounded to `extents` or unbounded with `None`.
    pub fn new(content: Content, extents: Option<Rectangle>) -> Result<RecordingSurface> {
        let extents_ptr = extents
            .as_ref()
            .map_or(ptr::null(), |rect| rect as *const Rectangle);
        let ptr = unsafe { ffi::cairo_recording_surface_create(content.to_raw(), extents_ptr) };
        let surface = Surface::from_raw_full(ptr)?;
        surface.check()?;
        Ok(RecordingSurface(surface))
    }

    /// The bounding box of everything drawn so far, as
    /// `(x, y, width, height)`.
    pub fn ink_extents(&self) -> (f64, f64, f64, f64) {
        let mut x = 0.0;
        let mut y = 0.0;
        let mut width = 0.0;
        let mut height = 0.0;
        unsafe {
            ffi::cairo_recording_surface_ink_extents(
                self.as_ptr(),
                &mut x,
                &mut y,
                &mut width,
                &mut height,
            )
        };
        (x, y, width, height)
    }

    /// The extents given at creation, or `None` for an unbounded recording.
    pub fn extents(&self) -> Option<Rectangle> {
        let mut extents = Rectangle::new(0.0, 0.0, 0.0, 0.0);
        let bounded =
            unsafe { ffi::cairo_recording_surface_get_extents(self.as_ptr(), &mut extents) };
        if bounded != 0 {
            Some(extents)
        } else {
            None
        }
    }
}
