//! Adapters between `std::io` targets and cairo's stream callbacks.

use std::any::Any;
use std::cell::RefCell;
use std::io;
use std::slice;

use libc::{c_uint, c_void};

use crate::error::Status;
use crate::ffi;

/// A boxed writer handed to cairo as a raw context pointer. Writes happen
/// whenever the native side flushes, which may be long after creation, so
/// the first failure is stashed here and surfaced when the surface is
/// finished or its status is checked.
pub(crate) struct WriteClosure {
    writer: RefCell<Box<dyn io::Write>>,
    error: RefCell<Option<io::Error>>,
}

impl WriteClosure {
    pub(crate) fn new<W: io::Write + 'static>(writer: W) -> Self {
        WriteClosure {
            writer: RefCell::new(Box::new(writer)),
            error: RefCell::new(None),
        }
    }

    pub(crate) fn context_ptr(&self) -> *mut c_void {
        self as *const WriteClosure as *mut c_void
    }

    pub(crate) fn take_error(&self) -> Option<io::Error> {
        self.error.borrow_mut().take()
    }
}

/// Write callback forwarded to the pinned [`WriteClosure`].
pub(crate) unsafe extern "C" fn write_to_closure(
    closure: *mut c_void,
    data: *const u8,
    length: c_uint,
) -> ffi::cairo_status_t {
    let closure = &*(closure as *const WriteClosure);
    let bytes = if length == 0 {
        &[][..]
    } else {
        slice::from_raw_parts(data, length as usize)
    };
    match closure.writer.borrow_mut().write_all(bytes) {
        Ok(()) => Status::Success.to_raw(),
        Err(err) => {
            log::warn!("stream write failed: {err}");
            closure.error.borrow_mut().get_or_insert(err);
            ffi::CAIRO_STATUS_WRITE_ERROR
        }
    }
}

/// A writer context that lives only for the duration of one native call,
/// so it stays on the caller's stack rather than in the pin registry.
pub(crate) struct BorrowedWriteClosure<'a> {
    writer: &'a mut dyn io::Write,
    pub(crate) error: Option<io::Error>,
}

impl<'a> BorrowedWriteClosure<'a> {
    pub(crate) fn new(writer: &'a mut dyn io::Write) -> Self {
        BorrowedWriteClosure {
            writer,
            error: None,
        }
    }

    pub(crate) fn context_ptr(&mut self) -> *mut c_void {
        self as *mut BorrowedWriteClosure<'a> as *mut c_void
    }
}

pub(crate) unsafe extern "C" fn write_to_borrowed_closure(
    closure: *mut c_void,
    data: *const u8,
    length: c_uint,
) -> ffi::cairo_status_t {
    let closure = &mut *(closure as *mut BorrowedWriteClosure<'_>);
    let bytes = if length == 0 {
        &[][..]
    } else {
        slice::from_raw_parts(data, length as usize)
    };
    match closure.writer.write_all(bytes) {
        Ok(()) => Status::Success.to_raw(),
        Err(err) => {
            closure.error.get_or_insert(err);
            ffi::CAIRO_STATUS_WRITE_ERROR
        }
    }
}

/// A reader context for PNG decoding; lives only for the duration of the
/// native call, so it is kept on the caller's stack rather than pinned.
pub(crate) struct ReadClosure<'a> {
    reader: &'a mut dyn io::Read,
    pub(crate) error: Option<io::Error>,
}

impl<'a> ReadClosure<'a> {
    pub(crate) fn new(reader: &'a mut dyn io::Read) -> Self {
        ReadClosure {
            reader,
            error: None,
        }
    }

    pub(crate) fn context_ptr(&mut self) -> *mut c_void {
        self as *mut ReadClosure<'a> as *mut c_void
    }
}

pub(crate) unsafe extern "C" fn read_from_closure(
    closure: *mut c_void,
    data: *mut u8,
    length: c_uint,
) -> ffi::cairo_status_t {
    let closure = &mut *(closure as *mut ReadClosure<'_>);
    let buffer = slice::from_raw_parts_mut(data, length as usize);
    match closure.reader.read_exact(buffer) {
        Ok(()) => Status::Success.to_raw(),
        Err(err) => {
            closure.error.get_or_insert(err);
            Status::ReadError.to_raw()
        }
    }
}

/// Pins a writer for the lifetime of a stream-backed surface and returns
/// the context pointer to hand to cairo. Ownership of the box moves to the
/// keep-alive registry once the surface registers it.
pub(crate) fn boxed_write_closure<W: io::Write + 'static>(
    writer: W,
) -> (Box<dyn Any>, *mut c_void) {
    let closure = Box::new(WriteClosure::new(writer));
    let context = closure.context_ptr();
    (closure as Box<dyn Any>, context)
}
