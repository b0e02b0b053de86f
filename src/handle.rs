//! Ownership of refcounted native cairo pointers.
//!
//! Every wrapper object owns exactly one [`Handle`], which owns exactly one
//! native reference. Wrapping a pointer either adopts a reference the caller
//! already owns (freshly created objects) or takes a new one (peek-style
//! accessors that return borrowed pointers). The reference is dropped exactly
//! once, when the handle goes out of scope on any path.

use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::error::{Error, Result};

/// A native cairo type with a `*_reference` / `*_destroy` pair.
///
/// # Safety
///
/// `reference` and `destroy` must forward to the matching cairo calls for
/// the concrete type, and `ptr` must be a live object of that type.
pub(crate) unsafe trait RefCounted {
    unsafe fn reference(ptr: *mut Self);
    unsafe fn destroy(ptr: *mut Self);
}

/// Exclusive owner of one native reference to a cairo object.
pub(crate) struct Handle<T: RefCounted> {
    ptr: NonNull<T>,
    _marker: PhantomData<*mut T>,
}

impl<T: RefCounted> Handle<T> {
    /// Wraps a raw pointer. With `incref` the native refcount is bumped
    /// before storing (the caller's reference stays theirs); without it the
    /// handle adopts the reference the caller owned.
    ///
    /// A null pointer is rejected immediately.
    pub(crate) fn wrap(ptr: *mut T, incref: bool) -> Result<Self> {
        let ptr = NonNull::new(ptr).ok_or(Error::NullPointer)?;
        if incref {
            unsafe { T::reference(ptr.as_ptr()) };
        }
        Ok(Handle {
            ptr,
            _marker: PhantomData,
        })
    }

    pub(crate) fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Raw address, for identity-sensitive comparison of wrappers.
    pub(crate) fn addr(&self) -> usize {
        self.ptr.as_ptr() as usize
    }
}

impl<T: RefCounted> Drop for Handle<T> {
    fn drop(&mut self) {
        unsafe { T::destroy(self.ptr.as_ptr()) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi;

    #[test]
    fn wrapping_null_fails_immediately() {
        let result = Handle::<ffi::cairo_surface_t>::wrap(std::ptr::null_mut(), true);
        assert!(matches!(result, Err(Error::NullPointer)));
        let result = Handle::<ffi::cairo_surface_t>::wrap(std::ptr::null_mut(), false);
        assert!(matches!(result, Err(Error::NullPointer)));
    }
}
