//! Pin registry for Rust objects referenced only through raw pointers held
//! by cairo.
//!
//! Stream-backed surfaces, caller-supplied pixel buffers and MIME payloads
//! are all handed to cairo as a bare callback/context pointer; nothing on
//! the native side keeps the Rust value alive. Each such value is pinned
//! here, keyed by the context pointer cairo was given, and removed from the
//! destroy callback cairo invokes when it tears the owning object down. That
//! ties release deterministically to native destruction.
//!
//! The registry is thread-local: cairo objects are not thread-safe and the
//! wrappers are `!Send`, so every pin and unpin for one object happens on
//! the thread that created it.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;

use libc::c_void;

struct Entry {
    /// Address of the native object holding the raw pointer.
    owner: usize,
    pinned: Box<dyn Any>,
}

thread_local! {
    static REGISTRY: RefCell<HashMap<usize, Entry>> = RefCell::new(HashMap::new());
}

/// Pins `pinned` until [`unregister`] is called with the same context
/// pointer. `owner` is the native object the pin belongs to.
pub(crate) fn register(owner: usize, pinned: Box<dyn Any>, context_ptr: usize) {
    log::debug!("keep-alive: pin {context_ptr:#x} for native object {owner:#x}");
    REGISTRY.with(|registry| {
        registry.borrow_mut().insert(context_ptr, Entry { owner, pinned });
    });
}

/// Drops the pin for `context_ptr`. Unknown keys are a silent no-op: cairo
/// may destroy objects that never registered a target.
pub(crate) fn unregister(context_ptr: usize) {
    REGISTRY.with(|registry| {
        if let Some(entry) = registry.borrow_mut().remove(&context_ptr) {
            log::debug!(
                "keep-alive: unpin {context_ptr:#x} for native object {:#x}",
                entry.owner
            );
            drop(entry);
        }
    });
}

/// Number of live pins on this thread. One per native object currently
/// holding a raw pointer into Rust memory.
pub fn pinned_count() -> usize {
    REGISTRY.with(|registry| registry.borrow().len())
}

/// Destroy hook handed to cairo alongside every pinned context pointer.
pub(crate) unsafe extern "C" fn release_pin(closure: *mut c_void) {
    unregister(closure as usize);
}
