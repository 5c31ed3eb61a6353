//! Caller-owned user data pointers.

use std::ffi::c_void;
use std::ptr::NonNull;

/// An opaque pointer attached to a node on behalf of the caller.
///
/// The node never dereferences or frees the pointee; the caller keeps
/// ownership and is responsible for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserData(NonNull<c_void>);

impl UserData {
    /// Wraps a raw pointer. Returns `None` for a null pointer.
    #[inline]
    pub fn new<T>(ptr: *mut T) -> Option<Self> {
        NonNull::new(ptr.cast::<c_void>()).map(Self)
    }

    /// Wraps a pointer to a caller-owned value.
    #[inline]
    pub fn from_mut<T>(value: &mut T) -> Self {
        Self(NonNull::from(value).cast::<c_void>())
    }

    /// Returns the untyped pointer.
    #[inline]
    pub fn as_ptr(self) -> *mut c_void {
        self.0.as_ptr()
    }

    /// Returns the pointer cast to `T`. Dereferencing it is up to the caller.
    #[inline]
    pub fn cast<T>(self) -> *mut T {
        self.0.as_ptr().cast::<T>()
    }
}
