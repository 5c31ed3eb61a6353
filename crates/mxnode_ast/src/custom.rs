//! Custom node payloads.
//!
//! A custom node holds caller-defined data together with an optional
//! [`Destroyer`] that is responsible for releasing it.

use std::any::Any;
use std::fmt;

/// Caller-supplied release callback for custom data.
///
/// The destroyer receives ownership of the data it governs. It runs at most
/// once, either when the data is replaced or when the owning node is dropped.
pub struct Destroyer(Box<dyn FnOnce(Box<dyn Any>)>);

impl Destroyer {
    /// Wraps a release callback.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce(Box<dyn Any>) + 'static,
    {
        Self(Box::new(f))
    }

    /// Consumes the destroyer, handing `data` to the callback.
    #[inline]
    pub fn destroy(self, data: Box<dyn Any>) {
        (self.0)(data)
    }
}

impl fmt::Debug for Destroyer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Destroyer(..)")
    }
}

/// Data and destroyer pair owned by a custom node.
///
/// Either half may be absent. The destroyer is only invoked when both are
/// present; otherwise release just drops whatever is held.
#[derive(Default)]
pub struct CustomData {
    data: Option<Box<dyn Any>>,
    destroyer: Option<Destroyer>,
}

impl CustomData {
    /// Creates a custom payload from its parts.
    pub fn new(data: Option<Box<dyn Any>>, destroyer: Option<Destroyer>) -> Self {
        Self { data, destroyer }
    }

    /// Returns the held data, if any.
    #[inline]
    pub fn data(&self) -> Option<&dyn Any> {
        self.data.as_deref()
    }

    /// Returns the held data if it is a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.data.as_deref().and_then(|data| data.downcast_ref::<T>())
    }

    #[inline]
    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }

    #[inline]
    pub fn has_destroyer(&self) -> bool {
        self.destroyer.is_some()
    }

    /// Releases the current payload, leaving both halves empty.
    ///
    /// Returns true if the destroyer was invoked.
    pub fn release(&mut self) -> bool {
        match (self.data.take(), self.destroyer.take()) {
            (Some(data), Some(destroyer)) => {
                destroyer.destroy(data);
                true
            }
            _ => false,
        }
    }

    /// Releases the current payload and stores a new pair.
    ///
    /// The new destroyer is stored for a later release and is not invoked here.
    /// Returns true if the old destroyer was invoked.
    pub fn replace(&mut self, data: Option<Box<dyn Any>>, destroyer: Option<Destroyer>) -> bool {
        let released = self.release();
        self.data = data;
        self.destroyer = destroyer;
        released
    }
}

impl Drop for CustomData {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for CustomData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomData")
            .field("has_data", &self.has_data())
            .field("has_destroyer", &self.has_destroyer())
            .finish()
    }
}
