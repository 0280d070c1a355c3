use core::fmt::Debug;

/// A close capability: release whatever resource sits behind an object.
///
/// `close` may be invoked more than once; what a repeated close does is
/// defined by the implementor, not by this trait.
pub trait Close {
    type Error: Debug;

    fn close(&mut self) -> Result<(), Self::Error>;
}

impl<C> Close for &mut C
where
    C: Close + ?Sized,
{
    type Error = C::Error;

    #[inline]
    fn close(&mut self) -> Result<(), Self::Error> {
        (**self).close()
    }
}

/// Adapter turning a bare closure into a [`Close`] implementation.
pub struct CloseFn<F>(F);

impl<F, E> CloseFn<F>
where
    F: FnMut() -> Result<(), E>,
    E: Debug,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> CloseFn<F> {
    /// Consume the adapter, returning the closure.
    pub fn into_inner(self) -> F {
        self.0
    }
}

impl<F, E> Close for CloseFn<F>
where
    F: FnMut() -> Result<(), E>,
    E: Debug,
{
    type Error = E;

    #[inline]
    fn close(&mut self) -> Result<(), Self::Error> {
        (self.0)()
    }
}
