use std::fmt;

use crate::error::BoxError;
use crate::level::Action;

/// Anything that can initialize itself.
///
/// Implement this on stateful objects that need setting up and register them
/// with [`Container::register`](super::Container::register) instead of
/// wrapping them in a closure by hand.
pub trait Initializer<E = BoxError> {
    fn init(&mut self) -> Result<(), E>;
}

impl<E, I: Initializer<E> + ?Sized> Initializer<E> for &mut I {
    fn init(&mut self) -> Result<(), E> {
        (**self).init()
    }
}

impl<E, I: Initializer<E> + ?Sized> Initializer<E> for Box<I> {
    fn init(&mut self) -> Result<(), E> {
        (**self).init()
    }
}

/// Adapts a closure into an [`Initializer`].
pub struct InitializerFn<F> {
    f: F,
}

impl<F> fmt::Debug for InitializerFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InitializerFn").finish_non_exhaustive()
    }
}

impl<E, F> Initializer<E> for InitializerFn<F>
where
    F: FnMut() -> Result<(), E>,
{
    fn init(&mut self) -> Result<(), E> {
        (self.f)()
    }
}

/// Wrap `f` so it can be passed where an [`Initializer`] is expected.
pub fn from_fn<E, F>(f: F) -> InitializerFn<F>
where
    F: FnMut() -> Result<(), E>,
{
    InitializerFn { f }
}

/// Turn an initializer into a one-shot action that calls its `init`.
pub fn into_action<'a, E, I>(mut initializer: I) -> Action<'a, E>
where
    I: Initializer<E> + 'a,
{
    Box::new(move || initializer.init())
}
