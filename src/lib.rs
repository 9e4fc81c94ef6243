//! # descent-anim
//! Gradient descent on f(x) = x^2 as a StreamingIterator, and an animation of
//! its iterates against the curve.
#[cfg(test)]
extern crate quickcheck;

use streaming_iterator::*;

pub mod config;
pub mod derivative_descent;
pub mod render;
pub mod utils;

/// Pass the values from the streaming iterator through, running a
/// function on each for side effects.
pub struct Tee<I, F> {
    pub it: I,
    pub f: F,
}

pub fn tee<I, F, T>(it: I, f: F) -> Tee<I, F>
where
    I: Sized + StreamingIterator<Item = T>,
    F: FnMut(&T),
{
    Tee { it, f }
}

impl<I, F> StreamingIterator for Tee<I, F>
where
    I: StreamingIterator,
    F: FnMut(&I::Item),
{
    type Item = I::Item;

    #[inline]
    fn advance(&mut self) {
        // The side effect happens exactly once for each new value
        // generated.
        self.it.advance();
        if let Some(x) = self.it.get() {
            (self.f)(x);
        }
    }

    #[inline]
    fn get(&self) -> Option<&I::Item> {
        self.it.get()
    }
}

pub fn last<I, T>(it: I) -> T
where
    I: StreamingIterator<Item = T>,
    T: Sized + Clone,
{
    let last_some = it.fold(None, |_acc, i| Some((*i).clone()));
    last_some.expect("StreamingIterator last expects at least one non-None element.")
}
