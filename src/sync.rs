//! Lock guarding the seats, turn marker and random number generator.
//!
//! Each turn takes the seat lock once and holds it until the cards have
//! moved, so turn resolution is serialized. The backing lock is
//! `std::sync::Mutex` with `std` (poisoning is ignored) and `spin::Mutex`
//! with only `alloc`.

use core::ops::DerefMut;

#[cfg(feature = "std")]
type Inner<T> = std::sync::Mutex<T>;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
type Inner<T> = spin::Mutex<T>;

pub struct Mutex<T>(Inner<T>);

impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(Inner::new(value))
    }

    #[cfg(feature = "std")]
    pub fn lock(&self) -> impl DerefMut<Target = T> + '_ {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    pub fn lock(&self) -> impl DerefMut<Target = T> + '_ {
        self.0.lock()
    }
}
