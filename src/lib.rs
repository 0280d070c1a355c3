//! Byte-stream objects assembled from independently supplied parts.
//!
//! Each capability is a trait of its own: [`Read`], [`Write`], [`Seek`]
//! and [`Close`]. Closures become parts through the `*Fn` wrappers, and
//! composites such as [`ReadWrite`] group parts into a single object.
//! [`MultiCloser`] stands in for a whole sequence of closables. With the
//! `std` feature enabled, the `adapters` module bridges to the `std::io`
//! traits.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub use nb;

mod close;
pub use close::*;

mod composite;
pub use composite::*;

mod multi;
pub use multi::*;

mod read;
pub use read::*;

mod seek;
pub use seek::*;

mod write;
pub use write::*;

#[cfg(feature = "std")]
pub mod adapters;
