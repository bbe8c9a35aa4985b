//! The interval-arithmetic primitive library.
//!
//! Every operation takes the [`Rounding`] mode explicitly; there is no
//! global rounding state. Under [`Rounding::Outward`] each computed
//! endpoint is widened one ulp so the result is a guaranteed enclosure;
//! under [`Rounding::Exact`] endpoints are kept exactly as computed.

pub mod arithmetic;
pub mod constants;
pub mod misc;
pub mod pow;
pub mod round;
pub mod trig;
pub mod value;

pub use round::Rounding;
pub use value::{classify, Interval, IntervalClass};
