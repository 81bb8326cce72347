//! Toy RSA cryptosystem built on a hand-rolled arbitrary-precision
//! integer kernel.
//!
//! The interesting part is `bignum`: sign-magnitude integers over 64-bit
//! limbs with in-place add/subtract, schoolbook multiplication,
//! shift-and-subtract division, modular exponentiation and an extended
//! Euclidean inverse. The RSA layer in `encryption` is a thin composition
//! over it. Nothing here is constant-time or padded; this is a study
//! implementation, not a library to protect secrets with.

pub mod bignum;
pub mod encryption;
pub mod utils;
