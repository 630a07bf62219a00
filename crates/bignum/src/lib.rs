//! # ecdsa160-bignum
//!
//! Fixed-width unsigned integers stored as big-endian byte arrays, with the
//! modular and Montgomery arithmetic needed to verify signatures over small
//! prime-order curves.
//!
//! The width of every value is a const generic, so all working buffers live on
//! the stack and nothing allocates. Two layers are exposed:
//!
//! * [`Uint`]: raw big-endian magnitudes and the byte-serial routines
//!   (carrying add, borrowing subtract, single-step reduction, radix-256
//!   Montgomery multiplication, exponentiation and Fermat inversion).
//! * [`Modulus`] and [`Montgomery`]: the same routines behind a domain tag, so a
//!   value in Montgomery form for one modulus cannot be fed to another.
//!
//! None of the routines run in constant time.
//!
//! ## Features
//!
//! * `std` (default): links the standard library. The crate has no dependencies
//!   and uses nothing beyond `core`, so turning it off only makes the crate
//!   `#![no_std]`. Dependents forward their own `std` feature here so that a
//!   single `default-features = false` yields a `no_std` build. Tests always
//!   link `std`.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod domain;
pub mod montgomery;
pub mod uint;

pub use domain::{Domain, Modulus, Montgomery};
pub use montgomery::INVERSE_MOD_256;
pub use uint::Uint;
