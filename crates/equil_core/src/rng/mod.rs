//! # Random Number Generation
//!
//! Every [`EquilibrationParameterSet`](crate::EquilibrationParameterSet)
//! owns its random source; nothing in this crate touches a global or
//! thread-local generator once a set has been constructed.
//!
//! ## Design
//!
//! - **Reproducibility**: generators are seeded explicitly, and the seed is
//!   always recorded, even for entropy-seeded generators
//! - **Independence**: [`EquilRng::fork`] derives deterministic child streams
//!   so one master seed can drive many realisations on separate threads
//!
//! ## Usage Example
//!
//! ```rust
//! use equil_core::rng::EquilRng;
//!
//! let mut master = EquilRng::from_seed(2024);
//! let mut realisation_0 = master.fork(0);
//! let mut realisation_1 = master.fork(1);
//!
//! assert_ne!(realisation_0.seed(), realisation_1.seed());
//! let u = realisation_0.gen_uniform();
//! assert!((0.0..1.0).contains(&u));
//! # let _ = realisation_1.gen_uniform();
//! # let _ = master.gen_uniform();
//! ```

mod prng;

pub use prng::EquilRng;
