//! Private set-membership test.
//!
//! A client holding `c` learns whether `c` belongs to a server's set `S`, and
//! nothing else. The server learns nothing about `c`.
//!
//! 1. **Setup** (server, once): [`Polynomial::from_roots`] builds
//!    `PS(x) = (x - s1)...(x - sn)`.
//! 2. **Query** (client): [`encrypt_powers`] sends `Enc(c), ..., Enc(c^n)`
//!    under a fresh key pair.
//! 3. **Respond** (server): [`evaluate`] computes `Enc(PS(c))` and [`blind`]
//!    turns it into `Enc(r * PS(c))` for a fresh non-zero `r`.
//! 4. **Decide** (client): [`decide`] decrypts and tests for zero.
//!
//! [`Session`] chains these steps as a typed state machine and
//! [`run_protocol`] drives a full local run.

pub mod blind;
pub mod client;
pub mod dataset;
pub mod decide;
pub mod error;
pub mod evaluate;
pub mod message;
pub mod params;
pub mod polynomial;
pub mod powers;
pub mod protocol;
pub mod server;
pub mod session;
#[cfg(test)]
mod tests;

pub use blind::*;
pub use client::*;
pub use dataset::*;
pub use decide::*;
pub use error::*;
pub use evaluate::*;
pub use message::*;
pub use params::*;
pub use polynomial::*;
pub use powers::*;
pub use protocol::*;
pub use server::*;
pub use session::*;
