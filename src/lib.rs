//! Optional-value containers.
//!
//! [`Optional`] holds a value or nothing. [`OptionalResult`] holds a value,
//! nothing, or an error. Both can be matched directly, or drained through
//! one-shot channels with `get` for callers that prefer waiting on a value
//! source versus an absence source.
//!
//! ```rust
//! use optionals::{Failure, OptionalResult};
//!
//! fn lookup(id: u32) -> OptionalResult<&'static str> {
//!     match id {
//!         1 => OptionalResult::some("Odin"),
//!         4 => OptionalResult::failed(Failure::new("loki is a secret")),
//!         _ => OptionalResult::none(),
//!     }
//! }
//!
//! assert_eq!(lookup(1).get().wait(), OptionalResult::some("Odin"));
//! assert!(lookup(4).get().wait().is_failed());
//! assert!(lookup(7).get().wait().is_absent());
//! ```

mod error;
mod failure;
mod optional;
mod optional_result;
mod signal;
mod util;

pub use error::EncodeError;
pub use failure::Failure;
pub use optional::Optional;
pub use optional_result::{OptionalResult, SoNoEr};
pub use signal::{ResultSignals, Signals};
pub use util::Nullable;
