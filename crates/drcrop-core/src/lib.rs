//! # drcrop-core - Core Domain Types
//!
//! Foundation crate for Dr. Crop. Provides the domain types shared by the
//! application state machine and the terminal front-end, the error type, and
//! the logging bootstrap.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Language`] - Display language (English, Hindi)
//! - [`Crop`] - Crop catalog entry, including the auto-detect sentinel
//! - [`SessionRecord`] - Crop/image/language triple handed to the results screen
//! - [`DiagnosisResult`] - Simulated verdict and confidence score
//! - [`Verdict`] - Healthy or diseased
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum covering storage, intake, analysis and reports
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use drcrop_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all Dr. Crop crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use types::{
    Crop, DiagnosisResult, Language, SessionRecord, Verdict, CONFIDENCE_MAX, CONFIDENCE_MIN,
};
