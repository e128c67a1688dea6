// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera model, action ramps and FFT backends for numeric plotting.
//!
//! Plotview holds the pieces of a plotting renderer that are independent of
//! any graphics API: where the viewer stands, how view changes are animated,
//! and which Fourier-transform implementation numeric code calls into.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - polar/cartesian scene camera with cached
//!   trigonometry, viewing octant and change notification
//! - [`animation::ActionRamp`] - process-wide easing tables, and
//!   [`animation::CameraTransition`] to drive a camera along one
//! - [`fft::FftBackend`] - pluggable FFT interface, with
//!   [`fft::RustFftBackend`] and the [`fft::ManagedFft`] placeholder
//! - [`options::Options`] - TOML view presets
//!
//! # Threading
//!
//! A [`camera::Camera`] is a single-owner value without internal locking;
//! share it across threads only behind an external lock. Ramp tables are
//! built once behind [`std::sync::OnceLock`] and are safe to read from any
//! thread.

pub mod animation;
pub mod camera;
pub mod error;
pub mod fft;
pub mod options;

pub use error::PlotViewError;
