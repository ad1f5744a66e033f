//! # Code Rules
//!
//! > **Small value types that show a handful of coding conventions, plus a harness that checks them.**
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. Values ([`shape`], [`resource`])
//! - [`Circle`](shape::Circle): immutable, validated once at construction, derives its area on demand.
//! - [`ResourceManager`](resource::ResourceManager): exclusive owner of at most
//!   [`MAX_SIZE`](config::MAX_SIZE) integers, replaced wholesale by moving a `Vec` in.
//!
//! ### 2. Shared definitions ([`config`], [`model`])
//! Compile-time constants and plain data types ([`Status`](model::Status), [`Point`](model::Point)).
//!
//! ### 3. Verification ([`harness`])
//! Four independent cases and a runner that produces a pass/fail [`Report`](harness::Report).
//!
//! ## 👩‍💻 Conventions
//!
//! ### 1. Type-Safe Error Handling
//! Each module defines its own error type ([`ShapeError`](shape::ShapeError),
//! [`ResourceError`](resource::ResourceError)) derived with `thiserror`.
//! Failed operations return `Err` and never leave a half-built value or a
//! partially replaced buffer behind.
//!
//! ### 2. Ownership
//! `add_data` takes its `Vec<i32>` by value, so the caller gives the buffer up;
//! reads hand out `&[i32]` and nothing else.
//!
//! ### 3. Observability
//! `tracing` events throughout; see [`lifecycle::tracing`].
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the harness
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod config;
pub mod harness;
pub mod lifecycle;
pub mod model;
pub mod resource;
pub mod shape;
