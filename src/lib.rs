/*!
 * # respack - JSON resource compaction tool
 *
 * A Rust library for shrinking JSON game resource and localization files
 * by stripping insignificant whitespace.
 *
 * ## Features
 *
 * - Compact JSON data and i18n files into a mirrored output tree
 * - Preserve object key order and numeric literals exactly as written
 * - Idempotent output directory creation
 * - Exact, case-sensitive `.json` filter (no recursion into subdirectories)
 * - Fail-fast error propagation with optional per-file isolation
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `compactor`: The compaction pass over the configured directories
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod compactor;
pub mod errors;
pub mod file_utils;

// Re-export main types for easier usage
pub use app_config::Config;
pub use compactor::{CompactionSummary, Compactor, compact_str};
pub use errors::AppError;
