//! Style properties attached to sections and their resolution to effective
//! styles.
//!
//! Values are dynamically typed ([`value::StyleValue`]) and coerced on read:
//! an exact-type hit wins, a best-effort conversion is attempted otherwise,
//! and a failed conversion reads as "not present" so the default applies.

/// Color code parsing and representation.
pub mod color;
/// Resolution of style maps into effective styles.
pub mod resolve;
/// Dynamically typed style values and maps with coercion on read.
pub mod value;
