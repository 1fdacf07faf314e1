// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles.
//!
//! Keeping style functions in one place keeps the view code free of color
//! plumbing and makes light/dark behavior auditable.

pub mod button;
pub mod container;
pub mod text_input;
