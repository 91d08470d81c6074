//! Validation utilities for matrix coordinates, shapes and format tokens
//!
//! This module contains pure validation functions with no I/O dependencies.

pub mod bounds;
pub mod parsing;

pub use bounds::{validate_index, validate_product_shape, validate_same_shape};
pub use parsing::{parse_coordinate, parse_dimension, parse_integer, parse_triple};
