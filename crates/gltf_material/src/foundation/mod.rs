//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Math types shared by the material interface
//! - Logging setup for host applications

pub mod math;
pub mod logging;
