//! Reusable UI widgets - composable components without business logic
//!
//! Widgets combine primitives and basic iced elements into reusable UI
//! patterns. They take generic Message types and never import from
//! `crate::app`.

pub mod section_header;
mod toast;

pub use toast::{Toast, ToastStyle, view_toast};
