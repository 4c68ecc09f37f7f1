//! Live viewer count widget.
//!
//! The client half of the viewer count system: increments the shared count on
//! mount, polls it every five seconds while mounted, renders the value with a
//! directional indicator, and decrements (best effort) on unmount.

pub mod api;
pub mod display;
pub mod widget;
