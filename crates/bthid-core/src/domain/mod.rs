//! Input event model shared by every input source and the event loop.
//!
//! Sources differ in what they can observe: a terminal sees characters and
//! absolute pointer cells, a raw device sees key codes, buttons and relative
//! motion.  [`InputEvent`] is the union of both, so the event loop has a
//! single thing to classify.

pub mod event;
pub mod linux_input;

pub use event::{Axis, InputEvent, MouseButton};
