//! Event system: tap events, input conversion, handler chains.

pub mod handler;
pub mod input;

pub use handler::{Handler, HandlerChain};
pub use input::{Key, KeyEvent, Modifiers, MouseBtn, MouseEvent, TapEvent, TapSource};
