pub mod listener;
pub mod pointer;
pub mod resize;

pub use listener::EventListener;
pub use pointer::wire_pointer_handlers;
pub use resize::ResizeDebouncer;
