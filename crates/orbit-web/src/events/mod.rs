pub mod clicks;
pub mod keyboard;
pub mod pointer;

pub use clicks::wire_delegated_clicks;
pub use keyboard::wire_global_keydown;
pub use pointer::wire_input_handlers;
