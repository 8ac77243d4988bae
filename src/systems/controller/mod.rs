mod keyboard;

pub use keyboard::{key_for, keyboard_input_system};
