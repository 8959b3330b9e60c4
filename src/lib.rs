pub mod history;
pub mod round;
pub mod rules;
pub mod selector;
pub mod settings;
