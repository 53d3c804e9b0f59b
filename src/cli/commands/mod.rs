pub mod prescription;
pub mod settings;
pub mod token;
