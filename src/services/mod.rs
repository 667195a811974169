pub mod calls;
pub mod pricing;
pub mod prompt;
pub mod slots;
pub mod tools;
pub mod webhook;
