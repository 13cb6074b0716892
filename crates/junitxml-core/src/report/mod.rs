pub mod console;
pub mod junit;
pub mod xml;
