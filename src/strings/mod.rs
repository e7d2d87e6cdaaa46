pub mod any_string;
pub mod dyn_string;
pub mod facade;
pub mod fix_string;
