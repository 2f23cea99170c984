pub mod logging;
pub mod print;
pub mod table;
