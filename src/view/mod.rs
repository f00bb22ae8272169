pub mod chart;
pub mod frame;
pub mod pagination;
pub mod table;
