pub mod report;
pub mod row;
