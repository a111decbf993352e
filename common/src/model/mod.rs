pub mod column;
pub mod record;
pub mod report;
