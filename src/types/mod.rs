pub mod daily_record;
pub mod measurement;
pub mod query;
pub mod selection;
pub mod traits;
