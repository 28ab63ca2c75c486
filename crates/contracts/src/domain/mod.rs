pub mod a001_source_type;
pub mod a002_branch;
pub mod a003_source_name;
pub mod a004_required_fields;
pub mod a005_daily_record;
