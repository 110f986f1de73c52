pub mod bulk;
pub mod db;
