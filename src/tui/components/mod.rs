pub mod banner;
pub mod creator;
pub mod row;
pub mod table;
pub mod visibility;
