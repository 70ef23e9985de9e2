pub mod cluster;
pub mod manager;
pub mod marker;
pub mod track;
