pub mod delivery;
pub mod draft;
pub mod status;
