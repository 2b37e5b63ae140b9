mod territory_code;

pub use territory_code::TerritoryCode;
