pub struct TerritoryCode {
}

impl TerritoryCode {
    /// Returns a territory code string representing the "unknown" territory.
    pub fn get_unknown() -> &'static str {
        return Self::zz();
    }

    pub fn zz() -> &'static str {
        return "ZZ";
    }

    /// Territory ids are compared in upper case.
    pub fn normalize(code: &str) -> String {
        code.trim().to_ascii_uppercase()
    }
}
