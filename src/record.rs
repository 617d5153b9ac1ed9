use serde::{Deserialize, Serialize};

/// One housing observation.
///
/// Field order is the input column order and also the key order of the
/// serialized JSON object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Median house value
    pub value: i64,
    /// Median income
    pub income: f64,
    /// Median house age
    pub age: f64,
    pub rooms: i64,
    pub bedrooms: i64,
    pub pop: i64,
    /// Household count
    pub hh: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Value,
    Income,
    Age,
    Rooms,
    Bedrooms,
    Pop,
    Hh,
}

impl Column {
    /// Columns in the order they appear in an input row.
    pub const ALL: [Column; 7] = [
        Column::Value,
        Column::Income,
        Column::Age,
        Column::Rooms,
        Column::Bedrooms,
        Column::Pop,
        Column::Hh,
    ];

    /// Key used for this column in the JSON output.
    pub fn key(self) -> &'static str {
        match self {
            Column::Value => "value",
            Column::Income => "income",
            Column::Age => "age",
            Column::Rooms => "rooms",
            Column::Bedrooms => "bedrooms",
            Column::Pop => "pop",
            Column::Hh => "hh",
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::{Column, Record};

    #[test]
    fn serializes_keys_in_column_order() {
        let record = Record {
            value: 452600,
            income: 8.3252,
            age: 41.0,
            rooms: 880,
            bedrooms: 129,
            pop: 322,
            hh: 126,
        };
        let json = serde_json::to_string(&record).unwrap();
        let keys = Column::ALL.map(|c| json.find(&format!("\"{}\":", c)).unwrap());
        assert!(keys.windows(2).all(|w| w[0] < w[1]), "{}", json);
    }
}
