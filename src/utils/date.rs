pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub mod serializer {
    use chrono::{DateTime, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        time.format(DATE_FMT).to_string().serialize(serializer)
    }

    // accepts both DATE_FMT and RFC 3339 timestamps
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        if let Ok(time) = NaiveDateTime::parse_from_str(&str_time, DATE_FMT) {
            return Ok(time);
        }
        DateTime::parse_from_rfc3339(&str_time)
            .map(|t| t.naive_utc())
            .map_err(D::Error::custom)
    }
}
