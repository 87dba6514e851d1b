use crate::error::{Result, StoreError};
use fitbuddy_core::{Day, Person, Profile, ProfileState, UniqueDayList};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
struct DataFileRef<'a> {
    version: u32,
    profile: Option<&'a Profile>,
    days: &'a [Day],
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DataFile {
    version: u32,
    profile: Option<Profile>,
    #[serde(default)]
    days: Vec<Day>,
}

pub fn encode(person: &Person, path: &Path) -> Result<String> {
    let file = DataFileRef {
        version: FORMAT_VERSION,
        profile: person.profile(),
        days: person.day_list().as_slice(),
    };
    serde_json::to_string_pretty(&file).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn decode(contents: &str, path: &Path) -> Result<Person> {
    let file: DataFile = serde_json::from_str(contents).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    if file.version != FORMAT_VERSION {
        return Err(StoreError::UnsupportedVersion(file.version));
    }
    let days = UniqueDayList::from_days(file.days)?;
    Ok(Person::from_parts(ProfileState::from(file.profile), days))
}

#[cfg(test)]
mod tests {
    use super::{decode, encode};
    use crate::error::StoreError;
    use fitbuddy_core::{CoreError, Person};
    use std::path::Path;

    const PATH: &str = "fitbuddy.json";

    #[test]
    fn unset_profile_is_null() {
        let encoded = encode(&Person::new(), Path::new(PATH)).expect("encode");
        let value: serde_json::Value = serde_json::from_str(&encoded).expect("json");
        assert!(value["profile"].is_null());
        assert_eq!(value["version"], 1);
        assert_eq!(value["days"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn decode_rejects_invalid_weight() {
        let contents = r#"{"version":1,"profile":null,"days":[{"date":"2024-01-01","weight":"7"}]}"#;
        let err = decode(contents, Path::new(PATH)).unwrap_err();
        assert!(matches!(err, StoreError::Json { .. }));
    }

    #[test]
    fn decode_rejects_blank_calorie_label() {
        let contents = r#"{"version":1,"profile":null,"days":[{"date":"2024-01-01","weight":"70",
            "calories":[{"kind":"intake","label":"   ","amount":"100"}]}]}"#;
        let err = decode(contents, Path::new(PATH)).unwrap_err();
        assert!(matches!(err, StoreError::Json { .. }));
    }

    #[test]
    fn decode_trims_calorie_label() {
        let contents = r#"{"version":1,"profile":null,"days":[{"date":"2024-01-01","weight":"70",
            "calories":[{"kind":"burn","label":"  run ","amount":"300"}]}]}"#;
        let person = decode(contents, Path::new(PATH)).expect("decode");
        let day = &person.day_list().as_slice()[0];
        assert_eq!(day.calories[0].label, "run");
        assert_eq!(day.total_burn(), 300);
    }

    #[test]
    fn decode_rejects_duplicate_dates() {
        let contents = r#"{"version":1,"profile":null,"days":[
            {"date":"2024-01-01","weight":"70"},
            {"date":"2024-01-01","weight":"71"}
        ]}"#;
        let err = decode(contents, Path::new(PATH)).unwrap_err();
        assert!(matches!(err, StoreError::Core(CoreError::DuplicateDay(_))));
    }

    #[test]
    fn decode_rejects_future_version() {
        let err = decode(r#"{"version":9,"profile":null}"#, Path::new(PATH)).unwrap_err();
        assert!(matches!(err, StoreError::UnsupportedVersion(9)));
    }
}
