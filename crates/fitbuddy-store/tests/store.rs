use chrono::NaiveDate;
use fitbuddy_core::{
    Calorie, CalorieEntry, CalorieKind, Day, Height, Name, Person, Profile, ProfileId, Weight,
};
use fitbuddy_store::error::StoreError;
use fitbuddy_store::Store;
use std::fs;
use tempfile::TempDir;

fn sample_person() -> Person {
    let profile = Profile::new(
        Name::new("Ada Lovelace").expect("name"),
        ProfileId::new("1234").expect("id"),
        Height::new("170").expect("height"),
        Weight::new("60").expect("weight"),
        NaiveDate::from_ymd_opt(2024, 1, 1).expect("date"),
    );
    let mut person = Person::with_profile(profile);
    let day = Day::new(
        NaiveDate::from_ymd_opt(2024, 1, 2).expect("date"),
        Weight::new("64").expect("weight"),
    )
    .add_calorie(
        CalorieEntry::new(CalorieKind::Intake, "oats", Calorie::new("350").expect("kcal"))
            .expect("entry"),
    );
    person.add_day(day).expect("add day");
    person
        .add_day(Day::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).expect("date"),
            Weight::new("65").expect("weight"),
        ))
        .expect("add day");
    person
}

#[test]
fn missing_file_loads_empty() {
    let temp = TempDir::new().expect("temp dir");
    let store = Store::open(&temp.path().join("nested").join("fitbuddy.json")).expect("open");
    let person = store.load().expect("load");
    assert!(!person.has_profile());
    assert!(person.day_list().is_empty());
    assert!(temp.path().join("nested").exists());
}

#[test]
fn save_then_load_keeps_profile_days_and_order() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("fitbuddy.json");
    let store = Store::open(&path).expect("open");

    let person = sample_person();
    store.save(&person).expect("save");

    let loaded = store.load().expect("load");
    assert_eq!(loaded, person);
    let profile = loaded.profile().expect("profile");
    assert_eq!(
        profile.start_date,
        NaiveDate::from_ymd_opt(2024, 1, 1).expect("date")
    );
    let dates: Vec<String> = loaded
        .day_list()
        .iter()
        .map(|day| day.date.to_string())
        .collect();
    assert_eq!(dates, ["2024-01-02", "2024-01-01"]);
    assert_eq!(loaded.day_list().as_slice()[0].total_intake(), 350);
}

#[test]
fn save_overwrites_previous_contents() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("fitbuddy.json");
    let store = Store::open(&path).expect("open");

    store.save(&sample_person()).expect("save");
    store.save(&Person::new()).expect("save empty");

    let loaded = store.load().expect("load");
    assert_eq!(loaded, Person::new());
    let leftovers: Vec<_> = fs::read_dir(temp.path())
        .expect("read dir")
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path() != path)
        .collect();
    assert!(leftovers.is_empty(), "temp files left behind: {leftovers:?}");
}

#[test]
fn corrupt_file_is_reported() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("fitbuddy.json");
    fs::write(&path, "{ not json").expect("write");

    let store = Store::open(&path).expect("open");
    let err = store.load().expect_err("load should fail");
    assert!(matches!(err, StoreError::Json { .. }));
}

#[cfg(unix)]
#[test]
fn saved_file_is_private() {
    use std::os::unix::fs::PermissionsExt;
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("fitbuddy.json");
    let store = Store::open(&path).expect("open");
    store.save(&sample_person()).expect("save");

    let mode = fs::metadata(&path).expect("metadata").permissions().mode();
    assert_eq!(mode & 0o077, 0);
}
