pub mod day;
pub mod day_list;
pub mod person;
pub mod profile;
pub mod values;

pub use day::{CalorieEntry, CalorieKind, Day, EditDayDescriptor};
pub use day_list::UniqueDayList;
pub use person::Person;
pub use profile::{Profile, ProfileState};
pub use values::{Calorie, Height, Name, ProfileId, Weight};
