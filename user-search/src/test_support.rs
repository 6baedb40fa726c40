//! Shared fixtures for unit tests

use crate::model::User;
use crate::store::MemoryStore;

pub(crate) fn user(id: i64, name: &str, age: u32, about: &str, gender: &str) -> User {
    User {
        id,
        name: name.to_string(),
        age,
        about: about.to_string(),
        gender: gender.to_string(),
    }
}

/// Five records in a deliberately unsorted store order
pub(crate) fn sample_users() -> Vec<User> {
    vec![
        user(3, "EverettDillard", 27, "Sint eu id sint irure officia.", "male"),
        user(0, "BoydWolf", 22, "Nulla cillum enim voluptate consequat.", "male"),
        user(4, "OwenLynn", 30, "Elit anim elit eu et deserunt veniam.", "male"),
        user(1, "HildaMayer", 21, "Sit commodo consectetur minim amet ex.", "female"),
        user(2, "BrooksAguilar", 22, "Velit ullamco est aliqua voluptate Boyd.", "male"),
    ]
}

pub(crate) fn sample_store() -> MemoryStore {
    MemoryStore::new(sample_users())
}
