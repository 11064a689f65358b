use chrono::{TimeZone, Utc};

use crate::modules::users::core::user::User;

pub fn make_user(email: &str) -> User {
    User::new(
        email,
        "$2b$04$notarealhashnotarealhashnotarealhashnotarealhashnotar",
        "Ada",
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    )
}
