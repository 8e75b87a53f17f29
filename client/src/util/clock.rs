//! Wall-clock reads.

/// Current calendar year: UTC on the server, local time in the browser.
#[must_use]
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        let year = js_sys::Date::new_0().get_full_year();
        i32::try_from(year).unwrap_or_else(|_| time::OffsetDateTime::UNIX_EPOCH.year())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}

#[must_use]
pub fn copyright_line(year: i32) -> String {
    format!("© {year} All rights reserved.")
}

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;
