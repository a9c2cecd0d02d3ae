use chrono::{DateTime, Utc};

/// The browser window, or `None` off-browser (native tests) and in workers.
pub(crate) fn browser_window() -> Option<web_sys::Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Up to two uppercase initials for the profile badge ("jane doe" -> "JD").
pub(crate) fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

pub(crate) fn format_note_date(created_at: Option<&DateTime<Utc>>) -> String {
    created_at
        .map(|d| d.format("%-d %b %Y").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_initials_two_words() {
        assert_eq!(initials("jane doe"), "JD");
    }

    #[test]
    fn test_initials_ignores_extra_words_and_spaces() {
        assert_eq!(initials("  ada   king lovelace "), "AK");
        assert_eq!(initials("solo"), "S");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_format_note_date() {
        let d = Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap();
        assert_eq!(format_note_date(Some(&d)), "5 Mar 2024");
        assert_eq!(format_note_date(None), "");
    }
}
