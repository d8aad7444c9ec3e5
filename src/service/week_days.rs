const SEPARATOR: char = ',';

/// Joins weekday codes into the stored form, e.g. `["0", "2", "4"]` becomes `"0,2,4"`.
pub fn join_week_days(days: &[String]) -> String {
    days.join(&SEPARATOR.to_string())
}

pub fn split_week_days(stored: &str) -> Vec<String> {
    if stored.is_empty() {
        return Vec::new();
    }

    stored.split(SEPARATOR).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn days(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn joins_codes_with_comma() {
        assert_eq!(join_week_days(&days(&["0", "2", "4"])), "0,2,4");
        assert_eq!(join_week_days(&days(&["6"])), "6");
    }

    #[test]
    fn splits_stored_codes() {
        assert_eq!(split_week_days("0,2,4"), days(&["0", "2", "4"]));
        assert_eq!(split_week_days("5"), days(&["5"]));
    }

    #[test]
    fn empty_stored_value_is_empty_list() {
        assert!(split_week_days("").is_empty());
    }
}
