mod tests {
    use approx::assert_relative_eq;

    use crate::time::{Time, DAYS_PER_YEAR, SECONDS_PER_DAY, SECONDS_PER_HOUR};

    #[test]
    fn test_time_conversions() {
        assert_relative_eq!(Time::from_days(1.0).to_seconds(), SECONDS_PER_DAY);
        assert_relative_eq!(Time::from_hours(24.0).to_days(), 1.0);
        assert_relative_eq!(Time::from_seconds(SECONDS_PER_HOUR).to_hours(), 1.0);
        assert_relative_eq!(Time::from_years(1.0).to_days(), DAYS_PER_YEAR);
        assert_relative_eq!(Time::from_days(730.5).to_years(), 2.0);
    }
}
