mod tests {
    use approx::assert_relative_eq;

    use crate::mass::{Mass, EARTH_MASS_KG, SOLAR_MASS_KG};

    #[test]
    fn test_mass_conversions() {
        let sun = Mass::from_solar_masses(1.0);
        assert_relative_eq!(sun.to_kg(), SOLAR_MASS_KG);

        let earth = Mass::from_kg(EARTH_MASS_KG);
        assert_relative_eq!(earth.to_earth_masses(), 1.0);

        // Round trip through kilograms
        let original = 0.05;
        let round_trip = Mass::from_kg(Mass::from_solar_masses(original).to_kg()).to_solar_masses();
        assert_relative_eq!(round_trip, original);
    }
}
