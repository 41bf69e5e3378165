use rust_decimal::Decimal;

pub const DEFAULT_SKILL: &str = "Generic";
pub const UNKNOWN_EXPERIENCE: &str = "N/A";

/// Renders years of experience for applicant cards. Zero reads as unknown.
pub fn format_experience(years: Option<Decimal>) -> String {
    match years {
        Some(n) if !n.is_zero() => format!("{} Years", n.normalize()),
        _ => UNKNOWN_EXPERIENCE.to_string(),
    }
}

pub fn display_skill(skill: Option<&str>) -> String {
    match skill.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => DEFAULT_SKILL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn experience_formatting() {
        assert_eq!(format_experience(Some(Decimal::from(5))), "5 Years");
        assert_eq!(format_experience(Some(Decimal::from(1))), "1 Years");
        assert_eq!(format_experience(Some(Decimal::new(25, 1))), "2.5 Years");
        assert_eq!(format_experience(Some(Decimal::new(30, 1))), "3 Years");
        assert_eq!(format_experience(None), "N/A");
        assert_eq!(format_experience(Some(Decimal::ZERO)), "N/A");
    }

    #[test]
    fn missing_skill_falls_back_to_generic() {
        assert_eq!(display_skill(Some("Plumber")), "Plumber");
        assert_eq!(display_skill(Some("  ")), "Generic");
        assert_eq!(display_skill(None), "Generic");
    }
}
