//! Core damage formula math.

/// Base damage before modifiers.
///
/// Formula: `floor(floor(floor(2 * Level / 5 + 2) * Power * Attack / Defense) / 50) + 2`
///
/// Each intermediate step truncates.
pub fn get_base_damage(level: u32, base_power: u32, attack: u32, defense: u32) -> u32 {
    if defense == 0 || base_power == 0 {
        return 0;
    }
    let level_factor = 2 * level / 5 + 2;
    level_factor * base_power * attack / defense / 50 + 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_damage_truncates() {
        // floor(floor(42 * 90 * 250 / 120) / 50) + 2
        assert_eq!(get_base_damage(100, 90, 250, 120), 159);
    }

    #[test]
    fn test_zero_power_is_zero() {
        assert_eq!(get_base_damage(100, 0, 250, 120), 0);
    }

    #[test]
    fn test_zero_defense_is_zero() {
        assert_eq!(get_base_damage(100, 90, 250, 0), 0);
    }
}
