//! Score and level rules

use super::config::GameConfig;

/// Points for eating one food item
pub fn food_points(level: u32) -> u32 {
    4 + level
}

/// Points for eating a buggybug with `time_left` ticks on its countdown
pub fn buggy_bug_points(time_left: i32, level: u32) -> u32 {
    (time_left.max(0) as u32) + level
}

/// Points for every tick survived in tron mode
pub const TRON_TICK_POINTS: u32 = 1;

/// Whether eating the `food_eaten`-th item completes a level
pub fn is_level_up(food_eaten: u32, config: &GameConfig) -> bool {
    food_eaten > 0 && food_eaten % config.food_per_level == 0
}

/// Every tenth point of the end-screen hiscore count-up gets a fanfare
pub fn is_hiscore_milestone(hiscore: u32) -> bool {
    hiscore % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_points() {
        assert_eq!(food_points(1), 5);
        assert_eq!(food_points(7), 11);
    }

    #[test]
    fn test_buggy_bug_points() {
        assert_eq!(buggy_bug_points(17, 3), 20);
        assert_eq!(buggy_bug_points(-1, 3), 3);
    }

    #[test]
    fn test_level_up_every_fifth_food() {
        let config = GameConfig::default();
        let levels: Vec<u32> = (1..=15).filter(|n| is_level_up(*n, &config)).collect();
        assert_eq!(levels, vec![5, 10, 15]);
        assert!(!is_level_up(0, &config));
    }

    #[test]
    fn test_hiscore_milestone() {
        assert!(is_hiscore_milestone(30));
        assert!(!is_hiscore_milestone(31));
    }
}
