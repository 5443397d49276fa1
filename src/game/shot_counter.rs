//! Cannon shot counter shown on the brick-wall HUD.

/// Counts shots; there is no way to decrement or reset it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShotCounter {
    count: u32,
}

impl ShotCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one shot and return the new total.
    pub fn record_shot(&mut self) -> u32 {
        self.count = self.count.saturating_add(1);
        self.count
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn hud_text(&self) -> String {
        format!("SHOTS FIRED: {}\n(left click to fire)", self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_shots() {
        let mut counter = ShotCounter::new();
        assert_eq!(counter.count(), 0);
        assert_eq!(counter.record_shot(), 1);
        assert_eq!(counter.record_shot(), 2);
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn test_hud_text() {
        let mut counter = ShotCounter::new();
        counter.record_shot();
        assert_eq!(counter.hud_text(), "SHOTS FIRED: 1\n(left click to fire)");
    }
}
