//! The B3/S23 rule. Only the standard rule is supported.

/// Live neighbor counts that bring a dead cell to life.
pub const BIRTH: &[usize] = &[3];

/// Live neighbor counts that keep a live cell alive.
pub const SURVIVE: &[usize] = &[2, 3];

/// Whether a cell is alive in the next generation.
pub fn next_alive(alive: bool, live_neighbors: usize) -> bool {
    if alive {
        SURVIVE.contains(&live_neighbors)
    } else {
        BIRTH.contains(&live_neighbors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dead_cell_is_born_on_exactly_three() {
        for count in 0..=8 {
            assert_eq!(next_alive(false, count), count == 3, "count {count}");
        }
    }

    #[test]
    fn live_cell_survives_on_two_or_three() {
        for count in 0..=8 {
            assert_eq!(
                next_alive(true, count),
                count == 2 || count == 3,
                "count {count}"
            );
        }
    }
}
