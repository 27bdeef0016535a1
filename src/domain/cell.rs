/// Cell is the fundamental unit of the simulation.
/// It stores an age: 0 means dead, anything else is the number of
/// consecutive generations the cell has been alive (capped by `max_age`).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct Cell(pub u8);

impl Cell {
    pub const DEAD: Cell = Cell(0);
    pub const NEWBORN: Cell = Cell(1);

    /// Build a cell from a paint/erase intent
    pub const fn from_alive(alive: bool) -> Self {
        if alive { Cell::NEWBORN } else { Cell::DEAD }
    }

    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        self.0 != 0
    }

    /// Age in generations (0 when dead)
    pub const fn age(self) -> u8 {
        self.0
    }

    /// Pure function to compute the next state based on Conway's rules:
    /// 1. Live cell with 2-3 neighbors survives and ages by one (up to `max_age`)
    /// 2. Dead cell with exactly 3 neighbors is born with age 1
    /// 3. All other cases result in death
    ///
    /// Age never feeds back into the rule, only aliveness does.
    pub const fn evolve(self, neighbors: u8, max_age: u8) -> Self {
        let cap = if max_age == 0 { 1 } else { max_age };
        match (self.is_alive(), neighbors) {
            (true, 2 | 3) => {
                if self.0 < cap { Cell(self.0 + 1) } else { Cell(cap) }
            }
            (false, 3) => Cell::NEWBORN,
            _ => Cell::DEAD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert_eq!(Cell(1).evolve(0, 30), Cell::DEAD);
        assert_eq!(Cell(5).evolve(1, 30), Cell::DEAD);
    }

    #[test]
    fn test_survival_ages_cell() {
        assert_eq!(Cell(1).evolve(2, 30), Cell(2));
        assert_eq!(Cell(7).evolve(3, 30), Cell(8));
    }

    #[test]
    fn test_age_saturates_at_cap() {
        assert_eq!(Cell(30).evolve(2, 30), Cell(30));
        assert_eq!(Cell(255).evolve(3, 255), Cell(255));
        // Zero cap is treated as 1
        assert_eq!(Cell(1).evolve(2, 0), Cell(1));
    }

    #[test]
    fn test_overpopulation() {
        assert_eq!(Cell(3).evolve(4, 30), Cell::DEAD);
        assert_eq!(Cell(3).evolve(8, 30), Cell::DEAD);
    }

    #[test]
    fn test_reproduction() {
        assert_eq!(Cell::DEAD.evolve(3, 30), Cell::NEWBORN);
        assert_eq!(Cell::DEAD.evolve(2, 30), Cell::DEAD);
    }

    #[test]
    fn test_old_cells_follow_same_rule() {
        for age in [1u8, 10, 30] {
            assert_eq!(Cell(age).evolve(1, 30), Cell::DEAD);
            assert!(Cell(age).evolve(2, 30).is_alive());
        }
    }
}
