use life_grid::{
    EditableWorld, GridCell, GridError, GridSize, Loc, Neighborhood, Random, World, WorldGrid,
};

const ALIVE_COLOR: [u8; 4] = [171, 178, 191, 0xff];
const DEAD_COLOR: [u8; 4] = [40, 44, 52, 0xff];

#[derive(Debug)]
pub struct ConwayWorld {
    grid: WorldGrid<ConwayGridCell>,
    rand: Random,
}

impl ConwayWorld {
    pub fn new(size: GridSize, rand: Random) -> Self {
        Self {
            grid: WorldGrid::new(size),
            rand,
        }
    }

    pub fn is_alive(&self, loc: Loc) -> Result<bool, GridError> {
        Ok(self.grid.cell(loc)?.alive)
    }

    pub fn set_alive(&mut self, loc: Loc, alive: bool) -> Result<(), GridError> {
        self.grid.set_cell(loc, ConwayGridCell { alive })
    }
}

impl World for ConwayWorld {
    fn grid(&self) -> &WorldGrid<impl GridCell> {
        &self.grid
    }

    fn update(&mut self) -> Vec<Loc> {
        self.grid.update()
    }
}

impl EditableWorld for ConwayWorld {
    fn paint(&mut self, loc: Loc, alive: bool) -> Result<bool, GridError> {
        if self.is_alive(loc)? == alive {
            return Ok(false);
        }
        self.set_alive(loc, alive)?;
        Ok(true)
    }

    fn randomize(&mut self) {
        for cell in self.grid.cells_iter_mut() {
            cell.alive = self.rand.next_bool(0.5);
        }
    }

    fn clear(&mut self) {
        self.grid.clear();
    }

    fn apply_pattern(&mut self, pattern: &[Loc]) -> Result<(), GridError> {
        self.grid.stamp(pattern, ConwayGridCell { alive: true })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConwayGridCell {
    pub alive: bool,
}

impl ConwayGridCell {
    fn num_live_neighbors(neighborhood: &Neighborhood<ConwayGridCell>) -> u32 {
        neighborhood.count_neighbors(|neighbor| neighbor.alive)
    }
}

impl GridCell for ConwayGridCell {
    fn color_rgba(&self) -> [u8; 4] {
        if self.alive { ALIVE_COLOR } else { DEAD_COLOR }
    }

    fn update(
        &self,
        neighborhood: &Neighborhood<ConwayGridCell>,
        next_cell: &mut ConwayGridCell,
    ) {
        let neighbors = Self::num_live_neighbors(neighborhood);
        next_cell.alive = if self.alive {
            (2..=3).contains(&neighbors)
        } else {
            neighbors == 3
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::gosper_glider_gun;

    const GUN_ROWS: u32 = 9;
    const GUN_COLS: u32 = 36;

    impl ConwayWorld {
        fn num_alive(&self) -> usize {
            self.grid.cells_iter().filter(|cell| cell.alive).count()
        }
    }

    fn world_with(width: u32, height: u32, alive: &[(u32, u32)]) -> ConwayWorld {
        let mut world = ConwayWorld::new(GridSize::new(width, height), Random::from_seed(1));
        for &loc in alive {
            world.set_alive(loc.into(), true).unwrap();
        }
        world
    }

    fn live_locs(world: &ConwayWorld) -> Vec<Loc> {
        world
            .grid
            .cells_iter()
            .enumerate()
            .filter(|(_, cell)| cell.alive)
            .map(|(index, _)| Loc::from_grid_index(index, world.grid.size().width))
            .collect()
    }

    fn locs(cells: &[(u32, u32)]) -> Vec<Loc> {
        cells.iter().map(|&cell| cell.into()).collect()
    }

    #[test]
    fn blank_grid_stays_blank() {
        let mut world = world_with(6, 4, &[]);
        let changed = world.update();
        assert!(changed.is_empty());
        assert_eq!(world.num_alive(), 0);
    }

    #[test]
    fn lone_cell_dies() {
        let mut world = world_with(5, 5, &[(2, 2)]);
        let changed = world.update();
        assert_eq!(changed, vec![Loc::new(2, 2)]);
        assert_eq!(world.num_alive(), 0);
    }

    #[test]
    fn block_is_still_life() {
        let block = [(1, 1), (1, 2), (2, 1), (2, 2)];
        let mut world = world_with(4, 4, &block);
        let changed = world.update();
        assert!(changed.is_empty());
        assert_eq!(live_locs(&world), locs(&block));
    }

    #[test]
    fn blinker_oscillates() {
        let row = [(2, 1), (2, 2), (2, 3)];
        let column = [(1, 2), (2, 2), (3, 2)];
        let mut world = world_with(5, 5, &row);

        let changed = world.update();
        assert_eq!(live_locs(&world), locs(&column));
        assert_eq!(changed, locs(&[(1, 2), (2, 1), (2, 3), (3, 2)]));

        let changed = world.update();
        assert_eq!(live_locs(&world), locs(&row));
        assert_eq!(changed, locs(&[(1, 2), (2, 1), (2, 3), (3, 2)]));
    }

    #[test]
    fn edges_do_not_wrap() {
        let mut world = world_with(5, 5, &[(0, 0), (0, 1), (0, 2)]);
        let changed = world.update();
        // A wrapping grid would also give birth at (4, 1).
        assert_eq!(live_locs(&world), locs(&[(0, 1), (1, 1)]));
        assert_eq!(changed, locs(&[(0, 0), (0, 2), (1, 1)]));
    }

    #[test]
    fn changes_are_in_bounds_and_real() {
        let mut world = world_with(12, 9, &[]);
        world.rand = Random::from_seed(42);
        world.randomize();
        let before: Vec<bool> = world.grid.cells_iter().map(|cell| cell.alive).collect();

        let changed = world.update();

        assert!(!changed.is_empty());
        let size = world.grid.size();
        for loc in changed {
            assert!(size.contains(loc), "{loc:?}");
            let index = loc.grid_index(size).unwrap();
            assert_ne!(world.is_alive(loc).unwrap(), before[index], "{loc:?}");
        }
    }

    #[test]
    fn step_is_deterministic() {
        let mut first = world_with(10, 10, &[]);
        first.rand = Random::from_seed(9);
        first.randomize();
        let mut second = world_with(10, 10, &[]);
        second.apply_pattern(&live_locs(&first)).unwrap();

        assert_eq!(first.update(), second.update());
        assert_eq!(live_locs(&first), live_locs(&second));
    }

    #[test]
    fn randomize_then_clear_is_blank() {
        let mut world = world_with(20, 20, &[]);
        world.randomize();
        assert!(world.num_alive() > 0);
        world.clear();
        assert_eq!(world.num_alive(), 0);
    }

    #[test]
    fn paint_reports_whether_cell_changed() {
        let mut world = world_with(3, 3, &[]);
        assert_eq!(world.paint(Loc::new(1, 1), true), Ok(true));
        assert_eq!(world.paint(Loc::new(1, 1), true), Ok(false));
        assert_eq!(world.paint(Loc::new(1, 1), false), Ok(true));
        assert_eq!(world.paint(Loc::new(0, 0), false), Ok(false));
        assert!(world.paint(Loc::new(3, 0), true).is_err());
    }

    #[test]
    fn pattern_off_the_grid_is_rejected() {
        let mut world = world_with(20, 5, &[(0, 0)]);
        let result = world.apply_pattern(&gosper_glider_gun(Loc::new(0, 0)).unwrap());
        assert!(result.is_err());
        assert_eq!(live_locs(&world), vec![Loc::new(0, 0)]);
    }

    #[test]
    fn gun_fits_default_grid() {
        let mut world = world_with(50, 50, &[]);
        world.apply_pattern(&gosper_glider_gun(Loc::new(1, 1)).unwrap()).unwrap();
        assert_eq!(world.num_alive(), 36);
    }

    fn in_gun_box(loc: Loc, origin: Loc) -> bool {
        (origin.row..origin.row + GUN_ROWS).contains(&loc.row)
            && (origin.col..origin.col + GUN_COLS).contains(&loc.col)
    }

    #[test]
    fn gun_emits_a_glider_every_30_generations() {
        let origin = Loc::new(1, 1);
        let gun = gosper_glider_gun(origin).unwrap();
        let mut world = world_with(80, 60, &[]);
        world.apply_pattern(&gun).unwrap();

        for _ in 0..30 {
            world.update();
        }

        let (mut inside, outside): (Vec<Loc>, Vec<Loc>) = live_locs(&world)
            .into_iter()
            .partition(|loc| in_gun_box(*loc, origin));
        let mut expected_gun = gun.clone();
        expected_gun.sort_by_key(|loc| (loc.row, loc.col));
        inside.sort_by_key(|loc| (loc.row, loc.col));
        assert_eq!(inside, expected_gun);
        assert_eq!(outside, locs(&[(10, 24), (11, 25), (11, 26), (12, 24), (12, 25)]));

        for _ in 0..4 {
            world.update();
        }
        let outside: Vec<Loc> = live_locs(&world)
            .into_iter()
            .filter(|loc| !in_gun_box(*loc, origin))
            .collect();
        assert_eq!(outside, locs(&[(11, 25), (12, 26), (12, 27), (13, 25), (13, 26)]));

        for _ in 34..60 {
            world.update();
        }
        assert_eq!(world.num_alive(), 46);

        let gun_box = |world: &ConwayWorld| -> Vec<Loc> {
            live_locs(world)
                .into_iter()
                .filter(|loc| in_gun_box(*loc, origin))
                .collect()
        };
        let at_60 = gun_box(&world);
        for _ in 60..90 {
            world.update();
        }
        assert_eq!(gun_box(&world), at_60);
    }
}
