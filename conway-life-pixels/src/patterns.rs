use life_grid::Loc;

/// Gosper's glider gun as `(row, col)` offsets within its 9x36 bounding box. Emits a glider
/// toward increasing rows and columns every 30 generations.
pub const GOSPER_GLIDER_GUN: &[(u32, u32)] = &[
    (0, 24),
    (1, 22),
    (1, 24),
    (2, 12),
    (2, 13),
    (2, 20),
    (2, 21),
    (2, 34),
    (2, 35),
    (3, 11),
    (3, 15),
    (3, 20),
    (3, 21),
    (3, 34),
    (3, 35),
    (4, 0),
    (4, 1),
    (4, 10),
    (4, 16),
    (4, 20),
    (4, 21),
    (5, 0),
    (5, 1),
    (5, 10),
    (5, 14),
    (5, 16),
    (5, 17),
    (5, 22),
    (5, 24),
    (6, 10),
    (6, 16),
    (6, 24),
    (7, 11),
    (7, 15),
    (8, 12),
    (8, 13),
];

/// The gun with its top-left corner at `origin`, or `None` if any cell's coordinate would
/// overflow `u32`.
pub fn gosper_glider_gun(origin: Loc) -> Option<Vec<Loc>> {
    translate(GOSPER_GLIDER_GUN, origin)
}

fn translate(cells: &[(u32, u32)], origin: Loc) -> Option<Vec<Loc>> {
    cells
        .iter()
        .map(|&(row, col)| {
            Some(Loc::new(
                origin.row.checked_add(row)?,
                origin.col.checked_add(col)?,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn gun_fits_its_bounding_box() {
        assert_eq!(GOSPER_GLIDER_GUN.len(), 36);
        let distinct: HashSet<_> = GOSPER_GLIDER_GUN.iter().collect();
        assert_eq!(distinct.len(), GOSPER_GLIDER_GUN.len());

        let max_row = GOSPER_GLIDER_GUN.iter().map(|&(row, _)| row).max();
        let max_col = GOSPER_GLIDER_GUN.iter().map(|&(_, col)| col).max();
        assert_eq!(max_row, Some(8));
        assert_eq!(max_col, Some(35));
    }

    #[test]
    fn gun_is_translated_to_origin() {
        let gun = gosper_glider_gun(Loc::new(2, 3)).unwrap();
        assert_eq!(gun[0], Loc::new(2, 27));
        assert_eq!(gun[35], Loc::new(10, 16));
    }

    #[test]
    fn origin_too_close_to_u32_max_is_refused() {
        assert_eq!(gosper_glider_gun(Loc::new(u32::MAX - 7, 0)), None);
        assert_eq!(gosper_glider_gun(Loc::new(0, u32::MAX - 34)), None);

        let gun = gosper_glider_gun(Loc::new(u32::MAX - 8, u32::MAX - 35)).unwrap();
        assert!(gun.contains(&Loc::new(u32::MAX, u32::MAX - 23)));
    }
}
