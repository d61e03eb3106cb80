use rand::Rng;

use crate::error::{Constraint, Error, Result};
use crate::tray::{Dimension, Format};

/// Signature shared by the per-format dump functions.
pub type DumpFn = fn(&TrayGenerator, &[Dimension]) -> String;

/// Produces randomly sized blocks for a fixed tray. The size range is
/// checked once at construction and never changes afterwards.
#[derive(Debug, Clone)]
pub struct TrayGenerator {
    tray_size: Dimension,
    num_blocks: Option<usize>,
    min_block_size: Dimension,
    max_block_size: Dimension,
}

impl TrayGenerator {
    pub fn new(
        tray_size: Dimension,
        num_blocks: Option<usize>,
        min_block_size: Dimension,
        max_block_size: Dimension,
    ) -> Result<TrayGenerator> {
        let generator = TrayGenerator {
            tray_size,
            num_blocks,
            min_block_size,
            max_block_size,
        };

        if let Err(c) = generator.check() {
            log::debug!(
                "Rejected tray={} min={} max={}: {}",
                tray_size,
                min_block_size,
                max_block_size,
                c
            );
            return Err(Error::Constraint(c));
        }

        Ok(generator)
    }

    fn check(&self) -> std::result::Result<(), Constraint> {
        let (tray, min, max) = (self.tray_size, self.min_block_size, self.max_block_size);

        if max.area() > tray.area() {
            return Err(Constraint::MaxAreaExceedsTray);
        }
        if min.area() > max.area() {
            return Err(Constraint::MinAreaExceedsMax);
        }
        // The max block has to fit in the tray in both orientations.
        if max.width() > tray.width()
            || max.width() > tray.height()
            || max.height() > tray.width()
            || max.height() > tray.height()
        {
            return Err(Constraint::MaxSideExceedsTray);
        }
        if min.width() > max.width() {
            return Err(Constraint::MinWidthExceedsMax);
        }
        if min.height() > max.height() {
            return Err(Constraint::MinHeightExceedsMax);
        }
        Ok(())
    }

    pub fn tray_size(&self) -> Dimension {
        self.tray_size
    }

    pub fn num_blocks(&self) -> Option<usize> {
        self.num_blocks
    }

    /// Draws blocks until their summed area exceeds the tray area, or until
    /// `num_blocks` blocks exist when a count was given.
    ///
    /// Width and height are drawn independently, so a single block may
    /// exceed the max block area. The last block is kept even when it pushes
    /// the total past the tray area. With no count, a range that allows
    /// zero-area blocks can loop forever.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Dimension> {
        let (min, max) = (self.min_block_size, self.max_block_size);
        let tray_area = u128::from(self.tray_size.area());

        let mut blocks = Vec::new();
        // Two blocks of u32::MAX sides already overflow a u64 sum.
        let mut blocks_area = 0u128;

        loop {
            let width = rng.gen_range(min.width()..=max.width());
            let height = rng.gen_range(min.height()..=max.height());
            let block = Dimension::new(width, height);

            log::trace!("Drew block {}", block);

            blocks_area += u128::from(block.area());
            blocks.push(block);

            if blocks_area > tray_area {
                break;
            }
            if let Some(n) = self.num_blocks {
                if blocks.len() >= n {
                    break;
                }
            }
        }

        log::debug!(
            "Generated {} blocks covering {}/{} of the tray area",
            blocks.len(),
            blocks_area,
            tray_area
        );

        blocks
    }

    pub fn dump(&self, format: Format, blocks: &[Dimension]) -> String {
        format.render(self.tray_size, blocks)
    }

    pub fn dump_data_simple(&self, blocks: &[Dimension]) -> String {
        self.dump(Format::Simple, blocks)
    }

    pub fn dump_data_cplex(&self, blocks: &[Dimension]) -> String {
        self.dump(Format::Cplex, blocks)
    }

    /// Looks up the dump function registered under a format name.
    pub fn dump_function(name: &str) -> Result<DumpFn> {
        match name.parse::<Format>()? {
            Format::Simple => Ok(TrayGenerator::dump_data_simple),
            Format::Cplex => Ok(TrayGenerator::dump_data_cplex),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn generator(
        tray: (u32, u32),
        num_blocks: Option<usize>,
        min: (u32, u32),
        max: (u32, u32),
    ) -> Result<TrayGenerator> {
        TrayGenerator::new(tray.into(), num_blocks, min.into(), max.into())
    }

    fn constraint_of(res: Result<TrayGenerator>) -> Constraint {
        match res {
            Err(Error::Constraint(c)) => c,
            other => panic!("expected a constraint violation, got {other:?}"),
        }
    }

    #[test]
    fn rejects_invalid_ranges() {
        assert_eq!(
            constraint_of(generator((5, 5), None, (1, 1), (10, 10))),
            Constraint::MaxAreaExceedsTray
        );
        assert_eq!(
            constraint_of(generator((10, 10), None, (5, 5), (2, 2))),
            Constraint::MinAreaExceedsMax
        );
        assert_eq!(
            constraint_of(generator((5, 10), None, (1, 1), (20, 1))),
            Constraint::MaxSideExceedsTray
        );
        assert_eq!(
            constraint_of(generator((10, 10), None, (8, 1), (5, 5))),
            Constraint::MinWidthExceedsMax
        );
        assert_eq!(
            constraint_of(generator((10, 10), None, (1, 8), (5, 5))),
            Constraint::MinHeightExceedsMax
        );
    }

    #[test]
    fn max_block_must_fit_both_orientations() {
        // Fits lengthwise but not once rotated.
        assert_eq!(
            constraint_of(generator((4, 10), None, (1, 1), (2, 6))),
            Constraint::MaxSideExceedsTray
        );
        assert!(generator((6, 10), None, (1, 1), (2, 6)).is_ok());
    }

    #[test]
    fn checks_run_in_order() {
        // Violates both the area and the min width relations; area wins.
        assert_eq!(
            constraint_of(generator((10, 10), None, (9, 9), (2, 2))),
            Constraint::MinAreaExceedsMax
        );
    }

    #[test]
    fn accepts_valid_range() {
        let g = generator((10, 10), None, (1, 1), (3, 3)).unwrap();
        assert_eq!(g.tray_size(), Dimension::new(10, 10));
        assert_eq!(g.num_blocks(), None);
        assert!(generator((3, 3), Some(2), (3, 3), (3, 3)).is_ok());
    }

    #[test]
    fn fixed_size_blocks_fill_past_the_tray() {
        let g = generator((10, 10), None, (5, 5), (5, 5)).unwrap();
        for seed in 0..20 {
            let blocks = g.generate(&mut StdRng::seed_from_u64(seed));
            assert_eq!(blocks.len(), 5);
            assert!(blocks.iter().all(|b| *b == Dimension::new(5, 5)));
        }
    }

    #[test]
    fn stops_just_after_exceeding_tray_area() {
        let g = generator((10, 10), None, (1, 1), (3, 3)).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let blocks = g.generate(&mut rng);
            let areas: Vec<u64> = blocks.iter().map(Dimension::area).collect();
            let total: u64 = areas.iter().sum();
            let last = areas.last().copied().unwrap();
            assert!(total > 100);
            assert!(total - last <= 100);
        }
    }

    #[test]
    fn count_bound_stops_at_count() {
        let g = generator((100, 100), Some(3), (1, 1), (10, 10)).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert_eq!(g.generate(&mut rng).len(), 3);
        }
    }

    #[test]
    fn area_bound_wins_over_count() {
        let g = generator((10, 10), Some(50), (5, 5), (5, 5)).unwrap();
        assert_eq!(g.generate(&mut StdRng::seed_from_u64(1)).len(), 5);
    }

    #[test]
    fn largest_blocks_do_not_overflow_area_sum() {
        let side = (u32::MAX, u32::MAX);
        let g = generator(side, None, side, side).unwrap();
        let blocks = g.generate(&mut StdRng::seed_from_u64(5));
        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(|b| *b == Dimension::from(side)));
    }

    #[test]
    fn zero_count_still_yields_one_block() {
        let g = generator((10, 10), Some(0), (1, 1), (2, 2)).unwrap();
        assert_eq!(g.generate(&mut StdRng::seed_from_u64(3)).len(), 1);
    }

    #[test]
    fn blocks_stay_in_range() {
        let g = generator((20, 20), Some(200), (2, 3), (6, 4)).unwrap();
        let blocks = g.generate(&mut StdRng::seed_from_u64(11));
        for b in blocks {
            assert!((2..=6).contains(&b.width()));
            assert!((3..=4).contains(&b.height()));
        }
    }

    #[test]
    fn same_seed_same_blocks() {
        let g = generator((30, 30), None, (1, 1), (9, 9)).unwrap();
        let a = g.generate(&mut StdRng::seed_from_u64(99));
        let b = g.generate(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn dumps() {
        let g = generator((10, 10), None, (1, 1), (5, 5)).unwrap();
        let blocks = [Dimension::new(3, 2), Dimension::new(4, 4)];
        assert_eq!(g.dump_data_simple(&blocks), "10 10 2\n3 2\n4 4\n");
        assert_eq!(
            g.dump_data_cplex(&blocks),
            "Tray = [10, 10];\nNumElements = 2;\nElements = [<3,2>,<4,4>];\n"
        );

        let simple = TrayGenerator::dump_function("simple").unwrap();
        assert_eq!(simple(&g, &blocks), g.dump(Format::Simple, &blocks));
        let cplex = TrayGenerator::dump_function("cplex").unwrap();
        assert_eq!(cplex(&g, &blocks), g.dump(Format::Cplex, &blocks));
    }

    #[test]
    fn unknown_dump_function() {
        assert_eq!(
            TrayGenerator::dump_function("unknown").err(),
            Some(Error::UnknownFormat(String::from("unknown")))
        );
    }
}
