#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    use kerfnest::entities::{PieceSpec, Solution};
    use kerfnest::util::assertions;
    use kerfnest::{Axis, NestError, PackingConfig, expand_pieces};
    use shelf::config::ShelfConfig;
    use shelf::io::plan_report;
    use shelf::opt::shelf_packer::{ShelfPacker, pack};

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    fn packer(sheet_width: f64, sheet_height: f64, kerf: f64) -> ShelfPacker {
        ShelfPacker::new(ShelfConfig {
            packing: PackingConfig::new(sheet_width, sheet_height, kerf).unwrap(),
            validate_layouts: true,
        })
    }

    fn spec(id: usize, w: f64, h: f64, qty: usize) -> PieceSpec {
        PieceSpec::new(id, w, h, qty, format!("piece {id}")).unwrap()
    }

    fn positions(solution: &Solution) -> Vec<(usize, usize, f64, f64)> {
        solution
            .placed_pieces()
            .map(|pp| (pp.id, pp.sheet_index, pp.x, pp.y))
            .collect()
    }

    #[test]
    fn plywood_panels_on_a_single_sheet() {
        init_logger();
        let specs = vec![spec(1, 600.0, 400.0, 2), spec(2, 300.0, 300.0, 1)];
        let solution = packer(1210.0, 2430.0, 12.7).solve(&specs).unwrap();

        assert_eq!(solution.n_sheets(), 1);
        let pieces = solution.sheets[0].placed_pieces();
        assert_eq!(pieces.len(), 3);

        // 612.7 + 612.7 > 1210: the second copy of piece 1 opens a new row
        let expected = [(1, 0.0, 0.0), (1, 0.0, 412.7), (2, 612.7, 412.7)];
        for (pp, (id, x, y)) in pieces.iter().zip(expected) {
            assert_eq!(pp.id, id);
            assert!(approx_eq!(f64, pp.x, x, epsilon = 1e-9), "x: {} vs {}", pp.x, x);
            assert!(approx_eq!(f64, pp.y, y, epsilon = 1e-9), "y: {} vs {}", pp.y, y);
        }
        // nominal sizes are kept
        assert_eq!((pieces[0].width, pieces[0].height), (600.0, 400.0));
        assert_eq!((pieces[2].width, pieces[2].height), (300.0, 300.0));
        assert!(assertions::solution_covers_demand(&solution, &specs));
    }

    #[test]
    fn full_width_piece_fills_its_row() {
        // 90 + 10 == sheet width
        let specs = vec![spec(1, 90.0, 30.0, 1), spec(2, 10.0, 20.0, 1)];
        let solution = packer(100.0, 100.0, 10.0).solve(&specs).unwrap();

        assert_eq!(
            positions(&solution),
            vec![(1, 0, 0.0, 0.0), (2, 0, 0.0, 40.0)]
        );
    }

    #[test]
    fn full_height_piece_fills_its_sheet() {
        let specs = vec![spec(1, 40.0, 90.0, 1), spec(2, 40.0, 90.0, 1), spec(3, 40.0, 90.0, 1)];
        let solution = packer(100.0, 100.0, 10.0).solve(&specs).unwrap();

        assert_eq!(
            positions(&solution),
            vec![(1, 0, 0.0, 0.0), (2, 0, 50.0, 0.0), (3, 1, 0.0, 0.0)]
        );
    }

    #[test_case(40.0, 95.0, Axis::Height; "too tall")]
    #[test_case(95.0, 40.0, Axis::Width; "too wide")]
    fn oversized_piece_rejects_the_whole_run(w: f64, h: f64, axis: Axis) {
        let specs = vec![spec(1, 40.0, 40.0, 3), spec(2, w, h, 1), spec(3, 10.0, 10.0, 2)];
        match packer(100.0, 100.0, 10.0).solve(&specs) {
            Err(NestError::PieceExceedsSheet {
                id, axis: a, size, limit,
            }) => {
                assert_eq!(id, 2);
                assert_eq!(a, axis);
                assert_eq!(size, 105.0);
                assert_eq!(limit, 100.0);
            }
            other => panic!("expected PieceExceedsSheet, got {other:?}"),
        }
    }

    #[test]
    fn invalid_spec_is_reported_before_oversized_piece() {
        let mut zero_qty = spec(4, 10.0, 10.0, 1);
        zero_qty.quantity = 0;
        let specs = vec![spec(1, 500.0, 500.0, 1), zero_qty];
        assert!(matches!(
            packer(100.0, 100.0, 1.0).solve(&specs),
            Err(NestError::InvalidPieceSpec { id: 4, .. })
        ));
    }

    #[test]
    fn negative_dimension_is_rejected() {
        let mut negative = spec(8, 10.0, 10.0, 1);
        negative.width = -10.0;
        assert!(matches!(
            packer(100.0, 100.0, 1.0).solve(&[negative]),
            Err(NestError::InvalidPieceSpec { id: 8, .. })
        ));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let packer = ShelfPacker::new(ShelfConfig {
            packing: PackingConfig {
                sheet_width: 0.0,
                sheet_height: 100.0,
                kerf: 1.0,
            },
            validate_layouts: false,
        });
        assert!(matches!(
            packer.solve(&[spec(1, 10.0, 10.0, 1)]),
            Err(NestError::InvalidConfig(_))
        ));
    }

    #[test]
    fn empty_input_yields_no_sheets() {
        let solution = packer(1210.0, 2430.0, 12.7).solve(&[]).unwrap();
        assert_eq!(solution.n_sheets(), 0);
        assert_eq!(solution.n_pieces(), 0);
        assert!(pack(&[], &PackingConfig::default()).unwrap().is_empty());
    }

    #[test]
    fn sheets_are_numbered_contiguously() {
        // two 40 high rows per sheet
        let specs = vec![spec(1, 100.0, 40.0, 5)];
        let solution = packer(100.0, 100.0, 0.0).solve(&specs).unwrap();

        assert_eq!(solution.n_sheets(), 3);
        let per_sheet = solution.sheets.iter().map(|s| s.n_pieces()).collect::<Vec<_>>();
        assert_eq!(per_sheet, vec![2, 2, 1]);
        assert!(assertions::sheets_indexed_contiguously(&solution.sheets));
    }

    #[test]
    fn pack_is_usable_without_the_packer() {
        let config = PackingConfig::new(100.0, 100.0, 0.0).unwrap();
        let instances = expand_pieces(&[spec(1, 50.0, 50.0, 4)], config.kerf).unwrap();
        let sheets = pack(&instances, &config).unwrap();
        assert_eq!(sheets.len(), 1);
        let origins = sheets[0]
            .placed_pieces()
            .iter()
            .map(|pp| (pp.x, pp.y))
            .collect::<Vec<_>>();
        assert_eq!(origins, vec![(0.0, 0.0), (50.0, 0.0), (0.0, 50.0), (50.0, 50.0)]);
    }

    fn random_specs(rng: &mut SmallRng, config: &PackingConfig, n_specs: usize) -> Vec<PieceSpec> {
        (0..n_specs)
            .map(|id| {
                let w = rng.random_range(1.0..=config.sheet_width - config.kerf);
                let h = rng.random_range(1.0..=config.sheet_height - config.kerf);
                let qty = rng.random_range(1..=6);
                spec(id, w, h, qty)
            })
            .collect()
    }

    #[test_case(0, 1210.0, 2430.0, 12.7; "plywood")]
    #[test_case(1, 1220.0, 2440.0, 3.175; "thin kerf")]
    #[test_case(2, 500.0, 300.0, 0.0; "no kerf")]
    #[test_case(3, 100.0, 100.0, 25.0; "wide kerf")]
    fn random_catalogs_are_packed_validly(seed: u64, width: f64, height: f64, kerf: f64) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let config = PackingConfig::new(width, height, kerf).unwrap();

        for _ in 0..20 {
            let specs = random_specs(&mut rng, &config, 12);
            let solution = packer(width, height, kerf).solve(&specs).unwrap();

            let demanded: usize = specs.iter().map(|s| s.quantity).sum();
            assert_eq!(solution.n_pieces(), demanded);
            assert!(assertions::solution_covers_demand(&solution, &specs));
            assert!(assertions::solution_is_valid(&solution));
            assert!(assertions::solution_density_in_range(&solution));
        }
    }

    #[test]
    fn identical_input_gives_identical_plans() {
        let mut rng = SmallRng::seed_from_u64(42);
        let config = PackingConfig::default();
        let specs = random_specs(&mut rng, &config, 25);

        let packer = ShelfPacker::new(ShelfConfig {
            packing: config,
            validate_layouts: false,
        });
        let first = packer.solve(&specs).unwrap();
        let second = packer.solve(&specs).unwrap();
        assert_eq!(first, second);
        assert_eq!(plan_report(&first), plan_report(&second));
    }

    #[test]
    fn report_lists_every_sheet_and_piece() {
        let specs = vec![
            PieceSpec::new(1, 100.0, 40.0, 3, "rail").unwrap(),
            PieceSpec::new(2, 30.0, 20.0, 1, "block").unwrap(),
        ];
        let solution = packer(100.0, 100.0, 0.0).solve(&specs).unwrap();
        let report = plan_report(&solution);

        assert!(report.contains("Sheet 1 ("));
        assert!(report.contains("Sheet 2 ("));
        assert!(!report.contains("Sheet 3 ("));
        assert_eq!(report.matches("rail").count(), 3);
        assert_eq!(report.matches("block").count(), 1);
        assert!(report.contains("Total: 4 pieces on 2 sheets"));
    }
}
