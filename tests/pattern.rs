mod tests {
    use embassy_time::Duration;
    use maverick_clock::color::{BLACK, RAINBOW, Rgb, WHITE};
    use maverick_clock::pattern::{
        Pattern, PatternId, PopcornPattern, PopcornVariant, RainbowCrossingPattern,
        SineWavePattern, SinglePixelSweepPattern, SnakePattern,
    };
    use maverick_clock::strip::PixelStrip;

    fn lit(strip: &PixelStrip<'_>) -> Vec<usize> {
        (0..strip.len())
            .filter(|&index| strip.pixel(index) != Some(BLACK))
            .collect()
    }

    #[test]
    fn test_pattern_ids() {
        for (index, id) in PatternId::ALL.into_iter().enumerate() {
            assert_eq!(id.index(), index);
            assert_eq!(PatternId::from_raw(u8::try_from(index).unwrap()), Some(id));
            assert_eq!(id.to_slot().id(), id);
        }
        assert_eq!(PatternId::from_raw(7), None);
    }

    #[test]
    fn test_sweep_lights_one_more_pixel_per_step() {
        const FACE: Rgb = Rgb { r: 1, g: 1, b: 1 };
        let mut buffer = [BLACK; 64];
        let mut strip = PixelStrip::new(&mut buffer, 64).unwrap();
        strip.set_strip_constant(FACE);
        let mut sweep = SinglePixelSweepPattern::new();

        // The first pass draws over the face instead of blanking it
        assert_eq!(sweep.step(&mut strip), Duration::from_millis(50));
        assert_eq!(strip.pixel(0), Some(WHITE));
        assert!(strip.pixels()[1..].iter().all(|&pixel| pixel == FACE));

        for _ in 1..64 {
            sweep.step(&mut strip);
        }
        assert!(strip.pixels().iter().all(|&pixel| pixel == WHITE));
        assert_eq!(sweep.index(), 0);

        // The next pass starts from a black strip
        sweep.step(&mut strip);
        assert_eq!(lit(&strip), vec![0]);
        assert_eq!(sweep.index(), 1);

        sweep.step(&mut strip);
        assert_eq!(lit(&strip), vec![0, 1]);
    }

    #[test]
    fn test_sweep_reset_draws_over_strip_again() {
        const FACE: Rgb = Rgb { r: 1, g: 1, b: 1 };
        let mut buffer = [BLACK; 4];
        let mut strip = PixelStrip::new(&mut buffer, 4).unwrap();
        let mut sweep = SinglePixelSweepPattern::new();
        for _ in 0..4 {
            sweep.step(&mut strip);
        }

        sweep.reset();
        strip.set_strip_constant(FACE);
        sweep.step(&mut strip);
        assert_eq!(strip.pixels(), &[WHITE, FACE, FACE, FACE]);
    }

    #[test]
    fn test_rainbow_crossing_columns() {
        let mut buffer = [BLACK; 64];
        let mut strip = PixelStrip::new(&mut buffer, 64).unwrap();
        let mut rainbow = RainbowCrossingPattern::new(Duration::from_millis(0));

        assert_eq!(rainbow.step(&mut strip), Duration::from_millis(0));
        assert_eq!(lit(&strip), vec![0]);

        rainbow.step(&mut strip);
        assert_eq!(lit(&strip), vec![0, 2, 3, 4]);

        rainbow.step(&mut strip);
        assert_eq!(lit(&strip), vec![0, 1, 2, 3, 4, 5, 7, 8, 9]);
        assert_eq!(strip.pixel(5), Some(RAINBOW[0]));
    }

    #[test]
    fn test_rainbow_crossing_fills_face_then_changes_band() {
        let mut buffer = [BLACK; 64];
        let mut strip = PixelStrip::new(&mut buffer, 64).unwrap();
        let mut rainbow = RainbowCrossingPattern::new(Duration::from_millis(75));

        for _ in 0..14 {
            assert_eq!(rainbow.step(&mut strip), Duration::from_millis(75));
        }
        assert!(strip.pixels().iter().all(|&pixel| pixel == RAINBOW[0]));
        assert_eq!(rainbow.column(), 0);
        assert_eq!(rainbow.band_color(), RAINBOW[1]);

        rainbow.step(&mut strip);
        assert_eq!(strip.pixel(0), Some(RAINBOW[1]));

        rainbow.reset();
        assert_eq!(rainbow.band_color(), RAINBOW[0]);
    }

    #[test]
    fn test_popcorn_pops_at_most_eight_pixels() {
        let mut buffer = [BLACK; 64];
        let mut strip = PixelStrip::new(&mut buffer, 64).unwrap();
        let mut popcorn = PopcornPattern::new(PopcornVariant::Fresh);

        for _ in 0..20 {
            assert_eq!(popcorn.step(&mut strip), Duration::from_millis(150));
            assert!(lit(&strip).len() <= 8);
        }
    }

    #[test]
    fn test_popcorn_hold_clears_every_eight_frames() {
        let mut buffer = [BLACK; 64];
        let mut strip = PixelStrip::new(&mut buffer, 64).unwrap();
        let mut popcorn = PopcornPattern::new(PopcornVariant::Accumulate);

        for _ in 0..8 {
            popcorn.step(&mut strip);
        }
        popcorn.step(&mut strip);
        assert!(lit(&strip).len() <= 8);
    }

    #[test]
    fn test_popcorn_stays_on_short_strips() {
        let mut buffer = [BLACK; 3];
        let mut strip = PixelStrip::new(&mut buffer, 3).unwrap();
        let mut popcorn = PopcornPattern::new(PopcornVariant::Accumulate);
        for _ in 0..50 {
            popcorn.step(&mut strip);
        }
        assert_eq!(strip.len(), 3);
    }

    #[test]
    fn test_sine_wave_brightness_follows_position() {
        let mut buffer = [BLACK; 64];
        let mut strip = PixelStrip::new(&mut buffer, 64).unwrap();
        let mut wave = SineWavePattern::new();

        wave.step(&mut strip);
        // A quarter wave in is the crest, three quarters in the trough
        let crest = strip.pixel(4).unwrap();
        assert_ne!(crest, BLACK);
        assert_eq!(strip.pixel(12), Some(BLACK));
        assert_eq!(strip.pixel(20), Some(crest));

        for _ in 1..32 {
            wave.step(&mut strip);
        }
        assert_eq!(wave.hue(), 8);
    }

    #[test]
    fn test_snake_grows_and_wraps() {
        let mut buffer = [BLACK; 64];
        let mut strip = PixelStrip::new(&mut buffer, 64).unwrap();
        let mut snake = SnakePattern::new();

        snake.step(&mut strip);
        assert_eq!(snake.head(), Some(0));
        assert_eq!(lit(&strip), vec![0]);

        for _ in 1..9 {
            snake.step(&mut strip);
        }
        assert_eq!(snake.len(), 2);
        assert_eq!(lit(&strip), vec![7, 8]);

        for _ in 0..500 {
            snake.step(&mut strip);
            assert!(snake.len() <= 16);
            assert!(snake.head().is_some_and(|head| head < 64));
            assert_ne!(snake.color(), BLACK);
        }
    }
}
