mod tests {
    use maverick_clock::OutputDriver;
    use maverick_clock::clock_face::{ClockFace, TimeInDigits};
    use maverick_clock::color::{BLACK, ColorSettings, Rgb};
    use maverick_clock::glyph::{Digit, GlyphLayout, PIXELS_PER_DIGIT, TailPatch};
    use maverick_clock::layout::{ClockLayout, DigitPosition};
    use maverick_clock::prerender::DigitCache;
    use maverick_clock::strip::{PixelStrip, StripError};

    const DIGIT: Rgb = Rgb { r: 0, g: 200, b: 50 };
    const BACKGROUND: Rgb = Rgb { r: 10, g: 0, b: 20 };
    const COLORS: ColorSettings = ColorSettings::new(DIGIT, BACKGROUND);

    #[derive(Default)]
    struct FrameRecorder {
        frames: Vec<Vec<Rgb>>,
    }

    impl OutputDriver for FrameRecorder {
        fn write(&mut self, colors: &[Rgb]) {
            self.frames.push(colors.to_vec());
        }
    }

    fn digit(value: u8) -> Digit {
        Digit::new(value).unwrap()
    }

    fn time(digits: [u8; 4]) -> TimeInDigits {
        TimeInDigits::new(digits.map(digit))
    }

    fn face(buffer: &mut [Rgb]) -> ClockFace<'_, FrameRecorder> {
        let len = buffer.len();
        let strip = PixelStrip::new(buffer, len).unwrap();
        ClockFace::new(strip, FrameRecorder::default(), ClockLayout::MAVERICK, COLORS).unwrap()
    }

    #[test]
    fn test_digit_rejects_values_above_nine() {
        assert!(Digit::new(9).is_some());
        assert!(Digit::new(10).is_none());
        assert_eq!(Digit::ones_of(1234).value(), 4);
    }

    #[test]
    fn test_prerender_reproduces_glyph_bits() {
        let mut cache = DigitCache::new();
        cache.prerender(COLORS);
        assert_eq!(cache.colors(), Some(COLORS));

        for layout in GlyphLayout::ALL {
            for value in 0..10 {
                let digit = digit(value);
                let pattern = layout.pattern(digit);
                let pixels = cache.entry(layout, digit);
                for (i, &pixel) in pixels.iter().enumerate() {
                    let lit = pattern & (1 << (15 - i)) != 0;
                    let expected = if lit { DIGIT } else { BACKGROUND };
                    assert_eq!(pixel, expected, "{layout:?} digit {value} pixel {i}");
                    assert_eq!(layout.is_lit(digit, i), lit);
                }
            }
        }
    }

    #[test]
    fn test_new_rejects_short_strip() {
        let mut buffer = [BLACK; 60];
        let strip = PixelStrip::new(&mut buffer, 60).unwrap();
        let result = ClockFace::new(
            strip,
            FrameRecorder::default(),
            ClockLayout::MAVERICK,
            COLORS,
        );
        assert!(matches!(result, Err(StripError::LayoutDoesNotFit)));
    }

    #[test]
    fn test_layout_with_overflowing_start_does_not_fit() {
        let mut layout = ClockLayout::MAVERICK;
        assert!(layout.fits());
        layout.slots[2].start = usize::MAX - 4;
        assert!(!layout.fits());

        let mut layout = ClockLayout::MAVERICK;
        layout.tail_start = usize::MAX;
        assert!(!layout.fits());

        let mut buffer = [BLACK; 64];
        let strip = PixelStrip::new(&mut buffer, 64).unwrap();
        let result = ClockFace::new(strip, FrameRecorder::default(), layout, COLORS);
        assert!(matches!(result, Err(StripError::LayoutDoesNotFit)));
    }

    #[test]
    fn test_new_paints_background() {
        let mut buffer = [BLACK; 64];
        let face = face(&mut buffer);
        assert!(face.strip().pixels().iter().all(|&pixel| pixel == BACKGROUND));
        assert!(face.output().frames.is_empty());
    }

    #[test]
    fn test_render_digit_if_changed_is_idempotent() {
        let mut buffer = [BLACK; 64];
        let mut face = face(&mut buffer);

        assert!(face.render_digit_if_changed(DigitPosition::HoursOnes, digit(7)));
        let after_first = face.strip().pixels().to_vec();

        // Scribble over the digit; an unchanged value must not repaint it
        face.strip_mut().set_pixel(16, BLACK);
        assert!(face.render_digit_if_changed(DigitPosition::HoursOnes, digit(7)));
        assert_eq!(face.strip().pixels(), &after_first[..]);
        assert!(!face.render_digit_if_changed(DigitPosition::HoursOnes, digit(7)));
        assert_eq!(face.strip().pixels(), &after_first[..]);

        assert!(face.render_digit_if_changed(DigitPosition::HoursOnes, digit(8)));
    }

    #[test]
    fn test_render_time_copies_full_digits() {
        let mut buffer = [BLACK; 64];
        let mut face = face(&mut buffer);
        face.render_time(&time([1, 2, 3, 4]));

        let mut cache = DigitCache::new();
        cache.prerender(COLORS);
        let pixels = face.strip().pixels();
        for (start, layout, value) in [
            (1, GlyphLayout::Up, 1),
            (16, GlyphLayout::Down, 2),
            (36, GlyphLayout::Down, 3),
        ] {
            assert_eq!(
                &pixels[start..start + PIXELS_PER_DIGIT],
                &cache.entry(layout, digit(value))[..]
            );
        }
        assert_eq!(face.output().frames.len(), 1);
        assert_eq!(face.output().frames[0], pixels);
    }

    #[test]
    fn test_short_digit_tail_patch() {
        const D: Rgb = DIGIT;
        const B: Rgb = BACKGROUND;
        let tails: [[Rgb; 3]; 10] = [
            [D, B, D],
            [D, B, D],
            [B, B, D],
            [D, B, D],
            [B, B, D],
            [D, B, B],
            [D, B, B],
            [B, B, D],
            [D, B, D],
            [B, B, D],
        ];

        let mut buffer = [BLACK; 64];
        let mut face = face(&mut buffer);
        for (value, tail) in (0..10).zip(tails) {
            face.render_digit_if_changed(DigitPosition::MinutesOnes, digit(value));
            assert_eq!(&face.strip().pixels()[61..64], &tail, "digit {value}");
        }
    }

    #[test]
    fn test_short_digit_copies_ten_pixels() {
        let mut buffer = [BLACK; 64];
        let mut face = face(&mut buffer);
        face.render_digit_if_changed(DigitPosition::MinutesOnes, digit(8));

        let mut cache = DigitCache::new();
        cache.prerender(COLORS);
        let expected = cache.entry(GlyphLayout::Up, digit(8));
        assert_eq!(&face.strip().pixels()[51..61], &expected[..10]);
        // Pixel 0 sits outside every digit and keeps the background
        assert_eq!(face.strip().pixel(0), Some(BACKGROUND));
    }

    fn assert_face_shows(pixels: &[Rgb], shown: [u8; 4]) {
        let mut cache = DigitCache::new();
        cache.prerender(COLORS);
        let [hours_tens, hours_ones, minutes_tens, minutes_ones] = shown.map(digit);
        assert_eq!(&pixels[1..15], &cache.entry(GlyphLayout::Up, hours_tens)[..14]);
        assert_eq!(&pixels[16..30], &cache.entry(GlyphLayout::Down, hours_ones)[..14]);
        assert_eq!(&pixels[36..50], &cache.entry(GlyphLayout::Down, minutes_tens)[..14]);
        assert_eq!(&pixels[51..61], &cache.entry(GlyphLayout::Up, minutes_ones)[..10]);

        let patch = TailPatch::for_digit(minutes_ones);
        let tail = [
            if patch.first_lit() { DIGIT } else { BACKGROUND },
            BACKGROUND,
            if patch.last_lit() { DIGIT } else { BACKGROUND },
        ];
        assert_eq!(&pixels[61..64], &tail);
    }

    #[test]
    fn test_force_render_repaints_unchanged_digits() {
        let mut buffer = [BLACK; 64];
        let mut face = face(&mut buffer);
        let shown = time([1, 2, 3, 4]);
        face.render_time(&shown);

        face.strip_mut().set_strip_constant(BLACK);
        face.force_render(&shown);
        assert_face_shows(face.strip().pixels(), [1, 2, 3, 4]);
        assert_eq!(face.output().frames.len(), 2);
        assert_face_shows(&face.output().frames[1], [1, 2, 3, 4]);
    }

    #[test]
    fn test_force_render_ignores_and_updates_tracking() {
        let mut buffer = [BLACK; 64];
        let mut face = face(&mut buffer);
        face.render_time(&time([8, 8, 8, 8]));

        // Every position already tracks 8, so only a forced write reaches them
        face.force_render(&time([8, 8, 8, 8]));
        assert_face_shows(face.strip().pixels(), [8, 8, 8, 8]);

        face.force_render(&time([0, 6, 5, 9]));
        assert_face_shows(face.strip().pixels(), [0, 6, 5, 9]);
        assert_face_shows(face.output().frames.last().unwrap(), [0, 6, 5, 9]);

        // The forced digits are now the tracked ones
        assert!(!face.render_digit_if_changed(DigitPosition::HoursTens, digit(0)));
        assert!(!face.render_digit_if_changed(DigitPosition::MinutesOnes, digit(9)));
        assert!(face.render_digit_if_changed(DigitPosition::MinutesOnes, digit(8)));
    }

    #[test]
    fn test_prerender_switches_colors() {
        let mut buffer = [BLACK; 64];
        let mut face = face(&mut buffer);
        face.render_time(&time([1, 2, 3, 4]));

        let inverted = ColorSettings::new(BACKGROUND, DIGIT);
        face.prerender(inverted);
        assert_eq!(face.colors(), inverted);
        face.render_time(&time([1, 2, 3, 4]));

        let pixels = face.strip().pixels();
        assert_eq!(pixels[0], DIGIT);
        for i in 0..PIXELS_PER_DIGIT {
            let lit = GlyphLayout::Up.is_lit(digit(1), i);
            assert_eq!(pixels[1 + i], if lit { BACKGROUND } else { DIGIT });
        }
    }

    #[test]
    fn test_clear_and_render() {
        let mut buffer = [BLACK; 64];
        let mut face = face(&mut buffer);
        face.render_time(&time([1, 2, 3, 4]));
        face.clear_and_render();
        assert_eq!(face.output().frames.last().unwrap(), &vec![BLACK; 64]);
    }
}
