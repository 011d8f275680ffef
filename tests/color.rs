mod tests {
    use maverick_clock::color::{
        BLACK, COLOR_CHOICES, ColorSettings, RAINBOW, Rgb, WHITE, rgb_from_u32, wrap_index,
    };

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(rgb_from_u32(0x0050EF), Rgb { r: 0, g: 80, b: 239 });
        assert_eq!(rgb_from_u32(0xFFFFFF), WHITE);
        assert_eq!(rgb_from_u32(0), BLACK);
    }

    #[test]
    fn test_wrap_index() {
        assert_eq!(wrap_index(0, 1, 15), 1);
        assert_eq!(wrap_index(14, 1, 15), 0);
        assert_eq!(wrap_index(0, -1, 15), 14);
        assert_eq!(wrap_index(3, 100, 15), 0);
        assert_eq!(wrap_index(3, -100, 15), 14);
        assert_eq!(wrap_index(3, 0, 15), 3);
        assert_eq!(wrap_index(5, 1, 0), 0);
    }

    #[test]
    fn test_palettes() {
        assert_eq!(COLOR_CHOICES.len(), 15);
        assert_eq!(COLOR_CHOICES[0], Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(COLOR_CHOICES[8], BLACK);
        assert_eq!(RAINBOW[1], Rgb { r: 255, g: 69, b: 0 });
    }

    #[test]
    fn test_default_settings() {
        let colors = ColorSettings::default();
        assert_eq!(colors.digit, WHITE);
        assert_eq!(colors.background, BLACK);
    }
}
