mod tests {
    use myrtio_bulb_scene::color::{BulbHsv, Hsv, Rgb, rgb_to_bulb_hsv};
    use myrtio_bulb_scene::{Frame, FrameError, FrameField, TransitionStyle};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    #[test]
    fn test_rgb_to_bulb_hsv_primaries() {
        assert_eq!(
            rgb_to_bulb_hsv(RED),
            BulbHsv {
                hue: 0,
                saturation: 100.0,
                value: 100.0
            }
        );
        assert_eq!(rgb_to_bulb_hsv(GREEN).hue, 120);
        assert_eq!(rgb_to_bulb_hsv(BLUE).hue, 240);
    }

    #[test]
    fn test_rgb_to_bulb_hsv_secondaries() {
        assert_eq!(rgb_to_bulb_hsv(Rgb::new(255, 255, 0)).hue, 60);
        assert_eq!(rgb_to_bulb_hsv(Rgb::new(0, 255, 255)).hue, 180);
        assert_eq!(rgb_to_bulb_hsv(Rgb::new(255, 0, 255)).hue, 300);
    }

    #[test]
    fn test_rgb_to_bulb_hsv_gray() {
        let hsv = rgb_to_bulb_hsv(Rgb::new(51, 51, 51));
        assert_eq!(hsv.hue, 0);
        assert_eq!(hsv.saturation, 0.0);
        assert!((hsv.value - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_hsv8_to_bulb_hsv() {
        let hsv = BulbHsv::from(Hsv {
            hue: 128,
            sat: 255,
            val: 255,
        });
        assert_eq!(hsv.hue, 180);
        assert_eq!(hsv.saturation, 100.0);
        assert_eq!(hsv.value, 100.0);

        let hsv = BulbHsv::from(Hsv {
            hue: 255,
            sat: 0,
            val: 255,
        });
        assert_eq!(hsv.hue, 358);
    }

    #[test]
    fn test_frame_from_rgb() {
        let frame = Frame::color_from_rgb(1.0, TransitionStyle::Flash, RED).unwrap();
        assert_eq!(frame.get_data(), "5f5f01000003e803e800000000");

        let frame = Frame::color_from_rgb(1.0, TransitionStyle::Static, BLUE).unwrap();
        assert_eq!(frame.hue(), 240);
    }

    #[test]
    fn test_frame_from_black_is_rejected() {
        assert_eq!(
            Frame::color_from_rgb(1.0, TransitionStyle::Static, BLACK),
            Err(FrameError::OutOfRange {
                field: FrameField::Value,
                value: 0.0,
            })
        );
    }
}
