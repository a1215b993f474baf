use super::*;

#[test]
fn black_background_gets_light_text() {
    assert_eq!(resolve_foreground("#000000"), LIGHT_FOREGROUND);
}

#[test]
fn white_background_gets_dark_text() {
    assert_eq!(resolve_foreground("#FFFFFF"), DARK_FOREGROUND);
    assert_eq!(resolve_foreground("hsl(0, 0%, 100%)"), DARK_FOREGROUND);
}

#[test]
fn threshold_is_exclusive() {
    // Grey 128 has brightness exactly 128.
    let at = Rgb::new(128, 128, 128);
    assert!((brightness(at) - 128.0).abs() < 1e-9);
    assert_eq!(classify_rgb(at), Foreground::Light);

    let above = Rgb::new(129, 129, 129);
    assert_eq!(classify_rgb(above), Foreground::Dark);
}

#[test]
fn weights_favor_green() {
    assert_eq!(resolve_foreground("#00FF00"), DARK_FOREGROUND);
    assert_eq!(resolve_foreground("#FF0000"), LIGHT_FOREGROUND);
    assert_eq!(resolve_foreground("#0000FF"), LIGHT_FOREGROUND);
}

#[test]
fn output_is_always_one_of_two_constants_and_monotonic() {
    for v in 0..=255_u8 {
        for rgb in [Rgb::new(v, v, v), Rgb::new(v, 0, 0), Rgb::new(0, v, 0), Rgb::new(0, 0, v), Rgb::new(v, 200, 40)] {
            let fg = resolve_foreground(&rgb.to_hex());
            assert!(fg == DARK_FOREGROUND || fg == LIGHT_FOREGROUND);
            let expected = if brightness(rgb) > BRIGHTNESS_THRESHOLD { DARK_FOREGROUND } else { LIGHT_FOREGROUND };
            assert_eq!(fg, expected, "{rgb}");
        }
    }
}

#[test]
fn malformed_background_is_treated_as_dark() {
    assert_eq!(resolve_foreground("not-a-color"), LIGHT_FOREGROUND);
    assert_eq!(resolve_foreground(""), LIGHT_FOREGROUND);
    assert_eq!(resolve_foreground("hsl(nope)"), LIGHT_FOREGROUND);
}

#[test]
fn with_alpha_formats_rgba_and_clamps() {
    assert_eq!(Foreground::Dark.with_alpha(0.7), "rgba(0, 0, 0, 0.7)");
    assert_eq!(Foreground::Light.with_alpha(2.0), "rgba(255, 255, 255, 1)");
    assert_eq!(Foreground::Light.with_alpha(f64::NAN), "rgba(255, 255, 255, 1)");
}

#[test]
fn hex_and_rgb_agree() {
    assert_eq!(Foreground::Dark.rgb().to_hex(), Foreground::Dark.hex());
    assert_eq!(Foreground::Light.rgb().to_hex(), Foreground::Light.hex());
}
