//! RGB color value type and the weighted distance metric used for matching

/// An 8-bit-per-channel RGB color
///
/// Plain value type with no identity; alpha is flattened before colors are
/// ever produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    /// Red channel, 0-255
    pub red: u8,
    /// Green channel, 0-255
    pub green: u8,
    /// Blue channel, 0-255
    pub blue: u8,
}

impl Rgb {
    /// Create a color from raw channel values
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

impl From<image::Rgb<u8>> for Rgb {
    fn from(pixel: image::Rgb<u8>) -> Self {
        let [red, green, blue] = pixel.0;
        Self { red, green, blue }
    }
}

impl From<Rgb> for image::Rgb<u8> {
    fn from(color: Rgb) -> Self {
        Self([color.red, color.green, color.blue])
    }
}

/// Weighted Euclidean distance between two colors
///
/// The red and blue weights shift with the mean red level of the pair:
///
/// ```text
/// rmean = (c1.red + c2.red) / 2
/// d = sqrt((2 + rmean/256)*dr^2 + 4*dg^2 + (2 + (255 - rmean)/256)*db^2)
/// ```
///
/// Matching output was tuned against this exact form; the weighting must not
/// be reshaped. With 8-bit channels the largest attainable value is roughly
/// 765 (black against white).
pub fn distance(c1: Rgb, c2: Rgb) -> f64 {
    let rmean = (f64::from(c1.red) + f64::from(c2.red)) / 2.0;
    let dr = f64::from(c1.red) - f64::from(c2.red);
    let dg = f64::from(c1.green) - f64::from(c2.green);
    let db = f64::from(c1.blue) - f64::from(c2.blue);

    let weight_r = 2.0 + rmean / 256.0;
    let weight_g = 4.0;
    let weight_b = 2.0 + (255.0 - rmean) / 256.0;

    (weight_r * dr * dr + weight_g * dg * dg + weight_b * db * db).sqrt()
}
