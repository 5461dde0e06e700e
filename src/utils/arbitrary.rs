//! Helpers for using `quickcheck`'s `Arbitrary` trait

use image::ColorType;
use quickcheck::Arbitrary;

/// Every pixel layout `DynamicImage` can hold
const COLOR_TYPES: [ColorType; 10] = [
    ColorType::L8,
    ColorType::La8,
    ColorType::Rgb8,
    ColorType::Rgba8,
    ColorType::L16,
    ColorType::La16,
    ColorType::Rgb16,
    ColorType::Rgba16,
    ColorType::Rgb32F,
    ColorType::Rgba32F,
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ArbitraryColor(pub ColorType);

impl Arbitrary for ArbitraryColor {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Self(*g.choose(&COLOR_TYPES).unwrap())
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        // everything shrinks towards plain 8-bit RGB
        if self.0 == ColorType::Rgb8 {
            quickcheck::empty_shrinker()
        } else {
            quickcheck::single_shrinker(Self(ColorType::Rgb8))
        }
    }
}
