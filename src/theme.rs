use image::Rgb;

pub(crate) const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

pub(crate) const LIVED: Rgb<u8> = Rgb([0, 0, 255]);

pub(crate) const REMAINING: Rgb<u8> = Rgb([128, 128, 128]);
