use crate::theme::{BACKGROUND, LIVED, REMAINING};
use image::{Rgb, RgbImage};

pub(crate) const WEEKS_PER_YEAR: u32 = 52;
pub(crate) const CELL_SIZE: u32 = 10;
pub(crate) const DEFAULT_LIFESPAN_YEARS: u32 = 90;

/// A calendar with one cell per week of an assumed lifespan, arranged
/// in year-columns of week-rows.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct LifeGrid {
    lived_weeks: u32,
    total_years: u32,
}

impl LifeGrid {
    pub(crate) fn new(lived_weeks: u32) -> LifeGrid {
        LifeGrid::with_lifespan(lived_weeks, DEFAULT_LIFESPAN_YEARS)
    }

    pub(crate) fn with_lifespan(lived_weeks: u32, total_years: u32) -> LifeGrid {
        LifeGrid {
            lived_weeks,
            total_years,
        }
    }

    fn total_weeks(&self) -> u32 {
        self.total_years * WEEKS_PER_YEAR
    }

    fn width(&self) -> u32 {
        self.total_years * CELL_SIZE
    }

    fn height(&self) -> u32 {
        WEEKS_PER_YEAR * CELL_SIZE
    }

    /// True if the lived weeks fill (or overrun) the whole calendar
    pub(crate) fn is_saturated(&self) -> bool {
        self.lived_weeks >= self.total_weeks()
    }

    fn week_color(&self, week: u32) -> Rgb<u8> {
        if week < self.lived_weeks {
            LIVED
        } else {
            REMAINING
        }
    }

    pub(crate) fn render(&self) -> RgbImage {
        let mut img = RgbImage::from_pixel(self.width(), self.height(), BACKGROUND);
        for week in 0..self.total_weeks() {
            let left = (week / WEEKS_PER_YEAR) * CELL_SIZE;
            let top = (week % WEEKS_PER_YEAR) * CELL_SIZE;
            let color = self.week_color(week);
            for y in top..(top + CELL_SIZE) {
                for x in left..(left + CELL_SIZE) {
                    img.put_pixel(x, y, color);
                }
            }
        }
        img
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_color(img: &RgbImage, color: Rgb<u8>) -> usize {
        img.pixels().filter(|&&px| px == color).count()
    }

    #[test]
    fn default_dimensions() {
        let img = LifeGrid::new(74).render();
        assert_eq!(img.dimensions(), (900, 520));
    }

    #[test]
    fn dimensions_ignore_lived_weeks() {
        for lived in [0, 1, 4680, 10_000] {
            let img = LifeGrid::new(lived).render();
            assert_eq!(img.dimensions(), (900, 520));
        }
    }

    #[test]
    fn no_weeks_lived() {
        let img = LifeGrid::new(0).render();
        assert_eq!(count_color(&img, REMAINING), 900 * 520);
        assert_eq!(count_color(&img, LIVED), 0);
    }

    #[test]
    fn exactly_saturated() {
        let grid = LifeGrid::new(90 * 52);
        assert!(grid.is_saturated());
        let img = grid.render();
        assert_eq!(count_color(&img, LIVED), 900 * 520);
    }

    #[test]
    fn overrun_renders_all_lived() {
        let img = LifeGrid::new(10_000).render();
        assert_eq!(count_color(&img, LIVED), 900 * 520);
        assert_eq!(count_color(&img, REMAINING), 0);
    }

    #[test]
    fn partial_cell_counts() {
        let img = LifeGrid::new(74).render();
        assert_eq!(count_color(&img, LIVED), 74 * 100);
        assert_eq!(count_color(&img, REMAINING), 4606 * 100);
    }

    #[test]
    fn column_major_boundaries() {
        let img = LifeGrid::new(74).render();
        // Week 51 is the bottom of the first year-column; week 52 wraps
        // to the top of the second.
        assert_eq!(img.get_pixel(0, 510), &LIVED);
        assert_eq!(img.get_pixel(10, 0), &LIVED);
        // Weeks 73 and 74 straddle the lived/remaining boundary.
        assert_eq!(img.get_pixel(10, 210), &LIVED);
        assert_eq!(img.get_pixel(10, 220), &REMAINING);
    }

    #[test]
    fn shorter_lifespan() {
        let grid = LifeGrid::with_lifespan(100, 1);
        assert!(grid.is_saturated());
        let img = grid.render();
        assert_eq!(img.dimensions(), (10, 520));
        assert_eq!(count_color(&img, LIVED), 52 * 100);
    }
}
