use std::path::Path;
use std::str::FromStr;

use image::{Rgb, RgbImage};
use log::info;
use palette::{Gradient, LinSrgb};

use crate::error::{Result, TerrainError};
use crate::grid::Grid;
use crate::utils::{flatten2, normalize2};

// How much of the colour channel the height range is spread over
const OCEAN_SHADE_RANGE: f64 = 205.0;
const OCEAN_BASE: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    // Shades of blue, brighter is higher
    #[default]
    Ocean,
    // Deep water to sand, grass, rock and snow
    Terrain,
}

impl FromStr for Palette {
    type Err = TerrainError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "ocean" => Ok(Palette::Ocean),
            "terrain" => Ok(Palette::Terrain),
            other => Err(TerrainError::UnknownPalette(other.to_string())),
        }
    }
}

// Lowest point maps to shade 0, highest to OCEAN_SHADE_RANGE.
// Flat grids have no range and stay at shade 0.
fn ocean_pixel(height: u64, min: u64, range: u64) -> Rgb<u8> {
    let shade = if range == 0 {
        0
    } else {
        ((height - min) as f64 / range as f64 * OCEAN_SHADE_RANGE) as u8
    };
    Rgb([OCEAN_BASE + shade, OCEAN_BASE + shade, 255])
}

fn render_ocean(grid: &Grid) -> RgbImage {
    let min = grid.min_height();
    let range = grid.max_height() - min;

    let mut img = RgbImage::new(grid.width() as u32, grid.height() as u32);
    for p in grid.points() {
        img.put_pixel(p.x as u32, p.y as u32, ocean_pixel(p.height(), min, range));
    }
    img
}

fn render_terrain(grid: &Grid) -> RgbImage {
    let gradient = Gradient::with_domain(vec![
        (0.00, LinSrgb::new(0.0, 0.0, 0.5)), // deep blue
        (0.30, LinSrgb::new(0.8, 0.8, 0.5)), // sand
        (0.50, LinSrgb::new(0.1, 0.6, 0.2)), // green
        (0.75, LinSrgb::new(0.5, 0.4, 0.3)), // rock
        (1.00, LinSrgb::new(1.0, 1.0, 1.0)), // snow
    ]);

    let mut map = grid.to_height_map();
    normalize2(&mut map);

    let width = grid.width();
    let mut img = RgbImage::new(width as u32, grid.height() as u32);
    for (i, h) in flatten2(&map).into_iter().enumerate() {
        let col: LinSrgb = gradient.get(h);
        let rgb = col.into_format::<u8>();
        img.put_pixel((i % width) as u32, (i / width) as u32, Rgb([rgb.red, rgb.green, rgb.blue]));
    }
    img
}

// One pixel per grid point
pub fn render(grid: &Grid, palette: Palette) -> RgbImage {
    match palette {
        Palette::Ocean => render_ocean(grid),
        Palette::Terrain => render_terrain(grid),
    }
}

pub fn save_png<P: AsRef<Path>>(grid: &Grid, palette: Palette, path: P) -> Result<()> {
    let path = path.as_ref();
    render(grid, palette).save(path)?;
    info!("image saved: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Palette, ocean_pixel, render};
    use crate::grid::Grid;
    use image::Rgb;

    #[test]
    fn ocean_pixel_spans_shades() {
        assert_eq!(ocean_pixel(10, 10, 40), Rgb([50, 50, 255]));
        assert_eq!(ocean_pixel(50, 10, 40), Rgb([255, 255, 255]));
        assert_eq!(ocean_pixel(30, 10, 40), Rgb([152, 152, 255]));
    }

    #[test]
    fn ocean_flat_grid_renders_base_colour() {
        let g = Grid::new(5, 5).unwrap();
        let img = render(&g, Palette::Ocean);
        assert_eq!(img.dimensions(), (5, 5));
        assert!(img.pixels().all(|&p| p == Rgb([50, 50, 255])));
    }

    #[test]
    fn render_pixel_matches_point() {
        let g = Grid::new(6, 5).unwrap();
        g.get(4, 1).unwrap().raise(8);
        let img = render(&g, Palette::Ocean);
        assert_eq!(img.dimensions(), (6, 5));
        assert_eq!(*img.get_pixel(4, 1), Rgb([255, 255, 255]));
        assert_eq!(*img.get_pixel(1, 4), Rgb([50, 50, 255]));
    }

    #[test]
    fn terrain_palette_low_is_water_high_is_snow() {
        let g = Grid::new(5, 5).unwrap();
        g.get(0, 0).unwrap().raise(10);
        let img = render(&g, Palette::Terrain);
        let snow = img.get_pixel(0, 0);
        let water = img.get_pixel(3, 3);
        assert!(snow[0] > 200 && snow[1] > 200 && snow[2] > 200);
        assert!(water[2] > water[0] && water[2] > water[1]);
    }

    #[test]
    // Row-major pixels land on the right (x, y) on a non-square grid
    fn terrain_palette_keeps_layout() {
        let g = Grid::new(7, 5).unwrap();
        g.get(6, 0).unwrap().raise(4);
        let img = render(&g, Palette::Terrain);
        assert_eq!(img.dimensions(), (7, 5));
        let snow = img.get_pixel(6, 0);
        assert!(snow[0] > 200 && snow[1] > 200 && snow[2] > 200);
        for &(x, y) in &[(0, 1), (0, 4), (6, 4), (5, 0)] {
            let water = img.get_pixel(x, y);
            assert!(water[0] < 50 && water[2] > 100, "({x}, {y}) is not water");
        }
    }

    #[test]
    fn palette_parses_names() {
        assert_eq!("ocean".parse::<Palette>().unwrap(), Palette::Ocean);
        assert_eq!("Terrain".parse::<Palette>().unwrap(), Palette::Terrain);
        assert!("lava".parse::<Palette>().is_err());
    }
}
