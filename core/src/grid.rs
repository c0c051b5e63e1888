use rand::Rng;

use crate::error::{Result, TerrainError};
use crate::point::Point;
use crate::utils::HeightMap2D;

// Dense width×height lattice of points, stored row-major
// so point (x, y) lives at index y * width + x.
#[derive(Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    points: Vec<Point>,
}

impl Grid {
    // Populate every integer coordinate in [0, width) × [0, height).
    // Fails when there are not two distinct points to build a fault line from.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = width
            .checked_mul(height)
            .ok_or(TerrainError::GridTooLarge { width, height })?;
        if len < 2 {
            return Err(TerrainError::DegenerateGrid { width, height });
        }

        let mut points = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                points.push(Point::new(x, y));
            }
        }

        Ok(Self {
            width,
            height,
            points,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&Point> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.points.get(y * self.width + x)
    }

    // Uniformly random point, drawn from the calling thread's own generator
    pub fn sample(&self) -> &Point {
        self.sample_with(&mut rand::thread_rng())
    }

    // Uniformly random point from a caller-supplied generator
    pub fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &Point {
        &self.points[rng.gen_range(0..self.points.len())]
    }

    pub fn min_height(&self) -> u64 {
        self.points.iter().map(Point::height).min().unwrap_or(0)
    }

    pub fn max_height(&self) -> u64 {
        self.points.iter().map(Point::height).max().unwrap_or(0)
    }

    // Snapshot of the heights as map[y][x]
    pub fn to_height_map(&self) -> HeightMap2D {
        self.points
            .chunks(self.width)
            .map(|row| row.iter().map(|p| p.height() as f32).collect())
            .collect()
    }
}
