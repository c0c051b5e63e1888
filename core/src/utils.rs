// 2D height map: row‐major Vec<Vec<f32>>, access as `map[y][x]`.
pub type HeightMap2D = Vec<Vec<f32>>;

// flatten a 2D height map (row‐major) into a single Vec<f32>
// for handing to image buffers or texture uploads
pub fn flatten2(map: &HeightMap2D) -> Vec<f32> {
    map.iter().flat_map(|row| row.iter().cloned()).collect()
}

// Rescale heights into [0.0, 1.0].
// A perfectly flat map has no range and ends up all zeros.
pub fn normalize2(map: &mut HeightMap2D) {
    let mut min = f32::MAX;
    let mut max = f32::MIN;

    for row in map.iter() {
        for &val in row.iter() {
            min = min.min(val);
            max = max.max(val);
        }
    }

    let range = max - min;
    for row in map.iter_mut() {
        for val in row.iter_mut() {
            *val = if range > 0.0 { (*val - min) / range } else { 0.0 };
        }
    }
}
