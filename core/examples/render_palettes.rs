use fault_core::{Palette, generate, save_png};

fn main() {
    let terrain = generate(512, 512, 8, 1000).unwrap();

    for (palette, name) in [(Palette::Ocean, "ocean"), (Palette::Terrain, "terrain")] {
        let path = format!("faults_{name}.png");
        save_png(&terrain.grid, palette, &path).unwrap();
        println!("Saved {path}");
    }
}
