use fault_core::generate;

fn main() {
    // 64×64 grid, 4 threads sharing 300 faults
    let terrain = generate(64, 64, 4, 300).unwrap();
    println!(
        "{} faults in {} ms, heights {}..={}",
        terrain.faults_applied,
        terrain.elapsed.as_millis(),
        terrain.grid.min_height(),
        terrain.grid.max_height()
    );

    // Print the top-left 16×16 corner of the map
    for y in 0..16 {
        for x in 0..16 {
            print!("{:>5} ", terrain.grid.get(x, y).unwrap().height());
        }
        println!();
    }
}
