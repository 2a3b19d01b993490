//! Colors the map of Australia with three colors.
//!
//! Run with `RUST_LOG=debug cargo run --example australia` to see the
//! solver's log output.

use u_coloring::coloring::ColoringStatus;
use u_coloring::fixtures;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let graph = fixtures::australia()?;
    let result = graph.solve();

    match result.status {
        ColoringStatus::Solved => {
            println!("Solution:");
            for (region, color) in result.assignment.iter().flatten() {
                println!("  {region:<4} {color}");
            }
        }
        status => println!("No solution ({status:?})"),
    }
    println!("Attempts: {}", graph.attempts());

    Ok(())
}
