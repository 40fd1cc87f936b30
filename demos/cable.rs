//! Prints a sampled cable and its tube mesh statistics.
//!
//! Run with `cargo run --example cable -- [segments] [relax]`.

use catenary::cable::{Cable, LineBuffer};
use catenary::math::Point3;
use catenary::operations::query::{Length, LowestPoint};
use catenary::CurveParameters;

fn main() -> catenary::Result<()> {
    // Default: WARN for everything, DEBUG for catenary.
    // Override with RUST_LOG env var.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("catenary=debug".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let segments = args.next().and_then(|s| s.parse().ok()).unwrap_or(4);
    let relax = args.next().and_then(|s| s.parse().ok()).unwrap_or(6.0);

    let cable = Cable::new(Point3::new(0.0, 10.0, 0.0), Some(Point3::new(25.0, 7.0, 3.0)))
        .with_params(CurveParameters::new(segments, relax, 1.0));

    let mut line = LineBuffer::new();
    cable.redraw(&mut line)?;
    for (i, p) in line.positions().iter().enumerate() {
        println!("{i:3}: {:9.4} {:9.4} {:9.4}", p.x, p.y, p.z);
    }

    let sample = cable.catenary()?;
    let (lowest, p) = LowestPoint::new(&sample).execute();
    println!(
        "length {:.4}, lowest sample {lowest} at y = {:.4}",
        Length::new(&sample).execute(),
        p.y
    );

    let mesh = cable.tube(8)?;
    println!(
        "tube: {} vertices, {} triangles",
        mesh.vertices.len(),
        mesh.indices.len()
    );
    Ok(())
}
