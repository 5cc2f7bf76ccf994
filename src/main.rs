use std::{
    env,
    fs::File,
    io::{self, BufWriter, Write},
};

use anyhow::{bail, Context};
use env_logger::Env;
use naive_delaunay::{
    sampling::{self, DEFAULT_SEED},
    triangulation::{triangulation_from_points, TriangulationConfiguration},
};

const POINTS_FILE: &str = "points.wkt";
const TRIANGLES_FILE: &str = "triangles.wkt";
const CIRCUMCIRCLES_FILE: &str = "circumcircles.wkt";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut args = env::args().skip(1);
    let (Some(raw_count), None) = (args.next(), args.next()) else {
        print_usage();
        bail!("expected exactly one point count argument");
    };
    let point_count: usize = match raw_count.parse() {
        Ok(count) => count,
        Err(parse_error) => {
            print_usage();
            return Err(parse_error).with_context(|| format!("invalid point count `{raw_count}`"));
        }
    };

    println!("Running triangulation...");
    let points = sampling::random_points(point_count, DEFAULT_SEED);
    let triangulation = triangulation_from_points(points, TriangulationConfiguration::default())?;

    write_wkt_file(POINTS_FILE, |writer| triangulation.output_points(writer))?;
    write_wkt_file(TRIANGLES_FILE, |writer| {
        triangulation.output_triangles(writer)
    })?;
    write_wkt_file(CIRCUMCIRCLES_FILE, |writer| {
        triangulation.output_circumcircles(writer)
    })?;
    println!("done.");

    Ok(())
}

fn write_wkt_file(
    path: &str,
    output: impl FnOnce(&mut BufWriter<File>) -> io::Result<()>,
) -> anyhow::Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create {path}"))?;
    let mut writer = BufWriter::new(file);
    output(&mut writer)?;
    writer
        .flush()
        .with_context(|| format!("failed to write {path}"))?;
    Ok(())
}

fn print_usage() {
    eprintln!("ERROR: call this program with an integer argument");
    eprintln!("to set the number of points for the triangulation.");
    eprintln!("Example: $ triangulate 100");
}
