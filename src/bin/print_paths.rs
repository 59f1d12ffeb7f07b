//! print_paths: shortest path tree from one source, one chain per node
//!
//! Usage: print_paths [--graph <file.json>] [--source <label|index>] [--distances]
//! Without --graph the built-in eight node graph is used, starting from A.

use dijkstra_paths::{GraphConfig, PathPrinter, Result, ShortestPathEngine};
use log::info;
use std::env;
use std::io::{self, Write};

#[derive(Debug, Default)]
struct Options {
    graph: Option<String>,
    source: Option<String>,
    distances: bool,
}

fn parse_args(args: &[String]) -> std::result::Result<Options, String> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--graph" => {
                options.graph = Some(iter.next().ok_or("--graph needs a file path")?.clone());
            }
            "--source" => {
                options.source = Some(iter.next().ok_or("--source needs a label or index")?.clone());
            }
            "--distances" => options.distances = true,
            other => return Err(format!("unknown argument: {}", other)),
        }
    }

    Ok(options)
}

fn run<O: Write>(options: &Options, out: &mut O) -> Result<()> {
    let config = match &options.graph {
        Some(path) => GraphConfig::from_file(path)?,
        None => GraphConfig::builtin(),
    };

    let source = match &options.source {
        Some(name) => config.resolve_node(name)?,
        None => 0,
    };

    let engine = ShortestPathEngine::from_config(&config)?;
    info!(
        "Computing shortest paths from vertex {} over {} vertices",
        source,
        engine.vertex_count()
    );

    let result = engine.compute_shortest_paths(source)?;

    let printer = PathPrinter::new(config.node_labels()?).with_distances(options.distances);
    printer.write_all(&result, out)?;

    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("{e}");
        eprintln!("Usage: print_paths [--graph <file.json>] [--source <label|index>] [--distances]");
        std::process::exit(1);
    });

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    if let Err(e) = run(&options, &mut out) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn output(options: &Options) -> String {
        let mut out = Vec::new();
        run(options, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_args() {
        let options = parse_args(&args(&["--source", "H", "--distances", "--graph", "g.json"])).unwrap();
        assert_eq!(options.source.as_deref(), Some("H"));
        assert_eq!(options.graph.as_deref(), Some("g.json"));
        assert!(options.distances);

        let defaults = parse_args(&[]).unwrap();
        assert!(defaults.graph.is_none() && defaults.source.is_none() && !defaults.distances);
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(parse_args(&args(&["--source"])).is_err());
        assert!(parse_args(&args(&["--graph"])).is_err());
        assert!(parse_args(&args(&["--verbose"])).is_err());
    }

    #[test]
    fn test_default_output() {
        let text = output(&Options::default());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "A");
        assert_eq!(lines[5], "F <- E <- D <- C <- B <- A");
        assert_eq!(lines[7], "H <- B <- A");
    }

    #[test]
    fn test_source_and_distances_output() {
        let options = parse_args(&args(&["--source", "H", "--distances"])).unwrap();
        let text = output(&options);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "A <- B <- H  (distance 3)");
        assert_eq!(lines[7], "H  (distance 0)");
    }

    #[test]
    fn test_unknown_source_fails() {
        let options = parse_args(&args(&["--source", "Z"])).unwrap();
        let mut out = Vec::new();
        assert!(matches!(
            run(&options, &mut out),
            Err(dijkstra_paths::Error::UnknownLabel(_))
        ));
    }
}
