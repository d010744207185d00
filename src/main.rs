use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use tracing::{debug, info};

use crate::core::config::DagModel;
use crate::core::stats::{GenerationStats, expected_edges};
use crate::output::edge_list::write_edges;

pub mod cli;
pub mod core;
pub mod generate;
pub mod logging;
pub mod output;

const USAGE_ERROR: u8 = 2;

fn main() -> ExitCode {
    let args = cli::parse();
    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("dagen: {err}");
        return ExitCode::FAILURE;
    }

    let model = match args.to_model() {
        Ok(model) => model,
        Err(err) => {
            eprintln!("dagen: error: {err}");
            return ExitCode::from(USAGE_ERROR);
        }
    };

    match run(&model, args.output.as_deref()) {
        Ok(stats) => {
            info!(
                vertices = stats.vertices,
                edges = stats.edges,
                density = stats.density(),
                "generation complete"
            );
            ExitCode::SUCCESS
        }
        // downstream reader closed early, e.g. `| head`
        Err(err) if is_broken_pipe(&err) => {
            debug!("output closed by reader");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("dagen: error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Generate `model` and write its edge list to `output`, or stdout.
pub fn run(model: &DagModel, output: Option<&Path>) -> anyhow::Result<GenerationStats> {
    let writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("failed to create `{}`", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    emit(model, writer)
}

fn emit<W: Write>(model: &DagModel, writer: W) -> anyhow::Result<GenerationStats> {
    let weights = model.weights();
    info!(
        model = model.name(),
        vertices = model.vertex_count(),
        connectivity = model.connectivity().get(),
        min_weight = weights.min(),
        max_weight = weights.max(),
        seed = ?model.seed(),
        "generating DAG"
    );
    debug!(expected_edges = expected_edges(model), "edge estimate");

    let edges = write_edges(writer, generate::generate(model)).context("failed to write edges")?;

    Ok(GenerationStats::new(model, edges))
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        let io_err = match cause.downcast_ref::<csv::Error>() {
            Some(csv_err) => match csv_err.kind() {
                csv::ErrorKind::Io(io_err) => Some(io_err),
                _ => None,
            },
            None => cause.downcast_ref::<io::Error>(),
        };
        io_err.is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{Connectivity, LayeredConfig, RandomConfig, WeightRange};

    #[test]
    fn test_run_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dag.txt");
        let model = DagModel::Random(RandomConfig {
            vertex_count: 4,
            connectivity: Connectivity::new(1.0).unwrap(),
            weights: WeightRange::new(5, 5).unwrap(),
            seed: Some(1),
        });

        let stats = run(&model, Some(&path)).unwrap();
        assert_eq!(6, stats.edges);
        assert_eq!(6, stats.eligible_pairs);
        assert_eq!(
            "0 1 5\n0 2 5\n0 3 5\n1 2 5\n1 3 5\n2 3 5\n",
            std::fs::read_to_string(&path).unwrap()
        );
    }

    #[test]
    fn test_run_layered_seeded_twice() {
        let dir = tempfile::tempdir().unwrap();
        let model = DagModel::Layered(
            LayeredConfig::new(
                4,
                3,
                Connectivity::new(0.6).unwrap(),
                WeightRange::new(1, 10).unwrap(),
                Some(123),
            )
            .unwrap(),
        );

        let first = dir.path().join("a.txt");
        let second = dir.path().join("b.txt");
        run(&model, Some(&first)).unwrap();
        run(&model, Some(&second)).unwrap();
        assert_eq!(
            std::fs::read_to_string(&first).unwrap(),
            std::fs::read_to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_run_empty_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        let model = DagModel::Random(RandomConfig {
            vertex_count: 3,
            connectivity: Connectivity::new(0.0).unwrap(),
            weights: WeightRange::new(1, 10).unwrap(),
            seed: None,
        });

        assert_eq!(0, run(&model, Some(&path)).unwrap().edges);
        assert_eq!("", std::fs::read_to_string(&path).unwrap());
    }

    struct ClosedPipe(io::ErrorKind);

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(self.0))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(self.0))
        }
    }

    fn dense_model() -> DagModel {
        DagModel::Random(RandomConfig {
            vertex_count: 300,
            connectivity: Connectivity::new(1.0).unwrap(),
            weights: WeightRange::new(1, 10).unwrap(),
            seed: Some(5),
        })
    }

    #[test]
    fn test_closed_reader_is_not_a_failure() {
        let err = emit(&dense_model(), ClosedPipe(io::ErrorKind::BrokenPipe)).unwrap_err();
        assert!(is_broken_pipe(&err));
    }

    #[test]
    fn test_other_write_errors_fail() {
        let err = emit(&dense_model(), ClosedPipe(io::ErrorKind::PermissionDenied)).unwrap_err();
        assert!(!is_broken_pipe(&err));
        assert!(format!("{err:#}").starts_with("failed to write edges"));
    }

    #[test]
    fn test_run_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("dag.txt");
        let model = DagModel::Random(RandomConfig {
            vertex_count: 3,
            connectivity: Connectivity::new(1.0).unwrap(),
            weights: WeightRange::new(1, 1).unwrap(),
            seed: None,
        });

        let err = run(&model, Some(&path)).unwrap_err();
        assert!(err.to_string().starts_with("failed to create"));
    }
}
