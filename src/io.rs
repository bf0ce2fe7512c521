//! Edge-list file loading.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::core::SparseBipartite;
use crate::error::{GraphError, Result};

/// Load a bipartite graph from a whitespace-separated edge list.
///
/// Each line carries a row id and a column id; anything after the first two
/// tokens is ignored, blank lines are skipped, and duplicate edges collapse.
/// The graph shape is inferred from the largest ids seen. Malformed lines
/// are reported with their 1-based line number.
pub fn read_edge_list<P: AsRef<Path>>(path: P) -> Result<SparseBipartite> {
    let file = File::open(path.as_ref()).map_err(|e| GraphError::Io(e.to_string()))?;
    let reader = BufReader::new(file);

    let mut edges = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| GraphError::Io(e.to_string()))?;
        let mut tokens = line.split_whitespace();
        let row_tok = match tokens.next() {
            Some(tok) => tok,
            None => continue,
        };
        let col_tok = tokens.next().ok_or_else(|| GraphError::ParseError {
            line: idx + 1,
            message: "expected two vertex ids".to_string(),
        })?;

        let row: usize = row_tok.parse().map_err(|_| GraphError::ParseError {
            line: idx + 1,
            message: format!("invalid row id '{row_tok}'"),
        })?;
        let col: usize = col_tok.parse().map_err(|_| GraphError::ParseError {
            line: idx + 1,
            message: format!("invalid column id '{col_tok}'"),
        })?;
        edges.push((row, col));
    }

    let matrix = SparseBipartite::from_pairs(&edges)?;
    debug!(
        "loaded {} edges into a {}x{} graph",
        matrix.edge_count(),
        matrix.rows(),
        matrix.cols()
    );
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn edge_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_basic_edge_list() {
        let file = edge_file("0 1\n2 0\n1 1\n");
        let matrix = read_edge_list(file.path()).unwrap();

        assert_eq!(matrix.rows(), 3);
        assert_eq!(matrix.cols(), 2);
        assert_eq!(matrix.edge_count(), 3);
        assert!(matrix.contains(2, 0));
    }

    #[test]
    fn skips_blank_lines_and_extra_columns() {
        let file = edge_file("0 1 0.75 extra\n\n   \n1 0\n");
        let matrix = read_edge_list(file.path()).unwrap();

        assert_eq!(matrix.edge_count(), 2);
        assert!(matrix.contains(0, 1));
        assert!(matrix.contains(1, 0));
    }

    #[test]
    fn collapses_duplicate_edges() {
        let file = edge_file("0 0\n0 0\n0 0\n");
        let matrix = read_edge_list(file.path()).unwrap();
        assert_eq!(matrix.edge_count(), 1);
    }

    #[test]
    fn reports_missing_column_with_line_number() {
        let file = edge_file("0 1\n17\n");
        let err = read_edge_list(file.path()).unwrap_err();
        assert_eq!(
            err,
            GraphError::ParseError {
                line: 2,
                message: "expected two vertex ids".to_string(),
            }
        );
    }

    #[test]
    fn reports_non_numeric_ids_with_line_number() {
        let file = edge_file("0 1\n1 2\nfoo 3\n");
        let err = read_edge_list(file.path()).unwrap_err();
        assert!(matches!(err, GraphError::ParseError { line: 3, .. }));

        let file = edge_file("0 -1\n");
        let err = read_edge_list(file.path()).unwrap_err();
        assert!(matches!(err, GraphError::ParseError { line: 1, .. }));
    }

    #[test]
    fn empty_file_is_an_empty_graph_error() {
        let file = edge_file("");
        assert_eq!(
            read_edge_list(file.path()).unwrap_err(),
            GraphError::EmptyGraph
        );
    }

    #[test]
    fn missing_file_surfaces_as_io_error() {
        let err = read_edge_list("/nonexistent/edges.txt").unwrap_err();
        assert!(matches!(err, GraphError::Io(_)));
    }
}
