//! TSPLIB problem file reader.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::distance::{City, DistanceMatrix, EdgeWeightType};
use crate::error::{Result, TspError};

const EOF_MARKER: &str = "EOF";

/// TSPLIB `TYPE` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProblemType {
    /// Symmetric TSP.
    Tsp,
    /// Asymmetric TSP.
    Atsp,
    Unrecognized(String),
}

impl ProblemType {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "TSP" => Self::Tsp,
            "ATSP" => Self::Atsp,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

impl fmt::Display for ProblemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tsp => f.write_str("TSP"),
            Self::Atsp => f.write_str("ATSP"),
            Self::Unrecognized(s) => f.write_str(s),
        }
    }
}

/// TSPLIB `EDGE_WEIGHT_FORMAT` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeWeightFormat {
    FullMatrix,
    Unrecognized(String),
}

impl EdgeWeightFormat {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "FULL_MATRIX" => Self::FullMatrix,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

impl fmt::Display for EdgeWeightFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FullMatrix => f.write_str("FULL_MATRIX"),
            Self::Unrecognized(s) => f.write_str(s),
        }
    }
}

/// Body of a problem file.
#[derive(Debug, Clone, PartialEq)]
pub enum ProblemData {
    /// Rows of an `EDGE_WEIGHT_SECTION`.
    Matrix(Vec<Vec<f64>>),
    /// Cities of a `NODE_COORD_SECTION`, in file order.
    Coordinates(Vec<City>),
}

/// A parsed TSPLIB problem description.
#[derive(Debug, Clone, PartialEq)]
pub struct TsplibProblem {
    pub name: String,
    pub comment: String,
    pub dimension: usize,
    pub problem_type: ProblemType,
    pub edge_weight_type: EdgeWeightType,
    pub edge_weight_format: Option<EdgeWeightFormat>,
    pub data: ProblemData,
}

#[derive(Default)]
struct Header {
    name: Option<String>,
    comment: Option<String>,
    dimension: Option<usize>,
    problem_type: Option<ProblemType>,
    edge_weight_type: Option<EdgeWeightType>,
    edge_weight_format: Option<EdgeWeightFormat>,
}

impl TsplibProblem {
    /// Reads and parses a problem file.
    ///
    /// # Errors
    /// - [`TspError::FileNotFound`] if the file cannot be opened.
    /// - [`TspError::MalformedInput`] as for [`parse`](Self::parse).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|source| TspError::FileNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let mut text = String::new();
        file.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    /// Parses problem text.
    ///
    /// Header lines are `KEY: value`; unknown keys are ignored. Reading stops
    /// at an `EOF` line or at the end of the text.
    ///
    /// # Errors
    /// [`TspError::MalformedInput`] if a required header field is missing or
    /// unparseable, a section appears before `DIMENSION`, section data is
    /// short or non-numeric, or the file has no data section.
    pub fn parse(text: &str) -> Result<Self> {
        let mut header = Header::default();
        let mut data = None;
        let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

        while let Some(line) = lines.next() {
            if line == EOF_MARKER {
                break;
            }
            let section = line.trim_end_matches(':').trim();
            match section {
                "EDGE_WEIGHT_SECTION" => {
                    let n = require_dimension(&header, section)?;
                    data = Some(ProblemData::Matrix(read_matrix(&mut lines, n)?));
                    continue;
                }
                "NODE_COORD_SECTION" => {
                    let n = require_dimension(&header, section)?;
                    data = Some(ProblemData::Coordinates(read_coordinates(&mut lines, n)?));
                    continue;
                }
                _ => {}
            }

            let Some((key, value)) = line.split_once(':') else {
                return Err(TspError::malformed(format!("unexpected line {line:?}")));
            };
            let value = value.trim();
            match key.trim() {
                "NAME" => header.name = Some(value.to_string()),
                "COMMENT" => {
                    header.comment = Some(match header.comment.take() {
                        Some(prev) => format!("{prev} {value}"),
                        None => value.to_string(),
                    })
                }
                "DIMENSION" => {
                    let n = value.parse().map_err(|_| {
                        TspError::malformed(format!("DIMENSION {value:?} is not a number"))
                    })?;
                    header.dimension = Some(n);
                }
                "TYPE" => header.problem_type = Some(ProblemType::parse(value)),
                "EDGE_WEIGHT_TYPE" => header.edge_weight_type = Some(EdgeWeightType::parse(value)),
                "EDGE_WEIGHT_FORMAT" => {
                    header.edge_weight_format = Some(EdgeWeightFormat::parse(value))
                }
                other => debug!("ignoring header field {other}"),
            }
        }

        Ok(Self {
            name: header.name.ok_or_else(|| missing("NAME"))?,
            comment: header.comment.ok_or_else(|| missing("COMMENT"))?,
            dimension: header.dimension.ok_or_else(|| missing("DIMENSION"))?,
            problem_type: header.problem_type.ok_or_else(|| missing("TYPE"))?,
            edge_weight_type: header
                .edge_weight_type
                .ok_or_else(|| missing("EDGE_WEIGHT_TYPE"))?,
            edge_weight_format: header.edge_weight_format,
            data: data.ok_or_else(|| {
                TspError::malformed("no EDGE_WEIGHT_SECTION or NODE_COORD_SECTION")
            })?,
        })
    }

    /// Builds the distance matrix described by this problem.
    ///
    /// # Errors
    /// [`TspError::MalformedInput`] if `TYPE` or `EDGE_WEIGHT_TYPE` is
    /// unrecognized, an explicit matrix is not `FULL_MATRIX`, or the data
    /// section does not match the edge weight type.
    pub fn distance_matrix(&self) -> Result<DistanceMatrix> {
        if let ProblemType::Unrecognized(t) = &self.problem_type {
            return Err(TspError::malformed(format!("unsupported TYPE {t}")));
        }

        match (&self.edge_weight_type, &self.data) {
            (EdgeWeightType::Explicit, ProblemData::Matrix(rows)) => {
                match &self.edge_weight_format {
                    Some(EdgeWeightFormat::FullMatrix) => {
                        DistanceMatrix::from_rows(self.dimension, rows)
                    }
                    Some(other) => Err(TspError::malformed(format!(
                        "unsupported EDGE_WEIGHT_FORMAT {other}"
                    ))),
                    None => Err(TspError::malformed(
                        "EXPLICIT edge weights require EDGE_WEIGHT_FORMAT",
                    )),
                }
            }
            (EdgeWeightType::Euc2d | EdgeWeightType::Att, ProblemData::Coordinates(cities)) => {
                if cities.len() != self.dimension {
                    return Err(TspError::malformed(format!(
                        "expected {} cities, got {}",
                        self.dimension,
                        cities.len()
                    )));
                }
                DistanceMatrix::from_coordinates(cities, &self.edge_weight_type)
            }
            (EdgeWeightType::Unrecognized(t), _) => Err(TspError::malformed(format!(
                "unsupported EDGE_WEIGHT_TYPE {t}"
            ))),
            (t, _) => Err(TspError::malformed(format!(
                "data section does not match EDGE_WEIGHT_TYPE {t}"
            ))),
        }
    }
}

fn missing(field: &str) -> TspError {
    TspError::malformed(format!("missing {field}"))
}

fn require_dimension(header: &Header, section: &str) -> Result<usize> {
    header
        .dimension
        .ok_or_else(|| TspError::malformed(format!("{section} before DIMENSION")))
}

fn parse_number(token: &str) -> Result<f64> {
    token
        .parse()
        .map_err(|_| TspError::malformed(format!("{token:?} is not a number")))
}

/// Upper bound on capacity reserved up front from an untrusted `DIMENSION`.
const MAX_PREALLOCATED: usize = 1 << 16;

/// Reads `n × n` numbers, wrapped over any number of lines.
fn read_matrix<'a>(lines: &mut impl Iterator<Item = &'a str>, n: usize) -> Result<Vec<Vec<f64>>> {
    let total = n
        .checked_mul(n)
        .ok_or_else(|| TspError::malformed(format!("DIMENSION {n} is too large")))?;
    let mut values = Vec::with_capacity(total.min(MAX_PREALLOCATED));
    while values.len() < total {
        let line = lines
            .next()
            .filter(|&l| l != EOF_MARKER)
            .ok_or_else(|| {
                TspError::malformed(format!(
                    "EDGE_WEIGHT_SECTION has {} of {total} entries",
                    values.len()
                ))
            })?;
        for token in line.split_whitespace() {
            values.push(parse_number(token)?);
        }
    }
    if values.len() > total {
        return Err(TspError::malformed(format!(
            "EDGE_WEIGHT_SECTION has more than {total} entries"
        )));
    }
    Ok(values.chunks(n.max(1)).map(<[f64]>::to_vec).collect())
}

/// Reads `n` rows of `index x y`.
fn read_coordinates<'a>(lines: &mut impl Iterator<Item = &'a str>, n: usize) -> Result<Vec<City>> {
    let mut cities = Vec::with_capacity(n.min(MAX_PREALLOCATED));
    while cities.len() < n {
        let line = lines
            .next()
            .filter(|&l| l != EOF_MARKER)
            .ok_or_else(|| {
                TspError::malformed(format!("NODE_COORD_SECTION has {} of {n} rows", cities.len()))
            })?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [_, x, y] = tokens[..] else {
            return Err(TspError::malformed(format!(
                "coordinate row {line:?} should be `index x y`"
            )));
        };
        cities.push(City::new(parse_number(x)?, parse_number(y)?));
    }
    Ok(cities)
}
