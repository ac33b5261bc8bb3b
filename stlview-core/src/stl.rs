//! Line-oriented ASCII STL reader
//!
//! Any line containing `outer` opens a facet and the next three lines are
//! read as its vertices. Everything else in the file is ignored.
use std::fs;
use std::path::{Path, PathBuf};

use nalgebra::Point3;
use nom::{
    bytes::complete::take_till1,
    character::complete::{multispace0, multispace1},
    combinator::all_consuming,
    multi::separated_list0,
    number::complete::double,
    IResult,
};
use thiserror::Error;

use crate::geometry::Triangle3;

/// Field index of the X coordinate on a vertex line. The leading
/// indentation counts as an empty field 0 and the `vertex` keyword as 1.
const FIRST_COORDINATE: usize = 2;

#[derive(Debug, Error)]
pub enum StlError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: facet ends before its three vertex lines")]
    MissingVertex { line: usize },
    #[error("line {line}: vertex line has no coordinate field {field}")]
    MissingField { line: usize, field: usize },
    #[error("line {line}: `{token}` is not a number")]
    BadCoordinate { line: usize, token: String },
}

/// Read and parse an ASCII STL file, multiplying every coordinate by `scale`
pub fn read_stl(path: impl AsRef<Path>, scale: f64) -> Result<Vec<Triangle3>, StlError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| StlError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let triangles = parse_ascii_stl(&text, scale)?;
    tracing::debug!(path = %path.display(), triangles = triangles.len(), "parsed STL");
    Ok(triangles)
}

/// Parse ASCII STL text, multiplying every coordinate by `scale`
pub fn parse_ascii_stl(input: &str, scale: f64) -> Result<Vec<Triangle3>, StlError> {
    let mut triangles = Vec::new();
    let mut lines = input.lines().enumerate().map(|(i, line)| (i + 1, line));

    while let Some((line_no, line)) = lines.next() {
        if !line.contains("outer") {
            continue;
        }

        let mut vertices = [Point3::origin(); 3];
        for vertex in &mut vertices {
            let (line, text) = lines
                .next()
                .ok_or(StlError::MissingVertex { line: line_no })?;
            *vertex = parse_vertex_line(line, text, scale)?;
        }

        let [a, b, c] = vertices;
        triangles.push(Triangle3::new(a, b, c));
    }

    Ok(triangles)
}

fn parse_vertex_line(line: usize, text: &str, scale: f64) -> Result<Point3<f64>, StlError> {
    let fields = split_fields(text)
        .map(|(_, fields)| fields)
        .unwrap_or_default();

    let mut coords = [0.0; 3];
    for (offset, coord) in coords.iter_mut().enumerate() {
        let field = FIRST_COORDINATE + offset;
        let token = *fields
            .get(field)
            .ok_or(StlError::MissingField { line, field })?;
        let (_, value) = all_consuming(double)(token).map_err(|_: nom::Err<nom::error::Error<&str>>| {
            StlError::BadCoordinate {
                line,
                token: token.to_string(),
            }
        })?;
        *coord = value * scale;
    }

    Ok(Point3::new(coords[0], coords[1], coords[2]))
}

/// Split a line on runs of whitespace. Leading whitespace yields an empty
/// first field, so an indented `vertex x y z` line puts X at index 2.
fn split_fields(input: &str) -> IResult<&str, Vec<&str>> {
    let (input, indent) = multispace0(input)?;
    let (input, mut fields) = separated_list0(multispace1, take_till1(char::is_whitespace))(input)?;
    if !indent.is_empty() {
        fields.insert(0, "");
    }
    Ok((input, fields))
}
