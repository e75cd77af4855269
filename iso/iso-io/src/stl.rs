//! ASCII STL (Stereolithography) support.
//!
//! # Format
//!
//! ```text
//! solid name
//!   facet normal ni nj nk
//!     outer loop
//!       vertex v1x v1y v1z
//!       vertex v2x v2y v2z
//!       vertex v3x v3y v3z
//!     endloop
//!   endfacet
//!   ...
//! endsolid name
//! ```
//!
//! All numbers are written in scientific notation with six fractional
//! digits. Facet normals are recomputed from vertex geometry on write, never
//! taken from the mesh; degenerate facets get an explicit zero normal, which
//! downstream slicers treat as "derive it yourself".

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use iso_types::{IndexedMesh, MeshTopology, Vertex};
use nalgebra::Vector3;
use tracing::info;

use crate::error::{IoError, IoResult};

/// Name written on the `solid` / `endsolid` lines.
const SOLID_NAME: &str = "isosurface";

/// Save a mesh as an ASCII STL file.
///
/// An empty mesh produces a valid STL with zero facets.
///
/// # Errors
///
/// Returns [`IoError::FaceOutOfRange`] when a face references a missing
/// vertex, and [`IoError::Io`] when the file cannot be written.
///
/// # Example
///
/// ```no_run
/// use iso_io::save_stl;
/// use iso_types::IndexedMesh;
///
/// let mesh = IndexedMesh::new();
/// save_stl(&mesh, "surface.stl").unwrap();
/// ```
pub fn save_stl<P: AsRef<Path>>(mesh: &IndexedMesh, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_stl_ascii(mesh, &mut writer)?;
    writer.flush()?;

    info!(
        faces = mesh.face_count(),
        path = %path.display(),
        "wrote ASCII STL"
    );
    Ok(())
}

/// Write a mesh in ASCII STL format to any writer.
///
/// # Errors
///
/// Returns [`IoError::FaceOutOfRange`] when a face references a missing
/// vertex, and [`IoError::Io`] on write failure.
pub fn write_stl_ascii<W: Write>(mesh: &IndexedMesh, writer: &mut W) -> IoResult<()> {
    check_indices(mesh)?;

    writeln!(writer, "solid {SOLID_NAME}")?;

    for tri in mesh.triangles() {
        let n = tri.normal().unwrap_or_else(Vector3::zeros);
        writeln!(writer, "  facet normal {:.6e} {:.6e} {:.6e}", n.x, n.y, n.z)?;
        writeln!(writer, "    outer loop")?;
        for v in tri.vertices() {
            writeln!(writer, "      vertex {:.6e} {:.6e} {:.6e}", v.x, v.y, v.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }

    writeln!(writer, "endsolid {SOLID_NAME}")?;
    Ok(())
}

fn check_indices(mesh: &IndexedMesh) -> IoResult<()> {
    let vertex_count = mesh.vertex_count();
    for face in mesh.faces() {
        for &index in &face {
            if index as usize >= vertex_count {
                return Err(IoError::FaceOutOfRange {
                    index,
                    vertex_count,
                });
            }
        }
    }
    Ok(())
}

/// Load a mesh from an ASCII STL file.
///
/// Facet normals in the file are ignored; they are derivable from geometry.
/// Vertices are not shared between facets, matching what the extractor
/// emits.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] when the path does not exist,
/// [`IoError::InvalidContent`] when a facet does not contain exactly three
/// vertices, and [`IoError::ParseFloat`] on malformed coordinates.
pub fn load_stl<P: AsRef<Path>>(path: P) -> IoResult<IndexedMesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;

    read_stl_ascii(BufReader::new(file))
}

/// Parse ASCII STL from any buffered reader.
#[allow(clippy::cast_possible_truncation)] // mesh indices are u32 by design
pub fn read_stl_ascii<R: BufRead>(reader: R) -> IoResult<IndexedMesh> {
    let mut mesh = IndexedMesh::new();
    let mut facet_vertices: Vec<Vertex> = Vec::with_capacity(3);
    let mut in_loop = false;

    for line in reader.lines() {
        let line = line?;
        let mut parts = line.split_whitespace();
        let Some(keyword) = parts.next() else {
            continue;
        };

        match keyword {
            "outer" => {
                in_loop = true;
                facet_vertices.clear();
            }
            "vertex" if in_loop => {
                let mut coord = || -> IoResult<f64> {
                    let text = parts.next().ok_or_else(|| {
                        IoError::invalid_content("vertex line with fewer than 3 coordinates")
                    })?;
                    Ok(text.parse()?)
                };
                let (x, y, z) = (coord()?, coord()?, coord()?);
                facet_vertices.push(Vertex::from_coords(x, y, z));
            }
            "endloop" => {
                in_loop = false;
            }
            "endfacet" => {
                if facet_vertices.len() != 3 {
                    return Err(IoError::invalid_content(format!(
                        "facet with {} vertices, expected 3",
                        facet_vertices.len()
                    )));
                }
                let base = mesh.vertices.len() as u32;
                mesh.vertices.append(&mut facet_vertices);
                mesh.faces.push([base, base + 1, base + 2]);
            }
            "endsolid" => break,
            _ => {}
        }
    }

    Ok(mesh)
}
