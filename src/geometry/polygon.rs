//! Regular polygon generation with fan triangulation
//!
//! A polygon approximates a circle of the given radius with `segments`
//! vertices emitted in counter-clockwise angular order starting at angle 0.
//! Only the unique rim vertices are emitted (no duplicated closing vertex);
//! the fan anchored at vertex 0 closes the shape on its own.

use glam::{Vec2, Vec3};

use crate::consts::MIN_FAN_SEGMENTS;
use crate::error::{Error, Result};
use crate::polar_to_cartesian;

/// Whether texture coordinates are generated alongside positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TexCoords {
    /// Positions only
    #[default]
    Omit,
    /// Direction-based mapping: `((cos θ + 1) / 2, (sin θ + 1) / 2)`.
    /// Not arc-length accurate, the rim simply samples the unit-square disc.
    Directional,
}

/// A generated, fan-triangulated regular polygon
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub radius: f32,
    pub segments: u32,
    /// Rim vertices (z = 0), `segments` entries
    pub positions: Vec<Vec3>,
    /// Present only when generated with [`TexCoords::Directional`]
    pub tex_coords: Option<Vec<Vec2>>,
    /// Triangle list, `3 * (segments - 2)` entries
    pub indices: Vec<u32>,
}

/// Generate a regular `segments`-gon of the given radius
///
/// Vertex `i` sits at angle `i * 360° / segments`. Triangle `k` is
/// `(0, k + 1, k + 2)` for `k` in `0..segments - 2`.
///
/// Fails with [`Error::InvalidArgument`] when `segments < 3` or the radius is
/// not a positive finite number. The usability floor of 8 segments is applied
/// by [`SegmentCount`](super::SegmentCount), not here.
pub fn rebuild(radius: f32, segments: u32, tex: TexCoords) -> Result<Polygon> {
    if segments < MIN_FAN_SEGMENTS {
        return Err(Error::InvalidArgument(format!(
            "polygon needs at least {MIN_FAN_SEGMENTS} segments, got {segments}"
        )));
    }
    if !(radius > 0.0 && radius.is_finite()) {
        return Err(Error::InvalidArgument(format!(
            "polygon radius must be positive, got {radius}"
        )));
    }

    let step_degrees = 360.0 / segments as f32;
    let count = segments as usize;

    let mut positions = Vec::with_capacity(count);
    let mut uvs = match tex {
        TexCoords::Omit => None,
        TexCoords::Directional => Some(Vec::with_capacity(count)),
    };

    for i in 0..segments {
        let theta = (i as f32 * step_degrees).to_radians();
        let rim = polar_to_cartesian(radius, theta);
        positions.push(rim.extend(0.0));

        if let Some(uvs) = uvs.as_mut() {
            let dir = polar_to_cartesian(1.0, theta);
            uvs.push((dir + Vec2::ONE) / 2.0);
        }
    }

    let triangle_count = segments - 2;
    let mut indices = Vec::with_capacity(triangle_count as usize * 3);
    for k in 0..triangle_count {
        indices.extend_from_slice(&[0, k + 1, k + 2]);
    }

    Ok(Polygon {
        radius,
        segments,
        positions,
        tex_coords: uvs,
        indices,
    })
}

impl Polygon {
    /// Number of rim vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of fan triangles
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate triangles as index triples
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Floats per vertex in [`vertex_data`](Self::vertex_data)
    #[inline]
    pub fn stride(&self) -> usize {
        if self.tex_coords.is_some() { 5 } else { 3 }
    }

    /// Interleaved vertex buffer: `x, y, z` or `x, y, z, u, v` per vertex
    pub fn vertex_data(&self) -> Vec<f32> {
        let mut data = Vec::with_capacity(self.vertex_count() * self.stride());
        for (i, p) in self.positions.iter().enumerate() {
            data.extend_from_slice(&p.to_array());
            if let Some(uvs) = &self.tex_coords {
                data.extend_from_slice(&uvs[i].to_array());
            }
        }
        data
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_octagon() {
        let poly = rebuild(1.0, 8, TexCoords::Omit).unwrap();
        assert_eq!(poly.vertex_count(), 8);
        assert_eq!(poly.triangle_count(), 6);
        assert_eq!(poly.indices.len(), 18);

        let tris: Vec<_> = poly.triangles().collect();
        assert_eq!(tris.first(), Some(&[0, 1, 2]));
        assert_eq!(tris.last(), Some(&[0, 6, 7]));
    }

    #[test]
    fn test_first_vertex_on_positive_x() {
        let poly = rebuild(2.0, 12, TexCoords::Omit).unwrap();
        assert!((poly.positions[0] - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-6);
        // Quarter turn lands on +y
        assert!((poly.positions[3] - Vec3::new(0.0, 2.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_too_few_segments() {
        for n in 0..3 {
            let err = rebuild(1.0, n, TexCoords::Omit).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)));
        }
    }

    #[test]
    fn test_bad_radius() {
        for r in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let err = rebuild(r, 8, TexCoords::Omit).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)));
        }
    }

    #[test]
    fn test_triangle_is_minimal_fan() {
        let poly = rebuild(1.0, 3, TexCoords::Omit).unwrap();
        assert_eq!(poly.indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_directional_tex_coords() {
        let poly = rebuild(0.7, 4, TexCoords::Directional).unwrap();
        let uvs = poly.tex_coords.as_ref().unwrap();
        assert_eq!(uvs.len(), 4);
        // 0°, 90°, 180°, 270° map to the midpoints of the unit square edges
        let expected = [
            Vec2::new(1.0, 0.5),
            Vec2::new(0.5, 1.0),
            Vec2::new(0.0, 0.5),
            Vec2::new(0.5, 0.0),
        ];
        for (uv, want) in uvs.iter().zip(expected) {
            assert!((*uv - want).length() < 1e-5, "{uv:?} != {want:?}");
        }
    }

    #[test]
    fn test_vertex_data_layout() {
        let plain = rebuild(1.0, 8, TexCoords::Omit).unwrap();
        assert_eq!(plain.stride(), 3);
        assert_eq!(plain.vertex_data().len(), 8 * 3);

        let textured = rebuild(1.0, 8, TexCoords::Directional).unwrap();
        assert_eq!(textured.stride(), 5);
        let data = textured.vertex_data();
        assert_eq!(data.len(), 8 * 5);
        // First vertex: (1, 0, 0) with uv (1, 0.5)
        assert!((data[0] - 1.0).abs() < 1e-6);
        assert!(data[2].abs() < 1e-6);
        assert!((data[3] - 1.0).abs() < 1e-6);
        assert!((data[4] - 0.5).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_index_count_and_range(n in 3u32..512, r in 0.01f32..100.0) {
            let poly = rebuild(r, n, TexCoords::Omit).unwrap();
            prop_assert_eq!(poly.indices.len(), 3 * (n as usize - 2));
            prop_assert!(poly.indices.iter().all(|&i| i < n));
        }

        #[test]
        fn prop_vertices_on_circle(n in 3u32..512, r in 0.01f32..100.0) {
            let poly = rebuild(r, n, TexCoords::Directional).unwrap();
            for p in &poly.positions {
                prop_assert!((p.length() - r).abs() <= r * 1e-5);
                prop_assert_eq!(p.z, 0.0);
            }
            for uv in poly.tex_coords.as_ref().unwrap() {
                prop_assert!(uv.min_element() >= -1e-6 && uv.max_element() <= 1.0 + 1e-6);
            }
        }
    }
}
