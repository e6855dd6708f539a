use foundation::math::{Vec3, lat_lng_to_cartesian};

/// A hand-authored closed polygon of (lat, lng) vertices.
///
/// These are coarse decorative silhouettes, not cartography. Vertices
/// run once around the ring without a closing duplicate.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContinentOutline {
    pub name: &'static str,
    pub vertices: &'static [(f64, f64)],
}

pub const CONTINENT_OUTLINES: &[ContinentOutline] = &[
    ContinentOutline {
        name: "North America",
        vertices: &[
            (71.0, -156.0),
            (60.0, -147.0),
            (49.0, -124.0),
            (32.0, -117.0),
            (23.0, -106.0),
            (15.0, -92.0),
            (9.0, -79.0),
            (18.0, -88.0),
            (25.0, -80.0),
            (35.0, -75.0),
            (45.0, -66.0),
            (52.0, -56.0),
            (60.0, -64.0),
            (64.0, -78.0),
            (70.0, -85.0),
            (72.0, -125.0),
        ],
    },
    ContinentOutline {
        name: "South America",
        vertices: &[
            (11.0, -74.0),
            (5.0, -52.0),
            (-5.0, -35.0),
            (-13.0, -38.0),
            (-23.0, -41.0),
            (-35.0, -57.0),
            (-47.0, -66.0),
            (-55.0, -71.0),
            (-42.0, -74.0),
            (-23.0, -70.0),
            (-5.0, -81.0),
            (7.0, -78.0),
        ],
    },
    ContinentOutline {
        name: "Africa",
        vertices: &[
            (35.0, -6.0),
            (37.0, 10.0),
            (31.0, 32.0),
            (12.0, 43.0),
            (11.0, 51.0),
            (-1.0, 42.0),
            (-15.0, 40.0),
            (-26.0, 33.0),
            (-34.0, 19.0),
            (-22.0, 14.0),
            (-8.0, 13.0),
            (4.0, 9.0),
            (5.0, -4.0),
            (14.0, -17.0),
            (21.0, -17.0),
            (31.0, -10.0),
        ],
    },
    ContinentOutline {
        name: "Europe",
        vertices: &[
            (36.0, -9.0),
            (43.0, -2.0),
            (48.0, -5.0),
            (51.0, 2.0),
            (54.0, 7.0),
            (57.0, 8.0),
            (63.0, 10.0),
            (71.0, 26.0),
            (68.0, 40.0),
            (59.0, 28.0),
            (54.0, 20.0),
            (46.0, 14.0),
            (41.0, 19.0),
            (37.0, 23.0),
            (38.0, 15.0),
            (43.0, 7.0),
            (40.0, 0.0),
        ],
    },
    ContinentOutline {
        name: "Asia",
        vertices: &[
            (42.0, 27.0),
            (30.0, 34.0),
            (12.0, 44.0),
            (22.0, 60.0),
            (25.0, 67.0),
            (8.0, 77.0),
            (22.0, 89.0),
            (9.0, 98.0),
            (1.0, 104.0),
            (14.0, 109.0),
            (22.0, 114.0),
            (31.0, 122.0),
            (40.0, 128.0),
            (60.0, 163.0),
            (66.0, 170.0),
            (71.0, 140.0),
            (77.0, 104.0),
            (70.0, 60.0),
            (55.0, 35.0),
        ],
    },
    ContinentOutline {
        name: "Australia",
        vertices: &[
            (-11.0, 131.0),
            (-12.0, 142.0),
            (-19.0, 146.0),
            (-28.0, 153.0),
            (-37.0, 150.0),
            (-39.0, 144.0),
            (-35.0, 137.0),
            (-32.0, 132.0),
            (-34.0, 115.0),
            (-26.0, 113.0),
            (-20.0, 119.0),
            (-14.0, 127.0),
        ],
    },
    ContinentOutline {
        name: "Antarctica",
        vertices: &[
            (-66.0, 0.0),
            (-70.0, 40.0),
            (-68.0, 78.0),
            (-66.0, 110.0),
            (-70.0, 160.0),
            (-78.0, -165.0),
            (-74.0, -120.0),
            (-68.0, -90.0),
            (-72.0, -60.0),
            (-63.0, -57.0),
            (-70.0, -20.0),
        ],
    },
];

/// Fan-triangulate an outline into a flat triangle list on the sphere
/// (3 vertices per triangle).
///
/// The fan pivots on a centroid averaged naively in lat/lng space, so
/// non-convex or pole-wrapping rings can produce inverted or
/// overlapping triangles. The outlines above are coarse enough that it
/// does not show, and they are background decoration either way; a real
/// geodesic polygon fill is out of scope here.
pub fn triangulate_outline(outline: &ContinentOutline, radius: f64) -> Vec<Vec3> {
    let mut ring: &[(f64, f64)] = outline.vertices;
    // Tolerate a closing duplicate in hand-authored data.
    if ring.len() >= 2 && ring[0] == ring[ring.len() - 1] {
        ring = &ring[..ring.len() - 1];
    }
    if ring.len() < 3 {
        return Vec::new();
    }

    let n = ring.len() as f64;
    let centroid_lat = ring.iter().map(|(lat, _)| lat).sum::<f64>() / n;
    let centroid_lng = ring.iter().map(|(_, lng)| lng).sum::<f64>() / n;
    let centroid = lat_lng_to_cartesian(centroid_lat, centroid_lng, radius);

    let projected: Vec<Vec3> = ring
        .iter()
        .map(|&(lat, lng)| lat_lng_to_cartesian(lat, lng, radius))
        .collect();

    let mut triangles: Vec<Vec3> = Vec::with_capacity(projected.len() * 3);
    for i in 0..projected.len() {
        let j = (i + 1) % projected.len();
        triangles.push(centroid);
        triangles.push(projected[i]);
        triangles.push(projected[j]);
    }
    triangles
}

#[cfg(test)]
mod tests {
    use super::{CONTINENT_OUTLINES, ContinentOutline, triangulate_outline};

    #[test]
    fn every_outline_is_a_closed_ring() {
        for outline in CONTINENT_OUTLINES {
            assert!(
                outline.vertices.len() >= 3,
                "{} outline too short",
                outline.name
            );
            for &(lat, lng) in outline.vertices {
                assert!((-90.0..=90.0).contains(&lat), "{} lat {lat}", outline.name);
                assert!(
                    (-180.0..=180.0).contains(&lng),
                    "{} lng {lng}",
                    outline.name
                );
            }
        }
    }

    #[test]
    fn fan_produces_one_triangle_per_edge() {
        for outline in CONTINENT_OUTLINES {
            let triangles = triangulate_outline(outline, 1.0);
            assert_eq!(triangles.len(), outline.vertices.len() * 3);
        }
    }

    #[test]
    fn triangle_vertices_sit_on_the_sphere() {
        let outline = &CONTINENT_OUTLINES[0];
        for p in triangulate_outline(outline, 1.0) {
            let r = p.length();
            assert!((r - 1.0).abs() < 1e-9, "vertex off sphere: {r}");
        }
    }

    #[test]
    fn degenerate_outline_yields_no_triangles() {
        let line = ContinentOutline {
            name: "line",
            vertices: &[(0.0, 0.0), (1.0, 1.0)],
        };
        assert!(triangulate_outline(&line, 1.0).is_empty());
    }

    #[test]
    fn closing_duplicate_is_dropped() {
        let square = ContinentOutline {
            name: "square",
            vertices: &[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0), (0.0, 0.0)],
        };
        let triangles = triangulate_outline(&square, 1.0);
        assert_eq!(triangles.len(), 4 * 3);
    }
}
