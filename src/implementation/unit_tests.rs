use super::tables::*;

#[test]
fn uniform_configurations_cross_no_edges() {
    assert_eq!(EDGE_TABLE[0], 0);
    assert_eq!(EDGE_TABLE[255], 0);
    assert_eq!(triangle_count(CELL_TRIANGLES[0]), 0);
    assert_eq!(triangle_count(CELL_TRIANGLES[255]), 0);
}

#[test]
fn edge_table_is_symmetric_under_complement() {
    // Swapping inside and outside does not change which edges are crossed
    for config in 0..256usize {
        assert_eq!(EDGE_TABLE[config], EDGE_TABLE[255 - config]);
    }
}

#[test]
fn edge_corners_straddle_their_axis() {
    for (edge, &(a, b)) in EDGE_CORNERS.iter().enumerate() {
        let axis = edge_axis(edge);
        let da = [CORNER_DELTAS[a].0, CORNER_DELTAS[a].1, CORNER_DELTAS[a].2];
        let db = [CORNER_DELTAS[b].0, CORNER_DELTAS[b].1, CORNER_DELTAS[b].2];
        for dim in 0..3 {
            if dim == axis {
                // The first corner is the canonical (lower) endpoint
                assert_eq!(da[dim], 0);
                assert_eq!(db[dim], 1);
            } else {
                assert_eq!(da[dim], db[dim]);
            }
        }
    }
}

#[test]
fn triangle_table_is_consistent_with_edge_table() {
    for config in 0..256usize {
        let packed = CELL_TRIANGLES[config];
        let count = triangle_count(packed);
        assert!(count <= 5, "config {} has {} triangles", config, count);
        for t in 0..count {
            let edges = triangle_edges(packed, t);
            for &edge in &edges {
                assert!(edge < 12);
                assert!(
                    EDGE_TABLE[config] & (1 << edge) != 0,
                    "config {} triangle {} uses uncrossed edge {}",
                    config,
                    t,
                    edge
                );
            }
            // No degenerate triangle straight from the table
            assert!(edges[0] != edges[1] && edges[1] != edges[2] && edges[0] != edges[2]);
        }
    }
}

#[test]
fn single_corner_configurations_clip_that_corner() {
    // One corner below the threshold: a single triangle on the 3 edges
    // incident to corner 0
    let packed = CELL_TRIANGLES[1];
    assert_eq!(triangle_count(packed), 1);
    let mut edges = triangle_edges(packed, 0);
    edges.sort_unstable();
    assert_eq!(edges, [0, 4, 8]);

    // The complement (only corner 0 above) clips the same corner
    let packed = CELL_TRIANGLES[254];
    assert_eq!(triangle_count(packed), 1);
    let mut edges = triangle_edges(packed, 0);
    edges.sort_unstable();
    assert_eq!(edges, [0, 4, 8]);
}
