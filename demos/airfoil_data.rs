//! Sample point set: a symmetric airfoil profile with its chord line.
//!
//! 19 upper-surface points from the leading edge, 18 mirrored lower-surface
//! points, then 19 points on the chord line ending at the trailing edge.

/// Number of points in [`AIRFOIL_POINTS`].
pub const AIRFOIL_POINT_COUNT: usize = 56;

/// Airfoil profile coordinates as `[x, y]` pairs.
pub const AIRFOIL_POINTS: [[f64; 2]; AIRFOIL_POINT_COUNT] = [
    // Upper surface
    [0.0, 0.0],
    [0.7, 1.4],
    [2.7, 2.7],
    [6.0, 3.8],
    [10.5, 4.8],
    [16.1, 5.5],
    [22.7, 5.9],
    [29.9, 6.0],
    [37.7, 5.9],
    [45.9, 5.5],
    [54.1, 5.0],
    [62.3, 4.4],
    [70.1, 3.6],
    [77.3, 2.9],
    [83.9, 2.1],
    [89.5, 1.4],
    [94.0, 0.8],
    [97.3, 0.4],
    [99.3, 0.1],
    // Lower surface
    [0.7, -1.4],
    [2.7, -2.7],
    [6.0, -3.8],
    [10.5, -4.8],
    [16.1, -5.5],
    [22.7, -5.9],
    [29.9, -6.0],
    [37.7, -5.9],
    [45.9, -5.5],
    [54.1, -5.0],
    [62.3, -4.4],
    [70.1, -3.6],
    [77.3, -2.9],
    [83.9, -2.1],
    [89.5, -1.4],
    [94.0, -0.8],
    [97.3, -0.4],
    [99.3, -0.1],
    // Chord line
    [0.7, 0.0],
    [2.7, 0.0],
    [6.0, 0.0],
    [10.5, 0.0],
    [16.1, 0.0],
    [22.7, 0.0],
    [29.9, 0.0],
    [37.7, 0.0],
    [45.9, 0.0],
    [54.1, 0.0],
    [62.3, 0.0],
    [70.1, 0.0],
    [77.3, 0.0],
    [83.9, 0.0],
    [89.5, 0.0],
    [94.0, 0.0],
    [97.3, 0.0],
    [99.3, 0.0],
    [100.0, 0.0],
];
