use std::f32::consts::TAU;

/// Places `count` nodes evenly on the unit circle, counter-clockwise from the
/// positive x axis. A lone node sits at the origin.
pub(super) fn circular_positions(count: usize) -> Vec<(f32, f32)> {
    if count == 1 {
        return vec![(0.0, 0.0)];
    }
    (0..count)
        .map(|idx| {
            let theta = TAU * idx as f32 / count as f32;
            (theta.cos(), theta.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nodes_sit_on_unit_circle() {
        let points = circular_positions(35);
        assert_eq!(points.len(), 35);
        for (x, y) in &points {
            assert!(((x * x + y * y).sqrt() - 1.0).abs() < 1e-5);
        }
        assert!((points[0].0 - 1.0).abs() < 1e-6);
        assert!(points[0].1.abs() < 1e-6);
    }

    #[test]
    fn degenerate_counts() {
        assert!(circular_positions(0).is_empty());
        assert_eq!(circular_positions(1), vec![(0.0, 0.0)]);
    }
}
