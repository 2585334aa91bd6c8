use crate::ir::Graph;
use rand::Rng;

const ITERATIONS: usize = 50;
const THRESHOLD: f32 = 1e-4;
const MIN_DISTANCE: f32 = 0.01;

/// Fruchterman–Reingold force-directed placement.
///
/// Nodes start at random positions in the unit square. Every pair repels
/// with `k^2 / d` and every edge attracts with `d^2 / k` where
/// `k = 1 / sqrt(n)`; each step moves a node by at most the current
/// temperature, which cools linearly to zero over the iteration budget.
pub(super) fn spring_positions<R: Rng + ?Sized>(graph: &Graph, rng: &mut R) -> Vec<(f32, f32)> {
    let count = graph.node_count();
    match count {
        0 => return Vec::new(),
        1 => return vec![(0.0, 0.0)],
        _ => {}
    }

    let mut pos: Vec<(f32, f32)> = (0..count).map(|_| (rng.r#gen(), rng.r#gen())).collect();
    let mut adjacency = vec![false; count * count];
    for (a, b) in graph.edges() {
        adjacency[a * count + b] = true;
        adjacency[b * count + a] = true;
    }

    let k = (1.0 / count as f32).sqrt();
    let mut temperature = extent(&pos) * 0.1;
    let cooling = temperature / (ITERATIONS as f32 + 1.0);
    let mut displacement = vec![(0.0f32, 0.0f32); count];

    for iteration in 0..ITERATIONS {
        for (i, disp) in displacement.iter_mut().enumerate() {
            let mut dx_total = 0.0;
            let mut dy_total = 0.0;
            for j in 0..count {
                if i == j {
                    continue;
                }
                let dx = pos[i].0 - pos[j].0;
                let dy = pos[i].1 - pos[j].1;
                let distance = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
                let attraction = if adjacency[i * count + j] {
                    distance / k
                } else {
                    0.0
                };
                let force = k * k / (distance * distance) - attraction;
                dx_total += dx * force;
                dy_total += dy * force;
            }
            *disp = (dx_total, dy_total);
        }

        let mut moved = 0.0f32;
        for (point, (dx, dy)) in pos.iter_mut().zip(&displacement) {
            let length = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
            let step_x = dx * temperature / length;
            let step_y = dy * temperature / length;
            point.0 += step_x;
            point.1 += step_y;
            moved += (step_x * step_x + step_y * step_y).sqrt();
        }
        temperature -= cooling;

        if moved / (count as f32) < THRESHOLD {
            tracing::debug!(iteration, "spring layout converged");
            break;
        }
    }

    pos
}

fn extent(pos: &[(f32, f32)]) -> f32 {
    let (mut min_x, mut min_y) = (f32::MAX, f32::MAX);
    let (mut max_x, mut max_y) = (f32::MIN, f32::MIN);
    for (x, y) in pos {
        min_x = min_x.min(*x);
        min_y = min_y.min(*y);
        max_x = max_x.max(*x);
        max_y = max_y.max(*y);
    }
    (max_x - min_x).max(max_y - min_y)
}
