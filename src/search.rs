use std::ops::Range;

// Nearest-neighbour search over a fixed node set via per-dimension sorted
// projections. Each dimension keeps its projections in ascending order together
// with a backward map (rank -> node index) and a forward map (node index ->
// rank), so that a query's candidates can be read straight out of the narrowest
// slab and trimmed against the others with map lookups instead of comparisons.
pub struct ProjectionIndex {
    nodes: Vec<Vec<f64>>,
    // ordered[d][r] = r-th smallest projection onto dimension d
    ordered: Vec<Vec<f64>>,
    // ordered[d][r] == nodes[backward[d][r]][d]
    backward: Vec<Vec<usize>>,
    // forward[d][backward[d][r]] == r
    forward: Vec<Vec<usize>>,
}

impl ProjectionIndex {
    // Presorts every dimension of the node set and builds both maps
    pub fn new(nodes: Vec<Vec<f64>>) -> Self {
        let dimensions = nodes.first().map_or(0, Vec::len);
        let count = nodes.len();

        let mut ordered = Vec::with_capacity(dimensions);
        let mut backward = Vec::with_capacity(dimensions);
        let mut forward = Vec::with_capacity(dimensions);
        for d in 0..dimensions {
            let mut ranks: Vec<usize> = (0..count).collect();
            ranks.sort_by(|&a, &b| nodes[a][d].total_cmp(&nodes[b][d]));

            let mut fwd = vec![0; count];
            for (rank, &node) in ranks.iter().enumerate() {
                fwd[node] = rank;
            }

            ordered.push(ranks.iter().map(|&node| nodes[node][d]).collect());
            backward.push(ranks);
            forward.push(fwd);
        }

        Self {
            nodes,
            ordered,
            backward,
            forward,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn dimensions(&self) -> usize {
        self.ordered.len()
    }

    pub fn node(&self, index: usize) -> &[f64] {
        &self.nodes[index]
    }

    // Finds the node nearest to `query` (by Euclidean distance) among those
    // inside the hypercube of side 2 * epsilon centred on the query, or None
    // if the hypercube is empty. Points outside the hypercube are never
    // returned, even when they are closer than every point inside it.
    pub fn nearest_within(&self, query: &[f64], epsilon: f64) -> Option<usize> {
        if self.nodes.is_empty() || self.ordered.is_empty() {
            return None;
        }
        assert_eq!(query.len(), self.dimensions());

        // Per-dimension slab of ranks whose projection lies in [q - e, q + e]
        let slabs: Vec<Range<usize>> = query
            .iter()
            .zip(&self.ordered)
            .map(|(&q, ordered)| {
                let lower = ordered.partition_point(|&v| v < q - epsilon);
                let upper = ordered.partition_point(|&v| v <= q + epsilon);
                lower..upper
            })
            .collect();

        // Start from the narrowest slab and trim against the rest in
        // ascending order of slab width
        let mut dims: Vec<usize> = (0..slabs.len()).collect();
        dims.sort_by_key(|&d| slabs[d].len());

        let first = dims[0];
        let mut candidates = self.backward[first][slabs[first].clone()].to_vec();
        for &d in &dims[1..] {
            candidates.retain(|&node| slabs[d].contains(&self.forward[d][node]));
        }

        // Exhaustive scan of the survivors; squared distances order the same
        // as true distances
        let mut best = None;
        let mut best_distance = f64::MAX;
        for &node in &candidates {
            let distance: f64 = self.nodes[node]
                .iter()
                .zip(query)
                .map(|(a, b)| (a - b) * (a - b))
                .sum();
            if distance < best_distance {
                best_distance = distance;
                best = Some(node);
            }
        }
        best
    }
}
