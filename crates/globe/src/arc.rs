/// One route leg, as indices into the stop list it was derived from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Arc {
    pub start: usize,
    pub end: usize,
}

/// Arcs for an itinerary of `stop_count` stops: the consecutive pairs,
/// plus a closing leg back to the first stop when there are more than
/// two. One or zero stops yield no arcs; an out-and-back between two
/// stops is not closed into a degenerate loop.
pub fn route_arcs(stop_count: usize) -> Vec<Arc> {
    if stop_count < 2 {
        return Vec::new();
    }

    let mut arcs: Vec<Arc> = Vec::with_capacity(stop_count);
    for i in 0..stop_count - 1 {
        arcs.push(Arc {
            start: i,
            end: i + 1,
        });
    }
    if stop_count > 2 {
        arcs.push(Arc {
            start: stop_count - 1,
            end: 0,
        });
    }
    arcs
}
