use cs_core::Side;
use serde::{Deserialize, Serialize};

use crate::society::CircularSociety;

/// One endpoint of one arc, positioned on the circle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointEvent {
    /// Coordinate of the endpoint.
    pub position: f64,
    /// Whether this is the arc's left or right end.
    pub side: Side,
    /// Name of the arc owning the endpoint.
    pub owner: String,
}

impl EndpointEvent {
    /// Returns the `L<name>` / `R<name>` tag of the event.
    pub fn tagged_name(&self) -> String {
        format!("{}{}", self.side.tag(), self.owner)
    }
}

/// Cyclic sequence of all `2N` endpoints of a society in ascending position.
///
/// Ties between a left and a right endpoint put the right endpoint first.
/// Endpoints on the same side sharing a position keep the society's order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EndpointSweep {
    events: Vec<EndpointEvent>,
}

impl EndpointSweep {
    /// Returns the events in sweep order.
    pub fn events(&self) -> &[EndpointEvent] {
        &self.events
    }

    /// Returns the number of events (`2N`).
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns whether the sweep is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the event positions in sweep order.
    pub fn positions(&self) -> Vec<f64> {
        self.events.iter().map(|event| event.position).collect()
    }

    /// Returns the `L<name>` / `R<name>` tags in sweep order.
    pub fn tagged_names(&self) -> Vec<String> {
        self.events.iter().map(EndpointEvent::tagged_name).collect()
    }

    /// Returns the event at cyclic offset `index`. Panics on an empty sweep.
    pub fn cyclic(&self, index: usize) -> &EndpointEvent {
        &self.events[index % self.events.len()]
    }

    /// Rotates the sequence to begin at the first endpoint at or after
    /// `starting_point`. Endpoints before it are moved to the end in order.
    /// A non-positive starting point leaves the sequence unchanged.
    pub fn rotated(&self, starting_point: f64) -> EndpointSweep {
        if starting_point <= 0.0 {
            return self.clone();
        }
        let (mut head, tail): (Vec<_>, Vec<_>) = self
            .events
            .iter()
            .cloned()
            .partition(|event| event.position >= starting_point);
        head.extend(tail);
        EndpointSweep { events: head }
    }
}

/// Merges the sorted left and right endpoints of `society` into one sweep.
pub fn list_endpoints(society: &CircularSociety) -> EndpointSweep {
    let arcs = society.arcs();
    let n = arcs.len();

    let mut left_order: Vec<usize> = (0..n).collect();
    left_order.sort_by(|&a, &b| arcs[a].left().total_cmp(&arcs[b].left()));
    let mut right_order: Vec<usize> = (0..n).collect();
    right_order.sort_by(|&a, &b| arcs[a].right().total_cmp(&arcs[b].right()));

    let mut events = Vec::with_capacity(2 * n);
    let (mut left_i, mut right_i) = (0, 0);
    for _ in 0..2 * n {
        let take_left = if left_i < n && right_i < n {
            arcs[left_order[left_i]].left() < arcs[right_order[right_i]].right()
        } else {
            right_i == n
        };
        if take_left {
            let arc = &arcs[left_order[left_i]];
            events.push(EndpointEvent {
                position: arc.left(),
                side: Side::Left,
                owner: arc.name().to_string(),
            });
            left_i += 1;
        } else {
            let arc = &arcs[right_order[right_i]];
            events.push(EndpointEvent {
                position: arc.right(),
                side: Side::Right,
                owner: arc.name().to_string(),
            });
            right_i += 1;
        }
    }

    EndpointSweep { events }
}
