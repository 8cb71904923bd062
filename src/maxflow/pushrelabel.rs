// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! This module implements a push relabel algorithm for solving max
//! flow problems.
//!
//! The algorithm starts with a preflow that saturates all edges leaving
//! the source. Active nodes, i.e. nodes other than source and sink with
//! positive excess, are kept in a FIFO queue. The first node of the
//! queue pushes its excess over the first admissible edge (in order of
//! increasing node index). If there is no admissible edge, the node is
//! relabelled. The node leaves the queue once its excess is zero.
//!
//! # Example
//!
//! ```
//! use rs_maxflow::maxflow::pushrelabel;
//! use rs_maxflow::Net;
//!
//! let net = Net::with_edges(
//!     4,
//!     vec![(0, 1, 10), (0, 2, 5), (1, 2, 2), (1, 3, 4), (2, 3, 9)],
//! )
//! .unwrap();
//!
//! let (value, flow) = pushrelabel(&net, 0, 3).unwrap();
//!
//! assert_eq!(value, 11);
//! assert!(flow.iter().all(|&(u, v, f)| f >= 0 && f <= net.capacity(u, v)));
//! assert!((1..3).all(|u| {
//!     flow.iter().filter(|&&(_, v, _)| v == u).map(|&(_, _, f)| f).sum::<i64>() ==
//!     flow.iter().filter(|&&(v, _, _)| v == u).map(|&(_, _, f)| f).sum::<i64>()
//! }));
//! ```

use crate::error::{Error, Result};
use crate::network::Network;

use std::cmp::min;
use std::collections::VecDeque;

use crate::num::traits::{CheckedAdd, NumAssign, Signed};
use log::{debug, trace};

/// The push-relabel algorithm.
///
/// This struct contains all algorithmic working data.
pub struct PushRelabel<'a, F> {
    /// The network the flow problem is solved on.
    net: &'a Network<F>,

    /// Data associated with each node.
    nodes: Vec<NodeInfo<F>>,
    /// The residual neighbours of each node in increasing order.
    neighs: Vec<Vec<usize>>,
    /// Current flow on each ordered pair of nodes, row-major.
    flow: Vec<F>,
    /// The queue of active nodes.
    queue: VecDeque<usize>,
    /// The flow value.
    value: F,
    /// The number of push operations performed during the algorithm.
    pub cnt_push: usize,
    /// The number of relabel operations performed during the algorithm.
    pub cnt_relabel: usize,
}

/// Data associated with a node.
#[derive(Clone)]
struct NodeInfo<Flow> {
    /// The current height of the node.
    height: usize,
    /// The excess of flow of the node.
    excess: Flow,
    /// Whether the node is in the queue of active nodes.
    active: bool,
}

impl<Flow> NodeInfo<Flow>
where
    Flow: NumAssign,
{
    fn reset(&mut self) {
        self.height = 0;
        self.excess = Flow::zero();
        self.active = false;
    }
}

impl<'a, F> PushRelabel<'a, F>
where
    F: NumAssign + Signed + CheckedAdd + Ord + Copy,
{
    /// Return a new push-relabel algorithm data structure for the network `net`.
    pub fn new(net: &'a Network<F>) -> Self {
        let n = net.num_nodes();
        PushRelabel {
            net,
            nodes: vec![
                NodeInfo {
                    height: 0,
                    excess: F::zero(),
                    active: false,
                };
                n
            ],
            // Pushing over (u,v) creates residual capacity on (v,u), so
            // both directions are neighbours.
            neighs: (0..n)
                .map(|u| {
                    (0..n)
                        .filter(|&v| net.capacity(u, v) > F::zero() || net.capacity(v, u) > F::zero())
                        .collect()
                })
                .collect(),
            flow: vec![F::zero(); n * n],
            queue: VecDeque::with_capacity(n),
            value: F::zero(),
            cnt_push: 0,
            cnt_relabel: 0,
        }
    }

    /// Return a reference to the underlying network.
    pub fn as_network(&self) -> &'a Network<F> {
        self.net
    }

    /// Return the flow value.
    ///
    /// The function returns 0 if the flow has not been computed, yet.
    pub fn value(&self) -> F {
        self.value
    }

    /// Return the flow on the edge `(u,v)`.
    ///
    /// The flow is antisymmetric, i.e. `flow(u, v) == -flow(v, u)`.
    ///
    /// # Panics
    ///
    /// Panics if `u` or `v` is not a node of the network.
    pub fn flow(&self, u: usize, v: usize) -> F {
        let n = self.nodes.len();
        assert!(u < n && v < n, "invalid edge ({},{})", u, v);
        self.flow[u * self.nodes.len() + v]
    }

    /// Return the excess of node `u`.
    ///
    /// # Panics
    ///
    /// Panics if `u` is not a node of the network.
    pub fn excess(&self, u: usize) -> F {
        self.nodes[u].excess
    }

    /// Return the height of node `u`.
    ///
    /// # Panics
    ///
    /// Panics if `u` is not a node of the network.
    pub fn height(&self, u: usize) -> usize {
        self.nodes[u].height
    }

    /// Run the push-relabel algorithm from some source to some sink node.
    ///
    /// The method solves the max flow problem from the source node `src`
    /// to the sink node `snk` and returns the flow value. All data of a
    /// previous run is discarded.
    pub fn solve(&mut self, src: usize, snk: usize) -> Result<F> {
        self.net.check_node(src)?;
        self.net.check_node(snk)?;
        if src == snk {
            return Err(Error::SourceIsSink { node: src });
        }
        self.net.check_overflow(src)?;

        debug!(
            "push-relabel: {} nodes, {} edges, source {}, sink {}",
            self.net.num_nodes(),
            self.net.num_edges(),
            src,
            snk
        );

        self.cnt_push = 0;
        self.cnt_relabel = 0;
        self.value = F::zero();
        self.init_preflow(src);

        self.queue.clear();
        for u in 0..self.nodes.len() {
            if u != src && u != snk && self.nodes[u].excess > F::zero() {
                self.activate(u);
            }
        }

        while let Some(&u) = self.queue.front() {
            if let Some(v) = self.find_admissible(u) {
                self.push(u, v);

                // check if node is fully discharged
                if self.nodes[u].excess.is_zero() {
                    self.queue.pop_front();
                    self.nodes[u].active = false;
                }

                if v != src && v != snk && !self.nodes[v].active {
                    self.activate(v);
                }
            } else if !self.relabel(u) {
                return Err(Error::Stalled { node: u });
            }
        }

        self.value = self.nodes[snk].excess;

        debug!(
            "push-relabel: finished with {} pushes and {} relabels",
            self.cnt_push, self.cnt_relabel
        );

        Ok(self.value)
    }

    /// Initialize preflow algorithm.
    ///
    /// All edges leaving the source node are saturated, the source's
    /// height is set to `n`, all other heights are set to `0`.
    fn init_preflow(&mut self, src: usize) {
        for node in &mut self.nodes {
            node.reset();
        }
        for f in &mut self.flow {
            *f = F::zero();
        }

        let n = self.nodes.len();
        self.nodes[src].height = n;

        // send maximal flow out of source
        for (v, &cap) in self.net.row(src).iter().enumerate() {
            if cap > F::zero() {
                self.flow[src * n + v] = cap;
                self.flow[v * n + src] = -cap;
                self.nodes[v].excess += cap;
                self.nodes[src].excess -= cap;
            }
        }
    }

    /// Append `u` to the queue of active nodes.
    fn activate(&mut self, u: usize) {
        debug_assert!(self.nodes[u].excess > F::zero());
        self.nodes[u].active = true;
        self.queue.push_back(u);
    }

    /// Return the residual capacity of the edge `(u,v)`.
    fn residual(&self, u: usize, v: usize) -> F {
        self.net.capacity(u, v) - self.flow(u, v)
    }

    /// Return the first admissible edge leaving `u`, if any.
    fn find_admissible(&self, u: usize) -> Option<usize> {
        let h_u = self.nodes[u].height;
        self.neighs[u]
            .iter()
            .copied()
            .find(|&v| h_u == self.nodes[v].height + 1 && self.residual(u, v) > F::zero())
    }

    /// The push operation.
    ///
    /// Push as much excess as possible from `u` over the admissible
    /// edge `(u,v)` and return the amount of flow pushed.
    fn push(&mut self, u: usize, v: usize) -> F {
        let n = self.nodes.len();
        let df = min(self.nodes[u].excess, self.residual(u, v));

        debug_assert_eq!(self.nodes[u].height, self.nodes[v].height + 1);
        debug_assert!(df > F::zero());

        self.flow[u * n + v] += df;
        self.flow[v * n + u] -= df;
        self.nodes[u].excess -= df;
        self.nodes[v].excess += df;

        self.cnt_push += 1;
        trace!("push {} -> {}", u, v);

        df
    }

    /// The relabel operation.
    ///
    /// Raise the height of `u` to one more than the lowest node reachable
    /// over a residual edge. The function returns `false` iff there is no
    /// such node, in which case the height is unchanged.
    fn relabel(&mut self, u: usize) -> bool {
        debug_assert!(self.nodes[u].excess > F::zero());

        let h_neighbor = self.neighs[u]
            .iter()
            .filter(|&&v| self.residual(u, v) > F::zero())
            .map(|&v| self.nodes[v].height)
            .min();

        let h_new = match h_neighbor {
            Some(h) => h + 1,
            None => return false,
        };

        debug_assert!(h_new > self.nodes[u].height);
        debug_assert!(h_new < 2 * self.nodes.len());

        // count number of relabellings
        self.cnt_relabel += 1;
        trace!("relabel {} from {} to {}", u, self.nodes[u].height, h_new);

        self.nodes[u].height = h_new;
        true
    }
}


/// Solve the maxflow problem using the push-relabel algorithm.
///
/// The function solves the max flow problem from the source node `src`
/// to the sink node `snk` on the network `net`.
///
/// The function returns the flow value and the flow on each edge with
/// positive capacity. Edges are listed as in [`Network::edges`].
pub fn pushrelabel<F>(net: &Network<F>, src: usize, snk: usize) -> Result<(F, Vec<(usize, usize, F)>)>
where
    F: NumAssign + Signed + CheckedAdd + Ord + Copy,
{
    let mut maxflow = PushRelabel::new(net);
    let value = maxflow.solve(src, snk)?;
    Ok((
        value,
        net.edges()
            .map(|(u, v, _)| (u, v, maxflow.flow(u, v).max(F::zero())))
            .collect(),
    ))
}
