// Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! A capacitated network on the nodes `0..n`.
//!
//! Capacities are stored in a dense `n × n` matrix. An edge `(u,v)`
//! exists for every ordered pair of distinct nodes, a capacity of `0`
//! means that the edge is absent.
//!
//! # Example
//!
//! ```
//! use rs_maxflow::Net;
//!
//! let mut net = Net::new(4);
//! net.add_edge(0, 1, 5).unwrap();
//! net.add_edge(0, 2, 5).unwrap();
//! net.add_edge(1, 3, 5).unwrap();
//! net.add_edge(2, 3, 5).unwrap();
//!
//! assert_eq!(net.num_edges(), 4);
//! assert_eq!(net.max_flow(0, 3), Ok(10));
//! ```

use crate::error::{Error, Result};
use crate::maxflow::PushRelabel;

use crate::num::traits::{CheckedAdd, NumAssign, Signed};

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};
#[cfg(feature = "serialize")]
use std::convert::TryFrom;

/// A directed network with capacities on its edges.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serialize",
    serde(
        try_from = "NetworkData<F>",
        into = "NetworkData<F>",
        bound(
            serialize = "F: serde::Serialize + NumAssign + Signed + CheckedAdd + Ord + Copy",
            deserialize = "F: serde::Deserialize<'de> + NumAssign + Signed + CheckedAdd + Ord + Copy"
        )
    )
)]
pub struct Network<F> {
    /// The number of nodes.
    n: usize,
    /// The capacity matrix, row `u` holds the capacities of the edges leaving `u`.
    capacity: Vec<F>,
}

impl<F> Network<F>
where
    F: NumAssign + Signed + CheckedAdd + Ord + Copy,
{
    /// Return a network with `n` nodes and no edges.
    ///
    /// # Panics
    ///
    /// Panics if `n * n` does not fit into `usize`. The capacity matrix
    /// has `n * n` entries, so `n` should stay well below that limit.
    pub fn new(n: usize) -> Self {
        let size = n.checked_mul(n).expect("number of nodes too large");
        Network {
            n,
            capacity: vec![F::zero(); size],
        }
    }

    /// Return a network with `n` nodes and the given edges.
    ///
    /// Each item is a triple `(u, v, cap)`, see [`Network::add_edge`].
    pub fn with_edges<I>(n: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, F)>,
    {
        let mut net = Network::new(n);
        for (u, v, cap) in edges {
            net.add_edge(u, v, cap)?;
        }
        Ok(net)
    }

    /// Return the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.n
    }

    /// Return the number of edges with positive capacity.
    pub fn num_edges(&self) -> usize {
        self.capacity.iter().filter(|&&c| c > F::zero()).count()
    }

    /// Set the capacity of the edge `(u,v)`.
    ///
    /// A previous capacity of the same edge is overwritten, the reverse
    /// edge `(v,u)` is not touched.
    pub fn add_edge(&mut self, u: usize, v: usize, cap: F) -> Result<()> {
        self.check_node(u)?;
        self.check_node(v)?;
        if u == v {
            return Err(Error::Loop { node: u });
        }
        if cap < F::zero() {
            return Err(Error::NegativeCapacity { u, v });
        }
        self.capacity[u * self.n + v] = cap;
        Ok(())
    }

    /// Return the capacity of the edge `(u,v)`.
    ///
    /// # Panics
    ///
    /// Panics if `u` or `v` is not a node of the network.
    pub fn capacity(&self, u: usize, v: usize) -> F {
        assert!(u < self.n && v < self.n, "invalid edge ({},{})", u, v);
        self.capacity[u * self.n + v]
    }

    /// Return an iterator over all edges with positive capacity.
    ///
    /// The edges are returned as triples `(u, v, cap)` ordered by `u`
    /// and then `v`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, F)> + '_ {
        let n = self.n;
        self.capacity
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > F::zero())
            .map(move |(i, &c)| (i / n, i % n, c))
    }

    /// Return the total capacity of the edges leaving `u`.
    ///
    /// Returns `None` if the sum does not fit into `F`.
    pub fn outflow_capacity(&self, u: usize) -> Option<F> {
        self.row(u).iter().try_fold(F::zero(), |s, c| s.checked_add(c))
    }

    /// Return the total capacity of the edges entering `v`.
    ///
    /// Returns `None` if the sum does not fit into `F`.
    pub fn inflow_capacity(&self, v: usize) -> Option<F> {
        (0..self.n).try_fold(F::zero(), |s, u| s.checked_add(&self.capacity(u, v)))
    }

    /// Return an error if a flow from `src` could leave the range of `F`.
    ///
    /// Every excess is bounded by the total capacity leaving `src`, and
    /// every residual capacity of `(u,v)` by `capacity(u,v) + capacity(v,u)`.
    pub fn check_overflow(&self, src: usize) -> Result<()> {
        self.check_node(src)?;
        if self.outflow_capacity(src).is_none() {
            return Err(Error::Overflow { node: src });
        }
        for u in 0..self.n {
            for v in u + 1..self.n {
                if self.capacity(u, v).checked_add(&self.capacity(v, u)).is_none() {
                    return Err(Error::Overflow { node: u });
                }
            }
        }
        Ok(())
    }

    /// Compute the value of a maximum flow from `src` to `snk`.
    ///
    /// This is a shortcut for running [`PushRelabel`] on this network.
    pub fn max_flow(&self, src: usize, snk: usize) -> Result<F> {
        PushRelabel::new(self).solve(src, snk)
    }

    /// Return an error if `u` is not a node of the network.
    pub fn check_node(&self, u: usize) -> Result<()> {
        if u < self.n {
            Ok(())
        } else {
            Err(Error::InvalidNode {
                node: u,
                num_nodes: self.n,
            })
        }
    }

    /// The capacities of the edges leaving `u`.
    pub(crate) fn row(&self, u: usize) -> &[F] {
        &self.capacity[u * self.n..(u + 1) * self.n]
    }
}

/// Serialized form of a network: the number of nodes and the edge list.
#[cfg(feature = "serialize")]
#[derive(Serialize, Deserialize)]
pub struct NetworkData<F> {
    pub num_nodes: usize,
    pub edges: Vec<(usize, usize, F)>,
}

#[cfg(feature = "serialize")]
impl<F> From<Network<F>> for NetworkData<F>
where
    F: NumAssign + Signed + CheckedAdd + Ord + Copy,
{
    fn from(net: Network<F>) -> Self {
        NetworkData {
            num_nodes: net.num_nodes(),
            edges: net.edges().collect(),
        }
    }
}

#[cfg(feature = "serialize")]
impl<F> TryFrom<NetworkData<F>> for Network<F>
where
    F: NumAssign + Signed + CheckedAdd + Ord + Copy,
{
    type Error = Error;

    fn try_from(data: NetworkData<F>) -> Result<Self> {
        Network::with_edges(data.num_nodes, data.edges)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, Net};

    #[test]
    fn test_add_edge() {
        let mut net = Net::new(3);
        net.add_edge(0, 1, 4).unwrap();
        net.add_edge(1, 2, 3).unwrap();
        assert_eq!(net.capacity(0, 1), 4);
        assert_eq!(net.capacity(1, 0), 0);
        assert_eq!(net.num_edges(), 2);

        // a second call overwrites the capacity
        net.add_edge(0, 1, 7).unwrap();
        assert_eq!(net.capacity(0, 1), 7);
        assert_eq!(net.num_edges(), 2);

        // zero capacity removes the edge
        net.add_edge(1, 2, 0).unwrap();
        assert_eq!(net.num_edges(), 1);
    }

    #[test]
    fn test_invalid_edges() {
        let mut net = Net::new(3);
        assert_eq!(net.add_edge(0, 3, 1), Err(Error::InvalidNode { node: 3, num_nodes: 3 }));
        assert_eq!(net.add_edge(5, 0, 1), Err(Error::InvalidNode { node: 5, num_nodes: 3 }));
        assert_eq!(net.add_edge(1, 1, 1), Err(Error::Loop { node: 1 }));
        assert_eq!(net.add_edge(0, 1, -2), Err(Error::NegativeCapacity { u: 0, v: 1 }));
        assert_eq!(net.num_edges(), 0);
    }

    #[test]
    fn test_edges() {
        let net = Net::with_edges(3, vec![(2, 0, 1), (0, 2, 5), (0, 1, 3)]).unwrap();
        assert_eq!(net.edges().collect::<Vec<_>>(), vec![(0, 1, 3), (0, 2, 5), (2, 0, 1)]);
        assert_eq!(net.outflow_capacity(0), Some(8));
        assert_eq!(net.inflow_capacity(0), Some(1));
        assert_eq!(net.inflow_capacity(2), Some(5));
    }

    #[test]
    fn test_check_overflow() {
        let big = i64::max_value();

        let net = Net::with_edges(3, vec![(0, 1, big), (0, 2, big), (1, 2, 1)]).unwrap();
        assert_eq!(net.outflow_capacity(0), None);
        assert_eq!(net.inflow_capacity(2), None);
        assert_eq!(net.check_overflow(0), Err(Error::Overflow { node: 0 }));
        assert_eq!(net.check_overflow(1), Ok(()));

        let net = Net::with_edges(3, vec![(0, 1, big), (1, 0, big), (1, 2, 5)]).unwrap();
        assert_eq!(net.outflow_capacity(0), Some(big));
        assert_eq!(net.check_overflow(2), Err(Error::Overflow { node: 0 }));

        let net = Net::with_edges(3, vec![(0, 1, big), (1, 2, 1)]).unwrap();
        assert_eq!(net.check_overflow(0), Ok(()));
        assert_eq!(net.check_overflow(3), Err(Error::InvalidNode { node: 3, num_nodes: 3 }));
    }

    #[test]
    #[should_panic]
    fn test_too_many_nodes() {
        Net::new(usize::max_value());
    }

    #[test]
    fn test_empty() {
        let net = Net::new(0);
        assert_eq!(net.num_nodes(), 0);
        assert_eq!(net.max_flow(0, 1), Err(Error::InvalidNode { node: 0, num_nodes: 0 }));
    }

    #[cfg(feature = "serialize")]
    #[test]
    fn test_serde() {
        let net = Net::with_edges(3, vec![(0, 1, 3), (1, 2, 2)]).unwrap();
        let json = serde_json::to_string(&net).unwrap();
        assert_eq!(json, r#"{"num_nodes":3,"edges":[[0,1,3],[1,2,2]]}"#);

        let net2: Net = serde_json::from_str(&json).unwrap();
        assert_eq!(net2.edges().collect::<Vec<_>>(), net.edges().collect::<Vec<_>>());

        assert!(serde_json::from_str::<Net>(r#"{"num_nodes":2,"edges":[[0,2,1]]}"#).is_err());
    }
}
