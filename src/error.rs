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

//! Errors reported when building a network or solving a flow problem.

use thiserror::Error;

/// Error when building a network or computing a flow.
///
/// All variants except [`Error::Stalled`] are precondition violations
/// detected before any flow is computed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A node index is not in `0..num_nodes`.
    #[error("invalid node {node} (must be in 0..{num_nodes})")]
    InvalidNode { node: usize, num_nodes: usize },

    /// An edge has been given a negative capacity.
    #[error("negative capacity on edge ({u},{v})")]
    NegativeCapacity { u: usize, v: usize },

    /// An edge starts and ends at the same node.
    #[error("invalid loop ({node},{node})")]
    Loop { node: usize },

    /// Source and sink node are equal.
    #[error("source and sink node must not be equal (both are {node})")]
    SourceIsSink { node: usize },

    /// The capacities at a node do not fit into the flow type.
    ///
    /// The sum of the capacities leaving the source and the sum of the
    /// capacities of each pair of opposite edges must be representable.
    #[error("capacities at node {node} exceed the range of the flow type")]
    Overflow { node: usize },

    /// An active node has no residual edge left.
    ///
    /// This cannot happen for finite capacities, the excess of an active node
    /// can always be sent back to the source.
    #[error("active node {node} has no residual edge")]
    Stalled { node: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
