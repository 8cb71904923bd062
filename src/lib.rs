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

#![forbid(unsafe_code)]

//! A library for computing maximum flows with the push-relabel method.
//!
//! A [`Network`] is built on the nodes `0..n` by setting the capacities
//! of its edges. The maximum flow from a source to a sink is computed by
//! [`maxflow::PushRelabel`].
//!
//! ```
//! use rs_maxflow::Net;
//!
//! let mut net = Net::new(2);
//! net.add_edge(0, 1, 10).unwrap();
//! assert_eq!(net.max_flow(0, 1), Ok(10));
//! ```

mod num {
    pub use num_traits as traits;
}

pub mod error;
pub use self::error::{Error, Result};

pub mod network;
pub use self::network::Network;

/// The default network type with integer capacities.
pub type Net = self::Network<i64>;

// # Algorithms

pub mod maxflow;

// # Input and output

#[cfg(any(feature = "dimacs"))]
pub mod dimacs;
