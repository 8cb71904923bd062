// Copyright (c) 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! This module implements a read function for the famous DIMACS max
//! flow format. A DIMACS file must look as follows.
//!
//! 1. empty lines are allowed and ignored
//! 2. a line starting with `c` is a comment line and is ignored
//! 3. the first non-comment line must have the form `p max <n> <m>`,
//!    where `<n>` is an integer >= 2 denoting the number of nodes and
//!    `<m>` an integer >= 0 denoting the number of arcs. The network
//!    stores a dense `n × n` capacity matrix, so `n * n` must fit into
//!    `usize`.
//! 4. after the problem line there must follow exactly two node lines
//!    of the form `n <node> <type>` where `<node>` is the node number
//!    between `1..n` and `<type>` is either `s` (if this is the source
//!    node) or `t` (if this is the sink node). Source and sink must be
//!    different nodes.
//! 5. after the node lines there must be exactly `m` arc lines `a <u>
//!    <v> <c>` denoting the source and sink nodes of an arc as well as
//!    the arcs capacity `<c>` (an integer >= 0).
//!
//! Loops are not allowed. A repeated arc overwrites the capacity of
//! the earlier one.

use super::{DimacsReader, Error, Result};
use crate::network::Network;
use crate::num::traits::{CheckedAdd, NumAssign, Signed};

use std::fmt::Display;
use std::io::{Read, Write};
use std::str::FromStr;

/// A max-flow instance.
#[derive(Debug)]
pub struct Instance<F> {
    /// The network.
    pub network: Network<F>,
    /// The source node.
    pub src: usize,
    /// The sink node.
    pub snk: usize,
}

pub fn read<R: Read, F>(r: R) -> Result<Instance<F>>
where
    F: NumAssign + Signed + CheckedAdd + Ord + Copy + FromStr,
    F::Err: Display,
{
    let mut reader = DimacsReader::new(r);

    // Read the problem line.
    let mut pline = reader.expect_line('p')?;
    pline.expect("max")?;
    let nnodes: usize = pline.number()?;
    let nedges: usize = pline.number()?;
    pline.end()?;

    if nnodes < 2 {
        return Err(Error::Data {
            line: pline.line,
            msg: format!("invalid number of nodes {} (must be at least 2)", nnodes),
        });
    }
    if nnodes.checked_mul(nnodes).is_none() {
        return Err(Error::Data {
            line: pline.line,
            msg: format!("too many nodes {}", nnodes),
        });
    }

    let mut network = Network::new(nnodes);
    let mut src = None;
    let mut snk = None;

    for _ in 0..2 {
        let mut nline = reader.expect_line('n')?;
        let u: usize = nline.number()?;
        if u < 1 || u > nnodes {
            return Err(Error::Data {
                line: nline.line,
                msg: format!("invalid node id {} (must be in 1..{})", u, nnodes),
            });
        }
        let what = nline.str()?;
        match what {
            "s" => {
                if src.is_some() {
                    return Err(Error::Format {
                        line: nline.line,
                        msg: "duplicate source node".to_string(),
                    });
                }
                src = Some(u - 1);
            }
            "t" => {
                if snk.is_some() {
                    return Err(Error::Format {
                        line: nline.line,
                        msg: "duplicate sink node".to_string(),
                    });
                }
                snk = Some(u - 1);
            }
            _ => {
                return Err(Error::Format {
                    line: nline.line,
                    msg: format!("invalid node type, must be 's' or 't', got: {}", what),
                });
            }
        }
    }

    if src == snk {
        return Err(Error::Data {
            line: reader.line_number,
            msg: "source and sink node must be different".to_string(),
        });
    }

    for _ in 0..nedges {
        let mut aline = reader.expect_line('a')?;
        let u: usize = aline.number()?;
        let v: usize = aline.number()?;
        let c: F = aline.number()?;
        aline.end()?;

        if u < 1 || u > nnodes {
            return Err(Error::Data {
                line: aline.line,
                msg: format!("invalid source node id {} (must be in 1..{})", u, nnodes),
            });
        }

        if v < 1 || v > nnodes {
            return Err(Error::Data {
                line: aline.line,
                msg: format!("invalid sink node id {} (must be in 1..{})", v, nnodes),
            });
        }

        network.add_edge(u - 1, v - 1, c).map_err(|err| Error::Data {
            line: aline.line,
            msg: err.to_string(),
        })?;
    }

    if let Some(toks) = reader.read_line()? {
        return Err(Error::Format {
            line: toks.line,
            msg: format!(
                "unexpected line at the end of file (expected exactly {} 'a' lines)",
                nedges,
            ),
        });
    }

    // both node lines have been read, so source and sink are set
    match (src, snk) {
        (Some(src), Some(snk)) => Ok(Instance { network, src, snk }),
        _ => Err(Error::Format {
            line: reader.line_number,
            msg: "missing source or sink node".to_string(),
        }),
    }
}

pub fn read_from_file<F>(filename: &str) -> Result<Instance<F>>
where
    F: NumAssign + Signed + CheckedAdd + Ord + Copy + FromStr,
    F::Err: Display,
{
    read(std::fs::File::open(filename)?)
}

/// Write a max-flow instance.
///
/// Only edges with positive capacity are written.
pub fn write<W, F>(mut w: W, instance: &Instance<F>) -> std::io::Result<()>
where
    W: Write,
    F: NumAssign + Signed + CheckedAdd + Ord + Copy + Display,
{
    let net = &instance.network;
    writeln!(w, "p max {} {}", net.num_nodes(), net.num_edges())?;
    writeln!(w, "n {} s", instance.src + 1)?;
    writeln!(w, "n {} t", instance.snk + 1)?;
    for (u, v, cap) in net.edges() {
        writeln!(w, "a {} {} {}", u + 1, v + 1, cap)?;
    }

    Ok(())
}

/// Write a max-flow instance to a named file.
pub fn write_to_file<F>(filename: &str, instance: &Instance<F>) -> std::io::Result<()>
where
    F: NumAssign + Signed + CheckedAdd + Ord + Copy + Display,
{
    write(&mut std::fs::File::create(filename)?, instance)
}

#[cfg(test)]
mod tests {
    use crate::dimacs;
    use crate::Net;
    use std::io::{self, Cursor};

    const FILE: &str = "c this is a test file

p max 6 9
n 5 s
n 6 t

c there might be empty lines

a 5 1 10
a 5 2 10
a 1 2 2
a 1 3 4
a 1 4 8
a 2 4 9
a 3 6 10
a 4 3 6
a 4 6 10

c end of the file
";

    #[test]
    fn parse_file_test() {
        let instance = dimacs::max::read::<_, i64>(io::Cursor::new(FILE)).unwrap();

        let net = &instance.network;
        assert_eq!(net.num_nodes(), 6);
        assert_eq!(net.num_edges(), 9);
        assert_eq!(instance.src, 4);
        assert_eq!(instance.snk, 5);

        let arcs: Vec<_> = net.edges().map(|(u, v, c)| (u + 1, v + 1, c)).collect();

        assert_eq!(
            arcs,
            vec![
                (1, 2, 2),
                (1, 3, 4),
                (1, 4, 8),
                (2, 4, 9),
                (3, 6, 10),
                (4, 3, 6),
                (4, 6, 10),
                (5, 1, 10),
                (5, 2, 10),
            ]
        );

        assert_eq!(net.max_flow(instance.src, instance.snk), Ok(19));
    }

    #[test]
    fn parse_errors() {
        let bad = [
            // wrong problem type
            "p min 2 1\nn 1 s\nn 2 t\na 1 2 1\n",
            // missing sink
            "p max 2 1\nn 1 s\na 1 2 1\n",
            // duplicate source
            "p max 2 1\nn 1 s\nn 2 s\na 1 2 1\n",
            // node out of range
            "p max 2 1\nn 1 s\nn 2 t\na 1 3 1\n",
            // loop
            "p max 2 1\nn 1 s\nn 2 t\na 2 2 1\n",
            // negative capacity
            "p max 2 1\nn 1 s\nn 2 t\na 1 2 -1\n",
            // too many arcs
            "p max 2 1\nn 1 s\nn 2 t\na 1 2 1\na 2 1 1\n",
            // too few arcs
            "p max 2 2\nn 1 s\nn 2 t\na 1 2 1\n",
            // not enough nodes
            "p max 0 0\n",
            "p max 1 0\nn 1 s\nn 1 t\n",
            // source equals sink
            "p max 2 0\nn 1 s\nn 1 t\n",
        ];
        for file in bad.iter() {
            assert!(dimacs::max::read::<_, i64>(Cursor::new(*file)).is_err(), "{}", file);
        }

        match dimacs::max::read::<_, i64>(Cursor::new("p max 10000000000 1\n")) {
            Err(dimacs::Error::Data { line, .. }) => assert_eq!(line, 1),
            _ => panic!("expected data error"),
        }

        // no arcs at all is fine
        let instance = dimacs::max::read::<_, i64>(Cursor::new("p max 2 0\nn 1 s\nn 2 t\n")).unwrap();
        assert_eq!(instance.network.num_edges(), 0);
        assert_eq!(instance.network.max_flow(instance.src, instance.snk), Ok(0));

        match dimacs::max::read::<_, i64>(Cursor::new("p max 2 1\nn 1 s\nn 2 t\na 1 2 -1\n")) {
            Err(dimacs::Error::Data { line, .. }) => assert_eq!(line, 4),
            _ => panic!("expected data error"),
        }
    }

    #[test]
    fn write_test_file() {
        let network = Net::with_edges(4, vec![(0, 1, 4), (0, 2, 2), (1, 2, 2), (1, 3, 3), (2, 3, 5)]).unwrap();

        let mut buf = Cursor::new(Vec::new());
        dimacs::max::write(
            &mut buf,
            &dimacs::max::Instance {
                network,
                src: 0,
                snk: 3,
            },
        )
        .unwrap();

        assert_eq!(
            String::from_utf8(buf.into_inner()).unwrap(),
            "p max 4 5
n 1 s
n 4 t
a 1 2 4
a 1 3 2
a 2 3 2
a 2 4 3
a 3 4 5
"
        );
    }
}
