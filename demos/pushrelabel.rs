/*
 * Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

use time::OffsetDateTime;

use rustop::opts;

use rs_maxflow::dimacs;
use rs_maxflow::maxflow::PushRelabel;

use std::error::Error;
use std::fmt::{Debug, Display};
use std::str::FromStr;

use num_traits::{CheckedAdd, NumAssign, Signed};
use std::iter::Sum;

fn run<F>(d: &mut PushRelabel<F>, src: usize, snk: usize, niter: usize) -> Result<(), Box<dyn Error>>
where
    F: Display + NumAssign + Signed + CheckedAdd + Ord + Copy,
{
    let tstart = OffsetDateTime::now_utc();
    for _ in 0..niter {
        d.solve(src, snk)?;
    }
    let tend = OffsetDateTime::now_utc();
    println!("Time: {}", (tend - tstart).as_seconds_f64());
    println!("Flow: {}", d.value());
    Ok(())
}

fn read_and_run<F>(filename: &str, num: usize, typ: &str) -> Result<(), Box<dyn Error>>
where
    F: Debug + Display + NumAssign + Signed + CheckedAdd + FromStr + Copy + Ord + Sum,
    F::Err: Display,
{
    let tstart = OffsetDateTime::now_utc();
    let instance = dimacs::max::read_from_file::<F>(filename)?;

    let net = &instance.network;
    let s = instance.src;
    let t = instance.snk;
    let n = net.num_nodes();

    let tend = OffsetDateTime::now_utc();
    println!("Time: {}", (tend - tstart).as_seconds_f64());
    println!("  number type: {}", typ);
    println!("  number of nodes: {}", n);
    println!("  number of arcs: {}", net.num_edges());

    let mut d = PushRelabel::new(net);
    run(&mut d, s, t, num)?;

    println!("  number of pushes: {}", d.cnt_push);
    println!("  number of relabels: {}", d.cnt_relabel);

    assert!(net.edges().all(|(u, v, c)| d.flow(u, v) <= c && d.flow(v, u) >= -c));

    assert!((0..n)
        .filter(|&u| u != s && u != t)
        .all(|u| (0..n).map(|v| d.flow(u, v)).sum::<F>() == F::zero()));

    assert_eq!((0..n).map(|v| d.flow(s, v)).sum::<F>(), d.value());

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let (args, _) = opts! {
        synopsis "Solve max-flow problem with a push-relabel algorithm.";
        opt num:usize=1, desc:"Number of times the algorithm is repeated.";
        opt wide:bool, desc:"Use 128 bit integer capacities.";
        param file:String, desc:"Instance file name";
    }
    .parse_or_exit();

    if !args.wide {
        read_and_run::<i64>(&args.file, args.num, "i64")
    } else {
        read_and_run::<i128>(&args.file, args.num, "i128")
    }
}
