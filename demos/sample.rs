/*
 * Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

use rs_maxflow::{Net, Result};

fn main() -> Result<()> {
    env_logger::init();

    let net = Net::with_edges(
        6,
        vec![
            (0, 1, 100),
            (0, 2, 80),
            (1, 3, 50),
            (1, 4, 50),
            (2, 3, 30),
            (2, 4, 70),
            (3, 5, 50),
            (4, 5, 70),
        ],
    )?;

    println!("Max flow: {}", net.max_flow(0, 5)?);

    Ok(())
}
