/* -------------------------------------------------------------------------- *\
 *                |   █████╗ ██╗   ██╗██████╗  █████╗ ███████╗ |              *
 *                |  ██╔══██╗██║   ██║██╔══██╗██╔══██╗██╔════╝ |              *
 *                |  ███████║██║   ██║██████╔╝███████║█████╗   |              *
 *                |  ██╔══██║██║   ██║██╔══██╗██╔══██║██╔══╝   |              *
 *                |  ██║  ██║╚██████╔╝██║  ██║██║  ██║███████╗ |              *
 *                |  ╚═╝  ╚═╝ ╚═════╝ ╚═╝  ╚═╝╚═╝  ╚═╝╚══════╝ |              *
 *                +--------------------------------------------+              *
 *                                                                            *
 *                         Distributed Systems Runtime                        *
 * -------------------------------------------------------------------------- *
 * Copyright 2022 - 2024, the aurae contributors                              *
 * SPDX-License-Identifier: Apache-2.0                                        *
\* -------------------------------------------------------------------------- */

use calendrical::{do_at, now, today, with_clock, Clock, LocalDate};
use common::{utc, warsaw};
use std::sync::mpsc;
use std::thread;

mod common;

#[test]
fn clock_overrides_must_nest_and_restore() {
    do_at(&utc(2014, 1, 1), || {
        assert_eq!(now(), utc(2014, 1, 1));
        do_at(&utc(1986, 10, 2), || {
            assert_eq!(today(), LocalDate::new(1986, 10, 2).unwrap());
        });
        assert_eq!(now(), utc(2014, 1, 1));
    });
    assert!(matches!(Clock::current(), Clock::System { .. }));
}

#[test]
fn clock_overrides_must_be_thread_local() {
    let (ready_tx, ready_rx) = mpsc::channel();
    let (done_tx, done_rx) = mpsc::channel::<()>();

    let pinned = thread::spawn(move || {
        do_at(&utc(1986, 10, 2), || {
            ready_tx.send(()).unwrap();
            done_rx.recv().unwrap();
            now()
        })
    });

    ready_rx.recv().unwrap();
    assert!(matches!(Clock::current(), Clock::System { .. }));
    assert_ne!(now(), utc(1986, 10, 2));
    done_tx.send(()).unwrap();

    assert_eq!(pinned.join().unwrap(), utc(1986, 10, 2));
}

#[test]
fn clock_zone_must_drive_local_readings() {
    let clock = Clock::fixed(&utc(2014, 7, 1)).with_zone(warsaw());
    with_clock(clock, || {
        assert_eq!(now().to_local_date_time().to_string(), "2014-07-01T02:00:00");
    });
}
