// Copyright 2025 the Overhang Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overhang Network: connection information snapshots and change
//! notifications.
//!
//! [`network_status`] reads whatever connection information the host
//! exposes; unsupported hosts yield a
//! [`NetworkStatus`](overhang_host::NetworkStatus) with every field `None`,
//! never an error. [`subscribe_network_status`] re-reads the status on each
//! connection-change event; on an unsupported host it returns an inert
//! handle and the callback never fires, since there is no change source to
//! listen to.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::rc::Rc;

use overhang_host::NetworkBackend;
use overhang_host::subscription::EventSubscription;
use overhang_host::types::{EventSource, NetworkStatus};

/// Handle for an active network-status subscription.
pub type NetworkSubscription<H> = EventSubscription<H>;

/// Current connection information. All fields `None` on hosts without the
/// capability.
pub fn network_status<H: NetworkBackend>(host: &H) -> NetworkStatus {
    host.network().unwrap_or_default()
}

/// Subscribe to connection changes.
///
/// Inert on hosts that expose no connection information at subscription
/// time.
pub fn subscribe_network_status<H, F>(host: &Rc<H>, callback: F) -> NetworkSubscription<H>
where
    H: NetworkBackend + 'static,
    F: FnMut(NetworkStatus) + 'static,
{
    if host.network().is_none() {
        return EventSubscription::inert();
    }
    EventSubscription::subscribe(
        host,
        EventSource::NETWORK,
        false,
        |host: &H| host.network().unwrap_or_default(),
        callback,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use overhang_host::backends::{FakeHost, NullHost};
    use overhang_host::types::{ConnectionType, EffectiveConnectionType};

    #[test]
    fn unsupported_host_reads_all_none() {
        assert_eq!(network_status(&NullHost), NetworkStatus::default());
    }

    #[test]
    fn unsupported_host_subscription_is_inert() {
        let host = Rc::new(FakeHost::new());
        let fired = Rc::new(RefCell::new(false));

        let flag = Rc::clone(&fired);
        let subscription = subscribe_network_status(&host, move |_| *flag.borrow_mut() = true);

        assert_eq!(host.listener_count(), 0);
        host.emit(EventSource::NETWORK);
        assert!(!*fired.borrow());
        subscription.unsubscribe();
    }

    #[test]
    fn tracks_connection_changes() {
        let wifi = NetworkStatus {
            effective_type: Some(EffectiveConnectionType::FourG),
            connection: Some(ConnectionType::Wifi),
            downlink_mbps: Some(10.0),
            rtt_ms: Some(50),
            save_data: Some(false),
        };
        let cellular = NetworkStatus {
            effective_type: Some(EffectiveConnectionType::ThreeG),
            connection: Some(ConnectionType::Cellular),
            downlink_mbps: Some(1.5),
            rtt_ms: Some(300),
            save_data: Some(false),
        };

        let host = Rc::new(FakeHost::new());
        host.set_network(Some(wifi));
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let subscription =
            subscribe_network_status(&host, move |status| sink.borrow_mut().push(status));

        host.set_network(Some(cellular));
        host.emit(EventSource::NETWORK);
        assert_eq!(*seen.borrow(), [cellular]);

        subscription.unsubscribe();
        host.set_network(Some(wifi));
        host.emit(EventSource::NETWORK);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn status_degrades_to_default_mid_stream() {
        let host = Rc::new(FakeHost::new());
        host.set_network(Some(NetworkStatus {
            connection: Some(ConnectionType::Ethernet),
            ..NetworkStatus::default()
        }));
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let _subscription =
            subscribe_network_status(&host, move |status| sink.borrow_mut().push(status));

        host.set_network(None);
        host.emit(EventSource::NETWORK);
        assert_eq!(*seen.borrow(), [NetworkStatus::default()]);
    }
}
