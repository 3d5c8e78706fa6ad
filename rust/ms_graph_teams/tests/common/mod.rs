/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Shared setup for the integration tests: spawns a [`graph_mock`] server
//! on a random port and hands back a client pointed at it, plus the server
//! state for inspection.

use std::sync::Arc;

use graph_mock::GraphState;
use ms_graph_teams::GraphClient;
use url::Url;

pub fn start_mock() -> (GraphClient, Arc<GraphState>) {
    let state = GraphState::new();

    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    let server_state = state.clone();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            graph_mock::run(listener, server_state).await
        })
        .unwrap();
    });

    let endpoint = Url::parse(&format!("http://{addr}")).unwrap();
    (GraphClient::new(endpoint), state)
}
