
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use tiny_http::{Response, Server};

/// Local stand-in for SchaleDB: serves fixed bodies by path, 404 otherwise,
/// and counts every request it sees.
struct FixtureServer {
    base: String,
    hits: Arc<AtomicUsize>,
}

impl FixtureServer {
    fn start(routes: &[(&str, &[u8])]) -> Self {
        Self::start_with_status(routes, 404)
    }

    /// `miss_status` is what unknown paths get, e.g. 503 for a flaky mirror
    fn start_with_status(routes: &[(&str, &[u8])], miss_status: u16) -> Self {
        let server = Server::http("127.0.0.1:0").expect("bind fixture server");
        let addr = server.server_addr().to_ip().expect("tcp listener");
        let routes: HashMap<String, Vec<u8>> = routes
            .iter()
            .map(|(path, body)| (path.to_string(), body.to_vec()))
            .collect();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);

        thread::spawn(move || {
            for request in server.incoming_requests() {
                counter.fetch_add(1, Ordering::SeqCst);
                let response = match routes.get(request.url()) {
                    Some(body) => Response::from_data(body.clone()),
                    None => Response::from_data(Vec::new()).with_status_code(miss_status),
                };
                let _ = request.respond(response);
            }
        });

        Self {
            base: format!("http://{addr}"),
            hits,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}
