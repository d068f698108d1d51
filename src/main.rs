use crate::catalog::Catalog;
use crate::config::BriefPolicy;
use crate::responses::error_to_response;
use crate::router::{handle, App};
use astra::Server;
use std::net::SocketAddr;

mod auth;
mod catalog;
mod config;
mod domain;
mod errors;
mod responses;
mod router;

#[cfg(test)]
mod tests;

fn main() {
    env_logger::init();

    // 1️⃣ Load the brief policy (missing file means built-in defaults)
    let policy = match BriefPolicy::load("brief_policy.toml") {
        Ok(p) => p,
        Err(e) => {
            eprintln!("❌ Policy load failed: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Build shared app state: seeded catalog + policy + stub login
    let app = App::new(Catalog::seeded(), policy, Box::new(auth::AllowAll));

    // 3️⃣ Start the server
    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    // 4️⃣ Serve requests, passing app state into the closure
    let result = server.serve(move |req: astra::Request, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        match handle(req, &app) {
            Ok(resp) => resp,
            Err(err) => {
                log::warn!("{method} {path} -> {err}");
                error_to_response(err)
            }
        }
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
