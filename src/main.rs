use crate::config::AppConfig;
use crate::hostaway::{FallbackDataset, HostawayClient};
use crate::responses::error_to_response;
use crate::reviews::MemoryApprovalStore;
use crate::router::handle;
use crate::state::AppState;
use astra::{Request, Server};
use tracing::{error, info, warn};

mod config;
mod errors;
mod hostaway;
mod logging;
mod responses;
mod reviews;
mod router;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // .env first so RUST_LOG from it applies
    config::load_dotenv();

    if let Err(e) = logging::init_tracing("info") {
        eprintln!("failed to initialize tracing: {e}");
    }

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let fallback = match FallbackDataset::bundled() {
        Ok(dataset) => dataset,
        Err(e) => {
            error!(error = %e, "bundled review dataset is unreadable");
            std::process::exit(1);
        }
    };

    let client = match HostawayClient::new(config.reviews_url.clone()) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "failed to build upstream client");
            std::process::exit(1);
        }
    };

    info!(reviews_url = %client.reviews_url(), "upstream reviews endpoint");

    let state = AppState::new(
        Box::new(client),
        fallback,
        Box::new(MemoryApprovalStore::new()),
    );

    info!(addr = %config.bind_addr, workers = config.max_workers, "starting server");

    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    let result = server.serve(move |req: Request, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let resp = match handle(req, &state) {
            Ok(resp) => resp,
            Err(err) => {
                if err.status() >= 500 {
                    error!(%method, %path, error = %err, "request failed");
                } else {
                    warn!(%method, %path, error = %err, "request rejected");
                }
                error_to_response(err)
            }
        };

        info!(%method, %path, status = resp.status().as_u16(), "request");
        resp
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down");
}
