use crate::generator::profile::{build_session_from_config, GeneratorConfig};
use crate::gui_bridge::model::ScreenModel;
use crate::workflow::runner::Runner;
use anyhow::Result;
use ecgcore::analysis::SessionPayload;
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{Arc, RwLock},
    thread,
};
use tokio::runtime::Builder;
use warp::{http::StatusCode, Filter};

fn gui_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9000))
}

#[derive(Debug)]
struct WarpError;

impl warp::reject::Reject for WarpError {}

/// Bridge that hosts the screen HTTP endpoint and processes incoming
/// sessions. A rejected session leaves the previously published screen
/// untouched, so the viewer never renders partial metrics.
pub struct GuiBridge {
    state: Arc<RwLock<ScreenModel>>,
}

impl GuiBridge {
    pub fn new(runner: Arc<Runner>) -> Self {
        let state = Arc::new(RwLock::new(ScreenModel::default()));
        let state_for_filter = state.clone();
        let state_filter = warp::any().map(move || state_for_filter.clone());
        let runner_filter = warp::any().map(move || runner.clone());

        let get_route = warp::path("screen")
            .and(warp::get())
            .and(state_filter.clone())
            .map(|state: Arc<RwLock<ScreenModel>>| warp::reply::json(&*state.read().unwrap()));

        let ingest_route = warp::path("ingest")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter.clone())
            .and(runner_filter.clone())
            .and_then(
                |session: SessionPayload,
                 state: Arc<RwLock<ScreenModel>>,
                 runner: Arc<Runner>| async move {
                    match runner.execute(&session) {
                        Ok(result) => {
                            let mut guard = state.write().unwrap();
                            *guard = ScreenModel::from_workflow(&result, &session.result);
                            Ok::<_, warp::Rejection>(warp::reply::with_status(
                                warp::reply::json(&json!({"status": "ok"})),
                                StatusCode::OK,
                            ))
                        }
                        Err(err) => {
                            eprintln!("ingest error: {}", err);
                            Err(warp::reject::custom(WarpError))
                        }
                    }
                },
            );

        let generator_route = warp::path("ingest-config")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter)
            .and(runner_filter)
            .and_then(
                |config: GeneratorConfig,
                 state: Arc<RwLock<ScreenModel>>,
                 runner: Arc<Runner>| async move {
                    match build_session_from_config(&config)
                        .and_then(|session| Ok((runner.execute(&session)?, session)))
                    {
                        Ok((result, session)) => {
                            let risk = result.display.risk_tier;
                            let mut guard = state.write().unwrap();
                            *guard = ScreenModel::from_workflow(&result, &session.result);
                            if let Some(name) = config.scenario.as_ref() {
                                println!("[GUI] Scenario {} -> {}", name, risk);
                            }
                            Ok::<_, warp::Rejection>(warp::reply::with_status(
                                warp::reply::json(&json!({
                                    "status": "ok",
                                    "risk": risk.to_string(),
                                    "description": config.description.clone().unwrap_or_default()
                                })),
                                StatusCode::OK,
                            ))
                        }
                        Err(err) => {
                            eprintln!("ingest-config error: {}", err);
                            Err(warp::reject::custom(WarpError))
                        }
                    }
                },
            );

        thread::spawn(move || {
            let routes = get_route.or(ingest_route).or(generator_route);
            let runtime = Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build runtime");
            runtime.block_on(async move {
                warp::serve(routes).run(gui_bind_address()).await;
            });
        });

        Self { state }
    }

    pub fn publish(&self, model: &ScreenModel) -> Result<()> {
        let mut guard = self.state.write().unwrap();
        *guard = model.clone();
        println!(
            "[GUI] strips: {}, notes: {}",
            guard.strips.len(),
            guard.notes.len()
        );
        Ok(())
    }

    pub fn publish_status(&self, message: &str) {
        println!("[GUI] {}", message);
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> ScreenModel {
        self.state.read().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::profile::build_session;
    use crate::workflow::config::ViewerConfig;
    use crate::workflow::runner::Runner;
    use std::sync::Arc;

    #[test]
    fn gui_bridge_updates_state() {
        let runner = Arc::new(Runner::new(ViewerConfig::default()));
        let gui = GuiBridge::new(runner.clone());
        let session = build_session(600).unwrap();
        let result = runner.execute(&session).unwrap();
        let model = ScreenModel::from_workflow(&result, &session.result);
        gui.publish(&model).unwrap();

        let snapshot = gui.snapshot();
        assert_eq!(snapshot.strips.len(), 3);
        assert_eq!(
            snapshot.display.unwrap().rhythm_label,
            result.display.rhythm_label
        );
    }
}
