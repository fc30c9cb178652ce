//! Runs actions as independent tasks and folds their outcomes into the view.

use std::sync::Arc;

use shopcarts_api::Client;
use tokio::task::JoinSet;

use crate::action::{perform, Action, Outcome};
use crate::error::ShopcartsError;
use crate::form::ProductForm;
use crate::view::ViewModel;

/// Owns the page state and the actions currently in flight.
///
/// Each submitted action snapshots the form, runs as its own tokio task and
/// issues one request. Outcomes are applied in the order the tasks finish,
/// so when two actions race the later completion overwrites the earlier
/// one. Nothing is cancelled.
pub struct Binder {
    client: Arc<Client>,
    view: ViewModel,
    in_flight: JoinSet<(Action, Outcome)>,
}

impl Binder {
    pub fn new(client: Client) -> Self {
        Self::with_view(client, ViewModel::default())
    }

    pub fn with_view(client: Client, view: ViewModel) -> Self {
        Self {
            client: Arc::new(client),
            view,
            in_flight: JoinSet::new(),
        }
    }

    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    pub fn form_mut(&mut self) -> &mut ProductForm {
        &mut self.view.form
    }

    /// Number of actions whose outcome has not been applied yet.
    pub fn pending(&self) -> usize {
        self.in_flight.len()
    }

    /// Starts `action` without waiting for it. Must be called from within a
    /// tokio runtime.
    pub fn submit(&mut self, action: Action) {
        let client = Arc::clone(&self.client);
        let form = self.view.form.clone();
        tracing::debug!("Submitting {}", action.name());
        self.in_flight.spawn(async move {
            let outcome = perform(&client, action, &form).await;
            (action, outcome)
        });
    }

    /// Waits for the next action to finish and applies its outcome.
    ///
    /// Returns `false` when nothing was in flight. A task that died before
    /// producing an outcome is applied as a failure.
    pub async fn next_update(&mut self) -> bool {
        let Some(joined) = self.in_flight.join_next().await else {
            return false;
        };
        let outcome = match joined {
            Ok((action, outcome)) => {
                match &outcome {
                    Ok(_) => tracing::info!("{} completed", action.name()),
                    Err(e) => tracing::warn!("{} failed: {}", action.name(), e),
                }
                outcome
            }
            Err(e) => {
                tracing::error!("Action task failed: {}", e);
                Err(ShopcartsError::Task(e.to_string()))
            }
        };
        let view = std::mem::take(&mut self.view);
        self.view = view.apply(outcome);
        true
    }

    /// Submits `action` and waits until everything in flight has been applied.
    pub async fn run(&mut self, action: Action) -> &ViewModel {
        self.submit(action);
        while self.next_update().await {}
        &self.view
    }
}
