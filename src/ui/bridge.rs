//! Background bridge between the UI thread and the HTTP client.
//!
//! The UI never blocks on the network: it enqueues a command and moves
//! on; the bridge settles each command exactly once as an `AppEvent`.

use std::sync::mpsc::Sender;
use std::thread;

use tokio::sync::mpsc;

use crate::api::{ApiClient, PurchaseRequest};
use crate::ui::events::AppEvent;

/// Network work requested by the UI.
#[derive(Debug)]
pub enum ApiCommand {
    SubmitPurchase { email: String, amount: String },
    FetchAchievements { email: String, seq: u64 },
}

pub type ApiCommandSender = mpsc::Sender<ApiCommand>;

/// Spawn the bridge thread and return its command sender.
///
/// Commands run as independent tasks on a current-thread runtime, so a
/// slow fetch does not hold up a purchase and concurrent fetches can
/// settle out of order. A send failure means the UI is gone; the
/// outcome is dropped.
pub fn spawn(client: ApiClient, events: Sender<AppEvent>) -> ApiCommandSender {
    let (tx, mut rx) = mpsc::channel::<ApiCommand>(16);

    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!(error = %err, "failed to start API bridge runtime");
                return;
            }
        };

        runtime.block_on(async move {
            while let Some(command) = rx.recv().await {
                let client = client.clone();
                let events = events.clone();
                tokio::spawn(async move {
                    match command {
                        ApiCommand::SubmitPurchase { email, amount } => {
                            let request = PurchaseRequest { email, amount };
                            let outcome = client
                                .submit_purchase(&request)
                                .await
                                .map_err(|err| err.to_string());
                            let _ = events.send(AppEvent::PurchaseSettled(outcome));
                        }
                        ApiCommand::FetchAchievements { email, seq } => {
                            let result = client
                                .fetch_achievements(&email)
                                .await
                                .map_err(|err| err.to_string());
                            let _ = events.send(AppEvent::AchievementsSettled { seq, result });
                        }
                    }
                });
            }
        });
    });

    tx
}
