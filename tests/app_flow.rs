mod common;

use common::make_app;
use perks::api::AchievementsSummary;
use perks::ui::app::App;
use perks::ui::bridge::ApiCommand;
use perks::ui::purchase::FormIntent;
use perks::ui::router::Route;

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        app.dispatch_form(FormIntent::Type(ch));
    }
}

fn fill_form(app: &mut App, email: &str, amount: &str) {
    type_text(app, email);
    app.dispatch_form(FormIntent::FocusNext);
    type_text(app, amount);
}

fn summary(badge: &str) -> AchievementsSummary {
    AchievementsSummary {
        unlocked_achievements: vec!["First Purchase".to_string()],
        next_available_achievements: vec![],
        current_badge: badge.to_string(),
        next_badge: "Silver".to_string(),
        remaining_to_unlock_next_badge: 5000.0,
    }
}

#[test]
fn submit_success_then_navigation_issues_a_fetch() {
    let (mut app, mut rx) = make_app("http://localhost:3000");
    fill_form(&mut app, "a@b.com", "100");

    app.submit_purchase();
    assert!(app.purchase().loading);

    match rx.try_recv().expect("a command was sent") {
        ApiCommand::SubmitPurchase { email, amount } => {
            assert_eq!(email, "a@b.com");
            assert_eq!(amount, "100");
        }
        other => panic!("expected SubmitPurchase, got {other:?}"),
    }

    app.on_purchase_settled(Ok(()));
    assert!(app.purchase().success);
    assert!(!app.purchase().loading);

    app.view_achievements();
    assert_eq!(
        app.route(),
        &Route::Achievements {
            email: "a@b.com".to_string()
        }
    );
    // Navigating away leaves the flow clean for a later return.
    assert!(app.purchase().is_idle());
    assert!(app.achievements().loading);

    match rx.try_recv().expect("a fetch was issued") {
        ApiCommand::FetchAchievements { email, seq } => {
            assert_eq!(email, "a@b.com");
            assert_eq!(seq, 1);
        }
        other => panic!("expected FetchAchievements, got {other:?}"),
    }

    app.on_achievements_settled(1, Ok(summary("Bronze")));
    assert!(!app.achievements().loading);
    assert_eq!(
        app.achievements().data.as_ref().unwrap().current_badge,
        "Bronze"
    );
}

#[test]
fn declined_submit_shows_message_and_allows_resubmit() {
    let (mut app, mut rx) = make_app("http://localhost:3000");
    fill_form(&mut app, "a@b.com", "100");

    app.submit_purchase();
    rx.try_recv().expect("first submit goes out");
    app.on_purchase_settled(Err("insufficient funds".to_string()));

    assert!(!app.purchase().loading);
    assert!(!app.purchase().success);
    assert_eq!(app.purchase().error.as_deref(), Some("insufficient funds"));

    // The error view keeps the form; a second submit retries.
    app.submit_purchase();
    assert!(app.purchase().loading);
    assert!(app.purchase().error.is_none());
    rx.try_recv().expect("second submit goes out");
}

#[test]
fn invalid_form_never_reaches_the_network() {
    let (mut app, mut rx) = make_app("http://localhost:3000");

    app.submit_purchase();
    assert_eq!(app.form().error.as_deref(), Some("Email is required"));
    assert!(app.purchase().is_idle());
    assert!(rx.try_recv().is_err());

    type_text(&mut app, "not-an-address");
    app.submit_purchase();
    assert_eq!(
        app.form().error.as_deref(),
        Some("Enter a valid email address")
    );
    assert!(rx.try_recv().is_err());
}

#[test]
fn amount_below_minimum_is_rejected_client_side() {
    let (mut app, mut rx) = make_app("http://localhost:3000");
    fill_form(&mut app, "a@b.com", "0.5");

    app.submit_purchase();
    assert_eq!(app.form().error.as_deref(), Some("Amount must be at least 1"));
    assert!(app.purchase().is_idle());
    assert!(rx.try_recv().is_err());
}

#[test]
fn duplicate_submit_while_loading_is_ignored() {
    let (mut app, mut rx) = make_app("http://localhost:3000");
    fill_form(&mut app, "a@b.com", "100");

    app.submit_purchase();
    app.submit_purchase();

    rx.try_recv().expect("exactly one command");
    assert!(rx.try_recv().is_err());
    assert!(app.purchase().loading);
}

#[test]
fn stale_achievements_settle_is_dropped() {
    let (mut app, mut rx) = make_app("http://localhost:3000");

    app.navigate(Route::Achievements {
        email: "a@b.com".to_string(),
    });
    app.navigate(Route::Achievements {
        email: "c@d.com".to_string(),
    });

    let first = match rx.try_recv().unwrap() {
        ApiCommand::FetchAchievements { seq, .. } => seq,
        other => panic!("expected FetchAchievements, got {other:?}"),
    };
    let second = match rx.try_recv().unwrap() {
        ApiCommand::FetchAchievements { seq, .. } => seq,
        other => panic!("expected FetchAchievements, got {other:?}"),
    };
    assert!(second > first);

    // The superseded response arrives late and must not win.
    app.on_achievements_settled(first, Ok(summary("Bronze")));
    assert!(app.achievements().loading);
    assert!(app.achievements().data.is_none());

    app.on_achievements_settled(second, Ok(summary("Silver")));
    assert!(!app.achievements().loading);
    assert_eq!(
        app.achievements().data.as_ref().unwrap().current_badge,
        "Silver"
    );
}

#[test]
fn fetch_failure_keeps_previous_data() {
    let (mut app, mut rx) = make_app("http://localhost:3000");

    app.navigate(Route::Achievements {
        email: "a@b.com".to_string(),
    });
    app.on_achievements_settled(1, Ok(summary("Bronze")));

    // Re-entering the route fetches again; no caching.
    app.navigate(Route::Achievements {
        email: "a@b.com".to_string(),
    });
    app.on_achievements_settled(2, Err("Failed to fetch achievements".to_string()));

    assert_eq!(
        app.achievements().error.as_deref(),
        Some("Failed to fetch achievements")
    );
    assert_eq!(
        app.achievements().data.as_ref().unwrap().current_badge,
        "Bronze"
    );

    // Both fetches actually went out.
    assert_eq!(drain_fetches(&mut rx), 2);
}

#[test]
fn go_back_returns_to_the_purchase_form() {
    let (mut app, _rx) = make_app("http://localhost:3000");
    app.navigate(Route::Achievements {
        email: "a@b.com".to_string(),
    });
    app.go_back();
    assert_eq!(app.route(), &Route::Purchase);
}

#[test]
fn view_achievements_requires_a_successful_purchase() {
    let (mut app, mut rx) = make_app("http://localhost:3000");
    app.view_achievements();
    assert_eq!(app.route(), &Route::Purchase);
    assert!(rx.try_recv().is_err());
}

fn drain_fetches(rx: &mut tokio::sync::mpsc::Receiver<ApiCommand>) -> usize {
    let mut count = 0;
    while let Ok(command) = rx.try_recv() {
        if matches!(command, ApiCommand::FetchAchievements { .. }) {
            count += 1;
        }
    }
    count
}
