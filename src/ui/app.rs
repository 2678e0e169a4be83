use crate::api::AchievementsSummary;
use crate::config::Config;
use crate::ui::achievements::{AchievementsFlowState, AchievementsIntent, AchievementsReducer};
use crate::ui::bridge::{ApiCommand, ApiCommandSender};
use crate::ui::mvi::Reducer;
use crate::ui::purchase::{
    FormIntent, FormReducer, PurchaseFlowState, PurchaseFormState, PurchaseIntent, PurchaseReducer,
};
use crate::ui::router::Route;

/// Generic MVI dispatch: take the current state, run the reducer,
/// store the result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Top-level UI state: the current route, both flow slices, and the
/// channel to the API bridge. The event loop is the only mutator.
pub struct App {
    should_quit: bool,
    route: Route,
    config: Config,
    form: PurchaseFormState,
    purchase: PurchaseFlowState,
    achievements: AchievementsFlowState,
    /// Sequence number of the newest achievements fetch. Settles
    /// carrying an older number are stale and dropped.
    fetch_seq: u64,
    api: Option<ApiCommandSender>,
    tick: usize,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            should_quit: false,
            route: Route::Purchase,
            config,
            form: PurchaseFormState::default(),
            purchase: PurchaseFlowState::default(),
            achievements: AchievementsFlowState::default(),
            fetch_seq: 0,
            api: None,
            tick: 0,
        }
    }

    /// Attach the API bridge. Until this is called, submits and fetches
    /// settle immediately as failures.
    pub fn set_api_sender(&mut self, sender: ApiCommandSender) {
        self.api = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn form(&self) -> &PurchaseFormState {
        &self.form
    }

    pub fn purchase(&self) -> &PurchaseFlowState {
        &self.purchase
    }

    pub fn achievements(&self) -> &AchievementsFlowState {
        &self.achievements
    }

    pub fn tick(&self) -> usize {
        self.tick
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Move to a route, kicking off whatever the target screen needs.
    pub fn navigate(&mut self, route: Route) {
        self.route = route;
        if let Route::Achievements { email } = self.route.clone() {
            self.start_fetch(email);
        }
    }

    /// Validate and submit the purchase form.
    ///
    /// Ignored while a submission is already in flight: the submit
    /// control is disabled, which is the only duplicate guard.
    pub fn submit_purchase(&mut self) {
        if self.purchase.loading {
            return;
        }
        if let Err(message) = self.form.validate() {
            self.dispatch_form(FormIntent::Invalid { message });
            return;
        }

        let email = self.form.email.trim().to_string();
        let amount = self.form.amount.trim().to_string();
        self.dispatch_purchase(PurchaseIntent::Submit);
        if !self.send_command(ApiCommand::SubmitPurchase { email, amount }) {
            self.dispatch_purchase(PurchaseIntent::Rejected {
                message: "Something went wrong".to_string(),
            });
        }
    }

    /// After a successful purchase, open achievements for that email.
    /// Resets the flow so the form is clean if the user comes back.
    pub fn view_achievements(&mut self) {
        if !self.purchase.success {
            return;
        }
        let email = self.form.email.trim().to_string();
        self.dispatch_purchase(PurchaseIntent::Reset);
        self.dispatch_form(FormIntent::Clear);
        self.navigate(Route::Achievements { email });
    }

    /// Leave the achievements screen for the purchase form.
    pub fn go_back(&mut self) {
        self.navigate(Route::Purchase);
    }

    pub fn on_purchase_settled(&mut self, outcome: Result<(), String>) {
        match outcome {
            Ok(()) => self.dispatch_purchase(PurchaseIntent::Fulfilled),
            Err(message) => self.dispatch_purchase(PurchaseIntent::Rejected { message }),
        }
    }

    pub fn on_achievements_settled(
        &mut self,
        seq: u64,
        result: Result<AchievementsSummary, String>,
    ) {
        if seq != self.fetch_seq {
            tracing::debug!(seq, latest = self.fetch_seq, "dropping stale achievements settle");
            return;
        }
        match result {
            Ok(summary) => self.dispatch_achievements(AchievementsIntent::Fulfilled { summary }),
            Err(message) => self.dispatch_achievements(AchievementsIntent::Rejected { message }),
        }
    }

    pub fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    fn dispatch_purchase(&mut self, intent: PurchaseIntent) {
        dispatch_mvi!(self, purchase, PurchaseReducer, intent);
    }

    fn dispatch_achievements(&mut self, intent: AchievementsIntent) {
        dispatch_mvi!(self, achievements, AchievementsReducer, intent);
    }

    fn start_fetch(&mut self, email: String) {
        // No identifier, no fetch: the screen renders its neutral view.
        if email.is_empty() {
            return;
        }
        self.fetch_seq += 1;
        let seq = self.fetch_seq;
        self.dispatch_achievements(AchievementsIntent::Fetch);
        if !self.send_command(ApiCommand::FetchAchievements { email, seq }) {
            self.dispatch_achievements(AchievementsIntent::Rejected {
                message: "Failed to fetch achievements".to_string(),
            });
        }
    }

    fn send_command(&mut self, command: ApiCommand) -> bool {
        let Some(sender) = &self.api else {
            return false;
        };
        match sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(error = %err, "API bridge unavailable");
                false
            }
        }
    }
}
