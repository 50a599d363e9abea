use std::rc::Rc;

use yew::Reducible;

pub const INITIAL_FOUNDER_SPOTS: u32 = 47;
pub const SIGNUP_RESERVATION_SECS: u32 = 600;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Step {
    Welcome,
    Profile,
    Opportunity,
    Mentorship,
    Dashboard,
    Signup,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UserType {
    Creator,
    User,
    Unset,
}

impl UserType {
    // The fan branch never reaches the form in the current flow, so an
    // unset choice is stored as "creator".
    pub fn lead_value(self) -> &'static str {
        match self {
            UserType::User => "user",
            UserType::Creator | UserType::Unset => "creator",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Field {
    Name,
    Whatsapp,
    Instagram,
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct FormData {
    pub name: String,
    pub whatsapp: String,
    pub instagram: String,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Severity {
    Success,
    Error,
    Info,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Info,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct FunnelState {
    pub step: Step,
    pub user_type: UserType,
    pub remaining_spots: u32,
    pub time_left: u32,
    pub form: FormData,
    pub is_submitting: bool,
    pub notice: Option<Notice>,
}

impl Default for FunnelState {
    fn default() -> Self {
        Self {
            step: Step::Welcome,
            user_type: UserType::Unset,
            remaining_spots: INITIAL_FOUNDER_SPOTS,
            time_left: SIGNUP_RESERVATION_SECS,
            form: FormData::default(),
            is_submitting: false,
            notice: None,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum FunnelAction {
    RequestAccess,
    ChooseProfile(UserType),
    ShowMentorship,
    ShowDashboard,
    ClaimSpot,
    Tick,
    Edit(Field, String),
    SubmitStarted,
    SubmitSucceeded,
    SubmitFailed,
    DismissNotice,
}

impl Reducible for FunnelState {
    type Action = FunnelAction;

    fn reduce(self: Rc<Self>, action: FunnelAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FunnelAction::RequestAccess if self.step == Step::Welcome => {
                next.step = Step::Profile;
            }
            FunnelAction::ChooseProfile(choice) if self.step == Step::Profile => match choice {
                UserType::Creator => {
                    next.user_type = UserType::Creator;
                    next.step = Step::Opportunity;
                }
                UserType::User => {
                    // Fan onboarding is not built yet; the visitor stays on
                    // the profile screen.
                    next.user_type = UserType::User;
                    next.notice = Some(Notice::info(
                        "The fan experience is opening soon. Follow us to hear first!",
                    ));
                }
                UserType::Unset => return self,
            },
            FunnelAction::ShowMentorship if self.step == Step::Opportunity => {
                next.step = Step::Mentorship;
            }
            FunnelAction::ShowDashboard if self.step == Step::Mentorship => {
                next.step = Step::Dashboard;
            }
            FunnelAction::ClaimSpot if self.step == Step::Dashboard => {
                next.step = Step::Signup;
                next.time_left = SIGNUP_RESERVATION_SECS;
            }
            FunnelAction::Tick if self.step == Step::Signup && self.time_left > 0 => {
                next.time_left -= 1;
            }
            FunnelAction::Edit(field, value) if !self.is_submitting => {
                match field {
                    Field::Name => next.form.name = value,
                    Field::Whatsapp => next.form.whatsapp = value,
                    Field::Instagram => next.form.instagram = value,
                }
            }
            FunnelAction::SubmitStarted if self.step == Step::Signup && !self.is_submitting => {
                next.is_submitting = true;
            }
            FunnelAction::SubmitSucceeded if self.is_submitting => {
                next.notice = Some(Notice::success(format!(
                    "Congratulations {}! Your Founding Member spot is locked in. \
                     We'll reach out on WhatsApp shortly.",
                    self.form.name
                )));
                next.form = FormData::default();
                next.remaining_spots = self.remaining_spots.saturating_sub(1);
                next.is_submitting = false;
            }
            FunnelAction::SubmitFailed if self.is_submitting => {
                // The form is left as typed so the visitor can just retry.
                next.notice = Some(Notice::error(
                    "Something went wrong while processing your application. Please try again.",
                ));
                next.is_submitting = false;
            }
            FunnelAction::DismissNotice => {
                next.notice = None;
            }
            _ => return self,
        }
        Rc::new(next)
    }
}

pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: FunnelState, action: FunnelAction) -> FunnelState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn at_signup() -> FunnelState {
        let mut state = FunnelState::default();
        for action in [
            FunnelAction::RequestAccess,
            FunnelAction::ChooseProfile(UserType::Creator),
            FunnelAction::ShowMentorship,
            FunnelAction::ShowDashboard,
            FunnelAction::ClaimSpot,
        ] {
            state = reduce(state, action);
        }
        state
    }

    fn filled_form() -> FormData {
        FormData {
            name: "Ana Souza".into(),
            whatsapp: "+55 11 99999-0000".into(),
            instagram: "ana.creates".into(),
        }
    }

    #[test]
    fn forward_path_reaches_signup_in_exactly_five_transitions() {
        let mut state = FunnelState::default();
        let path = [
            (FunnelAction::RequestAccess, Step::Profile),
            (FunnelAction::ChooseProfile(UserType::Creator), Step::Opportunity),
            (FunnelAction::ShowMentorship, Step::Mentorship),
            (FunnelAction::ShowDashboard, Step::Dashboard),
            (FunnelAction::ClaimSpot, Step::Signup),
        ];
        for (action, expected) in path {
            state = reduce(state, action);
            assert_eq!(state.step, expected);
        }
    }

    #[test]
    fn choosing_fan_profile_stays_on_profile_screen() {
        let state = reduce(FunnelState::default(), FunnelAction::RequestAccess);
        let state = reduce(state, FunnelAction::ChooseProfile(UserType::User));
        assert_eq!(state.step, Step::Profile);
        assert_eq!(state.user_type, UserType::User);
        assert_eq!(state.form, FormData::default());
        assert_eq!(
            state.notice.as_ref().map(|n| n.severity),
            Some(Severity::Info)
        );
    }

    #[test]
    fn entering_signup_resets_the_countdown() {
        let mut state = FunnelState::default();
        state.time_left = 123;
        for action in [
            FunnelAction::RequestAccess,
            FunnelAction::ChooseProfile(UserType::Creator),
            FunnelAction::ShowMentorship,
            FunnelAction::ShowDashboard,
            FunnelAction::ClaimSpot,
        ] {
            state = reduce(state, action);
        }
        assert_eq!(state.time_left, SIGNUP_RESERVATION_SECS);
    }

    #[test]
    fn ticks_only_count_down_on_the_signup_screen() {
        let state = reduce(FunnelState::default(), FunnelAction::Tick);
        assert_eq!(state.time_left, SIGNUP_RESERVATION_SECS);

        let state = reduce(at_signup(), FunnelAction::Tick);
        assert_eq!(state.time_left, SIGNUP_RESERVATION_SECS - 1);
    }

    #[test]
    fn countdown_stops_at_zero() {
        let mut state = at_signup();
        state.time_left = 1;
        let state = reduce(state, FunnelAction::Tick);
        assert_eq!(state.time_left, 0);
        let state = reduce(state, FunnelAction::Tick);
        assert_eq!(state.time_left, 0);
    }

    #[test]
    fn formats_seconds_as_zero_padded_minutes_and_seconds() {
        assert_eq!(format_time(125), "02:05");
        assert_eq!(format_time(600), "10:00");
        assert_eq!(format_time(59), "00:59");
        assert_eq!(format_time(0), "00:00");
    }

    #[test]
    fn successful_submission_clears_form_and_takes_one_spot() {
        let mut state = at_signup();
        state.form = filled_form();
        let state = reduce(state, FunnelAction::SubmitStarted);
        assert!(state.is_submitting);

        let state = reduce(state, FunnelAction::SubmitSucceeded);
        assert_eq!(state.form, FormData::default());
        assert_eq!(state.remaining_spots, INITIAL_FOUNDER_SPOTS - 1);
        assert!(!state.is_submitting);
        assert_eq!(
            state.notice.as_ref().map(|n| n.severity),
            Some(Severity::Success)
        );
        assert!(state
            .notice
            .as_ref()
            .is_some_and(|n| n.message.contains("Ana Souza")));
    }

    #[test]
    fn spot_counter_never_goes_below_zero() {
        let mut state = at_signup();
        state.remaining_spots = 0;
        let state = reduce(state, FunnelAction::SubmitStarted);
        let state = reduce(state, FunnelAction::SubmitSucceeded);
        assert_eq!(state.remaining_spots, 0);
    }

    #[test]
    fn failed_submission_keeps_the_form_as_typed() {
        let mut state = at_signup();
        state.form = filled_form();
        let state = reduce(state, FunnelAction::SubmitStarted);
        let state = reduce(state, FunnelAction::SubmitFailed);
        assert_eq!(state.form, filled_form());
        assert_eq!(state.remaining_spots, INITIAL_FOUNDER_SPOTS);
        assert!(!state.is_submitting);
        assert_eq!(
            state.notice.as_ref().map(|n| n.severity),
            Some(Severity::Error)
        );
    }

    #[test]
    fn a_second_submission_is_ignored_while_one_is_in_flight() {
        let mut state = at_signup();
        state.form = filled_form();
        let state = reduce(state, FunnelAction::SubmitStarted);
        let again = reduce(state.clone(), FunnelAction::SubmitStarted);
        assert_eq!(again, state);
    }

    #[test]
    fn edits_are_ignored_while_submitting() {
        let mut state = at_signup();
        state.form = filled_form();
        let state = reduce(state, FunnelAction::SubmitStarted);
        let state = reduce(state, FunnelAction::Edit(Field::Name, "Someone Else".into()));
        assert_eq!(state.form.name, "Ana Souza");
    }

    #[test]
    fn edits_overwrite_single_fields() {
        let state = reduce(
            at_signup(),
            FunnelAction::Edit(Field::Instagram, "new.handle".into()),
        );
        assert_eq!(state.form.instagram, "new.handle");
        assert_eq!(state.form.name, "");
    }

    #[test]
    fn actions_out_of_step_leave_state_unchanged() {
        let initial = FunnelState::default();
        for action in [
            FunnelAction::ChooseProfile(UserType::Creator),
            FunnelAction::ShowMentorship,
            FunnelAction::ShowDashboard,
            FunnelAction::ClaimSpot,
            FunnelAction::SubmitStarted,
            FunnelAction::SubmitSucceeded,
            FunnelAction::SubmitFailed,
        ] {
            assert_eq!(reduce(initial.clone(), action), initial);
        }
    }

    #[test]
    fn dismissing_clears_the_notice() {
        let state = reduce(FunnelState::default(), FunnelAction::RequestAccess);
        let state = reduce(state, FunnelAction::ChooseProfile(UserType::User));
        assert!(state.notice.is_some());
        let state = reduce(state, FunnelAction::DismissNotice);
        assert!(state.notice.is_none());
    }

    #[test]
    fn unset_profile_submits_as_creator() {
        assert_eq!(UserType::Unset.lead_value(), "creator");
        assert_eq!(UserType::Creator.lead_value(), "creator");
        assert_eq!(UserType::User.lead_value(), "user");
    }
}
