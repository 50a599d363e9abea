use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::notice::NoticeToast;
use crate::pages::dashboard::DashboardPreview;
use crate::pages::mentorship::Mentorship;
use crate::pages::opportunity::Opportunity;
use crate::pages::profile::ProfileChoice;
use crate::pages::signup::SignupForm;
use crate::pages::welcome::Welcome;
use crate::state::{Field, FunnelAction, FunnelState, Step, UserType};
use crate::store::{LeadStore, NewLead, SubmitError};

#[derive(Properties)]
pub struct FunnelProps {
    pub store: Rc<dyn LeadStore>,
}

impl PartialEq for FunnelProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

// Runs the one network call of the whole funnel and folds its outcome back
// into an action. The two failure modes get their own log lines; the visitor
// sees the same retry notice for both.
async fn push_lead(store: Rc<dyn LeadStore>, lead: NewLead) -> FunnelAction {
    match store.submit_lead(lead).await {
        Ok(record) => {
            info!("lead stored for @{}", record.instagram);
            FunnelAction::SubmitSucceeded
        }
        Err(err @ SubmitError::StoreRejected { .. }) => {
            error!("{err}");
            FunnelAction::SubmitFailed
        }
        Err(err @ SubmitError::TransportFailure(_)) => {
            error!("{err}");
            FunnelAction::SubmitFailed
        }
    }
}

#[function_component(Funnel)]
pub fn funnel(props: &FunnelProps) -> Html {
    let state = use_reducer(FunnelState::default);

    // The countdown only runs while the signup screen is up. Dropping the
    // interval in the cleanup stops the tick source on step change and on
    // unmount, so no timer outlives the view.
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |step| {
                let interval = (*step == Step::Signup).then(|| {
                    Interval::new(1_000, move || dispatcher.dispatch(FunnelAction::Tick))
                });
                move || drop(interval)
            },
            state.step,
        );
    }

    let on_request_access = {
        let state = state.clone();
        Callback::from(move |()| state.dispatch(FunnelAction::RequestAccess))
    };
    let on_choose = {
        let state = state.clone();
        Callback::from(move |choice: UserType| {
            state.dispatch(FunnelAction::ChooseProfile(choice))
        })
    };
    let on_show_mentorship = {
        let state = state.clone();
        Callback::from(move |()| state.dispatch(FunnelAction::ShowMentorship))
    };
    let on_show_dashboard = {
        let state = state.clone();
        Callback::from(move |()| state.dispatch(FunnelAction::ShowDashboard))
    };
    let on_claim_spot = {
        let state = state.clone();
        Callback::from(move |()| state.dispatch(FunnelAction::ClaimSpot))
    };
    let on_edit = {
        let state = state.clone();
        Callback::from(move |(field, value): (Field, String)| {
            state.dispatch(FunnelAction::Edit(field, value))
        })
    };
    let on_dismiss_notice = {
        let state = state.clone();
        Callback::from(move |()| state.dispatch(FunnelAction::DismissNotice))
    };

    let on_submit = {
        let state = state.clone();
        let store = props.store.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // The in-flight guard. Resubmitting is only possible again once
            // push_lead has resolved to a terminal action.
            if state.is_submitting {
                return;
            }
            let lead = NewLead::from_form(&state.form, state.user_type);
            state.dispatch(FunnelAction::SubmitStarted);
            let dispatcher = state.dispatcher();
            let store = store.clone();
            spawn_local(async move {
                let outcome = push_lead(store, lead).await;
                dispatcher.dispatch(outcome);
            });
        })
    };

    let screen = match state.step {
        Step::Welcome => html! {
            <Welcome {on_request_access} />
        },
        Step::Profile => html! {
            <ProfileChoice on_choose={on_choose} />
        },
        Step::Opportunity => html! {
            <Opportunity
                remaining_spots={state.remaining_spots}
                on_continue={on_show_mentorship}
            />
        },
        Step::Mentorship => html! {
            <Mentorship on_continue={on_show_dashboard} />
        },
        Step::Dashboard => html! {
            <DashboardPreview on_claim={on_claim_spot} />
        },
        Step::Signup => html! {
            <SignupForm
                form={state.form.clone()}
                time_left={state.time_left}
                remaining_spots={state.remaining_spots}
                is_submitting={state.is_submitting}
                on_edit={on_edit}
                on_submit={on_submit}
            />
        },
    };

    html! {
        <div class="funnel-root">
            <style>
                {r#"
                    .screen {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        padding: 3rem 1rem;
                    }
                    .cta {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 1rem 2.5rem;
                        background: linear-gradient(90deg, #FFD700, #FFA500);
                        color: #000;
                        font-weight: bold;
                        font-size: 1.1rem;
                        border: none;
                        border-radius: 999px;
                        cursor: pointer;
                        box-shadow: 0 16px 48px rgba(0, 0, 0, 0.5);
                        transition: transform 0.3s, box-shadow 0.3s;
                    }
                    .cta:hover {
                        transform: scale(1.05);
                        box-shadow: 0 16px 48px rgba(255, 215, 0, 0.4);
                    }
                    .cta.big {
                        padding: 1.5rem 3rem;
                        font-size: 1.35rem;
                        animation: pulse 2s infinite;
                    }
                    @keyframes pulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.6; }
                    }
                    .cta-arrow { transition: transform 0.3s; }
                    .cta:hover .cta-arrow { transform: translateX(4px); }
                "#}
            </style>
            { screen }
            if let Some(notice) = state.notice.clone() {
                <NoticeToast {notice} on_dismiss={on_dismiss_notice} />
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{LeadRecord, SubmitFuture};
    use futures::executor::block_on;

    struct FakeStore {
        outcome: Result<(), SubmitError>,
    }

    impl LeadStore for FakeStore {
        fn submit_lead(&self, lead: NewLead) -> SubmitFuture {
            let outcome = self.outcome.clone();
            Box::pin(async move {
                outcome.map(|()| LeadRecord::from(lead))
            })
        }
    }

    fn lead() -> NewLead {
        NewLead {
            name: "Ana Souza".into(),
            whatsapp: "+55 11 99999-0000".into(),
            instagram: "ana.creates".into(),
            user_type: "creator",
            is_founder: true,
        }
    }

    #[test]
    fn acknowledged_submission_resolves_to_the_success_action() {
        let store: Rc<dyn LeadStore> = Rc::new(FakeStore { outcome: Ok(()) });
        assert_eq!(
            block_on(push_lead(store, lead())),
            FunnelAction::SubmitSucceeded
        );
    }

    #[test]
    fn store_rejection_resolves_to_the_failure_action() {
        let store: Rc<dyn LeadStore> = Rc::new(FakeStore {
            outcome: Err(SubmitError::StoreRejected {
                status: 409,
                message: "duplicate key value".into(),
            }),
        });
        assert_eq!(
            block_on(push_lead(store, lead())),
            FunnelAction::SubmitFailed
        );
    }

    #[test]
    fn transport_failure_resolves_to_the_failure_action() {
        let store: Rc<dyn LeadStore> = Rc::new(FakeStore {
            outcome: Err(SubmitError::TransportFailure("connection refused".into())),
        });
        assert_eq!(
            block_on(push_lead(store, lead())),
            FunnelAction::SubmitFailed
        );
    }
}
