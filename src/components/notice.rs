use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::state::{Notice, Severity};

const AUTO_DISMISS_MS: u32 = 8_000;

#[derive(Properties, PartialEq)]
pub struct NoticeToastProps {
    pub notice: Notice,
    pub on_dismiss: Callback<()>,
}

#[function_component(NoticeToast)]
pub fn notice_toast(props: &NoticeToastProps) -> Html {
    // Auto-dismiss. The timeout is dropped, and thereby cancelled, when a
    // new notice replaces this one or the toast unmounts.
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(AUTO_DISMISS_MS, move || on_dismiss.emit(()));
                move || drop(timeout)
            },
            props.notice.clone(),
        );
    }

    let severity_class = match props.notice.severity {
        Severity::Success => "success",
        Severity::Error => "error",
        Severity::Info => "info",
    };

    let dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class={classes!("notice-toast", severity_class)}>
            <style>
                {r#"
                    .notice-toast {
                        position: fixed;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        max-width: 480px;
                        width: calc(100% - 2rem);
                        padding: 1rem 1.25rem;
                        border-radius: 12px;
                        background: rgba(26, 26, 26, 0.95);
                        backdrop-filter: blur(10px);
                        box-shadow: 0 8px 32px rgba(0, 0, 0, 0.4);
                        z-index: 100;
                        animation: toast-in 0.3s ease-out;
                    }
                    @keyframes toast-in {
                        from { transform: translate(-50%, 100%); opacity: 0; }
                        to { transform: translate(-50%, 0); opacity: 1; }
                    }
                    .notice-toast.success { border: 1px solid rgba(34, 197, 94, 0.5); }
                    .notice-toast.error { border: 1px solid rgba(239, 68, 68, 0.5); }
                    .notice-toast.info { border: 1px solid rgba(255, 215, 0, 0.5); }
                    .notice-toast p {
                        flex: 1;
                        font-size: 0.9rem;
                        color: rgba(255, 255, 255, 0.9);
                    }
                    .notice-toast.success p { color: #4ade80; }
                    .notice-toast.error p { color: #f87171; }
                    .notice-toast button {
                        background: none;
                        border: none;
                        color: rgba(255, 255, 255, 0.5);
                        font-size: 1.25rem;
                        cursor: pointer;
                        line-height: 1;
                    }
                    .notice-toast button:hover { color: #fff; }
                "#}
            </style>
            <p>{ &props.notice.message }</p>
            <button onclick={dismiss} aria-label="Dismiss">{"×"}</button>
        </div>
    }
}
