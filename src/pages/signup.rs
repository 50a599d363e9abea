use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::state::{format_time, Field, FormData};

const GUARANTEES: [&str; 4] = [
    "Lifetime 15% rate (vs. 20% standard)",
    "5% commission on referred creators (forever)",
    "Exclusive real-time dashboard",
    "Priority VIP support",
];

#[derive(Properties, PartialEq)]
pub struct SignupFormProps {
    pub form: FormData,
    pub time_left: u32,
    pub remaining_spots: u32,
    pub is_submitting: bool,
    pub on_edit: Callback<(Field, String)>,
    pub on_submit: Callback<SubmitEvent>,
}

#[function_component(SignupForm)]
pub fn signup_form(props: &SignupFormProps) -> Html {
    let edit = |field: Field| {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit((field, input.value()));
        })
    };

    html! {
        <div class="screen">
            <style>
                {r#"
                    .signup-content {
                        max-width: 640px;
                        width: 100%;
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                    }
                    .signup-content > header {
                        text-align: center;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        align-items: center;
                    }
                    .countdown-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 0.75rem 1.5rem;
                        background: #dc2626;
                        border-radius: 999px;
                        font-weight: bold;
                        font-size: 1.1rem;
                        animation: pulse 2s infinite;
                    }
                    @keyframes pulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.6; }
                    }
                    .signup-content h2 { font-size: 2.5rem; color: #FFD700; }
                    .signup-content > header p { font-size: 1.2rem; color: #d1d5db; }
                    .signup-form {
                        background: linear-gradient(135deg, #1a1a1a, #0a0a0a);
                        border: 2px solid #FFD700;
                        border-radius: 16px;
                        padding: 2rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .form-field label {
                        display: block;
                        font-size: 0.85rem;
                        font-weight: bold;
                        color: #FFD700;
                        margin-bottom: 0.5rem;
                    }
                    .form-field input {
                        width: 100%;
                        padding: 0.75rem 1rem;
                        background: #000;
                        border: 2px solid #374151;
                        border-radius: 8px;
                        color: #fff;
                        font-size: 1rem;
                        transition: border-color 0.3s;
                    }
                    .form-field input:focus { border-color: #FFD700; outline: none; }
                    .form-field input:disabled { opacity: 0.5; }
                    .handle-group { display: flex; align-items: stretch; }
                    .handle-group .at {
                        display: flex;
                        align-items: center;
                        padding: 0 1rem;
                        background: #1f2937;
                        border: 2px solid #374151;
                        border-right: none;
                        border-radius: 8px 0 0 8px;
                        color: #9ca3af;
                    }
                    .handle-group input { border-radius: 0 8px 8px 0; }
                    .guarantees {
                        background: rgba(0, 0, 0, 0.5);
                        border-radius: 12px;
                        padding: 1.5rem;
                    }
                    .guarantees > p {
                        font-size: 0.85rem;
                        font-weight: bold;
                        color: #FFD700;
                        margin-bottom: 0.75rem;
                    }
                    .guarantees li {
                        display: flex;
                        gap: 0.5rem;
                        list-style: none;
                        padding: 0.25rem 0;
                        font-size: 0.9rem;
                        color: #d1d5db;
                    }
                    .guarantees .check { color: #22c55e; }
                    .submit-button {
                        width: 100%;
                        padding: 1.25rem;
                        background: linear-gradient(90deg, #FFD700, #FFA500);
                        color: #000;
                        font-weight: bold;
                        font-size: 1.1rem;
                        border: none;
                        border-radius: 999px;
                        cursor: pointer;
                        transition: transform 0.3s;
                    }
                    .submit-button:hover:not(:disabled) { transform: scale(1.02); }
                    .submit-button:disabled { opacity: 0.5; cursor: not-allowed; }
                    .terms-note {
                        font-size: 0.75rem;
                        text-align: center;
                        color: #6b7280;
                    }
                    @media (max-width: 768px) {
                        .signup-content h2 { font-size: 1.75rem; }
                        .signup-form { padding: 1.5rem; }
                    }
                "#}
            </style>
            <div class="signup-content">
                <header>
                    <div class="countdown-badge">
                        <span>{"⏱"}</span>
                        <span>{ format!("Spot reserved for {}", format_time(props.time_left)) }</span>
                    </div>
                    <h2>{"Application pre-approved"}</h2>
                    <p>{ format!("Founder batch: only {} spots remaining", props.remaining_spots) }</p>
                </header>
                <form class="signup-form" onsubmit={props.on_submit.clone()}>
                    <div class="form-field">
                        <label for="name">{"Full name *"}</label>
                        <input
                            id="name"
                            type="text"
                            required=true
                            placeholder="Your full name"
                            value={props.form.name.clone()}
                            oninput={edit(Field::Name)}
                            disabled={props.is_submitting}
                        />
                    </div>
                    <div class="form-field">
                        <label for="whatsapp">{"WhatsApp (with country code) *"}</label>
                        <input
                            id="whatsapp"
                            type="tel"
                            required=true
                            placeholder="+1 (555) 000-0000"
                            value={props.form.whatsapp.clone()}
                            oninput={edit(Field::Whatsapp)}
                            disabled={props.is_submitting}
                        />
                    </div>
                    <div class="form-field">
                        <label for="instagram">{"Instagram (required for review) *"}</label>
                        <div class="handle-group">
                            <span class="at">{"@"}</span>
                            <input
                                id="instagram"
                                type="text"
                                required=true
                                placeholder="your_handle"
                                value={props.form.instagram.clone()}
                                oninput={edit(Field::Instagram)}
                                disabled={props.is_submitting}
                            />
                        </div>
                    </div>
                    <div class="guarantees">
                        <p>{"You are locking in:"}</p>
                        <ul>
                            {
                                for GUARANTEES.iter().map(|item| html! {
                                    <li>
                                        <span class="check">{"✓"}</span>
                                        { *item }
                                    </li>
                                })
                            }
                        </ul>
                    </div>
                    <button class="submit-button" type="submit" disabled={props.is_submitting}>
                        {
                            if props.is_submitting {
                                "PROCESSING…"
                            } else {
                                "LOCK IN 15% + THE MENTOR SYSTEM"
                            }
                        }
                    </button>
                    <p class="terms-note">
                        {"By submitting you agree to our terms of use and privacy policy"}
                    </p>
                </form>
            </div>
        </div>
    }
}
