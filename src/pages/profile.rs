use yew::prelude::*;

use crate::state::UserType;

#[derive(Properties, PartialEq)]
pub struct ProfileChoiceProps {
    pub on_choose: Callback<UserType>,
}

#[function_component(ProfileChoice)]
pub fn profile_choice(props: &ProfileChoiceProps) -> Html {
    let choose_creator = {
        let on_choose = props.on_choose.clone();
        Callback::from(move |_: MouseEvent| on_choose.emit(UserType::Creator))
    };
    let choose_fan = {
        let on_choose = props.on_choose.clone();
        Callback::from(move |_: MouseEvent| on_choose.emit(UserType::User))
    };

    html! {
        <div class="screen">
            <style>
                {r#"
                    .profile-content {
                        max-width: 840px;
                        width: 100%;
                        display: flex;
                        flex-direction: column;
                        gap: 3rem;
                    }
                    .profile-content header {
                        text-align: center;
                    }
                    .profile-content h2 {
                        font-size: 2.5rem;
                        color: #FFD700;
                        margin-bottom: 0.75rem;
                    }
                    .profile-content header p {
                        font-size: 1.2rem;
                        color: #9ca3af;
                    }
                    .profile-cards {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.5rem;
                    }
                    .profile-card {
                        position: relative;
                        padding: 2.5rem 2rem;
                        border-radius: 16px;
                        background: linear-gradient(135deg, #1a1a1a, #0a0a0a);
                        border: 2px solid #374151;
                        color: inherit;
                        cursor: pointer;
                        text-align: center;
                        transition: transform 0.3s, border-color 0.3s;
                    }
                    .profile-card:hover { transform: scale(1.03); border-color: #6b7280; }
                    .profile-card.creator { border-color: #FFD700; }
                    .profile-card.creator:hover { box-shadow: 0 0 40px rgba(255, 215, 0, 0.25); }
                    .profile-card .card-mark { font-size: 3rem; margin-bottom: 1rem; }
                    .profile-card h3 { font-size: 1.5rem; margin-bottom: 0.5rem; }
                    .profile-card.creator h3 { color: #FFD700; }
                    .profile-card p { color: #9ca3af; font-size: 0.95rem; }
                    .vip-badge {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        padding: 0.25rem 0.75rem;
                        background: #FFD700;
                        color: #000;
                        font-size: 0.7rem;
                        font-weight: bold;
                        border-radius: 999px;
                    }
                    @media (max-width: 768px) {
                        .profile-cards { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="profile-content">
                <header>
                    <h2>{"Define your profile"}</h2>
                    <p>{"Pick the option that best describes you"}</p>
                </header>
                <div class="profile-cards">
                    <button class="profile-card creator" onclick={choose_creator}>
                        <div class="card-mark">{"♛"}</div>
                        <h3>{"I'm a Creator"}</h3>
                        <p>{"Monetize your content and build your digital empire"}</p>
                        <span class="vip-badge">{"VIP"}</span>
                    </button>
                    <button class="profile-card" onclick={choose_fan}>
                        <div class="card-mark">{"👥"}</div>
                        <h3>{"I'm a Fan"}</h3>
                        <p>{"Get exclusive content from the best creators"}</p>
                    </button>
                </div>
            </div>
        </div>
    }
}
