use yew::prelude::*;

const HOW_IT_WORKS: [(&str, &str, &str); 4] = [
    ("You receive an ", "exclusive invite link", ""),
    ("Earn a ", "5% commission", " on everything your referred creators gross"),
    ("", "Lifetime", " passive income, for as long as they keep selling"),
    ("Nothing comes out of their pocket: ", "everyone wins", ""),
];

#[derive(Properties, PartialEq)]
pub struct MentorshipProps {
    pub on_continue: Callback<()>,
}

#[function_component(Mentorship)]
pub fn mentorship(props: &MentorshipProps) -> Html {
    let onclick = {
        let on_continue = props.on_continue.clone();
        Callback::from(move |_: MouseEvent| on_continue.emit(()))
    };

    let bullets = HOW_IT_WORKS.iter().map(|&(before, highlight, after)| {
        html! {
            <li>
                <span class="check">{"✓"}</span>
                <p>{ before }<strong>{ highlight }</strong>{ after }</p>
            </li>
        }
    });

    html! {
        <div class="screen">
            <style>
                {r#"
                    .mentorship-content {
                        max-width: 840px;
                        width: 100%;
                        display: flex;
                        flex-direction: column;
                        gap: 3rem;
                    }
                    .mentorship-content > header { text-align: center; }
                    .mentorship-content .crown {
                        font-size: 4.5rem;
                        color: #FFD700;
                        animation: pulse 2s infinite;
                    }
                    @keyframes pulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.6; }
                    }
                    .mentorship-content h2 {
                        font-size: 3rem;
                        color: #FFD700;
                        margin: 1rem 0;
                    }
                    .mentorship-content > header p { font-size: 1.5rem; color: #d1d5db; }
                    .mentor-panel {
                        background: linear-gradient(135deg, #1a1a1a, #0a0a0a);
                        border: 2px solid #FFD700;
                        border-radius: 16px;
                        padding: 3rem 2rem;
                    }
                    .mentor-tree {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 2rem;
                    }
                    .mentor-you {
                        position: relative;
                        width: 6rem;
                        height: 6rem;
                        border-radius: 50%;
                        background: linear-gradient(135deg, #FFD700, #FFA500);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 2.5rem;
                        box-shadow: 0 0 40px rgba(255, 215, 0, 0.5);
                    }
                    .mentor-you .you-tag {
                        position: absolute;
                        top: -0.5rem;
                        right: -1rem;
                        background: #22c55e;
                        border-radius: 999px;
                        padding: 0.2rem 0.5rem;
                        font-size: 0.6rem;
                        font-weight: bold;
                    }
                    .mentor-referrals {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .referral {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .referral .wire {
                        width: 2px;
                        height: 3rem;
                        background: linear-gradient(to bottom, #FFD700, transparent);
                    }
                    .referral .avatar {
                        width: 4rem;
                        height: 4rem;
                        border-radius: 50%;
                        background: #1f2937;
                        border: 2px solid #FFD700;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.5rem;
                    }
                    .referral .cut { font-size: 0.75rem; color: #9ca3af; }
                    .referral .cut strong { color: #4ade80; display: block; text-align: center; }
                    .how-it-works {
                        margin-top: 2rem;
                        background: rgba(0, 0, 0, 0.5);
                        border-radius: 12px;
                        padding: 1.5rem;
                    }
                    .how-it-works h3 { color: #FFD700; margin-bottom: 1rem; }
                    .how-it-works ul { list-style: none; }
                    .how-it-works li {
                        display: flex;
                        gap: 0.75rem;
                        padding: 0.5rem 0;
                        align-items: flex-start;
                    }
                    .how-it-works .check { color: #FFD700; font-weight: bold; }
                    .how-it-works p { color: #d1d5db; }
                    .how-it-works strong { color: #FFD700; }
                    .mentorship-content footer { text-align: center; }
                    @media (max-width: 768px) {
                        .mentorship-content h2 { font-size: 2rem; }
                    }
                "#}
            </style>
            <div class="mentorship-content">
                <header>
                    <div class="crown">{"♛"}</div>
                    <h2>{"Become a Velora Mentor"}</h2>
                    <p>{"Your influence is worth money"}</p>
                </header>
                <div class="mentor-panel">
                    <div class="mentor-tree">
                        <div class="mentor-you">
                            {"♛"}
                            <span class="you-tag">{"YOU"}</span>
                        </div>
                        <div class="mentor-referrals">
                            {
                                for (0..3).map(|_| html! {
                                    <div class="referral">
                                        <div class="wire"></div>
                                        <div class="avatar">{"👤"}</div>
                                        <div class="cut">
                                            <strong>{"$"}</strong>
                                            {"5% for life"}
                                        </div>
                                    </div>
                                })
                            }
                        </div>
                    </div>
                    <div class="how-it-works">
                        <h3>{"How it works:"}</h3>
                        <ul>
                            { for bullets }
                        </ul>
                    </div>
                </div>
                <footer>
                    <button class="cta" {onclick}>
                        {"Show me my earning potential"}
                        <span class="cta-arrow">{"→"}</span>
                    </button>
                </footer>
            </div>
        </div>
    }
}
