use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DashboardPreviewProps {
    pub on_claim: Callback<()>,
}

#[function_component(DashboardPreview)]
pub fn dashboard_preview(props: &DashboardPreviewProps) -> Html {
    let onclick = {
        let on_claim = props.on_claim.clone();
        Callback::from(move |_: MouseEvent| on_claim.emit(()))
    };

    html! {
        <div class="screen">
            <style>
                {r#"
                    .dashboard-content {
                        max-width: 960px;
                        width: 100%;
                        display: flex;
                        flex-direction: column;
                        gap: 3rem;
                    }
                    .dashboard-content > header { text-align: center; }
                    .dashboard-content h2 {
                        font-size: 3rem;
                        color: #FFD700;
                        margin-bottom: 1rem;
                    }
                    .dashboard-content > header p { font-size: 1.25rem; color: #d1d5db; }
                    .phone-frame {
                        margin: 0 auto;
                        max-width: 360px;
                        width: 100%;
                        background: #111827;
                        border: 8px solid #1f2937;
                        border-radius: 3rem;
                        padding: 1rem;
                        box-shadow: 0 24px 64px rgba(0, 0, 0, 0.6);
                    }
                    .phone-screen {
                        background: linear-gradient(to bottom, #000, #111827);
                        border-radius: 2.25rem;
                        overflow: hidden;
                    }
                    .phone-notch {
                        height: 1.5rem;
                        display: flex;
                        justify-content: center;
                    }
                    .phone-notch div {
                        width: 8rem;
                        height: 1.5rem;
                        background: #111827;
                        border-radius: 0 0 1rem 1rem;
                    }
                    .phone-body {
                        padding: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1.25rem;
                    }
                    .phone-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        color: #9ca3af;
                        font-size: 0.85rem;
                    }
                    .phone-header .crown { color: #FFD700; font-size: 1.5rem; }
                    .balance-card {
                        background: linear-gradient(135deg, #FFD700, #FFA500);
                        border-radius: 1.25rem;
                        padding: 1.5rem;
                        color: #000;
                    }
                    .balance-card p { font-size: 0.8rem; opacity: 0.7; margin-bottom: 0.5rem; }
                    .balance-card strong { font-size: 2rem; }
                    .revenue-card {
                        background: #1f2937;
                        border: 1px solid #374151;
                        border-radius: 1rem;
                        padding: 1rem;
                    }
                    .revenue-card.referral { border-color: #FFD700; }
                    .revenue-card .label {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: #9ca3af;
                        font-size: 0.8rem;
                        margin-bottom: 0.5rem;
                    }
                    .revenue-card strong { font-size: 1.5rem; }
                    .revenue-card.referral strong { color: #FFD700; }
                    .revenue-card .detail { font-size: 0.7rem; color: #6b7280; margin-top: 0.25rem; }
                    .stat-tiles {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 0.75rem;
                    }
                    .stat-tile {
                        background: #1f2937;
                        border-radius: 0.75rem;
                        padding: 0.75rem;
                        text-align: center;
                    }
                    .stat-tile strong { font-size: 1.5rem; display: block; }
                    .stat-tile.gold strong { color: #FFD700; }
                    .stat-tile span { font-size: 0.7rem; color: #9ca3af; }
                    .closing-panel {
                        background: linear-gradient(135deg, #1a1a1a, #0a0a0a);
                        border: 2px solid #FFD700;
                        border-radius: 16px;
                        padding: 2rem;
                    }
                    .closing-panel h3 {
                        text-align: center;
                        color: #FFD700;
                        font-size: 1.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .closing-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                        text-align: center;
                    }
                    .closing-grid .mark {
                        width: 4rem;
                        height: 4rem;
                        margin: 0 auto 0.5rem;
                        border-radius: 50%;
                        background: #FFD700;
                        color: #000;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.5rem;
                    }
                    .closing-grid strong { display: block; margin-bottom: 0.25rem; }
                    .closing-grid span { font-size: 0.85rem; color: #9ca3af; }
                    .dashboard-content footer { text-align: center; }
                    @media (max-width: 768px) {
                        .dashboard-content h2 { font-size: 2rem; }
                        .closing-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="dashboard-content">
                <header>
                    <h2>{"Total control of your empire"}</h2>
                    <p>{"Track your sales and your referrals' earnings in real time"}</p>
                </header>
                <div class="phone-frame">
                    <div class="phone-screen">
                        <div class="phone-notch"><div></div></div>
                        <div class="phone-body">
                            <div class="phone-header">
                                <span class="crown">{"♛"}</span>
                                <span>{"Dashboard"}</span>
                            </div>
                            <div class="balance-card">
                                <p>{"Total balance"}</p>
                                <strong>{"$14,250.00"}</strong>
                            </div>
                            <div class="revenue-card">
                                <div class="label">
                                    <span>{"📈"}</span>
                                    <span>{"My sales (85%)"}</span>
                                </div>
                                <strong>{"$10,000.00"}</strong>
                            </div>
                            <div class="revenue-card referral">
                                <div class="label">
                                    <span>{"♛"}</span>
                                    <span>{"Mentor commission (5%)"}</span>
                                </div>
                                <strong>{"$4,250.00"}</strong>
                                <p class="detail">{"From 12 active referrals"}</p>
                            </div>
                            <div class="stat-tiles">
                                <div class="stat-tile">
                                    <strong>{"12"}</strong>
                                    <span>{"Referrals"}</span>
                                </div>
                                <div class="stat-tile gold">
                                    <strong>{"+85%"}</strong>
                                    <span>{"vs. standard"}</span>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
                <div class="closing-panel">
                    <h3>{"And this is just the start..."}</h3>
                    <div class="closing-grid">
                        <div>
                            <div class="mark">{"📈"}</div>
                            <strong>{"85% payout"}</strong>
                            <span>{"Highest rate on the market"}</span>
                        </div>
                        <div>
                            <div class="mark">{"♛"}</div>
                            <strong>{"Passive income"}</strong>
                            <span>{"Lifetime 5% from referrals"}</span>
                        </div>
                        <div>
                            <div class="mark">{"👥"}</div>
                            <strong>{"VIP support"}</strong>
                            <span>{"Priority, human, fast"}</span>
                        </div>
                    </div>
                </div>
                <footer>
                    <button class="cta big" {onclick}>
                        {"I WANT MY FOUNDER SPOT NOW"}
                        <span class="cta-arrow">{"→"}</span>
                    </button>
                </footer>
            </div>
        </div>
    }
}
