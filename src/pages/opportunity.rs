use yew::prelude::*;

struct FeeColumn {
    title: &'static str,
    subtitle: &'static str,
    fee_pct: u32,
    accent: &'static str,
}

const FEE_COLUMNS: [FeeColumn; 3] = [
    FeeColumn {
        title: "Other Platforms",
        subtitle: "The usual suspects",
        fee_pct: 25,
        accent: "rival",
    },
    FeeColumn {
        title: "Velora Standard",
        subtitle: "Regular creator",
        fee_pct: 20,
        accent: "standard",
    },
    FeeColumn {
        title: "Velora FOUNDER",
        subtitle: "Only 150 spots",
        fee_pct: 15,
        accent: "founder",
    },
];

const EXAMPLE_REVENUE: u32 = 10_000;
const TABLE_REVENUES: [u32; 4] = [5_000, 10_000, 20_000, 50_000];

fn usd(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::from("$");
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn net_of(revenue: u32, fee_pct: u32) -> u32 {
    revenue - revenue * fee_pct / 100
}

#[derive(Properties, PartialEq)]
pub struct OpportunityProps {
    pub remaining_spots: u32,
    pub on_continue: Callback<()>,
}

#[function_component(Opportunity)]
pub fn opportunity(props: &OpportunityProps) -> Html {
    let onclick = {
        let on_continue = props.on_continue.clone();
        Callback::from(move |_: MouseEvent| on_continue.emit(()))
    };

    let columns = FEE_COLUMNS.iter().map(|column| {
        let keep_pct = 100 - column.fee_pct;
        let fee = EXAMPLE_REVENUE * column.fee_pct / 100;
        html! {
            <div class={classes!("fee-column", column.accent)}>
                <header>
                    <h3>{ column.title }</h3>
                    <p>{ column.subtitle }</p>
                </header>
                <div class="fee-bar">
                    <div class="fee-cut" style={format!("height: {}%;", column.fee_pct)}>
                        <strong>{ format!("{}%", column.fee_pct) }</strong>
                        <span>{"Platform"}</span>
                    </div>
                    <div class="fee-keep" style={format!("height: {}%;", keep_pct)}>
                        <strong>{ format!("{keep_pct}%") }</strong>
                        <span>{"You keep"}</span>
                    </div>
                </div>
                <div class="fee-example">
                    <p class="example-title">{"Worked example:"}</p>
                    <div class="example-row">
                        <span>{"You gross:"}</span>
                        <span>{ usd(EXAMPLE_REVENUE) }</span>
                    </div>
                    <div class="example-row">
                        <span>{ format!("Fee ({}%):", column.fee_pct) }</span>
                        <span>{ format!("- {}", usd(fee)) }</span>
                    </div>
                    <div class="example-row total">
                        <span>{"You receive:"}</span>
                        <span>{ usd(EXAMPLE_REVENUE - fee) }</span>
                    </div>
                </div>
            </div>
        }
    });

    let table_rows = TABLE_REVENUES.iter().map(|&revenue| {
        // Gain is the founder take compared with the usual 25% platforms.
        let gain = net_of(revenue, 15) - net_of(revenue, 25);
        html! {
            <tr>
                <td class="revenue">{ usd(revenue) }</td>
                <td class="rival">{ usd(net_of(revenue, 25)) }</td>
                <td class="standard">{ usd(net_of(revenue, 20)) }</td>
                <td class="founder">{ usd(net_of(revenue, 15)) }</td>
                <td class="gain">{ format!("+ {}", usd(gain)) }</td>
            </tr>
        }
    });

    html! {
        <div class="screen">
            <style>
                {r#"
                    .opportunity-content {
                        max-width: 1080px;
                        width: 100%;
                        display: flex;
                        flex-direction: column;
                        gap: 3rem;
                    }
                    .urgency-badge {
                        align-self: center;
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.75rem 1.5rem;
                        background: #dc2626;
                        border-radius: 999px;
                        font-weight: bold;
                        animation: pulse 2s infinite;
                    }
                    @keyframes pulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.6; }
                    }
                    .opportunity-content > header { text-align: center; }
                    .opportunity-content > header h2 {
                        font-size: 3rem;
                        color: #FFD700;
                        margin-bottom: 1rem;
                    }
                    .opportunity-content > header p { font-size: 1.35rem; color: #d1d5db; }
                    .opportunity-content > header p strong { color: #FFD700; }
                    .fee-columns {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }
                    .fee-column {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                        padding: 1.5rem;
                        border-radius: 16px;
                        background: linear-gradient(135deg, rgba(31, 41, 55, 0.5), rgba(17, 24, 39, 0.5));
                        border: 2px solid #4b5563;
                    }
                    .fee-column.rival {
                        background: linear-gradient(135deg, rgba(69, 10, 10, 0.4), rgba(127, 29, 29, 0.2));
                        border-color: rgba(220, 38, 38, 0.5);
                    }
                    .fee-column.founder {
                        background: linear-gradient(135deg, rgba(255, 215, 0, 0.15), rgba(255, 165, 0, 0.05));
                        border: 3px solid #FFD700;
                        box-shadow: 0 0 40px rgba(255, 215, 0, 0.3);
                    }
                    .fee-column header { text-align: center; }
                    .fee-column h3 { font-size: 1.2rem; margin-bottom: 0.25rem; }
                    .fee-column.rival h3 { color: #f87171; }
                    .fee-column.standard h3 { color: #d1d5db; }
                    .fee-column.founder h3 { color: #FFD700; }
                    .fee-column header p { font-size: 0.85rem; color: #6b7280; }
                    .fee-bar {
                        height: 240px;
                        border-radius: 12px;
                        overflow: hidden;
                        background: #111827;
                        display: flex;
                        flex-direction: column;
                    }
                    .fee-cut, .fee-keep {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                    }
                    .fee-cut { background: linear-gradient(to bottom, #374151, #4b5563); }
                    .fee-cut strong { font-size: 1.25rem; }
                    .fee-cut span { font-size: 0.7rem; color: rgba(255, 255, 255, 0.7); }
                    .fee-keep strong { font-size: 2.5rem; }
                    .fee-keep span { font-size: 0.8rem; }
                    .rival .fee-keep { background: linear-gradient(to top, #dc2626, #ef4444); }
                    .standard .fee-keep { background: linear-gradient(to top, #6b7280, #9ca3af); }
                    .founder .fee-keep {
                        background: linear-gradient(to top, #FFD700, #FFA500);
                        color: #000;
                    }
                    .fee-example {
                        background: rgba(0, 0, 0, 0.5);
                        border-radius: 12px;
                        padding: 1rem;
                        font-size: 0.9rem;
                    }
                    .example-title {
                        text-align: center;
                        color: #9ca3af;
                        font-size: 0.8rem;
                        margin-bottom: 0.5rem;
                    }
                    .founder .example-title { color: #FFD700; font-weight: bold; }
                    .example-row {
                        display: flex;
                        justify-content: space-between;
                        padding: 0.25rem 0;
                        border-top: 1px solid rgba(75, 85, 99, 0.5);
                        color: #d1d5db;
                    }
                    .example-row:first-of-type { border-top: none; }
                    .example-row.total { font-weight: bold; color: #fff; }
                    .founder .example-row.total { color: #FFD700; }
                    .earnings-table {
                        background: linear-gradient(135deg, #1a1a1a, #0a0a0a);
                        border: 2px solid #FFD700;
                        border-radius: 16px;
                        padding: 2rem;
                        overflow-x: auto;
                    }
                    .earnings-table h3 {
                        text-align: center;
                        color: #FFD700;
                        font-size: 1.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .earnings-table table { width: 100%; border-collapse: collapse; }
                    .earnings-table th, .earnings-table td {
                        padding: 0.75rem 0.5rem;
                        text-align: center;
                        border-bottom: 1px solid #1f2937;
                    }
                    .earnings-table th { color: #9ca3af; border-bottom: 2px solid #FFD700; }
                    .earnings-table td.revenue { font-weight: bold; }
                    .earnings-table td.rival, .earnings-table th.rival { color: #f87171; }
                    .earnings-table td.standard { color: #9ca3af; }
                    .earnings-table td.founder, .earnings-table th.founder {
                        color: #FFD700;
                        font-weight: bold;
                    }
                    .earnings-table td.gain, .earnings-table th.gain {
                        color: #4ade80;
                        font-weight: bold;
                    }
                    .earnings-table .footnote {
                        margin-top: 1rem;
                        text-align: center;
                        font-size: 0.8rem;
                        color: #6b7280;
                    }
                    .benefit-cards {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.5rem;
                    }
                    .benefit-card {
                        display: flex;
                        gap: 1rem;
                        padding: 1.5rem;
                        border-radius: 12px;
                        background: linear-gradient(135deg, rgba(255, 215, 0, 0.1), rgba(255, 165, 0, 0.05));
                        border: 2px solid #FFD700;
                    }
                    .benefit-card .benefit-mark {
                        flex-shrink: 0;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        background: #FFD700;
                        color: #000;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.25rem;
                    }
                    .benefit-card h4 { color: #FFD700; margin-bottom: 0.5rem; }
                    .benefit-card p { color: #d1d5db; font-size: 0.9rem; }
                    .benefit-card p strong { color: #FFD700; }
                    .opportunity-content footer { text-align: center; }
                    @media (max-width: 768px) {
                        .fee-columns, .benefit-cards { grid-template-columns: 1fr; }
                        .opportunity-content > header h2 { font-size: 2rem; }
                    }
                "#}
            </style>
            <div class="opportunity-content">
                <div class="urgency-badge">
                    <span>{"⏱"}</span>
                    <span>{ format!("Only {} Founder spots left", props.remaining_spots) }</span>
                </div>
                <header>
                    <h2>{"Earnings, compared"}</h2>
                    <p>
                        {"See how much you "}<strong>{"LOSE"}</strong>{" on the other platforms"}
                    </p>
                </header>
                <div class="fee-columns">
                    { for columns }
                </div>
                <div class="earnings-table">
                    <h3>{"The bottom line: what a Founder takes home"}</h3>
                    <table>
                        <thead>
                            <tr>
                                <th>{"Gross"}</th>
                                <th class="rival">{"Others (25%)"}</th>
                                <th>{"Standard (20%)"}</th>
                                <th class="founder">{"Founder (15%)"}</th>
                                <th class="gain">{"You GAIN"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for table_rows }
                        </tbody>
                    </table>
                    <p class="footnote">
                        {"* Not counting the lifetime 5% override on creators you refer"}
                    </p>
                </div>
                <div class="benefit-cards">
                    <div class="benefit-card">
                        <div class="benefit-mark">{"◎"}</div>
                        <div>
                            <h4>{"Lifetime 15% rate"}</h4>
                            <p>
                                {"Keep "}<strong>{"5% more"}</strong>
                                {" than standard creators. Forever. No future increases."}
                            </p>
                        </div>
                    </div>
                    <div class="benefit-card">
                        <div class="benefit-mark">{"★"}</div>
                        <div>
                            <h4>{"Lifetime passive income"}</h4>
                            <p>
                                {"Earn a "}<strong>{"5% commission"}</strong>
                                {" on everything your referred creators gross. Forever."}
                            </p>
                        </div>
                    </div>
                </div>
                <footer>
                    <button class="cta" {onclick}>
                        {"Tell me more about the passive income"}
                        <span class="cta-arrow">{"→"}</span>
                    </button>
                </footer>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_amounts_with_thousands_separators() {
        assert_eq!(usd(5_000), "$5,000");
        assert_eq!(usd(50_000), "$50,000");
        assert_eq!(usd(500), "$500");
        assert_eq!(usd(1_000_000), "$1,000,000");
    }

    #[test]
    fn founder_take_home_matches_the_published_comparison() {
        assert_eq!(net_of(10_000, 25), 7_500);
        assert_eq!(net_of(10_000, 20), 8_000);
        assert_eq!(net_of(10_000, 15), 8_500);
        assert_eq!(net_of(10_000, 15) - net_of(10_000, 25), 1_000);
    }
}
