use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WelcomeProps {
    pub on_request_access: Callback<()>,
}

#[function_component(Welcome)]
pub fn welcome(props: &WelcomeProps) -> Html {
    let onclick = {
        let on_request_access = props.on_request_access.clone();
        Callback::from(move |_: MouseEvent| on_request_access.emit(()))
    };

    html! {
        <div class="screen">
            <style>
                {r#"
                    .welcome-content {
                        max-width: 640px;
                        text-align: center;
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                        align-items: center;
                    }
                    .welcome-mark {
                        font-size: 4rem;
                        line-height: 1;
                    }
                    .welcome-content h1 {
                        font-size: 3rem;
                        color: #FFD700;
                    }
                    .welcome-content .tagline {
                        font-size: 1.35rem;
                        color: #d1d5db;
                    }
                    @media (max-width: 768px) {
                        .welcome-content h1 { font-size: 2.25rem; }
                    }
                "#}
            </style>
            <div class="welcome-content">
                <div class="welcome-mark">{"♛"}</div>
                <h1>{"Velora: Where Exclusive Happens."}</h1>
                <p class="tagline">
                    {"A safe home for real connections and total creative freedom. \
                      Tell us who you are to unlock your access."}
                </p>
                <button class="cta" {onclick}>
                    {"REQUEST ACCESS"}
                    <span class="cta-arrow">{"→"}</span>
                </button>
            </div>
        </div>
    }
}
