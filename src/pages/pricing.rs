//! Static pricing page, the upgrade target of the out-of-views card.

use leptos::prelude::*;

struct Plan {
    name: &'static str,
    price: &'static str,
    perks: &'static [&'static str],
    highlighted: bool,
}

const PLANS: [Plan; 3] = [
    Plan {
        name: "Free",
        price: "$0",
        perks: &["5 roadmap views per month", "Daily challenge", "Community roadmaps"],
        highlighted: false,
    },
    Plan {
        name: "Learner",
        price: "$7/mo",
        perks: &[
            "Unlimited roadmap views",
            "10 AI roadmap generations per month",
            "Custom roadmap builder",
        ],
        highlighted: true,
    },
    Plan {
        name: "Mentor",
        price: "$19/mo",
        perks: &[
            "Everything in Learner",
            "Unlimited AI generations",
            "Publish verified roadmaps",
        ],
        highlighted: false,
    },
];

#[component]
pub fn PricingPage() -> impl IntoView {
    view! {
        <div class="pricing-page">
            <h1>"Pricing"</h1>
            <div class="pricing-page__plans">
                {PLANS
                    .iter()
                    .map(|plan| {
                        view! {
                            <div class="plan-card" class:plan-card--highlighted=plan.highlighted>
                                <h2 class="plan-card__name">{plan.name}</h2>
                                <p class="plan-card__price">{plan.price}</p>
                                <ul class="plan-card__perks">
                                    {plan
                                        .perks
                                        .iter()
                                        .map(|perk| view! { <li>{*perk}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                                <a class="btn btn--primary" href="/register">
                                    "Subscribe"
                                </a>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <a class="pricing-page__back" href="/">
                "Back to Qriosity"
            </a>
        </div>
    }
}
