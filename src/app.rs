//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast::ToastHost;
use crate::pages::{
    confirm_email::ConfirmEmailPage, course_creator::CourseCreatorPage, landing::LandingPage,
    login::LoginPage, my_learning::MyLearningPage, pricing::PricingPage, profile::ProfilePage,
    register::RegisterPage, roadmap_builder::RoadmapBuilderPage,
    roadmap_detail::RoadmapDetailPage, roadmaps::RoadmapFeedPage,
};
use crate::state::session::SessionState;
use crate::state::ui::UiState;

/// Root application component.
///
/// Provides the session and UI contexts and sets up client-side routing.
/// The session context is computed once here from the token store; after
/// that, only the login/logout transitions write it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::checkpoint());
    let ui = RwSignal::new(UiState::default());

    provide_context(session);
    provide_context(ui);

    view! {
        <Stylesheet id="qriosity" href="/assets/qriosity.css"/>
        <Title text="Qriosity"/>

        <ToastHost/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("confirm-email") view=ConfirmEmailPage/>
                <Route path=StaticSegment("pricing") view=PricingPage/>
                <Route
                    path=(StaticSegment("home"), StaticSegment("my-learning"))
                    view=MyLearningPage
                />
                <Route path=(StaticSegment("home"), StaticSegment("roadmaps")) view=RoadmapFeedPage/>
                <Route
                    path=(StaticSegment("home"), StaticSegment("roadmap"), ParamSegment("id"))
                    view=RoadmapDetailPage
                />
                <Route path=(StaticSegment("home"), StaticSegment("builder")) view=RoadmapBuilderPage/>
                <Route
                    path=(StaticSegment("home"), StaticSegment("courses"), StaticSegment("new"))
                    view=CourseCreatorPage
                />
                <Route path=(StaticSegment("home"), StaticSegment("profile")) view=ProfilePage/>
            </Routes>
        </Router>
    }
}
