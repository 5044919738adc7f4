use contracts::system::access::PageKey;
use contracts::system::routing::{resolve_path, AppRoute, GuardOutcome, LOGIN_PATH};
use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::dashboards::d400_overview::ui::OverviewDashboard;
use crate::domain::a001_patient::ui::HealthCenterPage;
use crate::domain::a002_sanitation::ui::SanitationPage;
use crate::domain::a003_immunization::ui::ImmunizationPage;
use crate::domain::a004_wastewater::ui::WastewaterPage;
use crate::domain::a005_surveillance::ui::SurveillancePage;
use crate::domain::a006_resident::ui::{
    FamilyHealthPage, FileRequestPage, MyComplaintsPage, MyPermitsPage, MyQrCodePage,
    ResidentHomePage,
};
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::AccessRestricted;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::settings::ui::SettingsPage;
use crate::system::users::ui::list::UserList;

fn page_view(page: PageKey) -> AnyView {
    match page {
        PageKey::Dashboard => view! { <OverviewDashboard /> }.into_any(),
        PageKey::HealthCenter => view! { <HealthCenterPage /> }.into_any(),
        PageKey::Sanitation => view! { <SanitationPage /> }.into_any(),
        PageKey::Immunization => view! { <ImmunizationPage /> }.into_any(),
        PageKey::Wastewater => view! { <WastewaterPage /> }.into_any(),
        PageKey::Surveillance => view! { <SurveillancePage /> }.into_any(),
        PageKey::Users => view! { <UserList /> }.into_any(),
        PageKey::Settings => view! { <SettingsPage /> }.into_any(),
        PageKey::ResidentHome => view! { <ResidentHomePage /> }.into_any(),
        PageKey::ResidentHealth => view! { <FamilyHealthPage /> }.into_any(),
        PageKey::ResidentQrCode => view! { <MyQrCodePage /> }.into_any(),
        PageKey::ResidentPermits => view! { <MyPermitsPage /> }.into_any(),
        PageKey::ResidentComplaints => view! { <MyComplaintsPage /> }.into_any(),
        PageKey::ResidentRequest => view! { <FileRequestPage /> }.into_any(),
    }
}

/// Guard decision for the current location, recomputed when either the
/// path or the session changes.
fn use_guard_outcome() -> Memo<GuardOutcome> {
    let session = use_session();
    let location = use_location();
    Memo::new(move |_| resolve_path(&session.state(), &location.pathname.get()))
}

/// Content area of the signed-in shell.
#[component]
fn RoutedPage() -> impl IntoView {
    let session = use_session();
    let outcome = use_guard_outcome();

    move || match outcome.get() {
        GuardOutcome::Render(AppRoute::Page(page)) => page_view(page),
        GuardOutcome::Render(AppRoute::Login | AppRoute::Root) => {
            let landing = session.role().map(|r| r.landing_path()).unwrap_or(LOGIN_PATH);
            view! { <Redirect path=landing /> }.into_any()
        }
        GuardOutcome::Redirect(path) => view! { <Redirect path=path /> }.into_any(),
        GuardOutcome::AccessRestricted(page) => view! { <AccessRestricted page=page /> }.into_any(),
        GuardOutcome::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <RoutedPage /> }.into_any()
        />
    }
}

/// Routes reachable without a session: the login page, redirects to it and
/// the not-found page.
#[component]
fn PublicRoutes() -> impl IntoView {
    let outcome = use_guard_outcome();

    move || match outcome.get() {
        GuardOutcome::Render(AppRoute::Login) => view! { <LoginPage /> }.into_any(),
        GuardOutcome::NotFound => view! { <NotFoundPage /> }.into_any(),
        GuardOutcome::Redirect(path) => view! { <Redirect path=path /> }.into_any(),
        GuardOutcome::Render(AppRoute::Root | AppRoute::Page(_))
        | GuardOutcome::AccessRestricted(_) => view! { <Redirect path=LOGIN_PATH /> }.into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <PublicRoutes /> }
        >
            <MainLayout />
        </Show>
    }
}
