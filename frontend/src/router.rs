use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    pages::{AttendancePage, DashboardPage, EmployeesPage, NotFoundPage},
};

pub const ROUTE_PATHS: &[&str] = &["/", "/attendance", "/dashboard"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    view! {
        <Title text="HRMS Lite"/>
        <Router>
            <Routes>
                <Route path="/" view=EmployeesPage/>
                <Route path="/attendance" view=AttendancePage/>
                <Route path="/dashboard" view=DashboardPage/>
                <Route path="/*any" view=NotFoundPage/>
            </Routes>
        </Router>
    }
}
