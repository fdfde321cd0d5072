use crate::{
    components::cards::{CardTone, StatCard},
    pages::dashboard::utils::{format_rate, DashboardStats},
};
use leptos::*;

#[component]
pub fn SummarySection(#[prop(into)] stats: Signal<DashboardStats>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
            {move || {
                let stats = stats.get();
                view! {
                    <StatCard label="Total Employees" value=stats.total_employees.to_string() />
                    <StatCard label="Departments" value=stats.total_departments.to_string() />
                    <StatCard label="Attendance Records" value=stats.total_attendance_records.to_string() />
                    <StatCard label="Attendance Rate" value=format_rate(stats.attendance_rate) tone=CardTone::Info />
                    <StatCard label="Present Today" value=stats.present_today.to_string() tone=CardTone::Success />
                    <StatCard label="Absent Today" value=stats.absent_today.to_string() tone=CardTone::Danger />
                }
            }}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_every_statistic() {
        let html = render_to_string(move || {
            let stats = DashboardStats {
                total_employees: 2,
                total_departments: 1,
                total_attendance_records: 2,
                present_today: 1,
                absent_today: 1,
                attendance_rate: 50.0,
            };
            view! { <SummarySection stats=Signal::derive(move || stats.clone()) /> }
        });
        for label in [
            "Total Employees",
            "Departments",
            "Attendance Records",
            "Attendance Rate",
            "Present Today",
            "Absent Today",
        ] {
            assert!(html.contains(label), "missing {}", label);
        }
        assert!(html.contains("50.0%"));
    }
}
