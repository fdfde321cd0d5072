use crate::{
    api::ApiClient,
    pages::attendance::repository::RosterSnapshot,
    pages::dashboard::{
        repository::DashboardRepository,
        utils::{
            compute_stats, department_breakdown, recent_attendance, sort_breakdown,
            DashboardStats, DepartmentCount, DepartmentSortKey, RecentAttendance,
        },
    },
    state::page::{use_page_state, PageHandle},
    utils::{
        table::{next_sort, SortState},
        time::today,
    },
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub page: PageHandle<RosterSnapshot>,
    pub stats: Memo<DashboardStats>,
    pub departments: Memo<Vec<DepartmentCount>>,
    pub department_sort: RwSignal<Option<SortState<DepartmentSortKey>>>,
    pub recent: Memo<Vec<RecentAttendance>>,
    repository: StoredValue<DashboardRepository>,
}

impl DashboardViewModel {
    pub fn refresh(&self) {
        let repository = self.repository.get_value();
        self.page
            .load(move || async move { repository.fetch_snapshot().await });
    }

    pub fn toggle_department_sort(&self) {
        self.department_sort
            .update(|sort| *sort = next_sort(*sort, DepartmentSortKey::Count));
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = DashboardRepository::new_with_client(Rc::new(api));
    let page = use_page_state::<RosterSnapshot>();

    let stats = create_memo(move |_| {
        page.state
            .with(|s| compute_stats(&s.data.employees, &s.data.attendance, today()))
    });
    let department_sort = create_rw_signal(None::<SortState<DepartmentSortKey>>);
    let departments = create_memo(move |_| {
        let breakdown = page.state.with(|s| department_breakdown(&s.data.employees));
        sort_breakdown(breakdown, department_sort.get())
    });
    let recent = create_memo(move |_| {
        page.state
            .with(|s| recent_attendance(&s.data.employees, &s.data.attendance))
    });

    let vm = DashboardViewModel {
        page,
        stats,
        departments,
        department_sort,
        recent,
        repository: store_value(repository),
    };
    create_effect(move |_| vm.refresh());
    vm
}
