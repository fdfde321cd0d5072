use super::{
    repository::{AttendanceRepository, RosterSnapshot},
    utils::{build_rows, AttendanceFormState, AttendanceRow, AttendanceSortKey},
};
use crate::{
    api::{ApiClient, ApiError, AttendanceRecord, AttendanceStatus, CreateAttendance},
    state::page::{use_page_state, PageHandle},
    utils::{
        messages::{clear_later, MessageState},
        table::{next_sort, Pagination, SortState},
        time::today,
    },
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct AttendanceViewModel {
    pub page: PageHandle<RosterSnapshot>,
    pub form: RwSignal<AttendanceFormState>,
    pub messages: RwSignal<MessageState>,
    pub employee_filter: RwSignal<Option<String>>,
    pub status_filter: RwSignal<Vec<AttendanceStatus>>,
    pub sort: RwSignal<Option<SortState<AttendanceSortKey>>>,
    pub pagination: RwSignal<Pagination>,
    /// Post-filter, post-sort rows; pagination slices these.
    pub rows: Memo<Vec<AttendanceRow>>,
    /// Records left after the employee filter only.
    pub filtered_count: Memo<usize>,
    pub mark_action: Action<CreateAttendance, Result<AttendanceRecord, ApiError>>,
    repository: StoredValue<AttendanceRepository>,
}

impl AttendanceViewModel {
    pub fn refresh(&self) {
        let repository = self.repository.get_value();
        self.page.load(move || async move { repository.fetch_roster().await });
    }

    pub fn toggle_sort(&self, key: AttendanceSortKey) {
        self.sort.update(|sort| *sort = next_sort(*sort, key));
    }

    pub fn set_employee_filter(&self, employee_id: Option<String>) {
        self.employee_filter
            .set(employee_id.filter(|id| !id.trim().is_empty()));
        self.pagination.update(|p| p.page = 1);
    }

    /// Success resets the form and reruns the whole roster fetch.
    pub fn apply_mark_result(&self, result: Result<AttendanceRecord, ApiError>) {
        match result {
            Ok(_) => {
                self.messages
                    .update(|m| m.set_success("Attendance marked successfully!"));
                self.form.update(|f| f.reset(today()));
                self.refresh();
            }
            Err(err) => self.messages.update(|m| m.set_error(err.error)),
        }
        clear_later(self.messages);
    }

    pub fn submit(&self) {
        match self.form.get_untracked().to_request() {
            Ok(payload) => self.mark_action.dispatch(payload),
            Err(message) => {
                self.messages.update(|m| m.set_error(message));
                clear_later(self.messages);
            }
        }
    }
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AttendanceRepository::new_with_client(Rc::new(api));

    let page = use_page_state::<RosterSnapshot>();
    let form = create_rw_signal(AttendanceFormState::new(today()));
    let messages = create_rw_signal(MessageState::default());
    let employee_filter = create_rw_signal(None::<String>);
    let status_filter = create_rw_signal(Vec::<AttendanceStatus>::new());
    let sort = create_rw_signal(None::<SortState<AttendanceSortKey>>);
    let pagination = create_rw_signal(Pagination::default());

    let rows = create_memo(move |_| {
        let filter = employee_filter.get();
        let statuses = status_filter.get();
        page.state.with(|state| {
            build_rows(&state.data, filter.as_deref(), &statuses, sort.get())
        })
    });
    let filtered_count = create_memo(move |_| {
        let filter = employee_filter.get();
        page.state.with(|state| {
            super::utils::filter_by_employee(&state.data.attendance, filter.as_deref()).len()
        })
    });

    let repo_for_mark = repository.clone();
    let mark_action = create_action(move |payload: &CreateAttendance| {
        let repo = repo_for_mark.clone();
        let payload = payload.clone();
        async move { repo.mark_attendance(payload).await }
    });

    let vm = AttendanceViewModel {
        page,
        form,
        messages,
        employee_filter,
        status_filter,
        sort,
        pagination,
        rows,
        filtered_count,
        mark_action,
        repository: store_value(repository),
    };

    create_effect(move |_| vm.refresh());

    create_effect(move |_| {
        if let Some(result) = mark_action.value().get() {
            vm.apply_mark_result(result);
        }
    });

    vm
}
