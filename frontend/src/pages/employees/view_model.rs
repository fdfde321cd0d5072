use super::{
    repository::EmployeesRepository,
    utils::{sort_employees, EmployeeFormState, EmployeeSortKey},
};
use crate::{
    api::{ApiClient, ApiError, CreateEmployee, Employee},
    state::page::{use_page_state, PageHandle},
    utils::{
        messages::{clear_later, MessageState},
        table::{next_sort, Pagination, SortState},
    },
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub page: PageHandle<Vec<Employee>>,
    pub form: RwSignal<EmployeeFormState>,
    pub form_messages: RwSignal<MessageState>,
    /// Last rejected add; 422 bodies list every invalid field.
    pub add_error: RwSignal<Option<ApiError>>,
    pub list_messages: RwSignal<MessageState>,
    pub sort: RwSignal<Option<SortState<EmployeeSortKey>>>,
    pub pagination: RwSignal<Pagination>,
    pub rows: Memo<Vec<Employee>>,
    /// Business key awaiting delete confirmation.
    pub pending_delete: RwSignal<Option<String>>,
    pub add_action: Action<CreateEmployee, Result<Employee, ApiError>>,
    pub delete_action: Action<String, Result<(), ApiError>>,
    repository: StoredValue<EmployeesRepository>,
}

impl EmployeesViewModel {
    pub fn refresh(&self) {
        let repository = self.repository.get_value();
        self.page
            .load(move || async move { repository.fetch_employees().await });
    }

    pub fn submit(&self) {
        match self.form.get_untracked().to_request() {
            Ok(payload) => {
                self.add_error.set(None);
                self.add_action.dispatch(payload);
            }
            Err(message) => {
                self.form_messages.update(|m| m.set_error(message));
                clear_later(self.form_messages);
            }
        }
    }

    pub fn toggle_sort(&self, key: EmployeeSortKey) {
        self.sort.update(|sort| *sort = next_sort(*sort, key));
    }

    /// Success resets the form and refetches the list; failure keeps the
    /// form as typed.
    pub fn apply_add_result(&self, result: Result<Employee, ApiError>) {
        match result {
            Ok(_) => {
                self.form_messages
                    .update(|m| m.set_success("Employee added successfully!"));
                self.form.update(EmployeeFormState::reset);
                clear_later(self.form_messages);
                self.refresh();
            }
            Err(err) => {
                self.form_messages.update(MessageState::clear);
                self.add_error.set(Some(err));
            }
        }
    }

    pub fn apply_delete_result(&self, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                self.list_messages
                    .update(|m| m.set_success("Employee deleted successfully!"));
                self.refresh();
            }
            Err(err) => self.list_messages.update(|m| m.set_error(err.error)),
        }
        clear_later(self.list_messages);
    }

    pub fn confirm_delete(&self) {
        if let Some(employee_id) = self.pending_delete.get_untracked() {
            self.pending_delete.set(None);
            self.delete_action.dispatch(employee_id);
        }
    }
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = EmployeesRepository::new_with_client(Rc::new(api));

    let page = use_page_state::<Vec<Employee>>();
    let form = create_rw_signal(EmployeeFormState::default());
    let form_messages = create_rw_signal(MessageState::default());
    let add_error = create_rw_signal(None::<ApiError>);
    let list_messages = create_rw_signal(MessageState::default());
    let sort = create_rw_signal(None::<SortState<EmployeeSortKey>>);
    let pagination = create_rw_signal(Pagination::default());
    let pending_delete = create_rw_signal(None::<String>);

    let rows = create_memo(move |_| {
        let sort = sort.get();
        page.state.with(|state| sort_employees(&state.data, sort))
    });

    let repo_for_add = repository.clone();
    let add_action = create_action(move |payload: &CreateEmployee| {
        let repo = repo_for_add.clone();
        let payload = payload.clone();
        async move { repo.add_employee(payload).await }
    });

    let repo_for_delete = repository.clone();
    let delete_action = create_action(move |employee_id: &String| {
        let repo = repo_for_delete.clone();
        let employee_id = employee_id.clone();
        async move { repo.delete_employee(employee_id).await }
    });

    let vm = EmployeesViewModel {
        page,
        form,
        form_messages,
        add_error,
        list_messages,
        sort,
        pagination,
        rows,
        pending_delete,
        add_action,
        delete_action,
        repository: store_value(repository),
    };

    create_effect(move |_| vm.refresh());

    create_effect(move |_| {
        if let Some(result) = add_action.value().get() {
            vm.apply_add_result(result);
        }
    });

    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            vm.apply_delete_result(result);
        }
    });

    vm
}
