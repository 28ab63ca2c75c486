use contracts::domain::a001_source_type::aggregate::{
    available_source_types, SourceType, SourceTypeOption,
};
use contracts::domain::a002_branch::aggregate::Branch;
use contracts::domain::a003_source_name::aggregate::{filter_by_source_type, SourceName};
use contracts::domain::a005_daily_record::aggregate::DailyRecord;
use contracts::domain::a005_daily_record::fields::MeasurementField;
use contracts::domain::a005_daily_record::filter::RecordFilter;
use contracts::domain::a005_daily_record::form::{is_enabled, BranchResolution, DailyForm};
use contracts::system::users::{SourceNameScope, UserContext};
use leptos::logging::log;
use leptos::prelude::*;

use super::row::DailyRecordRow;
use super::submit::{submit_daily_record, SubmitOutcome};
use crate::domain::{a001_source_type, a002_branch, a003_source_name, a004_required_fields};
use crate::domain::a005_daily_record::api;
use crate::shared::request_sequence::RequestSequence;
use crate::system::users;

/// ViewModel of the daily collection sheet
#[derive(Clone, Copy)]
pub struct DailySheetViewModel {
    pub user: RwSignal<UserContext>,
    pub source_types: RwSignal<Vec<SourceType>>,
    pub branches: RwSignal<Vec<Branch>>,
    pub source_names: RwSignal<Vec<SourceName>>,
    pub required_fields: RwSignal<Vec<String>>,

    pub records: RwSignal<Vec<DailyRecord>>,
    pub filter: RwSignal<RecordFilter>,

    pub form: RwSignal<DailyForm>,
    pub is_form_open: RwSignal<bool>,

    /// Shared by the records fetch and the submission.
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,

    pub effective_branch_id: Memo<String>,
    source_name_scope: Memo<SourceNameScope>,
    source_names_seq: StoredValue<RequestSequence>,
    required_fields_seq: StoredValue<RequestSequence>,
}

impl DailySheetViewModel {
    pub fn new() -> Self {
        let user = RwSignal::new(UserContext::default());
        let source_names = RwSignal::new(Vec::<SourceName>::new());
        let form = RwSignal::new(DailyForm::default());

        let effective_branch_id = Memo::new(move |_| {
            source_names.with(|names| {
                form.with(|f| BranchResolution::effective_branch_id(f, names))
            })
        });
        let source_name_scope = Memo::new(move |_| user.with(|u| u.source_name_scope()));

        Self {
            user,
            source_types: RwSignal::new(Vec::new()),
            branches: RwSignal::new(Vec::new()),
            source_names,
            required_fields: RwSignal::new(Vec::new()),
            records: RwSignal::new(Vec::new()),
            filter: RwSignal::new(RecordFilter::default()),
            form,
            is_form_open: RwSignal::new(false),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            effective_branch_id,
            source_name_scope,
            source_names_seq: StoredValue::new(RequestSequence::default()),
            required_fields_seq: StoredValue::new(RequestSequence::default()),
        }
    }

    // ------------------------------------------------------------------
    // Derived values
    // ------------------------------------------------------------------

    pub fn is_super_admin(&self) -> bool {
        self.user.with(|u| u.is_super_admin())
    }

    pub fn available_source_types(&self) -> Vec<SourceTypeOption> {
        self.user.with(|user| {
            self.source_types.with(|types| {
                self.source_names
                    .with(|names| available_source_types(user, types, names))
            })
        })
    }

    pub fn form_source_names(&self) -> Vec<SourceName> {
        let selected_type = self.form.with(|f| f.source_type.clone());
        self.source_names
            .with(|names| filter_by_source_type(names, &selected_type))
    }

    pub fn resolution(&self) -> BranchResolution {
        self.form.with(|f| {
            self.source_names
                .with(|names| self.branches.with(|b| BranchResolution::resolve(f, names, b)))
        })
    }

    pub fn is_field_enabled(&self, field: MeasurementField) -> bool {
        self.required_fields.with(|req| is_enabled(req, field))
    }

    pub fn filtered_records(&self) -> Vec<DailyRecord> {
        self.filter
            .with(|filter| self.records.with(|records| filter.apply(records)))
    }

    pub fn filtered_rows(&self) -> Vec<DailyRecordRow> {
        let records = self.filtered_records();
        self.source_types.with(|types| {
            records
                .iter()
                .map(|r| DailyRecordRow::new(r, types))
                .collect()
        })
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Mount-time loads plus the reactive fetches that follow the user
    /// profile and the selected source name.
    pub fn init(&self) {
        self.load_user();
        self.load_reference_data();
        self.load_records();
        self.watch_source_names();
        self.watch_required_fields();
        self.watch_branch_lock();
    }

    fn load_user(&self) {
        let user = self.user;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match users::api::fetch_user_context().await {
                Ok(ctx) => {
                    log!("User context: {:?}", ctx);
                    if ctx.missing_branch() {
                        log::error!("No branch in user profile: {:?}", ctx);
                        error.set(Some("User branch information not found".to_string()));
                    }
                    user.set(ctx);
                }
                Err(e) => {
                    log::error!("Failed to fetch user info: {}", e);
                    error.set(Some("Failed to fetch user information".to_string()));
                }
            }
        });
    }

    fn load_reference_data(&self) {
        let source_types = self.source_types;
        wasm_bindgen_futures::spawn_local(async move {
            match a001_source_type::api::fetch_source_types().await {
                Ok(list) => source_types.set(list),
                Err(e) => log::error!("Failed to fetch source types: {}", e),
            }
        });

        let branches = self.branches;
        wasm_bindgen_futures::spawn_local(async move {
            match a002_branch::api::fetch_branches().await {
                Ok(list) => branches.set(list),
                Err(e) => log::error!("Failed to fetch branches: {}", e),
            }
        });
    }

    /// Fetch the whole records list, replacing the current one.
    pub fn load_records(&self) {
        wasm_bindgen_futures::spawn_local(self.refresh_records());
    }

    async fn refresh_records(self) {
        self.loading.set(true);
        self.error.set(None);
        match api::fetch_records().await {
            Ok(list) => {
                log!("Fetched {} daily records", list.len());
                self.records.set(list);
            }
            Err(e) => {
                log::error!("Failed to fetch records: {}", e);
                self.error.set(Some("Failed to fetch records".to_string()));
            }
        }
        self.loading.set(false);
    }

    fn watch_source_names(&self) {
        let scope = self.source_name_scope;
        let source_names = self.source_names;
        let seq = self.source_names_seq;

        Effect::new(move |_| {
            let scope = scope.get();
            let mut ticket = 0;
            seq.update_value(|s| ticket = s.next());

            if scope == SourceNameScope::Unresolved {
                source_names.set(Vec::new());
                return;
            }

            wasm_bindgen_futures::spawn_local(async move {
                let result = a003_source_name::api::fetch_source_names(&scope).await;
                if !seq.with_value(|s| s.is_latest(ticket)) {
                    log!("Dropped stale source names response for {:?}", scope);
                    return;
                }
                match result {
                    Ok(list) => source_names.set(list),
                    Err(e) => log::error!("Failed to fetch source names: {}", e),
                }
            });
        });
    }

    fn watch_required_fields(&self) {
        let effective_branch_id = self.effective_branch_id;
        let required_fields = self.required_fields;
        let form = self.form;
        let seq = self.required_fields_seq;

        Effect::new(move |_| {
            let branch_id = effective_branch_id.get();
            let mut ticket = 0;
            seq.update_value(|s| ticket = s.next());

            if branch_id.is_empty() {
                required_fields.set(Vec::new());
                form.update(|f| f.retain_enabled(&[]));
                return;
            }

            wasm_bindgen_futures::spawn_local(async move {
                let result =
                    a004_required_fields::api::fetch_daily_required_fields(&branch_id).await;
                if !seq.with_value(|s| s.is_latest(ticket)) {
                    log!("Dropped stale required fields for branch {}", branch_id);
                    return;
                }
                match result {
                    Ok(fields) => {
                        log!("Required fields for branch {}: {:?}", branch_id, fields);
                        form.update(|f| f.retain_enabled(&fields));
                        required_fields.set(fields);
                    }
                    Err(e) => log::error!("Failed to fetch required fields: {}", e),
                }
            });
        });
    }

    /// Branch users always filter the table by their own branch.
    fn watch_branch_lock(&self) {
        let user = self.user;
        let filter = self.filter;
        Effect::new(move |_| {
            if let Some(branch_id) = user.with(|u| u.locked_branch_filter()) {
                filter.update(|f| f.branch = branch_id);
            }
        });
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    pub fn set_filter_branch(&self, branch_id: String) {
        if !self.user.with_untracked(|u| u.is_super_admin()) {
            return;
        }
        self.filter.update(|f| f.branch = branch_id);
    }

    pub fn open_form(&self) {
        self.form.set(DailyForm::default());
        self.error.set(None);
        self.is_form_open.set(true);
    }

    pub fn close_form(&self) {
        self.is_form_open.set(false);
        self.form.set(DailyForm::default());
        self.required_fields.set(Vec::new());
    }

    pub fn clear_form(&self) {
        self.form.set(DailyForm::default());
    }

    pub fn set_measurement(&self, field: MeasurementField, value: String) {
        if !self.required_fields.with_untracked(|req| is_enabled(req, field)) {
            return;
        }
        self.form.update(|f| f.set_measurement(field, value));
    }

    /// Validate, post, then reload the table.
    ///
    /// Validation failures never reach the network. A failed post leaves
    /// the form open with the user's input intact.
    pub fn submit_command(&self) {
        self.loading.set(true);
        self.error.set(None);

        let form = self.form.get_untracked();
        let resolution = self.resolution_untracked();
        let required = self.required_fields.get_untracked();

        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = submit_daily_record(
                &form,
                &required,
                &resolution,
                |payload| async move {
                    log!("Submitting daily record: {:?}", payload);
                    api::create_record(&payload).await
                },
                move || async move {
                    vm.is_form_open.set(false);
                    vm.form.set(DailyForm::default());
                    vm.refresh_records().await;
                },
            )
            .await;

            if let SubmitOutcome::PostFailed(e) = &outcome {
                log::error!("Submit error: {}", e);
            }
            if let Some(message) = outcome.error_message() {
                vm.error.set(Some(message));
                vm.loading.set(false);
            }
        });
    }

    fn resolution_untracked(&self) -> BranchResolution {
        untrack(|| self.resolution())
    }
}

impl Default for DailySheetViewModel {
    fn default() -> Self {
        Self::new()
    }
}
