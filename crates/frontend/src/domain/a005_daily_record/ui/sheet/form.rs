use super::view_model::DailySheetViewModel;
use crate::shared::components::date_input::DateInput;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a005_daily_record::fields::MeasurementField;
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

/// "Add Daily Data" modal.
#[component]
pub fn DailyRecordForm(vm: DailySheetViewModel) -> impl IntoView {
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_command();
    };

    view! {
        <Modal title="Add Daily Data".to_string() on_close=Callback::new(move |_| vm.close_form())>
            <form class="daily-form" on:submit=on_submit>
                {move || vm.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="daily-form__grid">
                    <div class="form-group">
                        <label for="daily-date">"Date *"</label>
                        <DateInput
                            id="daily-date"
                            required=true
                            value=Signal::derive(move || vm.form.with(|f| f.date.clone()))
                            on_change=move |v| vm.form.update(|f| f.date = v)
                        />
                    </div>

                    <div class="form-group">
                        <label for="daily-source-type">"Source Type *"</label>
                        <select
                            id="daily-source-type"
                            class="form-input"
                            prop:value=move || vm.form.with(|f| f.source_type.clone())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.source_type = value);
                            }
                        >
                            <option value="">"Select source type"</option>
                            {move || {
                                vm.available_source_types()
                                    .into_iter()
                                    .map(|st| view! { <option value=st.id>{st.label}</option> })
                                    .collect_view()
                            }}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="daily-source-name">"Source Name *"</label>
                        <select
                            id="daily-source-name"
                            class="form-input"
                            prop:value=move || vm.form.with(|f| f.source_name.clone())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.source_name = value);
                            }
                        >
                            <option value="">"Select source name"</option>
                            {move || {
                                vm.form_source_names()
                                    .into_iter()
                                    .map(|sn| view! { <option value=sn.id>{sn.source_name}</option> })
                                    .collect_view()
                            }}
                        </select>
                    </div>

                    {MeasurementField::ALL
                        .into_iter()
                        .map(|field| view! { <MeasurementInput vm=vm field=field /> })
                        .collect_view()}
                </div>

                <div class="modal-footer">
                    // Only Submit may submit the form.
                    <Button
                        appearance=ButtonAppearance::Secondary
                        button_type=ButtonType::Button
                        on_click=move |_| vm.clear_form()
                    >
                        {icon("eraser")}
                        " Clear all"
                    </Button>

                    // Review workflow is not wired to the backend yet.
                    <Button
                        appearance=ButtonAppearance::Secondary
                        button_type=ButtonType::Button
                        disabled=true
                    >
                        "Approve"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        button_type=ButtonType::Button
                        disabled=true
                    >
                        "Decline"
                    </Button>

                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || vm.loading.get()
                    >
                        {icon("save")}
                        {move || if vm.loading.get() { " Submitting..." } else { " Submit" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}

/// One numeric input; editable only when the selected branch requires it.
#[component]
fn MeasurementInput(vm: DailySheetViewModel, field: MeasurementField) -> impl IntoView {
    let enabled = Memo::new(move |_| vm.is_field_enabled(field));
    let input_id = format!("daily-{}", field.key());

    view! {
        <div
            class="form-group"
            class:form-group--disabled=move || !enabled.get()
        >
            <label for=input_id.clone()>
                {field.label()}
                {move || enabled.get().then_some(" *")}
            </label>
            <input
                type="text"
                inputmode="decimal"
                id=input_id
                class="form-input"
                disabled=move || !enabled.get()
                prop:value=move || vm.form.with(|f| f.measurement(field).to_string())
                on:input=move |ev| vm.set_measurement(field, event_target_value(&ev))
            />
        </div>
    }
}
