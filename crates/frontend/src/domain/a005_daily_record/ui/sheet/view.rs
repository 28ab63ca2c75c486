use super::form::DailyRecordForm;
use super::row::{table_headers, COLUMN_COUNT};
use super::view_model::DailySheetViewModel;
use crate::shared::components::date_input::DateInput;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageCategory, PageFrame};
use leptos::prelude::*;
use thaw::*;

const TABLE_ID: &str = "a005-daily-record-table";

#[component]
pub fn DailyCollectionSheet() -> impl IntoView {
    let vm = DailySheetViewModel::new();
    vm.init();

    let active_filters_count = Signal::derive(move || vm.filter.with(|f| f.active_count()));
    let rows = Memo::new(move |_| vm.filtered_rows());

    view! {
        <PageFrame page_id="a005_daily_record--list" category=PageCategory::List>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Daily Collection Sheet"</h1>
                    <span class="badge badge--primary">
                        {move || format!("{} / {}", rows.with(|r| r.len()), vm.records.with(|r| r.len()))}
                    </span>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            {icon("filter")}
                            <span class="filter-panel__title">"Filters"</span>
                            {move || {
                                let count = active_filters_count.get();
                                (count > 0).then(|| view! { <span class="filter-panel__badge">{count}</span> })
                            }}
                        </div>
                    </div>

                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"From"</Label>
                                <DateInput
                                    value=Signal::derive(move || vm.filter.with(|f| f.from_date.clone()))
                                    on_change=move |v| vm.filter.update(|f| f.from_date = v)
                                />
                            </Flex>

                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"To"</Label>
                                <DateInput
                                    value=Signal::derive(move || vm.filter.with(|f| f.to_date.clone()))
                                    on_change=move |v| vm.filter.update(|f| f.to_date = v)
                                />
                            </Flex>

                            <select
                                class="filter-panel__select"
                                prop:value=move || vm.filter.with(|f| f.source_type.clone())
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    vm.filter.update(|f| f.source_type = value);
                                }
                            >
                                <option value="">"Source Type"</option>
                                {move || {
                                    vm.available_source_types()
                                        .into_iter()
                                        .map(|st| view! { <option value=st.id>{st.label}</option> })
                                        .collect_view()
                                }}
                            </select>

                            <select
                                class="filter-panel__select"
                                prop:value=move || vm.filter.with(|f| f.branch.clone())
                                disabled=move || !vm.is_super_admin()
                                on:change=move |ev| vm.set_filter_branch(event_target_value(&ev))
                            >
                                <option value="">"Branch"</option>
                                {move || {
                                    vm.branches
                                        .get()
                                        .into_iter()
                                        .map(|b| view! { <option value=b.id>{b.branch_name}</option> })
                                        .collect_view()
                                }}
                            </select>

                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| vm.open_form()
                            >
                                {icon("plus")}
                                " Add"
                            </Button>
                        </Flex>
                    </div>
                </div>

                {move || vm.loading.get().then(|| view! {
                    <div class="alert alert--info">"Loading..."</div>
                })}

                {move || vm.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper" style="max-height: 500px; overflow: auto;">
                    <Table attr:id=TABLE_ID attr:style="width: 100%; min-width: 1800px;">
                        <TableHeader>
                            <TableRow>
                                {table_headers()
                                    .into_iter()
                                    .map(|header| view! {
                                        <TableHeaderCell resizable=false min_width=110.0>
                                            {header}
                                        </TableHeaderCell>
                                    })
                                    .collect_view()}
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            {move || {
                                let rows = rows.get();
                                if rows.is_empty() && !vm.loading.get() {
                                    return view! {
                                        <TableRow>
                                            <TableCell attr:colspan=COLUMN_COUNT.to_string()>
                                                <TableCellLayout>"No records found."</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                    .into_any();
                                }

                                rows.into_iter()
                                    .map(|row| view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{row.date}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{row.encoded_at}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{row.source_type}</TableCellLayout>
                                            </TableCell>
                                            {row.measurements
                                                .into_iter()
                                                .map(|value| view! {
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <span style="font-variant-numeric: tabular-nums;">{value}</span>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                })
                                                .collect_view()}
                                        </TableRow>
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </TableBody>
                    </Table>
                </div>
            </div>

            <Show when=move || vm.is_form_open.get()>
                <DailyRecordForm vm=vm />
            </Show>
        </PageFrame>
    }
}
