//! PageFrame: standard root wrapper for a page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`: `"{entity}--{category}"`, e.g. `"a005_daily_record--list"`
//!   - `data-page-category`: see [`PageCategory`]
//!
//! The `--` separator keeps the entity searchable: copy the id from the DOM
//! inspector and it points at `domain/a005_daily_record/`.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCategory {
    /// Table with filters.
    List,
    /// Form for a single record.
    Detail,
}

impl PageCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            PageCategory::List => "list",
            PageCategory::Detail => "detail",
        }
    }

    fn base_class(self) -> &'static str {
        match self {
            PageCategory::List => "page",
            PageCategory::Detail => "page page--detail",
        }
    }
}

/// Root wrapper that sets standard metadata on every page.
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    page_id: &'static str,
    category: PageCategory,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        category.base_class().to_string()
    } else {
        format!("{} {class}", category.base_class())
    };

    view! {
        <div
            id=page_id
            class=full_class
            data-page-category=category.as_str()
        >
            {children()}
        </div>
    }
}
