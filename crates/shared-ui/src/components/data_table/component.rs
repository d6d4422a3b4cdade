use dioxus::prelude::*;

/// Scrollable table with a header row built from `columns`.
///
/// When `empty` is true the body is replaced by a single row spanning every
/// column that shows `empty_message`.
#[component]
pub fn DataTable(
    columns: Vec<String>,
    #[props(default = false)] empty: bool,
    #[props(default = "No records found.".to_string())] empty_message: String,
    children: Element,
) -> Element {
    let span = columns.len().max(1);
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                thead {
                    tr {
                        for col in columns.iter() {
                            th { key: "{col}", "{col}" }
                        }
                    }
                }
                tbody {
                    if empty {
                        tr { class: "data-table-empty",
                            td { colspan: "{span}", "{empty_message}" }
                        }
                    } else {
                        {children}
                    }
                }
            }
        }
    }
}

#[component]
pub fn DataTableRow(children: Element) -> Element {
    rsx! {
        tr { class: "data-table-row", {children} }
    }
}

#[component]
pub fn DataTableCell(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        td { class: class, {children} }
    }
}
