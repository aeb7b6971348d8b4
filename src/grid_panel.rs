use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::board::{cell_label, Cell, GridLayer, LAYER_COUNT};
use crate::types::CellRef;

#[derive(Properties, PartialEq)]
pub struct GridPanelProps {
    pub layer: GridLayer,
    pub layer_index: usize,
    /// Border color distinguishing the active layer
    pub border_color: String,
    pub show_coords: bool,
    pub selected: Option<CellRef>,
    /// Validation message from the last rejected resize, if any
    pub resize_error: Option<String>,
    pub on_select: Callback<CellRef>,
    pub on_cell_input: Callback<(CellRef, String)>,
    /// (cell, shift held): clear the cell, or its 3x3 neighborhood with shift
    pub on_clear_area: Callback<(CellRef, bool)>,
    /// Raw form input; validation happens in the controller
    pub on_resize: Callback<(String, String)>,
}

fn render_cell(props: &GridPanelProps, at: CellRef, cell: &Cell) -> Html {
    let coord = if props.show_coords {
        html! {
            <span class="absolute -top-2 left-0 text-[9px] text-gray-500 pointer-events-none">
                {cell_label(at)}
            </span>
        }
    } else {
        html! {}
    };

    if cell.deleted {
        // Non-focusable placeholder; still selectable so the deleted flag
        // can be toggled back via the keyboard shortcut
        let onmousedown = {
            let on_select = props.on_select.clone();
            Callback::from(move |_: MouseEvent| on_select.emit(at))
        };
        return html! {
            <div key={format!("{}-{}", at.row, at.col)} class="relative">
                {coord}
                <div
                    data-testid="deleted-cell"
                    class="w-10 h-10 bg-gray-200 border border-dashed border-gray-400"
                    {onmousedown}
                />
            </div>
        };
    }

    let onfocus = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: FocusEvent| on_select.emit(at))
    };
    let onmousedown = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(at))
    };
    let oninput = {
        let on_cell_input = props.on_cell_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_cell_input.emit((at, input.value()));
        })
    };
    let oncontextmenu = {
        let on_clear_area = props.on_clear_area.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_clear_area.emit((at, e.shift_key()));
        })
    };

    let is_selected = props.selected == Some(at);

    html! {
        <div key={format!("{}-{}", at.row, at.col)} class="relative">
            {coord}
            <input
                class={classes!(
                    "w-10", "h-10", "text-center", "text-sm", "border", "rounded-sm",
                    if is_selected { "ring-2 ring-blue-300" } else { "" }
                )}
                style={format!(
                    "background: {}; border-color: {};",
                    cell.background, props.border_color
                )}
                maxlength="2"
                value={cell.value.clone()}
                {onfocus}
                {onmousedown}
                {oninput}
                {oncontextmenu}
            />
        </div>
    }
}

#[function_component(GridPanel)]
pub fn grid_panel(props: &GridPanelProps) -> Html {
    let rows_input = use_state(|| props.layer.rows().to_string());
    let cols_input = use_state(|| props.layer.cols().to_string());

    // Reset the form when another layer (or a resized one) comes in
    {
        let rows_input = rows_input.clone();
        let cols_input = cols_input.clone();
        use_effect_with(
            (props.layer_index, props.layer.rows(), props.layer.cols()),
            move |(_, rows, cols)| {
                rows_input.set(rows.to_string());
                cols_input.set(cols.to_string());
            },
        );
    }

    let on_rows_input = {
        let rows_input = rows_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            rows_input.set(input.value());
        })
    };
    let on_cols_input = {
        let cols_input = cols_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cols_input.set(input.value());
        })
    };
    let on_apply = {
        let rows_input = rows_input.clone();
        let cols_input = cols_input.clone();
        let on_resize = props.on_resize.clone();
        Callback::from(move |_: MouseEvent| {
            on_resize.emit(((*rows_input).clone(), (*cols_input).clone()));
        })
    };

    let cells: Html = props
        .layer
        .iter()
        .map(|(at, cell)| render_cell(props, at, cell))
        .collect();

    html! {
        <div class="flex-1 flex flex-col items-center p-4 overflow-auto">
            <div class="flex items-center gap-3 mb-3">
                <div
                    class="w-4 h-4 rounded border border-gray-300"
                    style={format!("background: {};", props.border_color)}
                />
                <span class="text-sm text-gray-700">
                    {format!("Layer {} / {}", props.layer_index + 1, LAYER_COUNT)}
                </span>
                <span class="text-xs text-gray-400">{"(= / - to cycle, C for coords)"}</span>
            </div>

            <div class="flex items-center gap-2 mb-1">
                <label class="text-sm">{"Rows"}</label>
                <input
                    class="w-14 px-1 border border-gray-300 rounded text-sm"
                    value={(*rows_input).clone()}
                    oninput={on_rows_input}
                />
                <label class="text-sm">{"Cols"}</label>
                <input
                    class="w-14 px-1 border border-gray-300 rounded text-sm"
                    value={(*cols_input).clone()}
                    oninput={on_cols_input}
                />
                <button
                    onclick={on_apply}
                    class="px-2 py-1 bg-white border border-gray-300 rounded text-sm hover:bg-gray-50"
                >
                    {"Resize"}
                </button>
            </div>
            {
                if let Some(message) = props.resize_error.as_ref() {
                    html! {
                        <p data-testid="resize-error" class="text-sm text-red-600 mb-2">
                            {message.clone()}
                        </p>
                    }
                } else {
                    html! {}
                }
            }

            <div
                class="grid gap-1 mt-2"
                style={format!("grid-template-columns: repeat({}, 2.5rem);", props.layer.cols())}
            >
                {cells}
            </div>
        </div>
    }
}
