use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::board::{Snapshot, Tool};
use crate::draw_canvas::DrawCanvas;

#[derive(Properties, PartialEq)]
pub struct NotesPanelProps {
    pub text: String,
    pub page_label: String,
    pub tool: Option<Tool>,
    pub collapsed: bool,
    pub snapshot: Option<Snapshot>,
    pub restore_epoch: u32,
    pub on_text_input: Callback<String>,
    pub on_prev_page: Callback<()>,
    pub on_next_page: Callback<()>,
    pub on_toggle_tool: Callback<Tool>,
    pub on_clear_drawing: Callback<()>,
    pub on_toggle_collapsed: Callback<()>,
    pub on_snapshot: Callback<Snapshot>,
}

fn tool_button(
    label: &str,
    tool: Tool,
    active: Option<Tool>,
    on_toggle: &Callback<Tool>,
) -> Html {
    let onclick = {
        let on_toggle = on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(tool))
    };
    html! {
        <button
            {onclick}
            class={classes!(
                "px-2", "py-1", "border", "rounded", "text-sm",
                if active == Some(tool) {
                    "bg-blue-500 text-white border-blue-600"
                } else {
                    "bg-white border-gray-300 hover:bg-gray-50"
                }
            )}
        >
            {label}
        </button>
    }
}

#[function_component(NotesPanel)]
pub fn notes_panel(props: &NotesPanelProps) -> Html {
    let collapse_glyph = if props.collapsed { "\u{23f5}" } else { "\u{23f4}" };
    let on_toggle_collapsed = {
        let cb = props.on_toggle_collapsed.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    if props.collapsed {
        return html! {
            <div class="flex-none border-r border-gray-300 bg-white p-1">
                <button
                    onclick={on_toggle_collapsed}
                    class="px-1 text-sm text-gray-600 hover:text-black"
                >
                    {collapse_glyph}
                </button>
            </div>
        };
    }

    let oninput = {
        let on_text_input = props.on_text_input.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            on_text_input.emit(textarea.value());
        })
    };
    let on_prev = {
        let cb = props.on_prev_page.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_next = {
        let cb = props.on_next_page.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_clear = {
        let cb = props.on_clear_drawing.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="w-80 flex-none flex flex-col border-r border-gray-300 bg-white">
            <div class="flex items-center gap-1 p-2 border-b border-gray-200">
                <button
                    onclick={on_toggle_collapsed}
                    class="px-1 text-sm text-gray-600 hover:text-black"
                >
                    {collapse_glyph}
                </button>
                {tool_button("Draw", Tool::Draw, props.tool, &props.on_toggle_tool)}
                {tool_button("Erase", Tool::Erase, props.tool, &props.on_toggle_tool)}
                <button
                    onclick={on_clear}
                    class="px-2 py-1 bg-white border border-gray-300 rounded text-sm hover:bg-gray-50"
                >
                    {"Clear"}
                </button>
            </div>

            // Notes with the drawing overlay on top
            <div class="relative flex-1">
                <textarea
                    data-testid="notes-text"
                    class="w-full h-full p-2 text-sm resize-none focus:outline-none"
                    placeholder="Notes..."
                    value={props.text.clone()}
                    {oninput}
                />
                <DrawCanvas
                    tool={props.tool}
                    snapshot={props.snapshot.clone()}
                    restore_epoch={props.restore_epoch}
                    on_snapshot={props.on_snapshot.clone()}
                />
            </div>

            <div class="flex items-center justify-center gap-3 p-2 border-t border-gray-200">
                <button
                    onclick={on_prev}
                    class="px-2 py-1 bg-white border border-gray-300 rounded text-sm hover:bg-gray-50"
                >
                    {"\u{2190}"}
                </button>
                <span data-testid="page-label" class="text-sm text-gray-700">
                    {props.page_label.clone()}
                </span>
                <button
                    onclick={on_next}
                    class="px-2 py-1 bg-white border border-gray-300 rounded text-sm hover:bg-gray-50"
                >
                    {"\u{2192}"}
                </button>
            </div>
        </div>
    }
}
