use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectorsPanelProps {
    pub sectors: Vec<String>,
    pub on_add: Callback<()>,
    /// Always removes the most recently added sector
    pub on_remove: Callback<()>,
    pub on_edit: Callback<(usize, String)>,
}

#[function_component(SectorsPanel)]
pub fn sectors_panel(props: &SectorsPanelProps) -> Html {
    let on_add = {
        let cb = props.on_add.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_remove = {
        let cb = props.on_remove.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let sectors: Html = props
        .sectors
        .iter()
        .enumerate()
        .map(|(idx, text)| {
            let oninput = {
                let on_edit = props.on_edit.clone();
                Callback::from(move |e: InputEvent| {
                    let textarea: HtmlTextAreaElement = e.target_unchecked_into();
                    on_edit.emit((idx, textarea.value()));
                })
            };
            html! {
                <textarea
                    key={idx}
                    class="w-full h-20 p-2 mb-2 text-sm border border-gray-200 rounded resize-none"
                    placeholder="Sector notes..."
                    value={text.clone()}
                    {oninput}
                />
            }
        })
        .collect();

    html! {
        <div class="w-64 flex-none flex flex-col border-l border-gray-300 bg-white">
            <div class="flex items-center gap-2 p-2 border-b border-gray-200">
                <h2 class="text-sm font-semibold flex-1">{"Sectors"}</h2>
                <button
                    onclick={on_add}
                    class="px-2 py-1 bg-white border border-gray-300 rounded text-sm hover:bg-gray-50"
                >
                    {"+"}
                </button>
                <button
                    onclick={on_remove}
                    class="px-2 py-1 bg-white border border-gray-300 rounded text-sm hover:bg-gray-50"
                >
                    {"\u{2212}"}
                </button>
            </div>
            <div class="flex-1 overflow-y-auto p-2">
                {sectors}
            </div>
        </div>
    }
}
