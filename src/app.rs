use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::board::{BoardAction, BoardState, Snapshot, Tool};
use crate::grid_panel::GridPanel;
use crate::notes_panel::NotesPanel;
use crate::palette_panel::PalettePanel;
use crate::sectors_panel::SectorsPanel;
use crate::types::{CellRef, PalettePopup};

impl Reducible for BoardState {
    type Action = BoardAction;

    fn reduce(self: Rc<Self>, action: BoardAction) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

fn text_entry_focused() -> bool {
    gloo_utils::document()
        .active_element()
        .map(|el| matches!(el.tag_name().as_str(), "TEXTAREA" | "INPUT"))
        .unwrap_or(false)
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(BoardState::new);

    // Document-level shortcuts: = / - cycle layers, C toggles coordinate
    // labels, Delete toggles the selected cell, Ctrl/Cmd+1-4 quick colors.
    // C and Delete are suppressed while a text-entry field has focus.
    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            let document = gloo_utils::document();
            let listener = EventListener::new(&document, "keydown", move |event| {
                let Some(e) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let key = e.key();

                if e.ctrl_key() || e.meta_key() {
                    if let Some(digit) = key.chars().next().and_then(|c| c.to_digit(10)) {
                        if key.len() == 1 && (1..=4).contains(&digit) {
                            e.prevent_default();
                            dispatcher.dispatch(BoardAction::QuickColorApplied(
                                digit as usize - 1,
                            ));
                        }
                    }
                    return;
                }

                match key.as_str() {
                    "=" => dispatcher.dispatch(BoardAction::LayerCycled(true)),
                    "-" => dispatcher.dispatch(BoardAction::LayerCycled(false)),
                    "c" | "C" if !text_entry_focused() => {
                        dispatcher.dispatch(BoardAction::CoordsToggled)
                    }
                    "Delete" if !text_entry_focused() => {
                        dispatcher.dispatch(BoardAction::DeletedToggled)
                    }
                    _ => {}
                }
            });
            move || drop(listener)
        });
    }

    let dispatch = |action_of: fn(()) -> BoardAction| {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(action_of(())))
    };

    let on_text_input = {
        let state = state.clone();
        Callback::from(move |text: String| state.dispatch(BoardAction::TextEdited(text)))
    };
    let on_toggle_tool = {
        let state = state.clone();
        Callback::from(move |tool: Tool| state.dispatch(BoardAction::ToolToggled(tool)))
    };
    let on_snapshot = {
        let state = state.clone();
        Callback::from(move |snapshot: Snapshot| {
            state.dispatch(BoardAction::SnapshotStored(snapshot))
        })
    };

    let on_select = {
        let state = state.clone();
        Callback::from(move |at: CellRef| state.dispatch(BoardAction::CellSelected(at)))
    };
    let on_cell_input = {
        let state = state.clone();
        Callback::from(move |(at, value): (CellRef, String)| {
            state.dispatch(BoardAction::CellEdited(at, value))
        })
    };
    let on_clear_area = {
        let state = state.clone();
        Callback::from(move |(at, shift): (CellRef, bool)| {
            state.dispatch(BoardAction::AreaCleared(at, shift))
        })
    };
    let on_resize = {
        let state = state.clone();
        Callback::from(move |(rows, cols): (String, String)| {
            state.dispatch(BoardAction::ResizeRequested { rows, cols })
        })
    };

    let on_apply_color = {
        let state = state.clone();
        Callback::from(move |slot: usize| state.dispatch(BoardAction::QuickColorApplied(slot)))
    };
    let on_open_popup = {
        let state = state.clone();
        Callback::from(move |popup: PalettePopup| state.dispatch(BoardAction::PopupOpened(popup)))
    };
    let on_pick_swatch = {
        let state = state.clone();
        let slot = state.popup.map(|popup| popup.slot);
        Callback::from(move |color: String| {
            if let Some(slot) = slot {
                state.dispatch(BoardAction::SlotRecolored(slot, color));
            }
        })
    };

    let on_sector_edit = {
        let state = state.clone();
        Callback::from(move |(index, text): (usize, String)| {
            state.dispatch(BoardAction::SectorEdited(index, text))
        })
    };

    let page = state.pages.current().clone();
    let layer = state.grids.active().clone();

    html! {
        <div class="flex w-full h-screen overflow-hidden bg-gray-100">
            <NotesPanel
                text={page.text}
                page_label={state.pages.label()}
                tool={state.tools.active()}
                collapsed={state.sidebar_collapsed}
                snapshot={page.drawing}
                restore_epoch={state.restore_epoch}
                on_text_input={on_text_input}
                on_prev_page={dispatch(|_| BoardAction::PageRetreated)}
                on_next_page={dispatch(|_| BoardAction::PageAdvanced)}
                on_toggle_tool={on_toggle_tool}
                on_clear_drawing={dispatch(|_| BoardAction::DrawingCleared)}
                on_toggle_collapsed={dispatch(|_| BoardAction::SidebarToggled)}
                on_snapshot={on_snapshot}
            />

            <div class="flex-1 flex flex-col min-w-0">
                <GridPanel
                    layer={layer}
                    layer_index={state.grids.active_index()}
                    border_color={state.grids.border_color().to_string()}
                    show_coords={state.show_coords}
                    selected={state.selected}
                    resize_error={state.resize_error.clone()}
                    on_select={on_select}
                    on_cell_input={on_cell_input}
                    on_clear_area={on_clear_area}
                    on_resize={on_resize}
                />
                <PalettePanel
                    quick_colors={state.quick_colors.clone()}
                    popup={state.popup}
                    on_apply={on_apply_color}
                    on_open_popup={on_open_popup}
                    on_pick_swatch={on_pick_swatch}
                    on_dismiss={dispatch(|_| BoardAction::PopupDismissed)}
                />
            </div>

            <SectorsPanel
                sectors={state.sectors.texts().to_vec()}
                on_add={dispatch(|_| BoardAction::SectorAdded)}
                on_remove={dispatch(|_| BoardAction::SectorRemoved)}
                on_edit={on_sector_edit}
            />
        </div>
    }
}
