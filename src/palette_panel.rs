use yew::prelude::*;

use crate::board::{QuickColors, PALETTE_SWATCHES, SLOT_COUNT};
use crate::types::{PalettePopup, Point};
use crate::utils::clamp_to_viewport;

// Rough popup footprint used for viewport clamping
const POPUP_WIDTH: f64 = 176.0;
const POPUP_HEIGHT: f64 = 88.0;

#[derive(Properties, PartialEq)]
pub struct PalettePanelProps {
    pub quick_colors: QuickColors,
    pub popup: Option<PalettePopup>,
    /// Apply slot color to the current selection (toggle semantics)
    pub on_apply: Callback<usize>,
    /// Secondary gesture on a slot: open the customization popup
    pub on_open_popup: Callback<PalettePopup>,
    pub on_pick_swatch: Callback<String>,
    pub on_dismiss: Callback<()>,
}

#[function_component(PalettePanel)]
pub fn palette_panel(props: &PalettePanelProps) -> Html {
    // Any click outside closes an open popup
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.popup.is_some(), move |open| {
            let listener = open.then(|| {
                let document = gloo_utils::document();
                gloo::events::EventListener::new(&document, "click", move |_| {
                    on_dismiss.emit(());
                })
            });
            move || drop(listener)
        });
    }

    let buttons: Html = (0..SLOT_COUNT)
        .map(|slot| {
            let color = props
                .quick_colors
                .color(slot)
                .unwrap_or("white")
                .to_string();
            let onclick = {
                let on_apply = props.on_apply.clone();
                Callback::from(move |_: MouseEvent| on_apply.emit(slot))
            };
            let oncontextmenu = {
                let on_open_popup = props.on_open_popup.clone();
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    on_open_popup.emit(PalettePopup::new(
                        slot,
                        Point::new(e.client_x() as f64, e.client_y() as f64),
                    ));
                })
            };
            html! {
                <button
                    key={slot}
                    title={format!("Quick color {} (Ctrl+{})", slot + 1, slot + 1)}
                    class="w-8 h-8 rounded border border-gray-300 hover:border-gray-500"
                    style={format!("background: {};", color)}
                    {onclick}
                    {oncontextmenu}
                />
            }
        })
        .collect();

    let popup = props.popup.as_ref().map(|popup| {
        let at = clamp_to_viewport(popup.anchor, POPUP_WIDTH, POPUP_HEIGHT);
        let swatches: Html = PALETTE_SWATCHES
            .iter()
            .map(|&swatch| {
                let onclick = {
                    let on_pick_swatch = props.on_pick_swatch.clone();
                    Callback::from(move |_: MouseEvent| on_pick_swatch.emit(swatch.to_string()))
                };
                html! {
                    <div
                        key={swatch}
                        title={swatch}
                        class="w-5 h-5 rounded-sm border border-gray-300 cursor-pointer"
                        style={format!("background: {};", swatch)}
                        {onclick}
                    />
                }
            })
            .collect();
        html! {
            <div
                data-testid="palette-popup"
                class="fixed flex flex-wrap gap-1 p-2 bg-white border border-gray-300 rounded shadow"
                style={format!("left: {}px; top: {}px; width: {}px;", at.x, at.y, POPUP_WIDTH)}
            >
                {swatches}
            </div>
        }
    });

    html! {
        <div class="flex items-center gap-2 p-2 border-t border-gray-200">
            {buttons}
            {popup.unwrap_or_default()}
        </div>
    }
}
