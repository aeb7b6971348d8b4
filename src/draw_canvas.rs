use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, PointerEvent};
use yew::prelude::*;

use crate::board::{RestoreGuard, Segment, Snapshot, StrokeMachine, Tool};
use crate::utils::client_to_canvas_coords;

#[derive(Properties, PartialEq)]
pub struct DrawCanvasProps {
    /// Armed tool; when None the canvas lets pointer events fall through to
    /// the notes underneath
    pub tool: Option<Tool>,
    /// Drawing stored on the active page
    pub snapshot: Option<Snapshot>,
    /// Bumped on every page switch or clear so the restore effect re-runs
    pub restore_epoch: u32,
    /// Emitted with a fresh capture when a stroke completes
    pub on_snapshot: Callback<Snapshot>,
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Match the backing store to the element's layout size (at least 1px)
fn fit_backing_store(canvas: &HtmlCanvasElement) {
    let rect = canvas.get_bounding_client_rect();
    canvas.set_width(rect.width().floor().max(1.0) as u32);
    canvas.set_height(rect.height().floor().max(1.0) as u32);
}

fn draw_segment(ctx: &CanvasRenderingContext2d, segment: &Segment, tool: Tool) {
    ctx.begin_path();
    ctx.move_to(segment.from.x, segment.from.y);
    ctx.line_to(segment.to.x, segment.to.y);
    ctx.set_stroke_style_str(tool.stroke_color());
    ctx.set_line_width(tool.stroke_width());
    ctx.set_line_cap("round");
    ctx.stroke();
}

/// Clear the surface and, when a snapshot exists, decode it back onto the
/// canvas scaled to the current dimensions. The decode completes on an image
/// load callback; the guard drops completions superseded by a newer restore
/// so stale pixels never paint over current state.
fn restore(
    canvas: &HtmlCanvasElement,
    snapshot: Option<&Snapshot>,
    guard: &Rc<RefCell<RestoreGuard>>,
) {
    let Some(ctx) = context_2d(canvas) else { return };
    let generation = guard.borrow_mut().issue();
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    ctx.clear_rect(0.0, 0.0, width, height);

    let Some(snapshot) = snapshot else { return };
    let Ok(image) = HtmlImageElement::new() else {
        return;
    };

    let onload = {
        let guard = guard.clone();
        let decoded = image.clone();
        EventListener::once(&image, "load", move |_| {
            if !guard.borrow().is_current(generation) {
                log::debug!("dropping superseded snapshot restore");
                return;
            }
            if ctx
                .draw_image_with_html_image_element_and_dw_and_dh(&decoded, 0.0, 0.0, width, height)
                .is_err()
            {
                log::warn!("failed to paint restored snapshot");
            }
        })
    };
    onload.forget();
    image.set_src(snapshot.as_str());
}

#[function_component(DrawCanvas)]
pub fn draw_canvas(props: &DrawCanvasProps) -> Html {
    let canvas_ref = use_node_ref();
    let machine = use_mut_ref(StrokeMachine::default);
    let guard = use_mut_ref(RestoreGuard::default);

    // Restore the stored drawing whenever the page indicates a new epoch
    // (mount, page switch, clear)
    {
        let canvas_ref = canvas_ref.clone();
        let guard = guard.clone();
        let snapshot = props.snapshot.clone();
        use_effect_with(props.restore_epoch, move |_| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                fit_backing_store(&canvas);
                restore(&canvas, snapshot.as_ref(), &guard);
            }
            || ()
        });
    }

    // Viewport resize: capture the bitmap, resize the backing store, redraw
    // the capture scaled into the new dimensions
    {
        let canvas_ref = canvas_ref.clone();
        let guard = guard.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no window");
            let listener = EventListener::new(&window, "resize", move |_| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    let capture = canvas.to_data_url().ok().map(Snapshot::new);
                    fit_backing_store(&canvas);
                    restore(&canvas, capture.as_ref(), &guard);
                }
            });
            move || drop(listener)
        });
    }

    let onpointerdown = {
        let canvas_ref = canvas_ref.clone();
        let machine = machine.clone();
        Callback::from(move |e: PointerEvent| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                let _ = canvas.set_pointer_capture(e.pointer_id());
                machine
                    .borrow_mut()
                    .begin(client_to_canvas_coords(&e, &canvas));
            }
        })
    };

    let onpointermove = {
        let canvas_ref = canvas_ref.clone();
        let machine = machine.clone();
        let tool = props.tool;
        Callback::from(move |e: PointerEvent| {
            let Some(tool) = tool else { return };
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                let next = client_to_canvas_coords(&e, &canvas);
                if let Some(segment) = machine.borrow_mut().extend(next) {
                    if let Some(ctx) = context_2d(&canvas) {
                        draw_segment(&ctx, &segment, tool);
                    }
                }
            }
        })
    };

    // Shared by pointerup/cancel/leave: finish the stroke and snapshot the
    // surface into the active page
    let on_stroke_end = {
        let canvas_ref = canvas_ref.clone();
        let machine = machine.clone();
        let on_snapshot = props.on_snapshot.clone();
        Callback::from(move |_: PointerEvent| {
            if !machine.borrow_mut().finish() {
                return;
            }
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                match canvas.to_data_url() {
                    Ok(data) => on_snapshot.emit(Snapshot::new(data)),
                    Err(_) => log::warn!("failed to encode drawing snapshot"),
                }
            }
        })
    };

    let pointer_events = if props.tool.is_some() { "auto" } else { "none" };

    html! {
        <canvas
            ref={canvas_ref}
            data-testid="draw-canvas"
            class="absolute inset-0 w-full h-full"
            style={format!("pointer-events: {};", pointer_events)}
            onpointerdown={onpointerdown}
            onpointermove={onpointermove}
            onpointerup={on_stroke_end.clone()}
            onpointercancel={on_stroke_end.clone()}
            onpointerleave={on_stroke_end}
        />
    }
}
