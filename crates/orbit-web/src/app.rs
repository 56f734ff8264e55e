//! DOM wiring: canvas mouse events, the spawn button, the file input,
//! and the self-rescheduling animation-frame loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, File, HtmlCanvasElement, HtmlElement, HtmlImageElement, HtmlInputElement, MouseEvent, Url};
use orbit_engine::{GameConfig, ImageId, InputEvent, OrbitPlayground};

use crate::canvas::CanvasSurface;
use crate::runner::GameRunner;

/// Longest frame delta fed to the simulation, in seconds.
const MAX_FRAME_DT: f32 = 0.25;

/// Element ids of the page controls.
pub struct Controls<'a> {
    pub canvas: &'a str,
    pub spawn_button: &'a str,
    pub file_input: &'a str,
}

pub struct App {
    runner: RefCell<GameRunner<OrbitPlayground>>,
    surface: RefCell<CanvasSurface>,
    /// Last surface size reported to the scene.
    size: Cell<Vec2>,
    frame: RefCell<Option<AnimationFrame>>,
    last_timestamp: Cell<Option<f64>>,
    next_image: Cell<u32>,
    listeners: RefCell<Vec<EventListener>>,
    /// Load/error listeners of the image currently decoding.
    /// Replacing them abandons an older upload still in flight.
    pending_image: RefCell<Option<(EventListener, EventListener)>>,
}

impl App {
    pub fn mount(controls: &Controls<'_>, mut config: GameConfig) -> Result<Rc<Self>, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas: HtmlCanvasElement = element(&document, controls.canvas)?;
        let button: HtmlElement = element(&document, controls.spawn_button)?;
        let file_input: HtmlInputElement = element(&document, controls.file_input)?;

        let surface = CanvasSurface::new(canvas.clone())?;
        let size = surface.size();
        config.world_width = size.x;
        config.world_height = size.y;

        let mut runner = GameRunner::new(OrbitPlayground::with_config(config), random_seed());
        runner.init();

        let app = Rc::new(Self {
            runner: RefCell::new(runner),
            surface: RefCell::new(surface),
            size: Cell::new(size),
            frame: RefCell::new(None),
            last_timestamp: Cell::new(None),
            next_image: Cell::new(1),
            listeners: RefCell::new(Vec::new()),
            pending_image: RefCell::new(None),
        });
        app.install_listeners(&canvas, &button, &file_input);
        app.schedule_frame();
        Ok(app)
    }

    fn push_input(&self, event: InputEvent) {
        self.runner.borrow_mut().push_input(event);
    }

    /// Flat copy of the latest frame's events, 4 floats per event.
    pub fn events(&self) -> Vec<f32> {
        self.runner.borrow().context().events_as_floats().to_vec()
    }

    fn install_listeners(
        self: &Rc<Self>,
        canvas: &HtmlCanvasElement,
        button: &HtmlElement,
        file_input: &HtmlInputElement,
    ) {
        let mut listeners = vec![
            self.pointer_listener(canvas, "mousedown", |x, y| InputEvent::PointerDown { x, y }),
            self.pointer_listener(canvas, "mousemove", |x, y| InputEvent::PointerMove { x, y }),
            self.pointer_listener(canvas, "mouseup", |x, y| InputEvent::PointerUp { x, y }),
        ];

        let app = Rc::clone(self);
        listeners.push(EventListener::new(button, "click", move |_event| {
            app.push_input(InputEvent::SpawnCircle);
        }));

        let app = Rc::clone(self);
        let input = file_input.clone();
        listeners.push(EventListener::new(file_input, "change", move |_event| {
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                app.load_background(&file);
            }
        }));

        *self.listeners.borrow_mut() = listeners;
    }

    fn pointer_listener(
        self: &Rc<Self>,
        canvas: &HtmlCanvasElement,
        event_type: &'static str,
        make: fn(f32, f32) -> InputEvent,
    ) -> EventListener {
        let app = Rc::clone(self);
        EventListener::new(canvas, event_type, move |event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                app.push_input(make(mouse.offset_x() as f32, mouse.offset_y() as f32));
            }
        })
    }

    /// Decode `file` off-thread via an object URL; on success the image
    /// becomes the background. Failures are logged and otherwise ignored.
    fn load_background(self: &Rc<Self>, file: &File) {
        let url = match Url::create_object_url_with_blob(file) {
            Ok(url) => url,
            Err(err) => {
                log::warn!("cannot read {}: {err:?}", file.name());
                return;
            }
        };
        let img = match HtmlImageElement::new() {
            Ok(img) => img,
            Err(err) => {
                log::warn!("cannot create image element: {err:?}");
                let _ = Url::revoke_object_url(&url);
                return;
            }
        };

        let id = ImageId(self.next_image.get());
        self.next_image.set(id.0 + 1);

        let app = Rc::clone(self);
        let decoded = img.clone();
        let load_url = url.clone();
        let on_load = EventListener::once(&img, "load", move |_event| {
            let _ = Url::revoke_object_url(&load_url);
            let width = decoded.natural_width() as f32;
            let height = decoded.natural_height() as f32;
            if width > 0.0 && height > 0.0 {
                app.surface.borrow_mut().replace_images(id, decoded.clone());
            }
            app.push_input(InputEvent::BackgroundLoaded { image: id, width, height });
        });

        let name = file.name();
        let error_url = url.clone();
        let on_error = EventListener::once(&img, "error", move |_event| {
            let _ = Url::revoke_object_url(&error_url);
            log::warn!("could not decode {name}");
        });

        *self.pending_image.borrow_mut() = Some((on_load, on_error));
        img.set_src(&url);
    }

    fn schedule_frame(self: &Rc<Self>) {
        let app = Rc::clone(self);
        let handle = request_animation_frame(move |timestamp| {
            app.frame.borrow_mut().take();
            app.run_frame(timestamp);
            app.schedule_frame();
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn run_frame(&self, timestamp: f64) {
        let mut surface = self.surface.borrow_mut();
        let mut runner = self.runner.borrow_mut();

        let size = surface.size();
        if size != self.size.replace(size) {
            runner.push_input(InputEvent::Resize { width: size.x, height: size.y });
        }

        let previous = self.last_timestamp.replace(Some(timestamp));
        let dt = frame_delta(previous, timestamp, runner.fixed_dt());
        runner.tick(dt);
        runner.render(&mut *surface);
    }
}

/// Seconds between two animation-frame timestamps (milliseconds).
/// The first frame counts as one fixed step; stalls are clamped.
fn frame_delta(previous: Option<f64>, now: f64, first: f32) -> f32 {
    match previous {
        Some(prev) => (((now - prev) / 1000.0) as f32).clamp(0.0, MAX_FRAME_DT),
        None => first,
    }
}

fn element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{id}")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("#{id} has the wrong element type")))
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * (1u64 << 53) as f64) as u64
}
