pub mod frame_loop;
pub mod preferences;
pub mod runner;

pub use frame_loop::FrameLoopHandle;
pub use runner::FaceRunner;

use std::cell::RefCell;

use elastic_face::{ElementKind, FaceConfig, InputEvent, Mood, PhysicsMode, PROTOCOL_VERSION};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<FaceRunner>> = const { RefCell::new(None) };
    static LOOP: RefCell<Option<FrameLoopHandle>> = const { RefCell::new(None) };
}

fn with_runner<R>(f: impl FnOnce(&mut FaceRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().expect("Face not initialized. Call face_init() first.");
        f(runner)
    })
}

fn parse_config(config_json: Option<String>) -> FaceConfig {
    let mut config = match config_json.as_deref() {
        None | Some("") => FaceConfig::default(),
        Some(json) => FaceConfig::from_json(json).unwrap_or_else(|e| {
            log::warn!("invalid face config, using defaults: {}", e);
            FaceConfig::default()
        }),
    };
    if config.seed == 0 {
        config.seed = js_sys::Date::now() as u64;
    }
    config
}

#[wasm_bindgen]
pub fn face_init(config_json: Option<String>) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    face_stop_loop();
    let runner = FaceRunner::new(parse_config(config_json));
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("elastic-face: initialized (protocol v{})", PROTOCOL_VERSION);
}

/// Stop the loop and cancel pending resets. The runner stays readable.
#[wasm_bindgen]
pub fn face_shutdown() {
    face_stop_loop();
    RUNNER.with(|cell| {
        if let Some(runner) = cell.borrow_mut().as_mut() {
            runner.shutdown();
        }
    });
}

#[wasm_bindgen]
pub fn face_tick(now_ms: f64) {
    with_runner(|r| r.tick(now_ms));
}

/// Drive `face_tick` from `requestAnimationFrame`. `on_frame` is invoked after
/// every tick so the host can redraw from the buffers.
#[wasm_bindgen]
pub fn face_start_loop(on_frame: Option<js_sys::Function>) -> Result<(), JsValue> {
    face_stop_loop();
    let handle = frame_loop::start(move |timestamp| {
        let ticked = RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
            Some(runner) if !runner.is_stopped() => {
                runner.tick(timestamp);
                true
            }
            _ => false,
        });
        if let (true, Some(callback)) = (ticked, on_frame.as_ref()) {
            if let Err(e) = callback.call0(&JsValue::NULL) {
                log::error!("frame callback threw: {:?}", e);
            }
        }
    })?;
    LOOP.with(|cell| *cell.borrow_mut() = Some(handle));
    log::info!("elastic-face: loop started");
    Ok(())
}

#[wasm_bindgen]
pub fn face_stop_loop() {
    let handle = LOOP.with(|cell| cell.borrow_mut().take());
    if let Some(handle) = handle {
        handle.stop();
        log::info!("elastic-face: loop stopped");
    }
}

// ---- Input ----

#[wasm_bindgen]
pub fn face_pointer_down(element: u32, x: f32, y: f32) {
    match ElementKind::from_index(element) {
        Some(element) => with_runner(|r| r.push_input(InputEvent::PointerDown { element, x, y })),
        None => log::warn!("pointer down on unknown element {}", element),
    }
}

#[wasm_bindgen]
pub fn face_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn face_pointer_up() {
    with_runner(|r| r.push_input(InputEvent::PointerUp));
}

#[wasm_bindgen]
pub fn face_toggle_mode(mode: u32) {
    match PhysicsMode::from_index(mode) {
        Some(mode) => with_runner(|r| r.push_input(InputEvent::ToggleMode(mode))),
        None => log::warn!("unknown physics mode {}", mode),
    }
}

#[wasm_bindgen]
pub fn face_set_mood(mood: u32) {
    match Mood::from_index(mood) {
        Some(mood) => with_runner(|r| r.push_input(InputEvent::SetMood(mood))),
        None => log::warn!("unknown mood {}", mood),
    }
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn face_frame_json() -> Result<String, JsValue> {
    with_runner(|r| r.frame_json()).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn get_protocol_version() -> u32 {
    PROTOCOL_VERSION
}

#[wasm_bindgen]
pub fn get_elements_ptr() -> *const f32 {
    with_runner(|r| r.elements_ptr())
}

#[wasm_bindgen]
pub fn get_element_count() -> u32 {
    ElementKind::COUNT as u32
}

#[wasm_bindgen]
pub fn get_particles_ptr() -> *const f32 {
    with_runner(|r| r.particles_ptr())
}

#[wasm_bindgen]
pub fn get_particle_count() -> u32 {
    with_runner(|r| r.particle_count())
}

#[wasm_bindgen]
pub fn get_sound_events_ptr() -> *const u8 {
    with_runner(|r| r.sounds_ptr())
}

#[wasm_bindgen]
pub fn get_sound_events_len() -> u32 {
    with_runner(|r| r.sound_count())
}

#[wasm_bindgen]
pub fn get_canvas_size() -> f32 {
    with_runner(|r| r.face().config().canvas.size)
}

// ---- Preferences ----

#[wasm_bindgen]
pub fn instructions_seen() -> bool {
    preferences::instructions_seen()
}

#[wasm_bindgen]
pub fn mark_instructions_seen() -> Result<(), JsValue> {
    preferences::mark_instructions_seen()
}
