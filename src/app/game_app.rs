// src/app/game_app.rs

// --- 必要なものをインポート ---
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use log::{debug, error, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlCanvasElement};

use crate::app::browser_event_manager::{self, now_ms, window_viewport, FrameLoop};
use crate::app::lock_or_recover;
use crate::app::renderer::Renderer;
use crate::app::starry_background::StarryBackground;
use crate::app::state_getter;
use crate::components::{BackgroundMode, DrawEffect, Language, Viewport};
use crate::config::NarrationConfig;
use crate::data::catalog::load_catalog;
use crate::error::TarotError;
use crate::logic::session::{NarrationTicket, ReadingSession};
use crate::narration::{GeminiGenerator, NarrationClient};
use crate::systems::FrameDriver;

/// ページに1つ置く占いアプリ本体だよ！🔮
///
/// JS はボタンが押されたらメソッドを呼んで、`mount` に渡したコールバックで
/// 毎フレームのビュー (JSON) を受け取って描くだけ。判断は全部こっちでやる。
#[wasm_bindgen]
pub struct TarotApp {
    session: Arc<Mutex<ReadingSession>>,
    renderer: Arc<Mutex<Renderer>>,
    driver: Arc<Mutex<FrameDriver>>,
    starry: Arc<Mutex<Option<StarryBackground>>>,
    narration: Rc<NarrationClient<GeminiGenerator>>,
    // mount している間だけ Some
    frame_loop: Rc<RefCell<Option<FrameLoop>>>,
    resize_closure: Arc<Mutex<Option<Closure<dyn FnMut(Event)>>>>,
}

#[wasm_bindgen]
impl TarotApp {
    /// `api_key` を省略するとビルド時の `API_KEY` を使う。
    #[wasm_bindgen(constructor)]
    pub fn new(api_key: Option<String>) -> TarotApp {
        info!("TarotApp: initializing...");
        let config = NarrationConfig::from_env().with_api_key(api_key);
        if config.credential().is_none() {
            warn!("TarotApp: no API key configured, readings will not be narrated");
        }
        let generator = GeminiGenerator::new(&config);

        let mut session = ReadingSession::from_entropy(load_catalog());
        if let Some(viewport) = window_viewport() {
            session.set_viewport(viewport);
        }

        Self {
            session: Arc::new(Mutex::new(session)),
            renderer: Arc::new(Mutex::new(Renderer::new())),
            driver: Arc::new(Mutex::new(FrameDriver::new())),
            starry: Arc::new(Mutex::new(None)),
            narration: Rc::new(NarrationClient::new(config, generator)),
            frame_loop: Rc::new(RefCell::new(None)),
            resize_closure: Arc::new(Mutex::new(None)),
        }
    }

    /// フレームループとリサイズ監視を始める。
    /// `on_frame` には毎フレーム、ビューの JSON 文字列が1つ渡される。
    /// `unmount` したあとのアプリはもう使えないので、mount し直すと Err になる。
    pub fn mount(&self, on_frame: js_sys::Function) -> Result<(), JsValue> {
        if lock_or_recover(&self.session).is_torn_down() {
            return Err(TarotError::Browser(
                "app was unmounted; create a new TarotApp to mount again".to_string(),
            )
            .into());
        }
        if self.frame_loop.borrow().is_some() {
            debug!("TarotApp: already mounted");
            return Ok(());
        }

        let session = Arc::clone(&self.session);
        let renderer = Arc::clone(&self.renderer);
        let driver = Arc::clone(&self.driver);
        let starry = Arc::clone(&self.starry);

        let frame_loop = FrameLoop::new(move |timestamp: f64| {
            let session_needs_frames = {
                let mut s = lock_or_recover(&session);
                lock_or_recover(&driver).tick(&mut s, timestamp);
                s.needs_frames()
            };
            let painting_stars = paint_starry(&session, &starry);

            match state_getter::view_state_json(&session, &renderer) {
                Ok(view) => {
                    if let Err(e) = on_frame.call1(&JsValue::NULL, &view) {
                        error!("TarotApp: on_frame callback threw: {:?}", e);
                    }
                }
                Err(e) => error!("TarotApp: could not build view: {:?}", e),
            }
            session_needs_frames || painting_stars
        });

        browser_event_manager::attach_resize_listener(
            Arc::clone(&self.session),
            frame_loop.clone(),
            Arc::clone(&self.resize_closure),
        )?;
        frame_loop.kick()?;
        *self.frame_loop.borrow_mut() = Some(frame_loop);
        info!("TarotApp: mounted");
        Ok(())
    }

    /// リスナーを外して、フレームと予約済みの遷移を全部止める。これで終わり (元には戻せない)。
    pub fn unmount(&self) -> Result<(), JsValue> {
        browser_event_manager::detach_resize_listener(&self.resize_closure)?;
        if let Some(frame_loop) = self.frame_loop.borrow_mut().take() {
            frame_loop.stop()?;
        }
        lock_or_recover(&self.session).teardown();
        info!("TarotApp: unmounted");
        Ok(())
    }

    // --- 占いの操作 ---

    pub fn start_reading(&self) -> bool {
        let changed = lock_or_recover(&self.session).start(now_ms());
        self.request_redraw();
        changed
    }

    pub fn draw_card(&self) -> bool {
        let changed = lock_or_recover(&self.session).draw(now_ms());
        self.request_redraw();
        changed
    }

    pub fn reset_reading(&self) -> bool {
        let changed = lock_or_recover(&self.session).reset(now_ms());
        self.request_redraw();
        changed
    }

    /// reading 中に選んだカード (0=過去, 1=現在, 2=未来) をタップした時。
    /// 3枚そろっていれば、ここで解説のリクエストが1回だけ飛ぶ。
    pub fn focus_card(&self, slot: usize) -> bool {
        let ticket = {
            let mut s = lock_or_recover(&self.session);
            if !s.focus(slot) {
                return false;
            }
            s.request_narration()
        };
        if let Some(ticket) = ticket {
            self.spawn_narration(ticket);
        }
        self.request_redraw();
        true
    }

    pub fn set_hover(&self, unique_id: Option<String>, progress: f64) {
        lock_or_recover(&self.session).set_hover(unique_id, progress);
        self.request_redraw();
    }

    /// JS 側で画像の読み込みに失敗したカードを知らせてもらう
    pub fn mark_image_failed(&self, unique_id: &str) {
        if lock_or_recover(&self.session).mark_image_failed(unique_id) {
            warn!("TarotApp: image for {} failed to load, showing placeholder", unique_id);
            self.request_redraw();
        }
    }

    pub fn set_viewport(&self, width: f64, height: f64) {
        lock_or_recover(&self.session).set_viewport(Viewport::new(width, height));
        if let Some(background) = lock_or_recover(&self.starry).as_mut() {
            background.resize(width, height);
        }
        self.request_redraw();
    }

    // --- 設定パネル ---

    pub fn open_settings(&self) {
        lock_or_recover(&self.session).preferences_mut().settings_open = true;
        self.request_redraw();
    }

    pub fn close_settings(&self) {
        lock_or_recover(&self.session).preferences_mut().settings_open = false;
        self.request_redraw();
    }

    pub fn set_language(&self, value: &str) -> Result<(), JsValue> {
        let language = Language::parse(value)
            .ok_or_else(|| JsValue::from_str(&format!("unknown language: {}", value)))?;
        lock_or_recover(&self.session).preferences_mut().language = language;
        self.request_redraw();
        Ok(())
    }

    pub fn set_background(&self, value: &str) -> Result<(), JsValue> {
        let background = BackgroundMode::parse(value)
            .ok_or_else(|| JsValue::from_str(&format!("unknown background: {}", value)))?;
        lock_or_recover(&self.session).preferences_mut().background = background;
        if background != BackgroundMode::Starry {
            if let Some(starry) = lock_or_recover(&self.starry).as_ref() {
                starry.clear();
            }
        }
        self.request_redraw();
        Ok(())
    }

    pub fn set_draw_effect(&self, value: &str) -> Result<(), JsValue> {
        let effect = DrawEffect::parse(value)
            .ok_or_else(|| JsValue::from_str(&format!("unknown draw effect: {}", value)))?;
        lock_or_recover(&self.session).preferences_mut().draw_effect = effect;
        self.request_redraw();
        Ok(())
    }

    /// 星空背景を描く canvas を渡す。背景が "starry" の間だけ描かれる。
    pub fn attach_starry_canvas(&self, canvas: HtmlCanvasElement) -> Result<(), JsValue> {
        let viewport = lock_or_recover(&self.session).viewport();
        let background = StarryBackground::new(canvas, viewport.width, viewport.height)?;
        *lock_or_recover(&self.starry) = Some(background);
        self.request_redraw();
        Ok(())
    }

    /// 今のビューを JSON 文字列で返す (mount していなくても使える)
    pub fn view_state_json(&self) -> Result<JsValue, JsValue> {
        state_getter::view_state_json(&self.session, &self.renderer)
    }

    pub fn phase(&self) -> String {
        lock_or_recover(&self.session).phase().as_str().to_string()
    }
}

impl TarotApp {
    /// mount 中ならフレームを1つ頼む (ループが止まっていれば動き出す)
    fn request_redraw(&self) {
        if let Some(frame_loop) = self.frame_loop.borrow().as_ref() {
            if let Err(e) = frame_loop.kick() {
                error!("TarotApp: failed to request frame: {:?}", e);
            }
        }
    }

    fn spawn_narration(&self, ticket: NarrationTicket) {
        let client = Rc::clone(&self.narration);
        let session = Arc::clone(&self.session);
        let frame_loop = Rc::clone(&self.frame_loop);
        info!("TarotApp: requesting narration for {}", ticket.key);

        spawn_local(async move {
            let text = client
                .narrate(&ticket.past, &ticket.present, &ticket.future)
                .await;
            let accepted = lock_or_recover(&session).finish_narration(&ticket.key, text);
            if !accepted {
                debug!("TarotApp: dropped stale narration for {}", ticket.key);
                return;
            }
            if let Some(frame_loop) = frame_loop.borrow().as_ref() {
                if let Err(e) = frame_loop.kick() {
                    error!("TarotApp: failed to request frame: {:?}", e);
                }
            }
        });
    }
}

/// 星空モードなら1フレーム描いて true を返す
fn paint_starry(
    session: &Arc<Mutex<ReadingSession>>,
    starry: &Arc<Mutex<Option<StarryBackground>>>,
) -> bool {
    let (background_mode, viewport) = {
        let s = lock_or_recover(session);
        (s.preferences().background, s.viewport())
    };
    if background_mode != BackgroundMode::Starry {
        return false;
    }
    let mut guard = lock_or_recover(starry);
    let Some(background) = guard.as_mut() else {
        return false;
    };
    background.resize(viewport.width, viewport.height);
    if let Err(e) = background.frame() {
        error!("TarotApp: failed to paint starry background: {:?}", e);
        return false;
    }
    true
}

// 不要になったらリスナーとフレームを片付ける (Drop トレイト)
impl Drop for TarotApp {
    fn drop(&mut self) {
        if let Err(e) = self.unmount() {
            error!("TarotApp: cleanup on drop failed: {:?}", e);
        }
    }
}
