//! Mega-Sena Picker entry point
//!
//! Handles platform-specific initialization and wires the page to the engine.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, MouseEvent};

    use megasena_picker::view::{
        ButtonAction, CONFIRM_CLEAR_PROMPT, NO_SAVED_GAMES, PageView, error_notice,
    };
    use megasena_picker::settings::MAX_LOG_LEVEL;
    use megasena_picker::{BrowserStorage, GameSelectionEngine, PickError, Settings};

    const BOARD_ID: &str = "megasena-board";
    const BUTTONS_ID: &str = "megasena-buttons";
    const SAVED_GAMES_ID: &str = "megasena-saved-games";

    /// App instance holding the engine and preferences
    struct App {
        engine: GameSelectionEngine<BrowserStorage>,
        settings: Settings,
    }

    impl App {
        fn new(seed: u64) -> Self {
            let storage = BrowserStorage::open();
            let settings = Settings::load(&storage);
            Self {
                engine: GameSelectionEngine::with_settings(storage, seed, &settings),
                settings,
            }
        }

        /// Run a button's action. Returns false if nothing needs redrawing.
        fn handle_action(&mut self, action: ButtonAction) -> bool {
            match action {
                ButtonAction::NewGame => self.engine.new_game(),
                ButtonAction::RandomGame => self.engine.randomize(),
                ButtonAction::SaveGame => {
                    if let Err(e) = self.engine.commit() {
                        report_error(&e);
                        return false;
                    }
                }
                ButtonAction::ClearSavedGames => {
                    if self.settings.confirm_clear && !confirm(CONFIRM_CLEAR_PROMPT) {
                        return false;
                    }
                    self.engine.clear_saved_games();
                }
            }
            true
        }

        /// Rebuild the page from the current engine state
        fn render(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let view = PageView::build(&self.engine.snapshot());

            render_board(&document, &view);
            render_buttons(&document, &view);
            render_saved_games(&document, &view);
        }
    }

    fn report_error(err: &PickError) {
        match error_notice(err) {
            Some(message) => {
                log::warn!("{}", err);
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(&message);
                }
            }
            None => log::error!("{}", err),
        }
    }

    fn confirm(message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn render_board(document: &Document, view: &PageView) {
        let Some(container) = document.get_element_by_id(BOARD_ID) else {
            return;
        };
        container.set_inner_html("");

        let Ok(list) = document.create_element("ul") else {
            return;
        };
        list.set_class_name("numbers");

        for cell in &view.board {
            let Ok(item) = document.create_element("li") else {
                continue;
            };
            item.set_text_content(Some(&cell.number.to_string()));
            item.set_class_name(if cell.selected {
                "number selected-number"
            } else {
                "number"
            });
            let _ = item.set_attribute("data-number", &cell.number.to_string());
            let _ = list.append_child(&item);
        }

        let _ = container.append_child(&list);
    }

    fn render_buttons(document: &Document, view: &PageView) {
        let Some(container) = document.get_element_by_id(BUTTONS_ID) else {
            return;
        };
        container.set_inner_html("");

        for button in &view.buttons {
            let Some(el) = document
                .create_element("button")
                .ok()
                .and_then(|e| e.dyn_into::<HtmlButtonElement>().ok())
            else {
                continue;
            };
            el.set_text_content(Some(button.label));
            el.set_disabled(!button.enabled);
            let _ = el.set_attribute("data-action", button.action.as_str());
            style_button(&el, button.tone.background());
            let _ = container.append_child(&el);
        }
    }

    fn style_button(button: &HtmlElement, background: &str) {
        let style = button.style();
        let _ = style.set_property("background-color", background);
        let _ = style.set_property("color", "white");
        let _ = style.set_property("border", "none");
        let _ = style.set_property("border-radius", "5px");
        let _ = style.set_property("padding", "10px 20px");
        let _ = style.set_property("margin-right", "10px");
    }

    fn render_saved_games(document: &Document, view: &PageView) {
        let Some(container) = document.get_element_by_id(SAVED_GAMES_ID) else {
            return;
        };
        container.set_inner_html("");

        if view.saved_games.is_empty() {
            if let Ok(p) = document.create_element("p") {
                p.set_text_content(Some(NO_SAVED_GAMES));
                let _ = container.append_child(&p);
            }
            return;
        }

        let Ok(list) = document.create_element("ul") else {
            return;
        };
        for line in &view.saved_games {
            if let Ok(item) = document.create_element("li") {
                item.set_text_content(Some(line));
                let _ = list.append_child(&item);
            }
        }
        let _ = container.append_child(&list);
    }

    /// Element under the click carrying `attr`
    fn clicked_attribute(event: &MouseEvent, attr: &str) -> Option<String> {
        let target: Element = event.target()?.dyn_into().ok()?;
        target.closest(&format!("[{}]", attr)).ok()??.get_attribute(attr)
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        // Logger goes up before storage is touched so load warnings reach the console
        if console_log::init_with_level(MAX_LOG_LEVEL).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }
        log::set_max_level(log::LevelFilter::Info);

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App::new(seed)));

        log::set_max_level(app.borrow().settings.log_level().to_level_filter());
        log::info!("Mega-Sena Picker starting (seed {})", seed);

        setup_board_handler(app.clone());
        setup_button_handler(app.clone());

        app.borrow().render();
        log::info!("Mega-Sena Picker ready");
    }

    // Listeners sit on the containers, which survive re-renders; the cells and
    // buttons inside are rebuilt every time.
    fn setup_board_handler(app: Rc<RefCell<App>>) {
        let Some(board) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(BOARD_ID))
        else {
            log::error!("#{} not found", BOARD_ID);
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let Some(number) = clicked_attribute(&event, "data-number")
                .and_then(|v| v.parse::<u8>().ok())
            else {
                return;
            };
            let mut a = app.borrow_mut();
            if a.engine.toggle(number) {
                a.render();
            }
        });
        let _ = board.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_button_handler(app: Rc<RefCell<App>>) {
        let Some(buttons) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(BUTTONS_ID))
        else {
            log::error!("#{} not found", BUTTONS_ID);
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let Some(action) = clicked_attribute(&event, "data-action")
                .and_then(|v| ButtonAction::from_str(&v))
            else {
                return;
            };
            let mut a = app.borrow_mut();
            if a.handle_action(action) {
                a.render();
            }
        });
        let _ =
            buttons.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use megasena_picker::view::PageView;
    use megasena_picker::{GameSelectionEngine, MemoryStore};

    env_logger::init();
    log::info!("Mega-Sena Picker (native) starting...");
    log::info!("The picker UI runs in the browser - run with `trunk serve` for the web version");

    // Quick smoke run against an in-memory store
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut engine = GameSelectionEngine::new(MemoryStore::new(), seed);
    engine.randomize();
    match engine.commit() {
        Ok(game) => println!("Random game: {}", game),
        Err(e) => log::error!("{}", e),
    }

    let view = PageView::build(&engine.snapshot());
    println!("Saved games: {}", view.saved_games.len());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
