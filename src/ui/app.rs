//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent};

use crate::session::{
    LifecyclePhase, SessionController, TimerEvent, TimerRequest,
};

/// What the runtime should do with the timer driver after a dispatch.
#[derive(Debug, Default)]
pub struct UiEffects {
    pub timers: Vec<TimerRequest>,
    pub cancel_pending: bool,
}

impl UiEffects {
    fn none() -> Self {
        Self::default()
    }

    fn schedule(timers: Vec<TimerRequest>) -> Self {
        Self {
            timers,
            cancel_pending: false,
        }
    }

    fn cancel() -> Self {
        Self {
            timers: Vec::new(),
            cancel_pending: true,
        }
    }

    fn replace(timers: Vec<TimerRequest>) -> Self {
        Self {
            timers,
            cancel_pending: true,
        }
    }
}

pub struct App {
    controller: SessionController,
    should_quit: bool,
    status: Option<String>,
    menu_cursor: usize,
}

impl App {
    pub fn new(controller: SessionController) -> Self {
        let menu_cursor = controller
            .catalog()
            .iter()
            .position(|t| t.id == controller.state().selected_technique_id)
            .unwrap_or(0);
        Self {
            controller,
            should_quit: false,
            status: None,
            menu_cursor,
        }
    }

    pub fn controller(&self) -> &SessionController {
        &self.controller
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Last command error, shown in the footer until the next key.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn on_timer(&mut self, event: TimerEvent) -> UiEffects {
        UiEffects::schedule(self.controller.on_timer(event))
    }

    pub fn on_key(&mut self, key: KeyEvent) -> UiEffects {
        self.status = None;
        match self.controller.state().lifecycle {
            LifecyclePhase::Menu => self.on_menu_key(key.code),
            LifecyclePhase::Instructions => self.on_instructions_key(key.code),
            LifecyclePhase::Active => self.on_active_key(key.code),
            LifecyclePhase::Completed => self.on_completed_key(key.code),
        }
    }

    fn on_menu_key(&mut self, code: KeyCode) -> UiEffects {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.move_menu_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_menu_cursor(1),
            KeyCode::Enter => self.controller.confirm_selection(),
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
        UiEffects::none()
    }

    fn on_instructions_key(&mut self, code: KeyCode) -> UiEffects {
        match code {
            KeyCode::Enter | KeyCode::Char('s') => match self.controller.start() {
                Ok(timers) => return UiEffects::schedule(timers),
                Err(err) => self.status = Some(err.to_string()),
            },
            KeyCode::Esc | KeyCode::Backspace => self.controller.back(),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
        UiEffects::none()
    }

    fn on_active_key(&mut self, code: KeyCode) -> UiEffects {
        match code {
            KeyCode::Char(' ') => {
                if self.controller.state().is_running {
                    self.controller.pause();
                    return UiEffects::cancel();
                }
                // Replace rather than add: any pending timers are stale.
                return UiEffects::replace(self.controller.resume());
            }
            KeyCode::Esc | KeyCode::Char('s') => {
                self.controller.stop();
                return UiEffects::cancel();
            }
            KeyCode::Char('q') => {
                self.controller.stop();
                self.should_quit = true;
                return UiEffects::cancel();
            }
            _ => {}
        }
        UiEffects::none()
    }

    fn on_completed_key(&mut self, code: KeyCode) -> UiEffects {
        match code {
            KeyCode::Enter | KeyCode::Char('r') => self.controller.reset(),
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
        UiEffects::none()
    }

    fn move_menu_cursor(&mut self, delta: isize) {
        let len = self.controller.catalog().len();
        if len == 0 {
            return;
        }
        let cursor = self.menu_cursor as isize + delta;
        self.menu_cursor = cursor.rem_euclid(len as isize) as usize;
        let id = self
            .controller
            .catalog()
            .iter()
            .nth(self.menu_cursor)
            .map(|t| t.id.clone());
        if let Some(id) = id {
            // The id came out of the catalog, so selection cannot fail.
            if let Err(err) = self.controller.select_technique(&id) {
                self.status = Some(err.to_string());
            }
        }
    }
}
