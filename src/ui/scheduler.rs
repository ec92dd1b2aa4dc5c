// src/ui/scheduler.rs

use crate::rendering::surface::{FrameHandle, FrameScheduler};
use crate::state::AppState;
use gtk4::prelude::*;
use gtk4::{glib, DrawingArea, TickCallbackId, Widget};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

/// Frame-clock seconds on the same base as `glib::monotonic_time`.
pub fn now_seconds() -> f64 {
  glib::monotonic_time() as f64 / 1e6
}

/// Tick callbacks still attached to the host, keyed by frame handle id.
/// An entry leaves on cancel, or from inside its callback once that callback ends itself.
struct LiveCallbacks<T> {
  entries: Rc<RefCell<HashMap<u64, T>>>,
}

impl<T> Clone for LiveCallbacks<T> {
  fn clone(&self) -> Self {
    Self { entries: self.entries.clone() }
  }
}

impl<T> LiveCallbacks<T> {
  fn new() -> Self {
    Self { entries: Rc::new(RefCell::new(HashMap::new())) }
  }

  fn insert(&self, id: u64, entry: T) {
    self.entries.borrow_mut().insert(id, entry);
  }

  fn take(&self, id: u64) -> Option<T> {
    self.entries.borrow_mut().remove(&id)
  }

  /// Forgets `id` without handing the entry back; the callback is already gone.
  fn retire(&self, id: u64) {
    match self.entries.try_borrow_mut() {
      Ok(mut entries) => {
        entries.remove(&id);
      }
      Err(_) => log::debug!("Frame callback {} retired while the registry was busy", id),
    }
  }

  fn len(&self) -> usize {
    self.entries.borrow().len()
  }
}

/// Drives the session from GTK tick callbacks on `host`, one per registration.
pub struct GtkFrameScheduler {
  host: Widget,
  state: Weak<RefCell<AppState>>,
  redraw: Vec<DrawingArea>,
  next_id: u64,
  live: LiveCallbacks<TickCallbackId>,
}

impl GtkFrameScheduler {
  pub fn new(host: &impl IsA<Widget>, state: Weak<RefCell<AppState>>, redraw: Vec<DrawingArea>) -> Self {
    Self {
      host: host.clone().upcast(),
      state,
      redraw,
      next_id: 0,
      live: LiveCallbacks::new(),
    }
  }
}

impl FrameScheduler for GtkFrameScheduler {
  fn register_frame_callback(&mut self) -> FrameHandle {
    self.next_id += 1;
    let id = self.next_id;
    let state = self.state.clone();
    let redraw = self.redraw.clone();
    let live = self.live.clone();

    let tick = self.host.add_tick_callback(move |_, frame_clock: &gdk4::FrameClock| {
      let Some(state) = state.upgrade() else {
        live.retire(id);
        return glib::ControlFlow::Break;
      };
      let now = frame_clock.frame_time() as f64 / 1e6;
      // A handler holding the session this frame means it is about to restart us
      if let Ok(mut st) = state.try_borrow_mut() {
        st.advance_frame(now);
      }
      for area in &redraw {
        area.queue_draw();
      }
      glib::ControlFlow::Continue
    });

    self.live.insert(id, tick);
    log::trace!("Frame callback {} registered, {} live", id, self.live.len());
    FrameHandle(id)
  }

  fn cancel_frame_callback(&mut self, handle: FrameHandle) {
    match self.live.take(handle.0) {
      Some(tick) => tick.remove(),
      None => log::debug!("Frame callback {:?} was not live", handle),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_retired_callback_leaves_registry() {
    let live = LiveCallbacks::new();
    live.insert(1, "first");
    live.insert(2, "second");

    // The callback side only holds a clone
    let callback_side = live.clone();
    callback_side.retire(1);

    assert_eq!(live.len(), 1);
    assert_eq!(live.take(1), None);
    assert_eq!(live.take(2), Some("second"));
    assert_eq!(live.len(), 0);
  }

  #[test]
  fn test_retire_while_busy_is_harmless() {
    let live = LiveCallbacks::new();
    live.insert(7, ());
    let guard = live.entries.borrow();
    live.retire(7);
    drop(guard);
    assert_eq!(live.len(), 1);
  }
}
