// src/ui/interactions.rs

use super::scheduler::{now_seconds, GtkFrameScheduler};
use crate::physics::brillouin::Direction;
use crate::rendering;
use crate::state::AppState;
use gtk4::{self as gtk, prelude::*};
use gtk4::{ApplicationWindow, Button, FileChooserAction, FileChooserDialog, GestureClick, ResponseType};
use std::cell::RefCell;
use std::rc::Rc;

pub struct Controls {
  pub plot_area: gtk::DrawingArea,
  pub add_button: Button,
  pub subtract_button: Button,
  pub export_button: Button,
}

pub fn setup_interactions(
  window: &ApplicationWindow,
  state: Rc<RefCell<AppState>>,
  scheduler: Rc<RefCell<GtkFrameScheduler>>,
  controls: &Controls,
) {
  // 1. PRESS ON THE PLOT (pick a wavenumber)
  let click = GestureClick::new();
  click.set_button(0);

  let s = state.clone();
  let sched = scheduler.clone();
  let plot = controls.plot_area.clone();
  click.connect_pressed(move |_, _n_press, x, y| {
    let moved = s.borrow_mut().press_plot(x, y, &mut *sched.borrow_mut(), now_seconds());
    if moved {
      plot.queue_draw();
    }
  });
  controls.plot_area.add_controller(click);

  // 2. RECIPROCAL LATTICE VECTOR BUTTONS
  for (button, direction) in [
    (&controls.add_button, Direction::Forward),
    (&controls.subtract_button, Direction::Backward),
  ] {
    let s = state.clone();
    let sched = scheduler.clone();
    let plot = controls.plot_area.clone();
    button.connect_clicked(move |_| {
      s.borrow_mut().shift_zone(direction, &mut *sched.borrow_mut(), now_seconds());
      plot.queue_draw();
    });
  }

  // 3. EXPORT
  let s = state.clone();
  controls.export_button.connect_clicked(move |btn| {
    let window = btn.root().and_then(|root| root.downcast::<gtk::Window>().ok());

    let dialog = FileChooserDialog::new(
      Some("Export Dispersion Plot"),
      window.as_ref(),
      FileChooserAction::Save,
      &[("Cancel", ResponseType::Cancel), ("Save", ResponseType::Accept)],
    );
    dialog.set_current_name("dispersion.png");

    let s = s.clone();
    dialog.connect_response(move |d, response| {
      if response == ResponseType::Accept {
        if let Some(path) = d.file().and_then(|f| f.path()) {
          match rendering::export_plot(&s.borrow().board, &path) {
            Ok(()) => log::info!("Plot exported to {:?}", path),
            Err(e) => log::error!("Export failed: {}", e),
          }
        }
      }
      d.destroy();
    });

    dialog.present();
  });

  // 4. SHUTDOWN: no frame callbacks outlive the window
  let s = state;
  let sched = scheduler;
  window.connect_close_request(move |_| {
    s.borrow_mut().stop_animation(&mut *sched.borrow_mut());
    gtk::glib::Propagation::Proceed
  });
}
