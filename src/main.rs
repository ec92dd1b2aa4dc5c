use gtk4::prelude::*;
use gtk4::Box as GtkBox;
use gtk4::{Application, ApplicationWindow, Button, DrawingArea, Frame, Orientation, ScrolledWindow, TextView};
use std::cell::RefCell;
use std::rc::Rc;

pub mod config;
pub mod model;
pub mod physics;
pub mod rendering;
pub mod simulation;
pub mod state;
pub mod ui;
pub mod utils;

use config::Config;
use state::AppState;
use ui::{setup_interactions, Controls, GtkFrameScheduler};

fn main() {
  let app = Application::builder()
    .application_id("org.example.phonon-chain")
    .build();

  app.connect_activate(build_ui);
  app.run();
}

fn chain_area(state: Rc<RefCell<AppState>>, optical: bool) -> DrawingArea {
  let area = DrawingArea::new();
  area.set_hexpand(true);
  area.set_content_height(140);

  area.set_draw_func(move |_, cr, w, h| {
    let st = state.borrow();
    let scene = if optical { &st.optical.canvas } else { &st.acoustic.canvas };
    if let Err(e) = rendering::draw_chain(cr, scene, st.config.style.background_color, w as f64, h as f64) {
      log::warn!("Chain redraw failed: {}", e);
    }
  });
  area
}

/// Settings from disk, or defaults; on first run the defaults are written out for editing.
fn load_settings() -> Config {
  let path = Config::settings_path();
  match Config::read_from(&path) {
    Ok(Some(config)) => {
      log::info!("Settings loaded from {}", path.display());
      config
    }
    Ok(None) => {
      let config = Config::default();
      match config.write_to(&path) {
        Ok(()) => log::info!("No settings found. Defaults written to {}", path.display()),
        Err(e) => log::warn!("No settings found and defaults not saved: {}", e),
      }
      config
    }
    Err(e) => {
      log::warn!("{}. Using defaults.", e);
      Config::default()
    }
  }
}

fn build_ui(app: &Application) {
  // Console first so the logger can see start-up messages
  let console_view = TextView::builder()
    .editable(false).cursor_visible(false).monospace(true)
    .left_margin(10).right_margin(10).top_margin(10).bottom_margin(10)
    .build();
  if let Err(e) = utils::logger::init(&console_view) {
    eprintln!("Logger already installed: {}", e);
  }

  let config = load_settings();
  let state = Rc::new(RefCell::new(AppState::new(config)));

  let window = ApplicationWindow::builder()
    .application(app)
    .title("Phonon Chain - Diatomic Lattice Dispersion")
    .default_width(900)
    .default_height(900)
    .build();

  let root_vbox = GtkBox::new(Orientation::Vertical, 6);
  root_vbox.set_margin_top(8);
  root_vbox.set_margin_bottom(8);
  root_vbox.set_margin_start(8);
  root_vbox.set_margin_end(8);
  window.set_child(Some(&root_vbox));

  // 1. Animated chains
  let optical_area = chain_area(state.clone(), true);
  let acoustic_area = chain_area(state.clone(), false);

  let optical_frame = Frame::new(Some("Optical mode"));
  optical_frame.set_child(Some(&optical_area));
  let acoustic_frame = Frame::new(Some("Acoustic mode"));
  acoustic_frame.set_child(Some(&acoustic_area));

  // 2. Dispersion plot
  let plot_area = DrawingArea::new();
  plot_area.set_hexpand(true);
  plot_area.set_vexpand(true);
  plot_area.set_content_height(360);

  let s = state.clone();
  plot_area.set_draw_func(move |_, cr, w, h| {
    let mut st = s.borrow_mut();
    match rendering::draw_plot(cr, &st.board, w as u32, h as u32) {
      Ok(area) => st.board.set_plot_area(area),
      Err(e) => log::warn!("Plot redraw failed: {}", e),
    }
  });

  let plot_frame = Frame::new(Some("Dispersion (click to choose k)"));
  plot_frame.set_child(Some(&plot_area));

  // 3. Buttons
  let button_row = GtkBox::new(Orientation::Horizontal, 10);
  let subtract_button = Button::with_label("− RLV");
  let add_button = Button::with_label("+ RLV");
  let export_button = Button::with_label("Export Plot…");
  button_row.append(&subtract_button);
  button_row.append(&add_button);
  button_row.append(&export_button);

  // 4. Console
  let console_frame = Frame::new(None);
  let scroll_win = ScrolledWindow::builder()
    .min_content_height(130)
    .child(&console_view)
    .build();
  console_frame.set_child(Some(&scroll_win));

  root_vbox.append(&optical_frame);
  root_vbox.append(&acoustic_frame);
  root_vbox.append(&plot_frame);
  root_vbox.append(&button_row);
  root_vbox.append(&console_frame);

  // --- Setup Logic ---
  let scheduler = Rc::new(RefCell::new(GtkFrameScheduler::new(
    &window,
    Rc::downgrade(&state),
    vec![optical_area, acoustic_area],
  )));

  let controls = Controls { plot_area, add_button, subtract_button, export_button };
  setup_interactions(&window, state.clone(), scheduler.clone(), &controls);

  {
    let mut st = state.borrow_mut();
    st.start_animation(&mut *scheduler.borrow_mut(), ui::scheduler::now_seconds());
    log::info!("{}", utils::report::mode_summary(&st.params));
  }

  window.present();
}
