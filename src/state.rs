// src/state.rs

use crate::config::Config;
use crate::model::chain::AnimatedChain;
use crate::model::lattice::LatticeParameters;
use crate::physics::brillouin::Direction;
use crate::physics::dispersion::Branch;
use crate::rendering::plot::DispersionBoard;
use crate::rendering::scene::ChainScene;
use crate::rendering::surface::FrameScheduler;
use crate::simulation::animation::{AnimationClock, FrameOutcome};
use crate::ui::controller;
use crate::ui::navigator::{self, DispersionView};
use crate::utils::report;

/// Everything one window session owns. Shared with GTK handlers as `Rc<RefCell<AppState>>`.
pub struct AppState {
  pub config: Config,
  pub params: LatticeParameters,
  pub optical: AnimatedChain<ChainScene>,
  pub acoustic: AnimatedChain<ChainScene>,
  pub board: DispersionBoard,
  pub view: DispersionView,
  pub clock: AnimationClock,
  // Only log the first skipped frame of a run
  skip_logged: bool,
}

impl AppState {
  pub fn new(config: Config) -> Self {
    let params = match config.lattice.to_parameters() {
      Ok(p) => p,
      Err(e) => {
        log::warn!("Invalid lattice settings ({}). Using defaults.", e);
        LatticeParameters::default()
      }
    };

    let scene = || ChainScene::new(params.chain_length(), config.style.canvas_height_for(params.spacing));
    let optical = AnimatedChain::build(Branch::Optical, &params, &config.style, scene());
    let acoustic = AnimatedChain::build(Branch::Acoustic, &params, &config.style, scene());

    let mut board = DispersionBoard::new(navigator::initial_bounding_box(&params), config.plot.clone());
    let view = navigator::install(&params, &mut board);

    Self {
      config,
      params,
      optical,
      acoustic,
      board,
      view,
      clock: AnimationClock::new(),
      skip_logged: false,
    }
  }

  pub fn start_animation<S: FrameScheduler>(&mut self, scheduler: &mut S, now: f64) {
    self.clock.restart(scheduler, now);
    self.skip_logged = false;
  }

  pub fn stop_animation<S: FrameScheduler>(&mut self, scheduler: &mut S) {
    self.clock.stop(scheduler);
  }

  /// Frame callback body: moves both chains for the time `now`.
  pub fn advance_frame(&mut self, now: f64) -> FrameOutcome {
    let outcome = self.clock.tick(now, &self.params, &mut self.optical, &mut self.acoustic);
    if let FrameOutcome::Skipped(e) = outcome {
      if !self.skip_logged {
        log::debug!("Skipping frames: {}", e);
        self.skip_logged = true;
      }
    }
    outcome
  }

  /// "+ RLV" / "- RLV": step the zone, then restart both chains at the new q.
  pub fn shift_zone<S: FrameScheduler>(&mut self, direction: Direction, scheduler: &mut S, now: f64) {
    navigator::shift_by_reciprocal_lattice_vector(&mut self.params, &mut self.view, &mut self.board, direction);
    self.start_animation(scheduler, now);
    log::info!("{}", report::mode_summary(&self.params));
  }

  /// Press on the plot widget at pixel (x, y). Returns false when the press was ignored.
  pub fn press_plot<S: FrameScheduler>(&mut self, x: f64, y: f64, scheduler: &mut S, now: f64) -> bool {
    let moved = controller::handle_plot_press(
      &mut self.params,
      &mut self.view,
      &mut self.board,
      &mut self.clock,
      scheduler,
      [x, y],
      now,
    );
    if moved.is_some() {
      self.skip_logged = false;
      log::info!("{}", report::mode_summary(&self.params));
    }
    moved.is_some()
  }
}
