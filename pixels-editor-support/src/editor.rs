use life_grid::{EditableWorld, Loc};
use log::{debug, info, trace, warn};
use std::fmt;
use std::mem;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Idle,
    Running,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Idle => write!(f, "idle"),
            Mode::Running => write!(f, "running"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    Randomize,
    Blank,
    GeneratePattern,
    SingleStep,
}

/// What a held mouse button does to the cells under the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Brush {
    Spawn,
    Kill,
}

impl Brush {
    pub fn target_alive(self) -> bool {
        match self {
            Brush::Spawn => true,
            Brush::Kill => false,
        }
    }
}

/// Tiles that need repainting before the next frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Redraw {
    #[default]
    Nothing,
    Cells(Vec<Loc>),
    Full,
}

impl Redraw {
    pub fn is_pending(&self) -> bool {
        !matches!(self, Redraw::Nothing)
    }

    fn add_cells<I>(&mut self, locs: I)
    where
        I: IntoIterator<Item = Loc>,
    {
        match self {
            Redraw::Full => {}
            Redraw::Cells(pending) => pending.extend(locs),
            Redraw::Nothing => {
                let locs: Vec<Loc> = locs.into_iter().collect();
                if !locs.is_empty() {
                    *self = Redraw::Cells(locs);
                }
            }
        }
    }

    fn request_full(&mut self) {
        *self = Redraw::Full;
    }
}

/// Everything the event loop mutates: the world, the run mode, the pattern stamped by
/// [`Command::GeneratePattern`], the held brush, and the tiles waiting to be repainted.
#[derive(Debug)]
pub struct Editor<W: EditableWorld> {
    world: W,
    pattern: Vec<Loc>,
    mode: Mode,
    brush: Option<Brush>,
    generation: u64,
    redraw: Redraw,
}

impl<W: EditableWorld> Editor<W> {
    pub fn new(world: W, pattern: Vec<Loc>) -> Self {
        Self {
            world,
            pattern,
            mode: Mode::Idle,
            brush: None,
            generation: 0,
            redraw: Redraw::Full,
        }
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn needs_redraw(&self) -> bool {
        self.redraw.is_pending()
    }

    pub fn take_redraw(&mut self) -> Redraw {
        mem::take(&mut self.redraw)
    }

    pub fn apply(&mut self, command: Command) {
        debug!("Command {command:?} in {} mode", self.mode);
        match command {
            Command::Start => {
                self.set_mode(Mode::Running);
                return;
            }
            Command::Stop => {}
            Command::Randomize => {
                self.world.randomize();
                self.generation = 0;
                self.redraw.request_full();
                info!("Randomized the grid");
            }
            Command::Blank => {
                self.world.clear();
                self.generation = 0;
                self.redraw.request_full();
                info!("Blanked the grid");
            }
            Command::GeneratePattern => match self.world.apply_pattern(&self.pattern) {
                Ok(()) => {
                    self.redraw.request_full();
                    info!("Stamped a {}-cell pattern", self.pattern.len());
                }
                Err(err) => warn!("Pattern rejected: {err}"),
            },
            Command::SingleStep => self.step(),
        }
        self.set_mode(Mode::Idle);
    }

    /// Steps once if running. Returns whether a step happened.
    pub fn tick(&mut self) -> bool {
        if self.mode == Mode::Running {
            self.step();
            true
        } else {
            false
        }
    }

    pub fn press(&mut self, brush: Brush, loc: Option<Loc>) {
        self.brush = Some(brush);
        if let Some(loc) = loc {
            self.paint(loc, brush);
        }
    }

    pub fn drag(&mut self, loc: Option<Loc>) {
        if let Some(brush) = self.brush
            && let Some(loc) = loc
        {
            self.paint(loc, brush);
        }
    }

    pub fn release(&mut self, brush: Brush) {
        if self.brush == Some(brush) {
            self.brush = None;
        }
    }

    fn paint(&mut self, loc: Loc, brush: Brush) {
        match self.world.paint(loc, brush.target_alive()) {
            Ok(true) => {
                trace!("Painted ({}, {}) with {brush:?}", loc.row, loc.col);
                self.redraw.add_cells([loc]);
            }
            Ok(false) => {}
            Err(err) => debug!("Ignoring paint: {err}"),
        }
    }

    fn step(&mut self) {
        let changed = self.world.update();
        self.generation += 1;
        debug!(
            "Generation {}: {} cells changed",
            self.generation,
            changed.len()
        );
        self.redraw.add_cells(changed);
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            info!("Mode {} -> {mode} at generation {}", self.mode, self.generation);
            self.mode = mode;
        }
    }
}
