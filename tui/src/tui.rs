//! The text-based UI.

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use rlifesim_lib::{Coord, Engine, Scheduler, State};
use std::{
    io::{self, Stdout, Write},
    time::{Duration, Instant},
};

/// Each cell is drawn two columns wide, so that the board is roughly
/// square on screen. A mouse click anywhere in a cell toggles it.
const CELL_WIDTH: u16 = 2;

/// How long to wait for input when the scheduler is stopped.
const IDLE_POLL: Duration = Duration::from_millis(200);

/// Bounds for the `+` / `-` pacing keys.
const MIN_INTERVAL: Duration = Duration::from_millis(10);
const MAX_INTERVAL: Duration = Duration::from_millis(2000);

/// The terminal window: the board between a status bar at the top and a
/// key help at the bottom.
struct BoardWindow {
    world: Box<dyn Engine>,
    scheduler: Scheduler,
    saturation: f64,
    cursor: Coord,
    out: Stdout,
}

/// Runs the TUI until the user quits.
pub(crate) fn run(
    world: Box<dyn Engine>,
    interval: Duration,
    saturation: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut win = BoardWindow::new(world, interval, saturation)?;
    let res = win.event_loop();
    win.teardown()?;
    res
}

impl BoardWindow {
    fn new(
        world: Box<dyn Engine>,
        interval: Duration,
        saturation: f64,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let scheduler = Scheduler::new(interval)?;
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, EnableMouseCapture, Hide)?;
        Ok(Self {
            world,
            scheduler,
            saturation,
            cursor: (0, 0),
            out,
        })
    }

    fn teardown(&mut self) -> io::Result<()> {
        execute!(self.out, Show, DisableMouseCapture, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()
    }

    fn event_loop(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.redraw()?;
        loop {
            let timeout = self
                .scheduler
                .idle_time(Instant::now())
                .unwrap_or(IDLE_POLL);
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(KeyEvent {
                        code,
                        kind: KeyEventKind::Press,
                        ..
                    }) => {
                        if !self.handle_key(code)? {
                            return Ok(());
                        }
                    }
                    Event::Mouse(MouseEvent {
                        kind: MouseEventKind::Down(MouseButton::Left),
                        column,
                        row,
                        ..
                    }) => self.click(column, row)?,
                    Event::Resize(..) => self.redraw()?,
                    _ => (),
                }
            }
            if let Some(changed) = self.scheduler.tick(self.world.as_mut(), Instant::now())? {
                self.paint_cells(&changed)?;
                self.top_bar()?;
                self.out.flush()?;
            }
        }
    }

    /// Handles one key press. Returns `false` when the user quits.
    fn handle_key(&mut self, code: KeyCode) -> Result<bool, Box<dyn std::error::Error>> {
        match code {
            KeyCode::Char('q') => return Ok(false),
            KeyCode::Left => self.move_cursor(-1, 0)?,
            KeyCode::Right => self.move_cursor(1, 0)?,
            KeyCode::Up => self.move_cursor(0, -1)?,
            KeyCode::Down => self.move_cursor(0, 1)?,
            KeyCode::Enter | KeyCode::Char('t') => {
                self.world.toggle(self.cursor)?;
                self.paint_cells(&[self.cursor])?;
                self.top_bar()?;
                self.out.flush()?;
            }
            KeyCode::Char(' ') => {
                if self.scheduler.is_running() {
                    self.scheduler.stop();
                } else {
                    self.scheduler.start(Instant::now());
                }
                self.top_bar()?;
                self.out.flush()?;
            }
            KeyCode::Char('s') => {
                if !self.scheduler.is_running() {
                    let changed = self.world.advance()?;
                    self.paint_cells(&changed)?;
                    self.top_bar()?;
                    self.out.flush()?;
                }
            }
            KeyCode::Char('r') => {
                let changed = self.world.randomize(self.saturation)?;
                self.paint_cells(&changed)?;
                self.top_bar()?;
                self.out.flush()?;
            }
            KeyCode::Char('c') => {
                let changed = self.world.clear();
                self.paint_cells(&changed)?;
                self.top_bar()?;
                self.out.flush()?;
            }
            KeyCode::Char('+') => {
                let interval = (self.scheduler.interval() / 2).max(MIN_INTERVAL);
                self.scheduler.set_interval(interval)?;
                self.top_bar()?;
                self.out.flush()?;
            }
            KeyCode::Char('-') => {
                let interval = (self.scheduler.interval() * 2).min(MAX_INTERVAL);
                self.scheduler.set_interval(interval)?;
                self.top_bar()?;
                self.out.flush()?;
            }
            _ => (),
        }
        Ok(true)
    }

    /// Moves the cursor, clamped to the board, repainting the two cells
    /// it leaves and enters.
    fn move_cursor(&mut self, dx: i32, dy: i32) -> io::Result<()> {
        let old = self.cursor;
        let (x, y) = old;
        self.cursor = (
            (x + dx).clamp(0, self.world.width() - 1),
            (y + dy).clamp(0, self.world.height() - 1),
        );
        if self.cursor != old {
            self.paint_cells(&[old, self.cursor])?;
            self.out.flush()?;
        }
        Ok(())
    }

    /// Toggles the cell under a mouse click.
    ///
    /// The board starts one row below the status bar, and every cell is
    /// `CELL_WIDTH` columns wide.
    fn click(&mut self, column: u16, row: u16) -> Result<(), Box<dyn std::error::Error>> {
        if row == 0 {
            return Ok(());
        }
        let coord = ((column / CELL_WIDTH) as i32, (row - 1) as i32);
        if coord.0 < self.world.width() && coord.1 < self.world.height() {
            self.world.toggle(coord)?;
            let old = self.cursor;
            self.cursor = coord;
            self.paint_cells(&[old, coord])?;
            self.top_bar()?;
            self.out.flush()?;
        }
        Ok(())
    }

    /// Repaints only the given cells.
    fn paint_cells(&mut self, cells: &[Coord]) -> io::Result<()> {
        for &coord in cells {
            self.paint_cell(coord)?;
        }
        Ok(())
    }

    fn paint_cell(&mut self, coord: Coord) -> io::Result<()> {
        let (x, y) = coord;
        let alive = self.world.get_cell_state(coord) == Ok(State::Alive);
        let glyph = if alive { "██" } else { "  " };
        queue!(
            self.out,
            MoveTo(x as u16 * CELL_WIDTH, y as u16 + 1)
        )?;
        if coord == self.cursor {
            queue!(
                self.out,
                SetAttribute(Attribute::Reverse),
                Print(glyph),
                SetAttribute(Attribute::Reset)
            )?;
        } else {
            queue!(self.out, Print(glyph))?;
        }
        Ok(())
    }

    fn top_bar(&mut self) -> io::Result<()> {
        let status = if self.scheduler.is_running() {
            "Running"
        } else {
            "Paused"
        };
        let bar = format!(
            "Gen: {}  Cells: {}  Board: {}x{}  Interval: {:?}  {}",
            self.world.generation(),
            self.world.population(),
            self.world.width(),
            self.world.height(),
            self.scheduler.interval(),
            status
        );
        queue!(
            self.out,
            MoveTo(0, 0),
            Clear(ClearType::CurrentLine),
            SetAttribute(Attribute::Reverse),
            Print(bar),
            SetAttribute(Attribute::Reset)
        )
    }

    fn bottom_bar(&mut self) -> io::Result<()> {
        let (_, rows) = terminal::size()?;
        queue!(
            self.out,
            MoveTo(0, rows.saturating_sub(1)),
            Clear(ClearType::CurrentLine),
            SetAttribute(Attribute::Reverse),
            Print("[space] start/stop  [s] step  [t] toggle  [r] randomize  [c] clear  [+/-] speed  [q] quit"),
            SetAttribute(Attribute::Reset)
        )
    }

    /// Repaints everything: bars and the whole board.
    fn redraw(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))?;
        for y in 0..self.world.height() {
            for x in 0..self.world.width() {
                self.paint_cell((x, y))?;
            }
        }
        self.top_bar()?;
        self.bottom_bar()?;
        self.out.flush()
    }
}
