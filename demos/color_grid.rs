//! Reproduces the stock playground run: 31 randomly colored cells laid out
//! two per row in a 300-point-wide container, printed as solved geometry
//! with a palette swatch per cell.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use crossterm::queue;
use crossterm::style::{Print, ResetColor, SetForegroundColor};

use flowgrid_mvp::{
    CellSupply, FileSink, FlowLayout, GridParams, LayoutMetrics, Logger, Palette, Result,
    SplitMixPicker,
};

const CONTAINER_WIDTH: f32 = 300.0;
const CELL_COUNT: usize = 31;

fn main() -> Result<()> {
    let started = Instant::now();
    let logger = Logger::new(FileSink::new("color_grid.log", 64 * 1024)?);
    let metrics = Arc::new(Mutex::new(LayoutMetrics::new()));

    let params = GridParams::new(2, 10.0, 10.0, 10.0);
    let layout = FlowLayout::new(params)
        .with_logger(logger.clone())
        .with_metrics(Arc::clone(&metrics));

    let frames = layout.solve(CONTAINER_WIDTH, CELL_COUNT);
    let content = layout.content_size(CONTAINER_WIDTH, CELL_COUNT);
    let mut supply = CellSupply::new(
        CELL_COUNT,
        Palette::standard(),
        SplitMixPicker::from_entropy(),
    );

    let mut stdout = io::stdout();
    for frame in &frames {
        let appearance = supply.appearance(frame.index);
        queue!(
            stdout,
            SetForegroundColor(appearance.background),
            Print("■ "),
            ResetColor,
            Print(format!(
                "cell {:>2}  x {:>6.1}  y {:>6.1}  w {:>5.1}  h {:>5.1}\n",
                frame.index, frame.rect.x, frame.rect.y, frame.rect.width, frame.rect.height,
            )),
        )?;
    }
    queue!(
        stdout,
        Print(format!(
            "content {:.0} x {:.1} ({} cells, {} per row)\n",
            content.width,
            content.height,
            frames.len(),
            params.column_count(),
        )),
    )?;
    stdout.flush()?;

    let snapshot = metrics
        .lock()
        .expect("layout metrics mutex poisoned")
        .snapshot(started.elapsed());
    logger.log_event(snapshot.to_log_event("flowgrid::demo"))?;

    Ok(())
}
