//! Fixed-rate polling loop: scan input, apply, render both surfaces,
//! present, wait for the next tick.

use core::fmt;

use log::{info, warn};

use crate::{
    app::{App, TickResult},
    input::{ButtonSet, InputSource},
    platform::{ContentLauncher, DisplaySurfaces, FramePacer},
};

/// Fatal loop errors. Only display initialization can stop the loop early.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RunError<DisplayErr> {
    Init(DisplayErr),
}

impl<DisplayErr: fmt::Debug> fmt::Display for RunError<DisplayErr> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(err) => write!(f, "display initialization failed: {err:?}"),
        }
    }
}

/// Counters collected over one run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RunSummary {
    pub ticks: u64,
    pub state_changes: u64,
    pub launches: u32,
    pub input_errors: u64,
    pub present_errors: u64,
}

/// Runs the loop until START is pressed.
///
/// The iteration that sees START still renders and presents; no tick wait
/// follows it.
pub fn run<IN, D, P, L>(
    app: &mut App,
    input: &mut IN,
    display: &mut D,
    pacer: &mut P,
    launcher: &mut L,
) -> Result<RunSummary, RunError<D::Error>>
where
    IN: InputSource,
    IN::Error: fmt::Debug,
    D: DisplaySurfaces,
    D::Error: fmt::Debug,
    P: FramePacer,
    L: ContentLauncher,
{
    display.init().map_err(RunError::Init)?;
    info!("loop: display ready mode={:?}", app.mode());

    let mut summary = RunSummary::default();
    loop {
        let result = step(app, input, display, launcher, &mut summary);
        if result == TickResult::Exit {
            break;
        }
        pacer.wait_for_next_tick();
    }

    summary.launches = app.launches();
    info!(
        "loop: exit ticks={} state_changes={} launches={}",
        summary.ticks, summary.state_changes, summary.launches
    );
    Ok(summary)
}

/// One loop iteration without the tick wait.
pub fn step<IN, D, L>(
    app: &mut App,
    input: &mut IN,
    display: &mut D,
    launcher: &mut L,
    summary: &mut RunSummary,
) -> TickResult
where
    IN: InputSource,
    IN::Error: fmt::Debug,
    D: DisplaySurfaces,
    D::Error: fmt::Debug,
    L: ContentLauncher,
{
    summary.ticks = summary.ticks.saturating_add(1);

    let pressed = match input.scan() {
        Ok(()) => input.pressed_this_tick(),
        Err(err) => {
            warn!("input: scan failed: {:?}", err);
            summary.input_errors = summary.input_errors.saturating_add(1);
            ButtonSet::EMPTY
        }
    };

    let result = app.apply(pressed, launcher);
    if result == TickResult::RenderRequested {
        summary.state_changes = summary.state_changes.saturating_add(1);
    }

    app.render(display);
    if let Err(err) = display.present() {
        warn!("display: present failed: {:?}", err);
        summary.present_errors = summary.present_errors.saturating_add(1);
    }

    result
}
